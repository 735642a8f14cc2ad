//! Linear substring search over the conversation store
//!
//! Matching rules:
//! - Empty or whitespace-only query matches nothing (not everything)
//! - Otherwise a record matches if the lowercased query is a substring of the lowercased
//!   title, content, or any tag
//! - Results keep store order; there is no relevance ranking

use crate::models::ConversationRecord;
use crate::store::ConversationStore;

/// Maximum query length accepted from interactive input
pub const MAX_QUERY_CHARS: usize = 256;

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Case-insensitive match of an already-lowercased query against one record
pub fn matches_record(record: &ConversationRecord, query_lower: &str) -> bool {
    contains_folded(record.title(), query_lower)
        || contains_folded(record.content(), query_lower)
        || record.tags().iter().any(|tag| contains_folded(tag, query_lower))
}

/// Records matching `query`, in store order
pub fn search<'a>(store: &'a ConversationStore, query: &str) -> Vec<&'a ConversationRecord> {
    let records = store.records();
    search_positions(store, query).into_iter().map(|idx| &records[idx]).collect()
}

/// Store positions of the records matching `query`, ascending
pub fn search_positions(store: &ConversationStore, query: &str) -> Vec<usize> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    store
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_record(record, &query_lower))
        .map(|(idx, _)| idx)
        .collect()
}
