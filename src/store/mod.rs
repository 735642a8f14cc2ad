//! In-memory conversation store
//!
//! The store is owned by whoever composes the application (a CLI command or the TUI
//! `App`) and lent out by reference to search and presentation. It only ever grows:
//! [`ConversationStore::append`] concatenates, and nothing edits or removes a record.

use tracing::debug;

use crate::models::{AiSource, ConversationRecord};

#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    records: Vec<ConversationRecord>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add records after all existing ones, keeping the input order
    pub fn append(&mut self, records: impl IntoIterator<Item = ConversationRecord>) {
        let before = self.records.len();
        self.records.extend(records);
        debug!(added = self.records.len() - before, total = self.records.len(), "store appended");
    }

    pub fn records(&self) -> &[ConversationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with the given id
    pub fn get(&self, id: &str) -> Option<&ConversationRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Number of records ingested from a source (dashboard counts)
    pub fn count_by_source(&self, source: AiSource) -> usize {
        self.records.iter().filter(|r| r.source() == source).count()
    }
}

impl<'a> IntoIterator for &'a ConversationStore {
    type Item = &'a ConversationRecord;
    type IntoIter = std::slice::Iter<'a, ConversationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
