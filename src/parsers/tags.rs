use std::collections::HashMap;

/// Number of tags kept per record
pub const MAX_TAGS: usize = 5;

/// Shortest token that counts as a tag candidate
const MIN_TOKEN_CHARS: usize = 2;

fn is_tag_char(c: char) -> bool {
    matches!(c, '가'..='힣' | 'a'..='z')
}

/// Split lowercased text into runs of Hangul syllables / ASCII lowercase letters.
///
/// Runs shorter than [`MIN_TOKEN_CHARS`] are dropped; everything else is a separator.
fn tokenize(lowered: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    let mut run_chars = 0;

    for (idx, c) in lowered.char_indices() {
        if is_tag_char(c) {
            if start.is_none() {
                start = Some(idx);
                run_chars = 0;
            }
            run_chars += 1;
        } else if let Some(s) = start.take()
            && run_chars >= MIN_TOKEN_CHARS
        {
            tokens.push(&lowered[s..idx]);
        }
    }

    if let Some(s) = start
        && run_chars >= MIN_TOKEN_CHARS
    {
        tokens.push(&lowered[s..]);
    }

    tokens
}

/// Most frequent tokens first, ties in first-seen order, at most [`MAX_TAGS`]
pub fn extract_tags(content: &str) -> Vec<String> {
    let lowered = content.to_lowercase();
    let tokens = tokenize(&lowered);

    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        match positions.get(token) {
            Some(&pos) => order[pos].1 += 1,
            None => {
                positions.insert(token, order.len());
                order.push((token, 1));
            }
        }
    }

    // sort_by is stable, so equal counts keep first-seen order
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.into_iter().take(MAX_TAGS).map(|(token, _)| token.to_string()).collect()
}
