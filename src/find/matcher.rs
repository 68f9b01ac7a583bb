//! Title and "within" query matching with a fuzzy token fallback.

use crate::domain::Note;

/// Tokens shorter than this never fuzzy-match.
const MIN_FUZZY_TOKEN_LEN: usize = 3;

/// A candidate word may be at most this many characters longer than the token.
const MAX_FUZZY_EXTRA_CHARS: usize = 3;

/// A normalized two-part query.
///
/// Both parts are trimmed and lower-cased on construction. An empty
/// `within` part means only the title is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    title: String,
    within: String,
}

impl Query {
    pub fn new(title: &str, within: &str) -> Self {
        Self {
            title: normalize(title),
            within: normalize(within),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn within(&self) -> &str {
        &self.within
    }
}

/// Trims and lower-cases a query string.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Returns true if `note` satisfies both parts of `query`.
///
/// The title must contain the title query as a substring. If a within
/// query is set, the note's searchable text must satisfy [`query_matches`].
pub fn matches(note: &Note, query: &Query) -> bool {
    if !note.title().to_lowercase().contains(query.title()) {
        return false;
    }
    if query.within().is_empty() {
        return true;
    }
    query_matches(note.searchable_text(), query.within())
}

/// Tests a free-form query against `text`, case-insensitively.
///
/// The whole query is tried as a substring first. Otherwise every
/// whitespace-separated token must either be a substring of the text or
/// fuzzy-match one of its words (see [`fuzzy_token_match`]).
pub fn query_matches(text: &str, query: &str) -> bool {
    let query = normalize(query);
    if query.is_empty() {
        return true;
    }

    let text = text.to_lowercase();
    if text.contains(&query) {
        return true;
    }

    query
        .split_whitespace()
        .all(|token| text.contains(token) || fuzzy_token_match(token, &text))
}

/// Returns true if `token` is a fuzzy match for some word of `text`.
///
/// A word qualifies when the token has at least three characters, the word
/// is at least as long as the token and at most three characters longer,
/// both start with the same character, and the token is a subsequence of
/// the word. Both inputs are expected to be lower-cased already.
pub fn fuzzy_token_match(token: &str, text: &str) -> bool {
    let token_len = token.chars().count();
    if token_len < MIN_FUZZY_TOKEN_LEN {
        return false;
    }
    let Some(first) = token.chars().next() else {
        return false;
    };

    text.split_whitespace().any(|word| {
        let word_len = word.chars().count();
        word_len >= token_len
            && word_len - token_len <= MAX_FUZZY_EXTRA_CHARS
            && word.starts_with(first)
            && is_subsequence(token, word)
    })
}

/// Returns true if every char of `needle` appears in `haystack` in order.
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut needle = needle.chars().peekable();
    for c in haystack.chars() {
        match needle.peek() {
            None => break,
            Some(&n) if n == c => {
                needle.next();
            }
            Some(_) => {}
        }
    }
    needle.peek().is_none()
}
