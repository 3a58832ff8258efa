use serde::Serialize;

use super::tokenizer::tokenize;

/// A run of display text, flagged when it matched a query token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self { text, matched: false }
    }

    fn hit(text: &'a str) -> Self {
        Self { text, matched: true }
    }
}

/// Split `text` around case-insensitive occurrences of the query's tokens.
///
/// Tokens are tried in query order at each position, leftmost match wins.
/// Concatenating the segments yields `text` unchanged.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return vec![Segment::plain(text)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        match tokens.iter().find_map(|t| match_len(rest, t)) {
            Some(len) => {
                if plain_start < pos {
                    segments.push(Segment::plain(&text[plain_start..pos]));
                }
                segments.push(Segment::hit(&text[pos..pos + len]));
                pos += len;
                plain_start = pos;
            }
            None => pos += rest.chars().next().map_or(1, char::len_utf8),
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }
    segments
}

/// Byte length of the prefix of `haystack` that lower-cases to `needle`.
fn match_len(haystack: &str, needle: &str) -> Option<usize> {
    let mut expected = needle.chars().peekable();
    for (offset, ch) in haystack.char_indices() {
        for lower in ch.to_lowercase() {
            if expected.next() != Some(lower) {
                return None;
            }
        }
        if expected.peek().is_none() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}
