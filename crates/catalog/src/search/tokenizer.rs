/// True when the query has nothing but whitespace ("no query").
pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// Lower-case the query and split it on runs of whitespace.
///
/// Repeated tokens are kept: each occurrence contributes to the score again.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
