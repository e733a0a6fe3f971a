//! Plain-text helpers used by the ingestion stages

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Sentence fragment starting at a modal or copular verb and running to the next period.
static CLAIM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:should|must|is|are|will)\b.*?\.").expect("claim pattern is valid")
});

/// Candidate claim sentences from `text`, at most `limit` of them
///
/// Fragments matching the claim pattern are preferred. When nothing
/// matches, the first non-empty period-separated sentences are used.
pub fn extract_claims(text: &str, limit: usize) -> Vec<String> {
    let matches: Vec<String> = CLAIM_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .take(limit)
        .collect();
    if !matches.is_empty() {
        return matches;
    }

    text.split('.')
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// First `max_chars` characters of `text`, or `None` if it is empty
pub fn summarize(text: &str, max_chars: usize) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    Some(text.chars().take(max_chars).collect())
}

/// File name of `path`, or `untitled` when it has none
pub fn document_title(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "untitled".to_string())
}
