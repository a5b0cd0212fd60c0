//! Title extraction from tool HTML.

use std::sync::LazyLock;

use regex::Regex;

/// `<title>` or `<title attr=...>`, but not look-alikes such as `<titlebar>`
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title(?:\s[^>]*)?>(.*?)</title\s*>").expect("title regex is valid")
});

/// Text of the first `<title>` element, whitespace collapsed.
///
/// Tag matching is case-insensitive and the title may span lines.
/// Returns None when there is no title or it is blank.
pub fn extract_title(html: &str) -> Option<String> {
    let captures = TITLE_RE.captures(html)?;
    let title = captures[1].split_whitespace().collect::<Vec<_>>().join(" ");

    if title.is_empty() { None } else { Some(title) }
}

/// Title derived from a file stem: `json-diff` -> `Json Diff`
pub fn fallback_title(stem: &str) -> String {
    stem.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
