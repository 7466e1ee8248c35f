//! Free-text normalization

use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;

/// Anything that is not a word character, whitespace, or `-,.'`
static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s,.'-]").expect("hardcoded regex pattern is valid"));

/// Normalizes scraped text for export
///
/// Characters outside the whitelist are dropped first, then whitespace runs
/// collapse to a single space, so `clean_text(clean_text(s)) == clean_text(s)`.
///
/// # Example
///
/// ```
/// use sumi_shelf::extract::clean_text;
///
/// assert_eq!(clean_text("  Men's  Tee \n (Black) & more™ "), "Men's Tee Black more");
/// ```
pub fn clean_text(text: &str) -> String {
    let stripped = DISALLOWED_CHARS.replace_all(text, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Concatenated text content of an element
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Truncates to at most `max_chars` characters, never splitting a code point
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_text("a\n\n  b\t c  "), "a b c");
    }

    #[test]
    fn test_keeps_whitelisted_punctuation() {
        assert_eq!(clean_text("Men's T-Shirt, size M."), "Men's T-Shirt, size M.");
    }

    #[test]
    fn test_strips_symbols() {
        assert_eq!(clean_text("Rs. 1,200 | ★ New! (50% off)"), "Rs. 1,200 New 50 off");
    }

    #[test]
    fn test_keeps_unicode_letters() {
        assert_eq!(clean_text("Café  Kurta"), "Café Kurta");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \n\t "), "");
        assert_eq!(clean_text("★★★"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "  Men's   Classic Black T-Shirt ",
            "a & b",
            "x (y) [z] {w}",
            "100% Cotton — soft\u{a0}feel",
            "Ladies' Linen Dress, 2-pack.",
        ];
        for sample in samples {
            let once = clean_text(sample);
            assert_eq!(clean_text(&once), once, "{:?}", sample);
        }
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("ééé", 2), "éé");
    }
}
