//! Substring and occurrence-count helpers shared by the rule modules
//!
//! All rules operate on a lowercased copy of the source text; nothing here
//! parses markup into a tree.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `class="…"` / `class='…'` attribute occurrences
    static ref CLASS_ATTR: Regex = Regex::new(r#"class=["'][^"']*["']"#).unwrap();
    /// `id="…"` / `id='…'` attribute occurrences
    static ref ID_ATTR: Regex = Regex::new(r#"id=["'][^"']*["']"#).unwrap();
}

/// Markers that make text HTML-like for accessibility analysis
pub const HTML_MARKERS: &[&str] = &["<!doctype html>", "<html", "<body", "<div"];

/// Count case-insensitive occurrences of a literal substring.
/// `needle` must already be lowercase.
pub fn count_occurrences(text_lower: &str, needle: &str) -> usize {
    text_lower.matches(needle).count()
}

/// Count `class` attribute occurrences in the lowercased text
pub fn count_class_attributes(text_lower: &str) -> usize {
    CLASS_ATTR.find_iter(text_lower).count()
}

/// Count `id` attribute occurrences in the lowercased text
pub fn count_id_attributes(text_lower: &str) -> usize {
    ID_ATTR.find_iter(text_lower).count()
}

/// True if any marker appears in the lowercased text
pub fn contains_any(text_lower: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text_lower.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_literal_occurrences() {
        let text = "color: red; background-color: blue; color: green;";
        // "color:" also matches inside "background-color:"
        assert_eq!(count_occurrences(text, "color:"), 3);
        assert_eq!(count_occurrences(text, "background-color:"), 1);
    }

    #[test]
    fn test_counts_class_attributes() {
        let text = r#"<div class="a"><span class='b c'></span><p id="x"></p>"#;
        assert_eq!(count_class_attributes(text), 2);
        assert_eq!(count_id_attributes(text), 1);
    }

    #[test]
    fn test_contains_any_marker() {
        assert!(contains_any("<div>hello</div>", HTML_MARKERS));
        assert!(!contains_any("just plain text", HTML_MARKERS));
    }
}
