//! Input-shape classification
//!
//! The engine never parses markup; it only decides whether the pasted text
//! is worth running the rule tables over. Unrecognized input short-circuits
//! to a single warning finding.

use crate::patterns::{contains_any, HTML_MARKERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    HtmlLike,
    CssLike,
    Unrecognized,
}

/// Shape gate for accessibility analysis: any common HTML marker counts.
pub fn classify_for_accessibility(text_lower: &str) -> InputShape {
    if contains_any(text_lower, HTML_MARKERS) {
        InputShape::HtmlLike
    } else {
        InputShape::Unrecognized
    }
}

/// Shape gate for design analysis: a full document skeleton counts as HTML,
/// a brace pair without one counts as bare CSS.
pub fn classify_for_design(text_lower: &str) -> InputShape {
    if text_lower.contains("<!doctype html>")
        || text_lower.contains("<html")
        || (text_lower.contains("<body") && text_lower.contains("<head"))
    {
        InputShape::HtmlLike
    } else if text_lower.contains('{') && text_lower.contains('}') {
        InputShape::CssLike
    } else {
        InputShape::Unrecognized
    }
}
