//! Semantic HTML checks

use super::{apply_rules, Rule};
use shared_types::{ComplianceLevel, Finding, Severity};

const RULES: &[Rule] = &[
    Rule::new(
        |t| !t.contains("<h1") && !t.contains("<h2"),
        Severity::Suggestion,
        "No heading elements (h1-h6) detected. Use proper headings to establish page structure and hierarchy.",
    ),
    Rule::new(
        uses_generic_structural_divs,
        Severity::Suggestion,
        "Generic divs used for structural elements. Consider using semantic HTML5 elements like <header>, <footer>, <nav>, <main>, and <section>.",
    ),
    Rule::new(
        |t| t.contains("<table") && !t.contains("<th"),
        Severity::Suggestion,
        "Table missing header cells. Use <th> elements for table headers with appropriate scope attributes.",
    ),
    Rule::at_level(
        |t| !t.contains("role="),
        Severity::Suggestion,
        ComplianceLevel::AAA,
        "For enhanced accessibility, consider adding ARIA roles to clarify element purposes.",
    ),
];

fn uses_generic_structural_divs(text: &str) -> bool {
    text.contains(r#"<div class="header""#)
        || text.contains(r#"<div class="footer""#)
        || text.contains(r#"<div class="nav""#)
}

pub fn check_semantics(text_lower: &str, level: ComplianceLevel) -> Vec<Finding> {
    apply_rules(RULES, text_lower, level)
}
