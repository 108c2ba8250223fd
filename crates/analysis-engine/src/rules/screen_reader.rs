//! Screen reader compatibility checks

use super::{apply_rules, Rule};
use shared_types::{ComplianceLevel, Finding, Severity};

const RULES: &[Rule] = &[
    Rule::new(
        |t| t.contains("<img") && !t.contains("alt="),
        Severity::Warning,
        "Images without alt attributes detected. All images must have alternative text or be marked as decorative with alt=\"\".",
    ),
    Rule::new(
        has_unlabeled_icon_button,
        Severity::Warning,
        "Buttons without text content detected. Add aria-label or aria-labelledby to provide accessible names.",
    ),
    Rule::new(
        |t| t.contains(r#"aria-hidden="true""#) && t.contains("tabindex="),
        Severity::Warning,
        "Potential conflict: Elements marked as aria-hidden=\"true\" should not be focusable or interactive.",
    ),
    Rule::at_level(
        |t| !t.contains("aria-live="),
        Severity::Warning,
        ComplianceLevel::AAA,
        "For dynamic content, consider using aria-live regions to announce changes to screen reader users.",
    ),
];

/// Empty or icon-only buttons with no accessible name
fn has_unlabeled_icon_button(text: &str) -> bool {
    text.contains("<button")
        && !text.contains("aria-label=")
        && !text.contains("aria-labelledby=")
        && (text.contains("<button></button>")
            || text.contains("<button><i class=")
            || text.contains("<button><span class="))
}

pub fn check_screen_reader(text_lower: &str, level: ComplianceLevel) -> Vec<Finding> {
    apply_rules(RULES, text_lower, level)
}
