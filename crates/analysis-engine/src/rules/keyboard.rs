//! Keyboard navigation checks

use super::{apply_rules, Rule};
use shared_types::{ComplianceLevel, Finding, Severity};

const RULES: &[Rule] = &[
    Rule::new(
        |t| t.contains("<a") && !t.contains("tabindex="),
        Severity::Warning,
        "Links are natively keyboard accessible, but complex interactive elements may need tabindex attributes for proper focus management.",
    ),
    Rule::new(
        |t| t.contains("onclick=") && !t.contains("onkeypress=") && !t.contains("onkeydown="),
        Severity::Warning,
        "Mouse events detected without corresponding keyboard events. Ensure all interactive elements are usable with keyboard only.",
    ),
    Rule::new(
        |t| t.contains(r#"tabindex="-1""#),
        Severity::Warning,
        "Elements with tabindex=\"-1\" are detected. This removes elements from the natural tab order. Ensure this is intentional and doesn't prevent access to functionality.",
    ),
    Rule::at_level(
        |t| !t.contains("focus"),
        Severity::Warning,
        ComplianceLevel::AA,
        "Consider adding visible focus indicators for interactive elements. Use :focus CSS selectors to style focused elements.",
    ),
];

pub fn check_keyboard(text_lower: &str, level: ComplianceLevel) -> Vec<Finding> {
    apply_rules(RULES, text_lower, level)
}
