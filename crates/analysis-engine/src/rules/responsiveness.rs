//! Responsiveness checks

use super::{apply_rules, Rule};
use shared_types::{ComplianceLevel, Finding, Severity};

const RULES: &[Rule] = &[
    Rule::new(
        |t| !t.contains("@media"),
        Severity::Suggestion,
        "No media queries detected. Your design might not be responsive to different screen sizes.",
    ),
    Rule::new(
        |t| t.contains("width:") && !t.contains("max-width:"),
        Severity::Suggestion,
        "Consider using max-width instead of fixed width for better responsiveness.",
    ),
    Rule::new(
        |t| !t.contains("viewport"),
        Severity::Suggestion,
        "Missing viewport meta tag. Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"> for proper mobile rendering.",
    ),
];

pub fn check_responsiveness(text_lower: &str, level: ComplianceLevel) -> Vec<Finding> {
    apply_rules(RULES, text_lower, level)
}
