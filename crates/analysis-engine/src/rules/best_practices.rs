//! General authoring best-practice checks

use super::{apply_rules, Rule};
use shared_types::{ComplianceLevel, Finding, Severity};

const RULES: &[Rule] = &[
    Rule::new(
        |t| !t.contains("<!doctype html>") && t.contains("<html"),
        Severity::Suggestion,
        "Missing DOCTYPE declaration. Add <!DOCTYPE html> at the beginning of your HTML.",
    ),
    Rule::new(
        |t| t.contains("<img") && !t.contains("alt="),
        Severity::Suggestion,
        "Images without alt attributes detected. Add descriptive alt text for accessibility.",
    ),
    Rule::new(
        |t| t.contains("var "),
        Severity::Suggestion,
        "Usage of var for variable declarations. Consider using let or const for better scoping.",
    ),
    Rule::new(
        |t| t.contains("function(") && !t.contains("=>"),
        Severity::Suggestion,
        "Traditional function expressions detected. Consider using arrow functions where appropriate for cleaner syntax.",
    ),
];

pub fn check_best_practices(text_lower: &str, level: ComplianceLevel) -> Vec<Finding> {
    apply_rules(RULES, text_lower, level)
}
