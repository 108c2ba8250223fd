//! Page-load and rendering performance checks

use super::{apply_rules, Rule};
use shared_types::{ComplianceLevel, Finding, Severity};

const RULES: &[Rule] = &[
    Rule::new(
        |t| t.contains("<script") && !t.contains("defer") && !t.contains("async"),
        Severity::Warning,
        "Scripts found without defer or async attributes. Add these attributes to non-critical scripts to improve page load performance.",
    ),
    Rule::new(
        |t| t.contains("document.write"),
        Severity::Warning,
        "Usage of document.write() detected, which can significantly slow down page rendering. Consider alternative DOM manipulation methods.",
    ),
    Rule::new(
        |t| t.contains("onload=") || t.contains("onclick="),
        Severity::Warning,
        "Inline event handlers detected. Consider using event listeners for better separation of concerns and performance.",
    ),
];

pub fn check_performance(text_lower: &str, level: ComplianceLevel) -> Vec<Finding> {
    apply_rules(RULES, text_lower, level)
}
