//! Additional recommendations attached to AA/AAA accessibility runs
//!
//! These are not tied to a single checkbox category; they form their own
//! report section whenever the compliance level is AA or above.

use super::{apply_rules, Rule};
use shared_types::{ComplianceLevel, Finding, Severity};

const RULES: &[Rule] = &[
    Rule::new(
        |t| !t.contains("lang="),
        Severity::Improvement,
        "Missing language attribute. Add lang attribute to the html element (e.g., <html lang=\"en\">).",
    ),
    Rule::new(
        |t| t.contains("<form") && !t.contains("aria-required=") && !t.contains("required"),
        Severity::Improvement,
        "Form fields should indicate required fields both visually and programmatically.",
    ),
    Rule::at_level(
        |_| true,
        Severity::Improvement,
        ComplianceLevel::AAA,
        "For AAA compliance, consider adding: sign language interpretation for prerecorded audio content, extended audio descriptions for video content, and the ability to disable animations and auto-playing content.",
    ),
];

/// Empty below AA; at AA/AAA returns the extra recommendations.
pub fn check_level_extras(text_lower: &str, level: ComplianceLevel) -> Vec<Finding> {
    if level < ComplianceLevel::AA {
        return Vec::new();
    }
    apply_rules(RULES, text_lower, level)
}

/// Section title for the extras block
pub fn section_title(level: ComplianceLevel) -> String {
    format!("Additional {} Level Recommendations", level.as_str())
}
