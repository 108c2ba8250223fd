//! Color and contrast checks
//!
//! The AA/AAA guidance line is parametric (numeric ratio thresholds differ
//! per level), so it lives outside the rule table.

use super::{apply_rules, Rule};
use shared_types::{ComplianceLevel, Finding, Severity};

const RULES: &[Rule] = &[
    Rule::new(
        has_light_on_white,
        Severity::Suggestion,
        "Potential low contrast: Light colors on white backgrounds may not provide sufficient contrast.",
    ),
    Rule::new(
        |t| t.contains("color:") && !t.contains("background-color:"),
        Severity::Suggestion,
        "Color properties set without explicit background colors. Ensure sufficient contrast between text and background.",
    ),
    Rule::new(
        |t| t.contains("color: red") || t.contains("color: green"),
        Severity::Suggestion,
        "Color alone used to convey information. Ensure information is also conveyed through other means like text or icons.",
    ),
];

fn has_light_on_white(text: &str) -> bool {
    (text.contains("#fff") || text.contains("#ffffff"))
        && (text.contains("#eee") || text.contains("#f0f0f0") || text.contains("#fcfcfc"))
}

pub fn check_contrast(text_lower: &str, level: ComplianceLevel) -> Vec<Finding> {
    let mut findings = apply_rules(RULES, text_lower, level);

    // Ratio guidance always accompanies AA/AAA runs
    if level >= ComplianceLevel::AA {
        let (normal, large) = if level == ComplianceLevel::AA {
            ("4.5:1", "3:1")
        } else {
            ("7:1", "4.5:1")
        };
        findings.push(Finding::suggestion(format!(
            "For {} compliance, text should have a contrast ratio of at least {} for normal text and {} for large text.",
            level.as_str(),
            normal,
            large
        )));
    }

    findings
}
