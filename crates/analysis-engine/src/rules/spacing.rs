//! Spacing and alignment checks

use super::{apply_rules, Rule};
use crate::patterns::count_occurrences;
use shared_types::{ComplianceLevel, Finding, Severity};

/// Beyond this many `px` values relative units are recommended
pub const MAX_PIXEL_VALUES: usize = 15;

const RULES: &[Rule] = &[
    Rule::new(
        |t| !t.contains("margin") && !t.contains("padding"),
        Severity::Suggestion,
        "Your design lacks explicit margin or padding properties. Adding appropriate spacing can improve readability and visual hierarchy.",
    ),
    Rule::new(
        |t| count_occurrences(t, "px") > MAX_PIXEL_VALUES,
        Severity::Suggestion,
        "Consider using relative units (em, rem, %) instead of numerous pixel values for better scalability and maintenance.",
    ),
];

pub fn check_spacing(text_lower: &str, level: ComplianceLevel) -> Vec<Finding> {
    apply_rules(RULES, text_lower, level)
}
