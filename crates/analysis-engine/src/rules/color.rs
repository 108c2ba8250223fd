//! Color scheme checks

use super::{apply_rules, Rule};
use crate::patterns::count_occurrences;
use shared_types::{ComplianceLevel, Finding, Severity};

/// Beyond this many color declarations the palette is considered noisy
pub const MAX_COLOR_DECLARATIONS: usize = 7;

const RULES: &[Rule] = &[
    Rule::new(
        has_noisy_palette,
        Severity::Suggestion,
        "Your design uses many different colors. Consider using a more consistent color palette with 3-5 primary colors for better visual consistency.",
    ),
    Rule::new(
        |t| !t.contains("color:") && !t.contains("background-color:"),
        Severity::Suggestion,
        "Your design lacks explicit color definitions. Adding a cohesive color scheme could improve the visual appeal.",
    ),
];

pub fn has_noisy_palette(text: &str) -> bool {
    count_occurrences(text, "color:") > MAX_COLOR_DECLARATIONS
        || count_occurrences(text, "background-color:") > MAX_COLOR_DECLARATIONS
}

pub fn check_color(text_lower: &str, level: ComplianceLevel) -> Vec<Finding> {
    apply_rules(RULES, text_lower, level)
}
