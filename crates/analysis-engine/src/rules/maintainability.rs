//! Maintainability checks

use super::{apply_rules, Rule};
use crate::patterns::{count_class_attributes, count_id_attributes};
use shared_types::{ComplianceLevel, Finding, Severity};

/// Beyond this many class attributes a naming methodology is suggested
pub const MAX_CLASS_ATTRIBUTES: usize = 10;
/// Beyond this many id attributes class-based styling is suggested
pub const MAX_ID_ATTRIBUTES: usize = 8;

const RULES: &[Rule] = &[
    Rule::new(
        |t| count_class_attributes(t) > MAX_CLASS_ATTRIBUTES,
        Severity::Improvement,
        "Multiple CSS classes detected. Consider using a methodical naming approach like BEM (Block, Element, Modifier) for better organization.",
    ),
    Rule::new(
        |t| count_id_attributes(t) > MAX_ID_ATTRIBUTES,
        Severity::Improvement,
        "Numerous IDs detected. Excessive ID usage can lead to maintenance issues. Consider using classes for styling.",
    ),
    Rule::new(
        |t| t.contains("!important"),
        Severity::Improvement,
        "!important declarations found. These override the natural cascade of CSS and can cause maintenance headaches. Try to avoid when possible.",
    ),
    Rule::new(
        |t| t.contains(r#"style=""#),
        Severity::Improvement,
        "Inline styles detected. For better maintainability, consider moving these to an external stylesheet.",
    ),
];

pub fn check_maintainability(text_lower: &str, level: ComplianceLevel) -> Vec<Finding> {
    apply_rules(RULES, text_lower, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_class_explosion() {
        let text = r#"<i class="a">"#.repeat(11);
        let findings = check_maintainability(&text, ComplianceLevel::A);
        assert!(findings.iter().any(|f| f.message.contains("BEM")));
    }

    #[test]
    fn test_flags_id_overuse() {
        let text = r#"<i id="a">"#.repeat(9);
        let findings = check_maintainability(&text, ComplianceLevel::A);
        assert!(findings.iter().any(|f| f.message.contains("Numerous IDs")));
    }

    #[test]
    fn test_flags_important_declarations() {
        let findings =
            check_maintainability("p { color: red !important; }", ComplianceLevel::A);
        assert!(findings.iter().any(|f| f.message.contains("!important")));
    }

    #[test]
    fn test_flags_inline_styles() {
        let findings =
            check_maintainability(r#"<p style="color: red">x</p>"#, ComplianceLevel::A);
        assert!(findings.iter().any(|f| f.message.contains("Inline styles")));
    }

    #[test]
    fn test_modest_markup_passes() {
        let findings = check_maintainability(r#"<p class="lead">x</p>"#, ComplianceLevel::A);
        assert!(findings.is_empty());
    }
}
