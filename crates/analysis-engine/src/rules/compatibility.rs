//! Browser compatibility checks

use super::{apply_rules, Rule};
use shared_types::{ComplianceLevel, Finding, Severity};

const RULES: &[Rule] = &[
    Rule::new(
        |t| t.contains("grid"),
        Severity::Warning,
        "CSS Grid usage detected. While widely supported in modern browsers, consider providing fallbacks for older browsers like IE11.",
    ),
    Rule::new(
        |t| t.contains("position: sticky"),
        Severity::Warning,
        "Sticky positioning detected. This isn't supported in older browsers. Consider polyfills or fallbacks.",
    ),
    Rule::new(
        |t| t.contains("fetch("),
        Severity::Warning,
        "Fetch API usage detected. Not supported in IE. Consider adding a polyfill or using axios as an alternative.",
    ),
];

pub fn check_compatibility(text_lower: &str, level: ComplianceLevel) -> Vec<Finding> {
    apply_rules(RULES, text_lower, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_css_grid() {
        let findings = check_compatibility("display: grid;", ComplianceLevel::A);
        assert!(findings.iter().any(|f| f.message.contains("CSS Grid")));
    }

    #[test]
    fn test_flags_sticky_positioning() {
        let findings = check_compatibility("nav { position: sticky; }", ComplianceLevel::A);
        assert!(findings
            .iter()
            .any(|f| f.message.contains("Sticky positioning")));
    }

    #[test]
    fn test_flags_fetch_api() {
        let findings = check_compatibility("fetch('/api')", ComplianceLevel::A);
        assert!(findings.iter().any(|f| f.message.contains("Fetch API")));
    }

    #[test]
    fn test_plain_markup_passes() {
        let findings = check_compatibility("<p>hello</p>", ComplianceLevel::A);
        assert!(findings.is_empty());
    }
}
