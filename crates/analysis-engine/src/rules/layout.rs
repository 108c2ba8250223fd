//! Layout structure checks

use super::{apply_rules, Rule};
use shared_types::{ComplianceLevel, Finding, Severity};

const RULES: &[Rule] = &[
    Rule::new(
        |t| !t.contains("display:") && !t.contains("display="),
        Severity::Suggestion,
        "Your design lacks explicit display properties. Consider using Flexbox or Grid for more complex layouts.",
    ),
    Rule::new(
        |t| t.contains("<table") && !t.contains("data-table"),
        Severity::Suggestion,
        "Warning: Tables are detected in your design. If used for layout, consider using CSS Grid or Flexbox instead, as tables should primarily be used for tabular data.",
    ),
    Rule::new(
        |t| !t.contains(r#"class="container"#) && !t.contains(r#"class="row"#),
        Severity::Suggestion,
        "Consider using a container/row structure to achieve better layout organization.",
    ),
];

pub fn check_layout(text_lower: &str, level: ComplianceLevel) -> Vec<Finding> {
    apply_rules(RULES, text_lower, level)
}
