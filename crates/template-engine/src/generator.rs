//! Template selection and generation
//!
//! Selection never fails: unknown kinds produce a comment marker and
//! unmatched free-text descriptions produce a placeholder block.

use crate::registry;
use shared_types::{ComponentKind, ComponentSpec};
use tracing::debug;

/// Returned when a kind has no registered variants
pub const NO_MATCHING_TEMPLATE: &str = "<!-- No matching template found -->";

/// Ordered keyword groups for free-text matching; first match wins
const KEYWORD_GROUPS: &[(&[&str], ComponentKind, &str)] = &[
    (&["login", "sign in"], ComponentKind::Form, "login"),
    (&["sign up", "register"], ComponentKind::Form, "signup"),
    (&["nav", "menu"], ComponentKind::Navbar, "basic"),
];

/// Produce markup for a generation request. Always succeeds; the result is
/// trimmed but otherwise untransformed.
pub fn generate(spec: &ComponentSpec) -> String {
    debug!(kind = ?spec.kind, framework = ?spec.framework, "generating component");
    match spec.kind {
        ComponentKind::Custom => generate_custom(spec),
        kind => match registry::variants_for(kind).first() {
            Some(variant) => variant.markup(spec.framework).trim().to_string(),
            None => NO_MATCHING_TEMPLATE.to_string(),
        },
    }
}

fn generate_custom(spec: &ComponentSpec) -> String {
    let description = spec.description.as_deref().unwrap_or("");
    let lower = description.to_lowercase();

    for (keywords, kind, variant_id) in KEYWORD_GROUPS {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            if let Some(variant) = registry::variant(*kind, variant_id) {
                return variant.markup(spec.framework).trim().to_string();
            }
        }
    }

    placeholder(description)
}

/// Echo of the description inside a comment and a generated content block
fn placeholder(description: &str) -> String {
    format!(
        r#"<!--
Based on your description: "{description}",
I would generate a custom component. In a real implementation,
this would use an AI service to create the exact component you need.

For now, here's a placeholder structure that you can customize:
-->

<div class="component-container">
  <h2>Custom Component</h2>
  <div class="component-content">
    <p>This would be your custom component based on: "{description}"</p>
  </div>
</div>"#
    )
}
