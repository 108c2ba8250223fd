//! Template registry and variant metadata

use crate::embedded;
use serde::{Deserialize, Serialize};
use shared_types::{ComponentKind, StyleFramework};

/// One registered template variant for a component kind.
///
/// The Bootstrap markup is the default key: a variant always carries it,
/// and a lookup for a framework with no entry falls back to it. This
/// fallback is intended behavior, not an error path.
pub struct TemplateVariant {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    bootstrap: &'static str,
    tailwind: Option<&'static str>,
    plain: Option<&'static str>,
}

impl TemplateVariant {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        bootstrap: &'static str,
        tailwind: Option<&'static str>,
        plain: Option<&'static str>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            bootstrap,
            tailwind,
            plain,
        }
    }

    /// Markup for the requested framework, falling back to the Bootstrap
    /// entry when that framework has no markup for this variant.
    pub fn markup(&self, framework: StyleFramework) -> &'static str {
        match framework {
            StyleFramework::Bootstrap => self.bootstrap,
            StyleFramework::Tailwind => self.tailwind.unwrap_or(self.bootstrap),
            StyleFramework::Plain => self.plain.unwrap_or(self.bootstrap),
        }
    }
}

/// Presentation-facing metadata for one variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

const FORM_VARIANTS: &[TemplateVariant] = &[
    TemplateVariant::new(
        "login",
        "Login Form",
        "Simple login form with email/username and password fields",
        embedded::LOGIN_FORM_BOOTSTRAP,
        Some(embedded::LOGIN_FORM_TAILWIND),
        Some(embedded::LOGIN_FORM_PLAIN),
    ),
    TemplateVariant::new(
        "signup",
        "Sign Up Form",
        "Registration form with name, email, and password fields",
        embedded::SIGNUP_FORM_BOOTSTRAP,
        Some(embedded::SIGNUP_FORM_TAILWIND),
        Some(embedded::SIGNUP_FORM_PLAIN),
    ),
];

const NAVBAR_VARIANTS: &[TemplateVariant] = &[TemplateVariant::new(
    "basic",
    "Basic Navbar",
    "Simple navigation bar with logo and links",
    embedded::BASIC_NAVBAR_BOOTSTRAP,
    Some(embedded::BASIC_NAVBAR_TAILWIND),
    Some(embedded::BASIC_NAVBAR_PLAIN),
)];

/// Registered variants for a kind, in registration order.
/// Card, table and modal kinds have no canned variants yet.
pub fn variants_for(kind: ComponentKind) -> &'static [TemplateVariant] {
    match kind {
        ComponentKind::Form => FORM_VARIANTS,
        ComponentKind::Navbar => NAVBAR_VARIANTS,
        ComponentKind::Card
        | ComponentKind::Table
        | ComponentKind::Modal
        | ComponentKind::Custom => &[],
    }
}

/// Find a registered variant by id
pub fn variant(kind: ComponentKind, id: &str) -> Option<&'static TemplateVariant> {
    variants_for(kind).iter().find(|v| v.id == id)
}

/// Catalogue of variants for presentation, independent of generation
pub fn list_variants(kind: ComponentKind) -> Vec<VariantInfo> {
    variants_for(kind)
        .iter()
        .map(|v| VariantInfo {
            id: v.id.to_string(),
            name: v.name.to_string(),
            description: v.description.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_form_variants_register_login_first() {
        let infos = list_variants(ComponentKind::Form);
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].id, "login");
        assert_eq!(infos[1].id, "signup");
    }

    #[test]
    fn test_unregistered_kinds_have_no_variants() {
        assert!(list_variants(ComponentKind::Card).is_empty());
        assert!(list_variants(ComponentKind::Modal).is_empty());
        assert!(list_variants(ComponentKind::Table).is_empty());
    }

    #[test]
    fn test_variant_lookup_by_id() {
        assert!(variant(ComponentKind::Navbar, "basic").is_some());
        assert!(variant(ComponentKind::Navbar, "mega").is_none());
    }

    #[test]
    fn test_missing_framework_falls_back_to_bootstrap() {
        let partial = TemplateVariant::new("t", "T", "test", "<div>bootstrap</div>", None, None);
        assert_eq!(partial.markup(StyleFramework::Tailwind), "<div>bootstrap</div>");
        assert_eq!(partial.markup(StyleFramework::Plain), "<div>bootstrap</div>");
    }

    #[test]
    fn test_framework_selection_when_present() {
        let login = variant(ComponentKind::Form, "login").unwrap();
        assert!(login.markup(StyleFramework::Tailwind).contains("text-gray-700"));
        assert!(login.markup(StyleFramework::Plain).contains("style="));
    }
}
