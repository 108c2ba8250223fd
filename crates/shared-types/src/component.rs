use serde::{Deserialize, Serialize};

/// Kind of UI component a generation request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Form,
    Navbar,
    Card,
    Table,
    Modal,
    Custom,
}

/// CSS framework flavor for generated markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StyleFramework {
    #[default]
    Bootstrap,
    Tailwind,
    Plain,
}

/// A generation request: kind + framework + optional free-text description
/// (used only when `kind` is `Custom`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub kind: ComponentKind,
    pub framework: StyleFramework,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ComponentSpec {
    pub fn new(kind: ComponentKind, framework: StyleFramework) -> Self {
        Self {
            kind,
            framework,
            description: None,
        }
    }

    pub fn custom(description: impl Into<String>, framework: StyleFramework) -> Self {
        Self {
            kind: ComponentKind::Custom,
            framework,
            description: Some(description.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_spec_carries_description() {
        let spec = ComponentSpec::custom("I need a login form", StyleFramework::Tailwind);
        assert_eq!(spec.kind, ComponentKind::Custom);
        assert_eq!(spec.description.as_deref(), Some("I need a login form"));
    }

    #[test]
    fn test_framework_defaults_to_bootstrap() {
        assert_eq!(StyleFramework::default(), StyleFramework::Bootstrap);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ComponentKind::Navbar).unwrap();
        assert_eq!(json, "\"navbar\"");
    }
}
