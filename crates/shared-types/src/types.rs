use serde::{Deserialize, Serialize};

/// Analysis surface a check category belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Accessibility,
    Design,
    Code,
}

/// Check categories, in fixed evaluation order per mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckCategory {
    // Accessibility mode
    Semantics,
    Keyboard,
    ScreenReader,
    Contrast,
    // Design mode
    Layout,
    Color,
    Spacing,
    Responsiveness,
    // Code mode
    Performance,
    BestPractices,
    Compatibility,
    Maintainability,
}

impl CheckCategory {
    /// Which analysis surface this category is evaluated under
    pub fn mode(&self) -> AnalysisMode {
        match self {
            CheckCategory::Semantics
            | CheckCategory::Keyboard
            | CheckCategory::ScreenReader
            | CheckCategory::Contrast => AnalysisMode::Accessibility,
            CheckCategory::Layout
            | CheckCategory::Color
            | CheckCategory::Spacing
            | CheckCategory::Responsiveness => AnalysisMode::Design,
            CheckCategory::Performance
            | CheckCategory::BestPractices
            | CheckCategory::Compatibility
            | CheckCategory::Maintainability => AnalysisMode::Code,
        }
    }

    /// Section heading used when rendering a report
    pub fn title(&self) -> &'static str {
        match self {
            CheckCategory::Semantics => "Semantic HTML",
            CheckCategory::Keyboard => "Keyboard Navigation",
            CheckCategory::ScreenReader => "Screen Reader Compatibility",
            CheckCategory::Contrast => "Color and Contrast",
            CheckCategory::Layout => "Layout Structure",
            CheckCategory::Color => "Color Scheme",
            CheckCategory::Spacing => "Spacing & Alignment",
            CheckCategory::Responsiveness => "Responsiveness",
            CheckCategory::Performance => "Performance Issues",
            CheckCategory::BestPractices => "Best Practices",
            CheckCategory::Compatibility => "Browser Compatibility",
            CheckCategory::Maintainability => "Code Maintainability",
        }
    }

    /// All categories of one mode, in evaluation order
    pub fn for_mode(mode: AnalysisMode) -> &'static [CheckCategory] {
        match mode {
            AnalysisMode::Accessibility => &[
                CheckCategory::Semantics,
                CheckCategory::Keyboard,
                CheckCategory::ScreenReader,
                CheckCategory::Contrast,
            ],
            AnalysisMode::Design => &[
                CheckCategory::Layout,
                CheckCategory::Color,
                CheckCategory::Spacing,
                CheckCategory::Responsiveness,
            ],
            AnalysisMode::Code => &[
                CheckCategory::Performance,
                CheckCategory::BestPractices,
                CheckCategory::Compatibility,
                CheckCategory::Maintainability,
            ],
        }
    }
}

/// WCAG-style strictness tier. AAA evaluates a strict superset of AA,
/// which evaluates a strict superset of A.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum ComplianceLevel {
    #[default]
    A,
    AA,
    AAA,
}

impl ComplianceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceLevel::A => "A",
            ComplianceLevel::AA => "AA",
            ComplianceLevel::AAA => "AAA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Suggestion,
    Warning,
    Improvement,
}

/// A single triggered diagnostic message produced by one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn suggestion(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Suggestion,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn improvement(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Improvement,
            message: message.into(),
        }
    }
}

/// One category's findings, in rule order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    /// None for synthetic sections (success notice, unrecognized input,
    /// level-extras preamble)
    pub category: Option<CheckCategory>,
    pub title: String,
    pub findings: Vec<Finding>,
}

impl ReportSection {
    pub fn for_category(category: CheckCategory, findings: Vec<Finding>) -> Self {
        Self {
            category: Some(category),
            title: category.title().to_string(),
            findings,
        }
    }

    pub fn synthetic(title: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            category: None,
            title: title.into(),
            findings,
        }
    }
}

/// Ordered collection of findings returned by one evaluation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub sections: Vec<ReportSection>,
    pub generated_at: u64,
}

impl Report {
    pub fn new(title: impl Into<String>, sections: Vec<ReportSection>) -> Self {
        Self {
            title: title.into(),
            sections,
            generated_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    /// Iterate every finding across all sections, in evaluation order
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.sections.iter().flat_map(|s| s.findings.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.findings.is_empty())
    }

    /// Case-insensitive message search, handy for callers and tests
    pub fn contains_message(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.findings()
            .any(|f| f.message.to_lowercase().contains(&needle))
    }
}

/// Enabled categories plus the compliance level gating level-specific rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub categories: Vec<CheckCategory>,
    pub level: ComplianceLevel,
}

impl AnalysisOptions {
    pub fn new(categories: Vec<CheckCategory>, level: ComplianceLevel) -> Self {
        Self { categories, level }
    }

    /// All accessibility categories at level A
    pub fn accessibility() -> Self {
        Self::new(
            CheckCategory::for_mode(AnalysisMode::Accessibility).to_vec(),
            ComplianceLevel::A,
        )
    }

    /// All design categories
    pub fn design() -> Self {
        Self::new(
            CheckCategory::for_mode(AnalysisMode::Design).to_vec(),
            ComplianceLevel::A,
        )
    }

    /// All code-quality categories
    pub fn code() -> Self {
        Self::new(
            CheckCategory::for_mode(AnalysisMode::Code).to_vec(),
            ComplianceLevel::A,
        )
    }

    pub fn with_level(mut self, level: ComplianceLevel) -> Self {
        self.level = level;
        self
    }

    pub fn is_enabled(&self, category: CheckCategory) -> bool {
        self.categories.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compliance_levels_are_ordered() {
        assert!(ComplianceLevel::AAA > ComplianceLevel::AA);
        assert!(ComplianceLevel::AA > ComplianceLevel::A);
    }

    #[test]
    fn test_category_modes() {
        assert_eq!(
            CheckCategory::ScreenReader.mode(),
            AnalysisMode::Accessibility
        );
        assert_eq!(CheckCategory::Spacing.mode(), AnalysisMode::Design);
        assert_eq!(CheckCategory::Performance.mode(), AnalysisMode::Code);
    }

    #[test]
    fn test_mode_category_order_is_fixed() {
        let design = CheckCategory::for_mode(AnalysisMode::Design);
        assert_eq!(
            design,
            &[
                CheckCategory::Layout,
                CheckCategory::Color,
                CheckCategory::Spacing,
                CheckCategory::Responsiveness,
            ]
        );
    }

    #[test]
    fn test_report_message_search_is_case_insensitive() {
        let report = Report::new(
            "Test",
            vec![ReportSection::for_category(
                CheckCategory::Layout,
                vec![Finding::suggestion("Consider using Flexbox or Grid")],
            )],
        );
        assert!(report.contains_message("flexbox"));
        assert!(!report.contains_message("float"));
    }

    #[test]
    fn test_empty_report() {
        let report = Report::new("Test", vec![]);
        assert!(report.is_empty());
        assert_eq!(report.findings().count(), 0);
    }

    #[test]
    fn test_default_options_enable_all_mode_categories() {
        let opts = AnalysisOptions::accessibility();
        assert!(opts.is_enabled(CheckCategory::Contrast));
        assert!(!opts.is_enabled(CheckCategory::Layout));
        assert_eq!(opts.level, ComplianceLevel::A);
    }
}
