pub mod classify;
pub mod patterns;
pub mod rules;

use classify::{classify_for_accessibility, classify_for_design, InputShape};
use shared_types::{
    AnalysisMode, AnalysisOptions, CheckCategory, Finding, Report, ReportSection,
};
use tracing::debug;

const NOT_HTML_WARNING: &str = "The provided code doesn't appear to be valid HTML. \
     Please provide valid HTML markup for accessibility analysis.";
const NOT_HTML_OR_CSS_WARNING: &str = "The provided code doesn't appear to be valid HTML or CSS. \
     Please provide valid markup for design analysis.";
const CSS_ONLY_NOTE: &str = "CSS-only analysis detected. For more comprehensive design analysis, \
     please include the HTML structure as well.";

/// AnalysisEngine entry point
///
/// Stateless: every call is a pure function of (text, options). The engine
/// never fails; unrecognized input produces a warning finding instead.
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate every enabled category against the text, mode by mode in
    /// fixed order, and collect the triggered findings into one report.
    pub fn evaluate(&self, text: &str, options: &AnalysisOptions) -> Report {
        debug!(len = text.len(), level = %options.level.as_str(), "running combined analysis");
        let text_lower = text.to_lowercase();
        let mut sections = Vec::new();

        if self.mode_enabled(options, AnalysisMode::Accessibility) {
            sections.extend(self.accessibility_sections(&text_lower, options));
        }
        if self.mode_enabled(options, AnalysisMode::Design) {
            sections.extend(self.design_sections(&text_lower, options));
        }
        if self.mode_enabled(options, AnalysisMode::Code) {
            sections.extend(self.code_sections(&text_lower, options));
        }

        Self::finish("Analysis Results", sections, "No significant issues found!")
    }

    /// Accessibility analysis over the four accessibility categories
    pub fn analyze_accessibility(&self, text: &str, options: &AnalysisOptions) -> Report {
        debug!(len = text.len(), level = %options.level.as_str(), "running accessibility analysis");
        let text_lower = text.to_lowercase();
        let sections = self.accessibility_sections(&text_lower, options);
        Self::finish(
            "Accessibility Analysis Results",
            sections,
            "No significant accessibility issues found!",
        )
    }

    /// Design analysis; falls back to a reduced CSS-only rule subset when
    /// the input has braces but no document skeleton
    pub fn analyze_design(&self, text: &str, options: &AnalysisOptions) -> Report {
        debug!(len = text.len(), "running design analysis");
        let text_lower = text.to_lowercase();
        let title = match classify_for_design(&text_lower) {
            InputShape::CssLike => "CSS Analysis Results",
            _ => "Design Analysis Results",
        };
        let sections = self.design_sections(&text_lower, options);
        Self::finish(title, sections, "No significant design issues found!")
    }

    /// Code-quality analysis; no input-shape gate
    pub fn analyze_code(&self, text: &str, options: &AnalysisOptions) -> Report {
        debug!(len = text.len(), "running code analysis");
        let text_lower = text.to_lowercase();
        let sections = self.code_sections(&text_lower, options);
        Self::finish(
            "Code Analysis Results",
            sections,
            "No significant issues found in the code!",
        )
    }

    fn mode_enabled(&self, options: &AnalysisOptions, mode: AnalysisMode) -> bool {
        options.categories.iter().any(|c| c.mode() == mode)
    }

    fn accessibility_sections(
        &self,
        text_lower: &str,
        options: &AnalysisOptions,
    ) -> Vec<ReportSection> {
        if classify_for_accessibility(text_lower) == InputShape::Unrecognized {
            return vec![ReportSection::synthetic(
                "Unrecognized Input",
                vec![Finding::warning(NOT_HTML_WARNING)],
            )];
        }

        let mut sections = Vec::new();
        for &category in CheckCategory::for_mode(AnalysisMode::Accessibility) {
            if !options.is_enabled(category) {
                continue;
            }
            let findings = match category {
                CheckCategory::Semantics => rules::semantics::check_semantics(text_lower, options.level),
                CheckCategory::Keyboard => rules::keyboard::check_keyboard(text_lower, options.level),
                CheckCategory::ScreenReader => {
                    rules::screen_reader::check_screen_reader(text_lower, options.level)
                }
                CheckCategory::Contrast => rules::contrast::check_contrast(text_lower, options.level),
                _ => unreachable!("non-accessibility category in accessibility mode"),
            };
            sections.push(ReportSection::for_category(category, findings));
        }

        let extras = rules::level_extras::check_level_extras(text_lower, options.level);
        if !extras.is_empty() {
            sections.push(ReportSection::synthetic(
                rules::level_extras::section_title(options.level),
                extras,
            ));
        }

        sections
    }

    fn design_sections(&self, text_lower: &str, options: &AnalysisOptions) -> Vec<ReportSection> {
        match classify_for_design(text_lower) {
            InputShape::HtmlLike => {
                let mut sections = Vec::new();
                for &category in CheckCategory::for_mode(AnalysisMode::Design) {
                    if !options.is_enabled(category) {
                        continue;
                    }
                    let findings = match category {
                        CheckCategory::Layout => rules::layout::check_layout(text_lower, options.level),
                        CheckCategory::Color => rules::color::check_color(text_lower, options.level),
                        CheckCategory::Spacing => rules::spacing::check_spacing(text_lower, options.level),
                        CheckCategory::Responsiveness => {
                            rules::responsiveness::check_responsiveness(text_lower, options.level)
                        }
                        _ => unreachable!("non-design category in design mode"),
                    };
                    sections.push(ReportSection::for_category(category, findings));
                }
                sections
            }
            InputShape::CssLike => {
                // Reduced rule subset for bare stylesheets
                let mut findings = vec![Finding::suggestion(CSS_ONLY_NOTE)];
                if options.is_enabled(CheckCategory::Color)
                    && rules::color::has_noisy_palette(text_lower)
                {
                    findings.push(Finding::suggestion(
                        "Multiple color definitions detected. Consider creating a more consistent color palette.",
                    ));
                }
                if options.is_enabled(CheckCategory::Responsiveness)
                    && !text_lower.contains("@media")
                {
                    findings.push(Finding::suggestion(
                        "No media queries detected. Consider adding responsive breakpoints.",
                    ));
                }
                vec![ReportSection::synthetic("CSS Analysis", findings)]
            }
            InputShape::Unrecognized => vec![ReportSection::synthetic(
                "Unrecognized Input",
                vec![Finding::warning(NOT_HTML_OR_CSS_WARNING)],
            )],
        }
    }

    fn code_sections(&self, text_lower: &str, options: &AnalysisOptions) -> Vec<ReportSection> {
        let mut sections = Vec::new();
        for &category in CheckCategory::for_mode(AnalysisMode::Code) {
            if !options.is_enabled(category) {
                continue;
            }
            let findings = match category {
                CheckCategory::Performance => {
                    rules::performance::check_performance(text_lower, options.level)
                }
                CheckCategory::BestPractices => {
                    rules::best_practices::check_best_practices(text_lower, options.level)
                }
                CheckCategory::Compatibility => {
                    rules::compatibility::check_compatibility(text_lower, options.level)
                }
                CheckCategory::Maintainability => {
                    rules::maintainability::check_maintainability(text_lower, options.level)
                }
                _ => unreachable!("non-code category in code mode"),
            };
            sections.push(ReportSection::for_category(category, findings));
        }
        sections
    }

    /// Wrap sections into a report; an evaluation with zero findings
    /// becomes a single synthetic success finding.
    fn finish(title: &str, sections: Vec<ReportSection>, success_message: &str) -> Report {
        let total: usize = sections.iter().map(|s| s.findings.len()).sum();
        if total == 0 {
            return Report::new(
                title,
                vec![ReportSection::synthetic(
                    "Summary",
                    vec![Finding::suggestion(success_message)],
                )],
            );
        }
        Report::new(title, sections)
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::ComplianceLevel;

    fn engine() -> AnalysisEngine {
        AnalysisEngine::new()
    }

    #[test]
    fn test_non_html_input_yields_single_warning() {
        let report = engine().analyze_accessibility("just plain text", &AnalysisOptions::accessibility());
        let findings: Vec<_> = report.findings().collect();
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("valid HTML"));
    }

    #[test]
    fn test_non_html_warning_ignores_option_flags() {
        let opts = AnalysisOptions::new(
            vec![CheckCategory::ScreenReader],
            ComplianceLevel::AAA,
        );
        let report = engine().analyze_accessibility("nothing tag-like here", &opts);
        assert_eq!(report.findings().count(), 1);
    }

    #[test]
    fn test_detects_images_without_alt() {
        let opts = AnalysisOptions::new(vec![CheckCategory::ScreenReader], ComplianceLevel::A);
        let report = engine().analyze_accessibility(r#"<div><img src="a.png"></div>"#, &opts);
        assert!(report.contains_message("images without alt attributes"));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let opts = AnalysisOptions::accessibility().with_level(ComplianceLevel::AA);
        let text = r#"<div onclick="go()"><img src="a.png"></div>"#;
        let first = engine().analyze_accessibility(text, &opts);
        let second = engine().analyze_accessibility(text, &opts);
        assert_eq!(first.sections, second.sections);
    }

    #[test]
    fn test_aaa_findings_are_superset_of_a() {
        let text = r##"<div><a href="#">x</a><img src="a.png"><form><input></form></div>"##;
        let at_a = engine()
            .analyze_accessibility(text, &AnalysisOptions::accessibility());
        let at_aaa = engine().analyze_accessibility(
            text,
            &AnalysisOptions::accessibility().with_level(ComplianceLevel::AAA),
        );
        let aaa_messages: Vec<_> = at_aaa.findings().map(|f| &f.message).collect();
        for finding in at_a.findings() {
            assert!(
                aaa_messages.contains(&&finding.message),
                "AAA report missing A-level finding: {}",
                finding.message
            );
        }
        assert!(at_aaa.findings().count() > at_a.findings().count());
    }

    #[test]
    fn test_design_css_branch() {
        let report = engine().analyze_design(
            ".card { color: red; }",
            &AnalysisOptions::design(),
        );
        assert_eq!(report.title, "CSS Analysis Results");
        assert!(report.contains_message("CSS-only analysis detected"));
        assert!(report.contains_message("responsive breakpoints"));
    }

    #[test]
    fn test_design_rejects_plain_text() {
        let report = engine().analyze_design("hello", &AnalysisOptions::design());
        let findings: Vec<_> = report.findings().collect();
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("valid HTML or CSS"));
    }

    #[test]
    fn test_clean_code_yields_success_finding() {
        let report = engine().analyze_code(
            "<!doctype html>\n<html><head></head><body><p>hello</p></body></html>",
            &AnalysisOptions::code(),
        );
        assert!(report.contains_message("No significant issues found in the code!"));
        assert_eq!(report.findings().count(), 1);
    }

    #[test]
    fn test_level_extras_require_aa() {
        let text = "<html><body><h1>t</h1></body></html>";
        let opts = AnalysisOptions::new(vec![CheckCategory::Semantics], ComplianceLevel::A);
        let at_a = engine().analyze_accessibility(text, &opts);
        assert!(!at_a.contains_message("language attribute"));

        let at_aa = engine().analyze_accessibility(text, &opts.clone().with_level(ComplianceLevel::AA));
        assert!(at_aa.contains_message("language attribute"));
    }

    #[test]
    fn test_combined_evaluate_orders_modes() {
        let opts = AnalysisOptions::new(
            vec![CheckCategory::Performance, CheckCategory::Semantics],
            ComplianceLevel::A,
        );
        let report = engine().evaluate(
            r#"<div><script src="x.js"></script></div>"#,
            &opts,
        );
        let categories: Vec<_> = report.sections.iter().filter_map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![CheckCategory::Semantics, CheckCategory::Performance]
        );
    }

    #[test]
    fn test_empty_input_is_unrecognized_not_an_error() {
        let report = engine().analyze_accessibility("", &AnalysisOptions::accessibility());
        assert_eq!(report.findings().count(), 1);
    }
}
