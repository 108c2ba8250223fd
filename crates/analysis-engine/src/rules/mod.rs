//! Rule tables for every check category
//!
//! Each category is a flat, ordered list of independent trigger records
//! evaluated over the lowercased source text. Every predicate that holds
//! appends exactly one finding, in declared order; rules never short-circuit
//! each other. Predicates that depend on the compliance level carry a
//! minimum level; parametric guidance (contrast ratios) lives as explicit
//! code next to its table.

pub mod best_practices;
pub mod color;
pub mod compatibility;
pub mod contrast;
pub mod keyboard;
pub mod layout;
pub mod level_extras;
pub mod maintainability;
pub mod performance;
pub mod responsiveness;
pub mod screen_reader;
pub mod semantics;
pub mod spacing;

use shared_types::{ComplianceLevel, Finding, Severity};

/// One trigger record: (predicate, severity, minimum level, message)
pub struct Rule {
    pub predicate: fn(&str) -> bool,
    pub severity: Severity,
    pub min_level: ComplianceLevel,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(predicate: fn(&str) -> bool, severity: Severity, message: &'static str) -> Self {
        Self {
            predicate,
            severity,
            min_level: ComplianceLevel::A,
            message,
        }
    }

    pub const fn at_level(
        predicate: fn(&str) -> bool,
        severity: Severity,
        min_level: ComplianceLevel,
        message: &'static str,
    ) -> Self {
        Self {
            predicate,
            severity,
            min_level,
            message,
        }
    }
}

/// Evaluate a rule table against the lowercased text at the given level.
/// Higher levels run a strict superset of lower levels' rules.
pub fn apply_rules(rules: &[Rule], text_lower: &str, level: ComplianceLevel) -> Vec<Finding> {
    rules
        .iter()
        .filter(|rule| level >= rule.min_level)
        .filter(|rule| (rule.predicate)(text_lower))
        .map(|rule| Finding {
            severity: rule.severity,
            message: rule.message.to_string(),
        })
        .collect()
}
