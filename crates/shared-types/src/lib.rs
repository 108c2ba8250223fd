pub mod component;
pub mod types;

pub use component::{ComponentKind, ComponentSpec, StyleFramework};
pub use types::{
    AnalysisMode, AnalysisOptions, CheckCategory, ComplianceLevel, Finding, Report, ReportSection,
    Severity,
};
