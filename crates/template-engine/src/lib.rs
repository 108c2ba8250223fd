pub mod embedded;
pub mod generator;
pub mod registry;

pub use generator::{generate, NO_MATCHING_TEMPLATE};
pub use registry::{list_variants, TemplateVariant, VariantInfo};
