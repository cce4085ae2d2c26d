//! Validate-and-replace pipeline.
//!
//! Combines the pure format checks and search templates from
//! [`crate::platform`] with a [`crate::probe::Probe`] to turn a product URL
//! into a `UrlValidation`: valid as submitted, replaced with a reachable
//! search URL, or invalid.

mod batch;
mod orchestrator;
mod products;
mod types;

// Re-export public API
pub use batch::validate_product_urls;
pub use orchestrator::{find_replacement_url, validate_and_replace_url, ReplacementTier};
pub use products::{
    extract_products, merge_validation, record_from_value, validate_products, ValidatedProducts,
};
pub use types::{ProductUrlRecord, UrlStatus, UrlValidation, ValidationSummary};
