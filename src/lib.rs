//! product_links library: product URL validation and repair
//!
//! Checks that e-commerce product links point at a real product page on
//! their marketplace, and replaces the ones that don't with a search URL that
//! resolves: first the marketplace's own search, then a `site:`-scoped web
//! search. Links are checked in two stages: a pure format check against the
//! platform's product-URL shape, then a HEAD probe with a timeout.
//!
//! # Example
//!
//! ```no_run
//! use product_links::initialization::init_client;
//! use product_links::{validate_and_replace_url, HttpProber, DEFAULT_PROBE_TIMEOUT};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = init_client("Mozilla/5.0 (compatible; ProductValidator/1.0)")?;
//! let prober = HttpProber::new(client);
//!
//! let result = validate_and_replace_url(
//!     &prober,
//!     "https://aliexpress.com/some/random/page",
//!     "AliExpress",
//!     "wireless earbuds",
//!     DEFAULT_PROBE_TIMEOUT,
//! )
//! .await;
//! println!("{} -> {}", result.status, result.final_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Probing requires a Tokio runtime. The format checks and search URL
//! builders are synchronous and never touch the network.

mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod platform;
pub mod probe;
mod run;
pub mod server;
pub mod validate;

// Re-export public API
pub use config::{CheckConfig, LogFormat, LogLevel, ServeConfig, DEFAULT_PROBE_TIMEOUT};
pub use platform::{
    build_search_url, generic_search_url, is_valid_product_url_for_platform, normalize_platform,
    platform_links, site_search_url, Platform, PlatformKey, PlatformLink,
};
pub use probe::{HttpProber, Probe, ValidationResult};
pub use run::{read_products, run_check, run_check_with, CheckReport};
pub use server::start_server;
pub use validate::{
    find_replacement_url, validate_and_replace_url, validate_product_urls, ProductUrlRecord,
    UrlStatus, UrlValidation, ValidationSummary,
};
