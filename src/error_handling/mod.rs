//! Error handling and probe statistics.
//!
//! This module provides:
//! - Setup error types (`InitializationError`)
//! - Probe failure categories and their extraction from `reqwest` errors
//! - Probe statistics tracking (failures and info events)
//!
//! Probe failures never surface as `Err`; they are classified here and
//! recorded on the `ValidationResult` of the probe that observed them.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_status, describe_error};
pub use stats::ProcessingStats;
pub use types::{ErrorType, InfoType, InitializationError};
