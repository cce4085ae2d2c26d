//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, user agent, routes)
//! - CLI option types and parsing
//! - Library configuration structs

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    CheckArgs, CheckConfig, Cli, Command, LinksArgs, LogFormat, LogLevel, PlatformGroup,
    ServeArgs, ServeConfig,
};
