//! Application helpers shared by the CLI and the server.
//!
//! This module provides shutdown signal handling and statistics printing.

pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use shutdown::cancel_on_ctrl_c;
pub use statistics::{print_error_statistics, print_summary};
