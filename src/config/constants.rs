//! Configuration constants.
//!
//! This module defines the defaults used throughout the application,
//! including probe timeouts, the probe User-Agent, and server settings.

use std::time::Duration;

/// Default per-probe timeout in milliseconds.
///
/// Applies to every tier of the validate-and-replace chain independently, so a
/// record that exhausts all three tiers can take up to three times this value.
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5000;

/// Default per-probe timeout as a `Duration`.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS);

/// User-Agent sent with every liveness probe.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; ProductValidator/1.0)";

// Redirect handling
/// Maximum number of redirect hops followed by a probe
pub const MAX_REDIRECT_HOPS: usize = 10;

// Request handler
/// Default port for the `serve` subcommand
pub const DEFAULT_SERVER_PORT: u16 = 3000;
/// Route for the batch validation endpoint
pub const VALIDATE_ROUTE: &str = "/validate-product-urls";
/// Route for the probe statistics endpoint
pub const STATUS_ROUTE: &str = "/status";

// Status code boundaries for liveness
/// Lowest status code counted as reachable (inclusive)
pub const REACHABLE_STATUS_MIN: u16 = 200;
/// Status codes at or above this value are unreachable
pub const REACHABLE_STATUS_MAX: u16 = 400;
