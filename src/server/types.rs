//! Server state and response types.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error_handling::ProcessingStats;

/// Shared state for the request handlers.
pub struct AppState<P> {
    pub prober: Arc<P>,
    pub stats: Arc<ProcessingStats>,
    /// Used when a request does not carry `timeout_ms`
    pub default_timeout: Duration,
    pub start_time: Arc<Instant>,
}

impl<P> AppState<P> {
    pub fn new(prober: Arc<P>, stats: Arc<ProcessingStats>, default_timeout: Duration) -> Self {
        Self {
            prober,
            stats,
            default_timeout,
            start_time: Arc::new(Instant::now()),
        }
    }
}

// Manual impl: a derive would require `P: Clone`
impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            prober: Arc::clone(&self.prober),
            stats: Arc::clone(&self.stats),
            default_timeout: self.default_timeout,
            start_time: Arc::clone(&self.start_time),
        }
    }
}

/// JSON error body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// JSON response for `/status`
#[derive(Serialize)]
pub struct StatusResponse {
    pub elapsed_seconds: f64,
    pub probes: usize,
    pub errors: Counts,
    pub info: Counts,
}

/// A total plus the non-zero counters by name
#[derive(Serialize)]
pub struct Counts {
    pub total: usize,
    pub by_type: BTreeMap<&'static str, usize>,
}
