//! Liveness probing.
//!
//! A probe answers one question: does this URL currently resolve to a
//! 2xx/3xx response? The answer is always a `ValidationResult`; probes never
//! fail with an error.
//!
//! `Probe` is the seam between the validation logic and the network. The
//! production implementation is [`HttpProber`]; tests substitute fakes.

mod http;

use std::future::Future;
use std::time::Duration;

use serde::Serialize;

use crate::config::{REACHABLE_STATUS_MAX, REACHABLE_STATUS_MIN};
use crate::error_handling::{categorize_status, ErrorType};

pub use http::HttpProber;

/// Message recorded when a probe hits its deadline.
pub const TIMEOUT_MESSAGE: &str = "timeout";

/// Outcome of a single liveness probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True iff the final status was in [200, 400)
    pub is_valid: bool,
    /// Final HTTP status, absent when no response was received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Human-readable outcome
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Failure category, `None` on success
    #[serde(skip)]
    pub failure: Option<ErrorType>,
}

impl ValidationResult {
    /// Result for a received response with the given final status.
    pub fn from_status(status: u16) -> Self {
        if is_reachable_status(status) {
            Self {
                is_valid: true,
                status: Some(status),
                message: Some("URL is accessible".to_string()),
                failure: None,
            }
        } else {
            Self {
                is_valid: false,
                status: Some(status),
                message: Some(format!("HTTP {status}")),
                failure: Some(categorize_status(status)),
            }
        }
    }

    /// Result for a probe that ran out of time.
    pub fn timeout() -> Self {
        Self {
            is_valid: false,
            status: None,
            message: Some(TIMEOUT_MESSAGE.to_string()),
            failure: Some(ErrorType::HttpRequestTimeoutError),
        }
    }

    /// Result for a probe that failed before a status was received.
    pub fn transport_error(kind: ErrorType, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            status: None,
            message: Some(message.into()),
            failure: Some(kind),
        }
    }

    /// True when the probe gave up because of its deadline.
    pub fn is_timeout(&self) -> bool {
        self.failure == Some(ErrorType::HttpRequestTimeoutError)
    }
}

/// Returns true for statuses in [200, 400).
pub fn is_reachable_status(status: u16) -> bool {
    (REACHABLE_STATUS_MIN..REACHABLE_STATUS_MAX).contains(&status)
}

/// Checks whether a URL is live.
///
/// Implementations must honor `timeout` by abandoning the request (not just
/// the wait for it) and must encode every failure in the returned
/// `ValidationResult`.
pub trait Probe {
    /// Probes `url`, giving up after `timeout`.
    fn probe(&self, url: &str, timeout: Duration) -> impl Future<Output = ValidationResult> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachable_range() {
        assert!(!is_reachable_status(199));
        assert!(is_reachable_status(200));
        assert!(is_reachable_status(204));
        assert!(is_reachable_status(301));
        assert!(is_reachable_status(399));
        assert!(!is_reachable_status(400));
        assert!(!is_reachable_status(404));
        assert!(!is_reachable_status(500));
    }

    #[test]
    fn test_from_status_success() {
        let result = ValidationResult::from_status(200);
        assert!(result.is_valid);
        assert_eq!(result.status, Some(200));
        assert_eq!(result.message.as_deref(), Some("URL is accessible"));
        assert!(result.failure.is_none());
    }

    #[test]
    fn test_from_status_failure_records_code() {
        let result = ValidationResult::from_status(404);
        assert!(!result.is_valid);
        assert_eq!(result.status, Some(404));
        assert_eq!(result.message.as_deref(), Some("HTTP 404"));
        assert_eq!(result.failure, Some(ErrorType::HttpRequestNotFound));
    }

    #[test]
    fn test_timeout_result() {
        let result = ValidationResult::timeout();
        assert!(!result.is_valid);
        assert!(result.status.is_none());
        assert_eq!(result.message.as_deref(), Some("timeout"));
        assert!(result.is_timeout());
    }

    #[test]
    fn test_serialization_skips_failure_and_empty_status() {
        let json = serde_json::to_value(ValidationResult::timeout()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "isValid": false, "message": "timeout" })
        );
    }
}
