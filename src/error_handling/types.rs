//! Error type definitions.
//!
//! This module defines the setup error types and the probe failure categories
//! used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error binding the request handler's listener.
    #[error("Failed to bind server to port {port}: {source}")]
    ServerBindError {
        /// Port that could not be bound
        port: u16,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Why a liveness probe did not succeed.
///
/// Probe failures are data, not errors: they end up in `ValidationResult` and
/// route the record to replacement. This enum classifies them for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Transport errors
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestRedirectError,
    HttpRequestBuilderError,
    HttpRequestRequestError,
    HttpRequestOtherError,
    // Status codes outside [200, 400)
    HttpRequestBadRequest,          // 400 Bad Request
    HttpRequestUnauthorized,        // 401 Unauthorized
    HttpRequestBotDetectionError,   // 403 Forbidden - typically bot detection
    HttpRequestNotFound,            // 404 Not Found
    HttpRequestMethodNotAllowed,    // 405 - some storefronts reject HEAD
    HttpRequestTooManyRequests,     // 429 Too Many Requests
    HttpRequestInternalServerError, // 500 Internal Server Error
    HttpRequestBadGateway,          // 502 Bad Gateway
    HttpRequestServiceUnavailable,  // 503 Service Unavailable
    HttpRequestGatewayTimeout,      // 504 Gateway Timeout
    HttpRequestOtherStatus,
}

/// Notable probe events that are not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    HttpRedirect,  // Probe ended on a different URL than requested
    HttpsRedirect, // HTTP to HTTPS redirect
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestMethodNotAllowed => "Method Not Allowed (405)",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
            ErrorType::HttpRequestOtherStatus => "Other unsuccessful status",
        }
    }

    /// True for failures that happened before any status line was received.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorType::HttpRequestTimeoutError
                | ErrorType::HttpRequestConnectError
                | ErrorType::HttpRequestRedirectError
                | ErrorType::HttpRequestBuilderError
                | ErrorType::HttpRequestRequestError
                | ErrorType::HttpRequestOtherError
        )
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::HttpRedirect => "HTTP redirect",
            InfoType::HttpsRedirect => "HTTP to HTTPS redirect",
        }
    }
}
