//! Probe failure categorization.
//!
//! Maps unsuccessful status codes and `reqwest` errors onto `ErrorType`.

use super::types::ErrorType;

/// Categorizes a status code outside the reachable range into an `ErrorType`.
pub fn categorize_status(status: u16) -> ErrorType {
    match status {
        400 => ErrorType::HttpRequestBadRequest,
        401 => ErrorType::HttpRequestUnauthorized,
        403 => ErrorType::HttpRequestBotDetectionError,
        404 => ErrorType::HttpRequestNotFound,
        405 => ErrorType::HttpRequestMethodNotAllowed,
        429 => ErrorType::HttpRequestTooManyRequests,
        500 => ErrorType::HttpRequestInternalServerError,
        502 => ErrorType::HttpRequestBadGateway,
        503 => ErrorType::HttpRequestServiceUnavailable,
        504 => ErrorType::HttpRequestGatewayTimeout,
        _ => ErrorType::HttpRequestOtherStatus,
    }
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Status-bearing errors are routed through [`categorize_status`]; everything
/// else is classified by the error kind `reqwest` reports.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        return categorize_status(status.as_u16());
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Renders an error and its source chain as one line.
///
/// `reqwest` errors carry the useful detail (DNS failure, refused connection)
/// in their sources, while the top-level message is just "error sending request".
pub fn describe_error(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
