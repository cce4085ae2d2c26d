//! HTTP client initialization.
//!
//! The client is built once by the caller and handed to `HttpProber`; nothing
//! in the crate keeps a process-wide client.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::MAX_REDIRECT_HOPS;

/// Initializes the HTTP client used for liveness probes.
///
/// Creates a `reqwest::Client` configured with:
/// - The given User-Agent header
/// - Redirect following enabled (up to `MAX_REDIRECT_HOPS`)
/// - No client-wide timeout; every probe carries its own deadline
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(user_agent: &str) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .user_agent(user_agent.to_string())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(Arc::new(client))
}
