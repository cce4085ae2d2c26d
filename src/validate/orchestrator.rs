//! Validate-and-replace state machine.
//!
//! ```text
//! checking-format ──fail──────────────────────────┐
//!        │ pass                                   ▼
//! checking-liveness ──dead──────────────────► replacing
//!        │ live                                   │
//!        ▼                    native search live? ├─yes─► replaced
//!      valid                 generic search live? ├─yes─► replaced
//!                                                 └─no──► invalid
//! ```
//!
//! Each tier is probed exactly once. There are no retries.

use std::time::Duration;

use log::{debug, info, warn};

use super::types::{UrlStatus, UrlValidation};
use crate::platform::format::matches_platform_format;
use crate::platform::search::{generic_search_for, native_search_url};
use crate::platform::{normalize_platform, Platform};
use crate::probe::{Probe, ValidationResult};

/// Which fallback tier produced a replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementTier {
    /// The platform's own search page
    NativeSearch,
    /// A `site:`-scoped web search
    GenericSearch,
}

/// Finds a reachable search URL for `product_name` on `platform_label`.
///
/// Probes the platform's native search URL, then the generic web search URL.
/// Returns `None` when neither responds successfully.
pub async fn find_replacement_url<P: Probe>(
    prober: &P,
    platform_label: &str,
    product_name: &str,
    timeout: Duration,
) -> Option<String> {
    let platform = normalize_platform(platform_label);
    find_replacement(prober, &platform, product_name, timeout)
        .await
        .map(|(url, _)| url)
}

async fn find_replacement<P: Probe>(
    prober: &P,
    platform: &Platform,
    product_name: &str,
    timeout: Duration,
) -> Option<(String, ReplacementTier)> {
    let native = native_search_url(platform, product_name);
    if prober.probe(&native, timeout).await.is_valid {
        return Some((native, ReplacementTier::NativeSearch));
    }
    debug!("Native search for {platform} unreachable: {native}");

    let generic = generic_search_for(platform, product_name);
    if prober.probe(&generic, timeout).await.is_valid {
        return Some((generic, ReplacementTier::GenericSearch));
    }
    debug!("Generic search for {platform} unreachable: {generic}");

    None
}

/// Validates a product URL and replaces it with a search URL if it is
/// malformed for its platform or not reachable.
///
/// Never fails: every outcome, including total exhaustion of the fallback
/// tiers, is encoded in the returned `UrlValidation`. On exhaustion the
/// original URL is kept as `final_url` and flagged invalid.
pub async fn validate_and_replace_url<P: Probe>(
    prober: &P,
    url: &str,
    platform_label: &str,
    product_name: &str,
    timeout: Duration,
) -> UrlValidation {
    let platform = normalize_platform(platform_label);

    if !matches_platform_format(&platform, url) {
        debug!("URL does not match {platform} product format: {url}");
        return match find_replacement(prober, &platform, product_name, timeout).await {
            Some((replacement, tier)) => {
                info!("Replaced malformed {platform} URL with {tier:?}: {url} -> {replacement}");
                replaced(
                    url,
                    replacement,
                    "Invalid URL format, replaced with platform search".to_string(),
                )
            }
            None => {
                warn!("No replacement found for malformed {platform} URL: {url}");
                invalid(url, "Invalid URL format and no replacement found".to_string())
            }
        };
    }

    let liveness = prober.probe(url, timeout).await;
    if liveness.is_valid {
        return UrlValidation {
            is_valid: true,
            final_url: url.to_string(),
            status: UrlStatus::Valid,
            original_url: None,
            message: Some("URL is valid and accessible".to_string()),
        };
    }

    match find_replacement(prober, &platform, product_name, timeout).await {
        Some((replacement, tier)) => {
            info!("Replaced dead {platform} URL with {tier:?}: {url} -> {replacement}");
            replaced(
                url,
                replacement,
                format!(
                    "Original URL returned {}, replaced with platform search",
                    describe_liveness(&liveness)
                ),
            )
        }
        None => {
            warn!("No replacement found for dead {platform} URL: {url}");
            invalid(
                url,
                liveness
                    .message
                    .unwrap_or_else(|| "URL is not accessible and no replacement found".to_string()),
            )
        }
    }
}

fn describe_liveness(result: &ValidationResult) -> String {
    match result.status {
        Some(status) => status.to_string(),
        None => "error".to_string(),
    }
}

fn replaced(original: &str, replacement: String, message: String) -> UrlValidation {
    UrlValidation {
        is_valid: true,
        final_url: replacement,
        status: UrlStatus::Replaced,
        original_url: Some(original.to_string()),
        message: Some(message),
    }
}

fn invalid(original: &str, message: String) -> UrlValidation {
    UrlValidation {
        is_valid: false,
        final_url: original.to_string(),
        status: UrlStatus::Invalid,
        original_url: Some(original.to_string()),
        message: Some(message),
    }
}
