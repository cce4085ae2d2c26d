use std::time::{Duration, Instant};

use futures::future::join_all;
use log::info;

use super::orchestrator::validate_and_replace_url;
use super::types::{ProductUrlRecord, UrlValidation, ValidationSummary};
use crate::probe::Probe;

/// Validates every record concurrently.
///
/// The output is index-aligned with `records`. One record's failure never
/// affects another, and the batch takes roughly as long as its slowest record.
pub async fn validate_product_urls<P: Probe>(
    prober: &P,
    records: &[ProductUrlRecord],
    timeout: Duration,
) -> Vec<UrlValidation> {
    let start = Instant::now();

    let results = join_all(records.iter().map(|record| {
        validate_and_replace_url(
            prober,
            &record.product_url,
            &record.platform,
            &record.product_name,
            timeout,
        )
    }))
    .await;

    let summary = ValidationSummary::from_results(&results);
    info!(
        "Validated {} product URLs in {:.2}s: {} valid, {} replaced, {} invalid",
        summary.total,
        start.elapsed().as_secs_f64(),
        summary.valid,
        summary.replaced,
        summary.invalid
    );

    results
}
