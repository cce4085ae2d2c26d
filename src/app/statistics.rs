//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats};
use crate::validate::ValidationSummary;

/// Prints a one-line summary of a validation run.
///
/// Works with both plain and JSON log formats (log::info! handles formatting).
pub fn print_summary(summary: &ValidationSummary, elapsed_seconds: f64) {
    info!(
        "✅ Checked {} product URL{} ({} valid, {} replaced, {} invalid) in {:.1}s",
        summary.total,
        if summary.total == 1 { "" } else { "s" },
        summary.valid,
        summary.replaced,
        summary.invalid,
        elapsed_seconds
    );
}

/// Non-zero error counts for one side of the transport/status split.
pub fn error_counts(stats: &ProcessingStats, transport: bool) -> Vec<(ErrorType, usize)> {
    ErrorType::iter()
        .filter(|error_type| error_type.is_transport() == transport)
        .map(|error_type| (error_type, stats.get_error_count(error_type)))
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Prints probe, error, and info counts to the log.
///
/// Errors are grouped into failures before any response (timeouts, refused
/// connections) and unsuccessful status codes.
pub fn print_error_statistics(stats: &ProcessingStats) {
    let total_errors = stats.total_errors();
    let total_info = stats.total_info();

    info!("Probes issued: {}", stats.total_probes());

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for (heading, transport) in [("No response", true), ("Unsuccessful status", false)] {
            let counts = error_counts(stats, transport);
            if counts.is_empty() {
                continue;
            }
            info!("  {}:", heading);
            for (error_type, count) in counts {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}
