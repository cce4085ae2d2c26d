//! One-shot validation of a product file.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use log::info;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::app::{print_error_statistics, print_summary};
use crate::config::CheckConfig;
use crate::error_handling::{InitializationError, ProcessingStats};
use crate::initialization::init_client;
use crate::probe::{HttpProber, Probe};
use crate::validate::{extract_products, validate_products};

/// Results of a check run.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Number of products read
    pub total: usize,
    /// Products whose URL was valid as submitted
    pub valid: usize,
    /// Products whose URL was replaced with a search URL
    pub replaced: usize,
    /// Products left with an unusable URL
    pub invalid: usize,
    /// Where results were written; `None` for stdout
    pub output: Option<PathBuf>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Validates every product in `config.file` and writes the merged products
/// with a summary as JSON.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not a product list,
/// if the HTTP client cannot be built, or if the output cannot be written.
/// Individual URL failures are never errors.
///
/// # Example
///
/// ```no_run
/// use product_links::{run_check, CheckConfig};
/// use std::path::PathBuf;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CheckConfig {
///     file: PathBuf::from("products.json"),
///     ..Default::default()
/// };
/// let report = run_check(config).await?;
/// println!("{} of {} URLs replaced", report.replaced, report.total);
/// # Ok(())
/// # }
/// ```
pub async fn run_check(config: CheckConfig) -> Result<CheckReport> {
    let products = read_products(&config.file).await?;

    let client = init_client(&config.user_agent).map_err(InitializationError::from)?;
    let stats = Arc::new(ProcessingStats::new());
    let prober = HttpProber::new(client).with_stats(Arc::clone(&stats));

    let report = run_check_with(&prober, products, &config).await?;
    print_error_statistics(&stats);
    Ok(report)
}

/// [`run_check`] over already-parsed products and a caller-supplied prober.
pub async fn run_check_with<P: Probe>(
    prober: &P,
    products: Vec<Value>,
    config: &CheckConfig,
) -> Result<CheckReport> {
    let start = Instant::now();
    info!("Validating {} products", products.len());

    let validated = validate_products(prober, products, config.timeout()).await;
    let rendered =
        serde_json::to_string_pretty(&validated).context("Failed to serialize results")?;
    write_output(config.output.as_deref(), &rendered).await?;

    let elapsed_seconds = start.elapsed().as_secs_f64();
    print_summary(&validated.summary, elapsed_seconds);

    Ok(CheckReport {
        total: validated.summary.total,
        valid: validated.summary.valid,
        replaced: validated.summary.replaced,
        invalid: validated.summary.invalid,
        output: config.output.clone(),
        elapsed_seconds,
    })
}

/// Reads a product list from `path`, or from stdin when `path` is `-`.
pub async fn read_products(path: &Path) -> Result<Vec<Value>> {
    let input = if path.as_os_str() == "-" {
        info!("Reading products from stdin");
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read products from stdin")?;
        buf
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to open input file {}", path.display()))?
    };

    let document: Value = serde_json::from_str(&input).context("Input is not valid JSON")?;
    extract_products(document).ok_or_else(|| {
        anyhow!("Input must be a JSON array of products or an object with a \"products\" array")
    })
}

async fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => tokio::fs::write(path, rendered)
            .await
            .with_context(|| format!("Failed to write results to {}", path.display())),
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(rendered.as_bytes())
                .await
                .context("Failed to write results to stdout")?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await.context("Failed to flush stdout")
        }
    }
}
