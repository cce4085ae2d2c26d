//! Validation input and output types.

use serde::{Deserialize, Serialize};

/// Terminal state of a validate-and-replace run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlStatus {
    /// The original URL is well-formed and live
    Valid,
    /// The original URL was swapped for a reachable search URL
    Replaced,
    /// Nothing reachable was found; the original URL is kept
    Invalid,
}

impl UrlStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlStatus::Valid => "valid",
            UrlStatus::Replaced => "replaced",
            UrlStatus::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for UrlStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of validating one product URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlValidation {
    /// False only for `UrlStatus::Invalid`
    pub is_valid: bool,
    /// URL to show: the original, or its replacement
    pub final_url: String,
    pub status: UrlStatus,
    /// The URL as submitted; set only when replaced or invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One product URL to validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUrlRecord {
    pub product_url: String,
    pub platform: String,
    pub product_name: String,
}

impl ProductUrlRecord {
    pub fn new(
        product_url: impl Into<String>,
        platform: impl Into<String>,
        product_name: impl Into<String>,
    ) -> Self {
        Self {
            product_url: product_url.into(),
            platform: platform.into(),
            product_name: product_name.into(),
        }
    }
}

/// Per-status counts over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub replaced: usize,
    pub invalid: usize,
}

impl ValidationSummary {
    pub fn from_results(results: &[UrlValidation]) -> Self {
        let count = |status: UrlStatus| results.iter().filter(|r| r.status == status).count();
        Self {
            total: results.len(),
            valid: count(UrlStatus::Valid),
            replaced: count(UrlStatus::Replaced),
            invalid: count(UrlStatus::Invalid),
        }
    }
}
