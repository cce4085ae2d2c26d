//! Marketplace platforms.
//!
//! This module provides:
//! - The closed set of known platforms (`PlatformKey`)
//! - Normalization of free-text platform labels (`normalize_platform`)
//! - Per-platform product URL shape checks (`format`)
//! - Per-platform search URL templates (`search`)

pub mod format;
pub mod search;

use serde::Serialize;
use strum_macros::EnumIter;

pub use format::is_valid_product_url_for_platform;
pub use search::{
    build_search_url, generic_search_url, platform_links, site_search_url, PlatformLink,
};

/// A known marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKey {
    Aliexpress,
    Amazon,
    Ebay,
    Walmart,
    Dhgate,
    Banggood,
    Alibaba,
    Target,
    Bestbuy,
    Temu,
    Shopee,
    Lazada,
}

/// Match order for `normalize_platform`. First substring hit wins, so the
/// position of each token is part of the observable behavior.
pub const PLATFORM_MATCH_ORDER: &[PlatformKey] = &[
    PlatformKey::Aliexpress,
    PlatformKey::Amazon,
    PlatformKey::Ebay,
    PlatformKey::Walmart,
    PlatformKey::Dhgate,
    PlatformKey::Banggood,
    PlatformKey::Alibaba,
    PlatformKey::Target,
    PlatformKey::Bestbuy,
    PlatformKey::Temu,
    PlatformKey::Shopee,
    PlatformKey::Lazada,
];

/// Platforms in display priority order (US market first).
pub const DEFAULT_PLATFORMS: &[PlatformKey] = &[
    PlatformKey::Amazon,
    PlatformKey::Walmart,
    PlatformKey::Ebay,
    PlatformKey::Target,
    PlatformKey::Bestbuy,
    PlatformKey::Aliexpress,
    PlatformKey::Temu,
    PlatformKey::Dhgate,
    PlatformKey::Banggood,
    PlatformKey::Shopee,
    PlatformKey::Lazada,
];

/// US-focused platforms.
pub const US_PLATFORMS: &[PlatformKey] = &[
    PlatformKey::Amazon,
    PlatformKey::Walmart,
    PlatformKey::Ebay,
    PlatformKey::Target,
    PlatformKey::Bestbuy,
];

/// International and wholesale platforms.
pub const INTERNATIONAL_PLATFORMS: &[PlatformKey] = &[
    PlatformKey::Aliexpress,
    PlatformKey::Temu,
    PlatformKey::Dhgate,
    PlatformKey::Banggood,
    PlatformKey::Shopee,
    PlatformKey::Lazada,
];

impl PlatformKey {
    /// Canonical lowercase key.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKey::Aliexpress => "aliexpress",
            PlatformKey::Amazon => "amazon",
            PlatformKey::Ebay => "ebay",
            PlatformKey::Walmart => "walmart",
            PlatformKey::Dhgate => "dhgate",
            PlatformKey::Banggood => "banggood",
            PlatformKey::Alibaba => "alibaba",
            PlatformKey::Target => "target",
            PlatformKey::Bestbuy => "bestbuy",
            PlatformKey::Temu => "temu",
            PlatformKey::Shopee => "shopee",
            PlatformKey::Lazada => "lazada",
        }
    }

    /// Tokens searched for in a lowercased label during normalization.
    pub fn match_tokens(&self) -> &'static [&'static str] {
        match self {
            PlatformKey::Aliexpress => &["aliexpress"],
            PlatformKey::Amazon => &["amazon"],
            PlatformKey::Ebay => &["ebay"],
            PlatformKey::Walmart => &["walmart"],
            PlatformKey::Dhgate => &["dhgate"],
            PlatformKey::Banggood => &["banggood"],
            PlatformKey::Alibaba => &["alibaba"],
            PlatformKey::Target => &["target"],
            PlatformKey::Bestbuy => &["bestbuy", "best buy"],
            PlatformKey::Temu => &["temu"],
            PlatformKey::Shopee => &["shopee"],
            PlatformKey::Lazada => &["lazada"],
        }
    }

    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            PlatformKey::Aliexpress => "AliExpress",
            PlatformKey::Amazon => "Amazon",
            PlatformKey::Ebay => "eBay",
            PlatformKey::Walmart => "Walmart",
            PlatformKey::Dhgate => "DHgate",
            PlatformKey::Banggood => "Banggood",
            PlatformKey::Alibaba => "Alibaba",
            PlatformKey::Target => "Target",
            PlatformKey::Bestbuy => "BestBuy",
            PlatformKey::Temu => "Temu",
            PlatformKey::Shopee => "Shopee",
            PlatformKey::Lazada => "Lazada",
        }
    }

    /// Domain used for `site:` scoped web searches.
    pub fn domain(&self) -> &'static str {
        match self {
            PlatformKey::Aliexpress => "aliexpress.com",
            PlatformKey::Amazon => "amazon.com",
            PlatformKey::Ebay => "ebay.com",
            PlatformKey::Walmart => "walmart.com",
            PlatformKey::Dhgate => "dhgate.com",
            PlatformKey::Banggood => "banggood.com",
            PlatformKey::Alibaba => "alibaba.com",
            PlatformKey::Target => "target.com",
            PlatformKey::Bestbuy => "bestbuy.com",
            PlatformKey::Temu => "temu.com",
            PlatformKey::Shopee => "shopee.com",
            PlatformKey::Lazada => "lazada.com",
        }
    }
}

impl std::fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of normalizing a platform label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// The label contained a known platform token.
    Known(PlatformKey),
    /// No token matched; holds the lowercased label.
    Other(String),
}

impl Platform {
    /// Canonical key string, or the lowercased label for unknown platforms.
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Known(key) => key.as_str(),
            Platform::Other(label) => label,
        }
    }

    /// The known key, if any.
    pub fn key(&self) -> Option<PlatformKey> {
        match self {
            Platform::Known(key) => Some(*key),
            Platform::Other(_) => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizes a free-text platform label ("AliExpress", "Amazon US", "Best Buy").
///
/// The label is lowercased and searched for each key's `match_tokens` in
/// `PLATFORM_MATCH_ORDER`; the first key with a token contained in the label
/// wins. A label containing two tokens therefore resolves by list position,
/// not by match length.
pub fn normalize_platform(label: &str) -> Platform {
    let lowered = label.to_lowercase();

    PLATFORM_MATCH_ORDER
        .iter()
        .find(|key| key.match_tokens().iter().any(|token| lowered.contains(token)))
        .map(|key| Platform::Known(*key))
        .unwrap_or(Platform::Other(lowered))
}
