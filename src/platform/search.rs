//! Search URL templates.
//!
//! Every function here is total and deterministic: any platform label and any
//! product name produce a URL, with the name percent-encoded into the query.

use serde::Serialize;

use super::{normalize_platform, Platform, PlatformKey};

const GOOGLE_SEARCH: &str = "https://www.google.com/search?q=";

/// Builds the platform's own search-results URL for `product_name`.
///
/// Unknown platforms fall back to [`generic_search_url`].
///
/// # Examples
///
/// ```
/// use product_links::build_search_url;
///
/// assert_eq!(
///     build_search_url("AliExpress", "wireless earbuds"),
///     "https://www.aliexpress.com/wholesale?SearchText=wireless%20earbuds"
/// );
/// ```
pub fn build_search_url(platform_label: &str, product_name: &str) -> String {
    native_search_url(&normalize_platform(platform_label), product_name)
}

/// [`build_search_url`] for an already normalized platform.
pub fn native_search_url(platform: &Platform, product_name: &str) -> String {
    let q = urlencoding::encode(product_name);
    let Platform::Known(key) = platform else {
        return generic_search_for(platform, product_name);
    };

    match key {
        PlatformKey::Aliexpress => format!("https://www.aliexpress.com/wholesale?SearchText={q}"),
        PlatformKey::Amazon => format!("https://www.amazon.com/s?k={q}"),
        PlatformKey::Ebay => format!("https://www.ebay.com/sch/i.html?_nkw={q}"),
        PlatformKey::Walmart => format!("https://www.walmart.com/search?q={q}"),
        PlatformKey::Dhgate => {
            format!("https://www.dhgate.com/wholesale/search.do?act=search&searchkey={q}")
        }
        PlatformKey::Banggood => format!("https://www.banggood.com/search/{q}.html"),
        PlatformKey::Alibaba => format!(
            "https://www.alibaba.com/trade/search?fsb=y&IndexArea=product_en&SearchText={q}"
        ),
        PlatformKey::Target => format!("https://www.target.com/s?searchTerm={q}"),
        PlatformKey::Bestbuy => format!("https://www.bestbuy.com/site/searchpage.jsp?st={q}"),
        PlatformKey::Temu => format!("https://www.temu.com/search_result.html?search_key={q}"),
        PlatformKey::Shopee => format!("https://shopee.com/search?keyword={q}"),
        PlatformKey::Lazada => format!("https://www.lazada.com/catalog/?q={q}"),
    }
}

/// Builds a web search URL scoped to the platform's domain with `site:`.
///
/// This is the last replacement tier. Known platforms use their canonical
/// domain; unknown labels are compacted (whitespace removed), encoded and
/// suffixed with `.com`.
pub fn generic_search_url(platform_label: &str, product_name: &str) -> String {
    generic_search_for(&normalize_platform(platform_label), product_name)
}

/// [`generic_search_url`] for an already normalized platform.
pub fn generic_search_for(platform: &Platform, product_name: &str) -> String {
    let domain = match platform {
        Platform::Known(key) => key.domain().to_string(),
        Platform::Other(label) => {
            let compact: String = label.chars().filter(|c| !c.is_whitespace()).collect();
            format!("{}.com", urlencoding::encode(&compact))
        }
    };
    format!(
        "{GOOGLE_SEARCH}site:{domain}+{}",
        urlencoding::encode(product_name)
    )
}

/// Builds a web search URL where the whole `site:<domain> <title>` query is
/// encoded, as used for link listings that should always resolve.
pub fn site_search_url(key: PlatformKey, product_title: &str) -> String {
    let query = format!("site:{} {}", key.domain(), product_title);
    format!("{GOOGLE_SEARCH}{}", urlencoding::encode(&query))
}

/// A labelled site-search link for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformLink {
    pub platform: PlatformKey,
    pub label: &'static str,
    pub url: String,
}

/// Site-search links for `product_title` on each of `platforms`, in order.
pub fn platform_links(product_title: &str, platforms: &[PlatformKey]) -> Vec<PlatformLink> {
    platforms
        .iter()
        .map(|&key| PlatformLink {
            platform: key,
            label: key.label(),
            url: site_search_url(key, product_title),
        })
        .collect()
}
