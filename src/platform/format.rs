//! Product URL shape validation.
//!
//! Pure checks of host and path against what a product-detail page looks like
//! on each platform. Nothing here touches the network.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::{normalize_platform, Platform, PlatformKey};

/// Banggood product pages end in `-p-<digits>.html`.
static BANGGOOD_PRODUCT_PATH: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"-p-\d+\.html$").ok());

/// AliExpress storefront hosts. A product host must end with one of these.
const ALIEXPRESS_HOSTS: &[&str] = &["aliexpress.com", "aliexpress.us", "aliexpress.ru"];

/// Returns true if `url` looks like a product-detail page for `platform_label`.
///
/// The label is normalized first (see [`normalize_platform`]). A string that
/// does not parse as an absolute URL is never valid, whatever the platform;
/// in particular a URL without a scheme (`www.amazon.com/dp/B000123`) is
/// rejected rather than guessed at.
///
/// # Examples
///
/// ```
/// use product_links::is_valid_product_url_for_platform;
///
/// assert!(is_valid_product_url_for_platform(
///     "Amazon",
///     "https://www.amazon.com/dp/B0CHX3TM6V"
/// ));
/// assert!(!is_valid_product_url_for_platform(
///     "AliExpress",
///     "https://aliexpress.com/some/random/page"
/// ));
/// ```
pub fn is_valid_product_url_for_platform(platform_label: &str, url: &str) -> bool {
    matches_platform_format(&normalize_platform(platform_label), url)
}

/// Same check as [`is_valid_product_url_for_platform`] for an already
/// normalized platform.
pub fn matches_platform_format(platform: &Platform, url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let host = parsed.host_str().unwrap_or_default().to_lowercase();
    let path = parsed.path().to_lowercase();
    let https = parsed.scheme() == "https";

    match platform {
        Platform::Known(key) => match key {
            PlatformKey::Aliexpress => {
                is_aliexpress_host(&host) && (path.contains("/item/") || path.starts_with("/i/"))
            }
            PlatformKey::Amazon => {
                host.contains("amazon.")
                    && (path.contains("/dp/") || path.contains("/gp/product/"))
            }
            PlatformKey::Ebay => host.contains("ebay.") && path.contains("/itm/"),
            PlatformKey::Walmart => host.contains("walmart.com") && path.contains("/ip/"),
            PlatformKey::Dhgate => host.contains("dhgate.com") && path.contains("/product/"),
            PlatformKey::Banggood => {
                host.contains("banggood.com")
                    && (is_banggood_product_path(&path) || path.contains("/product/"))
            }
            PlatformKey::Alibaba => {
                host.contains("alibaba.com")
                    && (path.contains("/product-detail/") || path.contains("/offer/"))
            }
            // No documented product path shape; host plus https only
            PlatformKey::Target => https && host.contains("target.com"),
            PlatformKey::Bestbuy => https && host.contains("bestbuy.com"),
            PlatformKey::Temu => https && host.contains("temu.com"),
            PlatformKey::Shopee => https && host.contains("shopee."),
            PlatformKey::Lazada => https && host.contains("lazada."),
        },
        Platform::Other(_) => https,
    }
}

fn is_aliexpress_host(host: &str) -> bool {
    ALIEXPRESS_HOSTS
        .iter()
        .any(|base| host.ends_with(base))
}

fn is_banggood_product_path(path: &str) -> bool {
    BANGGOOD_PRODUCT_PATH
        .as_ref()
        .is_some_and(|re| re.is_match(path))
}
