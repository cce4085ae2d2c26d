//! Validation of free-form product JSON.
//!
//! Products arrive as arbitrary JSON objects that carry `product_url`,
//! `platform` and `product_name` among other fields. The extra fields are
//! passed through untouched; only the URL fields are rewritten.

use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use super::batch::validate_product_urls;
use super::types::{ProductUrlRecord, UrlValidation, ValidationSummary};
use crate::probe::Probe;

/// Products with validated URLs plus per-status counts.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedProducts {
    pub success: bool,
    pub products: Vec<Value>,
    pub summary: ValidationSummary,
}

/// Pulls the product list out of a JSON document.
///
/// Accepts either a bare array or an object with a `products` array.
pub fn extract_products(document: Value) -> Option<Vec<Value>> {
    match document {
        Value::Array(products) => Some(products),
        Value::Object(mut map) => match map.remove("products") {
            Some(Value::Array(products)) => Some(products),
            _ => None,
        },
        _ => None,
    }
}

/// Reads the URL fields of one product. Missing or non-string fields are
/// empty, which the format check then rejects.
pub fn record_from_value(product: &Value) -> ProductUrlRecord {
    let field = |name: &str| {
        product
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    ProductUrlRecord::new(field("product_url"), field("platform"), field("product_name"))
}

/// Writes a validation outcome back into a product.
///
/// `product_url` becomes the final URL, `url_status` and `last_validated`
/// are set, and `original_url` is present only when the URL was changed or
/// flagged.
pub fn merge_validation(product: Value, validation: &UrlValidation, validated_at: &str) -> Value {
    let mut fields = match product {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    fields.insert(
        "product_url".to_string(),
        Value::String(validation.final_url.clone()),
    );
    fields.insert(
        "url_status".to_string(),
        Value::String(validation.status.as_str().to_string()),
    );
    match &validation.original_url {
        Some(original) => {
            fields.insert("original_url".to_string(), Value::String(original.clone()));
        }
        None => {
            fields.remove("original_url");
        }
    }
    fields.insert(
        "last_validated".to_string(),
        Value::String(validated_at.to_string()),
    );

    Value::Object(fields)
}

/// Validates every product and merges the outcomes back in order.
pub async fn validate_products<P: Probe>(
    prober: &P,
    products: Vec<Value>,
    timeout: Duration,
) -> ValidatedProducts {
    let records: Vec<ProductUrlRecord> = products.iter().map(record_from_value).collect();
    let results = validate_product_urls(prober, &records, timeout).await;
    let summary = ValidationSummary::from_results(&results);

    let validated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let products = products
        .into_iter()
        .zip(results.iter())
        .map(|(product, validation)| merge_validation(product, validation, &validated_at))
        .collect();

    ValidatedProducts {
        success: true,
        products,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::UrlStatus;
    use serde_json::json;

    #[test]
    fn test_extract_products_from_array() {
        let products = extract_products(json!([{ "id": 1 }, { "id": 2 }]));
        assert_eq!(products.map(|p| p.len()), Some(2));
    }

    #[test]
    fn test_extract_products_from_object() {
        let products = extract_products(json!({ "products": [{ "id": 1 }] }));
        assert_eq!(products, Some(vec![json!({ "id": 1 })]));
    }

    #[test]
    fn test_extract_products_rejects_other_shapes() {
        assert!(extract_products(json!({ "items": [] })).is_none());
        assert!(extract_products(json!({ "products": "none" })).is_none());
        assert!(extract_products(json!("products")).is_none());
        assert!(extract_products(Value::Null).is_none());
    }

    #[test]
    fn test_record_from_value_defaults_missing_fields() {
        let record = record_from_value(&json!({ "platform": "amazon", "product_url": 42 }));
        assert_eq!(record, ProductUrlRecord::new("", "amazon", ""));
    }

    #[test]
    fn test_merge_keeps_extra_fields() {
        let product = json!({
            "id": "p-1",
            "price": 19.99,
            "product_url": "https://www.ebay.com/itm/1",
            "platform": "ebay",
            "product_name": "usb hub",
        });
        let validation = UrlValidation {
            is_valid: true,
            final_url: "https://www.ebay.com/sch/i.html?_nkw=usb%20hub".to_string(),
            status: UrlStatus::Replaced,
            original_url: Some("https://www.ebay.com/itm/1".to_string()),
            message: None,
        };

        let merged = merge_validation(product, &validation, "2026-01-01T00:00:00.000Z");

        assert_eq!(merged["id"], "p-1");
        assert_eq!(merged["price"], 19.99);
        assert_eq!(merged["product_url"], validation.final_url.as_str());
        assert_eq!(merged["url_status"], "replaced");
        assert_eq!(merged["original_url"], "https://www.ebay.com/itm/1");
        assert_eq!(merged["last_validated"], "2026-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_merge_drops_stale_original_url() {
        let product = json!({
            "product_url": "https://www.amazon.com/dp/B000000001",
            "original_url": "https://old.example",
        });
        let validation = UrlValidation {
            is_valid: true,
            final_url: "https://www.amazon.com/dp/B000000001".to_string(),
            status: UrlStatus::Valid,
            original_url: None,
            message: None,
        };

        let merged = merge_validation(product, &validation, "now");

        assert!(merged.get("original_url").is_none());
        assert_eq!(merged["url_status"], "valid");
    }
}
