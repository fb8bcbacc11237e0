use std::fmt;

use serde::{Deserialize, Serialize};

/// Marketplace item identifier. The scraper forwards whatever the upstream
/// dashboard returned, which is numeric for API-sourced rows but may be a
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One product row scraped from a livestream dashboard.
///
/// Every field is optional: rows parsed from the page DOM only carry a
/// subset of what the product-list API returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_clicks: Option<f64>,
    /// Click-through rate in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders_created: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_sold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
}

/// Body of `GET /preview/{sessionId}`.
///
/// `count` is the backend's total and drives the "more products" line; it is
/// not recomputed from `products`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub count: u64,
    #[serde(default)]
    pub products: Vec<ProductSummary>,
}
