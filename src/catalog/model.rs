//! Deserializable representation of the remote product payload.
//!
//! The types mirror the endpoint's JSON verbatim. Per the loader contract
//! there is no per-item validation: every field carries a default so a sparse
//! entry flows through to rendering as-is instead of failing the whole
//! payload. Only a payload that is not a JSON array is an error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Externally assigned product identifier.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u64);

/// One catalog entry, immutable once fetched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

/// Parse the endpoint payload: a JSON array of products.
pub fn parse_catalog(payload: &str) -> Result<Vec<Product>> {
    serde_json::from_str(payload).context("catalog payload is not a JSON product array")
}
