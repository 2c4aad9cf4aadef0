//! Product catalog: payload model plus the one-shot remote loader.
//!
//! `model` mirrors the endpoint's JSON array so the rest of the crate never
//! does ad-hoc JSON handling; `fetch` owns the single HTTP read and the slot
//! the view polls for its completion.

pub mod fetch;
pub mod model;

pub use fetch::{CatalogClient, CatalogFetch, DEFAULT_CATALOG_URL};
pub use model::{Product, ProductId, parse_catalog};
