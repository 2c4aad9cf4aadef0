//! Shared library for the storefront demo.
//!
//! The crate exposes the four state cells behind the single-page storefront:
//! the fetched product catalog, the client-side filter engine, the persisted
//! cart counter, and the detail-view inspector. Each cell is plain state with
//! an explicit set of mutating operations; the `storefront` binary wires them
//! to egui widgets and stays their only reader/writer.

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod inspect;

pub use cart::{CART_COUNT_KEY, CartCounter, CartStore, default_state_dir};
pub use catalog::{
    CatalogClient, CatalogFetch, DEFAULT_CATALOG_URL, Product, ProductId, parse_catalog,
};
pub use filter::{
    FilterState, PRICE_BRACKETS, WILDCARD, category_options, filter_catalog, parse_bracket,
};
pub use inspect::Inspector;
