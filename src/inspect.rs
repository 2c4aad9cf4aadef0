//! Detail-view inspector.
//!
//! Two states: closed (nothing held) and open (exactly one product held).
//! `view` opens or replaces, `close` always returns to closed. Which click
//! counts as "close" (the overlay and the Close button, but not the window
//! content) is decided by the view layer; the cell only tracks the reference.
//! Nothing here survives a restart.

use crate::catalog::Product;

#[derive(Debug, Default)]
pub struct Inspector {
    current: Option<Product>,
}

impl Inspector {
    /// Open the detail view on `product`, replacing any previous one.
    pub fn view(&mut self, product: Product) {
        self.current = Some(product);
    }

    /// Close the detail view from any state.
    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Product> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
