//! Cart counter with durable local storage.
//!
//! The cart is a single non-negative integer, not a contents list: every
//! "Add to Cart" control increments the same counter. The persisted form is
//! one file holding the decimal string, read once at startup and rewritten
//! after every mutation. The write gate opens only when `load()` has run, so
//! a mutation that lands first adjusts memory only and a genuine saved value
//! can never be clobbered by the startup default.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key; also the file name inside the state directory.
pub const CART_COUNT_KEY: &str = "cartCount";

const STATE_DIR_ENV: &str = "STOREFRONT_STATE_DIR";
const DEFAULT_STATE_DIR: &str = ".storefront";

/// Resolve the state directory.
///
/// Honors `STOREFRONT_STATE_DIR` when set and non-empty, otherwise falls back
/// to `$HOME/.storefront`.
pub fn default_state_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(STATE_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = env::var("HOME")
        .context("HOME is not set; set STOREFRONT_STATE_DIR to choose a state directory")?;
    Ok(PathBuf::from(home).join(DEFAULT_STATE_DIR))
}

/// One key-value entry on disk: `cartCount` → decimal string.
pub struct CartStore {
    path: PathBuf,
}

impl CartStore {
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(CART_COUNT_KEY),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted count. Absent or unparsable values are zero.
    pub fn load(&self) -> u64 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Write the count back as its decimal string form.
    pub fn persist(&self, count: u64) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating state dir {}", parent.display()))?;
        }
        fs::write(&self.path, count.to_string())
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

/// In-memory counter bound to a `CartStore`.
pub struct CartCounter {
    count: u64,
    loaded: bool,
    store: CartStore,
}

impl CartCounter {
    pub fn new(store: CartStore) -> Self {
        Self {
            count: 0,
            loaded: false,
            store,
        }
    }

    /// Adopt the persisted count and open the write gate.
    ///
    /// Runs at most once; a repeat call is a no-op so writes that already
    /// happened cannot be overwritten by a re-read.
    pub fn load(&mut self) {
        if self.loaded {
            return;
        }
        self.count = self.store.load();
        self.loaded = true;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Increment by exactly one. Not linked to any particular product.
    pub fn add(&mut self) -> Result<()> {
        self.count += 1;
        self.persist_if_loaded()
    }

    /// Reset to zero. The zero persists like any other mutation.
    pub fn clear(&mut self) -> Result<()> {
        self.count = 0;
        self.persist_if_loaded()
    }

    fn persist_if_loaded(&self) -> Result<()> {
        if self.loaded {
            self.store.persist(self.count)
        } else {
            Ok(())
        }
    }
}
