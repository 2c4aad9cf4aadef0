//! One-shot remote catalog read.
//!
//! The application issues exactly one GET against the product endpoint at
//! startup. There is no retry, no backoff, and no timeout: on failure the
//! outcome is reported through the polling slot and the catalog keeps its
//! prior value. The fetch runs on a Tokio runtime owned by the caller so the
//! single-threaded view loop never blocks on it.

use crate::catalog::model::{Product, parse_catalog};
use anyhow::{Context, Result, bail};
use std::sync::{Arc, Mutex, Weak};

/// The fixed product-catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// HTTP client for the catalog endpoint.
#[derive(Clone)]
pub struct CatalogClient {
    url: String,
    client: reqwest::Client,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_CATALOG_URL)
    }

    /// Point the client at a non-default endpoint. Test servers only; the
    /// application always reads the fixed endpoint.
    pub fn with_url(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Perform the single catalog read.
    ///
    /// Network failure, a non-success status, and an unparsable body are all
    /// the same kind of outcome to the caller: a failed load.
    pub async fn fetch(&self) -> Result<Vec<Product>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("requesting {}", self.url))?;
        let status = response.status();
        if !status.is_success() {
            bail!("catalog endpoint returned HTTP {status}");
        }
        let body = response
            .text()
            .await
            .context("reading catalog response body")?;
        parse_catalog(&body)
    }
}

type FetchSlot = Mutex<Option<Result<Vec<Product>, String>>>;

/// A single-shot catalog fetch in flight.
///
/// The spawned task posts its outcome into a shared slot which the view polls
/// once per frame. The task holds only a `Weak` reference: when the owning
/// view is torn down before the response arrives, the upgrade fails and the
/// completion is dropped instead of resurrecting discarded state.
pub struct CatalogFetch {
    slot: Arc<FetchSlot>,
}

impl CatalogFetch {
    /// Spawn the fetch on `handle` and return the slot to poll.
    pub fn spawn(handle: &tokio::runtime::Handle, client: CatalogClient) -> Self {
        let slot: Arc<FetchSlot> = Arc::new(Mutex::new(None));
        let weak: Weak<FetchSlot> = Arc::downgrade(&slot);
        let url = client.url().to_string();
        handle.spawn(async move {
            let outcome = client.fetch().await.map_err(|err| format!("{err:#}"));
            match weak.upgrade() {
                Some(slot) => {
                    if let Ok(mut pending) = slot.lock() {
                        *pending = Some(outcome);
                    }
                }
                None => tracing::debug!(%url, "catalog fetch completed after teardown; dropped"),
            }
        });
        Self { slot }
    }

    /// Take the completed outcome, if the fetch has finished.
    ///
    /// Returns `None` while the request is still in flight and again after the
    /// outcome has been consumed.
    pub fn take(&self) -> Option<Result<Vec<Product>, String>> {
        match self.slot.lock() {
            Ok(mut pending) => pending.take(),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("test runtime")
    }

    fn poll_until_done(fetch: &CatalogFetch) -> Result<Vec<Product>, String> {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(outcome) = fetch.take() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "fetch did not complete in time");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn refused_connection_reports_through_slot() {
        let rt = runtime();
        // Port 9 (discard) is not listening in the test environment.
        let client = CatalogClient::with_url("http://127.0.0.1:9/products");
        let fetch = CatalogFetch::spawn(rt.handle(), client);
        let outcome = poll_until_done(&fetch);
        assert!(outcome.is_err(), "connection refused must surface as Err");
    }

    #[test]
    fn take_consumes_the_outcome_once() {
        let rt = runtime();
        let client = CatalogClient::with_url("http://127.0.0.1:9/products");
        let fetch = CatalogFetch::spawn(rt.handle(), client);
        let _ = poll_until_done(&fetch);
        assert!(fetch.take().is_none());
    }

    #[test]
    fn teardown_before_completion_is_a_no_op() {
        let rt = runtime();
        let client = CatalogClient::with_url("http://127.0.0.1:9/products");
        let fetch = CatalogFetch::spawn(rt.handle(), client);
        drop(fetch);
        // The task must finish (and drop its outcome) without panicking.
        std::thread::sleep(Duration::from_millis(200));
        rt.shutdown_timeout(Duration::from_secs(5));
    }
}
