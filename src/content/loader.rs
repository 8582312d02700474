use thiserror::Error;
use tracing::debug;

use super::fetch::{FetchError, PageFetcher};
use super::page::ContentPage;
use super::store::{PageStore, StoreError};
use crate::resolver::PageId;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// A served page, with whether it came out of the local cache (and therefore
/// required no connectivity) or from a fresh fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    pub page: ContentPage,
    pub from_cache: bool,
}

/// Serves pages cache-first, falling back to the remote backend and warming
/// the cache on the way back.
pub struct ContentLoader<S, F> {
    store: S,
    fetcher: F,
}

impl<S: PageStore, F: PageFetcher + Sync> ContentLoader<S, F> {
    pub fn new(store: S, fetcher: F) -> Self {
        Self { store, fetcher }
    }

    /// Resolves `id` to its page. Each call is a single-shot pass: cache
    /// check, then at most one fetch attempt, then persist. A fetch failure
    /// on a cache miss is surfaced as-is; there is no retry and never a
    /// partially constructed page. Concurrent loads for the same id are
    /// independent; duplicate fetches end in idempotent whole-entry writes.
    pub async fn load(&self, id: &PageId) -> Result<LoadedPage, LoadError> {
        if let Some(page) = self.store.get(id)? {
            debug!(%id, "cache hit");
            return Ok(LoadedPage {
                page,
                from_cache: true,
            });
        }

        debug!(%id, "cache miss, fetching");
        let page = self.fetcher.fetch_page(id).await?;
        self.store.put(id, &page)?;

        Ok(LoadedPage {
            page,
            from_cache: false,
        })
    }
}
