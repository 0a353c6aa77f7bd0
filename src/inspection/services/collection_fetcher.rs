use crate::inspection::domain::ListPage;
use crate::shared::error::InspectError;
use crate::shared::Result;

/// Default number of rows requested per page for full-collection fetches
pub const DEFAULT_PAGE_SIZE: u32 = 500;

/// Default hard ceiling on the number of page requests per collection
pub const DEFAULT_MAX_PAGES: u32 = 999;

/// CollectionFetcher - drives a single-page fetch until the collection is exhausted
///
/// Stopping conditions, checked after every page:
/// 1. the page is empty
/// 2. the first reported total is known and the rows received so far reach it
/// 3. the backend returned fewer rows than `page_size`
/// 4. `max_pages` requests have been issued
///
/// The total and the short page are independent signals, either one stops
/// the loop. Both count the rows the backend returned, including rows later
/// dropped during decoding. The page ceiling bounds the loop even against a
/// backend that never runs dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionFetcher {
    page_size: u32,
    max_pages: u32,
}

impl Default for CollectionFetcher {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl CollectionFetcher {
    /// Creates a fetcher
    ///
    /// # Errors
    /// Returns a validation error if `page_size` or `max_pages` is zero
    pub fn new(page_size: u32, max_pages: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(InspectError::Validation {
                message: "page size must be at least 1".to_string(),
            }
            .into());
        }
        if max_pages == 0 {
            return Err(InspectError::Validation {
                message: "max pages must be at least 1".to_string(),
            }
            .into());
        }
        Ok(Self {
            page_size,
            max_pages,
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Fetches every page and returns the rows in first-seen order
    ///
    /// # Arguments
    /// * `fetch_page` - Issues one request for `(page, page_size)`; filters
    ///   are captured by the closure
    ///
    /// # Errors
    /// The first failing page aborts the cycle and its error is returned as is.
    pub fn fetch_all<T, F>(&self, mut fetch_page: F) -> Result<Vec<T>>
    where
        F: FnMut(u32, u32) -> Result<ListPage<T>>,
    {
        let mut rows: Vec<T> = Vec::new();
        let mut seen: u64 = 0;
        let mut total: Option<u64> = None;

        for page in 1..=self.max_pages {
            let ListPage {
                rows: page_rows,
                total: page_total,
                received,
            } = fetch_page(page, self.page_size)?;

            if received == 0 {
                tracing::debug!(page, accumulated = rows.len(), "empty page, collection exhausted");
                return Ok(rows);
            }

            if total.is_none() {
                total = page_total;
            }

            seen += received as u64;
            rows.extend(page_rows);
            tracing::debug!(page, received, accumulated = rows.len(), ?total, "fetched page");

            if total.is_some_and(|t| seen >= t) {
                return Ok(rows);
            }
            if received < self.page_size as usize {
                return Ok(rows);
            }
        }

        tracing::warn!(
            max_pages = self.max_pages,
            accumulated = rows.len(),
            "page ceiling reached before the collection was exhausted"
        );
        Ok(rows)
    }
}
