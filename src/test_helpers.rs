//! Granule sources and builders for tests.
//!
//! These are real `GranuleSource` implementations over in-memory data,
//! kept in the library so both unit tests and integration tests can drive
//! the full command path without a network.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    domain::filters::FilterSet,
    domain::granule::Granule,
    domain::page::{PageCursor, PageRequest, PageResponse},
    infrastructure::config::DEFAULT_PAGE_SIZE,
    infrastructure::source::{GranuleSource, SourceError},
};

/// Build `n` distinct granules with stable ids `G0..Gn`
pub fn make_granules(n: usize) -> Vec<Granule> {
    (0..n)
        .map(|i| Granule::new(format!("G{i}"), format!("granule {i}")))
        .collect()
}

/// Slice a full result set into pages with numeric offset cursors.
///
/// `exhausted` is reported truthfully: the page containing the final item
/// carries `exhausted = true`, and an empty result set is terminal on the
/// first page.
fn page_of(granules: &[Granule], cursor: &PageCursor, page_size: usize) -> PageResponse {
    let offset = match cursor {
        PageCursor::Start => 0,
        PageCursor::Token(token) => token.parse::<usize>().unwrap_or(0),
    };
    let end = granules.len().min(offset + page_size);
    let items = granules[offset.min(granules.len())..end].to_vec();
    let exhausted = end >= granules.len();

    PageResponse {
        items,
        next_cursor: (!exhausted).then(|| end.to_string()),
        exhausted,
    }
}

/// Source serving a fixed result set page by page, ignoring filters.
///
/// Records every request it receives so tests can assert how often (and
/// with which cursors) the core actually fetched.
pub struct PagedSource {
    granules: Vec<Granule>,
    page_size: usize,
    requests: Mutex<Vec<PageRequest>>,
}

impl PagedSource {
    pub fn new(granules: Vec<Granule>, page_size: usize) -> Self {
        Self {
            granules,
            page_size,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Source over `total` generated granules
    pub fn with_total(total: usize, page_size: usize) -> Self {
        Self::new(make_granules(total), page_size)
    }

    /// How many fetches have been served
    pub fn fetch_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }

    /// Every request served so far, in order
    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl GranuleSource for PagedSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResponse, SourceError> {
        let response = page_of(&self.granules, &request.cursor, self.page_size);
        self.requests.lock().expect("requests lock").push(request);
        Ok(response)
    }
}

/// Source whose result set depends on the request's filter set.
///
/// Unmatched filter sets resolve to the base (unfiltered) result set, so a
/// reverted filter serves the same granules as the original baseline.
pub struct FilteredSource {
    base: Vec<Granule>,
    per_filter: Vec<(FilterSet, Vec<Granule>)>,
    page_size: usize,
}

impl FilteredSource {
    pub fn new(base: Vec<Granule>) -> Self {
        Self {
            base,
            per_filter: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Register the result set served for a specific filter set
    pub fn on_filters(mut self, filters: FilterSet, granules: Vec<Granule>) -> Self {
        self.per_filter.push((filters, granules));
        self
    }
}

#[async_trait]
impl GranuleSource for FilteredSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResponse, SourceError> {
        let granules = self
            .per_filter
            .iter()
            .find(|(filters, _)| filters == &request.filters)
            .map(|(_, granules)| granules)
            .unwrap_or(&self.base);
        Ok(page_of(granules, &request.cursor, self.page_size))
    }
}

/// Source that always fails
pub struct FailingSource;

#[async_trait]
impl GranuleSource for FailingSource {
    async fn fetch_page(&self, _request: PageRequest) -> Result<PageResponse, SourceError> {
        Err(SourceError::Unavailable("connection refused".into()))
    }
}
