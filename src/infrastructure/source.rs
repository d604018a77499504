use async_trait::async_trait;
use thiserror::Error;

use crate::domain::page::{PageRequest, PageResponse};

/// Errors a granule source may produce
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source failed to respond (network failure, upstream outage, ...)
    #[error("granule source unavailable: {0}")]
    Unavailable(String),
}

/// Contract for the external search index / dataset catalog service.
///
/// Implementations must return items in a stable order per (dataset,
/// filter set), must never repeat an item identity within one session, and
/// must report `exhausted` truthfully — the core's stop-loading guarantee
/// depends on it. One request yields one eventual response; there is no
/// streaming.
#[async_trait]
pub trait GranuleSource: Send + Sync {
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResponse, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display() {
        let err = SourceError::Unavailable("connection refused".into());
        assert_eq!(
            err.to_string(),
            "granule source unavailable: connection refused"
        );
    }
}
