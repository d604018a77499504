use serde::{Deserialize, Serialize};

use crate::domain::{dataset::DatasetId, filters::FilterSet, granule::Granule};

/// Position of the page to fetch.
///
/// The continuation token is opaque to the core; it is produced by the
/// previous `PageResponse` and echoed back verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageCursor {
    #[default]
    Start,
    Token(String),
}

impl PageCursor {
    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start)
    }
}

/// One page request sent to the granule source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    pub dataset: DatasetId,
    pub filters: FilterSet,
    pub cursor: PageCursor,
}

impl PageRequest {
    /// First-page request for a (dataset, filter set) pair
    pub fn first_page(dataset: DatasetId, filters: FilterSet) -> Self {
        Self {
            dataset,
            filters,
            cursor: PageCursor::Start,
        }
    }
}

/// One page of results returned by the granule source.
///
/// `exhausted = true` means no further pages exist for this (dataset,
/// filter set) regardless of `next_cursor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    pub items: Vec<Granule>,
    pub next_cursor: Option<String>,
    pub exhausted: bool,
}

impl PageResponse {
    /// A page with more results expected after it
    pub fn partial(items: Vec<Granule>, next_cursor: impl Into<String>) -> Self {
        Self {
            items,
            next_cursor: Some(next_cursor.into()),
            exhausted: false,
        }
    }

    /// The last page of a result set
    pub fn last(items: Vec<Granule>) -> Self {
        Self {
            items,
            next_cursor: None,
            exhausted: true,
        }
    }

    /// Whether this page ends its session.
    ///
    /// Exhaustion is never inferred from item counts: only an explicit
    /// `exhausted` flag or an empty, cursor-less page is terminal.
    pub fn is_final(&self) -> bool {
        self.exhausted || (self.items.is_empty() && self.next_cursor.is_none())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_cursor_default_is_start() {
        assert_eq!(PageCursor::default(), PageCursor::Start);
        assert!(PageCursor::Start.is_start());
        assert!(!PageCursor::Token("p2".into()).is_start());
    }

    #[test]
    fn test_first_page_request() {
        let request = PageRequest::first_page(DatasetId::from("C1"), FilterSet::new());
        assert!(request.cursor.is_start());
        assert!(request.filters.is_empty());
    }

    #[rstest]
    // Explicit exhaustion is terminal even with a leftover cursor
    #[case(vec![Granule::new("G1", "g")], Some("p2".into()), true, true)]
    // Empty and cursor-less is terminal
    #[case(vec![], None, false, true)]
    // Empty but with a cursor is not terminal
    #[case(vec![], Some("p2".into()), false, false)]
    // A short page alone never implies exhaustion
    #[case(vec![Granule::new("G1", "g")], Some("p2".into()), false, false)]
    fn test_is_final(
        #[case] items: Vec<Granule>,
        #[case] next_cursor: Option<String>,
        #[case] exhausted: bool,
        #[case] expected: bool,
    ) {
        let response = PageResponse {
            items,
            next_cursor,
            exhausted,
        };
        assert_eq!(response.is_final(), expected);
    }

    #[test]
    fn test_page_response_serialization() {
        let response = PageResponse::partial(vec![Granule::new("G1", "g")], "p2");
        let serialized = serde_json::to_string(&response).expect("serialize");
        let deserialized: PageResponse = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(response, deserialized);
    }
}
