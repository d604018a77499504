//! Domain value objects
//!
//! This module contains the pure data types the core operates on:
//! - Datasets and granules (result items)
//! - Filter sets
//! - Page requests and responses

pub mod dataset;
pub mod filters;
pub mod granule;
pub mod page;

pub use dataset::{DatasetId, RetrievalContext};
pub use filters::FilterSet;
pub use granule::{Granule, GranuleId};
pub use page::{PageCursor, PageRequest, PageResponse};
