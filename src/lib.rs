//! Crop Recommender Rust Implementation
//!
//! Domain logic for an agriculture-assistance platform's matching layer,
//! operating on loosely-typed JSON documents as delivered by the document
//! store:
//! - `record`: alias-tolerant field access for reference records
//! - `query`: caller-supplied measurement vector with lenient parsing
//! - `recommender`: nearest-match selection by normalized L1 distance
//! - `search`: crop catalog filtering by categorical and range criteria
//! - `subsidy`: keyword/category filtering over subsidy listings
//!
//! Every operation is a pure, synchronous pass over caller-supplied values;
//! fetching the records themselves is the caller's concern.

pub mod error;
pub mod query;
pub mod record;
pub mod recommender;
pub mod search;
pub mod subsidy;

// Re-export commonly used types
pub use error::ShapeError;
pub use query::QueryVector;
pub use record::{resolve_attribute, resolve_label, Attribute};
pub use recommender::{
    nearest_match, recommend, MatchResult, Recommendation, NO_MATCH_MESSAGE, UNKNOWN_CROP_LABEL,
};
pub use search::{filter_crops, search_crops, CropFilters, CropSearchResults};
pub use subsidy::{filter_subsidies, search_subsidies, SubsidyQuery};
