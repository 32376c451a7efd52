//! placefind-search
//!
//! Location search over cities, communes and neighborhoods:
//! collect scored candidates, collapse repeated communes, rank and cap.
//! [`LocationSearch`] wires the pipeline to a
//! [`placefind_core::traits::LocationStore`].

pub mod candidate;
pub mod dedupe;
pub mod engine;
pub mod rank;

pub use candidate::{collect, ScoredCandidate};
pub use dedupe::dedupe_communes;
pub use engine::{search_snapshot, LocationSearch, SearchContext, SearchOptions};
pub use rank::rank;
