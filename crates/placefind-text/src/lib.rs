//! placefind-text
//!
//! String handling for place search: the comparison form used for matching
//! (`normalize`), tiered relevance scoring (`score`) and the name collation
//! used when scores and types tie (`collate`).

pub mod collate;
pub mod normalize;
pub mod score;

pub use collate::{collate, CollationKey};
pub use normalize::{fold, normalize};
pub use score::{score, MatchTier, Scorer};
