use std::cmp::Ordering;

use placefind_core::types::{SearchResult, TypePriority};
use placefind_text::CollationKey;

use crate::candidate::ScoredCandidate;

/// Sorts by score (desc), type priority, then collated name, keeps the first
/// `limit` and strips the scores.
///
/// The sort is stable: candidates equal on all three keys keep input order.
pub fn rank(
    candidates: Vec<ScoredCandidate>,
    limit: usize,
    priority: TypePriority,
) -> Vec<SearchResult> {
    let mut keyed: Vec<(CollationKey, ScoredCandidate)> = candidates
        .into_iter()
        .map(|c| (CollationKey::new(&c.result.name), c))
        .collect();

    keyed.sort_by(|(ka, a), (kb, b)| compare(a, ka, b, kb, priority));
    keyed.truncate(limit);
    keyed.into_iter().map(|(_, c)| c.result).collect()
}

fn compare(
    a: &ScoredCandidate,
    a_key: &CollationKey,
    b: &ScoredCandidate,
    b_key: &CollationKey,
    priority: TypePriority,
) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| priority.rank(a.kind()).cmp(&priority.rank(b.kind())))
        .then_with(|| a_key.cmp(b_key))
}
