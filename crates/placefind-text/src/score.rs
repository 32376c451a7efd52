//! Relevance scoring of one candidate against one query.
//!
//! Tiers are tried in order and the first that applies wins:
//!
//! | Tier        | Score   | Condition                                    |
//! |-------------|---------|----------------------------------------------|
//! | `Exact`     | 100     | normalized name equals normalized query      |
//! | `Prefix`    | 80      | name starts with query                       |
//! | `Substring` | 60      | name contains query                          |
//! | `Secondary` | 40      | region (city) or commune (place) contains it |
//! | `Overlap`   | 0..=20  | positional character overlap                 |
//!
//! Cities then get a flat +10, including on a zero base score. A final score
//! of exactly 0 means "no match".

use crate::normalize::normalize;

pub const EXACT_SCORE: f64 = 100.0;
pub const PREFIX_SCORE: f64 = 80.0;
pub const SUBSTRING_SCORE: f64 = 60.0;
pub const SECONDARY_SCORE: f64 = 40.0;
pub const OVERLAP_MAX_SCORE: f64 = 20.0;
pub const CITY_BONUS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchTier {
    Exact,
    Prefix,
    Substring,
    Secondary,
    /// Fraction of aligned equal characters, in `0.0..=1.0`.
    Overlap(f64),
}

impl MatchTier {
    pub fn base_score(self) -> f64 {
        match self {
            MatchTier::Exact => EXACT_SCORE,
            MatchTier::Prefix => PREFIX_SCORE,
            MatchTier::Substring => SUBSTRING_SCORE,
            MatchTier::Secondary => SECONDARY_SCORE,
            MatchTier::Overlap(ratio) => ratio * OVERLAP_MAX_SCORE,
        }
    }
}

/// Share of index-aligned equal characters, over the longer of the two strings.
///
/// A cheap stand-in for edit distance: "abidjan" vs "abidjna" scores 5/7,
/// but a single inserted character up front drops everything after it.
pub fn positional_overlap(name: &str, query: &str) -> f64 {
    let name_len = name.chars().count();
    let query_len = query.chars().count();
    let longest = name_len.max(query_len);
    if longest == 0 {
        return 0.0;
    }
    let matches = name.chars().zip(query.chars()).filter(|(a, b)| a == b).count();
    matches as f64 / longest as f64
}

/// Scores candidates against one query, normalizing the query once.
#[derive(Debug, Clone)]
pub struct Scorer {
    query: String,
}

impl Scorer {
    pub fn new(query: &str) -> Self {
        Self { query: normalize(query) }
    }

    pub fn normalized_query(&self) -> &str {
        &self.query
    }

    pub fn classify(&self, name: &str, secondary: &str) -> MatchTier {
        let name = normalize(name);
        if name == self.query {
            return MatchTier::Exact;
        }
        if name.starts_with(&self.query) {
            return MatchTier::Prefix;
        }
        if name.contains(&self.query) {
            return MatchTier::Substring;
        }
        if normalize(secondary).contains(&self.query) {
            return MatchTier::Secondary;
        }
        MatchTier::Overlap(positional_overlap(&name, &self.query))
    }

    /// `secondary` is the region for a city and the commune name for a place.
    pub fn score(&self, name: &str, secondary: &str, is_city: bool) -> f64 {
        let base = self.classify(name, secondary).base_score();
        if is_city { base + CITY_BONUS } else { base }
    }
}

/// One-shot form of [`Scorer::score`].
pub fn score(query: &str, name: &str, secondary: &str, is_city: bool) -> f64 {
    Scorer::new(query).score(name, secondary, is_city)
}
