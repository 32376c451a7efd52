use placefind_core::config::SearchSettings;
use placefind_core::traits::LocationStore;
use placefind_core::types::{City, Place, SearchResult, TypePriority};
use placefind_text::normalize;

use crate::candidate::collect;
use crate::dedupe::dedupe_communes;
use crate::rank::rank;

/// Where the query comes from; picks the result cap from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchContext {
    /// Suggestions under a picker while the user types.
    Interactive,
    /// The dedicated search screen.
    Screen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub limit: usize,
    pub priority: TypePriority,
    pub min_query_chars: usize,
}

impl SearchOptions {
    pub fn new(limit: usize, priority: TypePriority) -> Self {
        Self {
            limit,
            priority,
            min_query_chars: SearchSettings::default().min_query_chars,
        }
    }

    pub fn for_context(settings: &SearchSettings, context: SearchContext) -> Self {
        let limit = match context {
            SearchContext::Interactive => settings.interactive_limit,
            SearchContext::Screen => settings.screen_limit,
        };
        Self {
            limit,
            priority: settings.priority,
            min_query_chars: settings.min_query_chars,
        }
    }

    pub fn with_priority(mut self, priority: TypePriority) -> Self {
        self.priority = priority;
        self
    }
}

/// The whole pipeline over data the caller already holds.
///
/// Returns nothing for queries whose normalized form is shorter than
/// `options.min_query_chars`; that is a noise filter, not an error.
pub fn search_snapshot(
    query: &str,
    cities: &[City],
    places: &[Place],
    options: &SearchOptions,
) -> Vec<SearchResult> {
    let normalized_len = normalize(query).chars().count();
    if normalized_len < options.min_query_chars {
        tracing::trace!(normalized_len, "query below minimum length");
        return Vec::new();
    }

    let candidates = collect(query, cities, places);
    let collected = candidates.len();
    let deduped = dedupe_communes(candidates);
    tracing::debug!(
        collected,
        deduped = deduped.len(),
        limit = options.limit,
        "ranking candidates"
    );
    rank(deduped, options.limit, options.priority)
}

/// Search facade over a [`LocationStore`].
///
/// Holds no state between calls besides the store handle and settings; any
/// number of queries may run against it concurrently.
pub struct LocationSearch<S>
where
    S: LocationStore,
{
    store: S,
    settings: SearchSettings,
}

impl<S> LocationSearch<S>
where
    S: LocationStore,
{
    pub fn new(store: S) -> Self {
        Self::with_settings(store, SearchSettings::default())
    }

    pub fn with_settings(store: S, settings: SearchSettings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Mirrors the store. While `true`, every query returns an empty list.
    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// Ranked search with the interactive cap.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        self.search_in(query, SearchContext::Interactive)
    }

    pub fn search_in(&self, query: &str, context: SearchContext) -> Vec<SearchResult> {
        self.search_with(query, &SearchOptions::for_context(&self.settings, context))
    }

    pub fn search_with(&self, query: &str, options: &SearchOptions) -> Vec<SearchResult> {
        if self.store.is_loading() {
            tracing::trace!("location store still loading");
            return Vec::new();
        }
        let cities = self.store.cities();
        let places = self.store.places();
        search_snapshot(query, &cities, &places, options)
    }

    /// The first `limit` cities in store order, unscored. Used for an empty
    /// input, e.g. when a search field first gains focus.
    pub fn popular_or_default(&self, limit: usize) -> Vec<SearchResult> {
        if self.store.is_loading() {
            return Vec::new();
        }
        self.store.cities().iter().take(limit).map(SearchResult::from_city).collect()
    }

    /// [`Self::popular_or_default`] with the configured size.
    pub fn popular(&self) -> Vec<SearchResult> {
        self.popular_or_default(self.settings.popular_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placefind_core::store::{LocationSnapshot, MemoryLocationStore};
    use placefind_core::types::ResultKind;

    fn loaded(cities: Vec<City>, places: Vec<Place>) -> LocationSearch<MemoryLocationStore> {
        let snapshot = LocationSnapshot::new(cities, places);
        LocationSearch::new(MemoryLocationStore::with_snapshot(snapshot))
    }

    #[test]
    fn short_queries_return_nothing() {
        let engine = loaded(vec![City::new("c1", "Abidjan", "Lagunes")], vec![]);
        assert!(engine.search("").is_empty());
        assert!(engine.search("a").is_empty());
        assert!(engine.search(" a-' ").is_empty());
        assert_eq!(engine.search("ab").len(), 1);
    }

    #[test]
    fn loading_store_yields_empty_lists() {
        let engine = LocationSearch::new(MemoryLocationStore::new());
        assert!(engine.is_loading());
        assert!(engine.search("abidjan").is_empty());
        assert!(engine.popular_or_default(5).is_empty());
    }

    #[test]
    fn popular_is_a_prefix_of_cities() {
        let cities: Vec<City> =
            (0..12).map(|i| City::new(format!("c{i}"), format!("City {i}"), "")).collect();
        let engine = loaded(cities, vec![Place::commune("p1", "Cocody")]);
        let got = engine.popular_or_default(3);
        assert_eq!(got.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["c0", "c1", "c2"]);
        assert!(got.iter().all(|r| r.kind == ResultKind::City));
        assert_eq!(engine.popular().len(), 10);
    }

    #[test]
    fn context_selects_cap() {
        let places: Vec<Place> = (0..40)
            .map(|i| Place::neighborhood(format!("n{i}"), format!("Quartier {i}"), "Cocody"))
            .collect();
        let engine = loaded(vec![], places);
        assert_eq!(engine.search_in("quartier", SearchContext::Interactive).len(), 15);
        assert_eq!(engine.search_in("quartier", SearchContext::Screen).len(), 20);
        let custom = SearchOptions::new(3, TypePriority::CommuneFirst);
        assert_eq!(engine.search_with("quartier", &custom).len(), 3);
    }

    #[test]
    fn score_outranks_priority() {
        // under commune-first a city still beats a lower-scored neighborhood
        let engine = loaded(
            vec![City::new("c1", "Bingerville", "Cocody")],
            vec![Place::neighborhood("n1", "Riviera", "Cocody")],
        );
        let opts = SearchOptions::new(10, TypePriority::CommuneFirst);
        let got = engine.search_with("cocody", &opts);
        let kinds: Vec<ResultKind> = got.iter().map(|r| r.kind).collect();
        // commune 100, city 50 (40 + bonus), neighborhood 40
        assert_eq!(kinds, vec![ResultKind::Commune, ResultKind::City, ResultKind::Neighborhood]);
    }
}
