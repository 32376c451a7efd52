use placefind_core::types::{City, Place, PlaceKind, ResultKind, SearchResult};
use placefind_text::Scorer;

/// A result paired with its provisional relevance score.
///
/// Lives only between collection and ranking; `rank` strips the score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub result: SearchResult,
    pub score: f64,
}

impl ScoredCandidate {
    pub fn new(result: SearchResult, score: f64) -> Self {
        Self { result, score }
    }

    pub fn kind(&self) -> ResultKind {
        self.result.kind
    }
}

/// Scores every city and place against `query` and keeps the positive ones.
///
/// Each place is scored on its own name (tagged by its kind) and, separately,
/// on its commune name alone, which yields a commune candidate. That second
/// pass lets a commune surface when none of its neighborhoods match the query
/// directly, and from neighborhood records even when the snapshot has no
/// standalone commune record. The resulting duplicates are expected; see
/// [`crate::dedupe::dedupe_communes`].
///
/// Output order follows input order but carries no meaning.
pub fn collect(query: &str, cities: &[City], places: &[Place]) -> Vec<ScoredCandidate> {
    let scorer = Scorer::new(query);
    let mut out = Vec::new();

    for city in cities {
        let score = scorer.score(&city.name, &city.region, true);
        if score > 0.0 {
            out.push(ScoredCandidate::new(SearchResult::from_city(city), score));
        }
    }

    for place in places {
        let score = scorer.score(&place.name, &place.commune_name, false);
        if score > 0.0 {
            out.push(ScoredCandidate::new(SearchResult::from_place(place), score));
        }

        if place.commune_name.trim().is_empty() {
            continue;
        }
        let commune_score = scorer.score(&place.commune_name, "", false);
        if commune_score > 0.0 {
            let result = match place.kind {
                PlaceKind::Commune => SearchResult {
                    name: place.commune_name.clone(),
                    ..SearchResult::from_place(place)
                },
                PlaceKind::Neighborhood => SearchResult::commune_of(place),
            };
            out.push(ScoredCandidate::new(result, commune_score));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_scores_are_dropped() {
        let places = vec![Place::neighborhood("n1", "Niangon", "Yopougon")];
        assert!(collect("zzzzz", &[], &places).is_empty());
    }

    #[test]
    fn every_city_survives_through_the_bonus() {
        let cities =
            vec![City::new("c1", "Abidjan", "Lagunes"), City::new("c2", "Korhogo", "Poro")];
        let got = collect("zzzzz", &cities, &[]);
        assert_eq!(got.len(), 2);
        assert!(got.iter().all(|c| c.kind() == ResultKind::City && c.score == 10.0));
    }

    #[test]
    fn neighborhood_yields_itself_and_its_commune() {
        let places = vec![Place::neighborhood("n1", "Niangon", "Yopougon").with_parent_city("c1")];
        let got = collect("yopougon", &[], &places);
        assert_eq!(got.len(), 2);

        assert_eq!(got[0].kind(), ResultKind::Neighborhood);
        assert_eq!(got[0].result.name, "Niangon");
        assert_eq!(got[0].score, 40.0);

        assert_eq!(got[1].kind(), ResultKind::Commune);
        assert_eq!(got[1].result.name, "Yopougon");
        assert_eq!(got[1].result.parent_city_id.as_deref(), Some("c1"));
        assert_eq!(got[1].score, 100.0);
    }

    #[test]
    fn commune_record_is_scored_twice() {
        let places = vec![Place::commune("p1", "Cocody")];
        let got = collect("coco", &[], &places);
        assert_eq!(got.len(), 2);
        assert!(got.iter().all(|c| c.kind() == ResultKind::Commune && c.score == 80.0));
    }

    #[test]
    fn blank_commune_name_gives_no_commune_candidate() {
        let places = vec![Place::neighborhood("n1", "Zone 4", "")];
        let got = collect("zone", &[], &places);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].kind(), ResultKind::Neighborhood);
    }
}
