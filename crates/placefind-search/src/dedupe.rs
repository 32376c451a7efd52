use std::collections::HashMap;

use placefind_core::types::ResultKind;
use placefind_text::normalize;

use crate::candidate::ScoredCandidate;

/// Collapses commune candidates naming the same commune into one.
///
/// Communes are grouped by normalized commune name; each group keeps its
/// strictly highest-scoring candidate, the earliest one on ties. Cities and
/// neighborhoods pass through untouched. The surviving commune takes the
/// position of its group's first occurrence, so relative input order is kept.
pub fn dedupe_communes(candidates: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    let mut out: Vec<ScoredCandidate> = Vec::with_capacity(candidates.len());
    let mut by_commune: HashMap<String, usize> = HashMap::new();

    for candidate in candidates {
        if candidate.kind() != ResultKind::Commune {
            out.push(candidate);
            continue;
        }
        let key = commune_key(&candidate);
        match by_commune.get(&key) {
            Some(&slot) => {
                if candidate.score > out[slot].score {
                    out[slot] = candidate;
                }
            }
            None => {
                by_commune.insert(key, out.len());
                out.push(candidate);
            }
        }
    }
    out
}

/// Normalized commune name, or the normalized result name when the commune
/// name is missing or normalizes to nothing.
fn commune_key(candidate: &ScoredCandidate) -> String {
    candidate
        .result
        .commune_name
        .as_deref()
        .map(normalize)
        .filter(|key| !key.is_empty())
        .unwrap_or_else(|| normalize(&candidate.result.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use placefind_core::types::{City, Place, SearchResult};

    fn commune(id: &str, name: &str, score: f64) -> ScoredCandidate {
        ScoredCandidate::new(SearchResult::from_place(&Place::commune(id, name)), score)
    }

    #[test]
    fn keeps_highest_score_per_commune() {
        let got = dedupe_communes(vec![
            commune("a", "Yopougon", 40.0),
            commune("b", "yopougon", 100.0),
            commune("c", "Yopougon ", 80.0),
        ]);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].result.id, "b");
        assert_eq!(got[0].score, 100.0);
    }

    #[test]
    fn ties_keep_first_seen() {
        let got = dedupe_communes(vec![commune("a", "Cocody", 80.0), commune("b", "Cocody", 80.0)]);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].result.id, "a");
    }

    #[test]
    fn non_communes_pass_through() {
        let city =
            ScoredCandidate::new(SearchResult::from_city(&City::new("c1", "Cocody", "")), 110.0);
        let hood = ScoredCandidate::new(
            SearchResult::from_place(&Place::neighborhood("n1", "Cocody", "Cocody")),
            100.0,
        );
        let got = dedupe_communes(vec![
            city.clone(),
            commune("a", "Cocody", 100.0),
            hood.clone(),
            hood.clone(),
            commune("b", "Côcody", 100.0),
        ]);
        assert_eq!(got.len(), 4);
        assert_eq!(got[0], city);
        assert_eq!(got[1].result.id, "a");
        assert_eq!(got[2], hood);
        assert_eq!(got[3], hood);
    }

    #[test]
    fn blank_commune_name_falls_back_to_result_name() {
        let unnamed = |id: &str, name: &str, commune_name: &str| {
            let mut place = Place::commune(id, name);
            place.commune_name = commune_name.to_string();
            ScoredCandidate::new(SearchResult::from_place(&place), 80.0)
        };
        let got = dedupe_communes(vec![
            unnamed("p1", "Cocody", ""),
            unnamed("p2", "Cocovi", "  "),
            unnamed("p3", "Cocody", "-"),
        ]);
        let ids: Vec<&str> = got.iter().map(|c| c.result.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn distinct_communes_are_kept() {
        let got = dedupe_communes(vec![commune("a", "Abobo", 60.0), commune("b", "Adjamé", 60.0)]);
        assert_eq!(got.len(), 2);
    }
}
