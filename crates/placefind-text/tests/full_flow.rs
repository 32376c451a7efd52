use placefind_text::score::{CITY_BONUS, EXACT_SCORE, OVERLAP_MAX_SCORE, SECONDARY_SCORE};
use placefind_text::{collate, normalize, score};

const SAMPLES: [&str; 8] = [
    "Côte d'Ivoire",
    "cote divoire",
    "COTE-D IVOIRE",
    "Yamoussoukro",
    "Grand-Bassam",
    "  Port-Bouët ",
    "N\u{2019}Douci",
    "",
];

#[test]
fn normalization_properties() {
    for s in SAMPLES {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "idempotent on {s:?}");
        assert!(!once.chars().any(|c| c.is_whitespace() || c == '-' || c == '\''), "{once:?}");
    }
    assert_eq!(normalize(SAMPLES[0]), normalize(SAMPLES[1]));
    assert_eq!(normalize(SAMPLES[1]), normalize(SAMPLES[2]));
}

#[test]
fn exact_match_is_strictly_supreme() {
    let query = "Port-Bouët";
    let exact = score(query, "port bouet", "", false);
    assert_eq!(exact, EXACT_SCORE);
    // the strongest non-exact outcomes, all on cities to include the bonus
    assert!(score(query, "Port-Bouët II", "", true) < exact);
    assert_eq!(score(query, "Abidjan", "Port-Bouët", true), SECONDARY_SCORE + CITY_BONUS);
    assert!(OVERLAP_MAX_SCORE + CITY_BONUS < exact);
}

#[test]
fn collation_is_consistent_with_sort() {
    let mut names = vec!["Yamoussoukro", "Abengourou", "Ébimpé", "agboville", "Divo"];
    names.sort_by(|a, b| collate(a, b));
    assert_eq!(names, vec!["Abengourou", "agboville", "Divo", "Ébimpé", "Yamoussoukro"]);
}
