use std::env;
use std::path::PathBuf;

use placefind_core::store::LocationSnapshot;
use placefind_core::types::TypePriority;
use placefind_search::{search_snapshot, SearchOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <query> [locations.json]", args[0]);
        eprintln!("Example: {} 'yopougon' test_data/locations.json", args[0]);
        std::process::exit(1);
    }
    let query_text = &args[1];
    let data_file = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("test_data/locations.json"));
    println!("placefind-search-only\n=====================");
    println!("Query: {}", query_text);
    println!("Locations: {}", data_file.display());
    let snapshot = LocationSnapshot::from_json_file(&data_file)?;
    println!(
        "Loaded {} cities, {} places ({} commune records)",
        snapshot.cities.len(),
        snapshot.places.len(),
        snapshot.commune_count()
    );

    for priority in [TypePriority::CityFirst, TypePriority::CommuneFirst] {
        let options = SearchOptions::new(20, priority);
        let results = search_snapshot(query_text, &snapshot.cities, &snapshot.places, &options);
        println!("\n{:?}: {} results", priority, results.len());
        for (i, r) in results.iter().enumerate() {
            println!(
                "  {:>2}. {:<12} {}  ({})",
                i + 1,
                r.kind.as_str(),
                r.name,
                r.secondary_label().unwrap_or("-")
            );
        }
    }
    Ok(())
}
