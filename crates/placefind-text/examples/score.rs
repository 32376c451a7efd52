use std::env;

// Score a query against a handful of names and show which tier each hit.
// Usage:
//   cargo run -p placefind-text --example score -- "your query" [--city] NAME [NAME...]

use placefind_text::{normalize, Scorer};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!(
            "Usage: cargo run -p placefind-text --example score -- <query> [--city] NAME [NAME...]"
        );
        std::process::exit(1);
    }
    let mut query: Option<String> = None;
    let mut names: Vec<String> = Vec::new();
    let mut is_city = false;

    for arg in &args {
        match arg.as_str() {
            "--city" => {
                is_city = true;
            }
            s if s.starts_with("--") => {
                eprintln!("Unknown flag: {}", s);
                std::process::exit(2);
            }
            s => {
                if query.is_none() {
                    query = Some(s.to_string());
                } else {
                    names.push(s.to_string());
                }
            }
        }
    }

    let Some(query) = query else {
        eprintln!("Missing <query> argument");
        std::process::exit(1);
    };

    let scorer = Scorer::new(&query);
    println!("Query: {} -> {:?}\n", query, scorer.normalized_query());
    for name in &names {
        let tier = scorer.classify(name, "");
        let score = scorer.score(name, "", is_city);
        println!("{:>7.2}  {:<24} {:<24} {:?}", score, name, normalize(name), tier);
    }
    Ok(())
}
