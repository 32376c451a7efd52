use std::env;
use std::path::PathBuf;

use placefind_core::config::Config;
use placefind_core::store::{LocationSnapshot, MemoryLocationStore};
use placefind_core::types::{SearchResult, TypePriority};
use placefind_search::{LocationSearch, SearchContext, SearchOptions};
use tracing_subscriber::EnvFilter;

struct Args {
    cmd: String,
    positional: Vec<String>,
    data: Option<PathBuf>,
    screen: bool,
    commune_first: bool,
    json: bool,
}

fn parse_args() -> Args {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!(
            "Usage: {} <search|popular> [args...] [--data FILE] [--screen] [--commune-first] [--json]",
            prog
        );
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    let mut parsed = Args {
        cmd,
        positional: Vec::new(),
        data: None,
        screen: false,
        commune_first: false,
        json: false,
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--data" => {
                if i + 1 >= args.len() {
                    eprintln!("--data requires a path");
                    std::process::exit(2);
                }
                parsed.data = Some(PathBuf::from(&args[i + 1]));
                i += 2;
                continue;
            }
            "--screen" => parsed.screen = true,
            "--commune-first" => parsed.commune_first = true,
            "--json" => parsed.json = true,
            s if s.starts_with("--") => {
                eprintln!("Unknown flag: {}", s);
                std::process::exit(2);
            }
            s => parsed.positional.push(s.to_string()),
        }
        i += 1;
    }
    parsed
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn print_results(results: &[SearchResult], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }
    if results.is_empty() {
        println!("No results");
        return Ok(());
    }
    for (i, r) in results.iter().enumerate() {
        println!(
            "{:>2}. {:<12} {:<28} {:<20} id={}",
            i + 1,
            r.kind.as_str(),
            r.name,
            r.secondary_label().unwrap_or("-"),
            r.id
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let args = parse_args();

    let data_file = match args.data.clone() {
        Some(path) => path,
        None => config
            .locations_file()
            .unwrap_or_else(|_| PathBuf::from("test_data/locations.json")),
    };
    tracing::info!(path = %data_file.display(), "loading locations");
    let snapshot = LocationSnapshot::from_json_file(&data_file)?;
    let settings = config.search_settings()?;
    let engine =
        LocationSearch::with_settings(MemoryLocationStore::with_snapshot(snapshot), settings);

    match args.cmd.as_str() {
        "search" => {
            let Some(query) = args.positional.first() else {
                eprintln!("Usage: placefind search \"<query>\" [--screen] [--commune-first]");
                std::process::exit(1)
            };
            let context = if args.screen {
                SearchContext::Screen
            } else {
                SearchContext::Interactive
            };
            let mut options = SearchOptions::for_context(engine.settings(), context);
            if args.commune_first {
                options = options.with_priority(TypePriority::CommuneFirst);
            }
            let results = engine.search_with(query, &options);
            print_results(&results, args.json)?;
        }
        "popular" => {
            let results = match args.positional.first() {
                Some(n) => engine.popular_or_default(n.parse()?),
                None => engine.popular(),
            };
            print_results(&results, args.json)?;
        }
        _ => {
            eprintln!("Unknown command: {}", args.cmd);
            std::process::exit(1);
        }
    }
    Ok(())
}
