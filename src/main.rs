use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fuzzqa::{
    load_corpus_file, normalize, token_set_ratio, FaqSearcher, SearchConfig,
};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            corpus,
            query,
            keyspace,
            page,
            page_size,
            title_weight,
            description_weight,
            threshold,
            boost,
            max_results,
            config,
            json,
        } => {
            let mut config = match config {
                Some(path) => SearchConfig::from_json_file(&path)
                    .with_context(|| format!("Failed to load config {}", path))?,
                None => SearchConfig::default(),
            };
            if let Some(max_results) = max_results {
                config.max_results = max_results;
            }
            config.validate().context("Invalid search settings")?;

            let records = load_corpus_file(&corpus)
                .with_context(|| format!("Failed to load corpus {}", corpus))?;
            debug!(records = records.len(), path = %corpus, "corpus loaded");

            let searcher = FaqSearcher::new(config);
            let mut request = searcher.request(keyspace, query).page(page);
            if let Some(page_size) = page_size {
                request = request.page_size(page_size);
            }
            if let Some(title) = title_weight {
                request.title_weight = title;
            }
            if let Some(description) = description_weight {
                request.description_weight = description;
            }
            if let Some(threshold) = threshold {
                request = request.threshold(threshold);
            }
            if let Some(boost) = boost {
                request = request.containment_boost(boost);
            }

            let response = searcher
                .search(&records, &request)
                .context("Search failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                display::print_response(&request.query, &response);
            }
        }
        Commands::Score { a, b } => {
            let score = token_set_ratio(&normalize(Some(&a)), &normalize(Some(&b)));
            println!("{}", display::score_value(score).trim_start());
        }
    }
    Ok(())
}
