// Crop recommendation tool
//
// Runs the nearest-match recommender against a JSON file of reference
// records, as exported from the document store.
// Usage: cargo run --bin recommend -- <candidates.json> [query.json]

use std::fs;

use anyhow::{bail, Context, Result};
use crop_recommender_rust::{recommend, QueryVector};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_recommender_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(candidates_path) = args.next() else {
        bail!("usage: recommend <candidates.json> [query.json]");
    };

    // Query defaults to all-zero measurements when no file is given,
    // matching the lenient parsing of an empty request body
    let query = match args.next() {
        Some(query_path) => {
            let contents = fs::read_to_string(&query_path)
                .with_context(|| format!("Failed to read query file: {}", query_path))?;
            let payload: serde_json::Value = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse query JSON: {}", query_path))?;
            QueryVector::from_value(&payload)
        }
        None => QueryVector::default(),
    };

    tracing::info!(?query, "Query vector");

    let contents = fs::read_to_string(&candidates_path)
        .with_context(|| format!("Failed to read candidates file: {}", candidates_path))?;
    let candidates: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse candidates JSON: {}", candidates_path))?;

    let recommendation = recommend(&query, &candidates)?;
    println!("{}", recommendation.to_envelope());

    Ok(())
}
