//! Headless deck generator
//!
//! Generates a design for one order, lays out every card and prints the
//! result as JSON (for renderers and packagers) or as a text summary.

use clap::Parser;
use std::path::PathBuf;

use spot_deck::core::config::{load_config, DeckConfig};
use spot_deck::core::error::{DeckError, Result};
use spot_deck::design::generate_design_seeded;
use spot_deck::layout::LayoutEngine;
use spot_deck::output::DeckOutput;

/// Spot Deck - generate card designs and symbol layouts
#[derive(Parser, Debug)]
#[command(name = "spot-deck")]
#[command(about = "Generate a spot-it style card design and per-card symbol layouts")]
struct Args {
    /// TOML config file; command line values override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Design order (each card carries order + 1 symbols)
    #[arg(long, short = 'n')]
    order: Option<u32>,

    /// Seed for degraded fallback constructions
    #[arg(long)]
    seed: Option<u64>,

    /// Card diameter in pixels
    #[arg(long)]
    diameter: Option<f64>,

    /// Only print the card at this index
    #[arg(long)]
    card: Option<usize>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("spot_deck=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        tracing::error!("{}", e);
        if matches!(
            e,
            DeckError::ConstructionFailed { .. } | DeckError::InvalidOrder { .. }
        ) {
            eprintln!(
                "Supported orders: {:?}",
                spot_deck::core::types::supported_orders()
            );
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => DeckConfig::default(),
    };
    if let Some(order) = args.order {
        config.order = order;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(diameter) = args.diameter {
        config.card_diameter = diameter;
    }
    config.validate().map_err(DeckError::InvalidConfig)?;

    tracing::info!(
        "Generating order {} deck ({} cards) at diameter {}",
        config.order,
        spot_deck::core::types::required_symbol_count(config.order),
        config.card_diameter
    );

    let generated = generate_design_seeded(config.order, config.seed)?;
    let engine = LayoutEngine::new(config.layout.clone());
    let output = match args.card {
        Some(index) => DeckOutput::single_card(&generated, &engine, config.card_diameter, index)
            .ok_or_else(|| {
                DeckError::InvalidConfig(format!(
                    "card index {} out of range (deck has {} cards)",
                    index,
                    generated.design.len()
                ))
            })?,
        None => DeckOutput::new(&generated, &engine, config.card_diameter),
    };

    match args.format.as_str() {
        "text" => print!("{}", output.summary()),
        "json" => println!("{}", serde_json::to_string_pretty(&output)?),
        other => {
            return Err(DeckError::InvalidConfig(format!(
                "unknown format '{}', expected json or text",
                other
            )))
        }
    }

    Ok(())
}
