// src/main.rs

use anyhow::Result;
use buildplan::{Platform, RuleStore, parse_recipe_file, resolve, validate_recipe};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "buildplan")]
#[command(author, version, about = "Evaluate platform-conditional build recipes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a recipe into a dependency and import plan
    Resolve {
        /// Path to the recipe TOML file
        recipe: PathBuf,
        /// Platform tag (windows, macos, linux, other); defaults to the host
        #[arg(short, long)]
        platform: Option<String>,
    },
    /// Validate a recipe and report duplicate declarations
    Check {
        /// Path to the recipe TOML file
        recipe: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { recipe, platform } => {
            let platform = match platform {
                Some(tag) => Platform::parse(&tag)?,
                None => Platform::current(),
            };
            info!("Resolving recipe {} for {}", recipe.display(), platform);

            let file = parse_recipe_file(&recipe)?;
            validate_recipe(&file)?;
            let store = RuleStore::from_recipe(&file)?;

            let plan = resolve(&store, platform);
            print!("{}", plan);
            Ok(())
        }
        Commands::Check { recipe } => {
            info!("Checking recipe {}", recipe.display());

            let file = parse_recipe_file(&recipe)?;
            let warnings = validate_recipe(&file)?;
            let store = RuleStore::from_recipe(&file)?;

            for warning in &warnings {
                warn!("{}", warning);
            }
            let dupes = store.duplicate_packages();
            if dupes.is_empty() && warnings.is_empty() {
                println!("{}: ok", store.name());
            } else {
                for package in dupes {
                    println!("{}: duplicate declaration of '{}'", store.name(), package);
                }
            }
            Ok(())
        }
    }
}
