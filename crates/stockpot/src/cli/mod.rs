//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for stockpot using
//! clap's derive API.
//!
//! # Commands
//!
//! - `init`: Initialize a new stockpot workspace
//! - `seed`: Load the built-in demo catalog
//! - `inventory`: Show the inventory report, critical items first
//! - `blast`: Analyze the blast radius of an ingredient outage
//! - `restock`: Size and apply a restock order
//! - `rush`: Simulate a dinner rush drawdown
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! stockpot blast "Avocados"
//! stockpot restock "Mole Sauce" --multiplier 2.0
//! stockpot rush --intensity 1.5
//! ```

mod args;
mod execute;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use args::{BlastArgs, InitArgs, InventoryArgs, RestockArgs, RushArgs, SeedArgs};

/// Stockpot - restaurant inventory blast-radius and restock engine
///
/// Models ingredients, sub-recipes, and menu items as a dependency graph,
/// then answers "what breaks if we run out of X" with revenue at risk.
/// Catalog data is stored in `.stockpot/catalog.jsonl`.
#[derive(Parser, Debug)]
#[command(name = "stockpot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new stockpot workspace
    ///
    /// Creates the `.stockpot/` directory with configuration and an empty
    /// catalog file. Run this once in your project root.
    Init(InitArgs),

    /// Load the built-in demo catalog
    ///
    /// Replaces the entire catalog with the Tex-Mex demo dataset and saves
    /// it. Existing catalog contents are discarded.
    Seed(SeedArgs),

    /// Show the inventory report
    ///
    /// Lists all ingredients, below-par items first, then by fewest days
    /// of stock remaining.
    Inventory(InventoryArgs),

    /// Analyze the blast radius of an ingredient outage
    ///
    /// Shows every sub-recipe and menu item that transitively depends on
    /// the ingredient, with hourly revenue at risk.
    Blast(BlastArgs),

    /// Size and apply a restock order
    ///
    /// Refills a below-par ingredient up to its par level (scaled by the
    /// multiplier) and reports the cost.
    Restock(RestockArgs),

    /// Simulate a dinner rush
    ///
    /// Draws down every ingredient by its daily usage scaled by the
    /// intensity, floored at zero, and saves the result.
    Rush(RushArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Some(Commands::Init(args)) => execute::execute_init(args).await,
            Some(Commands::Seed(args)) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_seed(&mut app, args, output_mode).await
            }
            Some(Commands::Inventory(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_inventory(&app, args, output_mode).await
            }
            Some(Commands::Blast(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_blast(&app, args, output_mode).await
            }
            Some(Commands::Restock(args)) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_restock(&mut app, args, output_mode).await
            }
            Some(Commands::Rush(args)) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_rush(&mut app, args, output_mode).await
            }
            None => {
                println!("Stockpot inventory engine");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}
