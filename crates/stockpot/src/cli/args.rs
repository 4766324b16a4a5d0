//! Argument structs for each CLI command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `init` command
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `seed` command
#[derive(Args, Debug, Clone)]
pub struct SeedArgs {}

/// Arguments for the `inventory` command
#[derive(Args, Debug, Clone)]
pub struct InventoryArgs {}

/// Arguments for the `blast` command
#[derive(Args, Debug, Clone)]
pub struct BlastArgs {
    /// Ingredient to analyze (case-insensitive)
    pub ingredient: String,
}

/// Arguments for the `restock` command
#[derive(Args, Debug, Clone)]
pub struct RestockArgs {
    /// Ingredient to restock (case-insensitive)
    pub ingredient: String,

    /// Par-level multiplier for the restock target.
    /// Overrides the configured `restock_multiplier`.
    #[arg(long)]
    pub multiplier: Option<f64>,
}

/// Arguments for the `rush` command
#[derive(Args, Debug, Clone)]
pub struct RushArgs {
    /// Demand intensity; 1.0 burns one full day of usage per ingredient.
    /// Overrides the configured `rush_intensity`.
    #[arg(long)]
    pub intensity: Option<f64>,
}
