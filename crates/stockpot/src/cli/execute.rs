//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands. Each
//! handler loads what it needs from the app's catalog store, runs the
//! relevant engine functions, applies mutations through the store, and
//! formats output according to the requested mode.

use anyhow::Result;

use super::args::{BlastArgs, InitArgs, InventoryArgs, RestockArgs, RushArgs, SeedArgs};
use crate::app::App;
use crate::catalog::seed::seed_catalog;
use crate::domain::IngredientUpdate;
use crate::engine::{self, DependencyGraph};
use crate::error::Error;
use crate::output::{self, OutputMode};

/// Execute the init command
pub async fn execute_init(args: &InitArgs) -> Result<()> {
    use crate::commands::init;

    let base_dir = match &args.path {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    let result = init::init(&base_dir).await?;

    if !args.quiet {
        println!("Initialized stockpot in {}", result.stockpot_dir.display());
        println!("  Config:  {}", result.config_file.display());
        println!("  Catalog: {}", result.catalog_file.display());
        println!("Run 'stockpot seed' to load the demo catalog.");
    }

    Ok(())
}

/// Execute the seed command
pub async fn execute_seed(app: &mut App, _args: &SeedArgs, output_mode: OutputMode) -> Result<()> {
    let snapshot = seed_catalog();
    let counts = (
        snapshot.ingredients.len(),
        snapshot.sub_recipes.len(),
        snapshot.menu_items.len(),
    );

    app.store_mut().replace_catalog(snapshot).await?;
    app.save().await?;

    match output_mode {
        OutputMode::Json => {
            output::print_json(&serde_json::json!({
                "ingredients": counts.0,
                "sub_recipes": counts.1,
                "menu_items": counts.2,
            }))?;
        }
        OutputMode::Text => {
            println!(
                "Seeded catalog: {} ingredients, {} sub-recipes, {} menu items",
                counts.0, counts.1, counts.2
            );
        }
    }

    Ok(())
}

/// Execute the inventory command
pub async fn execute_inventory(
    app: &App,
    _args: &InventoryArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let snapshot = app.store().snapshot().await?;
    let report = engine::inventory_report(&snapshot);

    match output_mode {
        OutputMode::Json => output::print_json(&report)?,
        OutputMode::Text => output::print_inventory(&report),
    }

    Ok(())
}

/// Execute the blast command
pub async fn execute_blast(app: &App, args: &BlastArgs, output_mode: OutputMode) -> Result<()> {
    let snapshot = app.store().snapshot().await?;
    let graph = DependencyGraph::build(&snapshot)?;
    let result = engine::analyze(&graph, &args.ingredient)?;
    let result = engine::aggregate(result, &snapshot);

    match output_mode {
        OutputMode::Json => output::print_json(&result)?,
        OutputMode::Text => output::print_blast(&result),
    }

    Ok(())
}

/// Execute the restock command
pub async fn execute_restock(
    app: &mut App,
    args: &RestockArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let multiplier = args.multiplier.unwrap_or(app.config().restock_multiplier);

    let ingredient = app
        .store()
        .get_ingredient(&args.ingredient)
        .await?
        .ok_or_else(|| Error::IngredientNotFound(args.ingredient.trim().to_string()))?;

    let order = engine::size(&ingredient, multiplier)?;

    app.store_mut()
        .apply_ingredient_updates(vec![IngredientUpdate {
            name: order.ingredient.clone(),
            quantity: order.new_quantity,
        }])
        .await?;
    app.save().await?;

    match output_mode {
        OutputMode::Json => output::print_json(&order)?,
        OutputMode::Text => output::print_restock(&order),
    }

    Ok(())
}

/// Execute the rush command
pub async fn execute_rush(app: &mut App, args: &RushArgs, output_mode: OutputMode) -> Result<()> {
    let intensity = args.intensity.unwrap_or(app.config().rush_intensity);
    if intensity <= 0.0 || !intensity.is_finite() {
        anyhow::bail!("intensity must be a positive number, got {intensity}");
    }

    let snapshot = app.store().snapshot().await?;
    let updates = engine::simulate(&snapshot, intensity);

    app.store_mut()
        .apply_ingredient_updates(updates.clone())
        .await?;
    app.save().await?;

    match output_mode {
        OutputMode::Json => output::print_json(&updates)?,
        OutputMode::Text => output::print_rush(&updates, intensity),
    }

    Ok(())
}
