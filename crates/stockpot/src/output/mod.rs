//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.

use crate::domain::{Ingredient, IngredientUpdate, RestockOrder};
use crate::engine::BlastRadius;
use colored::Colorize;
use serde::Serialize;

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text with colors
    Text,
    /// Machine-readable JSON
    Json,
}

/// Print any serializable value as pretty JSON to stdout.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the inventory report as a table.
///
/// Rows arrive pre-sorted critical-first; below-par rows are shown in red,
/// healthy rows in the terminal default.
pub fn print_inventory(ingredients: &[Ingredient]) {
    if ingredients.is_empty() {
        println!("Catalog is empty. Run 'stockpot seed' to load the demo catalog.");
        return;
    }

    // Pad before styling: ANSI escapes would otherwise count toward the
    // column width and shift the header out of line with the data rows.
    let header = format!(
        "{:<20} {:<12} {:>10} {:<8} {:>10} {:>8}",
        "NAME", "CATEGORY", "QTY", "UNIT", "PAR", "DAYS",
    );
    println!("{}", header.bold());

    for ingredient in ingredients {
        let days = ingredient
            .days_on_hand()
            .map_or_else(|| "-".to_string(), |d| format!("{d:.1}"));
        let line = format!(
            "{:<20} {:<12} {:>10.1} {:<8} {:>10.1} {:>8}",
            ingredient.name,
            ingredient.category,
            ingredient.quantity,
            ingredient.unit,
            ingredient.par_level,
            days,
        );
        if ingredient.below_par() {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }

    let critical = ingredients.iter().filter(|i| i.below_par()).count();
    println!();
    if critical > 0 {
        println!(
            "{}",
            format!("{critical} of {} ingredients below par", ingredients.len()).red()
        );
    } else {
        println!(
            "{}",
            format!("All {} ingredients at or above par", ingredients.len()).green()
        );
    }
}

/// Print a blast-radius analysis in text form.
pub fn print_blast(result: &BlastRadius) {
    println!("Blast radius for {}", result.ingredient.bold());
    println!();

    if result.affected_sub_recipes.is_empty() && result.affected_menu_items.is_empty() {
        println!("Nothing on the menu depends on this ingredient.");
        return;
    }

    if !result.affected_sub_recipes.is_empty() {
        println!("Affected sub-recipes:");
        for name in &result.affected_sub_recipes {
            println!("  {}", name.yellow());
        }
        println!();
    }

    if !result.affected_menu_items.is_empty() {
        println!("Affected menu items:");
        for entry in &result.affected_with_revenue {
            println!(
                "  {:<30} {}",
                entry.menu_item.red(),
                format!("${:.2}/hr", entry.revenue_per_hour).dimmed()
            );
        }
        println!();
    }

    println!(
        "Revenue at risk: {}",
        format!("${:.2}/hr", result.total_revenue_risk_per_hour)
            .red()
            .bold()
    );
    println!(
        "Menu coverage:   {} of {} items ({}%)",
        result.affected_menu_items.len(),
        result.total_menu_count,
        result.menu_share_pct
    );
}

/// Print a restock order in text form.
pub fn print_restock(order: &RestockOrder) {
    println!("Restock order for {}", order.ingredient.bold());
    println!(
        "  Quantity added: {:.1} {} (new quantity {:.1})",
        order.quantity_added, order.unit, order.new_quantity
    );
    println!(
        "  Total cost:     {}",
        format!("${:.2}", order.total_cost).green()
    );
}

/// Print the quantity updates produced by a rush simulation.
pub fn print_rush(updates: &[IngredientUpdate], intensity: f64) {
    if updates.is_empty() {
        println!("No ingredients with recorded daily usage; nothing to simulate.");
        return;
    }

    println!("Dinner rush at intensity {intensity:.1}:");
    for update in updates {
        let line = format!("  {:<20} -> {:>8.1}", update.name, update.quantity);
        if update.quantity == 0.0 {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
    println!();
    println!("{} ingredients drawn down", updates.len());
}
