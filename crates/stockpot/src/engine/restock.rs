//! Restock sizing: the quantity and cost to bring an ingredient back to par.

use super::round2;
use crate::domain::{Ingredient, RestockOrder};
use crate::error::{Error, Result};

/// Default target multiplier: restore to exactly par level.
pub const DEFAULT_RESTOCK_MULTIPLIER: f64 = 1.0;

/// Size a restock order for an ingredient.
///
/// The target quantity is `par_level * target_multiplier`. Restocking is a
/// point-in-time corrective action, not an idempotent one: an ingredient at
/// or above par is rejected rather than silently topped up, so a repeated
/// call after applying an order fails.
///
/// # Errors
///
/// Returns `Error::Config` when the multiplier is not a positive finite
/// number, and `Error::NotEligibleForRestock` when the ingredient's
/// quantity is not below its par level.
pub fn size(ingredient: &Ingredient, target_multiplier: f64) -> Result<RestockOrder> {
    // A zero or negative target would write a negative quantity back to
    // the store; quantities are non-negative everywhere.
    if target_multiplier <= 0.0 || !target_multiplier.is_finite() {
        return Err(Error::Config(format!(
            "restock multiplier must be a positive number, got {target_multiplier}"
        )));
    }

    if !ingredient.below_par() {
        return Err(Error::NotEligibleForRestock {
            name: ingredient.name.clone(),
            quantity: ingredient.quantity,
            par_level: ingredient.par_level,
        });
    }

    let target = round2(ingredient.par_level * target_multiplier);
    let quantity_added = round2((target - ingredient.quantity).max(0.0));

    Ok(RestockOrder {
        ingredient: ingredient.name.clone(),
        quantity_added,
        unit: ingredient.unit.clone(),
        unit_cost: ingredient.unit_cost,
        total_cost: round2(quantity_added * ingredient.unit_cost),
        new_quantity: target,
    })
}
