//! Rush simulation: deterministic demand-spike depletion across the catalog.

use super::round2;
use crate::domain::{CatalogSnapshot, IngredientUpdate};

/// Default demand-spike intensity: one day of usage.
pub const DEFAULT_RUSH_INTENSITY: f64 = 1.0;

/// Compute the quantity deltas of a simulated rush.
///
/// Every ingredient with a nonzero daily usage is depleted by
/// `daily_usage * intensity`, floored at zero. Zero-usage ingredients are
/// untouched and absent from the returned list. The computation is pure and
/// deterministic; the caller applies the whole list through a single atomic
/// store write so no partially-applied rush is ever observable.
pub fn simulate(snapshot: &CatalogSnapshot, intensity: f64) -> Vec<IngredientUpdate> {
    snapshot
        .ingredients
        .iter()
        .filter(|ingredient| ingredient.daily_usage > 0.0)
        .map(|ingredient| IngredientUpdate {
            name: ingredient.name.clone(),
            quantity: round2((ingredient.quantity - ingredient.daily_usage * intensity).max(0.0)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ingredient;
    use chrono::Utc;

    fn ingredient(name: &str, quantity: f64, daily_usage: f64) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            category: "Test".to_string(),
            quantity,
            unit: "count".to_string(),
            unit_cost: 1.0,
            par_level: 5.0,
            daily_usage,
            updated_at: Utc::now(),
        }
    }

    fn snapshot(ingredients: Vec<Ingredient>) -> CatalogSnapshot {
        CatalogSnapshot {
            ingredients,
            sub_recipes: vec![],
            menu_items: vec![],
        }
    }

    #[test]
    fn depletes_by_usage_times_intensity() {
        let snapshot = snapshot(vec![ingredient("Tortilla", 10.0, 4.0)]);
        let updates = simulate(&snapshot, 2.0);
        assert_eq!(
            updates,
            vec![IngredientUpdate {
                name: "Tortilla".to_string(),
                quantity: 2.0,
            }]
        );
    }

    #[test]
    fn floors_at_zero() {
        let snapshot = snapshot(vec![ingredient("Shrimp", 3.0, 6.0)]);
        let updates = simulate(&snapshot, 1.0);
        assert_eq!(updates[0].quantity, 0.0);
    }

    #[test]
    fn zero_usage_ingredients_are_excluded() {
        let snapshot = snapshot(vec![
            ingredient("Beer", 48.0, 18.0),
            ingredient("Decoration", 5.0, 0.0),
        ]);
        let updates = simulate(&snapshot, 1.0);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].name, "Beer");
        assert_eq!(updates[0].quantity, 30.0);
    }

    #[test]
    fn repeat_runs_are_identical() {
        let snapshot = snapshot(vec![
            ingredient("Lime", 80.0, 35.0),
            ingredient("Cheese", 25.0, 12.0),
        ]);
        assert_eq!(simulate(&snapshot, 1.5), simulate(&snapshot, 1.5));
    }
}
