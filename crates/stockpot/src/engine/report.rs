//! Inventory report ordering.

use crate::domain::{CatalogSnapshot, Ingredient};
use std::cmp::Ordering;

/// Order ingredients for display: below-par items first, then ascending
/// days on hand, with name as the final tiebreaker for determinism.
///
/// Ingredients with zero daily usage have infinite days on hand and sort
/// after everything that is actually being consumed.
pub fn inventory_report(snapshot: &CatalogSnapshot) -> Vec<Ingredient> {
    let mut ingredients = snapshot.ingredients.clone();
    ingredients.sort_by(|a, b| {
        // Critical (below par) rows surface first.
        b.below_par()
            .cmp(&a.below_par())
            .then_with(|| {
                let a_days = a.days_on_hand().unwrap_or(f64::INFINITY);
                let b_days = b.days_on_hand().unwrap_or(f64::INFINITY);
                a_days.partial_cmp(&b_days).unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.name.cmp(&b.name))
    });
    ingredients
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ingredient(name: &str, quantity: f64, par_level: f64, daily_usage: f64) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            category: "Test".to_string(),
            quantity,
            unit: "count".to_string(),
            unit_cost: 1.0,
            par_level,
            daily_usage,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn critical_rows_come_first_then_days_on_hand() {
        let snapshot = CatalogSnapshot {
            ingredients: vec![
                ingredient("Beer", 48.0, 24.0, 18.0),     // healthy, 2.67 days
                ingredient("Shrimp", 4.0, 8.0, 6.0),      // critical, 0.67 days
                ingredient("Chili Powder", 5.0, 3.0, 0.0), // healthy, infinite
                ingredient("Mole Sauce", 2.0, 5.0, 3.0),  // critical, 0.67 days
                ingredient("Tortilla", 200.0, 100.0, 80.0), // healthy, 2.5 days
            ],
            sub_recipes: vec![],
            menu_items: vec![],
        };
        let names: Vec<String> = inventory_report(&snapshot)
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(
            names,
            vec!["Mole Sauce", "Shrimp", "Tortilla", "Beer", "Chili Powder"]
        );
    }
}
