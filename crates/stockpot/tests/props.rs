//! Property-based tests over the engine's arithmetic and graph builds.

use chrono::Utc;
use proptest::prelude::*;
use std::collections::BTreeMap;
use stockpot::domain::{CatalogSnapshot, Ingredient, MenuItem};
use stockpot::engine::{self, DependencyGraph};
use stockpot::error::Error;

fn ingredient(name: &str, quantity: f64, par_level: f64, daily_usage: f64) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        category: "Test".to_string(),
        quantity,
        unit: "count".to_string(),
        unit_cost: 1.25,
        par_level,
        daily_usage,
        updated_at: Utc::now(),
    }
}

proptest! {
    #[test]
    fn rush_never_yields_a_negative_quantity(
        quantity in 0.0..500.0f64,
        usage in 0.0..100.0f64,
        intensity in 0.1..4.0f64,
    ) {
        let snapshot = CatalogSnapshot {
            ingredients: vec![ingredient("Limes", quantity, 10.0, usage)],
            sub_recipes: vec![],
            menu_items: vec![],
        };

        let updates = engine::simulate(&snapshot, intensity);

        if usage > 0.0 {
            prop_assert_eq!(updates.len(), 1);
            prop_assert!(updates[0].quantity >= 0.0);
            prop_assert!(updates[0].quantity <= quantity + 0.005);
        } else {
            // Zero-usage ingredients are untouched by a rush.
            prop_assert!(updates.is_empty());
        }
    }

    #[test]
    fn rush_is_deterministic(
        quantity in 0.0..500.0f64,
        usage in 0.1..100.0f64,
        intensity in 0.1..4.0f64,
    ) {
        let snapshot = CatalogSnapshot {
            ingredients: vec![ingredient("Limes", quantity, 10.0, usage)],
            sub_recipes: vec![],
            menu_items: vec![],
        };

        let first = engine::simulate(&snapshot, intensity);
        let second = engine::simulate(&snapshot, intensity);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn restock_fills_to_the_scaled_par(
        quantity in 0.0..500.0f64,
        par_level in 0.01..500.0f64,
        multiplier in 0.1..4.0f64,
    ) {
        prop_assume!(quantity < par_level);

        let order = engine::size(&ingredient("Limes", quantity, par_level, 1.0), multiplier)
            .expect("below-par ingredient must be eligible");

        let target = (par_level * multiplier * 100.0).round() / 100.0;
        prop_assert_eq!(order.new_quantity, target);
        prop_assert!(order.quantity_added >= 0.0);
        if target >= quantity {
            // Identity up to two independent roundings.
            prop_assert!((quantity + order.quantity_added - target).abs() < 0.011);
        } else {
            // Scaled target below the current quantity: nothing to add.
            prop_assert_eq!(order.quantity_added, 0.0);
        }
        prop_assert!((order.total_cost - order.quantity_added * 1.25).abs() < 0.011);
    }

    #[test]
    fn restock_rejects_at_or_above_par(
        par_level in 0.01..500.0f64,
        surplus in 0.0..100.0f64,
    ) {
        let result = engine::size(
            &ingredient("Limes", par_level + surplus, par_level, 1.0),
            1.0,
        );
        let rejected = matches!(result, Err(Error::NotEligibleForRestock { .. }));
        prop_assert!(rejected);
    }

    #[test]
    fn graph_builds_are_deterministic(
        names in prop::collection::btree_set("[a-z]{3,8}", 1..10usize),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let components: BTreeMap<String, f64> =
            names.iter().map(|n| (n.clone(), 1.0)).collect();

        let snapshot = CatalogSnapshot {
            ingredients: names
                .iter()
                .map(|n| ingredient(n, 10.0, 5.0, 1.0))
                .collect(),
            sub_recipes: vec![],
            menu_items: vec![MenuItem {
                name: "Daily Special".to_string(),
                components,
                revenue_per_hour: 100.0,
            }],
        };

        let first = DependencyGraph::build(&snapshot).unwrap();
        let second = DependencyGraph::build(&snapshot).unwrap();
        prop_assert_eq!(first.node_ids(), second.node_ids());
        prop_assert_eq!(first.edge_ids(), second.edge_ids());

        // And the blast from any ingredient reaches the one menu item.
        let blast = engine::analyze(&first, &names[0]).unwrap();
        prop_assert_eq!(blast.affected_menu_items, vec!["Daily Special".to_string()]);
    }
}
