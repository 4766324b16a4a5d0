//! Domain types for the inventory catalog.
//!
//! This module contains the core domain types: raw ingredients, intermediate
//! sub-recipes, sellable menu items, and the ephemeral results produced by
//! the engine (restock orders, quantity deltas).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A raw ingredient held in inventory.
///
/// Ingredients are the only mutable entities in the catalog: restock raises
/// their quantity, a rush simulation lowers it. They are never deleted once
/// seeded, only updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique name within the catalog (e.g., "Avocados")
    pub name: String,

    /// Category for display grouping (e.g., "Produce", "Protein")
    pub category: String,

    /// On-hand quantity, non-negative
    pub quantity: f64,

    /// Unit of measure (e.g., "lb", "count")
    pub unit: String,

    /// Cost per unit, non-negative
    pub unit_cost: f64,

    /// Target minimum on-hand quantity
    pub par_level: f64,

    /// Average daily consumption, may be zero
    pub daily_usage: f64,

    /// Timestamp of the last quantity mutation
    pub updated_at: DateTime<Utc>,
}

impl Ingredient {
    /// Whether this ingredient is eligible for restock.
    pub fn below_par(&self) -> bool {
        self.quantity < self.par_level
    }

    /// Days of stock remaining at the current usage rate.
    ///
    /// Returns `None` when daily usage is zero (displayed as infinite).
    pub fn days_on_hand(&self) -> Option<f64> {
        if self.daily_usage > 0.0 {
            Some(self.quantity / self.daily_usage)
        } else {
            None
        }
    }
}

/// An intermediate composed item (e.g., a sauce) built from ingredients
/// and consumed by menu items. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubRecipe {
    /// Unique name within the catalog (e.g., "Spicy Mayo")
    pub name: String,

    /// Component name to quantity-per-batch, all positive.
    ///
    /// Components may be ingredients or other sub-recipes. The `BTreeMap`
    /// keeps component iteration order deterministic, which the graph build
    /// relies on for reproducible edge ordering.
    pub components: BTreeMap<String, f64>,
}

/// A sellable menu item. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique name within the catalog (e.g., "Guacamole Bowl")
    pub name: String,

    /// Component name to quantity-per-serving, all positive.
    ///
    /// Components may be ingredients or sub-recipes.
    pub components: BTreeMap<String, f64>,

    /// Estimated hourly revenue lost while this item is unavailable
    pub revenue_per_hour: f64,
}

/// A consistent point-in-time copy of the whole catalog.
///
/// All engine operations are pure functions over a snapshot, never over the
/// live store, so concurrent writes can never produce a torn read. Entity
/// vectors are name-sorted (case-insensitive) by the store contract, which
/// makes graph builds from identical store states byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// All ingredients, name-sorted
    pub ingredients: Vec<Ingredient>,

    /// All sub-recipes, name-sorted
    pub sub_recipes: Vec<SubRecipe>,

    /// All menu items, name-sorted
    pub menu_items: Vec<MenuItem>,
}

impl CatalogSnapshot {
    /// Whether the snapshot holds no entities at all.
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.sub_recipes.is_empty() && self.menu_items.is_empty()
    }
}

/// A single ingredient quantity change, applied through the store in
/// atomic batches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientUpdate {
    /// Name of the ingredient to update
    pub name: String,

    /// The new on-hand quantity (absolute, not a delta)
    pub quantity: f64,
}

/// Ephemeral result of the restock sizer.
///
/// Recomputing an order is idempotent; applying it is not. Orders are never
/// persisted as their own records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockOrder {
    /// The ingredient being restocked
    pub ingredient: String,

    /// Quantity to add to reach the target
    pub quantity_added: f64,

    /// Unit of measure, echoed from the ingredient
    pub unit: String,

    /// Cost per unit, echoed from the ingredient
    pub unit_cost: f64,

    /// `quantity_added * unit_cost`
    pub total_cost: f64,

    /// The quantity the ingredient will hold after the order is applied
    pub new_quantity: f64,
}
