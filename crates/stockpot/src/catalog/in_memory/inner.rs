//! Core in-memory catalog data structures.

use crate::domain::{CatalogSnapshot, Ingredient, MenuItem, SubRecipe};
use std::collections::BTreeMap;

/// Inner catalog structure (not thread-safe on its own).
///
/// Keys are lowercased entity names; the stored values keep their original
/// casing for display. `BTreeMap` iteration order doubles as the
/// name-sorted listing order the store contract promises.
pub(crate) struct CatalogInner {
    pub(super) ingredients: BTreeMap<String, Ingredient>,
    pub(super) sub_recipes: BTreeMap<String, SubRecipe>,
    pub(super) menu_items: BTreeMap<String, MenuItem>,
}

impl CatalogInner {
    /// Create a new empty catalog.
    pub(crate) fn new() -> Self {
        Self {
            ingredients: BTreeMap::new(),
            sub_recipes: BTreeMap::new(),
            menu_items: BTreeMap::new(),
        }
    }

    /// Copy the whole catalog into a snapshot, under the caller's lock.
    pub(crate) fn to_snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            ingredients: self.ingredients.values().cloned().collect(),
            sub_recipes: self.sub_recipes.values().cloned().collect(),
            menu_items: self.menu_items.values().cloned().collect(),
        }
    }

    /// Replace all contents from a snapshot.
    pub(crate) fn replace(&mut self, snapshot: CatalogSnapshot) {
        self.ingredients = snapshot
            .ingredients
            .into_iter()
            .map(|i| (i.name.to_lowercase(), i))
            .collect();
        self.sub_recipes = snapshot
            .sub_recipes
            .into_iter()
            .map(|s| (s.name.to_lowercase(), s))
            .collect();
        self.menu_items = snapshot
            .menu_items
            .into_iter()
            .map(|m| (m.name.to_lowercase(), m))
            .collect();
    }
}
