//! CatalogStore trait implementation for the in-memory backend.

use super::InMemoryCatalog;
use crate::catalog::CatalogStore;
use crate::domain::{CatalogSnapshot, Ingredient, IngredientUpdate, MenuItem, SubRecipe};
use crate::error::{Error, Result};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn snapshot(&self) -> Result<CatalogSnapshot> {
        let inner = self.lock().await;
        Ok(inner.to_snapshot())
    }

    async fn list_ingredients(&self) -> Result<Vec<Ingredient>> {
        let inner = self.lock().await;
        Ok(inner.ingredients.values().cloned().collect())
    }

    async fn list_sub_recipes(&self) -> Result<Vec<SubRecipe>> {
        let inner = self.lock().await;
        Ok(inner.sub_recipes.values().cloned().collect())
    }

    async fn list_menu_items(&self) -> Result<Vec<MenuItem>> {
        let inner = self.lock().await;
        Ok(inner.menu_items.values().cloned().collect())
    }

    async fn get_ingredient(&self, name: &str) -> Result<Option<Ingredient>> {
        let inner = self.lock().await;
        Ok(inner.ingredients.get(&name.trim().to_lowercase()).cloned())
    }

    async fn apply_ingredient_updates(&mut self, updates: Vec<IngredientUpdate>) -> Result<()> {
        let mut inner = self.lock().await;

        // Validate the whole batch before mutating anything, so a bad name
        // leaves every quantity untouched.
        for update in &updates {
            if !inner.ingredients.contains_key(&update.name.to_lowercase()) {
                return Err(Error::IngredientNotFound(update.name.clone()));
            }
        }

        let now = Utc::now();
        for update in updates {
            let key = update.name.to_lowercase();
            // Presence was checked above
            if let Some(ingredient) = inner.ingredients.get_mut(&key) {
                ingredient.quantity = update.quantity;
                ingredient.updated_at = now;
            }
        }

        Ok(())
    }

    async fn replace_catalog(&mut self, snapshot: CatalogSnapshot) -> Result<()> {
        let mut inner = self.lock().await;
        inner.replace(snapshot);
        Ok(())
    }

    async fn save(&self) -> Result<()> {
        // Pure in-memory catalog has nothing to persist
        Ok(())
    }

    async fn reload(&mut self) -> Result<()> {
        // Pure in-memory catalog has no backing store
        Ok(())
    }
}
