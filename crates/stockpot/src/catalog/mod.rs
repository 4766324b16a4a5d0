//! Catalog storage abstraction.
//!
//! The catalog store is the engine's sole source of truth: it holds
//! ingredients, sub-recipes, and menu items, serves consistent snapshots to
//! readers, and applies quantity mutations as atomic batches. The trait is
//! async and object-safe so backends can range from the in-memory map used
//! here to a real database later, behind `Box<dyn CatalogStore>`.
//!
//! Backends:
//! - **In-memory**: ephemeral, backed by `BTreeMap`s and a mutex
//! - **JSONL**: the in-memory backend wrapped with file persistence, one
//!   tagged record per line in `.stockpot/catalog.jsonl`

use crate::domain::{CatalogSnapshot, Ingredient, IngredientUpdate, MenuItem, SubRecipe};
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub mod in_memory;
pub mod seed;

pub use in_memory::{load_from_jsonl, new_in_memory_catalog, save_to_jsonl, LoadWarning};

/// Core storage trait for the inventory catalog.
///
/// # Consistency Rules
///
/// - `snapshot()` returns a point-in-time copy taken under one lock
///   acquisition: a reader never observes half of a concurrent batch write.
/// - `apply_ingredient_updates()` is all-or-nothing: every referenced name
///   is validated before any quantity changes, so a failed batch leaves the
///   catalog exactly as it was.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// A consistent point-in-time copy of the whole catalog, entity vectors
    /// name-sorted (case-insensitive).
    async fn snapshot(&self) -> Result<CatalogSnapshot>;

    /// All ingredients, name-sorted.
    async fn list_ingredients(&self) -> Result<Vec<Ingredient>>;

    /// All sub-recipes, name-sorted.
    async fn list_sub_recipes(&self) -> Result<Vec<SubRecipe>>;

    /// All menu items, name-sorted.
    async fn list_menu_items(&self) -> Result<Vec<MenuItem>>;

    /// Look up one ingredient by name, case-insensitively.
    ///
    /// Returns `None` if no ingredient matches.
    async fn get_ingredient(&self, name: &str) -> Result<Option<Ingredient>>;

    /// Apply a batch of quantity updates atomically.
    ///
    /// Each update sets an ingredient's quantity to an absolute value and
    /// refreshes its `updated_at` stamp.
    ///
    /// # Errors
    ///
    /// Returns `Error::IngredientNotFound` if any name in the batch is
    /// unknown; in that case no quantity is changed.
    async fn apply_ingredient_updates(&mut self, updates: Vec<IngredientUpdate>) -> Result<()>;

    /// Replace the entire catalog contents (seeding).
    async fn replace_catalog(&mut self, snapshot: CatalogSnapshot) -> Result<()>;

    /// Save changes to persistent storage. No-op for pure in-memory stores.
    async fn save(&self) -> Result<()>;

    /// Reload state from persistent storage, discarding in-memory changes.
    /// No-op for pure in-memory stores.
    async fn reload(&mut self) -> Result<()>;
}

/// Catalog backend configuration.
#[derive(Debug, Clone)]
pub enum CatalogBackend {
    /// In-memory catalog (ephemeral)
    InMemory,

    /// JSONL file catalog (persistent)
    Jsonl(PathBuf),
}

impl CatalogBackend {
    /// Returns the data file path for file-based backends.
    pub fn data_path(&self) -> Option<&Path> {
        match self {
            CatalogBackend::Jsonl(path) => Some(path),
            CatalogBackend::InMemory => None,
        }
    }
}

/// Wrapper that adds JSONL file persistence to the in-memory catalog.
///
/// Delegates every operation to the inner store; `save()` writes all
/// records to the JSONL file atomically and `reload()` re-reads it.
struct JsonlBackedCatalog {
    inner: Box<dyn CatalogStore>,
    path: PathBuf,
}

#[async_trait]
impl CatalogStore for JsonlBackedCatalog {
    async fn snapshot(&self) -> Result<CatalogSnapshot> {
        self.inner.snapshot().await
    }

    async fn list_ingredients(&self) -> Result<Vec<Ingredient>> {
        self.inner.list_ingredients().await
    }

    async fn list_sub_recipes(&self) -> Result<Vec<SubRecipe>> {
        self.inner.list_sub_recipes().await
    }

    async fn list_menu_items(&self) -> Result<Vec<MenuItem>> {
        self.inner.list_menu_items().await
    }

    async fn get_ingredient(&self, name: &str) -> Result<Option<Ingredient>> {
        self.inner.get_ingredient(name).await
    }

    async fn apply_ingredient_updates(&mut self, updates: Vec<IngredientUpdate>) -> Result<()> {
        self.inner.apply_ingredient_updates(updates).await
    }

    async fn replace_catalog(&mut self, snapshot: CatalogSnapshot) -> Result<()> {
        self.inner.replace_catalog(snapshot).await
    }

    async fn save(&self) -> Result<()> {
        save_to_jsonl(self.inner.as_ref(), &self.path).await
    }

    async fn reload(&mut self) -> Result<()> {
        if self.path.exists() {
            let (store, warnings) = load_from_jsonl(&self.path).await?;
            for warning in &warnings {
                tracing::warn!(warning = ?warning, "catalog reload warning");
            }
            self.inner = store;
        } else {
            self.inner = new_in_memory_catalog();
        }
        Ok(())
    }
}

/// Create a catalog store for the given backend.
///
/// # Errors
///
/// - `Error::Io` if the JSONL file cannot be read
/// - `Error::Json` if the file holds no parseable records at all
pub async fn create_catalog(backend: CatalogBackend) -> Result<Box<dyn CatalogStore>> {
    match backend {
        CatalogBackend::InMemory => Ok(new_in_memory_catalog()),
        CatalogBackend::Jsonl(path) => {
            let inner = if path.exists() {
                let (store, warnings) = load_from_jsonl(&path).await?;
                for warning in &warnings {
                    tracing::warn!(warning = ?warning, "catalog load warning");
                }
                store
            } else {
                // First run, nothing seeded yet
                new_in_memory_catalog()
            };
            Ok(Box::new(JsonlBackedCatalog { inner, path }))
        }
    }
}
