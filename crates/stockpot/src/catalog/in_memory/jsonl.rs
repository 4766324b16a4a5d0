//! JSONL persistence for the in-memory catalog.
//!
//! The catalog file holds one tagged record per line:
//!
//! ```text
//! {"kind":"ingredient","name":"Avocados",...}
//! {"kind":"sub_recipe","name":"Mayo","components":{...}}
//! {"kind":"menu_item","name":"Guacamole Bowl",...}
//! ```
//!
//! Loading is resilient: malformed lines and suspicious references are
//! reported as warnings rather than failing the whole load. Warnings never
//! repair data in place; a catalog with dangling references will still fail
//! graph builds with `InvalidCatalog`.

use super::inner::CatalogInner;
use crate::catalog::CatalogStore;
use crate::domain::{Ingredient, MenuItem, SubRecipe};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::Mutex;

/// One line of the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum CatalogRecord {
    /// An inventory ingredient row
    Ingredient(Ingredient),

    /// A sub-recipe definition
    SubRecipe(SubRecipe),

    /// A menu item definition
    MenuItem(MenuItem),
}

/// Non-fatal problems encountered while loading a catalog file.
#[derive(Debug, Clone)]
pub enum LoadWarning {
    /// A line that could not be parsed as any catalog record. The line is
    /// skipped; everything else still loads.
    MalformedLine {
        /// 1-based line number in the file
        line_number: usize,
        /// Parser error text
        error: String,
    },

    /// A later record reused the name of an earlier one (same kind). The
    /// later record wins, matching map-replacement semantics.
    DuplicateRecord {
        /// 1-based line number of the later record
        line_number: usize,
        /// The reused name
        name: String,
    },

    /// A recipe component that matches no loaded ingredient or sub-recipe.
    /// The record is kept as-is; graph builds will surface the fault as
    /// `InvalidCatalog` rather than silently repairing it.
    DanglingComponent {
        /// The recipe holding the reference
        node: String,
        /// The unresolved component name
        component: String,
    },
}

/// Load a catalog store from a JSONL file.
///
/// Returns the store plus all non-fatal warnings gathered during the load.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read at all.
pub async fn load_from_jsonl(path: &Path) -> Result<(Box<dyn CatalogStore>, Vec<LoadWarning>)> {
    let content = tokio::fs::read_to_string(path).await.map_err(Error::Io)?;

    let mut inner = CatalogInner::new();
    let mut warnings = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<CatalogRecord>(line) {
            Ok(CatalogRecord::Ingredient(ingredient)) => {
                let key = ingredient.name.to_lowercase();
                if inner.ingredients.insert(key, ingredient.clone()).is_some() {
                    warnings.push(LoadWarning::DuplicateRecord {
                        line_number,
                        name: ingredient.name,
                    });
                }
            }
            Ok(CatalogRecord::SubRecipe(sub_recipe)) => {
                let key = sub_recipe.name.to_lowercase();
                if inner.sub_recipes.insert(key, sub_recipe.clone()).is_some() {
                    warnings.push(LoadWarning::DuplicateRecord {
                        line_number,
                        name: sub_recipe.name,
                    });
                }
            }
            Ok(CatalogRecord::MenuItem(menu_item)) => {
                let key = menu_item.name.to_lowercase();
                if inner.menu_items.insert(key, menu_item.clone()).is_some() {
                    warnings.push(LoadWarning::DuplicateRecord {
                        line_number,
                        name: menu_item.name,
                    });
                }
            }
            Err(error) => {
                warnings.push(LoadWarning::MalformedLine {
                    line_number,
                    error: error.to_string(),
                });
            }
        }
    }

    warn_dangling_components(&inner, &mut warnings);

    Ok((Box::new(Arc::new(Mutex::new(inner))), warnings))
}

/// Flag component references that resolve to nothing loadable.
fn warn_dangling_components(inner: &CatalogInner, warnings: &mut Vec<LoadWarning>) {
    let resolves = |component: &str| {
        let key = component.to_lowercase();
        inner.ingredients.contains_key(&key) || inner.sub_recipes.contains_key(&key)
    };
    let mut check = |node: &str, components: &BTreeMap<String, f64>| {
        for component in components.keys() {
            if !resolves(component) {
                warnings.push(LoadWarning::DanglingComponent {
                    node: node.to_string(),
                    component: component.clone(),
                });
            }
        }
    };
    for sub_recipe in inner.sub_recipes.values() {
        check(&sub_recipe.name, &sub_recipe.components);
    }
    for menu_item in inner.menu_items.values() {
        check(&menu_item.name, &menu_item.components);
    }
}

/// Save a catalog store to a JSONL file with atomic writes.
///
/// Writes to a temporary file first and renames it into place, so an
/// interrupted save leaves the original file unchanged. Records are written
/// ingredients first, then sub-recipes, then menu items, each name-sorted,
/// giving deterministic output across saves.
pub async fn save_to_jsonl(store: &dyn CatalogStore, path: &Path) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    let file = File::create(&temp_path).await.map_err(Error::Io)?;
    let mut writer = BufWriter::new(file);

    let snapshot = store.snapshot().await?;

    let records = snapshot
        .ingredients
        .into_iter()
        .map(CatalogRecord::Ingredient)
        .chain(snapshot.sub_recipes.into_iter().map(CatalogRecord::SubRecipe))
        .chain(snapshot.menu_items.into_iter().map(CatalogRecord::MenuItem));

    for record in records {
        let json = serde_json::to_string(&record)?;
        writer.write_all(json.as_bytes()).await.map_err(Error::Io)?;
        writer.write_all(b"\n").await.map_err(Error::Io)?;
    }

    writer.flush().await.map_err(Error::Io)?;
    tokio::fs::rename(&temp_path, path).await.map_err(Error::Io)?;

    Ok(())
}
