//! Error types for stockpot operations.

use std::io;
use thiserror::Error;

/// Data-integrity faults detected while building the dependency graph.
///
/// These indicate a corrupted or inconsistent catalog. They are surfaced
/// to the caller unchanged, never repaired in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogFault {
    /// The same id is used by more than one catalog entity (across kinds).
    #[error("duplicate id '{0}' across catalog entities")]
    DuplicateId(String),

    /// A recipe references a component that is neither an ingredient nor a sub-recipe.
    #[error("'{node}' references unknown component '{component}'")]
    DanglingReference {
        /// The recipe holding the reference.
        node: String,
        /// The component id that could not be resolved.
        component: String,
    },

    /// The recipe relation contains a cycle.
    #[error("recipe cycle detected at '{0}'")]
    Cycle(String),
}

/// The error type for stockpot operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization or parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// No ingredient with the given name exists in the catalog.
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    /// The catalog contents cannot form a valid dependency graph.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(CatalogFault),

    /// Business-rule rejection: the ingredient is already at or above par.
    #[error(
        "'{name}' is not eligible for restock: quantity {quantity} is at or above par level {par_level}"
    )]
    NotEligibleForRestock {
        /// The ingredient that was healthy.
        name: String,
        /// Its current on-hand quantity.
        quantity: f64,
        /// Its par level.
        par_level: f64,
    },
}

/// A specialized Result type for stockpot operations.
pub type Result<T> = std::result::Result<T, Error>;
