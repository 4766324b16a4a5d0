//! In-memory catalog backend.
//!
//! All data lives in RAM inside `BTreeMap`s keyed by lowercased entity name,
//! which gives case-insensitive lookups and name-sorted iteration for free.
//! The maps are wrapped in `Arc<Mutex<>>` so every trait method operates
//! under one lock acquisition: snapshots are consistent and batch writes
//! are atomic with respect to concurrent readers.
//!
//! Optional JSONL persistence is provided by [`load_from_jsonl`] and
//! [`save_to_jsonl`]; the trait's own `save()`/`reload()` are no-ops here
//! and the `JsonlBackedCatalog` wrapper in the parent module wires the two
//! together.

mod inner;
mod jsonl;
mod trait_impl;

use crate::catalog::CatalogStore;
use inner::CatalogInner;
use std::sync::Arc;
use tokio::sync::Mutex;

pub use jsonl::{load_from_jsonl, save_to_jsonl, LoadWarning};

/// Thread-safe in-memory catalog.
pub(crate) type InMemoryCatalog = Arc<Mutex<CatalogInner>>;

/// Create a new, empty in-memory catalog store.
pub fn new_in_memory_catalog() -> Box<dyn CatalogStore> {
    Box::new(Arc::new(Mutex::new(CatalogInner::new())))
}
