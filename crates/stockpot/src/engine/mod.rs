//! The blast-radius and restock engine.
//!
//! Everything here is a pure function over a [`CatalogSnapshot`] or a
//! [`DependencyGraph`] built from one: no I/O, no hidden state, no
//! randomness. The surrounding service obtains a snapshot from the catalog
//! store, runs the engine, and applies any resulting quantity deltas back
//! through the store as one atomic batch.
//!
//! Components:
//! - [`graph`]: the ingredient -> sub-recipe -> menu-item dependency graph
//! - [`blast`]: forward reachability from a shorted ingredient
//! - [`revenue`]: revenue exposure over the affected menu-item set
//! - [`restock`]: sizing a corrective restock order
//! - [`rush`]: deterministic demand-spike depletion
//! - [`report`]: inventory ordering for display (below-par first)
//!
//! [`CatalogSnapshot`]: crate::domain::CatalogSnapshot
//! [`DependencyGraph`]: graph::DependencyGraph

pub mod blast;
pub mod graph;
pub mod report;
pub mod restock;
pub mod revenue;
pub mod rush;

pub use blast::{analyze, BlastRadius, GraphEdge, GraphNode, MenuRevenue};
pub use graph::{DependencyGraph, NodeKind};
pub use report::inventory_report;
pub use restock::{size, DEFAULT_RESTOCK_MULTIPLIER};
pub use revenue::aggregate;
pub use rush::{simulate, DEFAULT_RUSH_INTENSITY};

/// Round to two decimal places for quantities and currency amounts.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
