//! Dependency graph construction using petgraph.
//!
//! The catalog implies a layered directed acyclic multigraph: ingredients
//! feed sub-recipes and menu items, sub-recipes feed menu items (and may
//! nest into other sub-recipes). Edges point from component to consumer
//! ("consumed by"), so forward reachability from an ingredient yields its
//! blast radius.
//!
//! The graph is derived, never persisted: it is rebuilt from a
//! [`CatalogSnapshot`] on each query, and two builds from the same snapshot
//! produce identical node and edge sets. Determinism comes from the
//! snapshot's name-sorted entity vectors and the `BTreeMap` component
//! ordering inside each recipe.

use crate::domain::CatalogSnapshot;
use crate::error::{CatalogFault, Error, Result};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// The three disjoint node kinds of the catalog graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A raw inventory ingredient (graph source)
    Ingredient,

    /// An intermediate composed item
    SubRecipe,

    /// A sellable menu item (graph sink)
    MenuItem,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Ingredient => write!(f, "ingredient"),
            NodeKind::SubRecipe => write!(f, "sub_recipe"),
            NodeKind::MenuItem => write!(f, "menu_item"),
        }
    }
}

/// A node of the catalog graph: a stable string id plus its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogNode {
    /// Display name, also the node id (unique across kinds)
    pub id: String,

    /// Which layer of the catalog this node belongs to
    pub kind: NodeKind,
}

/// The ingredient -> sub-recipe -> menu-item dependency graph.
///
/// Wraps a petgraph `DiGraph` with a case-insensitive id index. Instances
/// are immutable once built; traversals never mutate shared state.
#[derive(Debug)]
pub struct DependencyGraph {
    /// Node weights are catalog ids with kind tags; edges carry no weight.
    /// Edge direction: component -> consumer.
    graph: DiGraph<CatalogNode, ()>,

    /// Lowercased id to graph node, for case-insensitive resolution
    node_map: HashMap<String, NodeIndex>,

    /// Total number of menu items in the catalog (affected or not)
    menu_count: usize,
}

impl DependencyGraph {
    /// Build the dependency graph from a catalog snapshot.
    ///
    /// Deterministic and pure: nodes are inserted ingredients first, then
    /// sub-recipes, then menu items, each in snapshot order; edges follow
    /// each recipe's component order.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCatalog` when:
    /// - two entities share a name-derived id, in any combination of kinds
    /// - a recipe component resolves to no ingredient or sub-recipe
    /// - the implied edge set contains a cycle
    pub fn build(snapshot: &CatalogSnapshot) -> Result<Self> {
        let mut graph = DiGraph::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();

        let add_node = |graph: &mut DiGraph<CatalogNode, ()>,
                            node_map: &mut HashMap<String, NodeIndex>,
                            id: &str,
                            kind: NodeKind|
         -> Result<()> {
            let key = id.to_lowercase();
            if node_map.contains_key(&key) {
                return Err(Error::InvalidCatalog(CatalogFault::DuplicateId(
                    id.to_string(),
                )));
            }
            let idx = graph.add_node(CatalogNode {
                id: id.to_string(),
                kind,
            });
            node_map.insert(key, idx);
            Ok(())
        };

        for ingredient in &snapshot.ingredients {
            add_node(&mut graph, &mut node_map, &ingredient.name, NodeKind::Ingredient)?;
        }
        for sub_recipe in &snapshot.sub_recipes {
            add_node(&mut graph, &mut node_map, &sub_recipe.name, NodeKind::SubRecipe)?;
        }
        for menu_item in &snapshot.menu_items {
            add_node(&mut graph, &mut node_map, &menu_item.name, NodeKind::MenuItem)?;
        }

        // Edges: component -> consumer. A component must resolve to an
        // ingredient or sub-recipe node; menu items are sinks and may not
        // be consumed by anything.
        let add_edges = |graph: &mut DiGraph<CatalogNode, ()>,
                             consumer: &str,
                             components: &std::collections::BTreeMap<String, f64>|
         -> Result<()> {
            let consumer_idx = node_map[&consumer.to_lowercase()];
            for component in components.keys() {
                let component_idx = node_map
                    .get(&component.to_lowercase())
                    .copied()
                    .filter(|idx| graph[*idx].kind != NodeKind::MenuItem)
                    .ok_or_else(|| {
                        Error::InvalidCatalog(CatalogFault::DanglingReference {
                            node: consumer.to_string(),
                            component: component.clone(),
                        })
                    })?;
                graph.add_edge(component_idx, consumer_idx, ());
            }
            Ok(())
        };

        for sub_recipe in &snapshot.sub_recipes {
            add_edges(&mut graph, &sub_recipe.name, &sub_recipe.components)?;
        }
        for menu_item in &snapshot.menu_items {
            add_edges(&mut graph, &menu_item.name, &menu_item.components)?;
        }

        // A valid catalog is layered, so the graph must topologically sort.
        toposort(&graph, None).map_err(|cycle| {
            Error::InvalidCatalog(CatalogFault::Cycle(graph[cycle.node_id()].id.clone()))
        })?;

        Ok(Self {
            graph,
            node_map,
            menu_count: snapshot.menu_items.len(),
        })
    }

    /// Resolve a name to its node, case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<NodeIndex> {
        self.node_map.get(&name.trim().to_lowercase()).copied()
    }

    /// The node weight at `idx`.
    pub fn node(&self, idx: NodeIndex) -> &CatalogNode {
        &self.graph[idx]
    }

    /// Direct consumers of the node at `idx`, in edge insertion order.
    ///
    /// petgraph iterates outgoing edges most-recent-first; reversing
    /// restores insertion order, which follows the snapshot's deterministic
    /// entity and component ordering.
    pub fn consumers(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self.graph.edges(idx).map(|e| e.target()).collect();
        out.reverse();
        out
    }

    /// Total number of menu items in the catalog this graph was built from.
    pub fn menu_count(&self) -> usize {
        self.menu_count
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// (id, kind) pairs for every node, in insertion order. Used by tests
    /// to compare two builds structurally.
    pub fn node_ids(&self) -> Vec<(String, NodeKind)> {
        self.graph
            .node_indices()
            .map(|idx| (self.graph[idx].id.clone(), self.graph[idx].kind))
            .collect()
    }

    /// (from, to) id pairs for every edge, in insertion order.
    pub fn edge_ids(&self) -> Vec<(String, String)> {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| (self.graph[a].id.clone(), self.graph[b].id.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Ingredient, MenuItem, SubRecipe};
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn ingredient(name: &str) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            category: "Test".to_string(),
            quantity: 10.0,
            unit: "count".to_string(),
            unit_cost: 1.0,
            par_level: 5.0,
            daily_usage: 1.0,
            updated_at: Utc::now(),
        }
    }

    fn components(names: &[&str]) -> BTreeMap<String, f64> {
        names.iter().map(|n| (n.to_string(), 1.0)).collect()
    }

    fn sub_recipe(name: &str, deps: &[&str]) -> SubRecipe {
        SubRecipe {
            name: name.to_string(),
            components: components(deps),
        }
    }

    fn menu_item(name: &str, deps: &[&str]) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            components: components(deps),
            revenue_per_hour: 100.0,
        }
    }

    fn layered_snapshot() -> CatalogSnapshot {
        CatalogSnapshot {
            ingredients: vec![ingredient("Eggs"), ingredient("Jalapeno"), ingredient("Oil")],
            sub_recipes: vec![
                sub_recipe("Mayo", &["Eggs", "Oil"]),
                sub_recipe("Spicy Mayo", &["Jalapeno", "Mayo"]),
            ],
            menu_items: vec![menu_item("Sandwich", &["Spicy Mayo", "Eggs"])],
        }
    }

    #[test]
    fn build_counts_nodes_and_edges() {
        let graph = DependencyGraph::build(&layered_snapshot()).unwrap();
        assert_eq!(graph.node_count(), 6);
        // Mayo(2) + Spicy Mayo(2) + Sandwich(2)
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.menu_count(), 1);
    }

    #[test]
    fn build_is_deterministic() {
        let snapshot = layered_snapshot();
        let a = DependencyGraph::build(&snapshot).unwrap();
        let b = DependencyGraph::build(&snapshot).unwrap();
        assert_eq!(a.node_ids(), b.node_ids());
        assert_eq!(a.edge_ids(), b.edge_ids());
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let graph = DependencyGraph::build(&layered_snapshot()).unwrap();
        let idx = graph.resolve("  spicy mayo ").unwrap();
        assert_eq!(graph.node(idx).id, "Spicy Mayo");
        assert_eq!(graph.node(idx).kind, NodeKind::SubRecipe);
        assert!(graph.resolve("Truffle Oil").is_none());
    }

    #[test]
    fn duplicate_id_across_kinds_is_rejected() {
        let mut snapshot = layered_snapshot();
        snapshot.menu_items.push(menu_item("Mayo", &["Eggs"]));
        let err = DependencyGraph::build(&snapshot).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCatalog(CatalogFault::DuplicateId(id)) if id == "Mayo"
        ));
    }

    #[test]
    fn dangling_component_is_rejected() {
        let mut snapshot = layered_snapshot();
        snapshot
            .menu_items
            .push(menu_item("Omelette", &["Eggs", "Truffle Oil"]));
        let err = DependencyGraph::build(&snapshot).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCatalog(CatalogFault::DanglingReference { node, component })
                if node == "Omelette" && component == "Truffle Oil"
        ));
    }

    #[test]
    fn menu_item_as_component_is_rejected() {
        let mut snapshot = layered_snapshot();
        snapshot
            .menu_items
            .push(menu_item("Combo Plate", &["Sandwich"]));
        let err = DependencyGraph::build(&snapshot).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCatalog(CatalogFault::DanglingReference { component, .. })
                if component == "Sandwich"
        ));
    }

    #[test]
    fn cycle_is_rejected() {
        let mut snapshot = layered_snapshot();
        snapshot.sub_recipes = vec![
            sub_recipe("Mayo", &["Eggs", "Oil", "Spicy Mayo"]),
            sub_recipe("Spicy Mayo", &["Jalapeno", "Mayo"]),
        ];
        let err = DependencyGraph::build(&snapshot).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCatalog(CatalogFault::Cycle(_))
        ));
    }

    #[test]
    fn consumers_follow_insertion_order() {
        let graph = DependencyGraph::build(&layered_snapshot()).unwrap();
        let eggs = graph.resolve("Eggs").unwrap();
        let names: Vec<&str> = graph
            .consumers(eggs)
            .into_iter()
            .map(|idx| graph.node(idx).id.as_str())
            .collect();
        // Sub-recipes are wired before menu items, each in snapshot order.
        assert_eq!(names, vec!["Mayo", "Sandwich"]);
    }
}
