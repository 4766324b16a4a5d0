//! Blast-radius analysis: forward reachability from a shorted ingredient.
//!
//! Breadth-first traversal over the dependency graph's "consumed by" edges,
//! producing the induced subgraph (for display), the affected sub-recipes,
//! and the affected menu items in first-discovery order.

use super::graph::{DependencyGraph, NodeKind};
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::{HashSet, VecDeque};

/// A node of the induced subgraph, shaped for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    /// Stable node id
    pub id: String,

    /// Display label (same as the id for catalog entities)
    pub label: String,

    /// Node kind tag
    pub kind: NodeKind,
}

/// A directed edge of the induced subgraph, by node id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    /// Component side of the edge
    pub from: String,

    /// Consumer side of the edge
    pub to: String,
}

/// An affected menu item together with its hourly revenue rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuRevenue {
    /// Menu item name
    pub menu_item: String,

    /// Hourly revenue lost while the item is unavailable
    pub revenue_per_hour: f64,
}

/// Result of a blast-radius query. Created per query, never stored.
///
/// [`analyze`] fills the structural fields; revenue fields start zeroed and
/// are filled by [`aggregate`](super::revenue::aggregate).
#[derive(Debug, Clone, Serialize)]
pub struct BlastRadius {
    /// The ingredient queried (canonical casing from the catalog)
    pub ingredient: String,

    /// Every reached node, including the queried ingredient, in discovery order
    pub nodes: Vec<GraphNode>,

    /// Every traversed edge, in traversal order. Multi-parent nodes appear
    /// once in `nodes` but contribute one edge per path.
    pub edges: Vec<GraphEdge>,

    /// Reached sub-recipes, in discovery order
    pub affected_sub_recipes: Vec<String>,

    /// Reached menu items, in discovery order, each exactly once
    pub affected_menu_items: Vec<String>,

    /// Affected menu items with revenue rates, same order as
    /// `affected_menu_items`
    pub affected_with_revenue: Vec<MenuRevenue>,

    /// Total number of menu items in the catalog, affected or not
    pub total_menu_count: usize,

    /// Sum of `revenue_per_hour` over the deduplicated affected set
    pub total_revenue_risk_per_hour: f64,

    /// Integer percentage of the menu affected (0 when the menu is empty)
    pub menu_share_pct: u32,
}

/// Compute the blast radius of an ingredient shortage.
///
/// Performs a breadth-first traversal from the ingredient node, following
/// only outgoing ("consumed by") edges. Each node is visited at most once;
/// discovery order is deterministic for identical graphs and is part of the
/// observable contract. An ingredient nothing consumes yields an empty
/// result with zero risk, not an error.
///
/// # Errors
///
/// Returns `Error::IngredientNotFound` if the name resolves to no
/// ingredient node.
pub fn analyze(graph: &DependencyGraph, ingredient_name: &str) -> Result<BlastRadius> {
    let start = graph
        .resolve(ingredient_name)
        .filter(|idx| graph.node(*idx).kind == NodeKind::Ingredient)
        .ok_or_else(|| Error::IngredientNotFound(ingredient_name.trim().to_string()))?;

    let ingredient = graph.node(start).id.clone();

    let mut visited = HashSet::new();
    visited.insert(start);
    let mut queue = VecDeque::from([start]);

    let mut nodes = vec![to_graph_node(graph, start)];
    let mut edges = Vec::new();
    let mut affected_sub_recipes = Vec::new();
    let mut affected_menu_items = Vec::new();

    while let Some(current) = queue.pop_front() {
        for consumer in graph.consumers(current) {
            // Record the edge even when the consumer was already reached
            // via another path; the node itself is listed only once.
            edges.push(GraphEdge {
                from: graph.node(current).id.clone(),
                to: graph.node(consumer).id.clone(),
            });
            if visited.insert(consumer) {
                queue.push_back(consumer);
                let node = graph.node(consumer);
                nodes.push(to_graph_node(graph, consumer));
                match node.kind {
                    NodeKind::SubRecipe => affected_sub_recipes.push(node.id.clone()),
                    NodeKind::MenuItem => affected_menu_items.push(node.id.clone()),
                    NodeKind::Ingredient => {}
                }
            }
        }
    }

    Ok(BlastRadius {
        ingredient,
        nodes,
        edges,
        affected_sub_recipes,
        affected_menu_items,
        affected_with_revenue: Vec::new(),
        total_menu_count: graph.menu_count(),
        total_revenue_risk_per_hour: 0.0,
        menu_share_pct: 0,
    })
}

fn to_graph_node(graph: &DependencyGraph, idx: petgraph::graph::NodeIndex) -> GraphNode {
    let node = graph.node(idx);
    GraphNode {
        id: node.id.clone(),
        label: node.id.clone(),
        kind: node.kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CatalogSnapshot, Ingredient, MenuItem, SubRecipe};
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

    /// Eggs feed Mayo, Mayo feeds Spicy Mayo, and the Sandwich consumes
    /// both Spicy Mayo and Eggs directly (a skip edge). The Bowl touches
    /// nothing downstream of Eggs.
    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot {
            ingredients: vec![
                ingredient("Avocados"),
                ingredient("Eggs"),
                ingredient("Jalapeno"),
                ingredient("Oil"),
            ],
            sub_recipes: vec![
                SubRecipe {
                    name: "Mayo".to_string(),
                    components: components(&["Eggs", "Oil"]),
                },
                SubRecipe {
                    name: "Spicy Mayo".to_string(),
                    components: components(&["Jalapeno", "Mayo"]),
                },
            ],
            menu_items: vec![
                MenuItem {
                    name: "Guacamole Bowl".to_string(),
                    components: components(&["Avocados"]),
                    revenue_per_hour: 120.0,
                },
                MenuItem {
                    name: "Sandwich".to_string(),
                    components: components(&["Eggs", "Spicy Mayo"]),
                    revenue_per_hour: 150.0,
                },
            ],
        }
    }

    fn graph() -> DependencyGraph {
        DependencyGraph::build(&snapshot()).unwrap()
    }

    #[test]
    fn unknown_ingredient_is_an_error() {
        let err = analyze(&graph(), "Saffron").unwrap_err();
        assert!(matches!(err, Error::IngredientNotFound(name) if name == "Saffron"));
    }

    #[test]
    fn sub_recipe_name_is_not_an_ingredient() {
        let err = analyze(&graph(), "Mayo").unwrap_err();
        assert!(matches!(err, Error::IngredientNotFound(_)));
    }

    #[test]
    fn traversal_reaches_transitive_consumers() {
        let result = analyze(&graph(), "eggs").unwrap();
        assert_eq!(result.ingredient, "Eggs");
        assert_eq!(result.affected_sub_recipes, vec!["Mayo", "Spicy Mayo"]);
        assert_eq!(result.affected_menu_items, vec!["Sandwich"]);
        assert_eq!(result.total_menu_count, 2);
    }

    #[test]
    fn multi_path_menu_item_is_listed_once_with_both_edges() {
        let result = analyze(&graph(), "Eggs").unwrap();
        // Sandwich is reached directly and via Mayo -> Spicy Mayo.
        let sandwich_nodes = result
            .nodes
            .iter()
            .filter(|n| n.id == "Sandwich")
            .count();
        assert_eq!(sandwich_nodes, 1);
        let sandwich_edges: Vec<&GraphEdge> =
            result.edges.iter().filter(|e| e.to == "Sandwich").collect();
        assert_eq!(sandwich_edges.len(), 2);
    }

    #[test]
    fn discovery_order_is_breadth_first() {
        let result = analyze(&graph(), "Eggs").unwrap();
        let ids: Vec<&str> = result.nodes.iter().map(|n| n.id.as_str()).collect();
        // Depth 0: Eggs; depth 1: Mayo then Sandwich; depth 2: Spicy Mayo
        // (already-queued Sandwich is not re-listed).
        assert_eq!(ids, vec!["Eggs", "Mayo", "Sandwich", "Spicy Mayo"]);
    }

    #[test]
    fn unconsumed_ingredient_yields_empty_result() {
        let mut snapshot = snapshot();
        snapshot.ingredients.push(ingredient("Saffron"));
        let graph = DependencyGraph::build(&snapshot).unwrap();
        let result = analyze(&graph, "Saffron").unwrap();
        assert_eq!(result.nodes.len(), 1);
        assert!(result.edges.is_empty());
        assert!(result.affected_menu_items.is_empty());
        assert!(result.affected_sub_recipes.is_empty());
        assert_eq!(result.total_menu_count, 2);
    }

    #[test]
    fn analyze_twice_is_identical() {
        let graph = graph();
        let a = analyze(&graph, "Eggs").unwrap();
        let b = analyze(&graph, "Eggs").unwrap();
        assert_eq!(a.nodes, b.nodes);
        assert_eq!(a.edges, b.edges);
    }
}
