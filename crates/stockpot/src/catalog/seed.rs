//! Built-in Tex-Mex seed catalog.
//!
//! A complete demo dataset: 45 ingredients, a two-level sub-recipe chain
//! (Spicy Mayo is built from Mayo, which is built from Eggs and Oil), and a
//! 35-item menu with hourly revenue rates. Used by the CLI `seed` command
//! and as the integration-test fixture.

use crate::domain::{CatalogSnapshot, Ingredient, MenuItem, SubRecipe};
use chrono::Utc;
use std::collections::BTreeMap;

fn ingredient(
    name: &str,
    category: &str,
    quantity: f64,
    unit: &str,
    unit_cost: f64,
    par_level: f64,
    daily_usage: f64,
) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        unit: unit.to_string(),
        unit_cost,
        par_level,
        daily_usage,
        updated_at: Utc::now(),
    }
}

fn components(parts: &[(&str, f64)]) -> BTreeMap<String, f64> {
    parts.iter().map(|(n, q)| (n.to_string(), *q)).collect()
}

fn sub_recipe(name: &str, parts: &[(&str, f64)]) -> SubRecipe {
    SubRecipe {
        name: name.to_string(),
        components: components(parts),
    }
}

fn menu_item(name: &str, revenue_per_hour: f64, parts: &[(&str, f64)]) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        components: components(parts),
        revenue_per_hour,
    }
}

/// Build the full Tex-Mex seed catalog.
#[allow(clippy::too_many_lines)]
pub fn seed_catalog() -> CatalogSnapshot {
    let ingredients = vec![
        // Produce
        ingredient("Avocados", "Produce", 100.0, "count", 0.85, 50.0, 30.0),
        ingredient("Lime", "Produce", 80.0, "count", 0.20, 40.0, 35.0),
        ingredient("Cilantro", "Produce", 25.0, "bunch", 0.75, 12.0, 10.0),
        ingredient("Onion", "Produce", 60.0, "count", 0.35, 30.0, 25.0),
        ingredient("Tomato", "Produce", 90.0, "count", 0.45, 45.0, 40.0),
        ingredient("Jalapeño", "Produce", 50.0, "count", 0.15, 25.0, 20.0),
        ingredient("Bell Pepper", "Produce", 40.0, "count", 0.80, 20.0, 15.0),
        ingredient("Corn", "Produce", 24.0, "ear", 0.40, 12.0, 10.0),
        ingredient("Garlic", "Produce", 20.0, "head", 0.50, 10.0, 8.0),
        ingredient("Lettuce", "Produce", 15.0, "head", 1.20, 8.0, 6.0),
        ingredient("Cabbage", "Produce", 12.0, "head", 0.90, 6.0, 5.0),
        ingredient("Cucumber", "Produce", 30.0, "count", 0.40, 15.0, 12.0),
        ingredient("Radish", "Produce", 20.0, "bunch", 0.60, 10.0, 8.0),
        ingredient("Mango", "Produce", 24.0, "count", 1.00, 12.0, 10.0),
        ingredient("Pineapple", "Produce", 8.0, "count", 2.50, 4.0, 3.0),
        ingredient("Potato", "Produce", 40.0, "lb", 0.45, 25.0, 15.0),
        // Protein
        ingredient("Steak", "Protein", 40.0, "lb", 8.50, 25.0, 15.0),
        ingredient("Chicken", "Protein", 50.0, "lb", 3.25, 30.0, 22.0),
        ingredient("Fish", "Protein", 25.0, "lb", 12.0, 15.0, 10.0),
        ingredient("Shrimp", "Protein", 15.0, "lb", 14.0, 8.0, 6.0),
        ingredient("Chorizo", "Protein", 20.0, "lb", 5.50, 10.0, 8.0),
        ingredient("Ground Beef", "Protein", 35.0, "lb", 4.50, 20.0, 15.0),
        ingredient("Pork", "Protein", 30.0, "lb", 3.80, 18.0, 12.0),
        ingredient("Bacon", "Protein", 18.0, "lb", 6.00, 10.0, 7.0),
        // Dairy
        ingredient("Eggs", "Dairy", 120.0, "count", 0.25, 60.0, 48.0),
        ingredient("Cheese", "Dairy", 25.0, "lb", 4.50, 15.0, 12.0),
        ingredient("Crema", "Dairy", 12.0, "quart", 3.50, 6.0, 5.0),
        ingredient("Butter", "Dairy", 10.0, "lb", 4.00, 6.0, 4.0),
        // Pantry / Bread
        ingredient("Tortilla", "Pantry", 200.0, "count", 0.08, 100.0, 80.0),
        ingredient("Bun", "Pantry", 80.0, "count", 0.30, 40.0, 35.0),
        ingredient("Rice", "Pantry", 25.0, "lb", 0.60, 15.0, 10.0),
        ingredient("Black Beans", "Pantry", 15.0, "lb", 0.90, 10.0, 6.0),
        ingredient("Pinto Beans", "Pantry", 15.0, "lb", 0.85, 10.0, 6.0),
        ingredient("Chips", "Pantry", 24.0, "bag", 2.50, 12.0, 10.0),
        ingredient("Flour", "Pantry", 50.0, "lb", 0.35, 25.0, 8.0),
        ingredient("Chili Powder", "Pantry", 5.0, "lb", 8.00, 3.0, 0.5),
        ingredient("Oil", "Pantry", 10.0, "quart", 2.20, 5.0, 2.0),
        // Condiments / Sauces
        ingredient("Salsa", "Condiments", 12.0, "quart", 4.00, 8.0, 6.0),
        ingredient("Mole Sauce", "Condiments", 8.0, "quart", 6.00, 5.0, 3.0),
        ingredient("Hot Sauce", "Condiments", 24.0, "bottle", 2.00, 12.0, 8.0),
        // Spirits & Beverages
        ingredient("Tequila", "Spirits", 12.0, "bottle", 18.0, 6.0, 3.0),
        ingredient("Triple Sec", "Spirits", 8.0, "bottle", 12.0, 4.0, 2.0),
        ingredient("Grapefruit Soda", "Beverages", 24.0, "bottle", 1.50, 12.0, 8.0),
        ingredient("Beer", "Beverages", 48.0, "case", 28.0, 24.0, 18.0),
        ingredient("Clamato", "Beverages", 12.0, "bottle", 3.50, 6.0, 4.0),
    ];

    // Three-level depth: Sandwich -> Spicy Mayo -> Mayo -> Eggs
    let sub_recipes = vec![
        sub_recipe("Mayo", &[("Eggs", 4.0), ("Oil", 0.5)]),
        sub_recipe("Spicy Mayo", &[("Mayo", 1.0), ("Jalapeño", 3.0)]),
    ];

    let menu_items = vec![
        // Sandwiches & Burgers
        menu_item(
            "Spicy Chicken Sandwich",
            150.0,
            &[("Bun", 1.0), ("Chicken", 0.35), ("Spicy Mayo", 0.1), ("Lettuce", 0.1)],
        ),
        menu_item(
            "Carnitas Burrito",
            165.0,
            &[
                ("Tortilla", 1.0),
                ("Pork", 0.4),
                ("Rice", 0.3),
                ("Black Beans", 0.25),
                ("Salsa", 0.1),
                ("Cheese", 0.15),
                ("Cilantro", 0.05),
                ("Lime", 0.5),
            ],
        ),
        menu_item(
            "Steak Sandwich",
            140.0,
            &[("Bun", 1.0), ("Steak", 0.4), ("Onion", 0.25), ("Bell Pepper", 0.25), ("Cheese", 0.1)],
        ),
        menu_item(
            "Fish Taco",
            95.0,
            &[
                ("Tortilla", 2.0),
                ("Fish", 0.3),
                ("Cabbage", 0.1),
                ("Lime", 0.5),
                ("Crema", 0.05),
                ("Salsa", 0.05),
            ],
        ),
        // Tacos
        menu_item(
            "Steak Tacos",
            180.0,
            &[("Tortilla", 3.0), ("Steak", 0.35), ("Lime", 0.5), ("Onion", 0.2), ("Cilantro", 0.05)],
        ),
        menu_item(
            "Chicken Tacos",
            130.0,
            &[("Tortilla", 3.0), ("Chicken", 0.35), ("Lime", 0.5), ("Onion", 0.2), ("Salsa", 0.05)],
        ),
        menu_item(
            "Carnitas Tacos",
            155.0,
            &[
                ("Tortilla", 3.0),
                ("Pork", 0.35),
                ("Lime", 0.5),
                ("Onion", 0.2),
                ("Cilantro", 0.05),
                ("Salsa", 0.05),
            ],
        ),
        menu_item(
            "Shrimp Tacos",
            120.0,
            &[
                ("Tortilla", 3.0),
                ("Shrimp", 0.3),
                ("Cabbage", 0.1),
                ("Lime", 0.5),
                ("Crema", 0.05),
                ("Avocados", 0.5),
            ],
        ),
        menu_item(
            "Chorizo Tacos",
            100.0,
            &[("Tortilla", 3.0), ("Chorizo", 0.3), ("Eggs", 1.0), ("Onion", 0.2), ("Cilantro", 0.05)],
        ),
        menu_item(
            "Baja Fish Tacos",
            105.0,
            &[
                ("Tortilla", 3.0),
                ("Fish", 0.3),
                ("Cabbage", 0.1),
                ("Lime", 0.5),
                ("Crema", 0.05),
                ("Hot Sauce", 0.05),
            ],
        ),
        // Burritos & Bowls
        menu_item(
            "Breakfast Burrito",
            140.0,
            &[
                ("Tortilla", 1.0),
                ("Eggs", 2.0),
                ("Steak", 0.25),
                ("Avocados", 0.5),
                ("Salsa", 0.1),
                ("Cheese", 0.15),
            ],
        ),
        menu_item(
            "Vegetarian Burrito",
            90.0,
            &[
                ("Tortilla", 1.0),
                ("Rice", 0.3),
                ("Black Beans", 0.25),
                ("Bell Pepper", 0.3),
                ("Onion", 0.2),
                ("Cheese", 0.15),
                ("Salsa", 0.1),
                ("Avocados", 0.5),
            ],
        ),
        menu_item(
            "Guacamole Bowl",
            120.0,
            &[
                ("Avocados", 2.0),
                ("Lime", 1.0),
                ("Cilantro", 0.1),
                ("Tomato", 0.5),
                ("Onion", 0.25),
                ("Jalapeño", 0.5),
            ],
        ),
        menu_item(
            "Bowl with Steak",
            135.0,
            &[
                ("Rice", 0.35),
                ("Black Beans", 0.25),
                ("Steak", 0.35),
                ("Salsa", 0.1),
                ("Cheese", 0.1),
                ("Avocados", 0.5),
                ("Cilantro", 0.05),
                ("Lime", 0.5),
            ],
        ),
        menu_item(
            "Chipotle-Style Bowl",
            125.0,
            &[
                ("Rice", 0.35),
                ("Chicken", 0.35),
                ("Black Beans", 0.25),
                ("Salsa", 0.1),
                ("Cheese", 0.1),
                ("Lettuce", 0.1),
                ("Crema", 0.05),
            ],
        ),
        // Quesadillas & More
        menu_item(
            "Quesadilla",
            110.0,
            &[("Tortilla", 1.0), ("Cheese", 0.25), ("Chicken", 0.3)],
        ),
        menu_item(
            "Veggie Quesadilla",
            75.0,
            &[
                ("Tortilla", 1.0),
                ("Cheese", 0.25),
                ("Bell Pepper", 0.3),
                ("Onion", 0.2),
                ("Black Beans", 0.2),
            ],
        ),
        menu_item(
            "Mole Enchiladas",
            145.0,
            &[
                ("Tortilla", 3.0),
                ("Chicken", 0.35),
                ("Mole Sauce", 0.2),
                ("Cheese", 0.15),
                ("Crema", 0.05),
                ("Onion", 0.15),
            ],
        ),
        // Seafood
        menu_item(
            "Ceviche",
            90.0,
            &[
                ("Lime", 2.0),
                ("Avocados", 0.5),
                ("Fish", 0.3),
                ("Cilantro", 0.1),
                ("Onion", 0.2),
                ("Jalapeño", 0.5),
                ("Tomato", 0.5),
            ],
        ),
        menu_item(
            "Shrimp Ceviche",
            100.0,
            &[
                ("Lime", 2.0),
                ("Avocados", 0.5),
                ("Shrimp", 0.3),
                ("Cilantro", 0.1),
                ("Onion", 0.2),
                ("Jalapeño", 0.5),
                ("Cucumber", 0.5),
            ],
        ),
        menu_item(
            "Fish Ceviche",
            85.0,
            &[
                ("Lime", 2.0),
                ("Fish", 0.3),
                ("Avocados", 0.5),
                ("Cilantro", 0.1),
                ("Onion", 0.2),
                ("Jalapeño", 0.5),
            ],
        ),
        // Breakfast
        menu_item(
            "Huevos Rancheros",
            95.0,
            &[
                ("Eggs", 2.0),
                ("Tortilla", 2.0),
                ("Salsa", 0.1),
                ("Black Beans", 0.2),
                ("Cheese", 0.1),
                ("Cilantro", 0.05),
            ],
        ),
        menu_item(
            "Chilaquiles",
            105.0,
            &[
                ("Tortilla", 3.0),
                ("Eggs", 2.0),
                ("Salsa", 0.15),
                ("Cheese", 0.1),
                ("Crema", 0.05),
                ("Avocados", 0.5),
            ],
        ),
        menu_item(
            "Breakfast Tacos",
            115.0,
            &[
                ("Tortilla", 3.0),
                ("Eggs", 2.0),
                ("Bacon", 0.15),
                ("Potato", 0.25),
                ("Cheese", 0.1),
                ("Salsa", 0.05),
            ],
        ),
        menu_item(
            "Huevos con Chorizo",
            88.0,
            &[("Eggs", 3.0), ("Chorizo", 0.25), ("Tortilla", 2.0), ("Salsa", 0.1)],
        ),
        // Apps & Sides
        menu_item(
            "Guac and Chips",
            85.0,
            &[
                ("Avocados", 2.0),
                ("Lime", 1.0),
                ("Cilantro", 0.1),
                ("Tomato", 0.5),
                ("Onion", 0.25),
                ("Chips", 1.0),
            ],
        ),
        menu_item(
            "Elote",
            55.0,
            &[("Corn", 1.0), ("Cheese", 0.1), ("Crema", 0.05), ("Lime", 0.5), ("Chili Powder", 0.01)],
        ),
        menu_item(
            "Street Corn Salad",
            70.0,
            &[
                ("Corn", 1.0),
                ("Avocados", 0.5),
                ("Lime", 0.5),
                ("Cilantro", 0.1),
                ("Cheese", 0.1),
                ("Crema", 0.05),
            ],
        ),
        menu_item(
            "Queso Fundido",
            80.0,
            &[("Cheese", 0.4), ("Chorizo", 0.2), ("Tortilla", 2.0), ("Jalapeño", 0.5)],
        ),
        menu_item(
            "Sopes",
            65.0,
            &[
                ("Flour", 0.3),
                ("Black Beans", 0.2),
                ("Chicken", 0.3),
                ("Lettuce", 0.1),
                ("Crema", 0.05),
                ("Cheese", 0.1),
            ],
        ),
        // Drinks
        menu_item(
            "Margarita",
            200.0,
            &[("Tequila", 0.06), ("Lime", 1.0), ("Triple Sec", 0.03)],
        ),
        menu_item(
            "Paloma",
            95.0,
            &[("Tequila", 0.06), ("Lime", 0.5), ("Grapefruit Soda", 1.0)],
        ),
        menu_item(
            "Mango Margarita",
            115.0,
            &[("Tequila", 0.06), ("Lime", 1.0), ("Triple Sec", 0.03), ("Mango", 0.5)],
        ),
        menu_item(
            "Pineapple Margarita",
            110.0,
            &[("Tequila", 0.06), ("Lime", 1.0), ("Triple Sec", 0.03), ("Pineapple", 0.25)],
        ),
        menu_item(
            "Michelada",
            75.0,
            &[("Beer", 0.04), ("Lime", 1.0), ("Hot Sauce", 0.02), ("Clamato", 0.3)],
        ),
    ];

    let mut snapshot = CatalogSnapshot {
        ingredients,
        sub_recipes,
        menu_items,
    };
    // Store contract: snapshot vectors are name-sorted, case-insensitive
    snapshot
        .ingredients
        .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    snapshot
        .sub_recipes
        .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    snapshot
        .menu_items
        .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    snapshot
}
