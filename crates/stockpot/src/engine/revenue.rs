//! Revenue risk aggregation over a blast-radius result.

use super::blast::{BlastRadius, MenuRevenue};
use super::round2;
use crate::domain::CatalogSnapshot;
use std::collections::HashMap;

/// Fill the revenue fields of a blast-radius result from catalog rates.
///
/// Each affected menu item is counted exactly once regardless of how many
/// paths lead to it; the per-item list preserves the analyzer's discovery
/// order. Percentage exposure is the affected share of the whole menu,
/// rounded to an integer; an empty menu yields zero rather than a division
/// fault.
pub fn aggregate(mut result: BlastRadius, snapshot: &CatalogSnapshot) -> BlastRadius {
    let rates: HashMap<String, f64> = snapshot
        .menu_items
        .iter()
        .map(|item| (item.name.to_lowercase(), item.revenue_per_hour))
        .collect();

    result.affected_with_revenue = result
        .affected_menu_items
        .iter()
        .map(|name| MenuRevenue {
            menu_item: name.clone(),
            revenue_per_hour: rates.get(&name.to_lowercase()).copied().unwrap_or(0.0),
        })
        .collect();

    result.total_revenue_risk_per_hour = round2(
        result
            .affected_with_revenue
            .iter()
            .map(|entry| entry.revenue_per_hour)
            .sum(),
    );

    result.total_menu_count = snapshot.menu_items.len();
    result.menu_share_pct = menu_share_pct(result.affected_menu_items.len(), result.total_menu_count);

    result
}

/// Integer percentage of the menu affected; zero when the menu is empty.
pub fn menu_share_pct(affected: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        ((affected as f64 / total as f64) * 100.0).round() as u32
    }
}
