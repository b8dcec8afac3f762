//! Recipe store abstraction
//!
//! The planner only needs three operations from the table database: list
//! every recipe, list recipes scheduled on a day, and set (or clear) the day
//! a recipe is scheduled on. `NotionStore` talks to the API; `OfflineStore`
//! replays the last query from disk.

pub(crate) mod notion;
pub(crate) mod page;
pub(crate) mod snapshot;

use crate::core::{DayTable, PlannedMeal, Recipe, RelationUpdate};
use crate::error::StoreError;

/// Table database holding the recipes
pub(crate) trait RecipeStore {
    /// Display name for logs and messages
    fn name(&self) -> &'static str;

    /// Stores that cannot be written are planned against as a dry run
    fn is_read_only(&self) -> bool {
        false
    }

    fn query_recipes(&self) -> Result<Vec<Recipe>, StoreError>;

    /// Recipes related to any day in `days`
    fn query_planned_meals(&self, days: &DayTable) -> Result<Vec<PlannedMeal>, StoreError>;

    /// Replace the page's day relations with `day_id`, or clear them when `None`
    fn update_recipe_day(&self, page_id: &str, day_id: Option<&str>) -> Result<(), StoreError>;
}

/// Apply every write in order and return how many failed.
///
/// Failures are logged and skipped; earlier successful writes stay in place.
pub(crate) fn apply_updates(store: &dyn RecipeStore, updates: &[RelationUpdate]) -> usize {
    let mut failures = 0;
    for update in updates {
        tracing::debug!(page = %update.page_id, day = ?update.day_id, "updating page");
        if let Err(e) = store.update_recipe_day(&update.page_id, update.day_id.as_deref()) {
            tracing::warn!(page = %update.page_id, error = %e, "updating page failed");
            failures += 1;
        }
    }
    failures
}

pub(crate) use notion::NotionStore;
#[cfg(test)]
pub(crate) use page::page_json;
pub(crate) use page::PropertyNames;
pub(crate) use snapshot::OfflineStore;
