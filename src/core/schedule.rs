use std::collections::BTreeMap;

use crate::core::days::DayTable;
use crate::core::types::{DayOfWeek, PlannedMeal};

/// Meals currently scheduled, grouped by day in Sunday..Saturday order
pub(crate) type Schedule = BTreeMap<DayOfWeek, Vec<String>>;

/// Resolve every related day id of every planned meal through the day table.
///
/// A meal related to several days appears under each of them. Ids that are
/// not in the table are skipped.
pub(crate) fn group_by_day(planned: &[PlannedMeal], days: &DayTable) -> Schedule {
    let mut schedule = Schedule::new();
    for meal in planned {
        for id in &meal.day_ids {
            match days.day_for(id) {
                Some(day) => schedule.entry(day).or_default().push(meal.name.clone()),
                None => tracing::warn!(meal = %meal.name, id = %id, "relation is not a known day"),
            }
        }
    }
    schedule
}
