mod days;
mod filter;
mod mapper;
mod planner;
mod schedule;
mod seed;
mod select;
mod types;

pub(crate) use days::DayTable;
#[cfg(test)]
pub(crate) use days::sample_table;
pub(crate) use mapper::plan_updates;
pub(crate) use planner::plan_week;
#[cfg(test)]
pub(crate) use planner::sample_recipes;
pub(crate) use schedule::{Schedule, group_by_day};
pub(crate) use seed::WeeklySeed;
pub(crate) use types::{DAYS_PER_WEEK, DayOfWeek, MealSlot, PlannedMeal, Recipe, RelationUpdate, WeeklyPlan};
