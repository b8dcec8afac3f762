use serde_json::{Map, Value, json};

use crate::core::{MealSlot, Schedule, WeeklyPlan, WeeklySeed};

/// `{"Sunday": [...], ...}` in day order
pub(crate) fn schedule_json(schedule: &Schedule) -> String {
    let mut days = Map::new();
    for (day, meals) in schedule {
        days.insert(day.label().to_string(), json!(meals));
    }
    to_pretty(&Value::Object(days))
}

pub(crate) struct PlanSummary<'a> {
    pub(crate) seed: WeeklySeed,
    pub(crate) plan: &'a WeeklyPlan,
    pub(crate) updates: usize,
    pub(crate) failures: usize,
    pub(crate) dry_run: bool,
}

pub(crate) fn plan_json(summary: &PlanSummary<'_>) -> String {
    let mut slots = Map::new();
    for slot in MealSlot::ALL {
        slots.insert(slot.label().to_string(), json!(summary.plan.slot(slot)));
    }
    let output = json!({
        "year": summary.seed.year,
        "week": summary.seed.week,
        "seed": summary.seed.to_string(),
        "plan": slots,
        "updates": summary.updates,
        "failures": summary.failures,
        "dry_run": summary.dry_run,
    });
    to_pretty(&output)
}

fn to_pretty(value: &Value) -> String {
    // Serializing a Value cannot fail
    serde_json::to_string_pretty(value).unwrap_or_default()
}
