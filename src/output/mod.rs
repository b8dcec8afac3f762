mod format;
mod json;
mod table;

pub(crate) use format::TableOptions;
pub(crate) use json::{PlanSummary, plan_json, schedule_json};
pub(crate) use table::{render_schedule, render_weekly_plan};
