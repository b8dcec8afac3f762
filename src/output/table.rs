use comfy_table::Cell;

use crate::core::{DayOfWeek, MealSlot, Schedule, WeeklyPlan};
use crate::output::format::{TableOptions, create_styled_table, header_cell, label_cell};

/// Two columns: the day, and every meal scheduled on it
pub(crate) fn render_schedule(schedule: &Schedule, opts: TableOptions) -> String {
    let c = opts.use_color;
    let mut table = create_styled_table(opts);
    table.set_header(vec![header_cell("Day", c), header_cell("Meals", c)]);

    for (day, meals) in schedule {
        table.add_row(vec![label_cell(day.label(), c), Cell::new(meals.join(", "))]);
    }

    table.to_string()
}

/// One row per day, one column per meal slot
pub(crate) fn render_weekly_plan(plan: &WeeklyPlan, opts: TableOptions) -> String {
    let c = opts.use_color;
    let mut table = create_styled_table(opts);

    let mut header = vec![header_cell("Day", c)];
    header.extend(MealSlot::ALL.iter().map(|slot| header_cell(slot.label(), c)));
    table.set_header(header);

    for day in DayOfWeek::ALL {
        let mut row = vec![label_cell(day.label(), c)];
        row.extend(
            MealSlot::ALL
                .iter()
                .map(|slot| Cell::new(plan.meal(*slot, day).unwrap_or(""))),
        );
        table.add_row(row);
    }

    table.to_string()
}
