use chrono::NaiveDate;

use crate::chat::{ChatCommand, MESSAGE_LIMIT, ParsedMessage, ReplySink, help_text, split_code_block};
use crate::core::{DayTable, Schedule, WeeklyPlan, WeeklySeed, group_by_day, plan_updates, plan_week};
use crate::error::AppError;
use crate::output::{
    PlanSummary, TableOptions, plan_json, render_schedule, render_weekly_plan, schedule_json,
};
use crate::store::{RecipeStore, apply_updates};

pub(crate) const PARTIAL_FAILURE_NOTICE: &str =
    "Encountered failures when submitting meal plan, manual updates required";

pub(crate) struct CommandContext<'a> {
    pub(crate) days: &'a DayTable,
    /// Date that selects the ISO week being planned
    pub(crate) today: NaiveDate,
    pub(crate) dry_run: bool,
    pub(crate) json: bool,
    pub(crate) table: TableOptions,
    /// Replies are chat messages: fenced and split to the message limit
    pub(crate) chat: bool,
    pub(crate) prefix: &'a str,
}

/// Result of one planning run
#[derive(Debug)]
pub(crate) struct PlanOutcome {
    pub(crate) seed: WeeklySeed,
    pub(crate) plan: WeeklyPlan,
    pub(crate) updates: usize,
    pub(crate) failures: usize,
    pub(crate) dry_run: bool,
}

/// Meals currently related to a day page
pub(crate) fn current_schedule(store: &dyn RecipeStore, days: &DayTable) -> Result<Schedule, AppError> {
    let planned = store.query_planned_meals(days)?;
    Ok(group_by_day(&planned, days))
}

/// Plan the week containing `ctx.today` and write it to the store.
///
/// Selection happens entirely before the first write, so a slot without
/// enough recipes leaves the store untouched. Write failures are counted
/// rather than aborting the run.
pub(crate) fn generate_plan(store: &dyn RecipeStore, ctx: &CommandContext<'_>) -> Result<PlanOutcome, AppError> {
    let seed = WeeklySeed::from_date(ctx.today);
    tracing::info!(seed = %seed, date = %ctx.today, "planning week");

    let recipes = store.query_recipes()?;
    let plan = plan_week(&recipes, seed)?;
    let updates = plan_updates(&recipes, &plan, ctx.days);

    let dry_run = ctx.dry_run || store.is_read_only();
    let failures = if dry_run {
        tracing::info!(updates = updates.len(), store = store.name(), "dry run, skipping writes");
        0
    } else {
        apply_updates(store, &updates)
    };

    Ok(PlanOutcome {
        seed,
        plan,
        updates: updates.len(),
        failures,
        dry_run,
    })
}

fn send_block(text: &str, ctx: &CommandContext<'_>, sink: &mut dyn ReplySink) -> Result<(), AppError> {
    if ctx.chat {
        for chunk in split_code_block(text, MESSAGE_LIMIT) {
            sink.send(&chunk)?;
        }
    } else {
        sink.send(text)?;
    }
    Ok(())
}

fn handle_meals(store: &dyn RecipeStore, ctx: &CommandContext<'_>, sink: &mut dyn ReplySink) -> Result<(), AppError> {
    let schedule = current_schedule(store, ctx.days)?;
    if ctx.json {
        return send_block(&schedule_json(&schedule), ctx, sink);
    }
    if schedule.is_empty() {
        sink.send("No meals are currently planned.")?;
        return Ok(());
    }
    send_block(&render_schedule(&schedule, ctx.table), ctx, sink)
}

fn handle_plan(store: &dyn RecipeStore, ctx: &CommandContext<'_>, sink: &mut dyn ReplySink) -> Result<(), AppError> {
    let outcome = generate_plan(store, ctx)?;

    if ctx.json {
        let summary = PlanSummary {
            seed: outcome.seed,
            plan: &outcome.plan,
            updates: outcome.updates,
            failures: outcome.failures,
            dry_run: outcome.dry_run,
        };
        return send_block(&plan_json(&summary), ctx, sink);
    }

    if outcome.failures > 0 {
        tracing::warn!(failures = outcome.failures, updates = outcome.updates, "some writes failed");
        let notice = format!(
            "{PARTIAL_FAILURE_NOTICE} ({} of {} updates failed)",
            outcome.failures, outcome.updates
        );
        // The table below is what the user needs to fix the store by hand
        if let Err(e) = sink.send(&notice) {
            tracing::warn!(error = %e, "failed to send partial failure notice");
        }
    }
    send_block(&render_weekly_plan(&outcome.plan, ctx.table), ctx, sink)?;
    if outcome.dry_run {
        sink.send(&format!(
            "Dry run for week {}: Notion was not updated.",
            outcome.seed
        ))?;
    }
    Ok(())
}

pub(crate) fn handle_command(
    command: ChatCommand,
    store: &dyn RecipeStore,
    ctx: &CommandContext<'_>,
    sink: &mut dyn ReplySink,
) -> Result<(), AppError> {
    match command {
        ChatCommand::Meals => handle_meals(store, ctx, sink),
        ChatCommand::Plan => handle_plan(store, ctx, sink),
        ChatCommand::Help => {
            sink.send(&help_text(ctx.prefix))?;
            Ok(())
        }
    }
}

/// Run one message to completion. In chat mode errors are also replied to
/// the channel before being returned.
pub(crate) fn handle_message(
    message: ParsedMessage,
    store: &dyn RecipeStore,
    ctx: &CommandContext<'_>,
    sink: &mut dyn ReplySink,
) -> Result<(), AppError> {
    match message {
        ParsedMessage::Ignored => {
            tracing::debug!("message not addressed to the bot");
            Ok(())
        }
        ParsedMessage::Unknown(word) => {
            sink.send(&format!(
                "Unknown command `{prefix}{word}`. Try `{prefix}help`.",
                prefix = ctx.prefix
            ))?;
            Ok(())
        }
        ParsedMessage::Command(command) => match handle_command(command, store, ctx, sink) {
            Err(e) if ctx.chat => {
                if let Err(reply_err) = sink.send(&format!("Error: {e}")) {
                    tracing::warn!(error = %reply_err, "failed to reply with error");
                }
                Err(e)
            }
            result => result,
        },
    }
}
