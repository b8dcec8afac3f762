use crate::core::filter::filter_recipes_for_meal;
use crate::core::seed::WeeklySeed;
use crate::core::select::choose_unique_recipes;
use crate::core::types::{ChosenSet, MealSlot, Recipe, WeeklyPlan};
use crate::error::PlanError;

/// Build the plan for the week identified by `seed`.
///
/// Slots are filled in Breakfast, Lunch, Dinner order from a single
/// generator, so the same recipes and seed always give the same plan.
pub(crate) fn plan_week(recipes: &[Recipe], seed: WeeklySeed) -> Result<WeeklyPlan, PlanError> {
    let mut rng = seed.rng();
    let mut chosen = ChosenSet::default();
    let mut plan = WeeklyPlan::default();

    for slot in MealSlot::ALL {
        let pool = filter_recipes_for_meal(recipes, slot.label());
        tracing::debug!(slot = %slot, candidates = pool.len(), "filtered recipes");
        let (picks, next) = choose_unique_recipes(slot, &pool, chosen, &mut rng)?;
        chosen = next;
        plan.insert(slot, picks);
    }

    Ok(plan)
}

#[cfg(test)]
pub(crate) fn sample_recipes(per_slot: usize) -> Vec<Recipe> {
    MealSlot::ALL
        .iter()
        .flat_map(|slot| {
            (0..per_slot).map(move |i| Recipe {
                page_id: format!("{}-page-{i}", slot.label().to_lowercase()),
                name: format!("{} {i}", slot.label()),
                tags: vec![slot.label().to_string()],
            })
        })
        .collect()
}
