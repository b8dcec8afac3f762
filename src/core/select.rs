use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::filter::CandidatePool;
use crate::core::types::{ChosenSet, DAYS_PER_WEEK, MealSlot};
use crate::error::PlanError;

/// Pick one recipe per day for `slot`, none of which were chosen earlier in the week.
///
/// Takes the running set by value and hands it back with the new names added.
/// The eligible names (pool minus already chosen) are shuffled and the first
/// seven taken, so the call either succeeds or fails immediately when fewer
/// than seven are eligible.
pub(crate) fn choose_unique_recipes<R: Rng + ?Sized>(
    slot: MealSlot,
    candidates: &CandidatePool<'_>,
    mut chosen: ChosenSet,
    rng: &mut R,
) -> Result<(Vec<String>, ChosenSet), PlanError> {
    let mut eligible: Vec<&str> = candidates
        .keys()
        .copied()
        .filter(|name| !chosen.contains(name))
        .collect();

    if eligible.len() < DAYS_PER_WEEK {
        return Err(PlanError::InsufficientCandidates {
            slot,
            available: eligible.len(),
            required: DAYS_PER_WEEK,
        });
    }

    eligible.shuffle(rng);
    eligible.truncate(DAYS_PER_WEEK);

    let picks: Vec<String> = eligible
        .into_iter()
        .map(|name| {
            chosen.insert(name);
            name.to_string()
        })
        .collect();

    tracing::debug!(slot = %slot, picks = ?picks, "selected recipes");
    Ok((picks, chosen))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::filter_recipes_for_meal;
    use crate::core::types::Recipe;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn recipes(prefix: &str, count: usize, tag: &str) -> Vec<Recipe> {
        (0..count)
            .map(|i| Recipe {
                page_id: format!("{prefix}-page-{i}"),
                name: format!("{prefix} {i}"),
                tags: vec![tag.to_string()],
            })
            .collect()
    }

    #[test]
    fn picks_seven_distinct_from_pool() {
        let all = recipes("Dinner", 10, "Dinner");
        let pool = filter_recipes_for_meal(&all, "Dinner");
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let (picks, chosen) =
            choose_unique_recipes(MealSlot::Dinner, &pool, ChosenSet::default(), &mut rng)
                .unwrap();

        assert_eq!(picks.len(), 7);
        let unique: HashSet<&String> = picks.iter().collect();
        assert_eq!(unique.len(), 7);
        for name in &picks {
            assert!(pool.contains_key(name.as_str()));
            assert!(chosen.contains(name));
        }
        assert_eq!(chosen.len(), 7);
    }

    #[test]
    fn skips_names_chosen_by_earlier_slots() {
        // Ten shared recipes, seven already taken: only three left
        let all = recipes("Any", 10, "Lunch");
        let pool = filter_recipes_for_meal(&all, "Lunch");
        let mut chosen = ChosenSet::default();
        for name in pool.keys().take(7) {
            chosen.insert(name);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let err = choose_unique_recipes(MealSlot::Lunch, &pool, chosen, &mut rng).unwrap_err();
        assert_eq!(
            err,
            PlanError::InsufficientCandidates {
                slot: MealSlot::Lunch,
                available: 3,
                required: 7,
            }
        );
    }

    #[test]
    fn exactly_seven_eligible_uses_all_of_them() {
        let all = recipes("B", 9, "Breakfast");
        let pool = filter_recipes_for_meal(&all, "Breakfast");
        let mut chosen = ChosenSet::default();
        chosen.insert("B 0");
        chosen.insert("B 1");
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let (picks, chosen) =
            choose_unique_recipes(MealSlot::Breakfast, &pool, chosen, &mut rng).unwrap();
        let mut sorted = picks.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["B 2", "B 3", "B 4", "B 5", "B 6", "B 7", "B 8"]);
        assert_eq!(chosen.len(), 9);
    }

    #[test]
    fn small_pools_always_fail() {
        for size in 0..=6 {
            let all = recipes("S", size, "Dinner");
            let pool = filter_recipes_for_meal(&all, "Dinner");
            let mut rng = ChaCha8Rng::seed_from_u64(size as u64);
            let result =
                choose_unique_recipes(MealSlot::Dinner, &pool, ChosenSet::default(), &mut rng);
            assert!(
                matches!(result, Err(PlanError::InsufficientCandidates { available, .. }) if available == size)
            );
        }
    }

    #[test]
    fn large_pools_always_succeed() {
        let all = recipes("L", 8, "Dinner");
        let pool = filter_recipes_for_meal(&all, "Dinner");
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            assert!(
                choose_unique_recipes(MealSlot::Dinner, &pool, ChosenSet::default(), &mut rng)
                    .is_ok()
            );
        }
    }

    #[test]
    fn same_seed_same_picks() {
        let all = recipes("R", 20, "Lunch");
        let pool = filter_recipes_for_meal(&all, "Lunch");
        let run = || {
            let mut rng = ChaCha8Rng::seed_from_u64(202_643);
            choose_unique_recipes(MealSlot::Lunch, &pool, ChosenSet::default(), &mut rng)
                .unwrap()
                .0
        };
        assert_eq!(run(), run());
    }
}
