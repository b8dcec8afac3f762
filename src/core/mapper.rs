use std::collections::HashMap;

use crate::core::days::DayTable;
use crate::core::types::{DAYS_PER_WEEK, DayOfWeek, Recipe, RelationUpdate, WeeklyPlan};

/// Map each chosen name to its day id by position: `days[index % 7]`.
///
/// `flat` is the slot-major flattening of a weekly plan, so positions
/// 0, 7 and 14 all land on Sunday.
pub(crate) fn map_meals_to_days<'a>(flat: &[&'a str], days: &DayTable) -> HashMap<&'a str, String> {
    flat.iter()
        .enumerate()
        .map(|(index, name)| (*name, days.id_for(DayOfWeek::ALL[index % DAYS_PER_WEEK]).to_string()))
        .collect()
}

/// One write per recipe in the store: chosen recipes get their day,
/// everything else gets its day relations cleared.
pub(crate) fn build_relation_updates(
    recipes: &[Recipe],
    assignments: &HashMap<&str, String>,
) -> Vec<RelationUpdate> {
    recipes
        .iter()
        .map(|recipe| RelationUpdate {
            page_id: recipe.page_id.clone(),
            day_id: assignments.get(recipe.name.as_str()).cloned(),
        })
        .collect()
}

/// Convenience for the full write path of a plan
pub(crate) fn plan_updates(recipes: &[Recipe], plan: &WeeklyPlan, days: &DayTable) -> Vec<RelationUpdate> {
    let flat = plan.flatten();
    let assignments = map_meals_to_days(&flat, days);
    build_relation_updates(recipes, &assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::days::sample_table;
    use crate::core::types::MealSlot;

    #[test]
    fn position_modulo_seven_picks_the_day() {
        let days = sample_table();
        let names: Vec<String> = (0..21).map(|i| format!("meal {i}")).collect();
        let flat: Vec<&str> = names.iter().map(String::as_str).collect();

        let mapping = map_meals_to_days(&flat, &days);

        assert_eq!(mapping.len(), 21);
        for (i, name) in flat.iter().enumerate() {
            assert_eq!(mapping[name], days.ids()[i % 7]);
        }
    }

    #[test]
    fn chosen_get_one_day_others_get_cleared() {
        let recipes: Vec<Recipe> = ["A", "B", "C"]
            .iter()
            .map(|n| Recipe {
                page_id: format!("page-{n}"),
                name: n.to_string(),
                tags: vec![],
            })
            .collect();
        let mut assignments = HashMap::new();
        assignments.insert("B", "day-2".to_string());

        let updates = build_relation_updates(&recipes, &assignments);

        assert_eq!(
            updates,
            vec![
                RelationUpdate {
                    page_id: "page-A".into(),
                    day_id: None
                },
                RelationUpdate {
                    page_id: "page-B".into(),
                    day_id: Some("day-2".into())
                },
                RelationUpdate {
                    page_id: "page-C".into(),
                    day_id: None
                },
            ]
        );
    }

    #[test]
    fn plan_updates_covers_every_recipe() {
        let days = sample_table();
        let recipes: Vec<Recipe> = (0..30)
            .map(|i| Recipe {
                page_id: format!("page-{i}"),
                name: format!("R{i}"),
                tags: vec![],
            })
            .collect();
        let mut plan = WeeklyPlan::default();
        for (s, slot) in MealSlot::ALL.iter().enumerate() {
            plan.insert(*slot, (0..7).map(|d| format!("R{}", s * 7 + d)).collect());
        }

        let updates = plan_updates(&recipes, &plan, &days);

        assert_eq!(updates.len(), 30);
        assert_eq!(updates.iter().filter(|u| u.day_id.is_some()).count(), 21);
        // R8 is Lunch, Monday
        assert_eq!(updates[8].day_id.as_deref(), Some(days.ids()[1].as_str()));
        assert_eq!(updates[29].day_id, None);
    }
}
