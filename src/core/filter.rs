use std::collections::BTreeMap;

use crate::core::types::Recipe;

/// Candidate recipes for one slot, keyed by name
pub(crate) type CandidatePool<'a> = BTreeMap<&'a str, &'a Recipe>;

/// Upper-case the first character and lower-case the rest ("dINNER" -> "Dinner")
pub(crate) fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Recipes tagged with the given meal label.
///
/// Ordered by name so sampling over the pool is deterministic. When two
/// pages share a name the later one wins.
pub(crate) fn filter_recipes_for_meal<'a>(recipes: &'a [Recipe], meal: &str) -> CandidatePool<'a> {
    let mut pool = CandidatePool::new();
    if recipes.is_empty() || meal.is_empty() {
        return pool;
    }

    let tag = capitalize(meal);
    for recipe in recipes.iter().filter(|r| r.has_tag(&tag)) {
        pool.insert(recipe.name.as_str(), recipe);
    }
    pool
}
