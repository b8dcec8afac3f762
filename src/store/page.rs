//! Notion page parsing
//!
//! Pages are kept as raw JSON because the property names are configurable;
//! only the fields the planner needs are extracted.

use serde::Deserialize;
use serde_json::Value;

use crate::core::{PlannedMeal, Recipe};

/// Names of the database properties the planner reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct PropertyNames {
    /// Title property holding the recipe name
    pub(crate) name: String,
    /// Multi-select property holding meal tags
    pub(crate) tags: String,
    /// Relation property pointing at day pages
    pub(crate) when: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            tags: "Tags".to_string(),
            when: "When".to_string(),
        }
    }
}

/// One page of results from `POST /databases/{id}/query`
#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse {
    #[serde(default)]
    pub(crate) results: Vec<Value>,
    #[serde(default)]
    pub(crate) has_more: bool,
    #[serde(default)]
    pub(crate) next_cursor: Option<String>,
}

fn page_id(page: &Value) -> Option<&str> {
    page.get("id").and_then(Value::as_str).filter(|id| !id.is_empty())
}

fn property<'a>(page: &'a Value, name: &str) -> Option<&'a Value> {
    page.get("properties")?.get(name)
}

/// Plain text of a title property; rich text may be split into several runs
fn title(page: &Value, props: &PropertyNames) -> Option<String> {
    let runs = property(page, &props.name)?.get("title")?.as_array()?;
    let text: String = runs
        .iter()
        .filter_map(|run| run.get("plain_text").and_then(Value::as_str))
        .collect();
    if text.trim().is_empty() { None } else { Some(text) }
}

fn multi_select(page: &Value, name: &str) -> Vec<String> {
    property(page, name)
        .and_then(|p| p.get("multi_select"))
        .and_then(Value::as_array)
        .map(|options| {
            options
                .iter()
                .filter_map(|o| o.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn relation_ids(page: &Value, name: &str) -> Vec<String> {
    property(page, name)
        .and_then(|p| p.get("relation"))
        .and_then(Value::as_array)
        .map(|links| {
            links
                .iter()
                .filter_map(|l| l.get("id").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// A page without an id or a title cannot be planned or written; a missing
/// tags property just means the recipe belongs to no slot.
pub(crate) fn parse_recipe(page: &Value, props: &PropertyNames) -> Option<Recipe> {
    Some(Recipe {
        page_id: page_id(page)?.to_string(),
        name: title(page, props)?,
        tags: multi_select(page, &props.tags),
    })
}

pub(crate) fn parse_planned_meal(page: &Value, props: &PropertyNames) -> Option<PlannedMeal> {
    Some(PlannedMeal {
        name: title(page, props)?,
        day_ids: relation_ids(page, &props.when),
    })
}

pub(crate) fn parse_recipes(pages: &[Value], props: &PropertyNames) -> Vec<Recipe> {
    let recipes: Vec<Recipe> = pages.iter().filter_map(|p| parse_recipe(p, props)).collect();
    let skipped = pages.len() - recipes.len();
    if skipped > 0 {
        tracing::warn!(skipped, "skipped recipe pages without an id or title");
    }
    tracing::debug!(parsed = recipes.len(), skipped, "parsed recipe pages");
    recipes
}

pub(crate) fn parse_planned_meals(pages: &[Value], props: &PropertyNames) -> Vec<PlannedMeal> {
    let meals: Vec<PlannedMeal> = pages
        .iter()
        .filter_map(|p| parse_planned_meal(p, props))
        .collect();
    let skipped = pages.len() - meals.len();
    if skipped > 0 {
        tracing::warn!(skipped, "skipped planned pages without a title");
    }
    meals
}

#[cfg(test)]
pub(crate) fn page_json(id: &str, name: &str, tags: &[&str], days: &[&str]) -> Value {
    serde_json::json!({
        "object": "page",
        "id": id,
        "properties": {
            "Name": {"id": "title", "type": "title", "title": [{"type": "text", "plain_text": name}]},
            "Tags": {"type": "multi_select", "multi_select": tags.iter().map(|t| serde_json::json!({"name": t})).collect::<Vec<_>>()},
            "When": {"type": "relation", "relation": days.iter().map(|d| serde_json::json!({"id": d})).collect::<Vec<_>>()},
        }
    })
}
