use std::time::Duration;

use serde_json::{Value, json};

use crate::core::{DayTable, PlannedMeal, Recipe};
use crate::error::StoreError;

use super::page::{PropertyNames, QueryResponse, parse_planned_meals, parse_recipes};
use super::snapshot::save_snapshot;
use super::RecipeStore;

const NOTION_API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-02-22";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Page size for the planned-meal query; a full plan is 21 pages
const PLANNED_PAGE_SIZE: u32 = 25;

/// Recipe database hosted in Notion
pub(crate) struct NotionStore {
    agent: ureq::Agent,
    auth: String,
    database_id: String,
    props: PropertyNames,
}

impl NotionStore {
    pub(crate) fn new(token: &str, database_id: &str, props: PropertyNames) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            auth: format!("Bearer {token}"),
            database_id: database_id.to_string(),
            props,
        }
    }

    fn query_url(&self) -> String {
        format!("{NOTION_API_BASE}/databases/{}/query", self.database_id)
    }

    /// Run a database query, following `next_cursor` until every page is read
    fn query_pages(&self, mut payload: Value) -> Result<Vec<Value>, StoreError> {
        let url = self.query_url();
        let mut pages = Vec::new();

        loop {
            let response = self
                .agent
                .post(&url)
                .header("Authorization", self.auth.as_str())
                .header("Notion-Version", NOTION_VERSION)
                .header("Accept", "application/json")
                .send_json(&payload)
                .map_err(|source| StoreError::Http {
                    url: url.clone(),
                    source,
                })?;
            let text = read_success_body(&url, response)?;
            let mut batch: QueryResponse = serde_json::from_str(&text)?;
            pages.append(&mut batch.results);

            if !next_payload(&mut payload, &batch) {
                break;
            }
        }

        tracing::debug!(pages = pages.len(), "queried database");
        Ok(pages)
    }
}

/// Point `payload` at the batch after `batch`; false once the results run out
fn next_payload(payload: &mut Value, batch: &QueryResponse) -> bool {
    let (true, Some(cursor)) = (batch.has_more, batch.next_cursor.as_deref()) else {
        return false;
    };
    match payload.as_object_mut() {
        Some(obj) => {
            obj.insert("start_cursor".to_string(), Value::String(cursor.to_string()));
            true
        }
        None => false,
    }
}

/// Body of a 2xx response, or a `Status` error carrying Notion's message
fn read_success_body(
    url: &str,
    response: ureq::http::Response<ureq::Body>,
) -> Result<String, StoreError> {
    let status = response.status().as_u16();
    let mut body = response.into_body();
    let text = body.read_to_string().map_err(|source| StoreError::Http {
        url: url.to_string(),
        source,
    })?;
    if !(200..300).contains(&status) {
        return Err(StoreError::Status {
            status,
            message: error_message(&text),
        });
    }
    Ok(text)
}

/// Notion errors look like `{"object": "error", "code": ..., "message": ...}`
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect())
}

pub(crate) fn planned_meals_filter(days: &DayTable, when: &str) -> Value {
    let any_day: Vec<Value> = days
        .ids()
        .iter()
        .map(|id| json!({"property": when, "relation": {"contains": id}}))
        .collect();
    json!({
        "page_size": PLANNED_PAGE_SIZE,
        "filter": {"or": any_day},
    })
}

pub(crate) fn relation_body(when: &str, day_id: Option<&str>) -> Value {
    let relation: Vec<Value> = day_id.map(|id| json!({"id": id})).into_iter().collect();
    json!({"properties": {when: {"relation": relation}}})
}

impl RecipeStore for NotionStore {
    fn name(&self) -> &'static str {
        "Notion"
    }

    fn query_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        tracing::info!("querying recipes");
        let pages = self.query_pages(json!({}))?;
        save_snapshot(&pages);
        Ok(parse_recipes(&pages, &self.props))
    }

    fn query_planned_meals(&self, days: &DayTable) -> Result<Vec<PlannedMeal>, StoreError> {
        tracing::info!("querying planned meals");
        let pages = self.query_pages(planned_meals_filter(days, &self.props.when))?;
        Ok(parse_planned_meals(&pages, &self.props))
    }

    fn update_recipe_day(&self, page_id: &str, day_id: Option<&str>) -> Result<(), StoreError> {
        let url = format!("{NOTION_API_BASE}/pages/{page_id}");
        let response = self
            .agent
            .patch(&url)
            .header("Authorization", self.auth.as_str())
            .header("Notion-Version", NOTION_VERSION)
            .header("Accept", "application/json")
            .send_json(relation_body(&self.props.when, day_id))
            .map_err(|source| StoreError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        if status == 200 {
            return Ok(());
        }
        let message = response
            .into_body()
            .read_to_string()
            .map(|text| error_message(&text))
            .unwrap_or_default();
        Err(StoreError::Status { status, message })
    }
}
