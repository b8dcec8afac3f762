//! Local copy of the last recipe query
//!
//! Written after every successful online query so the planner can run
//! without network access. The snapshot is never written back to Notion.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::core::{DayTable, PlannedMeal, Recipe};
use crate::error::StoreError;

use super::page::{PropertyNames, parse_planned_meals, parse_recipes};
use super::RecipeStore;

pub(crate) fn get_snapshot_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".cache").join("mealbot").join("recipes.json"))
}

pub(super) fn save_snapshot(pages: &[Value]) {
    let Some(path) = get_snapshot_path() else {
        return;
    };
    match write_snapshot(&path, pages) {
        Ok(()) => tracing::debug!(path = %path.display(), pages = pages.len(), "saved recipe snapshot"),
        Err(e) => tracing::warn!(error = %e, "failed to save recipe snapshot"),
    }
}

fn write_snapshot(path: &Path, pages: &[Value]) -> Result<(), StoreError> {
    let io_error = |source| StoreError::SnapshotIo {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let file = File::create(path).map_err(io_error)?;
    serde_json::to_writer(file, pages)?;
    Ok(())
}

fn load_snapshot() -> Result<Vec<Value>, StoreError> {
    let path = get_snapshot_path().ok_or_else(|| StoreError::SnapshotMissing {
        path: "~/.cache/mealbot/recipes.json".to_string(),
    })?;
    let display = path.display().to_string();
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StoreError::SnapshotMissing { path: display });
        }
        Err(source) => {
            return Err(StoreError::SnapshotIo {
                path: display,
                source,
            });
        }
    };
    Ok(serde_json::from_reader(file)?)
}

/// Read-only store backed by the snapshot file
pub(crate) struct OfflineStore {
    pages: Vec<Value>,
    props: PropertyNames,
}

impl OfflineStore {
    pub(crate) fn load(props: PropertyNames) -> Result<Self, StoreError> {
        let pages = load_snapshot()?;
        tracing::info!(pages = pages.len(), "using offline recipe snapshot");
        Ok(Self::from_pages(pages, props))
    }

    pub(crate) fn from_pages(pages: Vec<Value>, props: PropertyNames) -> Self {
        Self { pages, props }
    }
}

impl RecipeStore for OfflineStore {
    fn name(&self) -> &'static str {
        "offline snapshot"
    }

    fn is_read_only(&self) -> bool {
        true
    }

    fn query_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(parse_recipes(&self.pages, &self.props))
    }

    /// Same selection the online filter makes: pages related to any known day
    fn query_planned_meals(&self, days: &DayTable) -> Result<Vec<PlannedMeal>, StoreError> {
        let mut meals = parse_planned_meals(&self.pages, &self.props);
        meals.retain(|m| m.day_ids.iter().any(|id| days.day_for(id).is_some()));
        Ok(meals)
    }

    fn update_recipe_day(&self, _page_id: &str, _day_id: Option<&str>) -> Result<(), StoreError> {
        Err(StoreError::ReadOnly(self.name()))
    }
}
