//! Static table between day-of-week pages in the store and day labels

use std::collections::HashMap;

use crate::core::types::{DAYS_PER_WEEK, DayOfWeek};
use crate::error::ConfigError;

/// Bijection between the seven external day-page identifiers and the days of the week
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DayTable {
    ids: [String; DAYS_PER_WEEK],
    by_normalized: HashMap<String, DayOfWeek>,
}

/// The store returns dashed UUIDs while configured ids are often copied
/// from page URLs without dashes.
pub(crate) fn normalize_id(id: &str) -> String {
    id.chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl DayTable {
    /// Build from ids in Sunday..Saturday order
    pub(crate) fn new(ids: [String; DAYS_PER_WEEK]) -> Result<Self, ConfigError> {
        let mut by_normalized = HashMap::with_capacity(DAYS_PER_WEEK);
        for (day, id) in DayOfWeek::ALL.iter().zip(ids.iter()) {
            let key = normalize_id(id.trim());
            if key.is_empty() {
                return Err(ConfigError::MissingDay { day: day.label() });
            }
            if let Some(first) = by_normalized.insert(key, *day) {
                return Err(ConfigError::DuplicateDayId {
                    id: id.clone(),
                    first: first.label(),
                    second: day.label(),
                });
            }
        }
        Ok(Self { ids, by_normalized })
    }

    pub(crate) fn id_for(&self, day: DayOfWeek) -> &str {
        &self.ids[day.index()]
    }

    /// Ids in Sunday..Saturday order
    pub(crate) fn ids(&self) -> &[String; DAYS_PER_WEEK] {
        &self.ids
    }

    pub(crate) fn day_for(&self, id: &str) -> Option<DayOfWeek> {
        self.by_normalized.get(&normalize_id(id)).copied()
    }
}

#[cfg(test)]
pub(crate) fn sample_table() -> DayTable {
    DayTable::new([
        "11111111-0000-0000-0000-000000000000".to_string(),
        "22222222-0000-0000-0000-000000000000".to_string(),
        "33333333-0000-0000-0000-000000000000".to_string(),
        "44444444-0000-0000-0000-000000000000".to_string(),
        "55555555-0000-0000-0000-000000000000".to_string(),
        "66666666-0000-0000-0000-000000000000".to_string(),
        "77777777-0000-0000-0000-000000000000".to_string(),
    ])
    .expect("valid sample table")
}
