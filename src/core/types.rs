//! Core data types for meal planning
//!
//! These types are independent of the Notion wire format; the store layer
//! converts pages into them.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Serialize;

/// Number of days a weekly plan covers, and so the number of recipes per slot.
pub(crate) const DAYS_PER_WEEK: usize = 7;

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub(crate) enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// Slots in planning order. The flattened plan is laid out slot-major in this order.
    pub(crate) const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub(crate) fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Day of the week, Sunday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub(crate) enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub(crate) const ALL: [DayOfWeek; DAYS_PER_WEEK] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }

    /// Position within a plan column (Sunday = 0)
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recipe page in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Recipe {
    /// Opaque page identifier used for writes
    pub(crate) page_id: String,
    /// Display name, unique within the database
    pub(crate) name: String,
    pub(crate) tags: Vec<String>,
}

impl Recipe {
    pub(crate) fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A recipe that is currently related to one or more day pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlannedMeal {
    pub(crate) name: String,
    pub(crate) day_ids: Vec<String>,
}

/// Names already chosen during one planning run, across all slots
#[derive(Debug, Default, Clone)]
pub(crate) struct ChosenSet {
    names: HashSet<String>,
}

impl ChosenSet {
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns false if the name was already present
    pub(crate) fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.to_string())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Seven recipe names per slot, position 0 = Sunday
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct WeeklyPlan {
    slots: BTreeMap<MealSlot, Vec<String>>,
}

impl WeeklyPlan {
    pub(crate) fn insert(&mut self, slot: MealSlot, names: Vec<String>) {
        self.slots.insert(slot, names);
    }

    pub(crate) fn slot(&self, slot: MealSlot) -> &[String] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Meal for a given slot and day, if planned
    pub(crate) fn meal(&self, slot: MealSlot, day: DayOfWeek) -> Option<&str> {
        self.slot(slot).get(day.index()).map(String::as_str)
    }

    /// All names, slot-major (Breakfast Sun..Sat, Lunch Sun..Sat, Dinner Sun..Sat)
    pub(crate) fn flatten(&self) -> Vec<&str> {
        MealSlot::ALL
            .iter()
            .flat_map(|slot| self.slot(*slot).iter().map(String::as_str))
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn total(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }
}

/// Write instruction for one recipe page
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RelationUpdate {
    pub(crate) page_id: String,
    /// `None` clears every day relation on the page
    pub(crate) day_id: Option<String>,
}
