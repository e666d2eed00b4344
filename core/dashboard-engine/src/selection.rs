//! FILENAME: core/dashboard-engine/src/selection.rs
//! Filter Selection - The serializable user intent.
//!
//! This module contains the types that DESCRIBE what the operator has picked
//! in the dashboard controls. These structures are designed to be:
//! - Serializable (sent from whatever UI hosts the controls)
//! - Immutable snapshots of user intent
//! - Cheap to copy per interaction (each user gets an independent selection)

use chrono::NaiveDate;
use dataset::{Dataset, Record};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

// ============================================================================
// DATE RANGE
// ============================================================================

/// Inclusive order-date range.
///
/// `start > end` is not validated; such a range simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

// ============================================================================
// GEOGRAPHIC SELECTION
// ============================================================================

/// Multi-select state of the Region/State/City controls.
/// An empty set is a wildcard: no constraint on that field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoSelection {
    pub regions: FxHashSet<String>,
    pub states: FxHashSet<String>,
    pub cities: FxHashSet<String>,
}

impl GeoSelection {
    pub fn is_wildcard(&self) -> bool {
        self.regions.is_empty() && self.states.is_empty() && self.cities.is_empty()
    }

    /// Conjunction over all non-empty sets. The three fields are tested
    /// independently; an impossible combination (a city outside every
    /// selected state) matches no rows rather than erroring.
    pub fn matches(&self, record: &Record) -> bool {
        set_matches(&self.regions, &record.region)
            && set_matches(&self.states, &record.state)
            && set_matches(&self.cities, &record.city)
    }
}

fn set_matches(selected: &FxHashSet<String>, value: &str) -> bool {
    selected.is_empty() || selected.contains(value)
}

// ============================================================================
// FILTER SELECTION
// ============================================================================

/// Everything the operator has picked: the date range plus the geographic
/// multi-selects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub dates: DateRange,
    pub geo: GeoSelection,
}

impl FilterSelection {
    pub fn new(dates: DateRange) -> Self {
        FilterSelection {
            dates,
            geo: GeoSelection::default(),
        }
    }

    /// The selection the dashboard opens with: the dataset's full date span
    /// and no geographic constraint. `None` for an empty dataset.
    pub fn full_span(dataset: &Dataset) -> Option<Self> {
        let (start, end) = dataset.date_span()?;
        Some(FilterSelection::new(DateRange::new(start, end)))
    }
}
