//! FILENAME: core/dataset/src/dataset.rs
//! PURPOSE: Immutable container for the loaded rows.
//! CONTEXT: The dataset is loaded once and never mutated; filtering always
//! produces new sequences of borrowed rows. The distinct-value helpers feed
//! the filter widgets, which narrow their option lists as outer selections
//! are made (states within the picked regions, cities within both).

use crate::record::Record;
use chrono::NaiveDate;
use std::collections::HashSet;

/// An immutable, ordered collection of sales records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest order date, or `None` for an empty dataset.
    /// Used as the default bounds of the date-range pickers.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.order_date;
        let span = self
            .records
            .iter()
            .fold((first, first), |(min, max), record| {
                (min.min(record.order_date), max.max(record.order_date))
            });
        Some(span)
    }

    /// Distinct regions, in first-appearance order.
    pub fn regions(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.region.as_str()))
    }

    /// Distinct states among rows whose region is in `regions`.
    /// An empty `regions` slice is a wildcard.
    pub fn states_in(&self, regions: &[String]) -> Vec<String> {
        distinct(
            self.records
                .iter()
                .filter(|r| slice_matches(regions, &r.region))
                .map(|r| r.state.as_str()),
        )
    }

    /// Distinct cities among rows matching both (wildcardable) sets.
    pub fn cities_in(&self, regions: &[String], states: &[String]) -> Vec<String> {
        distinct(
            self.records
                .iter()
                .filter(|r| slice_matches(regions, &r.region) && slice_matches(states, &r.state))
                .map(|r| r.city.as_str()),
        )
    }
}

fn slice_matches(selected: &[String], value: &str) -> bool {
    selected.is_empty() || selected.iter().any(|s| s == value)
}

/// Deduplicates while preserving first-appearance order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, region: &str, state: &str, city: &str) -> Record {
        Record {
            order_date: date.parse().unwrap(),
            region: region.to_string(),
            state: state.to_string(),
            city: city.to_string(),
            category: "Technology".to_string(),
            sub_category: "Phones".to_string(),
            segment: "Consumer".to_string(),
            sales: 100.0,
            profit: 10.0,
            quantity: 1,
        }
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            record("2023-03-05", "East", "New York", "New York City"),
            record("2023-01-15", "East", "New York", "Albany"),
            record("2023-02-10", "West", "California", "Los Angeles"),
            record("2023-04-01", "East", "Ohio", "Columbus"),
        ])
    }

    #[test]
    fn date_span_covers_min_and_max() {
        let data = sample();
        let (min, max) = data.date_span().unwrap();
        assert_eq!(min, "2023-01-15".parse::<NaiveDate>().unwrap());
        assert_eq!(max, "2023-04-01".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn date_span_of_empty_dataset_is_none() {
        assert!(Dataset::default().date_span().is_none());
    }

    #[test]
    fn regions_keep_first_appearance_order() {
        assert_eq!(sample().regions(), vec!["East", "West"]);
    }

    #[test]
    fn states_narrow_to_selected_regions() {
        let data = sample();
        assert_eq!(
            data.states_in(&["East".to_string()]),
            vec!["New York", "Ohio"]
        );
        // Wildcard: every state.
        assert_eq!(data.states_in(&[]), vec!["New York", "California", "Ohio"]);
    }

    #[test]
    fn cities_narrow_to_both_selections() {
        let data = sample();
        let cities = data.cities_in(&["East".to_string()], &["New York".to_string()]);
        assert_eq!(cities, vec!["New York City", "Albany"]);
    }
}
