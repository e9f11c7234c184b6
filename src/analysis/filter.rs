// src/analysis/filter.rs
use std::collections::HashSet;

use crate::model::{Dimension, FilterSelection, Record};

/// Records of `records` accepted by `selection`, in their original order.
pub fn filter<'a>(records: &'a [Record], selection: &FilterSelection) -> Vec<&'a Record> {
    if selection.has_empty_dimension() {
        return Vec::new();
    }
    records.iter().filter(|r| selection.contains(r)).collect()
}

/// Each distinct value of `dimension`, once, in first-appearance order.
pub fn distinct_values(records: &[Record], dimension: Dimension) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.value(dimension))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dataset;

    fn record(region: &str, segment: &str, shipping: &str, revenue: f64) -> Record {
        Record {
            region: region.to_string(),
            segment: segment.to_string(),
            shipping_method: shipping.to_string(),
            category: "Chairs".to_string(),
            revenue,
            profit: 0.0,
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            record("North", "Consumer", "Standard", 100.0),
            record("South", "Corporate", "Express", 200.0),
            record("North", "Corporate", "Standard", 300.0),
            record("East", "Consumer", "Same Day", 400.0),
            record("South", "Consumer", "Standard", 500.0),
        ])
    }

    #[test]
    fn test_full_selection_is_identity() {
        let dataset = dataset();
        let selection = FilterSelection::all(&dataset);

        let view = filter(dataset.records(), &selection);

        assert_eq!(view.len(), dataset.len());
        for (kept, original) in view.iter().zip(dataset.records()) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn test_empty_dimension_matches_nothing() {
        let dataset = dataset();
        for dimension in Dimension::ALL {
            let mut selection = FilterSelection::all(&dataset);
            selection.clear(dimension);
            assert!(filter(dataset.records(), &selection).is_empty());
        }
    }

    #[test]
    fn test_and_across_or_within() {
        let dataset = dataset();
        let mut selection = FilterSelection::all(&dataset);
        selection.clear(Dimension::Region);
        selection.select_all(Dimension::Region, ["North", "South"]);
        selection.clear(Dimension::ShippingMethod);
        selection.set(Dimension::ShippingMethod, "Standard", true);

        let revenues: Vec<f64> = filter(dataset.records(), &selection)
            .iter()
            .map(|r| r.revenue)
            .collect();

        assert_eq!(revenues, vec![100.0, 300.0, 500.0]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let dataset = dataset();
        let mut selection = FilterSelection::all(&dataset);
        selection.set(Dimension::Segment, "Corporate", false);

        let once = filter(dataset.records(), &selection);
        let owned: Vec<Record> = once.iter().map(|r| (*r).clone()).collect();
        let twice = filter(&owned, &selection);

        assert_eq!(twice.len(), once.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(*a, *b);
        }
    }

    #[test]
    fn test_distinct_values_first_appearance_order() {
        let dataset = dataset();
        assert_eq!(
            distinct_values(dataset.records(), Dimension::Region),
            vec!["North", "South", "East"]
        );
        assert_eq!(
            distinct_values(dataset.records(), Dimension::ShippingMethod),
            vec!["Standard", "Express", "Same Day"]
        );
    }
}
