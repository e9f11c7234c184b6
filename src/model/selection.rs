// src/model/selection.rs
use std::collections::BTreeSet;

use super::record::{Dataset, Dimension, Record};

/// Allowed values per filter dimension. A record passes when every one of its
/// three dimension values is a member of the matching set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub regions: BTreeSet<String>,
    pub segments: BTreeSet<String>,
    pub shipping_methods: BTreeSet<String>,
}

impl FilterSelection {
    /// Every distinct value of every dimension selected.
    pub fn all(dataset: &Dataset) -> Self {
        let mut selection = Self::default();
        for record in dataset.records() {
            for dimension in Dimension::ALL {
                selection
                    .values_mut(dimension)
                    .insert(record.value(dimension).to_string());
            }
        }
        selection
    }

    pub fn values(&self, dimension: Dimension) -> &BTreeSet<String> {
        match dimension {
            Dimension::Region => &self.regions,
            Dimension::Segment => &self.segments,
            Dimension::ShippingMethod => &self.shipping_methods,
        }
    }

    fn values_mut(&mut self, dimension: Dimension) -> &mut BTreeSet<String> {
        match dimension {
            Dimension::Region => &mut self.regions,
            Dimension::Segment => &mut self.segments,
            Dimension::ShippingMethod => &mut self.shipping_methods,
        }
    }

    pub fn is_selected(&self, dimension: Dimension, value: &str) -> bool {
        self.values(dimension).contains(value)
    }

    pub fn set(&mut self, dimension: Dimension, value: &str, selected: bool) {
        let values = self.values_mut(dimension);
        if selected {
            values.insert(value.to_string());
        } else {
            values.remove(value);
        }
    }

    pub fn select_all<I, S>(&mut self, dimension: Dimension, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values_mut(dimension)
            .extend(options.into_iter().map(Into::into));
    }

    pub fn clear(&mut self, dimension: Dimension) {
        self.values_mut(dimension).clear();
    }

    pub fn contains(&self, record: &Record) -> bool {
        Dimension::ALL
            .iter()
            .all(|&dimension| self.is_selected(dimension, record.value(dimension)))
    }

    /// True when some dimension has nothing selected, so no record can match.
    pub fn has_empty_dimension(&self) -> bool {
        Dimension::ALL
            .iter()
            .any(|&dimension| self.values(dimension).is_empty())
    }
}
