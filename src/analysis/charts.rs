// src/analysis/charts.rs
use std::collections::BTreeMap;

use crate::model::Record;

/// A labelled bar: group name and summed revenue.
pub type Series = Vec<(String, f64)>;

/// Revenue per region, regions in lexical order.
pub fn by_region(view: &[&Record]) -> Series {
    sum_revenue_by(view, |r| &r.region)
}

/// Revenue per product category, ascending by revenue.
pub fn by_category(view: &[&Record]) -> Series {
    let mut series = sum_revenue_by(view, |r| &r.category);
    // Stable sort keeps lexical order among equal totals
    series.sort_by(|a, b| a.1.total_cmp(&b.1));
    series
}

fn sum_revenue_by<F>(view: &[&Record], key: F) -> Series
where
    F: Fn(&Record) -> &String,
{
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for record in view {
        *groups.entry(key(*record).as_str()).or_insert(0.0) += record.revenue;
    }
    groups
        .into_iter()
        .map(|(name, total)| (name.to_string(), total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, category: &str, revenue: f64) -> Record {
        Record {
            region: region.to_string(),
            segment: "Consumer".to_string(),
            shipping_method: "Standard".to_string(),
            category: category.to_string(),
            revenue,
            profit: 0.0,
        }
    }

    fn records() -> Vec<Record> {
        vec![
            record("South", "Technology", 500.0),
            record("North", "Furniture", 300.0),
            record("South", "Office Supplies", 50.0),
            record("East", "Furniture", 100.0),
            record("North", "Office Supplies", 25.0),
        ]
    }

    #[test]
    fn test_by_region_sums_in_lexical_order() {
        let records = records();
        let view: Vec<&Record> = records.iter().collect();

        assert_eq!(
            by_region(&view),
            vec![
                ("East".to_string(), 100.0),
                ("North".to_string(), 325.0),
                ("South".to_string(), 550.0),
            ]
        );
    }

    #[test]
    fn test_by_category_ascending() {
        let records = records();
        let view: Vec<&Record> = records.iter().collect();

        let series = by_category(&view);

        assert_eq!(
            series,
            vec![
                ("Office Supplies".to_string(), 75.0),
                ("Furniture".to_string(), 400.0),
                ("Technology".to_string(), 500.0),
            ]
        );
        assert!(series.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn test_by_category_ties_keep_name_order() {
        let records = vec![record("North", "Tables", 10.0), record("North", "Chairs", 10.0)];
        let view: Vec<&Record> = records.iter().collect();

        let names: Vec<String> = by_category(&view).into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Chairs", "Tables"]);
    }

    #[test]
    fn test_empty_view_has_no_bars() {
        assert!(by_region(&[]).is_empty());
        assert!(by_category(&[]).is_empty());
    }
}
