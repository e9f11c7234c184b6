// src/analysis/kpi.rs
use crate::model::Record;

/// Headline figures for a non-empty set of records.
#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub total_sales: i64,
    pub average_sales: f64,
    pub average_profit: f64,
    /// `None` when revenue sums to zero.
    pub net_margin_pct: Option<f64>,
}

/// Returns `None` for an empty view.
pub fn aggregate(view: &[&Record]) -> Option<Kpis> {
    if view.is_empty() {
        return None;
    }

    let count = view.len() as f64;
    let revenue: f64 = view.iter().map(|r| r.revenue).sum();
    let profit: f64 = view.iter().map(|r| r.profit).sum();

    let net_margin_pct = if revenue == 0.0 {
        None
    } else {
        Some(round_to(profit / revenue * 100.0, 2))
    };

    Some(Kpis {
        // Truncates toward zero
        total_sales: revenue as i64,
        average_sales: round_to(revenue / count, 1),
        average_profit: round_to(profit / count, 1),
        net_margin_pct,
    })
}

/// Rounds half to even at `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(revenue: f64, profit: f64) -> Record {
        Record {
            region: "North".to_string(),
            segment: "Consumer".to_string(),
            shipping_method: "Standard".to_string(),
            category: "Chairs".to_string(),
            revenue,
            profit,
        }
    }

    #[test]
    fn test_single_record() {
        let r = record(100.0, 10.0);
        let kpis = aggregate(&[&r]).unwrap();

        assert_eq!(kpis.total_sales, 100);
        assert_eq!(kpis.average_sales, 100.0);
        assert_eq!(kpis.average_profit, 10.0);
        assert_eq!(kpis.net_margin_pct, Some(10.0));
    }

    #[test]
    fn test_total_is_truncated_not_rounded() {
        let a = record(10.75, 0.0);
        let b = record(20.5, 0.0);
        let kpis = aggregate(&[&a, &b]).unwrap();

        assert_eq!(kpis.total_sales, 31);
        assert_eq!(kpis.average_sales, 15.6);
    }

    #[test]
    fn test_rounding_and_signed_profit() {
        let a = record(300.0, 50.0);
        let b = record(100.0, -83.0);
        let c = record(200.0, 12.0);
        let kpis = aggregate(&[&a, &b, &c]).unwrap();

        assert_eq!(kpis.average_sales, 200.0);
        // (50 - 83 + 12) / 3 = -7.0
        assert_eq!(kpis.average_profit, -7.0);
        // -21 / 600 * 100 = -3.5
        assert_eq!(kpis.net_margin_pct, Some(-3.5));
    }

    #[test]
    fn test_mean_ties_round_to_even() {
        let a = record(0.0, 1.0);
        let b = record(0.5, 1.5);
        let kpis = aggregate(&[&a, &b]).unwrap();

        assert_eq!((kpis.average_sales, kpis.average_profit), (0.2, 1.2));
    }

    #[test]
    fn test_margin_rounded_to_two_places() {
        let a = record(3.0, 1.0);
        let kpis = aggregate(&[&a]).unwrap();
        assert_eq!(kpis.net_margin_pct, Some(33.33));
    }

    #[test]
    fn test_zero_revenue_has_no_margin() {
        let a = record(0.0, -5.0);
        let kpis = aggregate(&[&a]).unwrap();

        assert_eq!(kpis.total_sales, 0);
        assert_eq!(kpis.net_margin_pct, None);
    }

    #[test]
    fn test_empty_view() {
        assert_eq!(aggregate(&[]), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.25, 1), 1.2);
        assert_eq!(round_to(1.75, 1), 1.8);
        assert_eq!(round_to(-0.25, 1), -0.2);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(7.0, 0), 7.0);
    }
}
