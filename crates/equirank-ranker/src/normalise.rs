//! Min-max normalisation within the filtered subset.

use equirank_common::config::DegeneratePolicy;

use crate::dataset::{Company, Metric};

/// Min-max normalisation within a given range [min_val, max_val].
/// When the range collapses the policy value is returned instead of NaN.
pub fn minmax_normalise(value: f64, min_val: f64, max_val: f64, policy: DegeneratePolicy) -> f64 {
    if (max_val - min_val).abs() < 1e-10 {
        return policy.value();
    }
    ((value - min_val) / (max_val - min_val)).clamp(0.0, 1.0)
}

/// `(min, max)` of a slice, `None` when empty.
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Normalise one metric across the subset.
/// Returns values in the same order as input.
pub fn normalise_metric(subset: &[&Company], metric: Metric, policy: DegeneratePolicy) -> Vec<f64> {
    let raw: Vec<f64> = subset.iter().map(|c| metric.value(c)).collect();
    let Some((min, max)) = value_range(&raw) else {
        return vec![];
    };
    raw.iter()
        .map(|&v| minmax_normalise(v, min, max, policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_minmax_basic() {
        let p = DegeneratePolicy::Midpoint;
        assert!((minmax_normalise(15.0, 10.0, 20.0, p) - 0.5).abs() < 1e-12);
        assert_eq!(minmax_normalise(10.0, 10.0, 20.0, p), 0.0);
        assert_eq!(minmax_normalise(20.0, 10.0, 20.0, p), 1.0);
    }

    #[test]
    fn test_degenerate_range_uses_policy() {
        assert_eq!(minmax_normalise(7.0, 7.0, 7.0, DegeneratePolicy::Midpoint), 0.5);
        assert_eq!(minmax_normalise(7.0, 7.0, 7.0, DegeneratePolicy::Top), 1.0);
        assert_eq!(minmax_normalise(7.0, 7.0, 7.0, DegeneratePolicy::Bottom), 0.0);
    }

    #[test]
    fn test_metric_extremes_map_to_zero_and_one() {
        let ds = Dataset::reference();
        let subset: Vec<&Company> = ds.companies().iter().collect();
        for metric in Metric::ALL {
            let normed = normalise_metric(&subset, metric, DegeneratePolicy::Midpoint);
            assert_eq!(normed.len(), subset.len());
            assert!(normed.iter().all(|n| (0.0..=1.0).contains(n)));

            let raw: Vec<f64> = subset.iter().map(|c| metric.value(c)).collect();
            let (min, max) = value_range(&raw).unwrap();
            for (r, n) in raw.iter().zip(&normed) {
                if *r == max {
                    assert_eq!(*n, 1.0, "{} max should normalise to 1", metric.label());
                }
                if *r == min {
                    assert_eq!(*n, 0.0, "{} min should normalise to 0", metric.label());
                }
            }
        }
    }

    #[test]
    fn test_single_record_is_not_nan() {
        let ds = Dataset::reference();
        let subset = vec![&ds.companies()[0]];
        let normed = normalise_metric(&subset, Metric::Roe, DegeneratePolicy::Midpoint);
        assert_eq!(normed, vec![0.5]);
    }

    #[test]
    fn test_empty_subset() {
        assert!(normalise_metric(&[], Metric::EsgScore, DegeneratePolicy::Midpoint).is_empty());
        assert_eq!(value_range(&[]), None);
    }
}
