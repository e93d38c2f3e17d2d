use crate::aggregate::AggregatedStock;
use crate::level::AlertLevel;

/// Warning band multiplier: stock above the threshold but at or below
/// `threshold * WARNING_MULTIPLIER` warns. Fixed policy, not per-material.
pub const WARNING_MULTIPLIER: f64 = 1.5;

/// Map an aggregated stock reading to its alert level.
///
/// Rules apply in order, first match wins; bounds are inclusive, so landing
/// exactly on the threshold is `Critical` and exactly on the warning band's
/// upper edge is `Warning`. An infinite threshold (no stock records) is
/// `Unknown`, never `Critical`.
pub fn classify(aggregated: AggregatedStock) -> AlertLevel {
    if !aggregated.has_threshold() {
        return AlertLevel::Unknown;
    }
    if aggregated.total_quantity <= aggregated.min_threshold {
        return AlertLevel::Critical;
    }
    if aggregated.total_quantity <= aggregated.min_threshold * WARNING_MULTIPLIER {
        return AlertLevel::Warning;
    }
    AlertLevel::Normal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(total_quantity: f64, min_threshold: f64) -> AggregatedStock {
        AggregatedStock {
            total_quantity,
            min_threshold,
        }
    }

    #[test]
    fn at_threshold_is_critical() {
        assert_eq!(classify(reading(100.0, 100.0)), AlertLevel::Critical);
    }

    #[test]
    fn below_threshold_is_critical() {
        assert_eq!(classify(reading(5.0, 10.0)), AlertLevel::Critical);
    }

    #[test]
    fn at_warning_band_edge_is_warning() {
        assert_eq!(classify(reading(150.0, 100.0)), AlertLevel::Warning);
    }

    #[test]
    fn just_above_warning_band_is_normal() {
        assert_eq!(classify(reading(150.01, 100.0)), AlertLevel::Normal);
    }

    #[test]
    fn undefined_threshold_is_unknown_not_critical() {
        // 0 <= inf would naively read as critical; the empty set must not.
        assert_eq!(classify(reading(0.0, f64::INFINITY)), AlertLevel::Unknown);
    }

    #[test]
    fn aggregated_scenario_is_normal() {
        // Two lots {30, th 50} and {40, th 20}: 70 > 20 * 1.5 = 30.
        assert_eq!(classify(reading(70.0, 20.0)), AlertLevel::Normal);
    }

    #[test]
    fn zero_threshold_requires_zero_stock_for_critical() {
        assert_eq!(classify(reading(0.0, 0.0)), AlertLevel::Critical);
        // With threshold 0 the warning band is empty; anything on hand is fine.
        assert_eq!(classify(reading(0.1, 0.0)), AlertLevel::Normal);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: classification is total over finite non-negative
            /// inputs and never yields `Unknown` for them.
            #[test]
            fn classification_is_total(
                total in 0.0f64..1_000_000.0,
                threshold in 0.0f64..1_000_000.0,
            ) {
                let level = classify(reading(total, threshold));
                prop_assert!(matches!(
                    level,
                    AlertLevel::Critical | AlertLevel::Warning | AlertLevel::Normal
                ));
            }

            /// Property: classification is a pure function of its input.
            #[test]
            fn classification_is_idempotent(
                total in 0.0f64..1_000_000.0,
                threshold in 0.0f64..1_000_000.0,
            ) {
                let agg = reading(total, threshold);
                prop_assert_eq!(classify(agg), classify(agg));
            }

            /// Property: the three bands partition correctly around the
            /// threshold and the warning edge.
            #[test]
            fn bands_follow_the_threshold(
                total in 0.0f64..1_000_000.0,
                threshold in 0.0f64..1_000_000.0,
            ) {
                let level = classify(reading(total, threshold));
                if total <= threshold {
                    prop_assert_eq!(level, AlertLevel::Critical);
                } else if total <= threshold * WARNING_MULTIPLIER {
                    prop_assert_eq!(level, AlertLevel::Warning);
                } else {
                    prop_assert_eq!(level, AlertLevel::Normal);
                }
            }
        }
    }
}
