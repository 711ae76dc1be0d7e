//! Date-range calculation for period presets.

use chrono::Days;
use heliodash_domain::error::{HelioDashError, InvalidArgumentError, InvalidRangeError};
use heliodash_domain::production::DateBound;
use heliodash_domain::time::ProductionDate;

/// Day counts offered by the period selector.
pub const PERIOD_PRESETS: [u32; 4] = [7, 30, 90, 365];

/// The charting window: a preset day count or an explicit pair of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// An inclusive window of `n` calendar days ending at the latest
    /// available date.
    Days(u32),
    /// An explicit custom window, inclusive on both ends.
    Custom {
        start: ProductionDate,
        end: ProductionDate,
    },
}

impl Period {
    /// Resolve the period into a concrete inclusive `(start, end)` window.
    ///
    /// # Errors
    ///
    /// Returns [`HelioDashError::InvalidRange`] for a custom window with
    /// `start > end`, and [`HelioDashError::InvalidArgument`] for a
    /// zero-day preset.
    pub fn resolve(
        self,
        bound: DateBound,
    ) -> Result<(ProductionDate, ProductionDate), HelioDashError> {
        match self {
            Self::Days(days) => Ok((compute_start_date(bound, days)?, bound.max)),
            Self::Custom { start, end } => {
                if start > end {
                    return Err(InvalidRangeError { start, end }.into());
                }
                Ok((start, end))
            }
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::Days(30)
    }
}

/// Compute the start date of an inclusive `days`-day window ending at
/// `bound.max`.
///
/// The anchor is the latest *available* date, not today — the dataset may be
/// stale. If the computed start precedes `bound.min` the window silently
/// shrinks to start at `bound.min`; callers are not told that fewer days
/// than requested are covered.
///
/// # Errors
///
/// Returns [`HelioDashError::InvalidArgument`] when `days` is zero. Callers
/// supply positive presets, so this is a fail-fast guard, not a reachable
/// user-facing state.
pub fn compute_start_date(bound: DateBound, days: u32) -> Result<ProductionDate, HelioDashError> {
    if days == 0 {
        return Err(InvalidArgumentError {
            reason: "day count must be positive",
        }
        .into());
    }

    let start = bound
        .max
        .checked_sub_days(Days::new(u64::from(days) - 1))
        .unwrap_or(bound.min);
    Ok(start.max(bound.min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> ProductionDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bound(min: ProductionDate, max: ProductionDate) -> DateBound {
        DateBound::new(min, max).unwrap()
    }

    #[test]
    fn should_compute_inclusive_window_ending_at_bound_max() {
        let b = bound(date(2024, 1, 1), date(2024, 3, 31));
        let start = compute_start_date(b, 30).unwrap();
        assert_eq!(start, date(2024, 3, 2));
    }

    #[test]
    fn should_clamp_start_to_bound_min_when_window_is_too_wide() {
        let b = bound(date(2024, 3, 15), date(2024, 3, 31));
        let start = compute_start_date(b, 30).unwrap();
        assert_eq!(start, date(2024, 3, 15));
    }

    #[test]
    fn should_return_bound_max_for_single_day_window() {
        let b = bound(date(2024, 1, 1), date(2024, 3, 31));
        let start = compute_start_date(b, 1).unwrap();
        assert_eq!(start, date(2024, 3, 31));
    }

    #[test]
    fn should_stay_within_bound_for_every_day_count_up_to_span() {
        let b = bound(date(2024, 1, 1), date(2024, 3, 31));
        for days in 1..=b.span_days() {
            let start = compute_start_date(b, days).unwrap();
            assert!(b.contains(start), "start out of bound for days={days}");
            assert_eq!(
                (b.max - start).num_days(),
                i64::from(days) - 1,
                "window width mismatch for days={days}"
            );
        }
    }

    #[test]
    fn should_fail_fast_on_zero_day_window() {
        let b = bound(date(2024, 1, 1), date(2024, 3, 31));
        let result = compute_start_date(b, 0);
        assert!(matches!(result, Err(HelioDashError::InvalidArgument(_))));
    }

    #[test]
    fn should_resolve_preset_period_against_bound() {
        let b = bound(date(2024, 1, 1), date(2024, 3, 31));
        let (start, end) = Period::Days(7).resolve(b).unwrap();
        assert_eq!(start, date(2024, 3, 25));
        assert_eq!(end, date(2024, 3, 31));
    }

    #[test]
    fn should_pass_custom_period_through_untouched() {
        let b = bound(date(2024, 1, 1), date(2024, 3, 31));
        let period = Period::Custom {
            start: date(2023, 12, 1),
            end: date(2024, 2, 1),
        };
        // Custom ranges bypass the calculator and its clamping entirely.
        let (start, end) = period.resolve(b).unwrap();
        assert_eq!(start, date(2023, 12, 1));
        assert_eq!(end, date(2024, 2, 1));
    }

    #[test]
    fn should_reject_custom_period_with_inverted_dates() {
        let b = bound(date(2024, 1, 1), date(2024, 3, 31));
        let period = Period::Custom {
            start: date(2024, 2, 1),
            end: date(2024, 1, 1),
        };
        assert!(matches!(
            period.resolve(b),
            Err(HelioDashError::InvalidRange(_))
        ));
    }
}
