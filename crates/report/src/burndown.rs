//! Day-by-day burndown series.

use chrono::{Duration, NaiveDate};

use crate::aggregate::{Aggregates, ClassBucket};
use crate::sprint::SprintRange;

/// One day's snapshot of remaining effort versus the ideal linear burn.
#[derive(Debug, Clone, PartialEq)]
pub struct BurndownRow {
    /// Calendar date.
    pub date: NaiveDate,
    /// Estimated points still open; `None` for dates after "today".
    pub remaining_estimated: Option<f64>,
    /// Actual points still open; `None` for dates after "today".
    pub remaining_actual: Option<f64>,
    /// Remaining effort under a constant daily burn rate. Always present,
    /// so the ideal line spans the whole sprint.
    pub ideal: f64,
    /// Remaining estimated points per bucket, aligned with the bucket
    /// order passed to [`build_burndown`]; `None` past "today".
    pub remaining_by_class: Vec<Option<f64>>,
}

/// Build one row per calendar day from sprint start to end inclusive.
///
/// Completions dated on a given day are subtracted before that day's row
/// is emitted, so work finished on the start date already shows on the
/// first row. Rows dated after `today` carry no remaining values yet.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build_burndown(
    range: &SprintRange,
    aggregates: &Aggregates,
    buckets: &[ClassBucket],
    today: NaiveDate,
) -> Vec<BurndownRow> {
    let days = range.days();
    let avg_points_per_day = aggregates.total_estimated / days as f64;

    let mut remaining_estimated = aggregates.total_estimated;
    let mut remaining_actual = aggregates.total_actual;
    let mut remaining_by_class: Vec<f64> = buckets
        .iter()
        .map(|bucket| {
            aggregates
                .estimated_by_class
                .get(bucket)
                .copied()
                .unwrap_or(0.0)
        })
        .collect();

    let mut rows = Vec::new();
    let mut date = range.start();
    let mut days_remaining = days;
    while date <= range.end() {
        remaining_estimated -= aggregates
            .completed_estimated_by_date
            .get(&date)
            .copied()
            .unwrap_or(0.0);
        remaining_actual -= aggregates
            .completed_actual_by_date
            .get(&date)
            .copied()
            .unwrap_or(0.0);
        if let Some(by_class) = aggregates.completed_by_date_class.get(&date) {
            for (slot, bucket) in remaining_by_class.iter_mut().zip(buckets) {
                *slot -= by_class.get(bucket).copied().unwrap_or(0.0);
            }
        }

        // The first row pins the ideal line to the exact total; the
        // linear formula only takes over from the second day.
        let ideal = if days_remaining == days {
            aggregates.total_estimated
        } else {
            days_remaining as f64 * avg_points_per_day
        };

        let visible = date <= today;
        rows.push(BurndownRow {
            date,
            remaining_estimated: visible.then_some(remaining_estimated),
            remaining_actual: visible.then_some(remaining_actual),
            ideal,
            remaining_by_class: remaining_by_class
                .iter()
                .map(|points| visible.then_some(*points))
                .collect(),
        });

        days_remaining -= 1;
        date = date + Duration::days(1);
    }

    rows
}
