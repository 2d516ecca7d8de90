//! Run summary statistics.

use std::fmt;

use crate::aggregate::{Aggregates, ClassBucket};
use crate::error::ReportError;
use crate::sprint::SprintRange;
use crate::table::bucket_label;

/// Per-class breakdown line.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassTotals {
    /// Bucket label.
    pub label: String,
    /// Estimated points in this bucket.
    pub estimated: f64,
    /// Share of total estimated points, in percent.
    pub estimated_pct: f64,
    /// Actual points in this bucket.
    pub actual: f64,
    /// Share of total actual points, in percent.
    pub actual_pct: f64,
}

/// Sprint totals and completion statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Sprint range the report covers.
    pub range: SprintRange,
    /// Total estimated points.
    pub total_estimated: f64,
    /// Total actual points.
    pub total_actual: f64,
    /// Estimated points on completed tasks.
    pub completed_estimated: f64,
    /// Actual points on completed tasks.
    pub completed_actual: f64,
    /// Completed share of total estimated points, in percent.
    pub completed_pct: f64,
    /// Per-class breakdown, in bucket order.
    pub by_class: Vec<ClassTotals>,
}

impl Summary {
    /// Compute summary statistics.
    ///
    /// # Errors
    /// `ZeroTotalEstimate` when total estimated points are zero, since
    /// completion percentages would be undefined.
    pub fn compute(
        aggregates: &Aggregates,
        range: &SprintRange,
        buckets: &[ClassBucket],
    ) -> Result<Self, ReportError> {
        if aggregates.total_estimated == 0.0 {
            return Err(ReportError::ZeroTotalEstimate);
        }

        let completed_pct =
            round2(aggregates.completed_estimated / aggregates.total_estimated * 100.0);

        let by_class = buckets
            .iter()
            .map(|bucket| {
                let estimated = aggregates
                    .estimated_by_class
                    .get(bucket)
                    .copied()
                    .unwrap_or(0.0);
                let actual = aggregates
                    .actual_by_class
                    .get(bucket)
                    .copied()
                    .unwrap_or(0.0);
                ClassTotals {
                    label: bucket_label(bucket),
                    estimated,
                    estimated_pct: round2(estimated / aggregates.total_estimated * 100.0),
                    actual,
                    // No completions and no annotated actuals is a valid
                    // state; report 0% instead of dividing by zero.
                    actual_pct: if aggregates.total_actual > 0.0 {
                        round2(actual / aggregates.total_actual * 100.0)
                    } else {
                        0.0
                    },
                }
            })
            .collect();

        Ok(Self {
            range: *range,
            total_estimated: aggregates.total_estimated,
            total_actual: aggregates.total_actual,
            completed_estimated: aggregates.completed_estimated,
            completed_actual: aggregates.completed_actual,
            completed_pct,
            by_class,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Sprint from {} to {} ({} days)",
            self.range.start(),
            self.range.end(),
            self.range.days()
        )?;
        writeln!(f, "Estimated: {}", self.total_estimated)?;
        writeln!(f, "Actual: {}", self.total_actual)?;
        writeln!(
            f,
            "Completed [Estimated]: {} ({}%)",
            self.completed_estimated, self.completed_pct
        )?;
        writeln!(f, "Completed [Actual]: {}", self.completed_actual)?;
        writeln!(f, "Tags:")?;
        for class in &self.by_class {
            writeln!(
                f,
                "  {}: estimated {} ({}%), actual {} ({}%)",
                class.label, class.estimated, class.estimated_pct, class.actual, class.actual_pct
            )?;
        }
        Ok(())
    }
}

/// Round to two decimal places for display.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
