//! Aggregation of normalized tasks.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::normalize::TaskRow;
use crate::tags::TagClassTable;

/// Bucket key for per-class breakdowns. `None` is the untagged bucket.
pub type ClassBucket = Option<String>;

/// Accumulated point totals for one run.
///
/// Built by a single left-fold over the normalized tasks. No task's
/// contribution depends on another's, so partial aggregates can be built
/// independently and combined with [`Aggregates::merge`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    /// Total estimated points across all tasks.
    pub total_estimated: f64,
    /// Total actual points across all tasks.
    pub total_actual: f64,
    /// Estimated points on completed tasks.
    pub completed_estimated: f64,
    /// Actual points on completed tasks.
    pub completed_actual: f64,
    /// Estimated points per tag class.
    pub estimated_by_class: HashMap<ClassBucket, f64>,
    /// Actual points per tag class.
    pub actual_by_class: HashMap<ClassBucket, f64>,
    /// Estimated points completed per calendar date.
    pub completed_estimated_by_date: BTreeMap<NaiveDate, f64>,
    /// Actual points completed per calendar date.
    pub completed_actual_by_date: BTreeMap<NaiveDate, f64>,
    /// Estimated points completed per calendar date, per tag class.
    pub completed_by_date_class: BTreeMap<NaiveDate, HashMap<ClassBucket, f64>>,
}

impl Aggregates {
    /// Record one task. Order does not matter.
    pub fn record(&mut self, row: &TaskRow, class: Option<&str>) {
        let bucket: ClassBucket = class.map(str::to_owned);

        self.total_estimated += row.estimated;
        self.total_actual += row.actual;
        *self.estimated_by_class.entry(bucket.clone()).or_default() += row.estimated;
        *self.actual_by_class.entry(bucket.clone()).or_default() += row.actual;

        if let Some(completed_on) = row.completed_on {
            self.completed_estimated += row.estimated;
            self.completed_actual += row.actual;
            *self
                .completed_estimated_by_date
                .entry(completed_on)
                .or_default() += row.estimated;
            *self
                .completed_actual_by_date
                .entry(completed_on)
                .or_default() += row.actual;
            *self
                .completed_by_date_class
                .entry(completed_on)
                .or_default()
                .entry(bucket)
                .or_default() += row.estimated;
        }
    }

    /// Fold classified rows into a fresh aggregate.
    #[must_use]
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a TaskRow, Option<&'a str>)>,
    {
        let mut aggregates = Self::default();
        for (row, class) in rows {
            aggregates.record(row, class);
        }
        aggregates
    }

    /// Combine two partial aggregates.
    ///
    /// Associative and commutative, so partials built over disjoint task
    /// subsets merge into the same result as a single sequential fold.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.total_estimated += other.total_estimated;
        self.total_actual += other.total_actual;
        self.completed_estimated += other.completed_estimated;
        self.completed_actual += other.completed_actual;

        for (bucket, points) in other.estimated_by_class {
            *self.estimated_by_class.entry(bucket).or_default() += points;
        }
        for (bucket, points) in other.actual_by_class {
            *self.actual_by_class.entry(bucket).or_default() += points;
        }
        for (date, points) in other.completed_estimated_by_date {
            *self.completed_estimated_by_date.entry(date).or_default() += points;
        }
        for (date, points) in other.completed_actual_by_date {
            *self.completed_actual_by_date.entry(date).or_default() += points;
        }
        for (date, by_class) in other.completed_by_date_class {
            let entry = self.completed_by_date_class.entry(date).or_default();
            for (bucket, points) in by_class {
                *entry.entry(bucket).or_default() += points;
            }
        }

        self
    }

    /// Buckets that occur in this aggregate, in table order, untagged
    /// last. This fixes the column order of the per-class report output.
    #[must_use]
    pub fn buckets(&self, table: &TagClassTable) -> Vec<ClassBucket> {
        let mut buckets = Vec::new();
        for class in table.classes() {
            let key = Some(class.clone());
            if self.estimated_by_class.contains_key(&key) {
                buckets.push(key);
            }
        }
        if self.estimated_by_class.contains_key(&None) {
            buckets.push(None);
        }
        buckets
    }
}
