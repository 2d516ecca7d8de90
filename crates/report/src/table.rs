//! CSV report tables.

use std::path::Path;

use tracing::debug;

use crate::aggregate::ClassBucket;
use crate::burndown::BurndownRow;
use crate::error::ReportError;
use crate::normalize::TaskRow;
use crate::sprint::parse_date;

/// Task-list column headers.
const TASK_LIST_HEADER: [&str; 7] = [
    "assignee",
    "task",
    "estimated",
    "actual",
    "created at",
    "due on",
    "completed at",
];

/// Column label for a bucket. The untagged bucket sorts last and is
/// labelled explicitly rather than left blank.
#[must_use]
pub fn bucket_label(bucket: &ClassBucket) -> String {
    bucket
        .clone()
        .unwrap_or_else(|| "untagged".to_string())
}

/// Write the task-list table.
pub fn write_task_list(path: impl AsRef<Path>, rows: &[TaskRow]) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(TASK_LIST_HEADER)?;
    for row in rows {
        writer.write_record([
            row.assignee.clone().unwrap_or_default(),
            row.title.clone(),
            format_points(row.estimated),
            format_points(row.actual),
            row.created_on.to_string(),
            row.due_on.map(|d| d.to_string()).unwrap_or_default(),
            row.completed_on.map(|d| d.to_string()).unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    debug!(path = %path.as_ref().display(), rows = rows.len(), "Wrote task list");
    Ok(())
}

/// Read a task-list table back into rows.
///
/// Backs the round-trip guarantee: a written table reloads to the same
/// rows (titles were already sanitized at write time).
pub fn read_task_list(path: impl AsRef<Path>) -> Result<Vec<TaskRow>, ReportError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(TaskRow {
            assignee: optional(record.get(0)).map(str::to_owned),
            title: record.get(1).unwrap_or_default().to_string(),
            estimated: parse_points(record.get(2).unwrap_or_default())?,
            actual: parse_points(record.get(3).unwrap_or_default())?,
            created_on: parse_date(record.get(4).unwrap_or_default())?,
            due_on: optional(record.get(5)).map(parse_date).transpose()?,
            completed_on: optional(record.get(6)).map(parse_date).transpose()?,
        });
    }
    Ok(rows)
}

/// Write the burndown table. One column per occurring bucket follows the
/// fixed columns; remaining cells for dates past today stay empty.
pub fn write_burndown(
    path: impl AsRef<Path>,
    rows: &[BurndownRow],
    buckets: &[ClassBucket],
) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    let mut header = vec![
        "date".to_string(),
        "estimated".to_string(),
        "actual".to_string(),
        "ideal".to_string(),
    ];
    header.extend(buckets.iter().map(bucket_label));
    writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![
            row.date.to_string(),
            row.remaining_estimated
                .map(format_points)
                .unwrap_or_default(),
            row.remaining_actual.map(format_points).unwrap_or_default(),
            format_points(row.ideal),
        ];
        record.extend(
            row.remaining_by_class
                .iter()
                .map(|points| points.map(format_points).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }

    writer.flush()?;
    debug!(path = %path.as_ref().display(), rows = rows.len(), "Wrote burndown table");
    Ok(())
}

/// Format a point value the way it parses back (no trailing zeros).
fn format_points(points: f64) -> String {
    points.to_string()
}

fn parse_points(field: &str) -> Result<f64, ReportError> {
    field.parse().map_err(|_| ReportError::NumberParse {
        value: field.to_string(),
    })
}

fn optional(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.is_empty())
}
