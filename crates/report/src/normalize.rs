//! Task normalization into report rows.

use asana::Task;
use chrono::NaiveDate;

use crate::estimate::EstimateParser;

/// One normalized task, ready for aggregation and the task-list table.
///
/// A task is considered completed when `completed_on` is present; the
/// source guarantees the completion timestamp exists iff the completed
/// flag is set.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    /// Assignee display name, if assigned.
    pub assignee: Option<String>,
    /// Sanitized task title.
    pub title: String,
    /// Estimated points.
    pub estimated: f64,
    /// Actual points spent.
    pub actual: f64,
    /// Creation date.
    pub created_on: NaiveDate,
    /// Due date, if one was set.
    pub due_on: Option<NaiveDate>,
    /// Completion date, if the task is completed.
    pub completed_on: Option<NaiveDate>,
}

/// Convert a raw task into a normalized report row.
///
/// Missing optional fields (assignee, due date, completion date)
/// normalize to `None`; this never fails. Timestamps reduce to calendar
/// dates.
#[must_use]
pub fn normalize(task: &Task, parser: &EstimateParser) -> TaskRow {
    let estimate = parser.parse(&task.name, &task.tags, task.completed);

    TaskRow {
        assignee: task.assignee.as_ref().map(|a| sanitize(&a.name)),
        title: sanitize(&task.name),
        estimated: estimate.estimated,
        actual: estimate.actual,
        created_on: task.created_at.date_naive(),
        due_on: task.due_on,
        completed_on: task.completed_at.map(|ts| ts.date_naive()),
    }
}

/// Replace characters outside printable ASCII with `?`.
///
/// Replacement keeps one output character per input character, so column
/// widths survive in the delimited output.
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { '?' })
        .collect()
}
