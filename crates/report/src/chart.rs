//! Chart URL construction.

use chrono::NaiveDate;

use crate::burndown::BurndownRow;
use crate::sprint::SprintRange;

/// Build a Google Image Charts URL plotting the remaining-estimated
/// series over the sprint.
///
/// Dates past "today" have no remaining value yet and chart as gaps
/// (`_` in the simple text encoding).
#[must_use]
pub fn chart_url(rows: &[BurndownRow], range: &SprintRange) -> String {
    let series: Vec<String> = rows
        .iter()
        .map(|row| match row.remaining_estimated {
            Some(points) => points.to_string(),
            None => "_".to_string(),
        })
        .collect();

    format!(
        "https://chart.googleapis.com/chart?\
         cht=lc&chds=a&chs=600x400&chxt=x,y&chxs=0|1&chxr=&\
         chxl=0:|{}|{}&chd=t:{}",
        axis_label(range.start()),
        axis_label(range.end()),
        series.join(",")
    )
}

/// URL-encoded month-day axis label, e.g. "Mar%2001".
fn axis_label(date: NaiveDate) -> String {
    date.format("%b%%20%d").to_string()
}
