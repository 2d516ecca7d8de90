//! Sprint date ranges.

use chrono::NaiveDate;
use regex::Regex;

use crate::error::ReportError;

/// Inclusive sprint date range.
///
/// Constructed only through [`SprintRange::new`], so a value always spans
/// at least one full day and the average daily burn rate is well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SprintRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl SprintRange {
    /// Create a validated range.
    ///
    /// # Errors
    /// `InvalidRange` when `end` precedes `start`; `ZeroLengthSprint`
    /// when they are the same day.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if end < start {
            return Err(ReportError::InvalidRange { start, end });
        }
        if start == end {
            return Err(ReportError::ZeroLengthSprint(start));
        }
        Ok(Self { start, end })
    }

    /// Sprint start date.
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Sprint end date.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days from start to end. Always positive.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Extract a sprint range from a bracketed project-name annotation,
    /// e.g. "Sprint 12 [2014-03-01 - 2014-03-08]".
    ///
    /// Returns `Ok(None)` when the name carries no annotation; an
    /// annotation that is present but invalid is an error.
    pub fn from_project_name(name: &str) -> Result<Option<Self>, ReportError> {
        let pattern =
            Regex::new(r"\[(20\d{2}-\d{1,2}-\d{1,2})[-:|\s]+(20\d{2}-\d{1,2}-\d{1,2})\]").unwrap();

        let Some(caps) = pattern.captures(name) else {
            return Ok(None);
        };
        let start = parse_date(&caps[1])?;
        let end = parse_date(&caps[2])?;
        Ok(Some(Self::new(start, end)?))
    }
}

/// Parse a YYYY-MM-DD date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ReportError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ReportError::DateParse {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        parse_date(value).unwrap()
    }

    #[test]
    fn test_valid_range() {
        let range = SprintRange::new(date("2024-03-01"), date("2024-03-08")).unwrap();
        assert_eq!(range.days(), 7);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = SprintRange::new(date("2024-03-08"), date("2024-03-01")).unwrap_err();
        assert!(matches!(err, ReportError::InvalidRange { .. }));
    }

    #[test]
    fn test_zero_length_sprint_rejected() {
        let err = SprintRange::new(date("2024-03-01"), date("2024-03-01")).unwrap_err();
        assert!(matches!(err, ReportError::ZeroLengthSprint(_)));
    }

    #[test]
    fn test_range_from_project_name() {
        let range = SprintRange::from_project_name("Sprint 12 [2014-03-01 - 2014-03-08]")
            .unwrap()
            .unwrap();
        assert_eq!(range.start(), date("2014-03-01"));
        assert_eq!(range.end(), date("2014-03-08"));
    }

    #[test]
    fn test_range_accepts_unpadded_dates() {
        let range = SprintRange::from_project_name("Q1 [2014-3-1:2014-3-8]")
            .unwrap()
            .unwrap();
        assert_eq!(range.start(), date("2014-03-01"));
        assert_eq!(range.end(), date("2014-03-08"));
    }

    #[test]
    fn test_name_without_annotation() {
        assert!(SprintRange::from_project_name("Backlog")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_annotated_inverted_range_is_error() {
        let result = SprintRange::from_project_name("Oops [2014-03-08 - 2014-03-01]");
        assert!(matches!(result, Err(ReportError::InvalidRange { .. })));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(
            parse_date("March 1st"),
            Err(ReportError::DateParse { .. })
        ));
    }
}
