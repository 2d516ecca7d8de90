//! Point estimate extraction from task titles and tags.

use asana::Tag;
use regex::Regex;

/// Suffix marking a tag that encodes a point value, e.g. "5pts".
const POINTS_TAG_SUFFIX: &str = "pts";

/// An (estimated, actual) point pair derived for one task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Planned effort in points.
    pub estimated: f64,
    /// Effort actually spent in points.
    pub actual: f64,
}

/// Parses estimate annotations out of task titles.
///
/// Titles may open with an annotation like `[3:2] Fix bug`: the estimate,
/// optionally followed by a separator and the actual points spent. A `?`
/// estimate marks the effort as unknown. Tasks without an annotation may
/// instead carry a point tag such as `5pts`; everything else falls back to
/// the configured default.
#[derive(Debug, Clone)]
pub struct EstimateParser {
    pattern: Regex,
    default_estimate: f64,
}

impl EstimateParser {
    /// Create a parser with the given default estimate for unannotated
    /// tasks.
    #[must_use]
    pub fn new(default_estimate: f64) -> Self {
        // Estimate then optional separator + actual, e.g. "[2:1.5]". The
        // opening bracket is optional; the second capture may match empty.
        let pattern =
            Regex::new(r"^\s*\[?\s*(\?|\d+\.?\d*|\.?\d+)(?:[-:|/\s]+(\d*\.?\d*))?").unwrap();

        Self {
            pattern,
            default_estimate,
        }
    }

    /// Derive the point pair for one task.
    #[must_use]
    pub fn parse(&self, title: &str, tags: &[Tag], completed: bool) -> Estimate {
        if let Some(caps) = self.pattern.captures(title) {
            let raw = &caps[1];
            let estimated = if raw == "?" {
                // Unknown effort counts as zero.
                0.0
            } else {
                raw.parse().unwrap_or(0.0)
            };

            // An empty second capture is a missing actual, not zero.
            let explicit_actual = caps
                .get(2)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .and_then(|s| s.parse::<f64>().ok());

            let actual = match explicit_actual {
                Some(value) => value,
                // A completed task with no recorded actual is assumed to
                // have spent exactly its estimate.
                None if completed => estimated,
                None => 0.0,
            };

            return Estimate { estimated, actual };
        }

        // No title annotation: the first point tag wins.
        for tag in tags {
            if let Some(prefix) = tag.name.strip_suffix(POINTS_TAG_SUFFIX) {
                if let Ok(points) = prefix.parse::<f64>() {
                    if points >= 0.0 {
                        return Estimate {
                            estimated: points,
                            actual: points,
                        };
                    }
                }
            }
        }

        Estimate {
            estimated: self.default_estimate,
            actual: self.default_estimate,
        }
    }
}
