//! The interest-over-time table returned by a fetch.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One sampled period: a timestamp, one 0–100 value per keyword and the partial flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestPoint {
    /// Start of the sampled period (UTC).
    pub time: DateTime<Utc>,
    /// Relative interest per keyword, in query keyword order.
    pub values: Vec<u8>,
    /// `true` if the provider may still revise this period.
    pub is_partial: bool,
}

/// A time-indexed table with one column per keyword plus the `isPartial` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestSeries {
    keywords: Vec<String>,
    points: Vec<InterestPoint>,
}

impl InterestSeries {
    /// Builds a series. Every point must carry one value per keyword.
    pub(crate) fn new(keywords: Vec<String>, points: Vec<InterestPoint>) -> Self {
        debug_assert!(points.iter().all(|p| p.values.len() == keywords.len()));
        Self { keywords, points }
    }

    /// Column names, in query order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Rows, in provider order (oldest first).
    pub fn points(&self) -> &[InterestPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All values of one keyword column, or `None` if the keyword is not in the series.
    pub fn column(&self, keyword: &str) -> Option<Vec<u8>> {
        let idx = self.keywords.iter().position(|k| k == keyword)?;
        Some(self.points.iter().map(|p| p.values[idx]).collect())
    }

    /// The trailing partial period, if the provider flagged one.
    pub fn partial_point(&self) -> Option<&InterestPoint> {
        self.points.last().filter(|p| p.is_partial)
    }
}

/// Outcome of an interest-over-time fetch.
///
/// `EmptyResult` means the provider had no measurements for the query. It is a
/// valid answer, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterestOverTime {
    /// The provider returned at least one row.
    Series(InterestSeries),
    /// The provider returned no rows.
    EmptyResult,
}

impl InterestOverTime {
    pub fn is_empty(&self) -> bool {
        matches!(self, InterestOverTime::EmptyResult)
    }

    /// The series, if there is one.
    pub fn series(&self) -> Option<&InterestSeries> {
        match self {
            InterestOverTime::Series(s) => Some(s),
            InterestOverTime::EmptyResult => None,
        }
    }

    pub fn into_series(self) -> Option<InterestSeries> {
        match self {
            InterestOverTime::Series(s) => Some(s),
            InterestOverTime::EmptyResult => None,
        }
    }
}
