use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TrendsError;

/// A provider time window such as `today 12-m` or `2024-01-01 2024-06-30`.
///
/// The string is validated against the provider's vocabulary and sent exactly as
/// given; nothing is normalised.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timeframe(String);

impl Timeframe {
    /// Validates `s` as a provider timeframe.
    ///
    /// Accepted forms: `all`, `now 1-H`, `now 4-H`, `now 1-d`, `now 7-d`,
    /// `today N-m`, `today N-y`, `YYYY-MM-DD YYYY-MM-DD` and
    /// `YYYY-MM-DDTHH YYYY-MM-DDTHH`.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::InvalidQuery`] for anything else.
    pub fn parse(s: &str) -> Result<Self, TrendsError> {
        if is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(TrendsError::InvalidQuery(format!(
                "unrecognised timeframe '{s}' (expected e.g. 'today 12-m', 'now 7-d', 'all' or 'YYYY-MM-DD YYYY-MM-DD')"
            )))
        }
    }

    /// The exact string sent to the provider.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Timeframe {
    /// The provider's own default window, the last five years.
    fn default() -> Self {
        Self("today 5-y".to_string())
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Timeframe {
    type Err = TrendsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Timeframe {
    type Error = TrendsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Timeframe> for String {
    fn from(t: Timeframe) -> Self {
        t.0
    }
}

fn is_valid(s: &str) -> bool {
    if s == "all" {
        return true;
    }
    let Some((head, tail)) = s.split_once(' ') else {
        return false;
    };
    match head {
        "now" => matches!(tail, "1-H" | "4-H" | "1-d" | "7-d"),
        "today" => match tail.split_once('-') {
            Some((n, "m" | "y")) => positive_count(n),
            _ => false,
        },
        _ => absolute_range(head, tail),
    }
}

fn positive_count(n: &str) -> bool {
    !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()) && n.parse::<u32>().is_ok_and(|v| v > 0)
}

/// `start end` where both are days, or both are `dayTHH` hours, and start < end.
fn absolute_range(start: &str, end: &str) -> bool {
    match (parse_point(start), parse_point(end)) {
        (Some((d1, h1)), Some((d2, h2))) if h1.is_some() == h2.is_some() => {
            (d1, h1.unwrap_or(0)) < (d2, h2.unwrap_or(0))
        }
        _ => false,
    }
}

fn parse_point(s: &str) -> Option<(NaiveDate, Option<u32>)> {
    let (day, hour) = match s.split_once('T') {
        Some((day, hour)) => {
            if hour.len() != 2 || !hour.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let h: u32 = hour.parse().ok()?;
            if h > 23 {
                return None;
            }
            (day, Some(h))
        }
        None => (s, None),
    };
    // chrono accepts unpadded fields; the provider does not.
    if day.len() != 10 {
        return None;
    }
    let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
    Some((date, hour))
}
