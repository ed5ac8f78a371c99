use chrono::DateTime;

use crate::error::TrendsError;
use crate::interest::wire::TimelineNode;
use crate::series::{InterestOverTime, InterestPoint, InterestSeries};

/// Highest value on the provider's relative interest scale.
const MAX_INTEREST: u8 = 100;

/// Turns raw timeline rows into the outcome. No rows means `EmptyResult`.
pub(crate) fn assemble_series(
    keywords: &[String],
    rows: Vec<TimelineNode>,
) -> Result<InterestOverTime, TrendsError> {
    if rows.is_empty() {
        return Ok(InterestOverTime::EmptyResult);
    }

    let points = rows
        .into_iter()
        .map(|row| {
            if row.value.len() != keywords.len() {
                return Err(TrendsError::Data(format!(
                    "timeline row at {} has {} values for {} keywords",
                    row.time,
                    row.value.len(),
                    keywords.len()
                )));
            }
            if let Some(v) = row.value.iter().find(|v| **v > MAX_INTEREST) {
                return Err(TrendsError::Data(format!(
                    "timeline row at {} has out-of-range value {v}",
                    row.time
                )));
            }
            let time = DateTime::from_timestamp(row.time, 0).ok_or_else(|| {
                TrendsError::Data(format!("timestamp {} out of range", row.time))
            })?;
            Ok(InterestPoint {
                time,
                values: row.value,
                is_partial: row.is_partial,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(InterestOverTime::Series(InterestSeries::new(
        keywords.to_vec(),
        points,
    )))
}
