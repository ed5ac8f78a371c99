//! trends-rs: ergonomic Google Trends client.
//!
//! Fetches the interest-over-time series for up to five keywords:
//!
//! ```no_run
//! # async fn run() -> Result<(), trends_rs::TrendsError> {
//! use trends_rs::{Query, TrendsClient, TableFormatter, emit};
//!
//! let client = TrendsClient::configure("en-US", 360).await?;
//! let query = Query::new(["SEO tools"], "today 12-m", "IS")?;
//! if let Some(series) = client.interest_over_time(&query).await?.into_series() {
//!     emit(&series, &TableFormatter, &mut std::io::stdout()).expect("stdout");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod emit;
pub mod error;
pub mod interest;
pub(crate) mod internal {
    pub(crate) mod net;
}
pub mod query;
pub mod series;

pub use client::{TrendsClient, TrendsClientBuilder};
pub use config::InterestConfig;
pub use emit::{CsvFormatter, SeriesFormatter, TableFormatter, emit};
pub use error::TrendsError;
pub use interest::{InterestOverTimeBuilder, interest_over_time};
pub use query::{Geo, MAX_KEYWORDS, Property, Query, QueryBuilder, Timeframe};
pub use series::{InterestOverTime, InterestPoint, InterestSeries};
