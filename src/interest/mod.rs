//! Interest over time: one explore call, one widget data call, one series.

mod assemble;
mod fetch;
mod wire;

use std::time::Duration;

use crate::client::TrendsClient;
use crate::error::TrendsError;
use crate::internal::net;
use crate::query::Query;
use crate::series::InterestOverTime;

use assemble::assemble_series;
use fetch::{fetch_timeline, fetch_widget};

/// Fetches the interest-over-time series for a query.
///
/// # Errors
///
/// See [`InterestOverTimeBuilder::fetch`].
pub async fn interest_over_time(
    client: &TrendsClient,
    query: &Query,
) -> Result<InterestOverTime, TrendsError> {
    InterestOverTimeBuilder::new(client, query).fetch().await
}

impl TrendsClient {
    /// Fetches the interest-over-time series for a query with this session.
    ///
    /// # Errors
    ///
    /// See [`InterestOverTimeBuilder::fetch`].
    pub async fn interest_over_time(&self, query: &Query) -> Result<InterestOverTime, TrendsError> {
        InterestOverTimeBuilder::new(self, query).fetch().await
    }
}

/// A builder for one interest-over-time request.
#[derive(Debug, Clone)]
pub struct InterestOverTimeBuilder {
    client: TrendsClient,
    query: Query,
    timeout: Option<Duration>,
}

impl InterestOverTimeBuilder {
    /// Creates a new builder for a validated query.
    pub fn new(client: &TrendsClient, query: &Query) -> Self {
        Self {
            client: client.clone(),
            query: query.clone(),
            timeout: None,
        }
    }

    /// Sets a deadline for each provider request of this fetch, the lazy session request included.
    /// Default: the client's timeout, if any.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Executes the request.
    ///
    /// Negotiates the provider session if the client has none yet, then issues exactly one
    /// explore request and one widget data request. Nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`TrendsError::ProviderUnavailable`] if the provider cannot be reached.
    /// - [`TrendsError::ProviderRejected`] if it answers with a non-2xx status (including 429) or a block page.
    /// - [`TrendsError::Data`] if a 2xx answer cannot be decoded.
    ///
    /// A query with no measured interest yields `Ok(InterestOverTime::EmptyResult)`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            skip(self),
            err,
            fields(
                keywords = ?self.query.keywords(),
                timeframe = %self.query.timeframe(),
                geo = %self.query.geo()
            )
        )
    )]
    pub async fn fetch(self) -> Result<InterestOverTime, TrendsError> {
        self.client.ensure_session(self.timeout).await?;

        let key = net::fixture_key(&self.query);
        let widget = fetch_widget(&self.client, &self.query, &key, self.timeout).await?;
        let rows = fetch_timeline(&self.client, &widget, &key, self.timeout).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(rows = rows.len(), "timeline received");

        assemble_series(self.query.keywords(), rows)
    }
}
