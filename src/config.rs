//! Overridable run configuration.
//!
//! Defaults: `SEO tools` in Iceland over the last twelve months, asked as `en-US`
//! with a 360 minute offset.

use serde::{Deserialize, Serialize};

use crate::client::{TrendsClient, TrendsClientBuilder};
use crate::error::TrendsError;
use crate::query::{Property, Query};
use crate::series::InterestOverTime;

/// Every parameter of an interest-over-time run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestConfig {
    /// Host language tag.
    pub locale: String,
    /// Timezone offset in minutes.
    pub tz_offset: i32,
    pub keywords: Vec<String>,
    pub timeframe: String,
    pub geo: String,
    pub category: u32,
    pub property: Property,
}

impl Default for InterestConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            tz_offset: 360,
            keywords: vec!["SEO tools".to_string()],
            timeframe: "today 12-m".to_string(),
            geo: "IS".to_string(),
            category: 0,
            property: Property::Web,
        }
    }
}

impl InterestConfig {
    /// A client builder preset with this locale and offset, for further overrides.
    pub fn client_builder(&self) -> TrendsClientBuilder {
        TrendsClient::builder()
            .locale(self.locale.clone())
            .tz_offset(self.tz_offset)
    }

    /// Validates the query part of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::InvalidQuery`] as [`Query::new`] does.
    pub fn query(&self) -> Result<Query, TrendsError> {
        Query::builder(self.keywords.iter().cloned())
            .timeframe(self.timeframe.clone())
            .geo(self.geo.clone())
            .category(self.category)
            .property(self.property)
            .build()
    }

    /// Configure, build the query, fetch. The query is validated before any network traffic.
    ///
    /// # Errors
    ///
    /// Any error of the three steps, unchanged.
    pub async fn fetch(&self) -> Result<InterestOverTime, TrendsError> {
        let query = self.query()?;
        let client = TrendsClient::configure(self.locale.clone(), self.tz_offset).await?;
        client.interest_over_time(&query).await
    }
}
