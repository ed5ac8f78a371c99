//! Query construction and local validation.
//!
//! Everything here runs before any network traffic: an invalid [`Query`] can never
//! be built, so a fetch never sends a request the provider would have to reject on shape.

mod geo;
mod timeframe;

pub use geo::Geo;
pub use timeframe::Timeframe;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrendsError;

/// Most keywords the provider compares in one request.
pub const MAX_KEYWORDS: usize = 5;

/// Which Google property the interest is measured on (`gprop`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    /// Web search.
    #[default]
    Web,
    /// Image search.
    Images,
    /// News search.
    News,
    /// YouTube search.
    YouTube,
    /// Google Shopping.
    Shopping,
}

impl Property {
    /// The wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Property::Web => "",
            Property::Images => "images",
            Property::News => "news",
            Property::YouTube => "youtube",
            Property::Shopping => "froogle",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Property {
    type Err = TrendsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "web" => Ok(Property::Web),
            "images" => Ok(Property::Images),
            "news" => Ok(Property::News),
            "youtube" => Ok(Property::YouTube),
            "froogle" | "shopping" => Ok(Property::Shopping),
            other => Err(TrendsError::InvalidQuery(format!(
                "unknown property '{other}' (expected '', 'images', 'news', 'youtube' or 'froogle')"
            ))),
        }
    }
}

/// A validated interest-over-time query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    keywords: Vec<String>,
    timeframe: Timeframe,
    geo: Geo,
    category: u32,
    property: Property,
}

impl Query {
    /// Builds a query from keywords, a timeframe and a geo code.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::InvalidQuery`] when the keyword list is empty, longer than
    /// [`MAX_KEYWORDS`], contains a blank or repeated keyword, or when `timeframe`/`geo` are not in
    /// the provider's vocabulary.
    pub fn new<I, S>(keywords: I, timeframe: &str, geo: &str) -> Result<Self, TrendsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder(keywords).timeframe(timeframe).geo(geo).build()
    }

    /// Starts a builder for the given keywords.
    pub fn builder<I, S>(keywords: I) -> QueryBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QueryBuilder::new(keywords)
    }

    /// The keywords, in the order the series columns will have.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn timeframe(&self) -> &Timeframe {
        &self.timeframe
    }

    pub fn geo(&self) -> &Geo {
        &self.geo
    }

    /// Provider category id; `0` means all categories.
    pub fn category(&self) -> u32 {
        self.category
    }

    pub fn property(&self) -> Property {
        self.property
    }
}

/// A builder for [`Query`]. Validation happens in [`QueryBuilder::build`].
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    keywords: Vec<String>,
    timeframe: Option<String>,
    geo: String,
    category: u32,
    property: Property,
}

impl QueryBuilder {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            timeframe: None,
            geo: String::new(),
            category: 0,
            property: Property::Web,
        }
    }

    /// Sets the time window (e.g., `today 12-m`). Default: `today 5-y`.
    #[must_use]
    pub fn timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = Some(timeframe.into());
        self
    }

    /// Sets the geography code (e.g., `IS`). Default: worldwide.
    #[must_use]
    pub fn geo(mut self, geo: impl Into<String>) -> Self {
        self.geo = geo.into();
        self
    }

    /// Restricts interest to a provider category id. Default: `0` (all).
    #[must_use]
    pub const fn category(mut self, category: u32) -> Self {
        self.category = category;
        self
    }

    /// Sets the Google property to measure. Default: web search.
    #[must_use]
    pub const fn property(mut self, property: Property) -> Self {
        self.property = property;
        self
    }

    /// Validates and builds the query.
    ///
    /// # Errors
    ///
    /// See [`Query::new`].
    pub fn build(self) -> Result<Query, TrendsError> {
        validate_keywords(&self.keywords)?;
        let timeframe = match self.timeframe.as_deref() {
            Some(t) => Timeframe::parse(t)?,
            None => Timeframe::default(),
        };
        let geo = Geo::parse(&self.geo)?;

        Ok(Query {
            keywords: self.keywords,
            timeframe,
            geo,
            category: self.category,
            property: self.property,
        })
    }
}

fn validate_keywords(keywords: &[String]) -> Result<(), TrendsError> {
    if keywords.is_empty() {
        return Err(TrendsError::InvalidQuery(
            "at least one keyword is required".into(),
        ));
    }
    if keywords.len() > MAX_KEYWORDS {
        return Err(TrendsError::InvalidQuery(format!(
            "{} keywords given, the provider compares at most {MAX_KEYWORDS}",
            keywords.len()
        )));
    }
    if let Some(pos) = keywords.iter().position(|k| k.trim().is_empty()) {
        return Err(TrendsError::InvalidQuery(format!(
            "keyword #{} is blank",
            pos + 1
        )));
    }
    for (i, k) in keywords.iter().enumerate() {
        if keywords[..i].contains(k) {
            return Err(TrendsError::InvalidQuery(format!(
                "keyword '{k}' is given more than once"
            )));
        }
    }
    Ok(())
}
