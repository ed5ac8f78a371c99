use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrendsError;

/// A provider geography code: empty for worldwide, `IS`, `US-CA` or `US-CA-807`.
///
/// Codes are case sensitive on the provider side, so they are checked, never rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Geo(String);

impl Geo {
    /// Worldwide (no geography restriction).
    pub fn worldwide() -> Self {
        Self::default()
    }

    /// Validates `s` as a geography code.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::InvalidQuery`] if `s` is neither empty nor an upper-case
    /// ISO 3166-1 alpha-2 code with optional `-`-separated subdivision segments.
    pub fn parse(s: &str) -> Result<Self, TrendsError> {
        if s.is_empty() || is_code(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(TrendsError::InvalidQuery(format!(
                "unrecognised geo '{s}' (expected '' for worldwide or a code like 'IS', 'US-CA')"
            )))
        }
    }

    /// The exact string sent to the provider.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when no geography restriction applies.
    pub fn is_worldwide(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Geo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Geo {
    type Err = TrendsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Geo {
    type Error = TrendsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Geo> for String {
    fn from(g: Geo) -> Self {
        g.0
    }
}

fn is_code(s: &str) -> bool {
    let mut segments = s.split('-');
    let country_ok = segments
        .next()
        .is_some_and(|c| c.len() == 2 && c.chars().all(|ch| ch.is_ascii_uppercase()));
    let rest: Vec<&str> = segments.collect();
    country_ok
        && rest.len() <= 2
        && rest.iter().all(|seg| {
            (1..=3).contains(&seg.len())
                && seg.chars().all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit())
        })
}
