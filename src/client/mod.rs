//! Public client surface + builder.
//! Internals are split into `session` (NID cookie negotiation) and `constants` (UA + defaults).

mod constants;
mod session;

use crate::error::TrendsError;
use constants::{
    DEFAULT_COOKIE_URL, DEFAULT_EXPLORE_URL, DEFAULT_LOCALE, DEFAULT_MULTILINE_URL,
    DEFAULT_TZ_OFFSET, USER_AGENT,
};
use reqwest::Client;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use url::Url;

#[derive(Debug, Default)]
struct SessionState {
    established: bool,
    nid: Option<String>,
}

/// An owned session handle against the Google Trends web API.
///
/// Cloning is cheap; clones share the HTTP connection pool, the cookie store and
/// the negotiated session.
#[derive(Debug, Clone)]
pub struct TrendsClient {
    http: Client,
    locale: String,
    tz_offset: i32,
    cookie_url: Url,
    explore_url: Url,
    multiline_url: Url,
    state: Arc<RwLock<SessionState>>,
    session_lock: Arc<Mutex<()>>,
}

impl TrendsClient {
    /// Create a new builder.
    pub fn builder() -> TrendsClientBuilder {
        TrendsClientBuilder::default()
    }

    /// Builds a client for `locale` and `tz_offset` (minutes) and negotiates the
    /// provider session right away.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::InvalidConfig`] for a malformed locale, and a provider
    /// error if the session page cannot be fetched.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(locale), err))]
    pub async fn configure(locale: impl Into<String>, tz_offset: i32) -> Result<Self, TrendsError> {
        let client = Self::builder().locale(locale).tz_offset(tz_offset).build()?;
        client.ensure_session(None).await?;
        Ok(client)
    }

    /// The host language sent as `hl`.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The timezone offset in minutes sent as `tz`.
    pub fn tz_offset(&self) -> i32 {
        self.tz_offset
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn explore_url(&self) -> &Url {
        &self.explore_url
    }
    pub(crate) fn multiline_url(&self) -> &Url {
        &self.multiline_url
    }

    /// Region part of the locale (`en-US` -> `US`), used when asking for the session cookie.
    pub(crate) fn region(&self) -> Option<&str> {
        self.locale
            .rsplit_once('-')
            .map(|(_, r)| r)
            .filter(|r| r.len() == 2)
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures and builds a [`TrendsClient`].
#[derive(Default)]
pub struct TrendsClientBuilder {
    locale: Option<String>,
    tz_offset: Option<i32>,
    user_agent: Option<String>,
    cookie_url: Option<Url>,
    explore_url: Option<Url>,
    multiline_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl TrendsClientBuilder {
    /// Host language tag, e.g. `en-US`. Default: `en-US`.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Timezone offset in minutes, as the provider expects it. Default: `360`.
    pub fn tz_offset(mut self, minutes: i32) -> Self {
        self.tz_offset = Some(minutes);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the session cookie page (e.g., `https://trends.google.com/trends/explore`).
    pub fn cookie_url(mut self, url: Url) -> Self {
        self.cookie_url = Some(url);
        self
    }

    /// Override the explore API (e.g., `https://trends.google.com/trends/api/explore`).
    pub fn explore_url(mut self, url: Url) -> Self {
        self.explore_url = Some(url);
        self
    }

    /// Override the multiline widget API (e.g., `https://trends.google.com/trends/api/widgetdata/multiline`).
    pub fn multiline_url(mut self, url: Url) -> Self {
        self.multiline_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client. No network traffic happens here.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::InvalidConfig`] for a malformed locale and
    /// [`TrendsError::ProviderUnavailable`] if the HTTP stack cannot be initialised.
    pub fn build(self) -> Result<TrendsClient, TrendsError> {
        let locale = self.locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        validate_locale(&locale)?;

        let cookie_url = match self.cookie_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_COOKIE_URL)?,
        };
        let explore_url = match self.explore_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_EXPLORE_URL)?,
        };
        let multiline_url = match self.multiline_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_MULTILINE_URL)?,
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&locale)
                .map_err(|_| TrendsError::InvalidConfig(format!("locale '{locale}' is not a valid header value")))?,
        );

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers)
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(TrendsClient {
            http,
            locale,
            tz_offset: self.tz_offset.unwrap_or(DEFAULT_TZ_OFFSET),
            cookie_url,
            explore_url,
            multiline_url,
            state: Arc::new(RwLock::new(SessionState::default())),
            session_lock: Arc::new(Mutex::new(())),
        })
    }
}

/// Accepts language tags made of ASCII alphanumeric segments joined by `-` (`en`, `en-US`, `zh-Hant-TW`).
fn validate_locale(locale: &str) -> Result<(), TrendsError> {
    let ok = !locale.is_empty()
        && locale
            .split('-')
            .all(|seg| (1..=8).contains(&seg.len()) && seg.chars().all(|c| c.is_ascii_alphanumeric()));
    if ok {
        Ok(())
    } else {
        Err(TrendsError::InvalidConfig(format!(
            "locale '{locale}' is not a language tag like 'en-US'"
        )))
    }
}
