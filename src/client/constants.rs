//! Centralized constants for default endpoints, UA and session defaults.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Page that hands out the `NID` session cookie (`?geo=<region>` is appended).
pub(crate) const DEFAULT_COOKIE_URL: &str = "https://trends.google.com/trends/explore";

/// Explore API: turns a comparison payload into widget tokens.
pub(crate) const DEFAULT_EXPLORE_URL: &str = "https://trends.google.com/trends/api/explore";

/// Widget data API for the interest-over-time line chart.
pub(crate) const DEFAULT_MULTILINE_URL: &str =
    "https://trends.google.com/trends/api/widgetdata/multiline";

/// Host language sent as `hl`.
pub(crate) const DEFAULT_LOCALE: &str = "en-US";

/// Timezone offset in minutes sent as `tz` (360 is US Central Standard Time).
pub(crate) const DEFAULT_TZ_OFFSET: i32 = 360;
