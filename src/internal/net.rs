use crate::error::TrendsError;
use crate::query::Query;
use reqwest::header::CONTENT_TYPE;
use url::Url;

#[cfg(feature = "test-mode")]
use std::{env, fs, path::PathBuf};

/// Longest provider excerpt carried in [`TrendsError::ProviderRejected`].
const DETAIL_MAX_CHARS: usize = 200;

/// Read the response body as text.
/// In `test-mode`, if `TRENDS_RECORD=1`, the body is saved as `<endpoint>_<key>.<ext>` under
/// `TRENDS_FIXDIR` (default `tests/fixtures`).
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("TRENDS_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = record_fixture(_endpoint, _key, _ext, &text)
        {
            eprintln!("TRENDS_RECORD: failed to write fixture for {_key}: {e}");
        }
    }

    Ok(text)
}

#[cfg(feature = "test-mode")]
fn record_fixture(endpoint: &str, key: &str, ext: &str, body: &str) -> std::io::Result<()> {
    let dir = env::var("TRENDS_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"));
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(format!("{endpoint}_{key}.{ext}")), body)
}

/// Maps any non-2xx status to [`TrendsError::ProviderRejected`]; the content type is not looked at.
///
/// Used for the session page, which is an HTML document by nature.
pub(crate) async fn check_status(
    resp: reqwest::Response,
    url: &Url,
) -> Result<reqwest::Response, TrendsError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(rejected(status, url, excerpt(&body)))
}

/// Like [`check_status`], for the JSON endpoints.
///
/// Google answers blocked or consent-walled API calls with a 2xx HTML page, so an
/// HTML content type counts as a rejection here.
pub(crate) async fn check_response(
    resp: reqwest::Response,
    url: &Url,
) -> Result<reqwest::Response, TrendsError> {
    let resp = check_status(resp, url).await?;
    let is_html = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("text/html"));
    if !is_html {
        return Ok(resp);
    }

    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(rejected(
        status,
        url,
        format!("unexpected HTML response: {}", excerpt(&body)),
    ))
}

fn rejected(status: u16, url: &Url, detail: String) -> TrendsError {
    #[cfg(feature = "tracing")]
    tracing::debug!(status, %url, "provider rejected request");

    TrendsError::ProviderRejected {
        status,
        url: url.to_string(),
        detail,
    }
}

/// Strips the `)]}'` anti-XSSI guard Google puts in front of its JSON bodies.
pub(crate) fn strip_xssi(body: &str) -> &str {
    let trimmed = body.trim_start();
    match trimmed.strip_prefix(")]}'") {
        Some(rest) => rest.trim_start_matches(',').trim_start(),
        None => trimmed,
    }
}

/// Fixture/recording key for a query: keywords with inner whitespace as `-`, joined by `_`,
/// then `.` and the geo (`world` when unrestricted), e.g. `SEO-tools.IS`.
pub(crate) fn fixture_key(query: &Query) -> String {
    let keywords = query
        .keywords()
        .iter()
        .map(|k| k.split_whitespace().collect::<Vec<_>>().join("-"))
        .collect::<Vec<_>>()
        .join("_");
    let geo = if query.geo().is_worldwide() {
        "world"
    } else {
        query.geo().as_str()
    };
    format!("{keywords}.{geo}")
}

fn excerpt(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= DETAIL_MAX_CHARS {
        flat
    } else {
        let mut cut: String = flat.chars().take(DETAIL_MAX_CHARS).collect();
        cut.push('…');
        cut
    }
}
