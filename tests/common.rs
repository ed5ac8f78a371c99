#![allow(dead_code)]

use httpmock::{
    Method::{GET, POST},
    Mock, MockServer,
};
use std::{fs, path::Path};
use trends_rs::TrendsClient;
use url::Url;

pub const SEO_KEY: &str = "SEO-tools.IS";
pub const SEO_TOKEN: &str = "APP6_UEAAAAAaPS7Tq0dQxR_timeseries";
pub const SEO_REQ: &str = r#"{"comparisonItem":[{"keyword":"SEO tools","time":"today 12-m","geo":"IS"}],"category":0,"property":""}"#;

pub const SESSION_PAGE: &str =
    "<!doctype html><html lang=\"en-US\"><head><title>Google Trends</title></head><body></body></html>";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, key, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client whose three endpoints all point at the mock server.
pub fn client_for(server: &MockServer) -> TrendsClient {
    TrendsClient::builder()
        .cookie_url(Url::parse(&format!("{}/trends/explore", server.base_url())).unwrap())
        .explore_url(Url::parse(&format!("{}/trends/api/explore", server.base_url())).unwrap())
        .multiline_url(
            Url::parse(&format!("{}/trends/api/widgetdata/multiline", server.base_url())).unwrap(),
        )
        .build()
        .unwrap()
}

pub fn mock_session(server: &'_ MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/trends/explore").query_param("geo", "US");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .header("set-cookie", "NID=511=test-nid; Path=/; HttpOnly")
            .body(SESSION_PAGE);
    })
}

pub fn mock_explore<'a>(server: &'a MockServer, key: &'a str, req: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/trends/api/explore")
            .query_param("hl", "en-US")
            .query_param("tz", "360")
            .query_param("req", req);
        then.status(200)
            .header("content-type", "application/json; charset=utf-8")
            .body(fixture("explore", key, "json"));
    })
}

pub fn mock_multiline<'a>(server: &'a MockServer, key: &'a str, token: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/trends/api/widgetdata/multiline")
            .query_param_exists("req")
            .query_param("token", token)
            .query_param("tz", "360");
        then.status(200)
            .header("content-type", "application/json; charset=utf-8")
            .body(fixture("multiline", key, "json"));
    })
}

pub fn live_or_record_enabled() -> bool {
    std::env::var("TRENDS_LIVE").ok().as_deref() == Some("1") || is_recording()
}

pub fn is_recording() -> bool {
    std::env::var("TRENDS_RECORD").ok().as_deref() == Some("1")
}
