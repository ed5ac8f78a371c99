use std::time::Duration;

use crate::common;
use httpmock::Method::{GET, POST};
use trends_rs::{InterestOverTimeBuilder, Query, TrendsClient, TrendsError};
use url::Url;

fn seo_query() -> Query {
    Query::new(["SEO tools"], "today 12-m", "IS").unwrap()
}

#[tokio::test]
async fn explore_429_maps_to_provider_rejected() {
    let server = common::setup_server();
    let _session = common::mock_session(&server);
    let explore = server.mock(|when, then| {
        when.method(POST).path("/trends/api/explore");
        then.status(429)
            .header("content-type", "text/plain")
            .body("Too Many Requests");
    });
    let multiline = common::mock_multiline(&server, common::SEO_KEY, common::SEO_TOKEN);

    let client = common::client_for(&server);
    let err = client.interest_over_time(&seo_query()).await.unwrap_err();

    explore.assert();
    multiline.assert_calls(0);
    match err {
        TrendsError::ProviderRejected { status, url, detail } => {
            assert_eq!(status, 429);
            assert!(url.contains("/trends/api/explore"));
            assert_eq!(detail, "Too Many Requests");
        }
        other => panic!("expected ProviderRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn html_block_page_maps_to_provider_rejected() {
    let server = common::setup_server();
    let _session = common::mock_session(&server);
    let _explore = server.mock(|when, then| {
        when.method(POST).path("/trends/api/explore");
        then.status(200)
            .header("content-type", "text/html; charset=UTF-8")
            .body("<html><body>unusual traffic from your computer network</body></html>");
    });

    let client = common::client_for(&server);
    let err = client.interest_over_time(&seo_query()).await.unwrap_err();

    match err {
        TrendsError::ProviderRejected { status, detail, .. } => {
            assert_eq!(status, 200);
            assert!(detail.contains("unusual traffic"));
        }
        other => panic!("expected ProviderRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn multiline_400_maps_to_provider_rejected() {
    let server = common::setup_server();
    let _session = common::mock_session(&server);
    let _explore = common::mock_explore(&server, common::SEO_KEY, common::SEO_REQ);
    let multiline = server.mock(|when, then| {
        when.method(GET).path("/trends/api/widgetdata/multiline");
        then.status(400).body("bad request");
    });

    let client = common::client_for(&server);
    let err = client.interest_over_time(&seo_query()).await.unwrap_err();

    multiline.assert();
    match err {
        TrendsError::ProviderRejected { status, url, .. } => {
            assert_eq!(status, 400);
            assert!(url.contains("token=APP6_UEAAAAAaPS7Tq0dQxR_timeseries"));
        }
        other => panic!("expected ProviderRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn session_403_stops_before_explore() {
    let server = common::setup_server();
    let session = server.mock(|when, then| {
        when.method(GET).path("/trends/explore");
        then.status(403).body("Forbidden");
    });
    let explore = common::mock_explore(&server, common::SEO_KEY, common::SEO_REQ);

    let client = common::client_for(&server);
    let err = client.interest_over_time(&seo_query()).await.unwrap_err();

    session.assert();
    explore.assert_calls(0);
    assert!(matches!(err, TrendsError::ProviderRejected { status: 403, .. }));
}

#[tokio::test]
async fn missing_timeseries_widget_maps_to_data_error() {
    let server = common::setup_server();
    let _session = common::mock_session(&server);
    let _explore = server.mock(|when, then| {
        when.method(POST).path("/trends/api/explore");
        then.status(200)
            .header("content-type", "application/json; charset=utf-8")
            .body(")]}'\n{\"widgets\":[{\"id\":\"GEO_MAP\",\"token\":\"x\",\"request\":{}}]}");
    });

    let client = common::client_for(&server);
    let err = client.interest_over_time(&seo_query()).await.unwrap_err();
    assert!(matches!(err, TrendsError::Data(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_provider_maps_to_provider_unavailable() {
    let server = common::setup_server();
    let _session = common::mock_session(&server);

    let client = TrendsClient::builder()
        .cookie_url(Url::parse(&format!("{}/trends/explore", server.base_url())).unwrap())
        .explore_url(Url::parse("http://127.0.0.1:1/trends/api/explore").unwrap())
        .build()
        .unwrap();

    let err = client.interest_over_time(&seo_query()).await.unwrap_err();
    assert!(matches!(err, TrendsError::ProviderUnavailable(_)), "got {err:?}");
    assert!(!err.is_local());
}

#[tokio::test]
async fn per_call_timeout_maps_to_provider_unavailable() {
    let server = common::setup_server();
    let _session = common::mock_session(&server);
    let _explore = common::mock_explore(&server, common::SEO_KEY, common::SEO_REQ);
    let _slow = server.mock(|when, then| {
        when.method(GET).path("/trends/api/widgetdata/multiline");
        then.status(200)
            .delay(Duration::from_secs(3))
            .body(common::fixture("multiline", common::SEO_KEY, "json"));
    });

    let client = common::client_for(&server);
    let err = InterestOverTimeBuilder::new(&client, &seo_query())
        .timeout(Duration::from_millis(200))
        .fetch()
        .await
        .unwrap_err();

    match err {
        TrendsError::ProviderUnavailable(e) => assert!(e.is_timeout()),
        other => panic!("expected ProviderUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn per_call_timeout_covers_lazy_session_request() {
    let server = common::setup_server();
    let _slow_session = server.mock(|when, then| {
        when.method(GET).path("/trends/explore");
        then.status(200)
            .delay(Duration::from_secs(3))
            .header("content-type", "text/html; charset=utf-8")
            .body(common::SESSION_PAGE);
    });
    let explore = common::mock_explore(&server, common::SEO_KEY, common::SEO_REQ);

    let client = common::client_for(&server);
    let err = InterestOverTimeBuilder::new(&client, &seo_query())
        .timeout(Duration::from_millis(200))
        .fetch()
        .await
        .unwrap_err();

    explore.assert_calls(0);
    match err {
        TrendsError::ProviderUnavailable(e) => assert!(e.is_timeout()),
        other => panic!("expected ProviderUnavailable, got {other:?}"),
    }
}
