use crate::common;
use trends_rs::{InterestOverTimeBuilder, Query, TableFormatter, emit};

#[tokio::test]
async fn offline_seo_tools_iceland_last_twelve_months() {
    let server = common::setup_server();
    let session = common::mock_session(&server);
    let explore = common::mock_explore(&server, common::SEO_KEY, common::SEO_REQ);
    let multiline = common::mock_multiline(&server, common::SEO_KEY, common::SEO_TOKEN);

    let client = common::client_for(&server);
    let query = Query::new(["SEO tools"], "today 12-m", "IS").unwrap();

    let series = client
        .interest_over_time(&query)
        .await
        .unwrap()
        .into_series()
        .expect("fixture has rows");

    session.assert();
    explore.assert();
    multiline.assert();

    assert!((12..=13).contains(&series.len()), "got {} rows", series.len());
    assert_eq!(series.keywords(), ["SEO tools".to_string()]);
    let column = series.column("SEO tools").unwrap();
    assert!(column.iter().all(|v| *v <= 100));
    assert!(column.contains(&100), "relative scale peaks at 100");

    let (last, rest) = series.points().split_last().unwrap();
    assert!(last.is_partial);
    assert!(rest.iter().all(|p| !p.is_partial));
    assert!(series.points().windows(2).all(|w| w[0].time < w[1].time));
}

#[tokio::test]
async fn repeated_fetch_keeps_shape_and_negotiates_session_once() {
    let server = common::setup_server();
    let session = common::mock_session(&server);
    let explore = common::mock_explore(&server, common::SEO_KEY, common::SEO_REQ);
    let multiline = common::mock_multiline(&server, common::SEO_KEY, common::SEO_TOKEN);

    let client = common::client_for(&server);
    let query = Query::new(["SEO tools"], "today 12-m", "IS").unwrap();

    let first = client.interest_over_time(&query).await.unwrap().into_series().unwrap();
    let second = trends_rs::interest_over_time(&client, &query)
        .await
        .unwrap()
        .into_series()
        .unwrap();

    session.assert_calls(1);
    explore.assert_calls(2);
    multiline.assert_calls(2);

    assert_eq!(first.keywords(), second.keywords());
    assert_eq!(first.len(), second.len());
    assert_eq!(
        first.partial_point().is_some(),
        second.partial_point().is_some()
    );
    assert_eq!(client.session_cookie().await.as_deref(), Some("511=test-nid"));
}

#[tokio::test]
async fn fetched_series_renders_as_table() {
    let server = common::setup_server();
    let _session = common::mock_session(&server);
    let _explore = common::mock_explore(&server, common::SEO_KEY, common::SEO_REQ);
    let _multiline = common::mock_multiline(&server, common::SEO_KEY, common::SEO_TOKEN);

    let client = common::client_for(&server);
    let query = Query::new(["SEO tools"], "today 12-m", "IS").unwrap();
    let series = InterestOverTimeBuilder::new(&client, &query)
        .timeout(std::time::Duration::from_secs(5))
        .fetch()
        .await
        .unwrap()
        .into_series()
        .unwrap();

    let mut out = Vec::new();
    emit(&series, &TableFormatter, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), series.len() + 1);
    assert!(lines[0].starts_with("date"));
    assert!(lines[0].contains("SEO tools"));
    assert!(lines[0].ends_with("isPartial"));
    assert!(lines[1].starts_with("2025-10-01"));
    assert!(lines.last().unwrap().ends_with("True"));
}
