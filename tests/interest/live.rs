use trends_rs::{InterestConfig, InterestOverTime};

#[tokio::test]
#[ignore]
async fn live_default_config_smoke() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    let outcome = InterestConfig::default().fetch().await.unwrap();

    if !crate::common::is_recording() {
        match outcome {
            InterestOverTime::Series(series) => {
                assert_eq!(series.keywords(), ["SEO tools".to_string()]);
                assert!(!series.is_empty());
                assert!(series.points().iter().all(|p| p.values[0] <= 100));
            }
            InterestOverTime::EmptyResult => {}
        }
    }
}
