use trends_rs::{InterestConfig, InterestOverTime, TableFormatter, emit};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Defaults: "SEO tools" in Iceland over the last 12 months.
    let config = InterestConfig::default();

    match config.fetch().await? {
        InterestOverTime::Series(series) => {
            emit(&series, &TableFormatter, &mut std::io::stdout())?;
        }
        InterestOverTime::EmptyResult => {
            println!("Empty series for {:?}", config.keywords);
        }
    }

    Ok(())
}
