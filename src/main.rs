use pulse_api::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("redditpulse=info,pulse_api=info,pulse_core=info,reddit_client=info")
        .init();

    tracing::info!("Starting RedditPulse - community sentiment analysis");

    let config = AppConfig::load()?;
    pulse_api::serve(config).await
}
