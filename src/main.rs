use anyhow::Result;
use gamepathai_api::config::Config;
use gamepathai_api::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is a development convenience; absence is not an error.
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config);

    tracing::info!(
        environment = %config.environment,
        port = config.port,
        "Starting GamePathAI stub API gateway"
    );

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
