mod telemetry;

use api::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file when present.
    let dotenv = dotenvy::dotenv();

    telemetry::init("info");

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env file, using process environment"),
    }

    let config = AppConfig::from_env()?;
    info!(
        address = %config.api_address,
        upstream = %config.upstream.base_url,
        model = %config.llm.model,
        concurrency = config.assembly_concurrency,
        "configuration loaded"
    );

    api::start(config).await?;

    Ok(())
}
