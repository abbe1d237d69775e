use admin_console::{config, server};
use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("admin_console=info".parse()?)
        )
        .init();

    info!("Starting admin console");

    // Load configuration from environment
    let config = config::Config::from_env()?;
    info!("Loading messages from {}", config.messages_dir.display());

    server::serve(&config).await
}
