//! Storefront server entry point.

use anyhow::Result;
use storefront::config::AppConfig;
use storefront::server::AppState;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Load configuration (optional YAML path as the first argument)
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_yaml_file(&path)?,
        None => AppConfig::default(),
    };

    // 3. Build application state
    let state = AppState::in_memory(config.users.clone())?;

    // 4. Seed the demo catalog when enabled
    if config.seed_demo_data {
        storefront::fixtures::seed_demo_data(&state).await?;
    }

    // 5. Start the server
    storefront::server::serve(state, &config.server.bind_addr()).await
}
