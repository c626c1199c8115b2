use std::sync::Arc;
use tracing::{info, warn};

use stock_agent::{run_server, AppConfig, AppState, LlmClient, ScrapeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    // Setup Logging
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting Stock Agent...");

    // Load Configuration (once; handlers receive it through AppState)
    let config = AppConfig::from_env();
    info!("Scrape target: {}", config.profile_url);
    info!("Using LLM Model: {}", config.model);
    if let Some(url) = &config.openai_base_url {
        info!("Using Custom OpenAI Base URL: {}", url);
    }
    if config.openai_api_key.is_none() {
        warn!("⚠️ OPENAI_API_KEY is not set - the agent chat route is disabled");
    }

    let scraper = ScrapeClient::new(config.profile_url.clone());
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        config.model.clone(),
    );

    let state = Arc::new(AppState { config, scraper, llm });

    info!("Initializing API Server...");
    run_server(state).await;

    Ok(())
}
