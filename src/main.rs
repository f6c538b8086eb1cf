use std::error::Error;
use std::sync::Arc;

use dotenvy::dotenv;
use log::info;

use studychat::chat::ChatService;
use studychat::config::AppConfig;
use studychat::llm::{GeminiClient, GeminiModel};
use studychat::routes::configure_routes;
use studychat::store::{Store, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;

    let store_config = StoreConfig::from_connection_string(&config.database_url)?;
    info!("Connecting to PostgreSQL at {}:{}", store_config.host, store_config.port);
    let store = Store::new(store_config).await?;

    let generator = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        GeminiModel::Gemini25Flash,
    )?);

    let service = Arc::new(ChatService::new(store, generator));
    let routes = configure_routes(service);

    info!("Starting server on http://0.0.0.0:{}", config.port);
    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;

    Ok(())
}
