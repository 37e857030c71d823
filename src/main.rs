use std::sync::Arc;

use tower_http::cors::CorsLayer;

use chat_relay::config::Config;
use chat_relay::routes;
use chat_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    if config.api_key.is_empty() {
        tracing::warn!("API_KEY is not set; chat requests will fail until it is configured");
    }
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config)?);

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("chat relay listening on http://{bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
