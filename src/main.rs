use log::info;
use std::sync::Arc;

// defaults matching the original deployment
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>>
{   env_logger::init();

    // Fail fast: no listener is bound until every required
    // setting is present
    let config = iongate::config::GatewayConfig::from_env()?;

    let state = Arc::new(
      iongate::handlers::AppState::new(config)?
    );
    let app = iongate::handlers::router(state);

    let host = std::env::var("HOST")
      .unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port: u16 = std::env::var("PORT")
      .ok()
      .and_then(|p| p.parse().ok())
      .unwrap_or(DEFAULT_PORT);
    let addr = format!("{}:{}", host, port);

    info!("Starting the gateway");
    info!("Listening on: {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
