use std::net::SocketAddr;

use itinerary_server::planner::PlannerConfig;
use itinerary_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

/// Default bind address when `ITINERARY_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load planner config, falling back to the documented defaults
    let config = match std::env::var("ITINERARY_CONFIG") {
        Ok(path) => {
            let config = PlannerConfig::from_file(&path)?;
            tracing::info!(%path, "Loaded planner config");
            config
        }
        Err(_) => PlannerConfig::default(),
    };

    let addr: SocketAddr = std::env::var("ITINERARY_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let app = create_router(AppState::new(config));

    tracing::info!("Itinerary planner listening on http://{addr}");
    tracing::info!("  GET  /health          - Health check");
    tracing::info!("  GET  /modes           - Transport mode speed profiles");
    tracing::info!("  POST /itinerary/plan  - Plan a single-day itinerary");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
