//! carpark-gateway server entry point.
//!
//! Starts the Axum HTTP server with the parking-lot REST endpoints.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use carpark_gateway::api;
use carpark_gateway::app_state::AppState;
use carpark_gateway::config::GatewayConfig;
use carpark_gateway::persistence::{LotStore, MemoryStore, PostgresStore};
use carpark_gateway::service::{SlotService, VehicleService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting carpark-gateway");

    // Build persistence layer
    let store: Arc<dyn LotStore> = if config.persistence_enabled {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(std::time::Duration::from_secs(
                config.database_connect_timeout_secs,
            ))
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!().run(&pool).await?;
        tracing::info!("connected to PostgreSQL");
        Arc::new(PostgresStore::new(pool))
    } else {
        tracing::warn!("persistence disabled, using in-memory store");
        Arc::new(MemoryStore::new())
    };

    // Build service layer
    let slot_service = Arc::new(SlotService::new(Arc::clone(&store)));
    let vehicle_service = Arc::new(VehicleService::new(store, Arc::clone(&slot_service)));

    // Build application state
    let app_state = AppState {
        vehicle_service,
        slot_service,
    };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
