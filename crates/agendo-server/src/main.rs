use axum::routing::{delete, get, post};
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use agendo_api::handlers::{appointments, availability, blocks, catalog, health, tenants};
use agendo_api::state::AppState;
use agendo_infrastructure::{create_pool, MIGRATOR};
use agendo_shared::config::AppConfig;

mod reminder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    agendo_shared::telemetry::init_telemetry();

    info!("Agendo server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    MIGRATOR.run(&pool).await?;
    info!("Database connection established.");

    // Create App State
    let state = AppState::new(pool, config.clone());

    // Daily reminder sweep
    tokio::spawn(reminder::run(state.clone()));

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Public booking flow
        .route("/api/tenant/{slug}", get(tenants::get_tenant))
        .route("/professionals", get(catalog::list_professionals))
        .route("/services", get(catalog::list_services))
        .route("/api/availability", get(availability::get_availability))
        .route(
            "/appointments",
            post(appointments::create_appointment).get(appointments::list_appointments),
        )
        // Admin
        .route("/appointments/{id}", delete(appointments::delete_appointment))
        .route(
            "/api/blocks",
            get(blocks::list_blocks).post(blocks::create_block),
        )
        .route("/api/blocks/{id}", delete(blocks::delete_block))
        // Add State
        .with_state(state)
        // Add CORS
        .layer(
            CorsLayer::new()
                .allow_origin(config.cors.allowed_origin.parse::<axum::http::HeaderValue>()?)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::AUTHORIZATION]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
