use std::sync::Arc;

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smartbudget::db::{create_pool, PgStore};
use smartbudget::providers::{AnalysisClient, NumbeoClient, PlaidClient};
use smartbudget::{routes, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smartbudget=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SmartBudget server...");

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Environment: {}, Server: {}",
        config.environment,
        config.server_address()
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations complete");

    // Construct the outbound provider clients
    let analysis = Arc::new(AnalysisClient::new(config.ai_service_url.clone())?);
    if let Err(err) = analysis.health_check().await {
        tracing::warn!("AI analysis service is not reachable: {err}");
    }

    // Create app state; every collaborator is injected here
    let state = AppState {
        store: Arc::new(PgStore::new(pool)),
        banking: Arc::new(PlaidClient::new(config.banking_api_url.clone())?),
        pricing: Arc::new(NumbeoClient::new(
            config.pricing_api_url.clone(),
            config.pricing_api_key.clone(),
        )?),
        analysis,
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Build router
    let app = routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: std::net::SocketAddr = config.server_address().parse()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
