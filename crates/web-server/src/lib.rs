use axum::{routing::get, Router};
use configuration::Settings;
use database::LedgerRepository;
use reporting::ReportEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing;

pub mod auth;
pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub ledger: LedgerRepository,
    pub engine: ReportEngine,
}

/// Builds the application router over a prepared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/reports/profit-loss", get(handlers::get_profit_loss))
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, settings: Settings) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let db_pool = database::connect().await?;
    database::run_migrations(&db_pool).await?;
    let ledger = LedgerRepository::new(db_pool);

    let engine = ReportEngine::new(
        settings.fees,
        settings.reporting.currency.clone(),
        settings.reporting.top_clients,
    );

    let app_state = Arc::new(AppState { ledger, engine });
    let app = build_router(app_state);

    tracing::info!("Report server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
