//! Studio Scheduler server binary.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use studio_scheduler::adapters::http::schedule::{schedule_routes, ScheduleHandlers};
use studio_scheduler::adapters::memory::InMemorySessionStore;
use studio_scheduler::application::handlers::{
    SuggestInstructorHandler, ValidateClassScheduleHandler,
};
use studio_scheduler::config::{AppConfig, ServerConfig};
use studio_scheduler::domain::scheduling::SchedulingRules;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let rules = Arc::new(SchedulingRules::studio_default());
    let sessions = Arc::new(InMemorySessionStore::new());

    let handlers = ScheduleHandlers::new(
        Arc::new(ValidateClassScheduleHandler::new(
            sessions.clone(),
            rules.clone(),
        )),
        Arc::new(SuggestInstructorHandler::new(rules)),
    );

    let app = Router::new()
        .nest("/api/schedule", schedule_routes(handlers))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "studio-scheduler listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the CORS layer from configuration: the configured origin list
/// when present, permissive otherwise (development default).
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
