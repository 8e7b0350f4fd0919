//! Bookmark Forms Service
//!
//! Validates and reshapes bookmark manager form input (search, bookmark
//! create/edit, bulk tag edits) before it reaches the storage layer.

mod api;
mod config;
mod errors;
mod forms;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting bookmark forms service");
    tracing::info!("Tag delimiter: {:?}", forms::DELIM);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Build router
    let app = create_router();

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router() -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Browser forms
        .route(
            "/forms/search",
            get(api::describe_search_form).post(api::submit_search_form),
        )
        .route("/forms/home", post(api::submit_home_form))
        .route(
            "/forms/bookmark",
            get(api::describe_bookmark_form).post(api::submit_bookmark_form),
        )
        // Tags
        .route("/tags/validate", post(api::validate_tags))
        // Bookmarks
        .route(
            "/bookmarks/validate",
            post(api::validate_bookmark_create).put(api::validate_bookmark_edit),
        )
        .route(
            "/bookmarks/range/validate",
            put(api::validate_bookmark_range_edit),
        );

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
