//! HTTP surface for the minifier (Axum).
//!
//! Provides a response-minifying middleware for any router, a minification
//! endpoint, and health monitoring.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use config::AppConfig;
use state::AppState;

/// Build the application router with all routes.
pub fn app() -> Router {
    let state = AppState::new();
    app_with_state(state)
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::minify_routes())
        .with_state(state)
}

/// Pass every response of `router` through the script filter in `state`.
pub fn with_script_filter(router: Router, state: AppState) -> Router {
    router.layer(axum::middleware::from_fn_with_state(state, middleware::minify_responses))
}

/// The served router: API routes plus `assets`, all behind the script filter.
pub fn service(state: AppState, assets: Router) -> Router {
    let routes = app_with_state(state.clone()).merge(assets);
    with_script_filter(routes, state)
}

/// Bind and serve `assets` and the API until the process is stopped.
pub async fn serve(config: AppConfig, assets: Router) -> anyhow::Result<()> {
    let state = AppState::from_config(&config.filter)?;
    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, service(state, assets)).await?;
    Ok(())
}

#[cfg(test)]
mod tests;
