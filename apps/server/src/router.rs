use crate::handlers;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use vinewood_kernel::server::{AppState, system_router};

/// Every route of the portal, traced and bound to `state`.
pub fn init(state: AppState) -> Router {
    let api = Router::new()
        .route("/site", get(handlers::site))
        .route("/sections/{name}", get(handlers::section))
        .route("/status", get(handlers::status))
        .route("/loading", get(handlers::loading));

    Router::new()
        .route("/", get(handlers::page))
        .nest("/api", api)
        .merge(system_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
