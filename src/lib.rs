pub mod config;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod quiz;
pub mod routerlab;
pub mod validation;

#[cfg(test)]
pub mod testing;

use axum::{Router, routing::get, routing::post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::db::ProgressStore;

/// Assemble the full route surface on top of one progress store handle.
pub fn app(store: ProgressStore) -> Router {
  Router::new()
    .route("/", get(handlers::index))
    .route("/learn", get(handlers::learn_menu))
    .route("/challenge", get(handlers::challenge_menu))
    .route("/dashboard", get(handlers::dashboard))
    .route("/reset", post(handlers::reset_progress))
    .route("/router-lab", get(handlers::router_lab))
    .route("/{mode}/{topic}", get(handlers::quiz_page).post(handlers::quiz_submit))
    .nest_service("/static", ServeDir::new("static"))
    .layer(TraceLayer::new_for_http())
    .with_state(store)
}
