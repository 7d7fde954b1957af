use std::sync::Arc;

use axum::{routing::{get, post}, Router};
use navfunnel_core::NavMesh;

pub mod config;
pub mod errors;
pub mod routes;

pub use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub navmesh: NavMesh,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config: Arc::new(config), navmesh: NavMesh::new() }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(routes::healthz))
        .route("/version", get(routes::version))
        .route("/route", post(routes::route))
        .route("/route/jitter", post(routes::route_jitter))
        .with_state(state)
}
