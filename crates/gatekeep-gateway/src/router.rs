//! Axum router wiring.
//!
//! Demo routes sit behind the authz layer (fallback included); ops routes do not.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, services::demo};

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/", get(demo::home))
        .route("/data1", get(demo::data1))
        .route("/data2", get(demo::data2).post(demo::data2))
        .route("/api/users", get(demo::users))
        .fallback(demo::not_found)
        .layer(state.authz_layer())
        .with_state(state.clone());

    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
        .merge(protected)
}
