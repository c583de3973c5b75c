//! Demo application handlers that sit behind the authz layer.
//!
//! They never see a refused request; reaching them means the policy allowed it.

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::app_state::AppState;
use crate::authz::extract::subject_from_headers;

fn user_of(state: &AppState, headers: &HeaderMap) -> String {
    subject_from_headers(headers, state.subject_header())
}

pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> String {
    format!("Welcome to the home page! User: {}", user_of(&state, &headers))
}

pub async fn data1(State(state): State<AppState>, headers: HeaderMap) -> String {
    format!("Data1 page - User: {}", user_of(&state, &headers))
}

pub async fn data2(State(state): State<AppState>, method: Method, headers: HeaderMap) -> String {
    format!("Data2 page - User: {}, Method: {}", user_of(&state, &headers), method)
}

pub async fn users(State(state): State<AppState>, headers: HeaderMap) -> Json<serde_json::Value> {
    Json(json!({
        "api": "users",
        "user": user_of(&state, &headers),
    }))
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, format!("Page not found: {}", uri.path()))
}
