use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use std::sync::Arc;

pub async fn get_catalog(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.as_ref().clone())
}
