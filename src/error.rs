use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Live not found: {live_id}")]
    LiveNotFound { live_id: String, back_link: String },
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Request rejected: {}", .0.join("; "))]
    Rejected(Vec<String>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::LiveNotFound { live_id, back_link } => {
                return (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "error": format!("Live {} not found", live_id),
                        "back_link": back_link,
                    })),
                ).into_response();
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Rejected(messages) => {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "error": "Request is incomplete",
                        "messages": messages,
                    })),
                ).into_response();
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
