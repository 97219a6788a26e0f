use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::collections::HashMap;
use crate::domain::models::live::LiveEvent;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

/// The live named by the `{live_id}` path segment.
pub struct LoadedLive(pub LiveEvent);

impl FromRequestParts<Arc<AppState>> for LoadedLive {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let params: Path<HashMap<String, String>> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Validation("Missing live id".into()))?;

        let live_id = params.get("live_id")
            .ok_or(AppError::Validation("Missing live id".into()))?;

        match state.live_repo.find_by_id(live_id).await? {
            Some(live) => Ok(LoadedLive(live)),
            None => Err(AppError::LiveNotFound {
                live_id: live_id.clone(),
                back_link: state.config.agenda_path.clone(),
            }),
        }
    }
}
