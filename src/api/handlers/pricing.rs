use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::{EstimateRequest, SalesInput}, responses::EstimateResponse};
use crate::domain::services::pricing::{estimate, parse_sales, DEFICIT_NOTE};
use crate::error::AppError;
use std::sync::Arc;
use tracing::debug;

pub async fn estimate_commission(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<EstimateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let package = match payload.package_id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => Some(state.catalog.package(id)
            .ok_or(AppError::Validation(format!("Unknown package '{}'", id)))?),
        None => None,
    };

    let advance = match payload.advance_id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => Some(state.catalog.advance(id)
            .ok_or(AppError::Validation(format!("Unknown advance option '{}'", id)))?),
        None => None,
    };

    let sales = match payload.sales {
        Some(SalesInput::Number(n)) if n.is_finite() && n >= 0.0 => Some(n),
        Some(SalesInput::Number(_)) => None,
        Some(SalesInput::Text(raw)) => parse_sales(&raw),
        None => None,
    };

    let est = estimate(sales, package, advance);
    debug!("Estimate for sales {:?}: {:?}", sales, est);

    Ok(Json(EstimateResponse {
        computable: est.computable,
        commission: est.commission,
        balance: est.balance,
        is_deficit: est.is_deficit,
        note: est.is_deficit.then_some(DEFICIT_NOTE),
    }))
}
