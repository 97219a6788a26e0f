use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::StepValidResponse;
use crate::domain::models::onboarding::{OnboardingForm, OnboardingStep};
use crate::domain::services::onboarding::{progress_percent, validate_step, validate_submission};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub async fn validate_onboarding_step(
    State(state): State<Arc<AppState>>,
    Path(step_number): Path<u32>,
    Json(form): Json<OnboardingForm>,
) -> Result<impl IntoResponse, AppError> {
    let step = OnboardingStep::from_number(step_number)
        .ok_or(AppError::Validation(format!(
            "Step must be between 1 and {}", OnboardingStep::total()
        )))?;

    validate_step(step, &form, &state.catalog)
        .map_err(|issue| AppError::Rejected(vec![issue.to_string()]))?;

    Ok(Json(StepValidResponse {
        step,
        step_number: step.number(),
        progress_percent: progress_percent(step),
    }))
}

pub async fn submit_onboarding(
    State(state): State<Arc<AppState>>,
    Json(form): Json<OnboardingForm>,
) -> Result<impl IntoResponse, AppError> {
    validate_submission(&form, &state.catalog).map_err(|failures| {
        AppError::Rejected(
            failures.into_iter()
                .map(|f| format!("Step {}: {}", f.step.number(), f.message))
                .collect(),
        )
    })?;

    info!("Onboarding request received from brand '{}'", form.name.trim());
    Ok(Json(json!({
        "status": "received",
        "brand": form.name.trim(),
    })))
}
