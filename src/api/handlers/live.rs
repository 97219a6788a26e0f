use axum::{extract::{State, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::live::LoadedLive;
use crate::api::dtos::{
    requests::AgendaQuery,
    responses::{AgendaResponse, LiveDetailResponse, SlotsResponse},
};
use crate::domain::models::live::{LiveEvent, LiveStatus};
use crate::domain::models::slot::Slot;
use crate::domain::services::agenda::{self, AgendaFilter};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

fn parse_filter(query: AgendaQuery) -> Result<AgendaFilter, AppError> {
    let wanted = |value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !agenda::is_unfiltered(v))
    };

    let status = match wanted(query.status) {
        Some(raw) => Some(raw.parse::<LiveStatus>().map_err(|e| AppError::Validation(e.to_string()))?),
        None => None,
    };

    Ok(AgendaFilter {
        category: wanted(query.category),
        status,
    })
}

pub async fn list_lives(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AgendaQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = parse_filter(query)?;
    let lives = state.live_repo.list().await?;

    let matching: Vec<LiveEvent> = agenda::filter_lives(&lives, &filter)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(AgendaResponse {
        categories: agenda::categories(&lives),
        lives: matching,
    }))
}

pub async fn get_live(
    State(state): State<Arc<AppState>>,
    LoadedLive(live): LoadedLive,
) -> Result<impl IntoResponse, AppError> {
    let slots = state.schedules.load(&live).await;

    Ok(Json(LiveDetailResponse {
        duration_min: live.duration_minutes(),
        slot_selection_enabled: live.status.allows_slot_selection(),
        waiting_list_enabled: live.status.offers_waiting_list(),
        open_slots: slots.iter().filter(|s| s.is_available()).count(),
        generated_slots: slots.len(),
        live,
    }))
}

fn slots_response(state: &AppState, live: &LiveEvent, slots: &[Slot]) -> SlotsResponse {
    let plan = state.schedules.plan();
    SlotsResponse {
        live_id: live.id.clone(),
        selectable: live.status.allows_slot_selection(),
        slot_duration_min: plan.duration.num_minutes(),
        buffer_min: plan.buffer.num_minutes(),
        slots: slots.to_vec(),
    }
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    LoadedLive(live): LoadedLive,
) -> Result<impl IntoResponse, AppError> {
    let slots = state.schedules.load(&live).await;
    Ok(Json(slots_response(&state, &live, &slots)))
}

pub async fn reload_slots(
    State(state): State<Arc<AppState>>,
    LoadedLive(live): LoadedLive,
) -> Result<impl IntoResponse, AppError> {
    info!("Reloading schedule for live {}", live.id);
    let slots = state.schedules.reload(&live).await;
    Ok(Json(slots_response(&state, &live, &slots)))
}
