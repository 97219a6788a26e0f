use axum::{extract::State, response::{IntoResponse, Redirect}, Json};
use crate::state::AppState;
use crate::api::extractors::live::LoadedLive;
use crate::api::dtos::requests::ReserveRequest;
use crate::domain::models::reservation::ReservationDraft;
use crate::domain::services::reservation::{
    checkout_url, validate_resolved, waiting_list_url, ReservationIssue,
};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

/// Looks up a submitted id. Blank counts as not selected; an id that matches
/// nothing records `unknown` and leaves the selection empty.
fn resolve<'a, T>(
    id: Option<&str>,
    lookup: impl FnOnce(&str) -> Option<&'a T>,
    unknown: ReservationIssue,
    unresolved: &mut Vec<ReservationIssue>,
) -> Option<&'a T> {
    let id = id.map(str::trim).filter(|id| !id.is_empty())?;
    let found = lookup(id);
    if found.is_none() {
        unresolved.push(unknown);
    }
    found
}

pub async fn reserve(
    State(state): State<Arc<AppState>>,
    LoadedLive(live): LoadedLive,
    Json(payload): Json<ReserveRequest>,
) -> Result<impl IntoResponse, AppError> {
    let slots = state.schedules.load(&live).await;
    let mut unresolved = Vec::new();

    let slot = resolve(payload.slot_id.as_deref(), |id| slots.iter().find(|s| s.id == id),
        ReservationIssue::UnknownSlot, &mut unresolved);
    let package = resolve(payload.package_id.as_deref(), |id| state.catalog.package(id),
        ReservationIssue::UnknownPackage, &mut unresolved);
    let advance = resolve(payload.advance_id.as_deref(), |id| state.catalog.advance(id),
        ReservationIssue::UnknownAdvance, &mut unresolved);

    if let Some(slot) = slot.filter(|s| !s.is_available()) {
        warn!("Slot {} ({}) of live {} is {:?}", slot.id, slot.label(), live.id, slot.status);
    }

    let draft = ReservationDraft {
        slot,
        team: payload.team,
        package,
        advance,
        accepted_terms: payload.accepted_terms,
    };

    if let Err(issues) = validate_resolved(live.status, &draft, &unresolved) {
        info!("Reservation for live {} rejected: {:?}", live.id, issues);
        return Err(AppError::Rejected(issues.iter().map(|i| i.to_string()).collect()));
    }

    let target = checkout_url(&state.config.checkout_path, &live.id, &draft);
    info!(
        "Reservation handed off to checkout: live {} slot {} team {}",
        live.id,
        draft.slot.map(|s| s.id.as_str()).unwrap_or_default(),
        draft.team.map(|t| t.summary()).unwrap_or_default(),
    );
    Ok(Redirect::to(&target))
}

pub async fn join_waiting_list(
    State(state): State<Arc<AppState>>,
    LoadedLive(live): LoadedLive,
) -> Result<impl IntoResponse, AppError> {
    if !live.status.offers_waiting_list() {
        return Err(AppError::Conflict(format!(
            "Live {} still has open slots; reserve one instead", live.id
        )));
    }

    info!("Waiting list hand-off for live {}", live.id);
    Ok(Redirect::to(&waiting_list_url(&state.config.waiting_list_path, &live.id)))
}
