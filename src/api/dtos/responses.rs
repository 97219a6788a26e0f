use crate::domain::models::live::LiveEvent;
use crate::domain::models::onboarding::OnboardingStep;
use crate::domain::models::slot::Slot;
use serde::Serialize;

#[derive(Serialize)]
pub struct AgendaResponse {
    pub categories: Vec<String>,
    pub lives: Vec<LiveEvent>,
}

#[derive(Serialize)]
pub struct LiveDetailResponse {
    pub live: LiveEvent,
    pub duration_min: i64,
    pub slot_selection_enabled: bool,
    pub waiting_list_enabled: bool,
    pub open_slots: usize,
    pub generated_slots: usize,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub live_id: String,
    pub selectable: bool,
    pub slot_duration_min: i64,
    pub buffer_min: i64,
    pub slots: Vec<Slot>,
}

#[derive(Serialize)]
pub struct EstimateResponse {
    pub computable: bool,
    pub commission: f64,
    pub balance: f64,
    pub is_deficit: bool,
    pub note: Option<&'static str>,
}

#[derive(Serialize)]
pub struct StepValidResponse {
    pub step: OnboardingStep,
    pub step_number: u32,
    pub progress_percent: u32,
}
