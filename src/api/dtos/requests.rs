use crate::domain::models::reservation::TeamSelection;
use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct AgendaQuery {
    pub category: Option<String>,
    pub status: Option<String>,
}

/// The sales figure arrives as whatever the user typed; a bare JSON number is accepted too.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum SalesInput {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
pub struct EstimateRequest {
    pub sales: Option<SalesInput>,
    pub package_id: Option<String>,
    pub advance_id: Option<String>,
}

#[derive(Deserialize)]
pub struct ReserveRequest {
    pub slot_id: Option<String>,
    pub package_id: Option<String>,
    pub advance_id: Option<String>,
    pub team: Option<TeamSelection>,
    #[serde(default)]
    pub accepted_terms: bool,
}
