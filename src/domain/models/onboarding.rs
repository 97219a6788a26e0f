use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Contact,
    Objective,
    PreSale,
    Plan,
    Confirmations,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 5] = [
        OnboardingStep::Contact,
        OnboardingStep::Objective,
        OnboardingStep::PreSale,
        OnboardingStep::Plan,
        OnboardingStep::Confirmations,
    ];

    pub fn number(self) -> u32 {
        match self {
            OnboardingStep::Contact => 1,
            OnboardingStep::Objective => 2,
            OnboardingStep::PreSale => 3,
            OnboardingStep::Plan => 4,
            OnboardingStep::Confirmations => 5,
        }
    }

    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }

    pub fn total() -> u32 {
        Self::ALL.len() as u32
    }
}

/// Brand intake form, as submitted by the client.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct OnboardingForm {
    pub name: String,
    pub instagram: String,
    pub whatsapp: String,
    pub city: String,
    pub objective: String,
    pub checklist: Vec<String>,
    pub selected_plan: String,
    pub accept_delivery: bool,
    pub accept_communication: bool,
}
