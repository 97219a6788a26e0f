use serde::{Deserialize, Serialize};

use crate::domain::models::catalog::{AdvancePayment, PackageOption};
use crate::domain::models::slot::Slot;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TeamCore {
    Seller,
    Coach,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TeamSelection {
    pub team: TeamCore,
    #[serde(default)]
    pub delivery: bool,
}

impl TeamSelection {
    pub fn summary(&self) -> String {
        let team = match self.team {
            TeamCore::Seller => "Seller",
            TeamCore::Coach => "Coach",
        };
        if self.delivery {
            format!("{} + Delivery", team)
        } else {
            team.to_string()
        }
    }
}

/// In-progress selection for one live. Never stored; it only exists while a
/// single request is being validated.
#[derive(Debug, Clone, Default)]
pub struct ReservationDraft<'a> {
    pub slot: Option<&'a Slot>,
    pub team: Option<TeamSelection>,
    pub package: Option<&'a PackageOption>,
    pub advance: Option<&'a AdvancePayment>,
    pub accepted_terms: bool,
}
