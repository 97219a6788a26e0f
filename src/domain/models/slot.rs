use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::models::clock;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Occupied,
    Closed,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: String,
    pub number: u32,
    #[serde(with = "clock")]
    pub start_time: NaiveTime,
    #[serde(with = "clock")]
    pub end_time: NaiveTime,
    pub status: SlotStatus,
}

impl Slot {
    pub fn new(number: u32, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            id: slot_id(number),
            number,
            start_time,
            end_time,
            status: SlotStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }

    pub fn label(&self) -> String {
        format!(
            "{}–{}",
            self.start_time.format(clock::FORMAT),
            self.end_time.format(clock::FORMAT)
        )
    }
}

pub fn slot_id(number: u32) -> String {
    format!("slot-{}", number)
}
