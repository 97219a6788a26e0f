use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::models::clock;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LiveStatus {
    Available,
    FewLeft,
    Full,
    Waiting,
}

impl LiveStatus {
    /// Only a full live hides slot selection; it offers the waiting list instead.
    pub fn allows_slot_selection(self) -> bool {
        !matches!(self, LiveStatus::Full)
    }

    pub fn offers_waiting_list(self) -> bool {
        matches!(self, LiveStatus::Full)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LiveStatus::Available => "available",
            LiveStatus::FewLeft => "few-left",
            LiveStatus::Full => "full",
            LiveStatus::Waiting => "waiting",
        }
    }
}

impl fmt::Display for LiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown live status '{}'", self.0)
    }
}

impl FromStr for LiveStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "available" => Ok(LiveStatus::Available),
            "few-left" => Ok(LiveStatus::FewLeft),
            "full" => Ok(LiveStatus::Full),
            "waiting" => Ok(LiveStatus::Waiting),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LiveEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "clock")]
    pub start_time: NaiveTime,
    #[serde(with = "clock")]
    pub end_time: NaiveTime,
    pub total_slots: u32,
    pub available_slots: u32,
    pub status: LiveStatus,
    pub description: String,
    pub category: String,
    pub location: String,
}

impl LiveEvent {
    /// Broadcast window on the live's date. An end time before the start time
    /// runs past midnight into the next day.
    pub fn window(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.date.and_time(self.start_time);
        let mut end = self.date.and_time(self.end_time);
        if end < start {
            end += Duration::days(1);
        }
        (start, end)
    }

    pub fn duration_minutes(&self) -> i64 {
        let (start, end) = self.window();
        (end - start).num_minutes()
    }
}
