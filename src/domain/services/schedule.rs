use chrono::{Duration, NaiveDateTime};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::models::live::{LiveEvent, LiveStatus};
use crate::domain::models::slot::{Slot, SlotStatus};

pub const DEFAULT_SLOT_DURATION_MIN: i64 = 18;
pub const SLOT_BUFFER_MIN: i64 = 2;
/// A slot never outlasts a day.
pub const MAX_SLOT_DURATION_MIN: i64 = 24 * 60;

/// Slot ids taken by earlier bookings. Stands in for a real booking store.
pub const OCCUPIED_SLOT_IDS: [&str; 3] = ["slot-3", "slot-7", "slot-10"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPlan {
    pub duration: Duration,
    pub buffer: Duration,
}

impl SlotPlan {
    /// Durations outside `0..=MAX_SLOT_DURATION_MIN` are clamped.
    pub fn with_duration_min(duration_min: i64) -> Self {
        Self {
            duration: Duration::minutes(duration_min.clamp(0, MAX_SLOT_DURATION_MIN)),
            buffer: Duration::minutes(SLOT_BUFFER_MIN),
        }
    }

    pub fn step(&self) -> Duration {
        self.duration + self.buffer
    }
}

impl Default for SlotPlan {
    fn default() -> Self {
        Self::with_duration_min(DEFAULT_SLOT_DURATION_MIN)
    }
}

/// Tiles `[start, end)` with `duration` long slots separated by `buffer`.
/// Only complete steps are emitted, so a trailing remainder shorter than
/// `duration + buffer` produces no slot.
pub fn generate_slots(start: NaiveDateTime, end: NaiveDateTime, plan: &SlotPlan) -> Vec<Slot> {
    let mut slots = Vec::new();
    let step = plan.step();

    if plan.duration <= Duration::zero() || step <= Duration::zero() {
        return slots;
    }

    let mut cursor = start;
    let mut number = 1;
    while cursor + step <= end {
        slots.push(Slot::new(number, cursor.time(), (cursor + plan.duration).time()));
        cursor += step;
        number += 1;
    }

    slots
}

pub fn apply_occupancy(slots: &mut [Slot], occupied_ids: &[&str]) {
    for slot in slots.iter_mut() {
        if occupied_ids.contains(&slot.id.as_str()) {
            slot.status = SlotStatus::Occupied;
        }
    }
}

/// Slots of a full live cannot be picked; whatever is still free is closed.
pub fn close_free_slots(slots: &mut [Slot]) {
    for slot in slots.iter_mut().filter(|s| s.status == SlotStatus::Available) {
        slot.status = SlotStatus::Closed;
    }
}

pub fn build_schedule(live: &LiveEvent, plan: &SlotPlan, occupied_ids: &[&str]) -> Vec<Slot> {
    let (start, end) = live.window();
    let mut slots = generate_slots(start, end, plan);
    apply_occupancy(&mut slots, occupied_ids);
    if live.status == LiveStatus::Full {
        close_free_slots(&mut slots);
    }
    slots
}

/// Per-live schedules. A live's slots are generated the first time it is
/// loaded and served from here until [`ScheduleCache::reload`] is called.
pub struct ScheduleCache {
    plan: SlotPlan,
    occupied_ids: Vec<&'static str>,
    entries: RwLock<HashMap<String, Arc<Vec<Slot>>>>,
}

impl ScheduleCache {
    pub fn new(plan: SlotPlan, occupied_ids: &[&'static str]) -> Self {
        Self {
            plan,
            occupied_ids: occupied_ids.to_vec(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn plan(&self) -> &SlotPlan {
        &self.plan
    }

    pub async fn load(&self, live: &LiveEvent) -> Arc<Vec<Slot>> {
        if let Some(slots) = self.entries.read().await.get(&live.id) {
            return slots.clone();
        }

        let mut entries = self.entries.write().await;
        // Another request may have generated it while we waited for the lock.
        if let Some(slots) = entries.get(&live.id) {
            return slots.clone();
        }

        let slots = Arc::new(build_schedule(live, &self.plan, &self.occupied_ids));
        debug!("Generated {} slots for live {}", slots.len(), live.id);
        entries.insert(live.id.clone(), slots.clone());
        slots
    }

    pub async fn reload(&self, live: &LiveEvent) -> Arc<Vec<Slot>> {
        let slots = Arc::new(build_schedule(live, &self.plan, &self.occupied_ids));
        self.entries.write().await.insert(live.id.clone(), slots.clone());
        info!("Schedule for live {} reloaded ({} slots)", live.id, slots.len());
        slots
    }

    #[cfg(test)]
    pub async fn is_loaded(&self, live_id: &str) -> bool {
        self.entries.read().await.contains_key(live_id)
    }
}
