use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::domain::models::catalog::Catalog;
use crate::domain::services::schedule::{ScheduleCache, SlotPlan, OCCUPIED_SLOT_IDS};
use crate::infra::repositories::memory_live_repo::MemoryLiveRepo;
use crate::infra::seed::seed_lives;
use crate::state::AppState;

pub fn bootstrap_state(config: &Config) -> AppState {
    let lives = seed_lives();
    info!("Loading {} seeded lives into the in-memory catalog", lives.len());

    let plan = SlotPlan::with_duration_min(config.slot_duration_min);
    info!(
        "Slot plan: {} min slots with {} min buffer",
        plan.duration.num_minutes(),
        plan.buffer.num_minutes()
    );

    AppState {
        config: config.clone(),
        live_repo: Arc::new(MemoryLiveRepo::new(lives)),
        catalog: Arc::new(Catalog::standard()),
        schedules: Arc::new(ScheduleCache::new(plan, &OCCUPIED_SLOT_IDS)),
    }
}
