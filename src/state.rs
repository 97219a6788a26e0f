use std::sync::Arc;
use crate::config::Config;
use crate::domain::models::catalog::Catalog;
use crate::domain::ports::LiveRepository;
use crate::domain::services::schedule::ScheduleCache;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub live_repo: Arc<dyn LiveRepository>,
    pub catalog: Arc<Catalog>,
    pub schedules: Arc<ScheduleCache>,
}
