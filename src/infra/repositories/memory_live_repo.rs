use crate::domain::{models::live::LiveEvent, ports::LiveRepository};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only live catalog held in memory for the lifetime of the process.
pub struct MemoryLiveRepo {
    lives: Vec<LiveEvent>,
}

impl MemoryLiveRepo {
    pub fn new(mut lives: Vec<LiveEvent>) -> Self {
        lives.sort_by(|a, b| (a.date, a.start_time).cmp(&(b.date, b.start_time)));
        Self { lives }
    }
}

#[async_trait]
impl LiveRepository for MemoryLiveRepo {
    async fn find_by_id(&self, id: &str) -> Result<Option<LiveEvent>, AppError> {
        Ok(self.lives.iter().find(|l| l.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<LiveEvent>, AppError> {
        Ok(self.lives.clone())
    }
}
