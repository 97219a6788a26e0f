use crate::domain::models::live::LiveEvent;
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait LiveRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<LiveEvent>, AppError>;
    /// Lives ordered by date, then start time.
    async fn list(&self) -> Result<Vec<LiveEvent>, AppError>;
}
