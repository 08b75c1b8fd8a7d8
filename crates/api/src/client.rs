use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use momentum_core::model::{
    AssistantQuery, GenerateRequest, Roadmap, RoadmapId, TaskId, UserId, WeekData, WeekSummary,
};

/// Errors surfaced by RoadmapAPI adapters.
///
/// The split matters to callers: a `Status` failure means the backend saw the
/// request and rejected it, while `Transport` means its true state is unknown.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed with status {0}")]
    Status(StatusCode),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the backend could not be reached at all.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Client contract for the roadmap backend.
///
/// One implementation talks HTTP (`HttpRoadmapApi`); the in-memory fake
/// (`InMemoryRoadmapApi`) backs tests and prototyping.
#[async_trait]
pub trait RoadmapApi: Send + Sync {
    /// Fetch one week of a roadmap.
    ///
    /// Returns `Ok(None)` when the response parses but carries no `days`
    /// mapping; callers render that as "no data", never as an error.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` on a non-success response and
    /// `ApiError::Transport` when the backend is unreachable.
    async fn fetch_week(
        &self,
        roadmap_id: RoadmapId,
        week_number: u32,
    ) -> Result<Option<WeekData>, ApiError>;

    /// Persist a task's completion flag.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` when the backend rejects the mutation and
    /// `ApiError::Transport` when it cannot be reached.
    async fn update_task(&self, task_id: &TaskId, completed: bool) -> Result<(), ApiError>;

    /// List per-week progress summaries for a roadmap.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on request or decode failure.
    async fn list_weeks(&self, roadmap_id: RoadmapId) -> Result<Vec<WeekSummary>, ApiError>;

    /// List a user's roadmaps.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on request or decode failure.
    async fn list_roadmaps(&self, user_id: &UserId) -> Result<Vec<Roadmap>, ApiError>;

    /// Kick off roadmap generation on the backend.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the backend rejects the request.
    async fn generate_roadmap(&self, request: &GenerateRequest) -> Result<(), ApiError>;

    /// Delete a roadmap owned by the user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the backend rejects the deletion.
    async fn delete_roadmap(
        &self,
        roadmap_id: RoadmapId,
        user_id: &UserId,
    ) -> Result<(), ApiError>;

    /// Ask the assistant a question in roadmap context.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on request or decode failure.
    async fn ask_assistant(&self, query: &AssistantQuery) -> Result<String, ApiError>;
}
