use std::sync::Arc;

use api::{ApiError, RoadmapApi};
use momentum_core::model::{RoadmapId, TaskId, WeekSummary};

use super::board::WeekBoard;

/// Async facade between the week view and the backend.
///
/// Owns the API handle so views never see HTTP. All state transitions stay
/// in `WeekBoard`; this service only moves bytes.
#[derive(Clone)]
pub struct WeekService {
    api: Arc<dyn RoadmapApi>,
}

impl WeekService {
    #[must_use]
    pub fn new(api: Arc<dyn RoadmapApi>) -> Self {
        Self { api }
    }

    /// Load one week and return the resulting board.
    ///
    /// A `None` week number is the absence marker: the load is skipped
    /// entirely (no request goes out) and the board stays in `Loading`.
    pub async fn load(&self, roadmap_id: RoadmapId, week_number: Option<u32>) -> WeekBoard {
        let mut board = WeekBoard::new();
        let Some(week_number) = week_number else {
            return board;
        };

        let result = self.api.fetch_week(roadmap_id, week_number).await;
        if let Err(err) = &result {
            tracing::warn!(%roadmap_id, week_number, error = %err, "week load failed");
        }
        board.apply_load(result);
        board
    }

    /// List per-week progress summaries for a roadmap.
    ///
    /// # Errors
    ///
    /// Returns the backend's `ApiError` unchanged.
    pub async fn list_weeks(
        &self,
        roadmap_id: RoadmapId,
    ) -> Result<Vec<WeekSummary>, ApiError> {
        let result = self.api.list_weeks(roadmap_id).await;
        if let Err(err) = &result {
            tracing::warn!(%roadmap_id, error = %err, "weeks list failed");
        }
        result
    }

    /// Send one task-completion write. No retry, no queue, no debounce;
    /// the caller resolves the pending toggle with whatever comes back.
    ///
    /// # Errors
    ///
    /// Returns the backend's `ApiError` unchanged.
    pub async fn push_toggle(&self, task_id: &TaskId, completed: bool) -> Result<(), ApiError> {
        let result = self.api.update_task(task_id, completed).await;
        if let Err(err) = &result {
            tracing::warn!(%task_id, completed, error = %err, "task update failed");
        }
        result
    }
}
