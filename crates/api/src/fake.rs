use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use momentum_core::model::{
    AssistantQuery, GenerateRequest, Roadmap, RoadmapId, TaskId, UserId, WeekData, WeekSummary,
};

use crate::client::{ApiError, RoadmapApi};

/// How a fake operation should fail, if at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailureMode {
    #[default]
    None,
    /// Backend reached the request and rejected it.
    Status(StatusCode),
    /// Backend never saw the request.
    Transport,
}

impl FailureMode {
    fn check(self) -> Result<(), ApiError> {
        match self {
            FailureMode::None => Ok(()),
            FailureMode::Status(status) => Err(ApiError::Status(status)),
            FailureMode::Transport => Err(ApiError::Transport("connection refused".into())),
        }
    }
}

#[derive(Default)]
struct Inner {
    weeks: HashMap<(RoadmapId, u32), WeekData>,
    malformed_weeks: Vec<(RoadmapId, u32)>,
    week_summaries: HashMap<RoadmapId, Vec<WeekSummary>>,
    roadmaps: HashMap<UserId, Vec<Roadmap>>,
    assistant_reply: String,
    updates: Vec<(TaskId, bool)>,
    generated: Vec<GenerateRequest>,
    fetch_failure: FailureMode,
    update_failure: FailureMode,
    other_failure: FailureMode,
}

/// Seedable in-memory `RoadmapApi` for tests and prototyping.
///
/// Successful `update_task` calls are applied to the stored week, so a
/// reload observes the same state a real backend would. Failure injection
/// covers reads (`set_fetch_failure`), task writes (`set_update_failure`)
/// and everything else (`set_other_failure`).
#[derive(Clone, Default)]
pub struct InMemoryRoadmapApi {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryRoadmapApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, ApiError> {
        self.inner
            .lock()
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    pub fn insert_week(&self, roadmap_id: RoadmapId, week: WeekData) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.weeks.insert((roadmap_id, week.week_number), week);
        }
    }

    /// Make `fetch_week` answer 200 with a body that has no `days` mapping.
    pub fn insert_malformed_week(&self, roadmap_id: RoadmapId, week_number: u32) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.malformed_weeks.push((roadmap_id, week_number));
        }
    }

    pub fn insert_week_summaries(&self, roadmap_id: RoadmapId, summaries: Vec<WeekSummary>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.week_summaries.insert(roadmap_id, summaries);
        }
    }

    pub fn insert_roadmaps(&self, user_id: UserId, roadmaps: Vec<Roadmap>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.roadmaps.insert(user_id, roadmaps);
        }
    }

    pub fn set_assistant_reply(&self, reply: impl Into<String>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.assistant_reply = reply.into();
        }
    }

    pub fn set_fetch_failure(&self, mode: FailureMode) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.fetch_failure = mode;
        }
    }

    pub fn set_update_failure(&self, mode: FailureMode) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.update_failure = mode;
        }
    }

    pub fn set_other_failure(&self, mode: FailureMode) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.other_failure = mode;
        }
    }

    /// Task updates the fake accepted, in arrival order.
    #[must_use]
    pub fn recorded_updates(&self) -> Vec<(TaskId, bool)> {
        self.inner
            .lock()
            .map(|inner| inner.updates.clone())
            .unwrap_or_default()
    }

    /// Generation requests the fake accepted.
    #[must_use]
    pub fn recorded_generates(&self) -> Vec<GenerateRequest> {
        self.inner
            .lock()
            .map(|inner| inner.generated.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RoadmapApi for InMemoryRoadmapApi {
    async fn fetch_week(
        &self,
        roadmap_id: RoadmapId,
        week_number: u32,
    ) -> Result<Option<WeekData>, ApiError> {
        let inner = self.lock()?;
        inner.fetch_failure.check()?;
        if inner.malformed_weeks.contains(&(roadmap_id, week_number)) {
            return Ok(None);
        }
        match inner.weeks.get(&(roadmap_id, week_number)) {
            Some(week) => Ok(Some(week.clone())),
            None => Err(ApiError::Status(StatusCode::NOT_FOUND)),
        }
    }

    async fn update_task(&self, task_id: &TaskId, completed: bool) -> Result<(), ApiError> {
        let mut inner = self.lock()?;
        inner.update_failure.check()?;
        inner.updates.push((task_id.clone(), completed));
        for week in inner.weeks.values_mut() {
            week.set_task_completed(task_id, completed);
        }
        Ok(())
    }

    async fn list_weeks(&self, roadmap_id: RoadmapId) -> Result<Vec<WeekSummary>, ApiError> {
        let inner = self.lock()?;
        inner.other_failure.check()?;
        Ok(inner
            .week_summaries
            .get(&roadmap_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_roadmaps(&self, user_id: &UserId) -> Result<Vec<Roadmap>, ApiError> {
        let inner = self.lock()?;
        inner.other_failure.check()?;
        Ok(inner.roadmaps.get(user_id).cloned().unwrap_or_default())
    }

    async fn generate_roadmap(&self, request: &GenerateRequest) -> Result<(), ApiError> {
        let mut inner = self.lock()?;
        inner.other_failure.check()?;
        inner.generated.push(request.clone());
        Ok(())
    }

    async fn delete_roadmap(
        &self,
        roadmap_id: RoadmapId,
        user_id: &UserId,
    ) -> Result<(), ApiError> {
        let mut inner = self.lock()?;
        inner.other_failure.check()?;
        match inner.roadmaps.get_mut(user_id) {
            Some(roadmaps) => {
                roadmaps.retain(|roadmap| roadmap.roadmap_id != roadmap_id);
                Ok(())
            }
            None => Err(ApiError::Status(StatusCode::NOT_FOUND)),
        }
    }

    async fn ask_assistant(&self, query: &AssistantQuery) -> Result<String, ApiError> {
        let inner = self.lock()?;
        inner.other_failure.check()?;
        let _ = query;
        Ok(inner.assistant_reply.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;
    use momentum_core::model::Task;

    fn seeded() -> (InMemoryRoadmapApi, RoadmapId) {
        let api = InMemoryRoadmapApi::new();
        let roadmap_id = RoadmapId::new(1);
        let week = WeekData::new(
            1,
            indexmap! {
                "1".to_string() => vec![
                    Task::new(TaskId::new("a"), "Read ch.1", true),
                    Task::new(TaskId::new("b"), "Exercise", false),
                ],
            },
        );
        api.insert_week(roadmap_id, week);
        (api, roadmap_id)
    }

    #[tokio::test]
    async fn update_task_is_visible_on_reload() {
        let (api, roadmap_id) = seeded();
        api.update_task(&TaskId::new("b"), true).await.unwrap();

        let week = api.fetch_week(roadmap_id, 1).await.unwrap().unwrap();
        assert!(week.task(&TaskId::new("b")).unwrap().completed);
        assert_eq!(week.progress, 100);
        assert_eq!(api.recorded_updates(), vec![(TaskId::new("b"), true)]);
    }

    #[tokio::test]
    async fn malformed_week_yields_none() {
        let api = InMemoryRoadmapApi::new();
        api.insert_malformed_week(RoadmapId::new(9), 2);
        let fetched = api.fetch_week(RoadmapId::new(9), 2).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn injected_failures_surface_as_api_errors() {
        let (api, roadmap_id) = seeded();

        api.set_fetch_failure(FailureMode::Transport);
        let err = api.fetch_week(roadmap_id, 1).await.unwrap_err();
        assert!(err.is_transport());

        api.set_update_failure(FailureMode::Status(StatusCode::INTERNAL_SERVER_ERROR));
        let err = api.update_task(&TaskId::new("b"), true).await.unwrap_err();
        assert!(matches!(err, ApiError::Status(_)));
        assert!(api.recorded_updates().is_empty());
    }
}
