use std::env;

use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use momentum_core::model::{
    AssistantQuery, GenerateRequest, Roadmap, RoadmapId, Task, TaskId, UserId, WeekData,
    WeekSummary,
};

use crate::client::{ApiError, RoadmapApi};

/// Where the roadmap backend lives.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Read the backend location from `MOMENTUM_API_URL`, defaulting to a
    /// local development server.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("MOMENTUM_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "http://localhost:8000".into());
        Self { base_url }
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Reqwest-backed `RoadmapApi`.
///
/// These endpoints carry no auth token; identity rides as a `user_id`
/// parameter where the backend needs it.
#[derive(Clone)]
pub struct HttpRoadmapApi {
    client: Client,
    base_url: String,
}

impl HttpRoadmapApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl RoadmapApi for HttpRoadmapApi {
    async fn fetch_week(
        &self,
        roadmap_id: RoadmapId,
        week_number: u32,
    ) -> Result<Option<WeekData>, ApiError> {
        let url = self.url(&format!("/roadmap/{roadmap_id}/week/{week_number}"));
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let raw: RawWeek = response.json().await?;
        Ok(decode_week(raw, week_number))
    }

    async fn update_task(&self, task_id: &TaskId, completed: bool) -> Result<(), ApiError> {
        let url = self.url("/task/update");
        let body = TaskUpdateBody { task_id, completed };
        let response = self.client.post(url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    async fn list_weeks(&self, roadmap_id: RoadmapId) -> Result<Vec<WeekSummary>, ApiError> {
        let url = self.url(&format!("/roadmap/{roadmap_id}/weeks"));
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let weeks: Option<Vec<WeekSummary>> = response.json().await?;
        Ok(weeks.unwrap_or_default())
    }

    async fn list_roadmaps(&self, user_id: &UserId) -> Result<Vec<Roadmap>, ApiError> {
        let url = self.url("/roadmaps");
        let response = self
            .client
            .get(url)
            .query(&[("user_id", user_id.as_str())])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        // The backend answers `null` for a user with no roadmaps.
        let roadmaps: Option<Vec<Roadmap>> = response.json().await?;
        Ok(roadmaps.unwrap_or_default())
    }

    async fn generate_roadmap(&self, request: &GenerateRequest) -> Result<(), ApiError> {
        let url = self.url("/generate_roadmap");
        let response = self.client.post(url).json(request).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    async fn delete_roadmap(
        &self,
        roadmap_id: RoadmapId,
        user_id: &UserId,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/roadmap/{roadmap_id}"));
        let response = self
            .client
            .delete(url)
            .query(&[("user_id", user_id.as_str())])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    async fn ask_assistant(&self, query: &AssistantQuery) -> Result<String, ApiError> {
        let url = self.url("/ask-assistant");
        let response = self.client.post(url).json(query).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let body: AskResponse = response.json().await?;
        Ok(body.response)
    }
}

/// Week payload as the backend actually sends it: every field may be absent.
#[derive(Debug, Deserialize)]
struct RawWeek {
    #[serde(default)]
    week_number: Option<u32>,
    #[serde(default)]
    days: Option<IndexMap<String, Vec<Task>>>,
}

/// A payload without a `days` mapping is "no data", not an error. Progress is
/// recomputed from the tasks rather than trusted from the wire.
fn decode_week(raw: RawWeek, requested_week: u32) -> Option<WeekData> {
    let days = raw.days?;
    Some(WeekData::new(
        raw.week_number.unwrap_or(requested_week),
        days,
    ))
}

#[derive(Debug, Serialize)]
struct TaskUpdateBody<'a> {
    task_id: &'a TaskId,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    response: String,
}
