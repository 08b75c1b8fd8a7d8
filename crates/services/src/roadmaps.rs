use std::sync::Arc;

use api::RoadmapApi;
use momentum_core::model::{GenerateRequest, Level, Roadmap, RoadmapId};

use crate::auth::AuthSession;
use crate::error::RoadmapServiceError;

/// Dashboard and generate-form facade.
///
/// Every operation is scoped to the signed-in user via the injected
/// session accessor; with nobody signed in the call fails before any
/// request is made.
#[derive(Clone)]
pub struct RoadmapService {
    api: Arc<dyn RoadmapApi>,
}

impl RoadmapService {
    #[must_use]
    pub fn new(api: Arc<dyn RoadmapApi>) -> Self {
        Self { api }
    }

    /// List the current user's roadmaps.
    ///
    /// # Errors
    ///
    /// Returns `NotSignedIn` without a session user, or the backend's error.
    pub async fn list(
        &self,
        session: &dyn AuthSession,
    ) -> Result<Vec<Roadmap>, RoadmapServiceError> {
        let user = session
            .current_user()
            .ok_or(RoadmapServiceError::NotSignedIn)?;
        Ok(self.api.list_roadmaps(&user).await?)
    }

    /// Delete one of the current user's roadmaps.
    ///
    /// # Errors
    ///
    /// Returns `NotSignedIn` without a session user, or the backend's error;
    /// on failure the caller's list is left untouched.
    pub async fn delete(
        &self,
        session: &dyn AuthSession,
        roadmap_id: RoadmapId,
    ) -> Result<(), RoadmapServiceError> {
        let user = session
            .current_user()
            .ok_or(RoadmapServiceError::NotSignedIn)?;
        let result = self.api.delete_roadmap(roadmap_id, &user).await;
        if let Err(err) = &result {
            tracing::warn!(%roadmap_id, error = %err, "roadmap delete failed");
        }
        Ok(result?)
    }

    /// Validate the generate form and submit it.
    ///
    /// # Errors
    ///
    /// Returns `NotSignedIn` without a session user, `Invalid` when the form
    /// fails validation, or the backend's error.
    pub async fn generate(
        &self,
        session: &dyn AuthSession,
        goal: &str,
        duration_weeks: u32,
        daily_hours: f32,
        level: Level,
    ) -> Result<(), RoadmapServiceError> {
        let user = session
            .current_user()
            .ok_or(RoadmapServiceError::NotSignedIn)?;
        let request = GenerateRequest::new(user, goal, duration_weeks, daily_hours, level)?;
        Ok(self.api.generate_roadmap(&request).await?)
    }
}
