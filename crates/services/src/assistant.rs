use std::sync::Arc;

use api::RoadmapApi;
use momentum_core::model::{AssistantQuery, RoadmapId};

use crate::auth::AuthSession;
use crate::error::AssistantError;

/// Contextual question-answering over a roadmap.
#[derive(Clone)]
pub struct AssistantService {
    api: Arc<dyn RoadmapApi>,
}

impl AssistantService {
    #[must_use]
    pub fn new(api: Arc<dyn RoadmapApi>) -> Self {
        Self { api }
    }

    /// Ask a question in the context of a roadmap, optionally narrowed to a
    /// week and day.
    ///
    /// # Errors
    ///
    /// Returns `NotSignedIn` without a session user, `EmptyQuestion` for a
    /// blank question, or the backend's error.
    pub async fn ask(
        &self,
        session: &dyn AuthSession,
        roadmap_id: RoadmapId,
        question: &str,
        week_number: Option<u32>,
        day_number: Option<u32>,
    ) -> Result<String, AssistantError> {
        let user = session.current_user().ok_or(AssistantError::NotSignedIn)?;
        let question = question.trim();
        if question.is_empty() {
            return Err(AssistantError::EmptyQuestion);
        }

        let query = AssistantQuery {
            user_id: user,
            roadmap_id,
            input_data: question.to_string(),
            week_number,
            day_number,
        };
        Ok(self.api.ask_assistant(&query).await?)
    }
}
