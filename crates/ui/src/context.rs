use std::sync::Arc;

use services::{AssistantService, AuthSession, RoadmapService, WeekService};

/// UI-facing application surface, provided by the composition root
/// (`crates/app`) or by the test harness.
pub trait UiApp: Send + Sync {
    fn session(&self) -> Arc<dyn AuthSession>;
    fn week_service(&self) -> Arc<WeekService>;
    fn roadmap_service(&self) -> Arc<RoadmapService>;
    fn assistant_service(&self) -> Arc<AssistantService>;
}

#[derive(Clone)]
pub struct AppContext {
    session: Arc<dyn AuthSession>,
    week_service: Arc<WeekService>,
    roadmap_service: Arc<RoadmapService>,
    assistant_service: Arc<AssistantService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            week_service: app.week_service(),
            roadmap_service: app.roadmap_service(),
            assistant_service: app.assistant_service(),
        }
    }

    #[must_use]
    pub fn session(&self) -> Arc<dyn AuthSession> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn week_service(&self) -> Arc<WeekService> {
        Arc::clone(&self.week_service)
    }

    #[must_use]
    pub fn roadmap_service(&self) -> Arc<RoadmapService> {
        Arc::clone(&self.roadmap_service)
    }

    #[must_use]
    pub fn assistant_service(&self) -> Arc<AssistantService> {
        Arc::clone(&self.assistant_service)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
