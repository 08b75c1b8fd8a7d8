use std::sync::Arc;

use api::InMemoryRoadmapApi;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use momentum_core::model::UserId;
use services::{AssistantService, AuthSession, FixedSession, RoadmapService, WeekService};

use crate::context::{UiApp, build_app_context};
use crate::views::{AssistantView, DashboardView, GenerateView, WeekView, WeeksView};

pub const TEST_USER: &str = "user-1";

struct TestApp {
    session: Arc<dyn AuthSession>,
    week_service: Arc<WeekService>,
    roadmap_service: Arc<RoadmapService>,
    assistant_service: Arc<AssistantService>,
}

impl UiApp for TestApp {
    fn session(&self) -> Arc<dyn AuthSession> {
        Arc::clone(&self.session)
    }

    fn week_service(&self) -> Arc<WeekService> {
        Arc::clone(&self.week_service)
    }

    fn roadmap_service(&self) -> Arc<RoadmapService> {
        Arc::clone(&self.roadmap_service)
    }

    fn assistant_service(&self) -> Arc<AssistantService> {
        Arc::clone(&self.assistant_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    Generate,
    Assistant,
    Weeks(u64),
    Week(u64, u32),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Generate => rsx! { GenerateView {} },
        ViewKind::Assistant => rsx! { AssistantView {} },
        ViewKind::Weeks(roadmap_id) => rsx! { WeeksView { roadmap_id } },
        ViewKind::Week(roadmap_id, week) => rsx! { WeekView { roadmap_id, week } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: InMemoryRoadmapApi,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Mount one view over a seeded fake backend with a signed-in user.
pub fn setup_view_harness(view: ViewKind, api: InMemoryRoadmapApi) -> ViewHarness {
    setup_view_harness_with_session(
        view,
        api,
        Arc::new(FixedSession::signed_in(UserId::new(TEST_USER))),
    )
}

pub fn setup_view_harness_with_session(
    view: ViewKind,
    api: InMemoryRoadmapApi,
    session: Arc<dyn AuthSession>,
) -> ViewHarness {
    let api_handle: Arc<dyn api::RoadmapApi> = Arc::new(api.clone());
    let app = Arc::new(TestApp {
        session,
        week_service: Arc::new(WeekService::new(Arc::clone(&api_handle))),
        roadmap_service: Arc::new(RoadmapService::new(Arc::clone(&api_handle))),
        assistant_service: Arc::new(AssistantService::new(api_handle)),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, api }
}
