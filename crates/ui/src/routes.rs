use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_route};

use crate::views::{AssistantView, DashboardView, GenerateView, WeekView, WeeksView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/generate", GenerateView)] Generate {},
        #[route("/assistant", AssistantView)] Assistant {},
        #[route("/roadmap/:roadmap_id/weeks", WeeksView)] Weeks { roadmap_id: u64 },
        #[route("/roadmap/:roadmap_id/week/:week", WeekView)] Week { roadmap_id: u64, week: u32 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopNav {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopNav() -> Element {
    let route = use_route::<Route>();
    let active = |target: &Route| {
        if route == *target { "nav-link active" } else { "nav-link" }
    };

    rsx! {
        nav { class: "top-nav",
            Link { class: "brand", to: Route::Dashboard {}, "Momentum" }
            div { class: "nav-links",
                Link { class: active(&Route::Dashboard {}), to: Route::Dashboard {}, "Dashboard" }
                Link { class: active(&Route::Generate {}), to: Route::Generate {}, "Generate" }
                Link { class: active(&Route::Assistant {}), to: Route::Assistant {}, "Assistant" }
            }
        }
    }
}
