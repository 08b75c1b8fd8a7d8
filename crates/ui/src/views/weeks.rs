use dioxus::prelude::*;
use dioxus_router::Link;

use momentum_core::model::RoadmapId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{WeekCardVm, map_week_cards};

#[derive(Clone, Debug, PartialEq)]
struct WeeksData {
    cards: Vec<WeekCardVm>,
}

/// Per-week progress overview for one roadmap.
#[component]
pub fn WeeksView(roadmap_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let weeks = ctx.week_service();

    let resource = use_resource(move || {
        let weeks = weeks.clone();
        let roadmap_id = roadmap_id;
        async move {
            let summaries = weeks
                .list_weeks(RoadmapId::new(roadmap_id))
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(WeeksData {
                cards: map_week_cards(&summaries),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page weeks-page",
            h1 { class: "view-title", "Roadmap Progress" }

            match state {
                ViewState::Idle => rsx! {
                    p { class: "view-hint", "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "view-hint", "Loading weeks…" }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                },
                ViewState::Ready(data) => rsx! {
                    if data.cards.is_empty() {
                        p { class: "view-hint", "No weeks found." }
                    } else {
                        for card in data.cards {
                            WeekCard { roadmap_id, card }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn WeekCard(roadmap_id: u64, card: WeekCardVm) -> Element {
    rsx! {
        Link {
            class: "week-card",
            to: Route::Week { roadmap_id, week: card.week_number },
            div { class: "week-card-head",
                span { "Week {card.week_number}" }
                span { "{card.progress_label}" }
            }
            div { class: "progress-track",
                div {
                    class: "progress-fill",
                    style: "width: {card.progress_width}",
                }
            }
            p { class: "week-card-tasks", "{card.tasks_line}" }
        }
    }
}
