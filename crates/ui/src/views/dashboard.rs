use dioxus::prelude::*;
use dioxus_router::Link;

use momentum_core::model::RoadmapId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{RoadmapCardVm, map_roadmap_cards};

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    cards: Vec<RoadmapCardVm>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DeleteState {
    Idle,
    Deleting,
    Error(ViewError),
}

/// Landing page: the signed-in user's roadmaps, with delete.
#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = ctx.session();
    let roadmaps = ctx.roadmap_service();
    let mut delete_target = use_signal(|| None::<u64>);
    let mut delete_state = use_signal(|| DeleteState::Idle);

    let roadmaps_for_resource = roadmaps.clone();
    let session_for_resource = session.clone();
    let resource = use_resource(move || {
        let roadmaps = roadmaps_for_resource.clone();
        let session = session_for_resource.clone();
        async move {
            let listed = roadmaps
                .list(session.as_ref())
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(DashboardData {
                cards: map_roadmap_cards(&listed),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page dashboard-page",
            header { class: "view-header",
                h1 { class: "view-title", "Welcome back" }
                p { class: "view-subtitle", "Keep learning. Stay consistent. Master new skills." }
            }
            div { class: "view-actions",
                h2 { class: "section-title", "Your Roadmaps" }
                Link { class: "btn btn-primary", to: Route::Generate {}, "New Roadmap" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { class: "view-hint", "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "view-hint", "Loading roadmaps…" }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                },
                ViewState::Ready(data) => rsx! {
                    if data.cards.is_empty() {
                        p { class: "view-hint", "No roadmaps yet. Generate one to get started." }
                    } else {
                        div { class: "roadmap-list",
                            for card in data.cards {
                                RoadmapCard {
                                    card,
                                    on_delete: move |id| {
                                        delete_state.set(DeleteState::Idle);
                                        delete_target.set(Some(id));
                                    },
                                }
                            }
                        }
                    }
                },
            }

            if let Some(roadmap_id) = delete_target() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| {
                        delete_target.set(None);
                        delete_state.set(DeleteState::Idle);
                    },
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { class: "modal-title", "Delete this roadmap?" }
                        p { class: "modal-body", "This cannot be undone." }
                        if let DeleteState::Error(err) = delete_state() {
                            p { class: "modal-error", "{err.message()}" }
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| {
                                    delete_target.set(None);
                                    delete_state.set(DeleteState::Idle);
                                },
                                "Cancel"
                            }
                            button {
                                class: "btn btn-danger",
                                r#type: "button",
                                disabled: delete_state() == DeleteState::Deleting,
                                onclick: move |_| {
                                    let roadmaps = roadmaps.clone();
                                    let session = session.clone();
                                    let mut delete_state = delete_state;
                                    let mut delete_target = delete_target;
                                    let mut resource = resource;
                                    spawn(async move {
                                        delete_state.set(DeleteState::Deleting);
                                        match roadmaps
                                            .delete(session.as_ref(), RoadmapId::new(roadmap_id))
                                            .await
                                        {
                                            Ok(()) => {
                                                delete_state.set(DeleteState::Idle);
                                                delete_target.set(None);
                                                resource.restart();
                                            }
                                            Err(_) => {
                                                delete_state.set(DeleteState::Error(ViewError::Unknown));
                                            }
                                        }
                                    });
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RoadmapCard(card: RoadmapCardVm, on_delete: EventHandler<u64>) -> Element {
    let id = card.id;
    rsx! {
        div { class: "roadmap-card",
            Link { class: "roadmap-link", to: Route::Weeks { roadmap_id: id },
                h3 { class: "roadmap-title", "{card.title}" }
                p { class: "roadmap-meta", "{card.meta_line}" }
                p { class: "roadmap-created", "Created {card.created_str}" }
            }
            button {
                class: "roadmap-delete",
                r#type: "button",
                onclick: move |_| on_delete.call(id),
                "Delete"
            }
        }
    }
}
