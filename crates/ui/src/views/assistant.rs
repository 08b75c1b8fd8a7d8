use dioxus::prelude::*;

use momentum_core::model::RoadmapId;
use services::AssistantError;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{RoadmapCardVm, map_roadmap_cards};

#[derive(Clone, Debug, PartialEq)]
enum AskState {
    Idle,
    Asking,
    Answered(String),
    Error(String),
}

fn ask_error(err: &AssistantError) -> String {
    match err {
        AssistantError::EmptyQuestion => "Type a question first.".to_string(),
        AssistantError::NotSignedIn => "Sign in to ask the assistant.".to_string(),
        _ => "The assistant is unavailable right now. Try again.".to_string(),
    }
}

fn parse_optional_number(value: &str) -> Result<Option<u32>, ()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<u32>().map(Some).map_err(|_| ())
}

/// Ask a question about one of the user's roadmaps, optionally narrowed
/// to a week and day.
#[component]
pub fn AssistantView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = ctx.session();
    let roadmaps = ctx.roadmap_service();
    let assistant = ctx.assistant_service();
    let mut selected_roadmap = use_signal(|| None::<u64>);
    let mut week_number = use_signal(String::new);
    let mut day_number = use_signal(String::new);
    let mut question = use_signal(String::new);
    let mut ask_state = use_signal(|| AskState::Idle);

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
            Ok::<_, ViewError>(map_roadmap_cards(&listed))
        }
    });

    let state = view_state_from_resource(&resource);
    let asking = ask_state() == AskState::Asking;

    rsx! {
        div { class: "page assistant-page",
            h1 { class: "view-title", "Assistant" }
            p { class: "view-subtitle", "Questions are answered in the context of a roadmap." }

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
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { class: "view-hint", "Generate a roadmap first, then ask about it here." }
                    } else {
                        div { class: "form-card",
                            div { class: "form-field",
                                span { class: "form-label", "Roadmap" }
                                div { class: "assistant-roadmaps",
                                    for card in cards {
                                        AssistantRoadmapChip {
                                            card,
                                            selected: selected_roadmap,
                                            on_pick: move |id| {
                                                selected_roadmap.set(Some(id));
                                                ask_state.set(AskState::Idle);
                                            },
                                        }
                                    }
                                }
                            }

                            div { class: "form-row",
                                label { class: "form-field",
                                    span { class: "form-label", "Week (optional)" }
                                    input {
                                        class: "form-input form-input--short",
                                        r#type: "number",
                                        min: "1",
                                        value: "{week_number}",
                                        oninput: move |evt| week_number.set(evt.value()),
                                    }
                                }
                                label { class: "form-field",
                                    span { class: "form-label", "Day (optional)" }
                                    input {
                                        class: "form-input form-input--short",
                                        r#type: "number",
                                        min: "1",
                                        value: "{day_number}",
                                        oninput: move |evt| day_number.set(evt.value()),
                                    }
                                }
                            }

                            label { class: "form-field",
                                span { class: "form-label", "Your question" }
                                textarea {
                                    class: "form-input form-textarea",
                                    placeholder: "e.g. What should I focus on this week?",
                                    value: "{question}",
                                    oninput: move |evt| question.set(evt.value()),
                                }
                            }

                            if let AskState::Error(message) = ask_state() {
                                p { class: "view-error", "{message}" }
                            }

                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: asking || selected_roadmap().is_none(),
                                onclick: move |_| {
                                    let Some(roadmap_id) = selected_roadmap() else { return };
                                    let assistant = assistant.clone();
                                    let session = session.clone();
                                    let question = question();
                                    let week_raw = week_number();
                                    let day_raw = day_number();
                                    let mut ask_state = ask_state;
                                    spawn(async move {
                                        ask_state.set(AskState::Asking);
                                        let Ok(week) = parse_optional_number(&week_raw) else {
                                            ask_state.set(AskState::Error(
                                                "Week must be a whole number.".to_string(),
                                            ));
                                            return;
                                        };
                                        let Ok(day) = parse_optional_number(&day_raw) else {
                                            ask_state.set(AskState::Error(
                                                "Day must be a whole number.".to_string(),
                                            ));
                                            return;
                                        };
                                        match assistant
                                            .ask(
                                                session.as_ref(),
                                                RoadmapId::new(roadmap_id),
                                                &question,
                                                week,
                                                day,
                                            )
                                            .await
                                        {
                                            Ok(reply) => ask_state.set(AskState::Answered(reply)),
                                            Err(err) => {
                                                ask_state.set(AskState::Error(ask_error(&err)));
                                            }
                                        }
                                    });
                                },
                                if asking { "Thinking…" } else { "Ask" }
                            }

                            if let AskState::Answered(reply) = ask_state() {
                                div { class: "assistant-reply",
                                    h3 { class: "assistant-reply-title", "Answer" }
                                    p { class: "assistant-reply-body", "{reply}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn AssistantRoadmapChip(
    card: RoadmapCardVm,
    selected: Signal<Option<u64>>,
    on_pick: EventHandler<u64>,
) -> Element {
    let id = card.id;
    let active = selected() == Some(id);
    rsx! {
        button {
            class: if active { "assistant-chip assistant-chip--active" } else { "assistant-chip" },
            r#type: "button",
            onclick: move |_| on_pick.call(id),
            "{card.title}"
        }
    }
}
