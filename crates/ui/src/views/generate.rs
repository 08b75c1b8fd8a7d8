use dioxus::prelude::*;
use dioxus_router::use_navigator;

use momentum_core::model::{
    Level, MAX_DAILY_HOURS, MAX_DURATION_WEEKS, MIN_DAILY_HOURS, MIN_DURATION_WEEKS,
};
use services::RoadmapServiceError;

use crate::context::AppContext;
use crate::routes::Route;

#[derive(Clone, Debug, PartialEq)]
struct GenerateForm {
    goal: String,
    duration_weeks: String,
    daily_hours: String,
    level: Level,
}

impl Default for GenerateForm {
    fn default() -> Self {
        Self {
            goal: String::new(),
            duration_weeks: "8".to_string(),
            daily_hours: "1".to_string(),
            level: Level::Beginner,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum SubmitState {
    Idle,
    Submitting,
    Error(String),
}

fn form_error(err: &RoadmapServiceError) -> String {
    match err {
        RoadmapServiceError::Invalid(inner) => inner.to_string(),
        RoadmapServiceError::NotSignedIn => "Sign in to generate a roadmap.".to_string(),
        _ => "Could not generate the roadmap. Try again.".to_string(),
    }
}

/// Form that asks the backend to generate a new roadmap.
#[component]
pub fn GenerateView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = ctx.session();
    let roadmaps = ctx.roadmap_service();
    let navigator = use_navigator();
    let mut form = use_signal(GenerateForm::default);
    let mut submit_state = use_signal(|| SubmitState::Idle);

    let form_value = form();
    let submitting = submit_state() == SubmitState::Submitting;

    rsx! {
        div { class: "page generate-page",
            h1 { class: "view-title", "New Roadmap" }
            p { class: "view-subtitle", "Describe what you want to learn and how much time you have." }

            div { class: "form-card",
                label { class: "form-field",
                    span { class: "form-label", "What do you want to learn?" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: "e.g. Learn Rust for backend development",
                        value: "{form_value.goal}",
                        oninput: move |evt| {
                            let mut next = form();
                            next.goal = evt.value();
                            form.set(next);
                            submit_state.set(SubmitState::Idle);
                        },
                    }
                }

                div { class: "form-row",
                    label { class: "form-field",
                        span { class: "form-label", "Duration (weeks)" }
                        input {
                            class: "form-input form-input--short",
                            r#type: "number",
                            min: "{MIN_DURATION_WEEKS}",
                            max: "{MAX_DURATION_WEEKS}",
                            value: "{form_value.duration_weeks}",
                            oninput: move |evt| {
                                let mut next = form();
                                next.duration_weeks = evt.value();
                                form.set(next);
                                submit_state.set(SubmitState::Idle);
                            },
                        }
                    }
                    label { class: "form-field",
                        span { class: "form-label", "Hours per day" }
                        input {
                            class: "form-input form-input--short",
                            r#type: "number",
                            min: "{MIN_DAILY_HOURS}",
                            max: "{MAX_DAILY_HOURS}",
                            step: "0.5",
                            value: "{form_value.daily_hours}",
                            oninput: move |evt| {
                                let mut next = form();
                                next.daily_hours = evt.value();
                                form.set(next);
                                submit_state.set(SubmitState::Idle);
                            },
                        }
                    }
                }

                div { class: "form-field",
                    span { class: "form-label", "Your level" }
                    div { class: "level-segment",
                        for level in Level::ALL {
                            button {
                                class: if form_value.level == level { "level-button level-button--active" } else { "level-button" },
                                r#type: "button",
                                onclick: move |_| {
                                    let mut next = form();
                                    next.level = level;
                                    form.set(next);
                                    submit_state.set(SubmitState::Idle);
                                },
                                "{level.label()}"
                            }
                        }
                    }
                }

                if let SubmitState::Error(message) = submit_state() {
                    p { class: "view-error", "{message}" }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: submitting,
                    onclick: move |_| {
                        let snapshot = form();
                        let roadmaps = roadmaps.clone();
                        let session = session.clone();
                        let navigator = navigator;
                        let mut submit_state = submit_state;
                        spawn(async move {
                            submit_state.set(SubmitState::Submitting);
                            let Ok(duration_weeks) = snapshot.duration_weeks.trim().parse::<u32>()
                            else {
                                submit_state
                                    .set(SubmitState::Error("Duration must be a whole number of weeks.".to_string()));
                                return;
                            };
                            let Ok(daily_hours) = snapshot.daily_hours.trim().parse::<f32>() else {
                                submit_state
                                    .set(SubmitState::Error("Hours per day must be a number.".to_string()));
                                return;
                            };
                            match roadmaps
                                .generate(
                                    session.as_ref(),
                                    &snapshot.goal,
                                    duration_weeks,
                                    daily_hours,
                                    snapshot.level,
                                )
                                .await
                            {
                                Ok(()) => {
                                    navigator.push(Route::Dashboard {});
                                }
                                Err(err) => {
                                    submit_state.set(SubmitState::Error(form_error(&err)));
                                }
                            }
                        });
                    },
                    if submitting { "Generating…" } else { "Generate Roadmap" }
                }
            }
        }
    }
}
