use dioxus::prelude::*;

use momentum_core::model::RoadmapId;
use services::{WeekBoard, WeekBoardState};

use crate::context::AppContext;
use crate::vm::map_week;

/// One week of a roadmap: tasks grouped by day, a progress bar, and
/// optimistic completion toggles.
///
/// The board signal holds the whole state machine; toggles mutate it
/// synchronously (the user sees the change before the write settles) and
/// the spawned write resolves the pending toggle when it comes back. Tasks
/// spawned here die with the component scope, so a response arriving after
/// navigation never touches a stale board.
#[component]
pub fn WeekView(roadmap_id: u64, week: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let weeks = ctx.week_service();
    let mut board = use_signal(WeekBoard::new);

    let weeks_for_load = weeks.clone();
    let _loader = use_resource(move || {
        let weeks = weeks_for_load.clone();
        let roadmap_id = roadmap_id;
        let week = week;
        async move {
            // Show the loading indicator until the request settles, then
            // publish whatever state the load produced.
            board.set(WeekBoard::new());
            let loaded = weeks.load(RoadmapId::new(roadmap_id), Some(week)).await;
            board.set(loaded);
        }
    });

    let state = board.read().state().clone();
    rsx! {
        div { class: "page week-page",
            match state {
                WeekBoardState::Loading => rsx! {
                    p { class: "view-hint", "Loading week…" }
                },
                WeekBoardState::NoData => rsx! {
                    p { class: "view-hint", "No data found for this week." }
                },
                WeekBoardState::Unavailable => rsx! {
                    p { class: "view-error", "Service unavailable. Reload to try again." }
                },
                WeekBoardState::Ready(week_data) => {
                    let vm = map_week(&week_data);
                    let day_cards = vm.days.iter().map(|day| {
                        let label = day.label.clone();
                        let task_rows = day.tasks.iter().map(|task| {
                            let task_id = task.id.clone();
                            let next = !task.completed;
                            let weeks = weeks.clone();
                            let row_class = if task.completed { "task task-done" } else { "task" };
                            let text = task.text.clone();
                            let completed = task.completed;
                            rsx! {
                                label { class: "{row_class}",
                                    input {
                                        r#type: "checkbox",
                                        checked: completed,
                                        onchange: move |_| {
                                            let weeks = weeks.clone();
                                            let task_id = task_id.clone();
                                            let mut board = board;
                                            spawn(async move {
                                                let pending = board.write().begin_toggle(&task_id, next);
                                                let Some(pending) = pending else { return };
                                                let outcome = weeks
                                                    .push_toggle(pending.task_id(), pending.completed())
                                                    .await;
                                                board.write().resolve_toggle(pending, outcome);
                                            });
                                        },
                                    }
                                    span { class: "task-text", "{text}" }
                                }
                            }
                        });
                        rsx! {
                            div { class: "day-card",
                                h2 { class: "day-title", "{label}" }
                                div { class: "task-list",
                                    {task_rows}
                                }
                            }
                        }
                    });
                    rsx! {
                        h1 { class: "view-title", "Week {vm.week_number}" }
                        div { class: "progress-track",
                            div {
                                class: "progress-fill",
                                style: "width: {vm.progress_width}",
                            }
                        }
                        {day_cards}
                    }
                }
            }
        }
    }
}
