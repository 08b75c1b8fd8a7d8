use std::sync::Arc;

use api::{FailureMode, InMemoryRoadmapApi};
use indexmap::indexmap;
use momentum_core::model::{Level, Roadmap, RoadmapId, Task, TaskId, UserId, WeekData, WeekSummary};
use momentum_core::time::fixed_now;
use services::FixedSession;

use super::test_harness::{
    TEST_USER, ViewKind, setup_view_harness, setup_view_harness_with_session,
};

fn seeded_week(api: &InMemoryRoadmapApi) {
    let week = WeekData::new(
        1,
        indexmap! {
            "1".to_string() => vec![
                Task::new(TaskId::new("a"), "Read the ownership chapter", true),
                Task::new(TaskId::new("b"), "Write a small CLI", false),
            ],
        },
    );
    api.insert_week(RoadmapId::new(1), week);
}

fn seeded_roadmap(api: &InMemoryRoadmapApi) {
    api.insert_roadmaps(
        UserId::new(TEST_USER),
        vec![Roadmap {
            roadmap_id: RoadmapId::new(1),
            description: "Learn Rust".to_string(),
            duration_weeks: 8,
            level: Level::Intermediate,
            created_at: fixed_now(),
        }],
    );
}

#[tokio::test(flavor = "current_thread")]
async fn week_view_smoke_renders_days_and_progress() {
    let api = InMemoryRoadmapApi::new();
    seeded_week(&api);
    let mut harness = setup_view_harness(ViewKind::Week(1, 1), api);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Week 1"), "missing title in {html}");
    assert!(html.contains("Day 1"), "missing day card in {html}");
    assert!(
        html.contains("Read the ownership chapter"),
        "missing task in {html}"
    );
    assert!(html.contains("width: 50%"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn week_view_smoke_renders_no_data_for_malformed_week() {
    let api = InMemoryRoadmapApi::new();
    api.insert_malformed_week(RoadmapId::new(1), 1);
    let mut harness = setup_view_harness(ViewKind::Week(1, 1), api);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("No data found for this week."),
        "missing no-data text in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn week_view_smoke_renders_unavailable_on_transport_failure() {
    let api = InMemoryRoadmapApi::new();
    api.set_fetch_failure(FailureMode::Transport);
    let mut harness = setup_view_harness(ViewKind::Week(1, 1), api);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Service unavailable"),
        "missing unavailable text in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn weeks_view_smoke_renders_week_cards() {
    let api = InMemoryRoadmapApi::new();
    api.insert_week_summaries(
        RoadmapId::new(1),
        vec![
            WeekSummary {
                week_number: 1,
                progress: 50,
                total_tasks: 10,
                completed_tasks: 5,
            },
            WeekSummary {
                week_number: 2,
                progress: 0,
                total_tasks: 8,
                completed_tasks: 0,
            },
        ],
    );
    let mut harness = setup_view_harness(ViewKind::Weeks(1), api);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Week 1"), "missing first card in {html}");
    assert!(html.contains("Week 2"), "missing second card in {html}");
    assert!(
        html.contains("5 / 10 tasks completed"),
        "missing tasks line in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_roadmap_cards() {
    let api = InMemoryRoadmapApi::new();
    seeded_roadmap(&api);
    let mut harness = setup_view_harness(ViewKind::Dashboard, api);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Learn Rust"), "missing roadmap in {html}");
    assert!(
        html.contains("8 weeks · intermediate"),
        "missing meta line in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_error_when_signed_out() {
    let api = InMemoryRoadmapApi::new();
    let mut harness = setup_view_harness_with_session(
        ViewKind::Dashboard,
        api,
        Arc::new(FixedSession::signed_out()),
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Something went wrong"),
        "missing error text in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn generate_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Generate, InMemoryRoadmapApi::new());
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("What do you want to learn?"),
        "missing goal field in {html}"
    );
    assert!(html.contains("Beginner"), "missing level options in {html}");
    assert!(
        html.contains("Generate Roadmap"),
        "missing submit button in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn assistant_view_smoke_renders_roadmap_chips() {
    let api = InMemoryRoadmapApi::new();
    seeded_roadmap(&api);
    let mut harness = setup_view_harness(ViewKind::Assistant, api);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Learn Rust"), "missing roadmap chip in {html}");
    assert!(html.contains("Your question"), "missing question field in {html}");
}
