use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ids::TaskId;
use super::task::Task;

/// One week of a roadmap: tasks grouped by day label, plus an aggregate
/// completion percentage.
///
/// Invariant: `progress == round(100 * completed / total)` over the
/// flattened task set (0 when there are no tasks). Every local mutation
/// goes through `set_task_completed`, which re-establishes it.
///
/// `days` keeps the backend's ordering; day labels are opaque strings
/// (usually `"1"`, `"2"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekData {
    pub week_number: u32,
    pub progress: u8,
    pub days: IndexMap<String, Vec<Task>>,
}

impl WeekData {
    /// Build a week from day groups, computing `progress` from the tasks.
    #[must_use]
    pub fn new(week_number: u32, days: IndexMap<String, Vec<Task>>) -> Self {
        let mut week = Self {
            week_number,
            progress: 0,
            days,
        };
        week.recompute_progress();
        week
    }

    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn completed_tasks(&self) -> usize {
        self.days
            .values()
            .flatten()
            .filter(|task| task.completed)
            .count()
    }

    /// Percentage of completed tasks, rounded to the nearest integer.
    #[must_use]
    pub fn computed_progress(&self) -> u8 {
        percentage(self.completed_tasks(), self.total_tasks())
    }

    /// Re-establish the progress invariant after a mutation.
    pub fn recompute_progress(&mut self) {
        self.progress = self.computed_progress();
    }

    /// Set the `completed` flag of the matching task across all days and
    /// recompute `progress`. Returns `false` when no task matched.
    pub fn set_task_completed(&mut self, task_id: &TaskId, completed: bool) -> bool {
        let mut matched = false;
        for tasks in self.days.values_mut() {
            for task in tasks.iter_mut() {
                if task.id == *task_id {
                    task.completed = completed;
                    matched = true;
                }
            }
        }
        if matched {
            self.recompute_progress();
        }
        matched
    }

    /// Look up a task by id across all days.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.days
            .values()
            .flatten()
            .find(|task| task.id == *task_id)
    }
}

/// Rounded percentage of `part` out of `total`; 0 when `total` is 0.
#[must_use]
pub(crate) fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = (100.0 * part as f64 / total as f64).round() as u8;
    pct
}

/// Aggregate row for the weeks overview of a roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSummary {
    pub week_number: u32,
    pub progress: u8,
    pub total_tasks: u32,
    pub completed_tasks: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;

    fn task(id: &str, completed: bool) -> Task {
        Task::new(TaskId::new(id), format!("task {id}"), completed)
    }

    fn sample_week() -> WeekData {
        WeekData::new(
            1,
            indexmap! {
                "1".to_string() => vec![task("a", true), task("b", false)],
                "2".to_string() => vec![task("c", false)],
            },
        )
    }

    #[test]
    fn progress_is_rounded_ratio() {
        let week = sample_week();
        assert_eq!(week.total_tasks(), 3);
        assert_eq!(week.completed_tasks(), 1);
        // 100 * 1/3 = 33.33... rounds down.
        assert_eq!(week.progress, 33);
    }

    #[test]
    fn progress_is_zero_for_empty_week() {
        let week = WeekData::new(3, IndexMap::new());
        assert_eq!(week.total_tasks(), 0);
        assert_eq!(week.progress, 0);
    }

    #[test]
    fn set_task_completed_recomputes_progress() {
        let mut week = sample_week();
        assert!(week.set_task_completed(&TaskId::new("b"), true));
        assert!(week.set_task_completed(&TaskId::new("c"), true));
        assert_eq!(week.progress, 100);
        assert!(week.task(&TaskId::new("b")).unwrap().completed);
    }

    #[test]
    fn set_task_completed_reports_unknown_id() {
        let mut week = sample_week();
        let before = week.clone();
        assert!(!week.set_task_completed(&TaskId::new("nope"), true));
        assert_eq!(week, before);
    }

    #[test]
    fn half_completed_week_rounds_to_fifty() {
        let week = WeekData::new(
            1,
            indexmap! {
                "1".to_string() => vec![task("a", true), task("b", false)],
            },
        );
        assert_eq!(week.progress, 50);
    }

    #[test]
    fn days_keep_insertion_order() {
        let week = WeekData::new(
            1,
            indexmap! {
                "2".to_string() => vec![task("a", false)],
                "10".to_string() => vec![task("b", false)],
                "1".to_string() => vec![task("c", false)],
            },
        );
        let labels: Vec<_> = week.days.keys().cloned().collect();
        assert_eq!(labels, vec!["2", "10", "1"]);
    }

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{
            "week_number": 1,
            "progress": 50,
            "days": {
                "1": [
                    { "id": "a", "task_text": "Read ch.1", "completed": true },
                    { "id": "b", "task_text": "Exercise", "completed": false }
                ]
            }
        }"#;
        let week: WeekData = serde_json::from_str(json).unwrap();
        assert_eq!(week.week_number, 1);
        assert_eq!(week.progress, 50);
        assert_eq!(week.computed_progress(), 50);
        assert_eq!(week.days["1"][0].task_text, "Read ch.1");
    }
}
