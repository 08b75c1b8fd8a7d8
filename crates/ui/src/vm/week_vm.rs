use momentum_core::model::{TaskId, WeekData, WeekSummary};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskVm {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayVm {
    pub label: String,
    pub tasks: Vec<TaskVm>,
}

/// Week detail, ready to render: progress pre-formatted as a CSS width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekVm {
    pub week_number: u32,
    pub progress: u8,
    pub progress_width: String,
    pub days: Vec<DayVm>,
}

#[must_use]
pub fn map_week(week: &WeekData) -> WeekVm {
    let days = week
        .days
        .iter()
        .map(|(label, tasks)| DayVm {
            label: format!("Day {label}"),
            tasks: tasks
                .iter()
                .map(|task| TaskVm {
                    id: task.id.clone(),
                    text: task.task_text.clone(),
                    completed: task.completed,
                })
                .collect(),
        })
        .collect();

    WeekVm {
        week_number: week.week_number,
        progress: week.progress,
        progress_width: format!("{}%", week.progress),
        days,
    }
}

/// Row for the weeks overview of a roadmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekCardVm {
    pub week_number: u32,
    pub progress_label: String,
    pub progress_width: String,
    pub tasks_line: String,
}

#[must_use]
pub fn map_week_cards(summaries: &[WeekSummary]) -> Vec<WeekCardVm> {
    summaries
        .iter()
        .map(|summary| WeekCardVm {
            week_number: summary.week_number,
            progress_label: format!("{}%", summary.progress),
            progress_width: format!("{}%", summary.progress),
            tasks_line: format!(
                "{} / {} tasks completed",
                summary.completed_tasks, summary.total_tasks
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;
    use momentum_core::model::Task;

    #[test]
    fn maps_week_detail() {
        let week = WeekData::new(
            2,
            indexmap! {
                "1".to_string() => vec![
                    Task::new(TaskId::new("a"), "Read ch.1", true),
                    Task::new(TaskId::new("b"), "Exercise", false),
                ],
            },
        );
        let vm = map_week(&week);
        assert_eq!(vm.week_number, 2);
        assert_eq!(vm.progress_width, "50%");
        assert_eq!(vm.days.len(), 1);
        assert_eq!(vm.days[0].label, "Day 1");
        assert_eq!(vm.days[0].tasks[0].text, "Read ch.1");
    }

    #[test]
    fn maps_week_cards() {
        let cards = map_week_cards(&[WeekSummary {
            week_number: 3,
            progress: 40,
            total_tasks: 10,
            completed_tasks: 4,
        }]);
        assert_eq!(cards[0].progress_label, "40%");
        assert_eq!(cards[0].tasks_line, "4 / 10 tasks completed");
    }
}
