use serde::{Deserialize, Serialize};

use super::ids::TaskId;

/// A single daily task inside a week of a roadmap.
///
/// The authoritative copy lives on the backend; the client holds a local
/// copy inside `WeekData` and patches `completed` optimistically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub task_text: String,
    pub completed: bool,
}

impl Task {
    #[must_use]
    pub fn new(id: TaskId, task_text: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            task_text: task_text.into(),
            completed,
        }
    }
}
