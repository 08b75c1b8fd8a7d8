use api::ApiError;
use momentum_core::model::{TaskId, WeekData};

use crate::optimistic::OptimisticUpdate;

/// What the week view shows.
///
/// `NoData` (backend answered but the payload carried no week) and
/// `Unavailable` (backend unreachable or errored) are deliberately distinct
/// user-visible states. Once `Unavailable`, only a fresh load leaves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekBoardState {
    Loading,
    Ready(WeekData),
    NoData,
    Unavailable,
}

/// An optimistic toggle that has been applied locally but not yet confirmed.
///
/// Holds the pre-toggle snapshot; `WeekBoard::resolve_toggle` consumes it.
#[derive(Debug, Clone)]
pub struct PendingToggle {
    task_id: TaskId,
    completed: bool,
    txn: OptimisticUpdate<WeekData>,
}

impl PendingToggle {
    #[must_use]
    pub fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }
}

/// State machine behind the week view.
///
/// Pure and synchronous: network results are folded in through
/// `apply_load` and `resolve_toggle`, so every transition is testable
/// without a UI or a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBoard {
    state: WeekBoardState,
}

impl Default for WeekBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl WeekBoard {
    /// A board that has not finished its initial load.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: WeekBoardState::Loading,
        }
    }

    #[must_use]
    pub fn state(&self) -> &WeekBoardState {
        &self.state
    }

    #[must_use]
    pub fn week(&self) -> Option<&WeekData> {
        match &self.state {
            WeekBoardState::Ready(week) => Some(week),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, WeekBoardState::Ready(_))
    }

    /// Fold the result of a read request into the board.
    ///
    /// A well-formed week clears any previous unavailable flag. A payload
    /// without a week (`Ok(None)`) or a decode failure is "no data"; an
    /// HTTP or transport failure is "service unavailable".
    pub fn apply_load(&mut self, result: Result<Option<WeekData>, ApiError>) {
        self.state = match result {
            Ok(Some(week)) => WeekBoardState::Ready(week),
            Ok(None) | Err(ApiError::Decode(_)) => WeekBoardState::NoData,
            Err(_) => WeekBoardState::Unavailable,
        };
    }

    /// Apply a toggle locally and return the pending transaction to resolve
    /// once the write request settles.
    ///
    /// Returns `None` (and sends nothing) unless the board is ready and the
    /// task id matches a task — toggles on a not-loaded or unavailable board
    /// are no-ops.
    pub fn begin_toggle(&mut self, task_id: &TaskId, completed: bool) -> Option<PendingToggle> {
        let WeekBoardState::Ready(week) = &mut self.state else {
            return None;
        };

        let txn = OptimisticUpdate::begin(week);
        if !week.set_task_completed(task_id, completed) {
            return None;
        }

        Some(PendingToggle {
            task_id: task_id.clone(),
            completed,
            txn,
        })
    }

    /// Fold the result of the write request for a pending toggle.
    ///
    /// Success commits the optimistic state. A rejection (non-success
    /// status) restores the snapshot verbatim. A transport failure restores
    /// the snapshot *and* marks the service unavailable — the backend's true
    /// state is unknown at that point.
    pub fn resolve_toggle(&mut self, pending: PendingToggle, outcome: Result<(), ApiError>) {
        match outcome {
            Ok(()) => pending.txn.commit(),
            Err(err) => {
                let escalate = err.is_transport();
                self.state = if escalate {
                    WeekBoardState::Unavailable
                } else {
                    WeekBoardState::Ready(pending.txn.into_snapshot())
                };
            }
        }
    }
}
