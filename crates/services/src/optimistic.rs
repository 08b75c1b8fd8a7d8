/// Snapshot half of an optimistic mutation.
///
/// The pattern is snapshot → apply → confirm-or-revert: take the snapshot
/// *before* mutating shared view state, mutate and render immediately, then
/// either `commit` (drop the snapshot) once the backend confirms or take the
/// snapshot back via `into_snapshot` to restore the pre-mutation state
/// verbatim.
#[derive(Debug, Clone)]
pub struct OptimisticUpdate<T: Clone> {
    snapshot: T,
}

impl<T: Clone> OptimisticUpdate<T> {
    /// Deep-copy the current state for a potential rollback.
    #[must_use]
    pub fn begin(current: &T) -> Self {
        Self {
            snapshot: current.clone(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> &T {
        &self.snapshot
    }

    /// The backend confirmed; the snapshot is no longer needed.
    pub fn commit(self) {}

    /// The backend rejected; hand the pre-mutation state back to the caller.
    #[must_use]
    pub fn into_snapshot(self) -> T {
        self.snapshot
    }
}
