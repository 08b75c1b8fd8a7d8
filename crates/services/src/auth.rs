use momentum_core::model::UserId;

/// Session accessor injected into every view that scopes data by user.
///
/// The auth provider itself (magic link, OAuth, token refresh) lives
/// outside this codebase; all the client needs is "who, if anyone, is
/// signed in right now". Passing this in explicitly keeps the services
/// free of process-wide auth state.
pub trait AuthSession: Send + Sync {
    fn current_user(&self) -> Option<UserId>;
}

/// A session with a fixed answer. The desktop binary uses it with a
/// configured user id; tests use both variants.
#[derive(Clone, Debug, Default)]
pub struct FixedSession {
    user: Option<UserId>,
}

impl FixedSession {
    #[must_use]
    pub fn signed_in(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl AuthSession for FixedSession {
    fn current_user(&self) -> Option<UserId> {
        self.user.clone()
    }
}
