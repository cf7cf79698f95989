use std::sync::{Arc, PoisonError, RwLock};

/// Process-wide authentication state: at most one opaque bearer token.
///
/// The handle is cheap to clone; all clones share the same token. Absence of
/// a token is the valid unauthenticated state, not an error. Repository
/// operations capture the token once at their call boundary, so clearing the
/// session does not retroactively affect calls already in flight.
#[derive(Clone, Debug, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<String>>>,
}

/// Outcome of the authentication gate on a protected entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    RedirectToLogin,
}

impl Session {
    /// Creates an unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current token, if any. No side effects.
    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Stores `token` as the current token. Subsequent reads reflect it
    /// immediately.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// Removes the token. In-flight operations keep the value they captured
    /// at their own call boundary.
    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Gate check for protected entry points.
    ///
    /// Hosts are expected to evaluate this on every protected view mount,
    /// not just at startup, so a token cleared mid-session is caught on the
    /// next mount.
    pub fn require_authenticated(&self) -> GateDecision {
        if self.is_authenticated() {
            GateDecision::Proceed
        } else {
            GateDecision::RedirectToLogin
        }
    }
}
