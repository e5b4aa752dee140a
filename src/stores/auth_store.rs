// ============================================================================
// AUTH STORE - client-side auth state (no yewdux)
// ============================================================================

use crate::models::{LoginData, Screen};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthStore {
    pub user: Option<LoginData>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthStore {
    pub fn restored(user: Option<LoginData>) -> Self {
        Self {
            user,
            ..Default::default()
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user
            .as_ref()
            .and_then(|user| user.session_token())
            .is_some()
    }

    /// Unauthenticated users always land on the login screen
    pub fn resolve(&self, requested: Screen) -> Screen {
        if requested.requires_auth() && !self.is_logged_in() {
            Screen::Login
        } else {
            requested
        }
    }
}
