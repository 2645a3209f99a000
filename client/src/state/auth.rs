#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Signed-in operator and loading status, provided as `RwSignal<AuthState>`.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("Guest", |u| u.name.as_str())
    }
}
