use leptos::prelude::*;

use super::storage;
use crate::shared::api_utils::ApiError;

/// Format the `Authorization` header value for a token
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Current authentication. Provided once at the application root; the only
/// place that writes the persisted token.
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    /// Restore the session persisted by a previous visit
    pub fn restore() -> Self {
        let token = storage::get_token();
        log::debug!("Session restored, authenticated: {}", token.is_some());
        Self {
            token: RwSignal::new(token),
        }
    }

    /// Token for outgoing requests. Not tracked.
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Reactive authentication flag for guards and layouts
    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn set_token(&self, token: String) {
        storage::save_token(&token);
        self.token.set(Some(token));
    }

    pub fn clear(&self) {
        storage::clear_token();
        self.token.set(None);
    }

    /// A rejected token ends the session; the guard then sends the user to login
    pub fn handle_error(&self, error: &ApiError) {
        if error.is_unauthorized() {
            log::warn!("Token rejected by the server, clearing session");
            self.clear();
        }
    }
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not provided in context")
}
