//! App-wide yewdux store.
//!
//! # Design
//! - Keep the session in one store so every consumer reads the same user.
//! - Slices stay small and reducers live next to their data.

use crate::core::dashboard::DashboardState;
use crate::core::session::{SessionAction, SessionState};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Authentication state.
    pub session: SessionState,
    /// Dashboard list state.
    pub dashboard: DashboardState,
}

impl AppStore {
    /// Apply a session transition.
    pub fn apply_session(&mut self, action: SessionAction) {
        self.session.apply(action);
    }
}

#[cfg(test)]
mod tests {
    use super::AppStore;
    use crate::core::auth::User;
    use crate::core::dashboard::DashboardState;
    use crate::core::session::SessionAction;

    #[test]
    fn default_store_is_signed_out_and_loading() {
        let store = AppStore::default();
        assert!(!store.session.is_authenticated());
        assert_eq!(store.dashboard, DashboardState::Loading);
    }

    #[test]
    fn session_actions_flow_through_store() {
        let mut store = AppStore::default();
        store.apply_session(SessionAction::Restored(User {
            id: "1".to_string(),
            email: "a@b.c".to_string(),
            name: "John Doe".to_string(),
        }));
        assert!(store.session.is_authenticated());
        store.apply_session(SessionAction::LoggedOut);
        assert!(!store.session.is_authenticated());
    }
}
