//! Local-storage persistence for the signed-in user.

use crate::core::auth::User;
use crate::core::session::SessionStorage;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// [`SessionStorage`] over `window.localStorage`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    /// Persist under `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionStorage for BrowserStorage {
    fn load_user(&self) -> Option<User> {
        LocalStorage::get::<User>(&self.key).ok()
    }

    fn save_user(&self, user: &User) {
        if let Err(err) = LocalStorage::set(&self.key, user) {
            log_storage_error("set", &self.key, &err.to_string());
        }
    }

    fn clear_user(&self) {
        LocalStorage::delete(&self.key);
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
