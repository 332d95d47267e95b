//! Session context shared by every auth consumer.
//!
//! # Design
//! - Create exactly one controller per app boot.
//! - All writes land in the yewdux store, so readers never disagree.

use crate::core::auth::MockAuthService;
use crate::core::config::UiConfig;
use crate::core::session::{AuthController, SessionAction, SessionSink};
use crate::core::store::AppStore;
use crate::services::storage::BrowserStorage;
use crate::services::timer::TimerDelay;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// Routes controller writes into the global store.
#[derive(Clone)]
pub(crate) struct StoreSink {
    dispatch: Dispatch<AppStore>,
}

impl StoreSink {
    pub(crate) fn new() -> Self {
        Self {
            dispatch: Dispatch::<AppStore>::new(),
        }
    }
}

impl SessionSink for StoreSink {
    fn dispatch(&self, action: SessionAction) {
        self.dispatch
            .reduce_mut(move |store| store.apply_session(action));
    }
}

pub(crate) type BrowserAuthController =
    AuthController<MockAuthService<TimerDelay>, BrowserStorage, StoreSink>;

/// Shared auth controller plus the config it was built from.
#[derive(Clone)]
pub(crate) struct AuthCtx {
    pub controller: Rc<BrowserAuthController>,
    pub config: Rc<UiConfig>,
}

impl AuthCtx {
    pub(crate) fn new(config: UiConfig) -> Self {
        let service = MockAuthService::new(
            TimerDelay,
            config.mock_latency(),
            config.mock_user_id.clone(),
            config.mock_user_name.clone(),
        );
        let storage = BrowserStorage::new(config.storage_key.clone());
        Self {
            controller: Rc::new(AuthController::new(service, storage, StoreSink::new())),
            config: Rc::new(config),
        }
    }
}

impl PartialEq for AuthCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

/// Read the shared [`AuthCtx`], building a default one outside the provider.
#[yew::hook]
pub(crate) fn use_auth() -> AuthCtx {
    let provided = yew::use_context::<AuthCtx>();
    let fallback = yew::use_memo(|_| AuthCtx::new(UiConfig::default()), ());
    provided.unwrap_or_else(|| (*fallback).clone())
}
