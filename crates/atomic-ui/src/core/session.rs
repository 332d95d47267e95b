//! Shared session state and the controller that drives it.
//!
//! # Design
//! - One session for the whole tree; every reader derives from the same state.
//! - The controller writes through a [`SessionSink`] so the store stays swappable.
//! - Local storage is a convenience cache: writes are best effort, reads are trusted.

use crate::core::auth::{
    AuthError, AuthOperation, AuthService, ForgotPasswordRequest, LoginCredentials,
    ResetPasswordRequest, User,
};
use crate::core::forms::{ForgotPasswordForm, LoginForm, ResetPasswordForm, SubmitError};
use crate::core::selection::ChoiceItem;
use std::cell::RefCell;
use std::future::Future;

/// In-memory authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Signed-in user, if any.
    pub user: Option<User>,
    /// Operation currently in flight.
    pub pending: Option<AuthOperation>,
    /// Message of the last failed operation.
    pub last_error: Option<String>,
}

impl SessionState {
    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether an operation is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply one transition.
    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::Started(operation) => {
                self.pending = Some(operation);
                self.last_error = None;
            }
            SessionAction::LoggedIn(user) => {
                self.pending = None;
                self.user = Some(user);
            }
            SessionAction::Completed(_) => {
                self.pending = None;
            }
            SessionAction::Failed { message, .. } => {
                self.pending = None;
                self.last_error = Some(message);
            }
            SessionAction::LoggedOut => {
                self.user = None;
                self.pending = None;
                self.last_error = None;
            }
            SessionAction::Restored(user) => {
                self.user = Some(user);
            }
        }
    }
}

/// Transitions emitted by [`AuthController`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// An operation began.
    Started(AuthOperation),
    /// Login finished with a user.
    LoggedIn(User),
    /// A non-login operation finished.
    Completed(AuthOperation),
    /// An operation failed.
    Failed {
        /// Operation that failed.
        operation: AuthOperation,
        /// User-facing message.
        message: String,
    },
    /// The user signed out.
    LoggedOut,
    /// A persisted user was loaded at boot.
    Restored(User),
}

/// Write side of the session store.
pub trait SessionSink {
    /// Apply `action` to the shared state.
    fn dispatch(&self, action: SessionAction);
}

impl SessionSink for RefCell<SessionState> {
    fn dispatch(&self, action: SessionAction) {
        self.borrow_mut().apply(action);
    }
}

/// Persistence for the signed-in user.
pub trait SessionStorage {
    /// Load the persisted user, if one is stored and decodes.
    fn load_user(&self) -> Option<User>;
    /// Persist `user`; failures are the implementation's to report.
    fn save_user(&self, user: &User);
    /// Remove the persisted user.
    fn clear_user(&self);
}

/// JSON-in-memory storage mirroring the browser's string slot.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    /// Raw stored payload.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Overwrite the raw payload.
    pub fn set_raw(&self, value: Option<String>) {
        *self.slot.borrow_mut() = value;
    }
}

impl SessionStorage for MemoryStorage {
    fn load_user(&self) -> Option<User> {
        let raw = self.slot.borrow().clone()?;
        serde_json::from_str(&raw).ok()
    }

    fn save_user(&self, user: &User) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.set_raw(Some(raw));
        }
    }

    fn clear_user(&self) {
        self.set_raw(None);
    }
}

/// Coordinates the auth service, persistence and the shared session.
#[derive(Debug)]
pub struct AuthController<S, P, K> {
    service: S,
    storage: P,
    sink: K,
}

impl<S, P, K> AuthController<S, P, K>
where
    S: AuthService,
    P: SessionStorage,
    K: SessionSink,
{
    /// Wire a controller.
    pub const fn new(service: S, storage: P, sink: K) -> Self {
        Self {
            service,
            storage,
            sink,
        }
    }

    /// Underlying storage.
    pub const fn storage(&self) -> &P {
        &self.storage
    }

    /// Session sink.
    pub const fn sink(&self) -> &K {
        &self.sink
    }

    /// Rehydrate a persisted user. Returns whether one was found.
    pub fn restore(&self) -> bool {
        match self.storage.load_user() {
            Some(user) => {
                self.sink.dispatch(SessionAction::Restored(user));
                true
            }
            None => false,
        }
    }

    /// Sign in and persist the resulting user.
    ///
    /// # Errors
    /// Returns [`AuthError::LoginFailed`] when the service rejects the credentials.
    pub async fn login(&self, credentials: LoginCredentials) -> Result<User, AuthError> {
        self.sink.dispatch(SessionAction::Started(AuthOperation::Login));
        match self.service.login(&credentials).await {
            Ok(user) => {
                self.storage.save_user(&user);
                self.sink.dispatch(SessionAction::LoggedIn(user.clone()));
                Ok(user)
            }
            Err(err) => Err(self.fail(AuthOperation::Login, err)),
        }
    }

    /// Request a reset email.
    ///
    /// # Errors
    /// Returns [`AuthError::ForgotPasswordFailed`] when the email cannot be sent.
    pub async fn forgot_password(&self, request: ForgotPasswordRequest) -> Result<(), AuthError> {
        self.run(AuthOperation::ForgotPassword, self.service.forgot_password(&request))
            .await
    }

    /// Complete a reset.
    ///
    /// # Errors
    /// Returns [`AuthError::ResetPasswordFailed`] when the reset is rejected.
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> Result<(), AuthError> {
        self.run(AuthOperation::ResetPassword, self.service.reset_password(&request))
            .await
    }

    /// Validate the sign-in form, then log in.
    ///
    /// # Errors
    /// Returns [`SubmitError::Invalid`] without calling the service when a field
    /// is blank, or [`SubmitError::Auth`] when login fails.
    pub async fn submit_login(&self, form: &LoginForm) -> Result<User, SubmitError> {
        let credentials = form.validate()?;
        Ok(self.login(credentials).await?)
    }

    /// Validate the forgot-password form, then request the email.
    ///
    /// # Errors
    /// Returns [`SubmitError::Invalid`] for a blank email, or
    /// [`SubmitError::Auth`] when sending fails.
    pub async fn submit_forgot_password(&self, form: &ForgotPasswordForm) -> Result<(), SubmitError> {
        let request = form.validate()?;
        Ok(self.forgot_password(request).await?)
    }

    /// Validate the reset form against `token`, then reset.
    ///
    /// # Errors
    /// Returns [`SubmitError::Invalid`] without calling the service for blank or
    /// mismatched passwords, or [`SubmitError::Auth`] when the reset fails.
    pub async fn submit_reset_password(
        &self,
        form: &ResetPasswordForm,
        token: &str,
    ) -> Result<(), SubmitError> {
        let request = form.validate(token)?;
        Ok(self.reset_password(request).await?)
    }

    /// Forget the user in memory and in storage.
    pub fn logout(&self) {
        self.storage.clear_user();
        self.sink.dispatch(SessionAction::LoggedOut);
    }

    async fn run(
        &self,
        operation: AuthOperation,
        call: impl Future<Output = Result<(), AuthError>>,
    ) -> Result<(), AuthError> {
        self.sink.dispatch(SessionAction::Started(operation));
        match call.await {
            Ok(()) => {
                self.sink.dispatch(SessionAction::Completed(operation));
                Ok(())
            }
            Err(err) => Err(self.fail(operation, err)),
        }
    }

    fn fail(&self, operation: AuthOperation, err: AuthError) -> AuthError {
        self.sink.dispatch(SessionAction::Failed {
            operation,
            message: err.to_string(),
        });
        err
    }
}

/// User-menu key that navigates to the dashboard.
pub const MENU_DASHBOARD: &str = "dashboard";
/// User-menu key that signs out.
pub const MENU_LOGOUT: &str = "logout";

/// What the navigation bar shows for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavbarState {
    /// No user; offer sign in.
    Guest,
    /// Greeting plus a logout control.
    Authenticated {
        /// Display name of the user.
        name: String,
    },
}

impl NavbarState {
    /// Derive the navbar state from the session.
    #[must_use]
    pub fn from_session(session: &SessionState) -> Self {
        session
            .user
            .as_ref()
            .map_or(Self::Guest, |user| Self::Authenticated {
                name: user.name.clone(),
            })
    }

    /// Whether the logout control is rendered.
    #[must_use]
    pub const fn shows_logout(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Entries of the avatar menu; guests get none.
    #[must_use]
    pub fn menu_items(&self) -> Vec<ChoiceItem> {
        if self.shows_logout() {
            vec![
                ChoiceItem::new(MENU_DASHBOARD, "Dashboard"),
                ChoiceItem::new(MENU_LOGOUT, "Logout"),
            ]
        } else {
            Vec::new()
        }
    }

    /// Avatar initials: first letter of up to two words, `U` when unknown.
    #[must_use]
    pub fn initials(&self) -> String {
        let Self::Authenticated { name } = self else {
            return "U".to_string();
        };
        let initials: String = name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::MockAuthService;
    use crate::core::auth::test_support::RecordingDelay;
    use crate::core::forms::FormError;
    use std::cell::Cell;
    use std::time::Duration;

    type TestController =
        AuthController<MockAuthService<RecordingDelay>, MemoryStorage, RefCell<SessionState>>;

    fn controller(service: MockAuthService<RecordingDelay>) -> TestController {
        AuthController::new(
            service,
            MemoryStorage::default(),
            RefCell::new(SessionState::default()),
        )
    }

    fn mock() -> MockAuthService<RecordingDelay> {
        MockAuthService::new(
            RecordingDelay::default(),
            Duration::from_millis(1000),
            "1",
            "John Doe",
        )
    }

    fn credentials() -> LoginCredentials {
        LoginCredentials {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn login_updates_session_storage_and_navbar() {
        let ctl = controller(mock());
        ctl.login(credentials()).await.expect("mock login succeeds");

        let session = ctl.sink().borrow().clone();
        assert!(session.is_authenticated());
        assert!(!session.is_loading());
        assert_eq!(
            NavbarState::from_session(&session),
            NavbarState::Authenticated {
                name: "John Doe".to_string()
            }
        );
        assert!(NavbarState::from_session(&session).shows_logout());
        assert_eq!(
            ctl.storage().load_user().map(|user| user.email),
            Some("ada@example.com".to_string())
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn logout_clears_memory_and_storage() {
        let ctl = controller(mock());
        ctl.login(credentials()).await.expect("mock login succeeds");
        ctl.logout();

        assert!(!ctl.sink().borrow().is_authenticated());
        assert_eq!(ctl.storage().raw(), None);
        assert_eq!(
            NavbarState::from_session(&ctl.sink().borrow()),
            NavbarState::Guest
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_login_records_error_and_persists_nothing() {
        let ctl = controller(mock().failing_on(AuthOperation::Login));
        let err = ctl.login(credentials()).await.expect_err("configured to fail");

        assert_eq!(err, AuthError::LoginFailed);
        let session = ctl.sink().borrow().clone();
        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
        assert_eq!(session.last_error.as_deref(), Some("Login failed"));
        assert_eq!(ctl.storage().raw(), None);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn reset_and_forgot_complete_without_touching_user() {
        let ctl = controller(mock());
        ctl.forgot_password(ForgotPasswordRequest {
            email: "ada@example.com".to_string(),
        })
        .await
        .expect("forgot succeeds");
        ctl.reset_password(ResetPasswordRequest {
            token: "tok".to_string(),
            new_password: "pw".to_string(),
        })
        .await
        .expect("reset succeeds");
        let session = ctl.sink().borrow().clone();
        assert_eq!(session, SessionState::default());
    }

    #[derive(Default)]
    struct CountingService {
        resets: Cell<usize>,
    }

    impl AuthService for CountingService {
        async fn login(&self, credentials: &LoginCredentials) -> Result<User, AuthError> {
            Ok(User {
                id: "1".to_string(),
                email: credentials.email.clone(),
                name: "John Doe".to_string(),
            })
        }

        async fn forgot_password(&self, _request: &ForgotPasswordRequest) -> Result<(), AuthError> {
            Ok(())
        }

        async fn reset_password(&self, _request: &ResetPasswordRequest) -> Result<(), AuthError> {
            self.resets.set(self.resets.get() + 1);
            Ok(())
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn mismatched_reset_never_reaches_service() {
        let ctl = AuthController::new(
            CountingService::default(),
            MemoryStorage::default(),
            RefCell::new(SessionState::default()),
        );
        let mismatched = ResetPasswordForm {
            new_password: "alpha".to_string(),
            confirm_password: "alpha2".to_string(),
        };
        let err = ctl
            .submit_reset_password(&mismatched, "tok")
            .await
            .expect_err("mismatch rejected");
        assert_eq!(err, SubmitError::Invalid(FormError::PasswordMismatch));
        assert_eq!(ctl.service.resets.get(), 0);
        assert!(!ctl.sink().borrow().is_loading(), "no operation was started");

        let matching = ResetPasswordForm {
            new_password: "alpha".to_string(),
            confirm_password: "alpha".to_string(),
        };
        ctl.submit_reset_password(&matching, "tok")
            .await
            .expect("matching passwords reset");
        assert_eq!(ctl.service.resets.get(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn blank_login_is_rejected_before_service() {
        let ctl = controller(mock());
        let err = ctl
            .submit_login(&LoginForm::default())
            .await
            .expect_err("blank form");
        assert!(matches!(err, SubmitError::Invalid(FormError::Required { .. })));
        assert_eq!(ctl.sink().borrow().clone(), SessionState::default());
    }

    #[test]
    fn restore_rehydrates_persisted_user() {
        let ctl = controller(mock());
        ctl.storage()
            .set_raw(Some(r#"{"id":"7","email":"b@c.d","name":"Bea"}"#.to_string()));
        assert!(ctl.restore());
        assert_eq!(
            ctl.sink().borrow().user.as_ref().map(|user| user.name.as_str()),
            Some("Bea")
        );
    }

    #[test]
    fn restore_ignores_corrupt_payload() {
        let ctl = controller(mock());
        ctl.storage().set_raw(Some("not json".to_string()));
        assert!(!ctl.restore());
        assert!(!ctl.sink().borrow().is_authenticated());
    }

    #[test]
    fn started_clears_previous_error() {
        let mut state = SessionState {
            last_error: Some("Login failed".to_string()),
            ..SessionState::default()
        };
        state.apply(SessionAction::Started(AuthOperation::Login));
        assert!(state.is_loading());
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn initials_come_from_the_display_name() {
        let named = |name: &str| NavbarState::Authenticated {
            name: name.to_string(),
        };
        assert_eq!(named("John Doe").initials(), "JD");
        assert_eq!(named("ada lovelace byron").initials(), "AL");
        assert_eq!(named("   ").initials(), "U");
        assert_eq!(NavbarState::Guest.initials(), "U");
    }

    #[test]
    fn avatar_menu_only_for_signed_in_users() {
        assert!(NavbarState::Guest.menu_items().is_empty());
        let signed_in = NavbarState::Authenticated {
            name: "John Doe".to_string(),
        };
        let keys: Vec<_> = signed_in
            .menu_items()
            .into_iter()
            .map(|item| item.value)
            .collect();
        assert_eq!(keys, [MENU_DASHBOARD, MENU_LOGOUT]);
    }
}
