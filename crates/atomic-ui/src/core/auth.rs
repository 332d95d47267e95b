//! Authentication primitives and the mock authentication service.
//!
//! # Design
//! - Keep credentials and users as plain data so callers can store/clear them freely.
//! - Simulated latency goes through [`Delay`] so the service stays DOM-free.
//! - Each operation fails with one fixed message; there is no error taxonomy beyond that.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Signed-in user returned by the authentication service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier.
    pub id: String,
    /// Email used to sign in.
    pub email: String,
    /// Display name.
    pub name: String,
}

/// Email/password pair submitted by the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginCredentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Payload for requesting a reset email.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    /// Address that receives the reset link.
    pub email: String,
}

/// Payload for completing a password reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetPasswordRequest {
    /// Token carried by the reset link.
    pub token: String,
    /// Replacement password.
    pub new_password: String,
}

/// Asynchronous operations exposed by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthOperation {
    /// Sign in.
    Login,
    /// Request a reset email.
    ForgotPassword,
    /// Complete a reset.
    ResetPassword,
}

/// Failure of an authentication operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Sign-in was rejected.
    #[error("Login failed")]
    LoginFailed,
    /// The reset email could not be sent.
    #[error("Failed to send reset email")]
    ForgotPasswordFailed,
    /// The reset could not be completed.
    #[error("Failed to reset password")]
    ResetPasswordFailed,
}

impl AuthError {
    /// The error reported when `operation` fails.
    #[must_use]
    pub const fn for_operation(operation: AuthOperation) -> Self {
        match operation {
            AuthOperation::Login => Self::LoginFailed,
            AuthOperation::ForgotPassword => Self::ForgotPasswordFailed,
            AuthOperation::ResetPassword => Self::ResetPasswordFailed,
        }
    }
}

/// Suspends the caller for a fixed duration.
pub trait Delay {
    /// Wait for `duration`.
    fn wait(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Remote authentication endpoint.
pub trait AuthService {
    /// Exchange credentials for a user.
    fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> impl Future<Output = Result<User, AuthError>>;

    /// Send a password reset email.
    fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> impl Future<Output = Result<(), AuthError>>;

    /// Apply a new password using a reset token.
    fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> impl Future<Output = Result<(), AuthError>>;
}

/// In-process stand-in for a real authentication backend.
#[derive(Clone, Debug)]
pub struct MockAuthService<D> {
    delay: D,
    latency: Duration,
    user_id: String,
    user_name: String,
    failing: Option<AuthOperation>,
}

impl<D: Delay> MockAuthService<D> {
    /// Build a mock that answers after `latency` with the given identity.
    pub fn new(
        delay: D,
        latency: Duration,
        user_id: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            delay,
            latency,
            user_id: user_id.into(),
            user_name: user_name.into(),
            failing: None,
        }
    }

    /// Make every call to `operation` fail after the simulated latency.
    #[must_use]
    pub fn failing_on(mut self, operation: AuthOperation) -> Self {
        self.failing = Some(operation);
        self
    }

    /// Configured latency.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }

    async fn settle(&self, operation: AuthOperation) -> Result<(), AuthError> {
        self.delay.wait(self.latency).await;
        if self.failing == Some(operation) {
            return Err(AuthError::for_operation(operation));
        }
        Ok(())
    }
}

impl<D: Delay> AuthService for MockAuthService<D> {
    async fn login(&self, credentials: &LoginCredentials) -> Result<User, AuthError> {
        self.settle(AuthOperation::Login).await?;
        Ok(User {
            id: self.user_id.clone(),
            email: credentials.email.clone(),
            name: self.user_name.clone(),
        })
    }

    async fn forgot_password(&self, _request: &ForgotPasswordRequest) -> Result<(), AuthError> {
        self.settle(AuthOperation::ForgotPassword).await
    }

    async fn reset_password(&self, _request: &ResetPasswordRequest) -> Result<(), AuthError> {
        self.settle(AuthOperation::ResetPassword).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Delay;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    /// Delay that returns immediately and records what was requested.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingDelay {
        pub(crate) waits: Rc<RefCell<Vec<Duration>>>,
    }

    impl Delay for RecordingDelay {
        async fn wait(&self, duration: Duration) {
            self.waits.borrow_mut().push(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingDelay;
    use super::*;

    fn service(delay: RecordingDelay) -> MockAuthService<RecordingDelay> {
        MockAuthService::new(delay, Duration::from_millis(1000), "1", "John Doe")
    }

    #[tokio::test(flavor = "current_thread")]
    async fn login_echoes_email_with_fixed_identity() {
        let delay = RecordingDelay::default();
        let user = service(delay.clone())
            .login(&LoginCredentials {
                email: "ada@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .expect("mock login succeeds");
        assert_eq!(
            user,
            User {
                id: "1".to_string(),
                email: "ada@example.com".to_string(),
                name: "John Doe".to_string(),
            }
        );
        assert_eq!(*delay.waits.borrow(), vec![Duration::from_millis(1000)]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn configured_failure_uses_operation_message() {
        let delay = RecordingDelay::default();
        let svc = service(delay.clone()).failing_on(AuthOperation::ResetPassword);
        let err = svc
            .reset_password(&ResetPasswordRequest {
                token: "abc".to_string(),
                new_password: "pw".to_string(),
            })
            .await
            .expect_err("reset configured to fail");
        assert_eq!(err.to_string(), "Failed to reset password");
        svc.forgot_password(&ForgotPasswordRequest {
            email: "ada@example.com".to_string(),
        })
        .await
        .expect("other operations unaffected");
        assert_eq!(delay.waits.borrow().len(), 2, "latency applies to failures too");
    }

    #[test]
    fn error_messages_are_fixed_per_operation() {
        assert_eq!(
            AuthError::for_operation(AuthOperation::Login).to_string(),
            "Login failed"
        );
        assert_eq!(
            AuthError::for_operation(AuthOperation::ForgotPassword).to_string(),
            "Failed to send reset email"
        );
    }

    #[test]
    fn user_round_trips_through_json() {
        let json = r#"{"id":"1","email":"a@b.c","name":"John Doe"}"#;
        let user: User = serde_json::from_str(json).expect("valid user json");
        assert_eq!(user.name, "John Doe");
    }
}
