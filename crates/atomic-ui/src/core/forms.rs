//! Client-side checks for the authentication forms.
//!
//! # Design
//! - Forms hold raw strings; validation turns them into typed requests.
//! - Only required-field and password-match checks run here.
//! - Reset tokens come from the query string and gate the reset form.

use crate::core::auth::{AuthError, ForgotPasswordRequest, LoginCredentials, ResetPasswordRequest};
use thiserror::Error;

/// Client-side validation failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required field was blank.
    #[error("{field} is required")]
    Required {
        /// Label of the blank field.
        field: &'static str,
    },
    /// New and confirmation passwords differ.
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Failure of a form submission: rejected locally or by the service.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Client-side validation failed; the service was not called.
    #[error(transparent)]
    Invalid(#[from] FormError),
    /// The service call failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl FormError {
    /// Label of the field the error belongs to, when it belongs to one.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Required { field } => Some(*field),
            Self::PasswordMismatch => Some(CONFIRM_PASSWORD),
        }
    }
}

/// Email field label.
pub const EMAIL: &str = "Email";
/// Password field label.
pub const PASSWORD: &str = "Password";
/// New password field label.
pub const NEW_PASSWORD: &str = "New Password";
/// Confirmation field label.
pub const CONFIRM_PASSWORD: &str = "Confirm Password";

fn required(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required { field })
    } else {
        Ok(())
    }
}

/// Raw sign-in form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
}

impl LoginForm {
    /// Validate into credentials.
    ///
    /// # Errors
    /// Returns [`FormError::Required`] for the first blank field.
    pub fn validate(&self) -> Result<LoginCredentials, FormError> {
        required(&self.email, EMAIL)?;
        required(&self.password, PASSWORD)?;
        Ok(LoginCredentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Raw forgot-password form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    /// Email input.
    pub email: String,
}

impl ForgotPasswordForm {
    /// Validate into a reset-email request.
    ///
    /// # Errors
    /// Returns [`FormError::Required`] when the email is blank.
    pub fn validate(&self) -> Result<ForgotPasswordRequest, FormError> {
        required(&self.email, EMAIL)?;
        Ok(ForgotPasswordRequest {
            email: self.email.trim().to_string(),
        })
    }
}

/// Raw reset-password form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    /// New password input.
    pub new_password: String,
    /// Confirmation input.
    pub confirm_password: String,
}

impl ResetPasswordForm {
    /// Validate into a reset request bound to `token`.
    ///
    /// # Errors
    /// Returns [`FormError::Required`] for a blank field or
    /// [`FormError::PasswordMismatch`] when the two passwords differ.
    pub fn validate(&self, token: &str) -> Result<ResetPasswordRequest, FormError> {
        required(&self.new_password, NEW_PASSWORD)?;
        required(&self.confirm_password, CONFIRM_PASSWORD)?;
        if self.new_password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(ResetPasswordRequest {
            token: token.to_string(),
            new_password: self.new_password.clone(),
        })
    }
}

/// Extract the `token` parameter from a query string (with or without `?`).
///
/// Blank tokens count as missing.
#[must_use]
pub fn reset_token_from_query(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == "token")
        .and_then(|(_, value)| {
            let spaced = value.replace('+', " ");
            urlencoding::decode(&spaced).ok().map(|decoded| decoded.into_owned())
        })
        .filter(|token| !token.trim().is_empty())
}

/// Console notice after the mock reset email is sent.
#[must_use]
pub fn reset_email_notice(email: &str) -> String {
    format!("Password reset email sent to: {email}")
}

/// Console notice after the mock reset succeeds.
#[must_use]
pub fn reset_success_notice(token: &str) -> String {
    format!("Password reset successful for token: {token}")
}

/// Which panel the reset page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetView {
    /// Reset done; offer the way back to sign in.
    Succeeded,
    /// No usable token; the form is never shown.
    InvalidLink,
    /// Token present; show the password fields.
    Form {
        /// Token the form will submit with.
        token: String,
    },
}

impl ResetView {
    /// Resolve the panel; success wins over token checks.
    #[must_use]
    pub fn resolve(token: Option<&str>, submitted: bool) -> Self {
        if submitted {
            return Self::Succeeded;
        }
        token.map_or(Self::InvalidLink, |token| Self::Form {
            token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        let blank_email = LoginForm {
            email: "  ".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(
            blank_email.validate(),
            Err(FormError::Required { field: EMAIL })
        );
        let blank_password = LoginForm {
            email: "ada@example.com".to_string(),
            password: String::new(),
        };
        assert_eq!(
            blank_password.validate().map_err(|err| err.to_string()),
            Err("Password is required".to_string())
        );
    }

    #[test]
    fn login_trims_email_only() {
        let form = LoginForm {
            email: " ada@example.com ".to_string(),
            password: " pw ".to_string(),
        };
        let creds = form.validate().expect("valid form");
        assert_eq!(creds.email, "ada@example.com");
        assert_eq!(creds.password, " pw ");
    }

    #[test]
    fn forgot_requires_email() {
        assert!(ForgotPasswordForm::default().validate().is_err());
        let ok = ForgotPasswordForm {
            email: "ada@example.com".to_string(),
        };
        assert_eq!(ok.validate().map(|req| req.email).ok().as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn reset_mismatch_is_rejected() {
        let form = ResetPasswordForm {
            new_password: "alpha".to_string(),
            confirm_password: "beta".to_string(),
        };
        let err = form.validate("tok").expect_err("mismatch");
        assert_eq!(err, FormError::PasswordMismatch);
        assert_eq!(err.to_string(), "Passwords do not match");
        assert_eq!(err.field(), Some(CONFIRM_PASSWORD));
    }

    #[test]
    fn reset_match_binds_token() {
        let form = ResetPasswordForm {
            new_password: "alpha".to_string(),
            confirm_password: "alpha".to_string(),
        };
        let request = form.validate("tok-1").expect("matching passwords");
        assert_eq!(request.token, "tok-1");
        assert_eq!(request.new_password, "alpha");
    }

    #[test]
    fn token_is_read_and_decoded_from_query() {
        assert_eq!(reset_token_from_query("?token=abc123"), Some("abc123".to_string()));
        assert_eq!(
            reset_token_from_query("foo=1&token=a%2Bb%3D"),
            Some("a+b=".to_string())
        );
        assert_eq!(reset_token_from_query("token=a+b"), Some("a b".to_string()));
    }

    #[test]
    fn missing_or_blank_token_is_none() {
        assert_eq!(reset_token_from_query(""), None);
        assert_eq!(reset_token_from_query("?"), None);
        assert_eq!(reset_token_from_query("?token="), None);
        assert_eq!(reset_token_from_query("?token"), None);
        assert_eq!(reset_token_from_query("?tokens=abc"), None);
    }

    #[test]
    fn reset_view_without_token_never_shows_form() {
        assert_eq!(ResetView::resolve(None, false), ResetView::InvalidLink);
        let token = reset_token_from_query("?other=1");
        assert_eq!(
            ResetView::resolve(token.as_deref(), false),
            ResetView::InvalidLink
        );
        assert_eq!(
            ResetView::resolve(Some("t"), false),
            ResetView::Form {
                token: "t".to_string()
            }
        );
        assert_eq!(ResetView::resolve(None, true), ResetView::Succeeded);
    }

    #[test]
    fn success_notices_name_the_email_and_token() {
        let request = ForgotPasswordForm {
            email: " ada@example.com ".to_string(),
        }
        .validate()
        .expect("valid email");
        assert_eq!(
            reset_email_notice(&request.email),
            "Password reset email sent to: ada@example.com"
        );
        assert_eq!(
            reset_success_notice("tok-9"),
            "Password reset successful for token: tok-9"
        );
    }
}
