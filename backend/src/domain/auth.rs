//! Login credentials accepted by the session bootstrap endpoint.
//!
//! Inbound adapters build [`LoginCredentials`] from raw strings and hand them
//! to the [`crate::domain::ports::LoginService`] port, which yields the
//! [`crate::domain::CallerId`] stored in the session cookie.

use std::fmt;

use zeroize::Zeroizing;

/// Raised when a login payload is structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty; surrounding whitespace is preserved and the
///   buffer is zeroed on drop.
///
/// # Examples
/// ```
/// use doctor_dashboard::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" dr.house ", "vicodin").unwrap();
/// assert_eq!(creds.username(), "dr.house");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username and password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username used for the identity lookup.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyUsername)]
    #[case(" \t ", "pw", LoginValidationError::EmptyUsername)]
    #[case("doctor", "", LoginValidationError::EmptyPassword)]
    fn rejects_blank_fields(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("blank inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn keeps_password_whitespace() {
        let creds =
            LoginCredentials::try_from_parts("patient", " spaced ").expect("valid credentials");
        assert_eq!(creds.username(), "patient");
        assert_eq!(creds.password(), " spaced ");
    }

    #[rstest]
    fn debug_output_hides_the_password() {
        let creds =
            LoginCredentials::try_from_parts("doctor", "hunter2").expect("valid credentials");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("doctor"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
