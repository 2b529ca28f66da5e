//! Caller identity as reported by the identity collaborator.
//!
//! A [`Caller`] is read once per request and never mutated. Authorisation
//! decisions only look at [`Role`] and [`VerificationStatus`]; everything else
//! about the account lives outside this service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`CallerId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallerIdValidationError {
    /// The identifier was empty.
    #[error("caller id must not be empty")]
    Empty,
    /// The identifier contained whitespace.
    #[error("caller id must not contain whitespace")]
    ContainsWhitespace,
}

/// Opaque caller identifier issued by the identity collaborator.
///
/// # Examples
/// ```
/// use doctor_dashboard::domain::CallerId;
///
/// let id = CallerId::new("user_2abc").expect("valid id");
/// assert_eq!(id.as_ref(), "user_2abc");
/// assert!(CallerId::new(" user_2abc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CallerId(String);

impl CallerId {
    /// Validate and construct a [`CallerId`].
    pub fn new(id: impl Into<String>) -> Result<Self, CallerIdValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(CallerIdValidationError::Empty);
        }
        if id.chars().any(char::is_whitespace) {
            return Err(CallerIdValidationError::ContainsWhitespace);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for CallerId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CallerId> for String {
    fn from(value: CallerId) -> Self {
        value.0
    }
}

impl TryFrom<String> for CallerId {
    type Error = CallerIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Account role assigned during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Onboarding has not assigned a role yet.
    Unassigned,
    /// Patient booking appointments.
    Patient,
    /// Doctor offering appointments.
    Doctor,
    /// Platform administrator.
    Admin,
}

/// Credential review state for doctors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// Submitted credentials await review.
    Pending,
    /// Credentials were approved.
    Verified,
    /// Credentials were rejected.
    Rejected,
}

/// Authenticated identity making the current request.
///
/// `verification_status` is `None` for accounts that never went through
/// doctor verification; it counts as not verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caller {
    id: CallerId,
    role: Role,
    #[serde(default)]
    verification_status: Option<VerificationStatus>,
}

impl Caller {
    /// Build a caller from its parts.
    pub fn new(id: CallerId, role: Role, verification_status: Option<VerificationStatus>) -> Self {
        Self {
            id,
            role,
            verification_status,
        }
    }

    /// Stable identifier used to key data-source reads.
    #[must_use]
    pub const fn id(&self) -> &CallerId {
        &self.id
    }

    /// Role assigned to the account.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Verification state, when the account has one.
    #[must_use]
    pub const fn verification_status(&self) -> Option<VerificationStatus> {
        self.verification_status
    }

    /// Whether the account holds the doctor role.
    #[must_use]
    pub const fn is_doctor(&self) -> bool {
        matches!(self.role, Role::Doctor)
    }

    /// Whether the account's credentials were approved.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        matches!(self.verification_status, Some(VerificationStatus::Verified))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("", CallerIdValidationError::Empty)]
    #[case("user 1", CallerIdValidationError::ContainsWhitespace)]
    #[case("user1\n", CallerIdValidationError::ContainsWhitespace)]
    fn caller_id_rejects_invalid_input(
        #[case] raw: &str,
        #[case] expected: CallerIdValidationError,
    ) {
        assert_eq!(CallerId::new(raw).expect_err("invalid id"), expected);
    }

    #[rstest]
    fn caller_deserialises_upper_case_enums() {
        let caller: Caller = serde_json::from_value(json!({
            "id": "d1",
            "role": "DOCTOR",
            "verificationStatus": "PENDING",
        }))
        .expect("caller payload");

        assert_eq!(caller.id().as_ref(), "d1");
        assert!(caller.is_doctor());
        assert_eq!(
            caller.verification_status(),
            Some(VerificationStatus::Pending)
        );
        assert!(!caller.is_verified());
    }

    #[rstest]
    fn missing_verification_status_is_not_verified() {
        let caller: Caller = serde_json::from_value(json!({ "id": "p1", "role": "PATIENT" }))
            .expect("caller payload");
        assert_eq!(caller.verification_status(), None);
        assert!(!caller.is_verified());
    }

    #[rstest]
    fn blank_id_in_payload_is_rejected() {
        let result = serde_json::from_value::<Caller>(json!({ "id": "", "role": "DOCTOR" }));
        assert!(result.is_err());
    }
}
