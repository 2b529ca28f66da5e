//! Driving port for the session bootstrap login.
//!
//! Inbound adapters call this port to turn credentials into the
//! [`CallerId`] stored in the session cookie. Handler tests substitute the
//! fixture so no identity provider is needed.

use async_trait::async_trait;

use crate::domain::{CallerId, Error, LoginCredentials};

use super::{FIXTURE_PATIENT_ID, FIXTURE_PENDING_DOCTOR_ID, FIXTURE_VERIFIED_DOCTOR_ID};

/// Password shared by every fixture account.
pub const FIXTURE_PASSWORD: &str = "password";

/// Domain use-case port for authentication.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated caller id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<CallerId, Error>;
}

/// In-memory authenticator matching the fixture identity directory.
///
/// `doctor`, `pending-doctor`, and `patient` sign in with
/// [`FIXTURE_PASSWORD`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<CallerId, Error> {
        if credentials.password() != FIXTURE_PASSWORD {
            return Err(Error::unauthorized("invalid credentials"));
        }
        let raw = match credentials.username() {
            "doctor" => FIXTURE_VERIFIED_DOCTOR_ID,
            "pending-doctor" => FIXTURE_PENDING_DOCTOR_ID,
            "patient" => FIXTURE_PATIENT_ID,
            _ => return Err(Error::unauthorized("invalid credentials")),
        };
        CallerId::new(raw).map_err(|err| Error::internal(format!("invalid fixture caller id: {err}")))
    }
}
