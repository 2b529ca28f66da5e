//! Port for resolving the current session into a [`Caller`].
//!
//! The session is passed explicitly so adapters never reach into ambient
//! request state and tests can drive any identity without HTTP plumbing.

use async_trait::async_trait;

use crate::domain::{Caller, CallerId, RequestSession, Role, VerificationStatus};

use super::define_port_error;

/// Identifier of the verified doctor known to the fixture resolver.
pub const FIXTURE_VERIFIED_DOCTOR_ID: &str = "doctor_verified";
/// Identifier of the doctor whose verification is pending.
pub const FIXTURE_PENDING_DOCTOR_ID: &str = "doctor_pending";
/// Identifier of the patient known to the fixture resolver.
pub const FIXTURE_PATIENT_ID: &str = "patient_demo";

define_port_error! {
    /// Errors raised by identity resolver adapters.
    pub enum IdentityResolverError {
        /// The identity provider could not be reached.
        Unavailable { message: String } =>
            "identity provider unavailable: {message}",
        /// The identity provider answered but the lookup failed.
        Lookup { message: String } =>
            "identity lookup failed: {message}",
    }
}

/// Driven port answering "who is making this request?".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Return the caller bound to `session`, or `None` when nobody is signed in
    /// or the account is unknown.
    async fn current_caller(
        &self,
        session: &RequestSession,
    ) -> Result<Option<Caller>, IdentityResolverError>;
}

/// In-memory identity directory used until an identity provider is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityResolver;

impl FixtureIdentityResolver {
    fn lookup(id: &CallerId) -> Option<Caller> {
        let (role, status) = match id.as_ref() {
            FIXTURE_VERIFIED_DOCTOR_ID => (Role::Doctor, Some(VerificationStatus::Verified)),
            FIXTURE_PENDING_DOCTOR_ID => (Role::Doctor, Some(VerificationStatus::Pending)),
            FIXTURE_PATIENT_ID => (Role::Patient, None),
            _ => return None,
        };
        Some(Caller::new(id.clone(), role, status))
    }
}

#[async_trait]
impl IdentityResolver for FixtureIdentityResolver {
    async fn current_caller(
        &self,
        session: &RequestSession,
    ) -> Result<Option<Caller>, IdentityResolverError> {
        Ok(session.caller_id().and_then(Self::lookup))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn session_for(id: &str) -> RequestSession {
        RequestSession::signed_in(CallerId::new(id).expect("fixture id"))
    }

    #[rstest]
    #[case(FIXTURE_VERIFIED_DOCTOR_ID, Role::Doctor, Some(VerificationStatus::Verified))]
    #[case(FIXTURE_PENDING_DOCTOR_ID, Role::Doctor, Some(VerificationStatus::Pending))]
    #[case(FIXTURE_PATIENT_ID, Role::Patient, None)]
    #[tokio::test]
    async fn fixture_resolves_known_callers(
        #[case] id: &str,
        #[case] role: Role,
        #[case] status: Option<VerificationStatus>,
    ) {
        let caller = FixtureIdentityResolver
            .current_caller(&session_for(id))
            .await
            .expect("lookup succeeds")
            .expect("known caller");

        assert_eq!(caller.id().as_ref(), id);
        assert_eq!(caller.role(), role);
        assert_eq!(caller.verification_status(), status);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_returns_none_for_unknown_or_anonymous_sessions() {
        let unknown = FixtureIdentityResolver
            .current_caller(&session_for("someone_else"))
            .await
            .expect("lookup succeeds");
        assert!(unknown.is_none());

        let anonymous = FixtureIdentityResolver
            .current_caller(&RequestSession::anonymous())
            .await
            .expect("lookup succeeds");
        assert!(anonymous.is_none());
    }
}
