//! Authorisation gate for the doctor dashboard.
//!
//! [`SessionResolver::resolve`] turns an explicit [`RequestSession`] into a
//! tagged [`Resolution`]. Gates run in a fixed order: identity present, then
//! role, then verification. A caller with the wrong role is therefore never
//! sent to the verification page.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::IdentityResolver;
use super::{Caller, CallerId};

/// Per-request session context read by the inbound adapter.
///
/// Holds whatever the session cookie carried; resolving it into a
/// [`Caller`] is the identity port's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSession {
    caller_id: Option<CallerId>,
}

impl RequestSession {
    /// Session for a request carrying no signed-in identity.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session bound to `caller_id`.
    pub fn signed_in(caller_id: CallerId) -> Self {
        Self {
            caller_id: Some(caller_id),
        }
    }

    /// Identifier stored in the session, if any.
    pub fn caller_id(&self) -> Option<&CallerId> {
        self.caller_id.as_ref()
    }
}

impl From<Option<CallerId>> for RequestSession {
    fn from(caller_id: Option<CallerId>) -> Self {
        Self { caller_id }
    }
}

/// Page the presentation layer should send a rejected caller to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedirectTarget {
    /// Sign-in and role selection.
    Onboarding,
    /// Doctor credential verification status page.
    Verification,
}

impl RedirectTarget {
    /// Application path for the target.
    ///
    /// # Examples
    /// ```
    /// use doctor_dashboard::domain::RedirectTarget;
    ///
    /// assert_eq!(RedirectTarget::Onboarding.path(), "/onboarding");
    /// assert_eq!(RedirectTarget::Verification.path(), "/doctor/verification");
    /// ```
    pub fn path(self) -> &'static str {
        match self {
            Self::Onboarding => "/onboarding",
            Self::Verification => "/doctor/verification",
        }
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of resolving a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The caller is a verified doctor and may see the dashboard.
    Authorized(Caller),
    /// The caller must be sent elsewhere; no dashboard data is loaded.
    RedirectTo(RedirectTarget),
}

/// Resolves sessions into authorised doctors or redirects.
#[derive(Clone)]
pub struct SessionResolver {
    identity: Arc<dyn IdentityResolver>,
}

impl SessionResolver {
    /// Create a resolver backed by `identity`.
    pub fn new(identity: Arc<dyn IdentityResolver>) -> Self {
        Self { identity }
    }

    /// Resolve `session` into a [`Resolution`].
    ///
    /// Never fails: an identity provider error is logged and treated as an
    /// anonymous session.
    pub async fn resolve(&self, session: &RequestSession) -> Resolution {
        let caller = match self.identity.current_caller(session).await {
            Ok(caller) => caller,
            Err(error) => {
                warn!(%error, "identity lookup failed; treating session as anonymous");
                None
            }
        };

        let Some(caller) = caller else {
            debug!("no caller in session; redirecting to onboarding");
            return Resolution::RedirectTo(RedirectTarget::Onboarding);
        };
        if !caller.is_doctor() {
            debug!(caller_id = %caller.id(), role = ?caller.role(), "caller is not a doctor");
            return Resolution::RedirectTo(RedirectTarget::Onboarding);
        }
        if !caller.is_verified() {
            debug!(
                caller_id = %caller.id(),
                status = ?caller.verification_status(),
                "doctor is not verified"
            );
            return Resolution::RedirectTo(RedirectTarget::Verification);
        }
        Resolution::Authorized(caller)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{IdentityResolverError, MockIdentityResolver};
    use crate::domain::{Role, VerificationStatus};
    use rstest::rstest;

    fn resolver_returning(
        result: Result<Option<Caller>, IdentityResolverError>,
    ) -> SessionResolver {
        let mut identity = MockIdentityResolver::new();
        identity
            .expect_current_caller()
            .times(1)
            .return_once(move |_| result);
        SessionResolver::new(Arc::new(identity))
    }

    fn caller(role: Role, status: Option<VerificationStatus>) -> Caller {
        Caller::new(CallerId::new("d1").expect("caller id"), role, status)
    }

    fn signed_in() -> RequestSession {
        RequestSession::signed_in(CallerId::new("d1").expect("caller id"))
    }

    #[rstest]
    #[tokio::test]
    async fn missing_caller_redirects_to_onboarding() {
        let resolver = resolver_returning(Ok(None));
        let resolution = resolver.resolve(&RequestSession::anonymous()).await;
        assert_eq!(
            resolution,
            Resolution::RedirectTo(RedirectTarget::Onboarding)
        );
    }

    #[rstest]
    #[case(Role::Patient, None)]
    #[case(Role::Patient, Some(VerificationStatus::Verified))]
    #[case(Role::Admin, Some(VerificationStatus::Pending))]
    #[case(Role::Unassigned, None)]
    #[tokio::test]
    async fn non_doctors_redirect_to_onboarding_regardless_of_status(
        #[case] role: Role,
        #[case] status: Option<VerificationStatus>,
    ) {
        let resolver = resolver_returning(Ok(Some(caller(role, status))));
        let resolution = resolver.resolve(&signed_in()).await;
        assert_eq!(
            resolution,
            Resolution::RedirectTo(RedirectTarget::Onboarding)
        );
    }

    #[rstest]
    #[case(Some(VerificationStatus::Pending))]
    #[case(Some(VerificationStatus::Rejected))]
    #[case(None)]
    #[tokio::test]
    async fn unverified_doctors_redirect_to_verification(
        #[case] status: Option<VerificationStatus>,
    ) {
        let resolver = resolver_returning(Ok(Some(caller(Role::Doctor, status))));
        let resolution = resolver.resolve(&signed_in()).await;
        assert_eq!(
            resolution,
            Resolution::RedirectTo(RedirectTarget::Verification)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn verified_doctor_is_authorised() {
        let doctor = caller(Role::Doctor, Some(VerificationStatus::Verified));
        let resolver = resolver_returning(Ok(Some(doctor.clone())));
        let resolution = resolver.resolve(&signed_in()).await;
        assert_eq!(resolution, Resolution::Authorized(doctor));
    }

    #[rstest]
    #[tokio::test]
    async fn identity_failure_is_treated_as_anonymous() {
        let resolver =
            resolver_returning(Err(IdentityResolverError::unavailable("connection refused")));
        let resolution = resolver.resolve(&signed_in()).await;
        assert_eq!(
            resolution,
            Resolution::RedirectTo(RedirectTarget::Onboarding)
        );
    }
}
