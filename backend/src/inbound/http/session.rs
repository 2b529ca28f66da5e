//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations such as persisting a caller id or building the
//! explicit [`RequestSession`] the dashboard use-case consumes.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{CallerId, Error, RequestSession};

pub(crate) const CALLER_ID_KEY: &str = "caller_id";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated caller's id in the session cookie.
    pub fn persist_caller(&self, caller_id: &CallerId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(CALLER_ID_KEY, caller_id.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the current caller id from the session, if present.
    ///
    /// A malformed or unreadable cookie value is logged and treated as no
    /// identity at all.
    pub fn caller_id(&self) -> Option<CallerId> {
        let raw = match self.0.get::<String>(CALLER_ID_KEY) {
            Ok(raw) => raw?,
            Err(error) => {
                warn!(%error, "failed to read session cookie");
                return None;
            }
        };
        match CallerId::new(raw) {
            Ok(id) => Some(id),
            Err(error) => {
                warn!(%error, "invalid caller id in session cookie");
                None
            }
        }
    }

    /// Explicit per-request session context for the domain.
    pub fn request_session(&self) -> RequestSession {
        RequestSession::from(self.caller_id())
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
