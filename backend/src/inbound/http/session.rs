//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: persisting the authenticated identity,
//! queueing flash messages and clearing everything on logout.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use super::flash::Flash;
use crate::domain::{Error, SessionIdentity};

pub(crate) const IDENTITY_KEY: &str = "identity";
pub(crate) const FLASHES_KEY: &str = "flashes";

/// Read the stored identity.
///
/// Unreadable or malformed entries (including unknown roles) are treated as
/// an anonymous session.
pub(crate) fn identity_from(session: &Session) -> Option<SessionIdentity> {
    match session.get::<SessionIdentity>(IDENTITY_KEY) {
        Ok(identity) => identity,
        Err(error) => {
            warn!(%error, "discarding unreadable session identity");
            None
        }
    }
}

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the identity of a freshly authenticated or edited account.
    pub fn persist_identity(&self, identity: &SessionIdentity) -> Result<(), Error> {
        self.0
            .insert(IDENTITY_KEY, identity)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Identity currently held by the session, if any.
    pub fn identity(&self) -> Option<SessionIdentity> {
        identity_from(&self.0)
    }

    /// Rotate the session key after a privilege change such as login.
    pub fn renew(&self) {
        self.0.renew();
    }

    /// Drop all session state and expire the cookie.
    pub fn purge(&self) {
        self.0.purge();
    }

    /// Queue a flash message for the next page read.
    pub fn push_flash(&self, flash: Flash) -> Result<(), Error> {
        let mut pending = self.peek_flashes();
        pending.push(flash);
        self.0
            .insert(FLASHES_KEY, pending)
            .map_err(|error| Error::internal(format!("failed to persist flash: {error}")))
    }

    /// Remove and return every queued flash message.
    pub fn take_flashes(&self) -> Vec<Flash> {
        let pending = self.peek_flashes();
        self.0.remove(FLASHES_KEY);
        pending
    }

    fn peek_flashes(&self) -> Vec<Flash> {
        match self.0.get::<Vec<Flash>>(FLASHES_KEY) {
            Ok(pending) => pending.unwrap_or_default(),
            Err(error) => {
                warn!(%error, "discarding unreadable flash messages");
                Vec::new()
            }
        }
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
