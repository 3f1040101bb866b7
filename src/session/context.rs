//! Shared session state with a single source of truth.
//!
//! Every consumer reads the session through one `SessionContext` instead of
//! repeating its own token check. The context publishes `SessionStatus` over a
//! watch channel so observers can subscribe and derive values from it.

use super::{
    guard::{InvalidReason, LOGIN_ROUTE, Navigator, SessionGuard, SessionStatus},
    store::{StoreError, TokenStore},
    token::now_unix,
};
use secrecy::SecretString;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    status: Arc<watch::Sender<SessionStatus>>,
}

impl SessionContext {
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        let (status, _) = watch::channel(SessionStatus::Unchecked);
        Self {
            store,
            navigator,
            status: Arc::new(status),
        }
    }

    #[must_use]
    pub fn store(&self) -> Arc<dyn TokenStore> {
        self.store.clone()
    }

    #[must_use]
    pub fn navigator(&self) -> Arc<dyn Navigator> {
        self.navigator.clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.status.subscribe()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status.borrow().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status.borrow().is_valid()
    }

    /// Re-run the guard cycle and publish the outcome.
    pub fn refresh(&self) -> SessionStatus {
        self.refresh_at(now_unix())
    }

    pub fn refresh_at(&self, now: i64) -> SessionStatus {
        self.status.send_replace(SessionStatus::Checking);

        let mut guard = SessionGuard::new(self.store.clone(), self.navigator.clone());
        let outcome = guard.check_at(now).clone();

        debug!("session refreshed: {outcome:?}");
        self.status.send_replace(outcome.clone());
        outcome
    }

    /// Store a freshly issued token and publish the resulting status.
    /// # Errors
    /// Returns an error if the token cannot be written to the store.
    pub fn sign_in(&self, token: SecretString) -> Result<SessionStatus, StoreError> {
        self.store.set_token(token)?;
        Ok(self.refresh())
    }

    /// Remove the token and return to the login route.
    /// # Errors
    /// Returns an error if the token cannot be removed from the store.
    pub fn sign_out(&self) -> Result<(), StoreError> {
        self.store.remove_token()?;
        self.status
            .send_replace(SessionStatus::Invalid(InvalidReason::SignedOut));
        self.navigator.navigate(LOGIN_ROUTE);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{guard::EXPIRED_LOGIN_ROUTE, store::MemoryStore};
    use base64ct::{Base64UrlUnpadded, Encoding};
    use secrecy::ExposeSecret;
    use std::sync::Mutex;

    const NOW: i64 = 1_750_000_000;

    fn token_expiring_at(exp: i64) -> String {
        let payload = Base64UrlUnpadded::encode_string(format!(r#"{{"exp":{exp}}}"#).as_bytes());
        format!("eyJhbGciOiJIUzI1NiJ9.{payload}.sig")
    }

    fn context_with(store: MemoryStore) -> (SessionContext, Arc<Mutex<Vec<String>>>) {
        let routes = Arc::new(Mutex::new(Vec::new()));
        let sink = routes.clone();
        let context = SessionContext::new(
            Arc::new(store),
            Arc::new(move |route: &str| sink.lock().unwrap().push(route.to_string())),
        );
        (context, routes)
    }

    #[test]
    fn subscribers_observe_refresh() {
        let (context, routes) = context_with(MemoryStore::with_token(&token_expiring_at(NOW + 60)));
        let mut first = context.subscribe();
        let second = context.subscribe();

        assert_eq!(*first.borrow(), SessionStatus::Unchecked);
        context.refresh_at(NOW);

        assert!(first.has_changed().unwrap());
        assert_eq!(
            *first.borrow_and_update(),
            SessionStatus::Valid {
                expires_at: NOW + 60
            }
        );
        assert!(second.borrow().is_valid());
        assert!(context.is_authenticated());
        assert!(routes.lock().unwrap().is_empty());
    }

    #[test]
    fn refresh_after_expiry_invalidates_once_for_everyone() {
        let (context, routes) = context_with(MemoryStore::with_token(&token_expiring_at(NOW + 60)));
        let observer = context.subscribe();

        context.refresh_at(NOW);
        assert!(observer.borrow().is_valid());

        context.refresh_at(NOW + 61);
        assert_eq!(
            *observer.borrow(),
            SessionStatus::Invalid(InvalidReason::Expired)
        );
        assert!(context.store().token().is_none());
        assert_eq!(*routes.lock().unwrap(), vec![EXPIRED_LOGIN_ROUTE]);
    }

    #[test]
    fn sign_in_and_sign_out() {
        let (context, routes) = context_with(MemoryStore::new());
        let token = token_expiring_at(now_unix() + 3600);

        let status = context
            .sign_in(SecretString::from(token.clone()))
            .unwrap();
        assert!(status.is_valid());
        assert_eq!(context.store().token().unwrap().expose_secret(), token);

        context.sign_out().unwrap();
        assert_eq!(
            context.status(),
            SessionStatus::Invalid(InvalidReason::SignedOut)
        );
        assert!(context.store().token().is_none());
        assert_eq!(*routes.lock().unwrap(), vec![LOGIN_ROUTE]);
    }
}
