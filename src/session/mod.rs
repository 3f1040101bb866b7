//! Session handling: token storage, unverified claim decoding, the session
//! guard, the shared session context and the `/dashboard` route gate.
//!
//! Flow Overview: login stores the token under the `token` key. Protected
//! commands pass the route gate (presence only), then refresh the shared
//! context, which runs the guard (decode + expiry compare). An invalid session
//! removes the token and navigates to `/auth/login?expired=1`.

pub mod context;
pub mod guard;
pub mod routes;
pub mod store;
pub mod token;

pub use context::SessionContext;
pub use guard::{
    EXPIRED_LOGIN_ROUTE, InvalidReason, LOGIN_ROUTE, Navigator, SessionGuard, SessionStatus,
};
pub use routes::{RouteDecision, route_decision};
pub use store::{CookieJar, MemoryStore, StoreError, TOKEN_KEY, TokenStore};
pub use token::{Claims, TokenError, decode_claims};
