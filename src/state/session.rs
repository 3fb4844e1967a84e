//! Session state and the store that manages it.
//!
//! The store owns the in-memory session (logged-in flag, bearer token,
//! role) and is the only writer of the persisted token. `login` and
//! `register` are thin pass-throughs to the auth API so the view layer
//! handles failure display; the store's one independent decision is expiry
//! validation in `initialize_auth`, which must run before any guard
//! decision so a stale persisted token cannot masquerade as a live
//! session.
//!
//! INVARIANT
//! =========
//! `state.is_logged_in == true` implies `state.access_token` is present
//! and was unexpired when last validated. Expiry is checked only at
//! initialization, not continuously.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api;
use crate::net::types::{ApiError, ApiMessage, Credentials, LoginResponse, RegisterRequest};
use crate::util::jwt::{self, Claims};
use crate::util::storage::TokenStore;

/// Role assumed when a token's payload omits the role claim.
pub const DEFAULT_ROLE: &str = "user";
/// The one role with its own dashboard.
pub const ADMIN_ROLE: &str = "admin";

/// In-memory representation of the current user's authenticated identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_logged_in: bool,
    pub access_token: Option<String>,
    pub role: Option<String>,
}

impl SessionState {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role.as_deref() == Some(DEFAULT_ROLE)
    }

    /// Populate the session from a token and its decoded claims.
    fn adopt(&mut self, token: String, claims: Option<&Claims>) {
        let role = claims
            .and_then(|c| c.role.clone())
            .unwrap_or_else(|| DEFAULT_ROLE.to_owned());
        self.role = Some(role);
        self.access_token = Some(token);
        self.is_logged_in = true;
    }

    /// Reset every field to its logged-out default.
    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Session store: the in-memory session plus its durable storage handle.
///
/// Constructed once at application start with the browser-backed store and
/// shared through context; tests inject a `MemoryStore`.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    pub state: SessionState,
    storage: S,
}

impl<S: TokenStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            state: SessionState::default(),
            storage,
        }
    }

    /// Exchange credentials for a token and open a session.
    ///
    /// On success the token is persisted, its payload decoded for the role
    /// claim, and the session marked logged in; the API's full response is
    /// returned for the caller. On failure nothing is mutated.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] unchanged.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response = api::login(credentials).await?;
        self.install_token(response.access_token.clone());
        Ok(response)
    }

    /// Persist a freshly issued token and adopt it as the live session.
    /// Role defaults to [`DEFAULT_ROLE`] when the payload has none.
    pub(crate) fn install_token(&mut self, token: String) {
        self.storage.set_token(&token);
        let claims = jwt::decode_payload(&token);
        self.state.adopt(token, claims.as_ref());
    }

    /// Forward a registration to the auth API. No session mutation.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] unchanged.
    pub async fn register(&self, request: &RegisterRequest) -> Result<ApiMessage, ApiError> {
        api::register(request).await
    }

    /// Drop the persisted token and reset the session. Idempotent.
    pub fn logout(&mut self) {
        self.storage.clear_token();
        self.state.clear();
    }

    /// Restore the session from the persisted token, if one exists.
    ///
    /// A token that fails to decode or whose expiry is at or before the
    /// current time triggers a full logout, clearing the stale value from
    /// storage.
    pub fn initialize_auth(&mut self) {
        self.initialize_auth_at(now_unix());
    }

    pub(crate) fn initialize_auth_at(&mut self, now: u64) {
        let Some(token) = self.storage.token() else {
            return;
        };
        match jwt::decode_payload(&token) {
            Some(claims) if claims.is_live(now) => self.state.adopt(token, Some(&claims)),
            _ => self.logout(),
        }
    }

    /// Whether a token survives in durable storage, regardless of the
    /// in-memory state. Used by the guard's hydration step.
    #[must_use]
    pub fn has_persisted_token(&self) -> bool {
        self.storage.token().is_some()
    }
}

/// Current Unix time in seconds.
fn now_unix() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}
