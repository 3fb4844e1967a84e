//! Best-effort JWT payload decoding.
//!
//! The backend issues bearer tokens whose payload carries the user's role
//! and expiry. The client only needs to *read* those claims; the token
//! already arrived over the app's own authenticated channel, so the
//! signature segment is ignored and nothing is verified here.
//!
//! ERROR HANDLING
//! ==============
//! Malformed input of any kind (wrong segment count, invalid base64,
//! invalid JSON) yields `None`. Callers treat that as "no valid claims",
//! never as a fault to surface.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Claims read from a token payload. Unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Claims {
    /// Subject: the user id the token was issued for.
    #[serde(default)]
    pub sub: Option<String>,
    /// Expiry as Unix seconds.
    #[serde(default)]
    pub exp: Option<u64>,
    /// Role label (`"user"`, `"admin"`).
    #[serde(default)]
    pub role: Option<String>,
}

impl Claims {
    /// Whether the token is still valid at `now` (Unix seconds).
    ///
    /// A missing `exp` claim is never live; an `exp` at or before `now`
    /// has expired.
    #[must_use]
    pub fn is_live(&self, now: u64) -> bool {
        self.exp.is_some_and(|exp| exp > now)
    }
}

/// Decode the payload segment of a dot-delimited JWT.
///
/// The token must have at least header and payload segments; the payload
/// must be URL-safe base64 (padded or not) containing UTF-8 JSON. Returns
/// `None` on any malformation.
#[must_use]
pub fn decode_payload(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}
