//! Wire types for the auth API, plus the error the HTTP layer surfaces.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login body: the bearer token for the new session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// The backend's generic `{"msg": ...}` body, used by register responses
/// and by error bodies alike.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    pub msg: String,
}

/// Error produced by the auth API calls.
///
/// The store never wraps or retries these; they propagate unchanged to the
/// view layer, which owns user-visible failure behavior.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The auth API is only reachable from a browser build.
    #[error("auth API is not available outside the browser")]
    Unavailable,
}
