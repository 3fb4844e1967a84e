//! REST calls to the external auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are surfaced verbatim as [`ApiError`]; no retry, no recovery.
//! Non-2xx responses carry the backend's `{"msg": ...}` text when the body
//! parses, the raw body otherwise.

#![allow(clippy::unused_async)]

use super::types::{ApiError, ApiMessage, Credentials, LoginResponse, RegisterRequest};

/// Login endpoint path.
pub const LOGIN_ENDPOINT: &str = "/auth/login";
/// Registration endpoint path.
pub const REGISTER_ENDPOINT: &str = "/auth/register";

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails, the server rejects the
/// credentials, or the body cannot be decoded.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(LOGIN_ENDPOINT, credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the server rejects the
/// registration (duplicate username/email, validation failure).
pub async fn register(request: &RegisterRequest) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(REGISTER_ENDPOINT, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let response = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiMessage>(&body).map_or(body, |m| m.msg);
        return Err(ApiError::Status { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
