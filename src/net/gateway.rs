//! Outbound request pipeline for every storefront API call.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! credential and a request id attached on the way out and the session
//! invalidated on an authorization-denied response on the way in.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401 from any hooked call means the whole session is invalid, not just
//! that one request: the reaction clears state and hard-navigates to the
//! login route. Auth endpoints themselves go through the bare variants so a
//! failed identity check or an already-dead logout cannot re-enter the hook
//! and loop.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::state::session::SessionStore;

/// Why a gateway call failed. Callers treat every variant as degraded data;
/// none of them propagate to a rendered error page.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The backend rejected the session credential.
    #[error("session rejected by the server")]
    Unauthorized,
    /// Any other non-2xx response.
    #[error("request failed with status {0}")]
    Http(u16),
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the expected shape.
    #[error("response decode error: {0}")]
    Decode(String),
}

/// Statuses that invalidate the whole session. 403 is a resource-level
/// denial and excluded: a role-scoped endpoint must not log the visitor out.
#[cfg(any(test, feature = "hydrate"))]
fn is_session_denied(status: u16) -> bool {
    status == 401
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Credential resolution order: in-memory mirror first, durable copy second.
/// The durable fallback covers the window after a fresh page load before the
/// verifier has repopulated the in-memory state.
#[cfg(feature = "hydrate")]
fn resolve_credential(session: SessionStore) -> Option<String> {
    session
        .get_untracked()
        .credential
        .or_else(crate::util::storage::load_token)
}

/// The canonical session-invalidated reaction: clear both identity caches and
/// force a full navigation to the login route. Shared by the 401 hook and the
/// explicit logout path so the two can never drift apart.
#[cfg(feature = "hydrate")]
pub fn invalidate_session_and_redirect(session: SessionStore) {
    session.clear();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(crate::policy::LOGIN_ROUTE);
    }
}

#[cfg(feature = "hydrate")]
fn with_session_headers(
    session: SessionStore,
    builder: gloo_net::http::RequestBuilder,
) -> gloo_net::http::RequestBuilder {
    let builder = builder.header("x-request-id", &uuid::Uuid::new_v4().to_string());
    match resolve_credential(session) {
        Some(token) => builder.header("authorization", &bearer_value(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn dispatch(
    session: SessionStore,
    request: Result<gloo_net::http::Request, gloo_net::Error>,
    hooked: bool,
) -> Result<gloo_net::http::Response, GatewayError> {
    let request = request.map_err(|e| GatewayError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| GatewayError::Network(e.to_string()))?;

    if is_session_denied(response.status()) {
        if hooked {
            leptos::logging::warn!("session rejected by the server; logging out");
            invalidate_session_and_redirect(session);
        }
        return Err(GatewayError::Unauthorized);
    }
    if !response.ok() {
        return Err(GatewayError::Http(response.status()));
    }
    Ok(response)
}

#[cfg(feature = "hydrate")]
async fn decode_json<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, GatewayError> {
    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::Decode(e.to_string()))
}

/// `GET` a JSON body with the 401 hook armed.
pub async fn get_json<T: DeserializeOwned>(
    session: SessionStore,
    path: &str,
) -> Result<T, GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_session_headers(session, gloo_net::http::Request::get(path)).build();
        decode_json(dispatch(session, request, true).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path);
        Err(GatewayError::Network("not available on server".to_owned()))
    }
}

/// `POST` a JSON body and decode a JSON response, 401 hook armed.
pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
    session: SessionStore,
    path: &str,
    body: &B,
) -> Result<T, GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_session_headers(session, gloo_net::http::Request::post(path)).json(body);
        decode_json(dispatch(session, request, true).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path, body);
        Err(GatewayError::Network("not available on server".to_owned()))
    }
}

/// Bodyless `POST` with the 401 hook armed; the response body is ignored.
pub async fn post(session: SessionStore, path: &str) -> Result<(), GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_session_headers(session, gloo_net::http::Request::post(path)).build();
        dispatch(session, request, true).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path);
        Err(GatewayError::Network("not available on server".to_owned()))
    }
}

/// `DELETE` with the 401 hook armed; the response body is ignored.
pub async fn delete(session: SessionStore, path: &str) -> Result<(), GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_session_headers(session, gloo_net::http::Request::delete(path)).build();
        dispatch(session, request, true).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path);
        Err(GatewayError::Network("not available on server".to_owned()))
    }
}

/// `GET` without the 401 hook. Used by the identity check, whose 401 is the
/// normal "not logged in" signal and is handled by the verifier, not here.
pub async fn get_json_bare<T: DeserializeOwned>(
    session: SessionStore,
    path: &str,
) -> Result<T, GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_session_headers(session, gloo_net::http::Request::get(path)).build();
        decode_json(dispatch(session, request, false).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path);
        Err(GatewayError::Network("not available on server".to_owned()))
    }
}

/// `POST` without the 401 hook. Used by login, where a 401 means wrong
/// credentials rather than a dead session.
pub async fn post_json_bare<T: DeserializeOwned, B: serde::Serialize>(
    session: SessionStore,
    path: &str,
    body: &B,
) -> Result<T, GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_session_headers(session, gloo_net::http::Request::post(path)).json(body);
        decode_json(dispatch(session, request, false).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path, body);
        Err(GatewayError::Network("not available on server".to_owned()))
    }
}

/// Fire-and-forget `POST` without the 401 hook. Used by logout, which may
/// legitimately 401 when the session is already gone — tolerated, not
/// retried.
pub async fn post_ignore_response(session: SessionStore, path: &str) {
    #[cfg(feature = "hydrate")]
    {
        let request = with_session_headers(session, gloo_net::http::Request::post(path)).build();
        let _ = dispatch(session, request, false).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path);
    }
}
