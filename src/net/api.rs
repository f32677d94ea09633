//! REST wrappers for the storefront backend.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Vec`/`Result` outputs instead of panics so a failed
//! fetch degrades to an empty page state without crashing hydration. Identity
//! and login calls go through the gateway's bare variants: their 401s are
//! expected outcomes, not session-death signals.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::gateway::{self, GatewayError};
use super::types::{AuthMeResponse, Identity, LoginResponse, Pet};
use crate::state::session::SessionStore;

const AUTH_ME_ENDPOINT: &str = "/v1/api/auth/me";
const AUTH_LOGIN_ENDPOINT: &str = "/v1/api/auth/login";
const AUTH_LOGOUT_ENDPOINT: &str = "/v1/api/auth/logout";
const PETS_ENDPOINT: &str = "/v1/api/pets";
const WISHLIST_ENDPOINT: &str = "/v1/api/wishlist";
const SELLER_LISTINGS_ENDPOINT: &str = "/v1/api/seller/listings";
const ADMIN_USERS_ENDPOINT: &str = "/v1/api/admin/users";

fn pet_endpoint(pet_id: &str) -> String {
    format!("{PETS_ENDPOINT}/{pet_id}")
}

fn wishlist_entry_endpoint(pet_id: &str) -> String {
    format!("{WISHLIST_ENDPOINT}/{pet_id}")
}

fn login_error_message(error: &GatewayError) -> String {
    match error {
        GatewayError::Unauthorized | GatewayError::Http(401) => {
            "Invalid email or password.".to_owned()
        }
        other => format!("Login failed: {other}"),
    }
}

/// Fetch the currently authenticated visitor from the identity check.
///
/// Returns `None` for any failure — an unauthenticated visitor is the normal
/// outcome here, never an exceptional one.
pub async fn fetch_current_user(session: SessionStore) -> Option<Identity> {
    gateway::get_json_bare::<AuthMeResponse>(session, AUTH_ME_ENDPOINT)
        .await
        .ok()
        .map(|resp| resp.user)
}

/// Exchange credentials for an identity and bearer token.
///
/// # Errors
///
/// Returns a display-ready message when the backend rejects the credentials
/// or the request fails.
pub async fn login(
    session: SessionStore,
    email: &str,
    password: &str,
) -> Result<LoginResponse, String> {
    let payload = serde_json::json!({ "email": email, "password": password });
    gateway::post_json_bare::<LoginResponse, _>(session, AUTH_LOGIN_ENDPOINT, &payload)
        .await
        .map_err(|e| login_error_message(&e))
}

/// Tell the backend to drop the session. Failures are ignored: client-side
/// logout completes regardless, and a 401 here just means the session was
/// already gone.
pub async fn logout(session: SessionStore) {
    gateway::post_ignore_response(session, AUTH_LOGOUT_ENDPOINT).await;
}

/// Fetch the public pet listings. Degrades to an empty list on failure.
pub async fn fetch_pets(session: SessionStore) -> Vec<Pet> {
    gateway::get_json(session, PETS_ENDPOINT)
        .await
        .unwrap_or_default()
}

/// Fetch one pet listing by id.
pub async fn fetch_pet(session: SessionStore, pet_id: &str) -> Option<Pet> {
    gateway::get_json(session, &pet_endpoint(pet_id)).await.ok()
}

/// Fetch the signed-in buyer's wishlist.
pub async fn fetch_wishlist(session: SessionStore) -> Vec<Pet> {
    gateway::get_json(session, WISHLIST_ENDPOINT)
        .await
        .unwrap_or_default()
}

/// Add a pet to the buyer's wishlist. Returns whether the backend accepted.
pub async fn add_to_wishlist(session: SessionStore, pet_id: &str) -> bool {
    gateway::post(session, &wishlist_entry_endpoint(pet_id))
        .await
        .is_ok()
}

/// Remove a pet from the buyer's wishlist. Returns whether the backend
/// accepted.
pub async fn remove_from_wishlist(session: SessionStore, pet_id: &str) -> bool {
    gateway::delete(session, &wishlist_entry_endpoint(pet_id))
        .await
        .is_ok()
}

/// Fetch the signed-in seller's own listings.
pub async fn fetch_seller_listings(session: SessionStore) -> Vec<Pet> {
    gateway::get_json(session, SELLER_LISTINGS_ENDPOINT)
        .await
        .unwrap_or_default()
}

/// Fetch every account for the admin roster.
pub async fn fetch_admin_users(session: SessionStore) -> Vec<Identity> {
    gateway::get_json(session, ADMIN_USERS_ENDPOINT)
        .await
        .unwrap_or_default()
}
