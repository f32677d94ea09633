//! Shared wire DTOs for the storefront API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads (camelCase field names on
//! the wire) so serde round-trips stay lossless and every caller shares one
//! schema for identity and listing data.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Marketplace role attached to every authenticated account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
    Admin,
}

impl Role {
    /// Every role, in policy-table order.
    pub const ALL: [Role; 3] = [Role::Buyer, Role::Seller, Role::Admin];

    /// Lowercase wire name, also used for CSS class suffixes.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
            Role::Admin => "admin",
        }
    }
}

/// The authenticated visitor's profile as returned by `/v1/api/auth/me`.
///
/// Immutable once fetched for a session: re-authentication replaces the whole
/// value, nothing patches individual fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique account identifier (UUID string).
    pub id: String,
    /// Name shown in the nav bar and on seller pages.
    pub display_name: String,
    /// Account email address.
    pub email: String,
    /// Marketplace role deciding which surfaces this account may see.
    pub role: Role,
    /// Whether the account passed email/seller verification.
    pub is_verified: bool,
}

/// Envelope for the identity-check endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthMeResponse {
    pub user: Identity,
}

/// Successful login payload: the identity plus the bearer credential to
/// persist alongside it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: Identity,
    pub token: String,
}

/// A pet listing as shown on browse, detail, and dashboard pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Unique listing identifier (UUID string).
    pub id: String,
    /// Listing title, usually the pet's name.
    pub name: String,
    /// Species label (e.g. `"dog"`, `"cat"`, `"bird"`).
    pub species: String,
    /// Breed, if the seller provided one.
    pub breed: Option<String>,
    /// Asking price in cents.
    pub price_cents: i64,
    /// Primary photo URL, if uploaded.
    pub photo_url: Option<String>,
    /// Account id of the listing seller (UUID string).
    pub seller_id: String,
    /// Listing lifecycle state (e.g. `"available"`, `"pending"`, `"sold"`).
    pub status: String,
}
