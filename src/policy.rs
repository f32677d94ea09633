//! Role-based route access policy.
//!
//! DESIGN
//! ======
//! Paths are classified into disjoint prefix families (public, buyer, seller,
//! admin); anything outside every family is denied. The table is static and
//! pure so the guard, the nav bar, and the tests all consult the same oracle.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::net::types::Role;

/// Route visitors land on when a session cannot be established.
pub const LOGIN_ROUTE: &str = "/login";

/// Paths any visitor may see, signed in or not.
pub const PUBLIC_PREFIXES: &[&str] = &["/", "/login", "/pets"];
/// Buyer-only surfaces.
pub const BUYER_PREFIXES: &[&str] = &["/home", "/wishlist", "/orders"];
/// Seller-only surfaces.
pub const SELLER_PREFIXES: &[&str] = &["/seller"];
/// Admin-only surfaces.
pub const ADMIN_PREFIXES: &[&str] = &["/admin"];

/// Exhaustive classification of a path under the policy table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    BuyerOnly,
    SellerOnly,
    AdminOnly,
    Unclassified,
}

/// True when `path` is `prefix` itself or a descendant of it.
///
/// `"/"` only matches the root exactly, so it cannot swallow every path.
fn matches_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn in_family(path: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| matches_prefix(path, prefix))
}

/// Classify `path` into exactly one family. Total over all strings; unknown
/// prefixes land in `Unclassified`, which every caller treats as denied.
pub fn classify(path: &str) -> RouteClass {
    if in_family(path, PUBLIC_PREFIXES) {
        RouteClass::Public
    } else if in_family(path, BUYER_PREFIXES) {
        RouteClass::BuyerOnly
    } else if in_family(path, SELLER_PREFIXES) {
        RouteClass::SellerOnly
    } else if in_family(path, ADMIN_PREFIXES) {
        RouteClass::AdminOnly
    } else {
        RouteClass::Unclassified
    }
}

/// Whether a visitor with `role` (or anonymous, `None`) may see `path`.
pub fn is_allowed(role: Option<Role>, path: &str) -> bool {
    match classify(path) {
        RouteClass::Public => true,
        RouteClass::BuyerOnly => role == Some(Role::Buyer),
        RouteClass::SellerOnly => role == Some(Role::Seller),
        RouteClass::AdminOnly => role == Some(Role::Admin),
        RouteClass::Unclassified => false,
    }
}

/// Landing path for a role after login or after a role-mismatch redirect.
pub fn default_route_for(role: Role) -> &'static str {
    match role {
        Role::Buyer => "/home",
        Role::Seller => "/seller/dashboard",
        Role::Admin => "/admin/dashboard",
    }
}

/// Table invariant: every role may see its own default landing route.
///
/// A table violating this would bounce a visitor between their landing page
/// and the guard forever; the composition root debug-asserts it on mount.
pub fn table_is_consistent() -> bool {
    Role::ALL
        .into_iter()
        .all(|role| is_allowed(Some(role), default_route_for(role)))
}
