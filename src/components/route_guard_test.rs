use super::*;
use crate::net::types::Identity;

fn authed(role: Role) -> SessionState {
    SessionState {
        identity: Some(Identity {
            id: "u-1".to_owned(),
            display_name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            role,
            is_verified: true,
        }),
        credential: Some("tok-1".to_owned()),
        is_authenticated: true,
        is_loading: false,
        epoch: 0,
    }
}

fn anonymous() -> SessionState {
    SessionState::default()
}

fn loading() -> SessionState {
    SessionState {
        is_loading: true,
        ..SessionState::default()
    }
}

// =============================================================
// Percent encoding / login target
// =============================================================

#[test]
fn encodes_path_separators_for_the_redirect_parameter() {
    assert_eq!(
        percent_encode_component("/seller/dashboard"),
        "%2Fseller%2Fdashboard"
    );
}

#[test]
fn leaves_unreserved_characters_alone() {
    assert_eq!(percent_encode_component("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
}

#[test]
fn encodes_query_metacharacters() {
    assert_eq!(percent_encode_component("/a?b=c&d"), "%2Fa%3Fb%3Dc%26d");
}

#[test]
fn login_redirect_url_carries_the_requested_path() {
    assert_eq!(
        login_redirect_url("/seller/dashboard"),
        "/login?redirect=%2Fseller%2Fdashboard"
    );
}

// =============================================================
// CHECKING: loading always wins
// =============================================================

#[test]
fn inflight_verification_renders_the_indicator_never_a_redirect() {
    // Regardless of path or attempt marker: no content, no redirect flicker.
    assert_eq!(decide(&loading(), "/home", &[], false), GuardOutcome::Pending);
    assert_eq!(decide(&loading(), "/home", &[], true), GuardOutcome::Pending);
    assert_eq!(
        decide(&loading(), "/admin/users", &[Role::Admin], false),
        GuardOutcome::Pending
    );
}

// =============================================================
// Authenticated decisions
// =============================================================

#[test]
fn confirmed_session_with_matching_role_renders_synchronously() {
    assert_eq!(decide(&authed(Role::Buyer), "/home", &[], false), GuardOutcome::Render);
    assert_eq!(
        decide(&authed(Role::Seller), "/seller/dashboard", &[Role::Seller], false),
        GuardOutcome::Render
    );
    assert_eq!(
        decide(&authed(Role::Admin), "/admin/dashboard", &[Role::Admin], false),
        GuardOutcome::Render
    );
}

#[test]
fn wrong_role_redirects_to_its_own_default_route_not_login() {
    assert_eq!(
        decide(&authed(Role::Buyer), "/seller/dashboard", &[Role::Seller], false),
        GuardOutcome::Redirect("/home".to_owned())
    );
    assert_eq!(
        decide(&authed(Role::Seller), "/admin/dashboard", &[], false),
        GuardOutcome::Redirect("/seller/dashboard".to_owned())
    );
}

#[test]
fn allow_list_narrows_beyond_the_global_policy() {
    // "/pets" is public, but this guard additionally requires seller.
    assert_eq!(
        decide(&authed(Role::Seller), "/pets", &[Role::Seller], false),
        GuardOutcome::Render
    );
    assert_eq!(
        decide(&authed(Role::Buyer), "/pets", &[Role::Seller], false),
        GuardOutcome::Redirect("/home".to_owned())
    );
}

#[test]
fn unknown_prefix_denies_even_a_confirmed_session() {
    assert_eq!(
        decide(&authed(Role::Admin), "/warehouse", &[], false),
        GuardOutcome::Redirect("/admin/dashboard".to_owned())
    );
}

// =============================================================
// Anonymous decisions
// =============================================================

#[test]
fn anonymous_visitor_renders_public_pages_without_verification() {
    assert_eq!(decide(&anonymous(), "/pets", &[], false), GuardOutcome::Render);
}

#[test]
fn first_visit_to_a_protected_page_starts_a_verification() {
    assert_eq!(
        decide(&anonymous(), "/seller/dashboard", &[Role::Seller], false),
        GuardOutcome::StartVerify
    );
}

#[test]
fn failed_verification_redirects_to_login_with_the_return_target() {
    assert_eq!(
        decide(&anonymous(), "/seller/dashboard", &[Role::Seller], true),
        GuardOutcome::Redirect("/login?redirect=%2Fseller%2Fdashboard".to_owned())
    );
    assert_eq!(
        decide(&anonymous(), "/wishlist", &[], true),
        GuardOutcome::Redirect("/login?redirect=%2Fwishlist".to_owned())
    );
}

// =============================================================
// Convergence after a shared verification
// =============================================================

#[test]
fn two_mounts_converge_to_the_same_outcome_once_verification_resolves() {
    // While one guard's verification is in flight, a second mount observes
    // the loading flag (Pending) instead of starting its own check; after the
    // shared resolution both evaluate the same session record.
    let mut state = anonymous();
    state.apply_begin_verify();
    assert_eq!(decide(&state, "/home", &[], true), GuardOutcome::Pending);
    assert_eq!(decide(&state, "/wishlist", &[], false), GuardOutcome::Pending);

    let resolved = authed(Role::Buyer);
    assert_eq!(decide(&resolved, "/home", &[], true), GuardOutcome::Render);
    assert_eq!(decide(&resolved, "/wishlist", &[], false), GuardOutcome::Render);
}
