use super::*;

// =============================================================
// Return-target safety
// =============================================================

#[test]
fn same_origin_paths_are_safe_targets() {
    assert!(is_safe_return_target("/seller/dashboard"));
    assert!(is_safe_return_target("/wishlist"));
}

#[test]
fn external_and_scheme_relative_targets_are_rejected() {
    assert!(!is_safe_return_target("https://evil.example"));
    assert!(!is_safe_return_target("//evil.example/path"));
    assert!(!is_safe_return_target("pets"));
}

// =============================================================
// Post-login destination
// =============================================================

#[test]
fn safe_redirect_parameter_wins_over_the_role_default() {
    assert_eq!(
        post_login_destination(Some("/seller/dashboard"), Role::Seller),
        "/seller/dashboard"
    );
}

#[test]
fn missing_redirect_falls_back_to_the_role_landing_page() {
    assert_eq!(post_login_destination(None, Role::Buyer), "/home");
    assert_eq!(post_login_destination(None, Role::Admin), "/admin/dashboard");
}

#[test]
fn unsafe_redirect_falls_back_to_the_role_landing_page() {
    assert_eq!(
        post_login_destination(Some("//evil.example"), Role::Buyer),
        "/home"
    );
}
