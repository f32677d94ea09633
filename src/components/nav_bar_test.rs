use super::*;
use crate::policy;

#[test]
fn anonymous_visitors_see_only_public_links() {
    assert_eq!(nav_links_for(None), vec![("/pets", "Browse")]);
}

#[test]
fn buyers_see_home_and_wishlist() {
    let links = nav_links_for(Some(Role::Buyer));
    assert!(links.contains(&("/home", "Home")));
    assert!(links.contains(&("/wishlist", "Wishlist")));
    assert!(!links.iter().any(|(href, _)| href.starts_with("/seller")));
}

#[test]
fn sellers_and_admins_see_their_dashboards() {
    assert!(nav_links_for(Some(Role::Seller)).contains(&("/seller/dashboard", "My Listings")));
    assert!(nav_links_for(Some(Role::Admin)).contains(&("/admin/dashboard", "Admin")));
}

#[test]
fn every_offered_link_passes_the_policy_for_its_role() {
    for role in [None, Some(Role::Buyer), Some(Role::Seller), Some(Role::Admin)] {
        for (href, _) in nav_links_for(role) {
            assert!(
                policy::is_allowed(role, href),
                "{role:?} offered denied link {href}"
            );
        }
    }
}
