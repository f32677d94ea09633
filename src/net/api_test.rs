use super::*;

#[test]
fn pet_endpoint_formats_expected_path() {
    assert_eq!(pet_endpoint("p-123"), "/v1/api/pets/p-123");
}

#[test]
fn wishlist_entry_endpoint_formats_expected_path() {
    assert_eq!(wishlist_entry_endpoint("p-123"), "/v1/api/wishlist/p-123");
}

#[test]
fn login_error_message_maps_rejection_to_friendly_text() {
    assert_eq!(
        login_error_message(&GatewayError::Unauthorized),
        "Invalid email or password."
    );
    assert_eq!(
        login_error_message(&GatewayError::Http(401)),
        "Invalid email or password."
    );
}

#[test]
fn login_error_message_passes_through_other_failures() {
    assert_eq!(
        login_error_message(&GatewayError::Http(503)),
        "Login failed: request failed with status 503"
    );
}
