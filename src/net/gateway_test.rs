use super::*;

// =============================================================
// Session-denied classification
// =============================================================

#[test]
fn only_401_invalidates_the_session() {
    assert!(is_session_denied(401));
    assert!(!is_session_denied(403));
    assert!(!is_session_denied(200));
    assert!(!is_session_denied(500));
}

// =============================================================
// Header construction
// =============================================================

#[test]
fn bearer_value_formats_the_authorization_header() {
    assert_eq!(bearer_value("tok-123"), "Bearer tok-123");
}

// =============================================================
// Error surface
// =============================================================

#[test]
fn gateway_errors_render_stable_messages() {
    assert_eq!(
        GatewayError::Unauthorized.to_string(),
        "session rejected by the server"
    );
    assert_eq!(
        GatewayError::Http(502).to_string(),
        "request failed with status 502"
    );
    assert_eq!(
        GatewayError::Network("offline".to_owned()).to_string(),
        "network error: offline"
    );
    assert_eq!(
        GatewayError::Decode("missing field".to_owned()).to_string(),
        "response decode error: missing field"
    );
}
