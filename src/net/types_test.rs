use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_lowercase_wire_names() {
    assert_eq!(serde_json::from_str::<Role>("\"buyer\"").unwrap(), Role::Buyer);
    assert_eq!(serde_json::from_str::<Role>("\"seller\"").unwrap(), Role::Seller);
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
}

#[test]
fn role_rejects_unknown_wire_names() {
    assert!(serde_json::from_str::<Role>("\"moderator\"").is_err());
}

#[test]
fn role_as_str_matches_serialized_form() {
    for role in Role::ALL {
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, format!("\"{}\"", role.as_str()));
    }
}

// =============================================================
// Identity / auth envelopes
// =============================================================

#[test]
fn identity_parses_camel_case_payload() {
    let identity: Identity = serde_json::from_str(
        r#"{
            "id": "u-1",
            "displayName": "Ada",
            "email": "ada@example.com",
            "role": "seller",
            "isVerified": true
        }"#,
    )
    .unwrap();

    assert_eq!(identity.display_name, "Ada");
    assert_eq!(identity.role, Role::Seller);
    assert!(identity.is_verified);
}

#[test]
fn auth_me_response_unwraps_user_envelope() {
    let resp: AuthMeResponse = serde_json::from_str(
        r#"{"user":{"id":"u-2","displayName":"Bo","email":"bo@example.com","role":"buyer","isVerified":false}}"#,
    )
    .unwrap();

    assert_eq!(resp.user.id, "u-2");
    assert_eq!(resp.user.role, Role::Buyer);
}

#[test]
fn login_response_carries_token_beside_user() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"user":{"id":"u-3","displayName":"Cy","email":"cy@example.com","role":"admin","isVerified":true},"token":"tok-123"}"#,
    )
    .unwrap();

    assert_eq!(resp.token, "tok-123");
    assert_eq!(resp.user.role, Role::Admin);
}

// =============================================================
// Pet
// =============================================================

#[test]
fn pet_parses_with_optional_fields_absent() {
    let pet: Pet = serde_json::from_str(
        r#"{
            "id": "p-1",
            "name": "Biscuit",
            "species": "dog",
            "breed": null,
            "priceCents": 45000,
            "photoUrl": null,
            "sellerId": "u-9",
            "status": "available"
        }"#,
    )
    .unwrap();

    assert_eq!(pet.name, "Biscuit");
    assert!(pet.breed.is_none());
    assert_eq!(pet.price_cents, 45_000);
}
