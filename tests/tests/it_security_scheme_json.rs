//! Integration tests for the JSON encoding of security schemes.
//!
//! Covers the canonical encodings of the common scheme shapes, reference exclusivity and
//! lossless decoding of inline schemes.

use serde_json::json;
use spec3::{
    OAuthFlowKind, OAuthFlowProps, SecurityScheme, SecuritySchemeProps, SecuritySchemeType,
};

#[test]
fn encode_basic_authentication_scheme_writes_type_and_scheme() {
    //* Given
    let scheme: SecurityScheme = SecuritySchemeProps::builder()
        .scheme_type(SecuritySchemeType::Http)
        .scheme("basic")
        .into();

    //* When
    let json = spec3::to_string(&scheme).expect("should encode scheme");

    //* Then
    assert_eq!(json, r#"{"type":"http","scheme":"basic"}"#);
}

#[test]
fn encode_jwt_bearer_scheme_writes_bearer_format_after_scheme() {
    //* Given
    let scheme: SecurityScheme = SecuritySchemeProps::builder()
        .scheme_type(SecuritySchemeType::Http)
        .scheme("basic")
        .bearer_format("JWT")
        .into();

    //* When
    let json = spec3::to_string(&scheme).expect("should encode scheme");

    //* Then
    assert_eq!(json, r#"{"type":"http","scheme":"basic","bearerFormat":"JWT"}"#);
}

#[test]
fn encode_implicit_oauth2_scheme_sorts_scopes() {
    //* Given
    let scheme = implicit_oauth2();

    //* When
    let json = spec3::to_string(&scheme).expect("should encode scheme");

    //* Then
    assert_eq!(
        json,
        r#"{"type":"oauth2","flows":{"implicit":{"authorizationUrl":"https://example.com/api/oauth/dialog","scopes":{"read:pets":"read your pets","write:pets":"modify pets in your account"}}}}"#,
        "scopes should be sorted by key, not by insertion order"
    );
}

#[test]
fn encode_reference_object_writes_only_ref() {
    //* Given
    let scheme = SecurityScheme::new_ref("k8s.io/api/foo/v1beta1b.bar");

    //* When
    let json = spec3::to_string(&scheme).expect("should encode reference");

    //* Then
    assert_eq!(json, r#"{"$ref":"k8s.io/api/foo/v1beta1b.bar"}"#);
}

#[test]
fn decode_reference_object_restores_reference() {
    //* When
    let scheme: SecurityScheme = spec3::from_str(r#"{"$ref":"k8s.io/api/foo/v1beta1b.bar"}"#)
        .expect("should decode reference");

    //* Then
    assert!(scheme.is_ref(), "should decode as a reference");
    assert_eq!(
        scheme.reference().map(|r| r.as_str()),
        Some("k8s.io/api/foo/v1beta1b.bar")
    );
    assert_eq!(scheme.props(), None, "a reference has no inline fields");
}

#[test]
fn decode_encoded_inline_schemes_restores_them() {
    //* Given
    let mut with_extensions = implicit_oauth2();
    with_extensions
        .extensions_mut()
        .expect("inline scheme has extensions")
        .set("x-audience", json!(["pets", "stores"]))
        .expect("valid extension key");
    let schemes = [
        SecurityScheme::from(
            SecuritySchemeProps::builder()
                .scheme_type(SecuritySchemeType::OpenIdConnect)
                .open_id_connect_url("https://example.com/.well-known/openid-configuration")
                .description("OIDC login"),
        ),
        implicit_oauth2(),
        with_extensions,
    ];

    for scheme in schemes {
        //* When
        let json = spec3::to_string(&scheme).expect("should encode scheme");
        let decoded: SecurityScheme = spec3::from_str(&json).expect("should decode scheme");

        //* Then
        assert_eq!(decoded, scheme, "decoding {json} should restore the scheme");
    }
}

#[test]
fn encode_after_decode_drops_unknown_keys_for_good() {
    //* Given
    let input = r#"{"in":"query","unknownField":true,"name":"token","type":"apiKey","x-rate-limit":100}"#;

    //* When
    let scheme: SecurityScheme = spec3::from_str(input).expect("should decode scheme");
    let json = spec3::to_string(&scheme).expect("should re-encode scheme");

    //* Then
    assert_eq!(
        json, r#"{"type":"apiKey","name":"token","in":"query","x-rate-limit":100}"#,
        "unknown key should be gone and fields back in declared order"
    );
}

#[test]
fn encode_extensions_with_nested_objects_in_different_orders_is_byte_identical() {
    //* Given
    let with_meta = |meta: serde_json::Value| {
        let mut scheme: SecurityScheme = SecuritySchemeProps::builder()
            .scheme_type(SecuritySchemeType::Http)
            .into();
        scheme
            .extensions_mut()
            .expect("inline scheme has extensions")
            .set("x-meta", meta)
            .expect("valid extension key");
        scheme
    };
    let first = with_meta(json!({"b": 1, "a": 2}));
    let second = with_meta(json!({"a": 2, "b": 1}));

    //* When
    let first_json = spec3::to_string(&first).expect("should encode first scheme");
    let second_json = spec3::to_string(&second).expect("should encode second scheme");

    //* Then
    assert_eq!(first, second, "the schemes are equal in memory");
    assert_eq!(first_json, second_json, "equal schemes must encode to the same bytes");
    assert_eq!(first_json, r#"{"type":"http","x-meta":{"a":2,"b":1}}"#);
}

#[test]
fn decode_extensions_with_nested_objects_in_different_orders_reencodes_identically() {
    //* When
    let first: SecurityScheme =
        spec3::from_str(r#"{"type":"http","x-meta":{"z":1,"a":2}}"#).expect("should decode");
    let second: SecurityScheme =
        spec3::from_str(r#"{"x-meta":{"a":2,"z":1},"type":"http"}"#).expect("should decode");

    //* Then
    assert_eq!(
        spec3::to_string(&first).expect("should encode first scheme"),
        spec3::to_string(&second).expect("should encode second scheme"),
        "input key order must not survive decoding"
    );
}

#[test]
fn encode_with_serde_json_matches_codec_output() {
    //* Given
    let scheme = implicit_oauth2();

    //* When
    let via_serde = serde_json::to_string(&scheme).expect("should serialize with serde_json");

    //* Then
    assert_eq!(
        via_serde,
        spec3::to_string(&scheme).expect("should encode with the codec"),
        "both paths should produce the same bytes"
    );
}

/// Builds the implicit-flow OAuth2 scheme, inserting scopes out of order.
fn implicit_oauth2() -> SecurityScheme {
    SecuritySchemeProps::builder()
        .scheme_type(SecuritySchemeType::OAuth2)
        .flow(
            OAuthFlowKind::Implicit,
            OAuthFlowProps::builder()
                .authorization_url("https://example.com/api/oauth/dialog")
                .scope("write:pets", "modify pets in your account")
                .scope("read:pets", "read your pets"),
        )
        .into()
}
