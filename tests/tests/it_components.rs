//! Integration tests for the document root and its component collections.

use spec3::{
    Components, ComponentsProps, Extensions, Map, OAuthFlowKind, OAuthFlowProps, OpenApi,
    SecurityScheme, SecuritySchemeProps, SecuritySchemeType,
};

#[test]
fn encode_document_with_components_succeeds() {
    //* Given
    let document = OpenApi::new().components(build_components(&[
        "petstore_auth",
        "shared",
        "basic",
        "api_key",
    ]));

    //* When
    let json_output = spec3::to_string_pretty(&document).expect("should encode document");

    //* Then
    insta::assert_snapshot!(json_output, @r##"
    {
      "openapi": "3.0.0",
      "components": {
        "securitySchemes": {
          "api_key": {
            "type": "apiKey",
            "name": "api_key",
            "in": "header"
          },
          "basic": {
            "type": "http",
            "scheme": "basic"
          },
          "petstore_auth": {
            "type": "oauth2",
            "flows": {
              "implicit": {
                "authorizationUrl": "https://example.com/api/oauth/dialog",
                "scopes": {
                  "read:pets": "read your pets",
                  "write:pets": "modify pets in your account"
                }
              }
            }
          },
          "shared": {
            "$ref": "#/components/securitySchemes/basic"
          }
        },
        "x-generated-by": "spec3"
      }
    }
    "##);
}

#[test]
fn encode_components_with_different_insertion_orders_is_byte_identical() {
    //* Given
    let forward = build_components(&["api_key", "basic", "petstore_auth", "shared"]);
    let backward = build_components(&["shared", "petstore_auth", "basic", "api_key"]);

    //* When
    let forward = spec3::to_vec(&forward).expect("should encode forward components");
    let backward = spec3::to_vec(&backward).expect("should encode backward components");

    //* Then
    assert_eq!(forward, backward, "insertion order must not affect the output");
}

#[test]
fn encode_components_with_insertion_ordered_map_still_sorts_keys() {
    //* Given
    let components = build_components(&["shared", "basic"]);

    //* When
    let json_output = spec3::to_string(&components).expect("should encode components");

    //* Then
    let stored: Vec<_> = components
        .props
        .security_schemes
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(stored, ["shared", "basic"], "the map keeps insertion order in memory");
    assert!(
        json_output.find(r#""basic""#) < json_output.find(r#""shared""#),
        "the encoded output is sorted anyway: {json_output}"
    );
}

#[test]
fn decode_encoded_document_restores_it() {
    //* Given
    let document = OpenApi::new().components(build_components(&[
        "basic",
        "shared",
        "api_key",
        "petstore_auth",
    ]));
    let encoded = spec3::to_value(&document).expect("should encode document");

    //* When
    let decoded: OpenApi = spec3::from_value(encoded).expect("should decode document");

    //* Then
    assert_eq!(decoded, document, "round trip should be lossless");
    assert_eq!(
        decoded.components.props.security_schemes.len(),
        4,
        "every scheme should survive"
    );
}

#[test]
fn serialize_document_to_yaml_round_trips() {
    //* Given
    let document = OpenApi::new().components(build_components(&["shared", "basic"]));

    //* When
    let yaml_output = serde_norway::to_string(&document).expect("should serialize to YAML");
    let decoded: OpenApi = serde_norway::from_str(&yaml_output).expect("should parse YAML");

    //* Then
    assert_eq!(decoded, document, "YAML round trip should be lossless");
}

#[test]
fn serialize_scheme_to_yaml_keeps_declared_order() {
    //* Given
    let scheme: SecurityScheme = SecuritySchemeProps::builder()
        .scheme_type(SecuritySchemeType::Http)
        .scheme("basic")
        .bearer_format("JWT")
        .into();

    //* When
    let yaml_output = serde_norway::to_string(&scheme).expect("should serialize to YAML");

    //* Then
    assert_eq!(yaml_output, "type: http\nscheme: basic\nbearerFormat: JWT\n");
}

/// Builds the components, inserting the named security schemes in the given order.
fn build_components(order: &[&str]) -> Components {
    let mut security_schemes = Map::new();
    for name in order {
        let scheme: SecurityScheme = match *name {
            "api_key" => SecuritySchemeProps::builder()
                .scheme_type(SecuritySchemeType::ApiKey)
                .name("api_key")
                .location("header")
                .into(),
            "basic" => SecuritySchemeProps::builder()
                .scheme_type(SecuritySchemeType::Http)
                .scheme("basic")
                .into(),
            "petstore_auth" => SecuritySchemeProps::builder()
                .scheme_type(SecuritySchemeType::OAuth2)
                .flow(
                    OAuthFlowKind::Implicit,
                    OAuthFlowProps::builder()
                        .authorization_url("https://example.com/api/oauth/dialog")
                        .scope("write:pets", "modify pets in your account")
                        .scope("read:pets", "read your pets"),
                )
                .into(),
            _ => SecurityScheme::new_ref("#/components/securitySchemes/basic"),
        };
        security_schemes.insert((*name).to_owned(), scheme);
    }

    Components::from(ComponentsProps::builder().security_schemes(security_schemes)).extensions(
        Extensions::new()
            .with("x-generated-by", "spec3")
            .expect("valid extension key"),
    )
}
