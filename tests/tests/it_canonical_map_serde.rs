//! Integration tests for the canonical map helpers on caller-defined serde types.

use serde::Serialize;
use spec3::{Map, spec3::map::Sorted};

#[derive(Serialize)]
struct Labels {
    #[serde(serialize_with = "spec3::spec3::map::canonical::serialize")]
    labels: Map<String, u32>,
}

#[test]
fn serialize_with_canonical_helper_sorts_keys() {
    //* Given
    let labels = Labels {
        labels: [("zeta", 3), ("alpha", 1), ("mid", 2)]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v))
            .collect(),
    };

    //* When
    let json = serde_json::to_string(&labels).expect("should serialize");

    //* Then
    assert_eq!(json, r#"{"labels":{"alpha":1,"mid":2,"zeta":3}}"#);
}

#[test]
fn sorted_view_with_yaml_sorts_keys() {
    //* Given
    let mut map = Map::new();
    map.insert("b".to_owned(), 2);
    map.insert("a".to_owned(), 1);

    //* When
    let yaml = serde_norway::to_string(&Sorted(&map)).expect("should serialize");

    //* Then
    assert_eq!(yaml, "a: 1\nb: 2\n");
}
