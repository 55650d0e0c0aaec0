use capkit_model::{Named, NamedEntity};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn name_returns_constructed_value() {
    let e = NamedEntity::new("Base");
    assert_eq!(e.name(), "Base");
}

#[test]
fn empty_name_is_accepted() {
    let e = NamedEntity::new("");
    assert_eq!(e.name(), "");
}

#[test]
fn accepts_owned_and_borrowed_strings() {
    let owned = NamedEntity::new(String::from("owned"));
    let borrowed = NamedEntity::new("owned");
    assert_eq!(owned, borrowed);
}

#[test]
fn unicode_name_is_preserved() {
    let e = NamedEntity::new("Grüße 🚀");
    assert_eq!(e.name(), "Grüße 🚀");
}

#[test]
fn usable_as_named_trait_object() {
    let e = NamedEntity::new("dyn");
    let named: &dyn Named = &e;
    assert_eq!(named.name(), "dyn");
}

#[test]
fn serializes_name_field() {
    let e = NamedEntity::new("Base");
    assert_eq!(serde_json::to_value(&e).unwrap(), json!({"name": "Base"}));
}

#[test]
fn deserializes_name_field() {
    let e: NamedEntity = serde_json::from_value(json!({"name": "Back"})).unwrap();
    assert_eq!(e.name(), "Back");
}
