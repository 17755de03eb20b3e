use accessible_model::{PropertyMetadata, SchemaError, TypeSchema};
use accessible_types::Verb;
use pretty_assertions::assert_eq;

fn post_schema() -> TypeSchema {
    TypeSchema::new("Post")
        .property(PropertyMetadata::scalar("title", &[Verb::Get, Verb::Set]))
        .property(PropertyMetadata::set("tags", "tag", &[Verb::Get]))
        .property(PropertyMetadata::map("meta", "metaEntry", &[Verb::Get]))
        .constructor(&["title"])
}

#[test]
fn lookup_by_name() {
    let s = post_schema();
    assert_eq!(s.get("title").unwrap().name, "title");
    assert_eq!(s.get("tags").unwrap().item_name(), Some("tag"));
    assert!(s.get("tag").is_none());
}

#[test]
fn valid_schema_passes() {
    assert_eq!(post_schema().validate(), Ok(()));
}

#[test]
fn duplicate_property_rejected() {
    let s = post_schema().property(PropertyMetadata::scalar("title", &[]));
    assert_eq!(
        s.validate(),
        Err(SchemaError::DuplicateProperty {
            type_name: "Post".into(),
            property: "title".into(),
        })
    );
}

#[test]
fn duplicate_item_name_rejected() {
    let s = post_schema().property(PropertyMetadata::list("labels", "tag", &[]));
    assert_eq!(
        s.validate(),
        Err(SchemaError::DuplicateItemName {
            type_name: "Post".into(),
            item_name: "tag".into(),
        })
    );
}

#[test]
fn unknown_constructor_property_rejected() {
    let s = post_schema().constructor(&["title", "body"]);
    assert_eq!(
        s.validate(),
        Err(SchemaError::UnknownConstructorProperty {
            type_name: "Post".into(),
            property: "body".into(),
        })
    );
}

#[test]
fn associated_map_rejected() {
    let s = TypeSchema::new("A")
        .property(PropertyMetadata::map("bs", "b", &[]).with_association("B", "a"));
    assert_eq!(
        s.validate(),
        Err(SchemaError::AssociatedMap {
            type_name: "A".into(),
            property: "bs".into(),
        })
    );
}

// ── Accessor names ───────────────────────────────────────────────

#[test]
fn property_name_must_form_accessor() {
    for bad in ["my-prop", "1st", "", "naïve", "has space"] {
        let s = TypeSchema::new("Thing").property(PropertyMetadata::scalar(bad, &[Verb::Get]));
        assert_eq!(
            s.validate(),
            Err(SchemaError::InvalidName {
                type_name: "Thing".into(),
                name: bad.into(),
            }),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn item_name_must_form_accessor() {
    let s = TypeSchema::new("Thing").property(PropertyMetadata::list("parts", "sub-part", &[]));
    assert_eq!(
        s.validate(),
        Err(SchemaError::InvalidName {
            type_name: "Thing".into(),
            name: "sub-part".into(),
        })
    );
}

#[test]
fn underscores_digits_and_capitals_are_accepted() {
    let s = TypeSchema::new("Thing")
        .property(PropertyMetadata::scalar("Url", &[Verb::Get]))
        .property(PropertyMetadata::scalar("line_2", &[Verb::Get]))
        .property(PropertyMetadata::set("parts", "part_v2", &[]));
    assert_eq!(s.validate(), Ok(()));
}

#[test]
fn names_differing_only_in_first_letter_case_collide() {
    let s = TypeSchema::new("Thing")
        .property(PropertyMetadata::scalar("tag", &[Verb::Get]))
        .property(PropertyMetadata::scalar("Tag", &[Verb::Get]));
    assert_eq!(
        s.validate(),
        Err(SchemaError::DuplicateProperty {
            type_name: "Thing".into(),
            property: "Tag".into(),
        })
    );

    let s = TypeSchema::new("Thing")
        .property(PropertyMetadata::set("tags", "tag", &[]))
        .property(PropertyMetadata::list("labels", "Tag", &[]));
    assert_eq!(
        s.validate(),
        Err(SchemaError::DuplicateItemName {
            type_name: "Thing".into(),
            item_name: "Tag".into(),
        })
    );
}

#[test]
fn property_and_item_may_share_a_name() {
    // `getPost`/`setPost` and `addPost`/`removePost` do not overlap.
    let s = TypeSchema::new("Thing")
        .property(PropertyMetadata::scalar("post", &[Verb::Get, Verb::Set]))
        .property(PropertyMetadata::list("posts", "post", &[]));
    assert_eq!(s.validate(), Ok(()));
}
