use accessible_model::{CollectionKind, PropertyMetadata, ValueConstraint};
use accessible_types::{Value, Verb};
use pretty_assertions::assert_eq;

// ── Shorthand constructors ───────────────────────────────────────

#[test]
fn scalar_property_has_declared_access_only() {
    let p = PropertyMetadata::scalar("title", &[Verb::Get, Verb::Set]);
    assert_eq!(p.name, "title");
    assert!(p.allows(Verb::Get));
    assert!(p.allows(Verb::Set));
    assert!(!p.allows(Verb::Is));
    assert!(!p.allows(Verb::Add));
    assert!(!p.is_collection());
    assert_eq!(p.item_name(), None);
}

#[test]
fn collection_grants_add_and_remove_by_default() {
    let p = PropertyMetadata::list("tags", "tag", &[Verb::Get]);
    assert_eq!(p.collection_kind(), Some(CollectionKind::List));
    assert_eq!(p.item_name(), Some("tag"));
    assert!(p.allows(Verb::Add));
    assert!(p.allows(Verb::Remove));
    assert!(!p.allows(Verb::Set));
    assert_eq!(
        p.effective_access().into_iter().collect::<Vec<_>>(),
        vec![Verb::Get, Verb::Add, Verb::Remove]
    );
}

#[test]
fn with_methods_restricts_collection_verbs() {
    let p = PropertyMetadata::set("tags", "tag", &[]).with_methods(&[Verb::Add, Verb::Get]);
    assert!(p.allows(Verb::Add));
    assert!(!p.allows(Verb::Remove));
    // Non-collection verbs are dropped from `methods`.
    assert!(!p.allows(Verb::Get));
}

#[test]
fn with_methods_is_noop_on_scalars() {
    let p = PropertyMetadata::scalar("x", &[Verb::Get]).with_methods(&[Verb::Add]);
    assert!(!p.allows(Verb::Add));
}

#[test]
fn item_name_falls_back_to_property_name() {
    let mut p = PropertyMetadata::map("options", "option", &[]);
    p.collection.as_mut().unwrap().item_name = None;
    assert_eq!(p.item_name(), Some("options"));
}

// ── Initial values ───────────────────────────────────────────────

#[test]
fn collections_start_empty() {
    assert_eq!(PropertyMetadata::list("a", "x", &[]).initial_value(), Value::List(vec![]));
    assert_eq!(PropertyMetadata::set("b", "y", &[]).initial_value(), Value::Set(vec![]));
    assert_eq!(PropertyMetadata::map("c", "z", &[]).initial_value(), Value::Map(vec![]));
}

#[test]
fn scalars_start_at_default() {
    assert_eq!(PropertyMetadata::scalar("a", &[]).initial_value(), Value::Null);
    let p = PropertyMetadata::scalar("count", &[Verb::Get]).with_default(3);
    assert_eq!(p.initial_value(), Value::Int(3));
}

#[test]
fn collection_ignores_default() {
    let p = PropertyMetadata::list("a", "x", &[]).with_default("ignored");
    assert_eq!(p.initial_value(), Value::List(vec![]));
}

#[test]
fn builder_sets_association_and_constraint() {
    let p = PropertyMetadata::scalar("owner", &[Verb::Get, Verb::Set])
        .with_association("User", "posts")
        .with_constraint(ValueConstraint::reference("User"));
    let assoc = p.association.as_ref().unwrap();
    assert_eq!(assoc.target_type, "User");
    assert_eq!(assoc.target_property, "posts");
    assert_eq!(p.constraint.as_ref().unwrap().target_type.as_deref(), Some("User"));
}

// ── CollectionKind ───────────────────────────────────────────────

#[test]
fn collection_kind_holds_matching_container_only() {
    assert!(CollectionKind::List.holds(&Value::List(vec![])));
    assert!(!CollectionKind::List.holds(&Value::Set(vec![])));
    assert!(!CollectionKind::Set.holds(&Value::Null));
    assert!(CollectionKind::Map.holds(&Value::Map(vec![])));
}
