//! Shared fixtures for dispatch tests.

#![allow(dead_code)]

use accessible_dispatch::{ObjectGraph, TypeRegistry};
use accessible_model::{PropertyMetadata, TypeSchema, ValueConstraint};
use accessible_types::Verb::{Add, Get, Is, Set};
use std::sync::Arc;

/// Users write posts (one-to-many), posts carry tags (many-to-many),
/// people marry each other (one-to-one on the same property) and befriend
/// each other (many-to-many on the same property).
pub fn blog_schemas() -> Vec<TypeSchema> {
    vec![
        TypeSchema::new("User")
            .property(
                PropertyMetadata::scalar("name", &[Get, Set])
                    .with_constraint(ValueConstraint::text().not_null())
                    .with_default(""),
            )
            .property(
                PropertyMetadata::scalar("active", &[Is, Set])
                    .with_constraint(ValueConstraint::bool().not_null())
                    .with_default(false),
            )
            .property(PropertyMetadata::scalar("id", &[Get]).with_default(0))
            .property(
                PropertyMetadata::list("posts", "post", &[Get, Set]).with_association("Post", "author"),
            )
            .constructor(&["name", "active"]),
        TypeSchema::new("Post")
            .property(
                PropertyMetadata::scalar("title", &[Get, Set])
                    .with_constraint(ValueConstraint::text().not_null())
                    .with_default(""),
            )
            .property(
                PropertyMetadata::scalar("author", &[Get, Set])
                    .with_constraint(ValueConstraint::reference("User"))
                    .with_association("User", "posts"),
            )
            .property(PropertyMetadata::set("tags", "tag", &[Get, Set]).with_association("Tag", "posts"))
            .property(PropertyMetadata::list("revisions", "revision", &[Get, Set]))
            .property(PropertyMetadata::map("options", "option", &[Get, Set]))
            .property(PropertyMetadata::set("labels", "label", &[Get]).with_methods(&[Add]))
            .constructor(&["title"]),
        TypeSchema::new("Tag")
            .property(PropertyMetadata::scalar("label", &[Get, Set]))
            .property(PropertyMetadata::set("posts", "post", &[Get]).with_association("Post", "tags")),
        TypeSchema::new("Person")
            .property(
                PropertyMetadata::scalar("spouse", &[Get, Set])
                    .with_constraint(ValueConstraint::reference("Person"))
                    .with_association("Person", "spouse"),
            )
            .property(
                PropertyMetadata::set("friends", "friend", &[Get]).with_association("Person", "friends"),
            ),
    ]
}

pub fn blog_registry() -> Arc<TypeRegistry> {
    Arc::new(TypeRegistry::new(blog_schemas()).expect("blog schemas register"))
}

pub fn blog_graph() -> ObjectGraph {
    ObjectGraph::new(blog_registry())
}

