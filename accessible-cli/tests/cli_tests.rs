use accessible_cli::{Runner, Script, ScriptError, StepOutput, describe};
use accessible_dispatch::{DispatchError, ObjectGraph, TypeRegistry};
use accessible_model::SchemaFile;
use accessible_types::Value;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

const SCHEMA: &str = r#"
[[types]]
name = "User"
constructor = ["name"]

[[types.properties]]
name = "name"
access = ["get", "set"]
constraint = { kind = "text", nullable = false }
default = ""

[[types.properties]]
name = "posts"
access = ["get"]
collection = { kind = "list", item_name = "post" }
association = { target_type = "Post", target_property = "author" }

[[types]]
name = "Post"

[[types.properties]]
name = "author"
access = ["get", "set"]
constraint = { kind = "ref", target_type = "User" }
association = { target_type = "User", target_property = "posts" }

[[types.properties]]
name = "meta"
access = ["get"]
collection = { kind = "map", item_name = "meta" }
"#;

fn registry() -> TypeRegistry {
    TypeRegistry::from_schema_file(SchemaFile::from_toml_str(SCHEMA).unwrap()).unwrap()
}

fn runner() -> Runner {
    Runner::new(ObjectGraph::new(Arc::new(registry())))
}

// ── inspect ──────────────────────────────────────────────────────

#[test]
fn describe_lists_accessors_per_type() {
    let expected = "\
Post
  addMeta(key, value)
  getAuthor()
  getMeta()
  removeMeta(key)
  setAuthor(value)
User
  addPost(value)
  getName()
  getPosts()
  removePost(value)
  setName(value)
";
    assert_eq!(describe(&registry()), expected);
}

#[test]
fn schema_file_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blog.toml");
    std::fs::write(&path, SCHEMA).unwrap();

    let registry = TypeRegistry::from_schema_file(SchemaFile::load_from(&path).unwrap()).unwrap();
    assert_eq!(registry.type_names(), vec!["Post", "User"]);
}

// ── run ──────────────────────────────────────────────────────────

#[test]
fn script_links_objects_through_aliases() {
    let script = Script::from_json_str(
        r#"[
            {"create": "User", "as": "alice", "args": ["Alice"]},
            {"create": "Post", "as": "hello"},
            {"call": "hello", "method": "setAuthor", "args": ["@alice"]},
            {"call": "alice", "method": "getPosts"}
        ]"#,
    )
    .unwrap();

    let mut runner = runner();
    let outputs = runner.run(&script).unwrap();

    assert_eq!(
        outputs[0],
        StepOutput::Created {
            alias: "alice".into(),
            type_name: "User".into(),
        }
    );
    assert_eq!(
        outputs[2],
        StepOutput::Returned {
            call: r#"@hello.setAuthor("@alice")"#.into(),
            value: json!("@hello"),
        }
    );
    assert_eq!(outputs[3].to_string(), r#"@alice.getPosts() -> ["@hello"]"#);

    let alice = runner.object("alice").unwrap();
    let hello = runner.object("hello").unwrap();
    assert_eq!(runner.graph().peek(hello, "author"), Some(&Value::Ref(alice)));
}

#[test]
fn map_entries_render_as_pairs() {
    let script = Script::from_json_str(
        r#"[
            {"create": "Post", "as": "p"},
            {"call": "p", "method": "addMeta", "args": ["lang", "en"]},
            {"call": "p", "method": "getMeta"}
        ]"#,
    )
    .unwrap();

    let outputs = runner().run(&script).unwrap();
    assert_eq!(
        outputs[2],
        StepOutput::Returned {
            call: "@p.getMeta()".into(),
            value: json!([["lang", "en"]]),
        }
    );
}

#[test]
fn unaliased_objects_get_generated_names() {
    let script = Script::from_json_str(r#"[{"create": "Post"}, {"call": "post1", "method": "getAuthor"}]"#).unwrap();
    let outputs = runner().run(&script).unwrap();
    assert_eq!(outputs[1].to_string(), "@post1.getAuthor() -> null");
}

#[test]
fn unknown_alias_fails() {
    let script = Script::from_json_str(r#"[{"call": "ghost", "method": "getName"}]"#).unwrap();
    assert!(matches!(
        runner().run(&script),
        Err(ScriptError::UnknownAlias(a)) if a == "ghost"
    ));
}

#[test]
fn rebinding_alias_fails() {
    let script = Script::from_json_str(
        r#"[{"create": "Post", "as": "p"}, {"create": "Post", "as": "p"}]"#,
    )
    .unwrap();
    assert!(matches!(
        runner().run(&script),
        Err(ScriptError::DuplicateAlias(a)) if a == "p"
    ));
}

#[test]
fn dispatch_errors_carry_step_number() {
    let script = Script::from_json_str(
        r#"[
            {"create": "User", "as": "u", "args": ["bob"]},
            {"call": "u", "method": "setId", "args": [1]}
        ]"#,
    )
    .unwrap();

    match runner().run(&script) {
        Err(ScriptError::Dispatch { step, source }) => {
            assert_eq!(step, 2);
            assert_eq!(source, DispatchError::UnknownMethod("setId".into()));
        }
        other => panic!("expected dispatch error, got {other:?}"),
    }
}
