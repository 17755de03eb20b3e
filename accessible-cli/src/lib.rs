//! Shared pieces of the `accessible` binary: schema listings and the script
//! runner.

mod script;

pub use script::{Runner, Script, ScriptError, Step, StepOutput};

use accessible_dispatch::TypeRegistry;
use accessible_model::CollectionKind;
use accessible_types::Verb;
use std::fmt::Write;

/// Lists every registered type with its generated accessors, one per line,
/// types and accessors in name order.
pub fn describe(registry: &TypeRegistry) -> String {
    let mut out = String::new();
    for name in registry.type_names() {
        let Some(ty) = registry.get(name) else {
            continue;
        };
        let _ = writeln!(out, "{name}");
        for accessor in ty.table.accessors() {
            let params = match (accessor.arity, accessor.collection, accessor.verb) {
                (0, _, _) => "",
                (2, _, _) => "key, value",
                (_, Some(CollectionKind::Map), Verb::Remove) => "key",
                _ => "value",
            };
            let _ = writeln!(out, "  {}({params})", accessor.method);
        }
    }
    out
}
