//! Accessor name parsing and generation.

use crate::{DispatchError, DispatchResult};
use accessible_types::Verb;
use regex_lite::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static ACCESSOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(get|is|set|add|remove)([A-Z]\w*)$").expect("accessor pattern compiles")
});

/// An accessor name split into its verb and target.
///
/// For `add`/`remove` the target is a collection item name, otherwise a
/// property name. The first letter of the target is lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub verb: Verb,
    pub target: String,
}

/// Parses `<verb><CapitalizedTarget>`.
pub fn parse_method_name(name: &str) -> DispatchResult<ParsedName> {
    let unknown = || DispatchError::UnknownMethod(name.to_string());
    let caps = ACCESSOR.captures(name).ok_or_else(unknown)?;
    let verb = Verb::from_str(&caps[1]).map_err(|_| unknown())?;
    Ok(ParsedName {
        verb,
        target: lower_first(&caps[2]),
    })
}

/// Builds the accessor name for `verb` on a property or item name.
pub fn method_name(verb: Verb, target: &str) -> String {
    format!("{}{}", verb.as_str(), upper_first(target))
}

pub(crate) fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_helpers() {
        assert_eq!(lower_first("Title"), "title");
        assert_eq!(lower_first("URL"), "uRL");
        assert_eq!(upper_first("tag"), "Tag");
        assert_eq!(upper_first(""), "");
    }
}
