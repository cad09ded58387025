//! Placeholder substitution - turns a path template and parameters into a concrete path

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use url::form_urlencoded;

use crate::params::Params;

/// Marker that starts a placeholder segment
const PLACEHOLDER_MARKER: char = ':';

/// Signals that a path segment is not a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("path segment is not a placeholder")]
pub(crate) struct InvalidKey;

/// Extract the placeholder name from a single path segment
///
/// A segment is a placeholder when it is non-empty and starts with `:`.
/// The name is everything after the marker and may itself be empty.
pub(crate) fn placeholder_key(segment: &str) -> Result<&str, InvalidKey> {
    segment.strip_prefix(PLACEHOLDER_MARKER).ok_or(InvalidKey)
}

/// Substitute parameters into a path template
///
/// With `params` set to `None` the template is returned verbatim. Otherwise
/// every `:name` segment is replaced by the matching parameter, or left as its
/// own text when no parameter was supplied. When `query` is true, parameters
/// that did not fill a placeholder are appended as a query string sorted by
/// key; when false they are dropped.
///
/// # Example
///
/// ```rust
/// use named_paths::{replace, Params};
///
/// let params = Params::new().with("id", 123).with("name", "felix");
/// assert_eq!(replace("/dogs/:id", Some(&params), true), "/dogs/123?name=felix");
/// assert_eq!(replace("/dogs/:id", Some(&params), false), "/dogs/123");
/// assert_eq!(replace("/dogs/:id", None, true), "/dogs/:id");
/// ```
pub fn replace(template: &str, params: Option<&Params>, query: bool) -> String {
    let Some(params) = params else {
        return template.to_string();
    };

    let segments: Vec<&str> = template.split('/').collect();

    // Unsupplied placeholders fall back to their own text, e.g. `:id` => `:id`
    let mut fill_values: BTreeMap<&str, String> = BTreeMap::new();
    for &segment in &segments {
        if let Ok(key) = placeholder_key(segment) {
            fill_values.insert(key, segment.to_string());
        }
    }
    for (key, value) in params {
        fill_values.insert(key.as_str(), value.to_string());
    }

    let mut consumed = BTreeSet::new();
    let mut resolved = Vec::with_capacity(segments.len());
    for &segment in &segments {
        match placeholder_key(segment) {
            Ok(key) => {
                resolved.push(fill_values.get(key).map_or(segment, |v| v.as_str()));
                consumed.insert(key);
            }
            Err(InvalidKey) => resolved.push(segment),
        }
    }
    let base = resolved.join("/");

    if !query {
        return base;
    }

    let leftovers: Vec<(&str, &str)> = fill_values
        .iter()
        .filter(|(key, _)| !consumed.contains(*key))
        .map(|(key, value)| (*key, value.as_str()))
        .collect();
    if leftovers.is_empty() {
        return base;
    }

    let query_string = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(leftovers)
        .finish();
    format!("{}?{}", base, query_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_placeholder_key_valid() {
        assert_eq!(placeholder_key(":id"), Ok("id"));
    }

    #[test]
    fn test_placeholder_key_literal() {
        assert_eq!(placeholder_key("id"), Err(InvalidKey));
        assert_eq!(placeholder_key(""), Err(InvalidKey));
        assert_eq!(placeholder_key("a:b"), Err(InvalidKey));
    }

    #[test]
    fn test_placeholder_key_lone_marker() {
        // Accepted as a placeholder with an empty name
        assert_eq!(placeholder_key(":"), Ok(""));
    }

    #[test]
    fn test_no_params_returns_template() {
        assert_eq!(replace("/some/path", None, false), "/some/path");
        assert_eq!(replace("/dogs/:id", None, true), "/dogs/:id");
    }

    #[test]
    fn test_empty_params_keeps_placeholders() {
        let params = Params::new();
        assert_eq!(replace("/dogs/:id", Some(&params), true), "/dogs/:id");
        assert_eq!(replace("/dogs/", Some(&params), true), "/dogs/");
    }

    #[test]
    fn test_id_replacement() {
        let params = Params::new().with("id", 123);
        assert_eq!(replace("/widgets/:id", Some(&params), false), "/widgets/123");
        assert_eq!(replace("/widgets/:id", Some(&params), true), "/widgets/123");
    }

    #[test]
    fn test_query_with_no_replacements() {
        let params = Params::new().with("id", 123);
        assert_eq!(replace("/widgets/", Some(&params), true), "/widgets/?id=123");
        assert_eq!(replace("/widgets/", Some(&params), false), "/widgets/");
    }

    #[test]
    fn test_query_and_replacements() {
        let params = Params::new()
            .with("id", 123)
            .with("blah", "dog")
            .with("name", "felix");
        assert_eq!(
            replace("/widgets/:id/edit/:blah", Some(&params), true),
            "/widgets/123/edit/dog?name=felix"
        );
    }

    #[test]
    fn test_missing_param_left_as_literal() {
        let params = Params::new().with("id", 123).with("name", "felix");
        assert_eq!(
            replace("/widgets/:id/edit/:blah", Some(&params), true),
            "/widgets/123/edit/:blah?name=felix"
        );
    }

    #[test]
    fn test_query_keys_sorted_and_escaped() {
        let params = Params::new()
            .with("z", "last")
            .with("name", "jane doe")
            .with("a", "x&y");
        assert_eq!(
            replace("/blah", Some(&params), true),
            "/blah?a=x%26y&name=jane+doe&z=last"
        );
    }

    #[test]
    fn test_repeated_placeholder_uses_same_value() {
        let params = Params::new().with("id", 7);
        assert_eq!(replace("/a/:id/b/:id", Some(&params), true), "/a/7/b/7");
    }

    #[test]
    fn test_leading_and_trailing_slash_preserved() {
        let params = Params::new().with("id", 1);
        assert_eq!(replace("/dogs/:id/", Some(&params), true), "/dogs/1/");
        assert_eq!(replace("dogs/:id", Some(&params), true), "dogs/1");
    }

    #[test]
    fn test_lone_marker_is_empty_named_placeholder() {
        let params = Params::new().with("", "x");
        assert_eq!(replace("/a/:", Some(&params), true), "/a/x");
        assert_eq!(replace("/a/:", Some(&Params::new()), true), "/a/:");
    }

    #[test]
    fn test_scalar_kinds_rendered() {
        let params = Params::new()
            .with("flag", true)
            .with("ratio", 0.25)
            .with("id", -3);
        assert_eq!(
            replace("/:id", Some(&params), true),
            "/-3?flag=true&ratio=0.25"
        );
    }
}
