//! # Failure Records — Path-Annotated Diagnostics
//!
//! The output of the reporting path. A [`Failure`] pins one violation to
//! its exact location in the value tree through a [`Path`] of object field
//! names and array indices, and carries the raw rejected value.
//!
//! Failures are wire-shaped: they serialize to `{kind, path, value}` JSON
//! records (plus `expected` for enumeration violations) suitable for
//! 400-class response bodies, and `Display` renders the human form used in
//! logs and test output.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::definition::{join_literals, Literal};
use crate::kind::{value_kind, Kind};

/// One step from the root of a value toward a nested location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// An object field name.
    Key(String),
    /// An array element index.
    Index(usize),
}

/// The ordered steps from the root of a value to one nested location.
///
/// Serializes as a JSON array mixing field names and indices, so
/// `items[0].id` is `["items", 0, "id"]` on the wire. The empty path is the
/// root itself and displays as `(root)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<PathSegment>);

impl Path {
    /// The empty path: the root of the value under validation.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The segments from root to location.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// This path extended by an object field name.
    pub fn key(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(name.into()));
        Self(segments)
    }

    /// This path extended by an array index.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(root)");
        }
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(name) if position == 0 => write!(f, "{name}")?,
                PathSegment::Key(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// One violation found by the reporting path.
///
/// `kind` names the definition kind that rejected the value. For a missing
/// required field, `kind` is the field's declared kind, `path` names the
/// absent field, and `value` is null: absence and explicit null are not
/// distinguished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    /// The definition kind that rejected the value.
    pub kind: Kind,
    /// Where in the value tree the rejected value sits.
    pub path: Path,
    /// The rejected value, captured verbatim.
    pub value: Value,
    /// For enumeration violations, the full allowed set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Vec<Literal>>,
}

impl Failure {
    /// A shape violation: the value at `path` is not of the declared kind.
    pub(crate) fn mismatch(kind: Kind, path: Path, value: &Value) -> Self {
        Self {
            kind,
            path,
            value: value.clone(),
            expected: None,
        }
    }

    /// An enumeration violation carrying the allowed set.
    pub(crate) fn not_in_set(path: Path, value: &Value, allowed: &[Literal]) -> Self {
        Self {
            kind: Kind::List,
            path,
            value: value.clone(),
            expected: Some(allowed.to_vec()),
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.expected {
            Some(allowed) => write!(
                f,
                "{}: expected one of [{}], got {}",
                self.path,
                join_literals(allowed),
                self.value
            ),
            None => write!(
                f,
                "{}: expected {}, got {}",
                self.path,
                self.kind,
                value_kind(&self.value)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_display_forms() {
        assert_eq!(Path::root().to_string(), "(root)");
        assert_eq!(Path::root().key("name").to_string(), "name");
        assert_eq!(
            Path::root().key("items").index(0).key("id").to_string(),
            "items[0].id"
        );
        assert_eq!(Path::root().index(2).index(0).to_string(), "[2][0]");
    }

    #[test]
    fn test_path_extension_leaves_parent_untouched() {
        let parent = Path::root().key("items");
        let child = parent.index(3);
        assert_eq!(parent.segments().len(), 1);
        assert_eq!(child.segments().len(), 2);
        assert!(Path::root().is_root());
        assert!(!child.is_root());
    }

    #[test]
    fn test_path_serializes_as_mixed_array() {
        let path = Path::root().key("items").index(0).key("id");
        assert_eq!(json!(path), json!(["items", 0, "id"]));
        let restored: Path = serde_json::from_value(json!(["items", 0, "id"])).unwrap();
        assert_eq!(restored, path);
    }

    #[test]
    fn test_failure_wire_shape_without_expected() {
        let failure = Failure::mismatch(
            Kind::Number,
            Path::root().key("id"),
            &json!("not-a-number"),
        );
        assert_eq!(
            json!(failure),
            json!({
                "kind": "number",
                "path": ["id"],
                "value": "not-a-number",
            })
        );
    }

    #[test]
    fn test_failure_wire_shape_with_expected() {
        let allowed = [Literal::from("a"), Literal::from("b")];
        let failure = Failure::not_in_set(Path::root(), &json!("c"), &allowed);
        assert_eq!(
            json!(failure),
            json!({
                "kind": "list",
                "path": [],
                "value": "c",
                "expected": ["a", "b"],
            })
        );
    }

    #[test]
    fn test_failure_round_trips_through_json() {
        let failure = Failure::not_in_set(
            Path::root().key("status"),
            &json!("deleted"),
            &[Literal::from("active"), Literal::from("inactive")],
        );
        let restored: Failure =
            serde_json::from_value(serde_json::to_value(&failure).unwrap()).unwrap();
        assert_eq!(restored, failure);
    }

    #[test]
    fn test_failure_display_mismatch() {
        let failure = Failure::mismatch(Kind::String, Path::root().key("name"), &json!(7));
        assert_eq!(failure.to_string(), "name: expected string, got number");

        let at_root = Failure::mismatch(Kind::Object, Path::root(), &json!([]));
        assert_eq!(at_root.to_string(), "(root): expected object, got array");
    }

    #[test]
    fn test_failure_display_enumeration() {
        let failure = Failure::not_in_set(
            Path::root().key("status"),
            &json!("deleted"),
            &[Literal::from("active"), Literal::from("inactive")],
        );
        assert_eq!(
            failure.to_string(),
            "status: expected one of [\"active\", \"inactive\"], got \"deleted\""
        );
    }
}
