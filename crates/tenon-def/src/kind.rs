//! # Kind Tags
//!
//! [`Kind`] is the closed set of definition-kind names used everywhere a
//! definition identifies itself: in the `kind` field of failure records, in
//! assert error messages, and as the `type` tag of documentation
//! projections.
//!
//! [`value_kind`] is the runtime counterpart: it names the JSON type of an
//! untrusted value for expected-vs-actual diagnostics.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of a definition node.
///
/// Optionality is not a kind. The optional wrapper changes what a location
/// may hold (null becomes acceptable) without changing the shape it
/// expects, so an optional string still has kind [`Kind::String`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// UTF-8 string leaf.
    String,
    /// Numeric leaf.
    Number,
    /// Boolean leaf.
    Boolean,
    /// Enumerated set of literal values.
    List,
    /// Homogeneous sequence of one element shape.
    Array,
    /// Named fields.
    Object,
    /// Ordered alternatives.
    Union,
}

impl Kind {
    /// The canonical lowercase name, as it appears in failure records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::List => "list",
            Self::Array => "array",
            Self::Object => "object",
            Self::Union => "union",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Name the JSON type of a runtime value for diagnostics.
///
/// These are the six JSON types, not definition kinds: an enumeration
/// violation on a string value reports the actual type as `"string"`.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
