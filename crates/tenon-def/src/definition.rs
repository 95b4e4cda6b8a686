//! # Definition Model — Declarative Shape Descriptions
//!
//! A [`Definition`] describes the shape a location in untrusted input is
//! expected to have: string, number, and boolean leaves, enumerated
//! [`list`]s of literal values, homogeneous [`array`]s, [`object`]s with
//! named fields, ordered [`union`]s of alternatives, and the [`optional`]
//! wrapper that additionally admits null.
//!
//! Trees are built bottom-up with the builder functions, typically once at
//! startup, then handed to the validation engine:
//!
//! ```
//! use tenon_def::{array, number, object, optional, string, Kind};
//!
//! let order = object([
//!     ("id", number().describe("Order identifier")),
//!     ("tags", array(string())),
//!     ("note", optional(string())),
//! ]);
//!
//! assert_eq!(order.kind(), Kind::Object);
//! ```
//!
//! ## Immutability and Sharing
//!
//! A definition owns all of its data and is never mutated after
//! construction. Validation borrows it immutably, so one tree can serve any
//! number of concurrent callers without locking. Reusing a subtree in
//! several parents is a `clone()`; wrapping with [`optional`] produces a
//! new definition and leaves the original untouched.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::kind::Kind;

// ---------------------------------------------------------------------------
// Literals
// ---------------------------------------------------------------------------

/// A literal value a [`list`] definition may admit: a string or a number.
///
/// Equality between two literals is structural. Matching a literal against
/// a runtime value goes through [`Literal::matches`], which compares
/// numbers numerically so that `1` admits `1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// A string literal, matched by exact equality.
    Str(String),
    /// A numeric literal, matched by numeric equality.
    Num(serde_json::Number),
}

impl Literal {
    /// Whether `value` is exactly this literal.
    ///
    /// Strings match by equality. Numbers match numerically, so integer and
    /// float spellings of the same value are interchangeable. A value of
    /// any other JSON type matches no literal.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Str(expected), Value::String(actual)) => expected == actual,
            (Self::Num(expected), Value::Number(actual)) => {
                match (expected.as_f64(), actual.as_f64()) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Num(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Self::Num(n.into())
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Self::Num(n.into())
    }
}

impl From<u64> for Literal {
    fn from(n: u64) -> Self {
        Self::Num(n.into())
    }
}

impl From<serde_json::Number> for Literal {
    fn from(n: serde_json::Number) -> Self {
        Self::Num(n)
    }
}

/// Render a literal set for messages: `"pending", "shipped", 3`.
pub(crate) fn join_literals(allowed: &[Literal]) -> String {
    allowed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Composite payloads
// ---------------------------------------------------------------------------

/// The allowed-values payload of a [`list`] definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ListDef {
    pub(crate) allowed: Vec<Literal>,
}

impl ListDef {
    /// The admitted literal values, in declaration order.
    pub fn allowed(&self) -> &[Literal] {
        &self.allowed
    }
}

/// The element payload of an [`array`] definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayDef {
    pub(crate) element: Box<Definition>,
}

impl ArrayDef {
    /// The definition every element must satisfy.
    pub fn element(&self) -> &Definition {
        &self.element
    }
}

/// The named-field payload of an [`object`] definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDef {
    pub(crate) fields: IndexMap<String, Definition>,
}

impl ObjectDef {
    /// The declared fields, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Definition> {
        &self.fields
    }
}

/// The alternatives payload of a [`union`] definition.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionDef {
    pub(crate) alternatives: Vec<Definition>,
}

impl UnionDef {
    /// The alternatives, in declaration (match-precedence) order.
    pub fn alternatives(&self) -> &[Definition] {
        &self.alternatives
    }
}

// ---------------------------------------------------------------------------
// Definition tree
// ---------------------------------------------------------------------------

/// The shape a definition expects of a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Any UTF-8 string.
    String,
    /// Any number.
    Number,
    /// `true` or `false`.
    Boolean,
    /// Exactly one of a fixed set of literal values.
    List(ListDef),
    /// A sequence whose every element satisfies one definition.
    Array(ArrayDef),
    /// An object with named fields; undeclared keys are ignored.
    Object(ObjectDef),
    /// A value matching at least one alternative; first match wins.
    Union(UnionDef),
    /// The wrapped shape, or null in its place.
    Optional(Box<Definition>),
}

/// One node of a definition tree.
///
/// Constructed through the builder functions ([`string`], [`number`],
/// [`boolean`], [`list`], [`array`], [`object`], [`union`], [`optional`]),
/// optionally annotated with [`describe`](Definition::describe), and
/// consumed through the [`Validate`](crate::Validate) trait.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub(crate) shape: Shape,
    pub(crate) description: Option<String>,
}

impl Definition {
    fn new(shape: Shape) -> Self {
        Self {
            shape,
            description: None,
        }
    }

    /// Attach a human-readable description.
    ///
    /// Descriptions have no effect on validation; they surface in the
    /// documentation projection and are meant for generated API
    /// descriptions.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// The kind of this definition.
    ///
    /// The optional wrapper is transparent here: an optional string has
    /// kind [`Kind::String`].
    pub fn kind(&self) -> Kind {
        match &self.shape {
            Shape::String => Kind::String,
            Shape::Number => Kind::Number,
            Shape::Boolean => Kind::Boolean,
            Shape::List(_) => Kind::List,
            Shape::Array(_) => Kind::Array,
            Shape::Object(_) => Kind::Object,
            Shape::Union(_) => Kind::Union,
            Shape::Optional(inner) => inner.kind(),
        }
    }

    /// The shape this definition expects.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The description, if any.
    ///
    /// An undescribed optional wrapper falls through to the wrapped
    /// definition's description; a description on the wrapper itself takes
    /// precedence.
    pub fn description(&self) -> Option<&str> {
        match (&self.description, &self.shape) {
            (Some(text), _) => Some(text),
            (None, Shape::Optional(inner)) => inner.description(),
            (None, _) => None,
        }
    }

    /// Whether null is admitted in place of this definition's shape.
    pub fn is_optional(&self) -> bool {
        matches!(self.shape, Shape::Optional(_))
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// A definition admitting any UTF-8 string.
pub fn string() -> Definition {
    Definition::new(Shape::String)
}

/// A definition admitting any number.
///
/// No finiteness check is needed: `serde_json` cannot represent NaN or the
/// infinities, so every [`Value::Number`] that reaches validation is
/// finite.
pub fn number() -> Definition {
    Definition::new(Shape::Number)
}

/// A definition admitting `true` or `false`.
pub fn boolean() -> Definition {
    Definition::new(Shape::Boolean)
}

/// A definition admitting exactly one of `allowed`: an enumeration of
/// string or number literals.
///
/// Membership is decided by [`Literal::matches`], never by coercion: the
/// number `1` is not the string `"1"`.
pub fn list<I, L>(allowed: I) -> Definition
where
    I: IntoIterator<Item = L>,
    L: Into<Literal>,
{
    Definition::new(Shape::List(ListDef {
        allowed: allowed.into_iter().map(Into::into).collect(),
    }))
}

/// A definition admitting a sequence whose every element satisfies
/// `element`. The empty sequence always satisfies an array definition.
pub fn array(element: Definition) -> Definition {
    Definition::new(Shape::Array(ArrayDef {
        element: Box::new(element),
    }))
}

/// A definition admitting an object with the given named fields.
///
/// Fields are validated in declaration order and keys not declared here are
/// ignored. Redeclaring a field name replaces its definition but keeps the
/// original position.
pub fn object<I, K>(fields: I) -> Definition
where
    I: IntoIterator<Item = (K, Definition)>,
    K: Into<String>,
{
    let fields = fields
        .into_iter()
        .map(|(name, def)| (name.into(), def))
        .collect();
    Definition::new(Shape::Object(ObjectDef { fields }))
}

/// A definition admitting a value that matches at least one of
/// `alternatives`, tried in declaration order; the first match wins.
///
/// A union with no alternatives rejects every value.
pub fn union<I>(alternatives: I) -> Definition
where
    I: IntoIterator<Item = Definition>,
{
    Definition::new(Shape::Union(UnionDef {
        alternatives: alternatives.into_iter().collect(),
    }))
}

/// Wrap a definition so that null is admitted in its place.
///
/// The wrapped definition is moved in unchanged (wrap a `clone()` to keep
/// using the original). Wrapping an already-optional definition returns it
/// as-is rather than stacking wrappers.
pub fn optional(def: Definition) -> Definition {
    if def.is_optional() {
        return def;
    }
    Definition::new(Shape::Optional(Box::new(def)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builders_have_expected_kinds() {
        assert_eq!(string().kind(), Kind::String);
        assert_eq!(number().kind(), Kind::Number);
        assert_eq!(boolean().kind(), Kind::Boolean);
        assert_eq!(list(["a"]).kind(), Kind::List);
        assert_eq!(array(string()).kind(), Kind::Array);
        assert_eq!(object([("a", string())]).kind(), Kind::Object);
        assert_eq!(union([string(), number()]).kind(), Kind::Union);
    }

    #[test]
    fn test_optional_is_transparent_for_kind() {
        assert_eq!(optional(string()).kind(), Kind::String);
        assert_eq!(optional(array(number())).kind(), Kind::Array);
        assert!(optional(string()).is_optional());
        assert!(!string().is_optional());
    }

    #[test]
    fn test_optional_does_not_stack() {
        let once = optional(string());
        let twice = optional(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_optional_leaves_original_usable() {
        let base = string().describe("base");
        let wrapped = optional(base.clone());
        assert!(!base.is_optional());
        assert!(wrapped.is_optional());
        assert_eq!(base.description(), Some("base"));
    }

    #[test]
    fn test_description_falls_through_optional() {
        let wrapped = optional(string().describe("inner"));
        assert_eq!(wrapped.description(), Some("inner"));

        let overridden = optional(string().describe("inner")).describe("outer");
        assert_eq!(overridden.description(), Some("outer"));

        assert_eq!(string().description(), None);
    }

    #[test]
    fn test_literal_matches_strings_exactly() {
        let lit = Literal::from("active");
        assert!(lit.matches(&json!("active")));
        assert!(!lit.matches(&json!("Active")));
        assert!(!lit.matches(&json!(1)));
        assert!(!lit.matches(&json!(null)));
    }

    #[test]
    fn test_literal_matches_numbers_numerically() {
        let lit = Literal::from(1);
        assert!(lit.matches(&json!(1)));
        assert!(lit.matches(&json!(1.0)));
        assert!(!lit.matches(&json!(2)));
        assert!(!lit.matches(&json!("1")));
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::from("a").to_string(), "\"a\"");
        assert_eq!(Literal::from(3).to_string(), "3");
        assert_eq!(
            join_literals(&[Literal::from("a"), Literal::from(3)]),
            "\"a\", 3"
        );
    }

    #[test]
    fn test_list_accepts_mixed_literal_sources() {
        let def = list([Literal::from("a"), Literal::from(3)]);
        let Shape::List(payload) = def.shape() else {
            panic!("expected a list shape");
        };
        assert_eq!(payload.allowed().len(), 2);
    }

    #[test]
    fn test_object_redeclared_field_replaces_in_place() {
        let def = object([("a", string()), ("b", number()), ("a", boolean())]);
        let Shape::Object(payload) = def.shape() else {
            panic!("expected an object shape");
        };
        let names: Vec<&str> = payload.fields().keys().map(String::as_str).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(payload.fields()["a"].kind(), Kind::Boolean);
    }

    #[test]
    fn test_object_preserves_declaration_order() {
        let def = object([("z", string()), ("a", string()), ("m", string())]);
        let Shape::Object(payload) = def.shape() else {
            panic!("expected an object shape");
        };
        let names: Vec<&str> = payload.fields().keys().map(String::as_str).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }
}
