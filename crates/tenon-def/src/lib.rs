//! # tenon-def — Definition Trees for Untrusted JSON
//!
//! Declarative descriptions of expected data shapes and the two operations
//! derived from them:
//!
//! - **assert**, the fast path: narrow an untrusted [`serde_json::Value`]
//!   to its declared shape, or fail on the first violation with a
//!   message-only [`AssertError`].
//! - **report**, the diagnostic path: collect every violation in the value
//!   as path-annotated, wire-shaped [`Failure`] records, never failing
//!   itself.
//!
//! Downstream layers (request binding, generated API descriptions, client
//! type generation) compose and introspect these trees; the engine itself
//! has no HTTP, storage, or I/O surface.
//!
//! ## Key Design Principles
//!
//! 1. **Data and algorithm stay separate.** A [`Definition`] is a plain
//!    tagged tree with no stored closures and no runtime code generation;
//!    the [`Validate`] trait is the interpreter that walks it.
//! 2. **Fail-fast and collect-all are dual.** `assert` stops at the first
//!    violation in traversal order; `report` gathers all of them, bounded
//!    per array by [`ARRAY_FAILURE_CAP`]. For every definition and value
//!    the two agree on acceptance.
//! 3. **No coercion.** A valid value is returned borrowed and unchanged;
//!    an invalid value is described, never repaired.
//! 4. **Optionality is a wrapper, not a flag.** [`optional`] wraps a
//!    definition in its own node, so the wrapped and unwrapped forms are
//!    distinct values that cannot drift apart.
//!
//! ## Crate Policy
//!
//! - No internal dependencies; this crate is the root of the workspace DAG.
//! - No `unsafe` code. No `panic!()`/`.unwrap()` outside tests: the
//!   reporting path in particular must survive any input.
//! - Validation is pure. No I/O, no logging, no interior mutability;
//!   constructed trees are `Send + Sync` and shared without locking.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use tenon_def::{array, number, object, string, union, Validate};
//!
//! let payload = object([
//!     ("id", number()),
//!     ("tags", array(string())),
//!     ("ref", union([string(), number()])),
//! ]);
//!
//! let value = json!({"id": 7, "tags": ["a"], "ref": "r-1"});
//! assert!(payload.assert(&value).is_ok());
//! assert!(payload.report(&value).is_empty());
//!
//! let broken = json!({"id": "x", "tags": ["a", 3], "ref": true});
//! assert!(payload.assert(&broken).is_err());
//! assert_eq!(payload.report(&broken).len(), 4);
//! ```

pub mod definition;
pub mod error;
pub mod failure;
pub mod kind;
pub mod validate;

// Re-export the primary surface for ergonomic imports.
pub use definition::{
    array, boolean, list, number, object, optional, string, union, ArrayDef, Definition, ListDef,
    Literal, ObjectDef, Shape, UnionDef,
};
pub use error::AssertError;
pub use failure::{Failure, Path, PathSegment};
pub use kind::{value_kind, Kind};
pub use validate::{Validate, ARRAY_FAILURE_CAP};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_shared_types_are_send_and_sync() {
        assert_send_sync::<Definition>();
        assert_send_sync::<Failure>();
        assert_send_sync::<AssertError>();
    }

    #[test]
    fn test_definition_is_shareable_across_threads() {
        let def = std::sync::Arc::new(object([("id", number())]));
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let def = std::sync::Arc::clone(&def);
                std::thread::spawn(move || {
                    let value = serde_json::json!({"id": n});
                    def.assert(&value).is_ok() && def.report(&value).is_empty()
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
