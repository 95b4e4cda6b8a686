//! # tenon-doc — Documentation Projection for Definition Trees
//!
//! A read-only, serializable mirror of a definition's shape. [`DocNode`]
//! strips the validation machinery and keeps what a human reader or a
//! client-type generator needs: the kind of every node, optionality,
//! descriptions, enumerated values, and the nested element, field, and
//! alternative structure.
//!
//! The projection is total. Every definition yields a node, object fields
//! keep their declaration order, and the optional wrapper flattens into an
//! `optional` flag on the wrapped node, so `optional(string())` documents
//! as a string that may be null rather than as a wrapper around one.
//!
//! ```
//! use serde_json::json;
//! use tenon_def::{object, optional, string};
//! use tenon_doc::DocNode;
//!
//! let def = object([("note", optional(string().describe("Free-form note")))]);
//! let doc = DocNode::from_definition(&def);
//! assert_eq!(
//!     json!(doc),
//!     json!({
//!         "type": "object",
//!         "properties": {
//!             "note": {
//!                 "type": "string",
//!                 "optional": true,
//!                 "description": "Free-form note",
//!             },
//!         },
//!     })
//! );
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tenon_def::{Definition, Kind, Literal, Shape};

/// One node of a documentation tree.
///
/// The `type` field is the definition's [`Kind`]; exactly one of the
/// payload fields (`values`, `items`, `properties`, `alternatives`) is
/// populated for composite kinds and all are absent for leaves. Absent
/// payloads and a false `optional` flag are omitted from the serialized
/// form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocNode {
    /// The kind of the documented definition.
    #[serde(rename = "type")]
    pub kind: Kind,
    /// Whether null is admitted in place of the documented shape.
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
    /// Human-readable description, if the definition carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// For `list` nodes, the admitted literal values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Literal>>,
    /// For `array` nodes, the element shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<DocNode>>,
    /// For `object` nodes, the declared fields in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, DocNode>>,
    /// For `union` nodes, the alternatives in match-precedence order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<DocNode>>,
}

/// serde helper: omit `optional` when false.
fn is_false(flag: &bool) -> bool {
    !*flag
}

impl DocNode {
    /// Project a definition into its documentation shape.
    pub fn from_definition(def: &Definition) -> Self {
        let mut node = Self::base(def);
        match def.shape() {
            Shape::String | Shape::Number | Shape::Boolean => {}
            Shape::List(payload) => {
                node.values = Some(payload.allowed().to_vec());
            }
            Shape::Array(payload) => {
                node.items = Some(Box::new(Self::from_definition(payload.element())));
            }
            Shape::Object(payload) => {
                node.properties = Some(
                    payload
                        .fields()
                        .iter()
                        .map(|(name, field)| (name.clone(), Self::from_definition(field)))
                        .collect(),
                );
            }
            Shape::Union(payload) => {
                node.alternatives = Some(
                    payload
                        .alternatives()
                        .iter()
                        .map(Self::from_definition)
                        .collect(),
                );
            }
            Shape::Optional(inner) => {
                node = Self::from_definition(inner);
                node.optional = true;
                // A description on the wrapper wins over the wrapped one.
                node.description = def.description().map(|text| text.to_string());
            }
        }
        node
    }

    fn base(def: &Definition) -> Self {
        Self {
            kind: def.kind(),
            optional: false,
            description: def.description().map(|text| text.to_string()),
            values: None,
            items: None,
            properties: None,
            alternatives: None,
        }
    }
}

impl From<&Definition> for DocNode {
    fn from(def: &Definition) -> Self {
        Self::from_definition(def)
    }
}
