//! The flattening walk: a parsed session document in, one flat ordered
//! attribute map out.

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::attributes::{AttrValue, AttributeMap};
use crate::error::DecodeError;
use crate::principal::{PrincipalCollection, PRINCIPALS_SESSION_KEY};

/// Flatten a parsed document into a single-level attribute map.
///
/// Walks the root object's fields in document order. A nested object is
/// inlined (its own flattened entries merged into the result), except under
/// the reserved principal key, which binds as a whole
/// [`PrincipalCollection`]. Scalars classify per [`classify_scalar`].
///
/// Pure over its input: every level returns a freshly built map and the
/// caller merges, so sub-trees flatten the same in isolation as in place.
/// A colliding key keeps its first-seen position and takes the later value.
/// Non-object roots (arrays, scalars, null) have no fields to walk and
/// yield an empty map. Recursion depth is bounded only by the document;
/// callers are expected to bound payload size upstream.
pub(crate) fn flatten_document(root: &Value) -> Result<AttributeMap, DecodeError> {
    let mut attributes = AttributeMap::new();
    let Value::Object(fields) = root else {
        return Ok(attributes);
    };
    for (key, node) in fields {
        match node {
            Value::Object(_) if key == PRINCIPALS_SESSION_KEY => {
                let principals =
                    PrincipalCollection::deserialize(node).map_err(DecodeError::Principals)?;
                attributes.insert(key.clone(), principals);
            }
            Value::Object(_) => {
                trace!(container = %key, "inlining nested attribute object");
                attributes.extend(flatten_document(node)?);
            }
            scalar => {
                attributes.insert(key.clone(), classify_scalar(scalar));
            }
        }
    }
    Ok(attributes)
}

/// Classify a non-object node.
///
/// The numeric split: a JSON number becomes `Int` iff it is exactly
/// representable as `i64`. A fractional part, an exponent yielding a
/// non-integer, or magnitude past `i64` all land on `Float`. Everything
/// that is neither bool, string, nor number (arrays, null) keeps its
/// compact rendering as `Raw`.
fn classify_scalar(node: &Value) -> AttrValue {
    match node {
        Value::Bool(b) => AttrValue::Bool(*b),
        Value::String(s) => AttrValue::Text(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                AttrValue::Int(i)
            } else if let Some(f) = n.as_f64() {
                AttrValue::Float(f)
            } else {
                AttrValue::Raw(node.to_string())
            }
        }
        other => AttrValue::Raw(other.to_string()),
    }
}
