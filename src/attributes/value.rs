//! Attribute value types.
//!
//! This module defines the runtime representation of a single session
//! attribute as produced by the flat decode path.

use serde::Serialize;

use crate::principal::PrincipalCollection;

/// Runtime representation of a session attribute value.
///
/// This enum captures every shape the flat decode path can produce.
/// Serialization is untagged, so an [`crate::AttributeMap`] encodes as a
/// plain JSON object with no variant markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// JSON boolean (e.g., `authenticated`)
    Bool(bool),

    /// JSON string (e.g., a user name, a locale tag)
    Text(String),

    /// JSON number exactly representable as `i64` (e.g., a hit counter)
    Int(i64),

    /// Any other JSON number (fractional part, exponent, or past `i64`)
    Float(f64),

    /// Rebuilt principal collection, found only under
    /// [`crate::PRINCIPALS_SESSION_KEY`]
    Principals(PrincipalCollection),

    /// Compact textual rendering of a node no other variant covers
    /// (arrays and `null`). A tolerance, not an error.
    Raw(String),
}

impl AttrValue {
    /// Get the boolean if this is a Bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the string slice if this is a Text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer if this is an Int.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the float if this is a Float.
    ///
    /// An Int does not answer here; the split between the two variants is
    /// the point, so neither accessor papers over it.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the principal collection if this is a Principals.
    pub fn as_principals(&self) -> Option<&PrincipalCollection> {
        match self {
            AttrValue::Principals(p) => Some(p),
            _ => None,
        }
    }

    /// Get the raw rendering if this is a Raw.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            AttrValue::Raw(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(v.into())
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl From<PrincipalCollection> for AttrValue {
    fn from(v: PrincipalCollection) -> Self {
        AttrValue::Principals(v)
    }
}
