//! # Attribute System
//!
//! This module defines what a restored session attribute can hold and the
//! ordered mapping sessions are reconstituted into.
//!
//! ## Attribute Value Kinds
//!
//! | Kind | Example source | Description |
//! |------|----------------|-------------|
//! | `Bool` | `true` | JSON boolean |
//! | `Text` | `"alice"` | JSON string |
//! | `Int` | `42` | JSON number exactly representable as `i64` |
//! | `Float` | `42.5` | Any other JSON number |
//! | `Principals` | principal object | Rebuilt [`crate::principal::PrincipalCollection`] |
//! | `Raw` | `[1,2,3]`, `null` | Compact rendering of anything else |
//!
//! ## Usage
//!
//! ```
//! use satchel::{AttrValue, AttributeMap};
//!
//! let mut attrs = AttributeMap::new();
//! attrs.insert("user", "alice");
//! attrs.insert("visits", 3);
//!
//! assert_eq!(attrs.get("visits").and_then(AttrValue::as_int), Some(3));
//! ```

mod map;
mod value;

pub use map::AttributeMap;
pub use value::AttrValue;
