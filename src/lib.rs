//! # Satchel Architecture
//!
//! Satchel converts a session's stored attributes to and from a compact JSON
//! payload. It is a **codec library**: there is no I/O here, no session
//! manager, no storage backend. A caller hands us a value graph and gets
//! text, or hands us text and gets typed values back.
//!
//! ## The Two Directions
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Encode (codec/)                                         │
//! │  - Any Serialize value graph → compact JSON              │
//! │  - No root wrapper, enums written by variant name        │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Decode (codec/, codec/flatten.rs)                       │
//! │  - Typed path: bind text into a concrete struct,         │
//! │    tolerating unknown fields                             │
//! │  - Flat path: walk the document tree and inline every    │
//! │    nested object into one ordered attribute map          │
//! │  - Legacy path: try typed, fall back to flat             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Flattening Walk
//!
//! Session payloads written by older schemas nest attributes inside
//! container objects. Restoring a session wants one flat name → value map,
//! so the flat decode path inlines nested objects rather than reproducing
//! the nesting (see [`codec::JsonCodec::decode_attributes`]). Two rules
//! make the walk more than a tree fold:
//!
//! 1. The reserved principal key
//!    ([`principal::PRINCIPALS_SESSION_KEY`]) is rebuilt as a whole
//!    [`principal::PrincipalCollection`], never flattened.
//! 2. JSON numbers split into [`attributes::AttrValue::Int`] when exactly
//!    representable as `i64`, [`attributes::AttrValue::Float`] otherwise.
//!
//! ## Key Principle: Order Is Data
//!
//! Callers enumerate restored attributes in document order, so
//! [`attributes::AttributeMap`] preserves insertion order everywhere:
//! decode, re-encode, iteration.
//!
//! ## Module Overview
//!
//! - [`attributes`]: Attribute value union and the ordered attribute map
//! - [`codec`]: The [`codec::JsonCodec`] entry points
//! - [`principal`]: The principal collection and its reserved session key
//! - [`error`]: Error types

pub mod attributes;
pub mod codec;
pub mod error;
pub mod principal;

pub use attributes::{AttrValue, AttributeMap};
pub use codec::{Decoded, JsonCodec};
pub use error::{DecodeError, EncodeError};
pub use principal::{PrincipalCollection, PRINCIPALS_SESSION_KEY};
