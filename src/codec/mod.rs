//! # Codec Layer
//!
//! [`JsonCodec`] is the crate's entry point: one configured instance, four
//! operations.
//!
//! ## Decode Paths
//!
//! | Entry point | Target shape | On structural mismatch |
//! |-------------|--------------|------------------------|
//! | [`JsonCodec::decode`] | a concrete struct | error, propagated |
//! | [`JsonCodec::decode_attributes`] | the generic flat mapping | n/a (shapeless) |
//! | [`JsonCodec::decode_or_legacy`] | struct, then flat mapping | falls back to flattening |
//!
//! The target shape is the method you call, so the flat path needs no
//! runtime type inspection. Legacy payloads written before the current
//! session schema existed still restore through
//! [`JsonCodec::decode_or_legacy`], which is the policy split the table's
//! last row describes: a structural mismatch is logged, not fatal, as long
//! as the payload flattens.
//!
//! ## Configuration
//!
//! Fixed at construction, held for the instance's lifetime. The codec is
//! stateless beyond it, so one instance may serve concurrent callers.

mod flatten;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::attributes::AttributeMap;
use crate::error::{DecodeError, EncodeError};

/// Outcome of a decode that tolerates legacy payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    /// The payload bound directly into the requested shape.
    Typed(T),
    /// The payload did not bind, but flattened into an attribute map.
    Legacy(AttributeMap),
}

impl<T> Decoded<T> {
    /// Get the typed value if the payload bound directly.
    pub fn typed(self) -> Option<T> {
        match self {
            Decoded::Typed(v) => Some(v),
            Decoded::Legacy(_) => None,
        }
    }

    /// Get the flattened map if the payload took the legacy path.
    pub fn legacy(self) -> Option<AttributeMap> {
        match self {
            Decoded::Typed(_) => None,
            Decoded::Legacy(m) => Some(m),
        }
    }
}

/// Session attribute codec over compact JSON.
///
/// Construction fixes the configuration; every call after that is
/// independent and side-effect free, so sharing one codec across threads
/// is fine.
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent encoder output. Off by default; the wire format is compact.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Encode any serializable value graph as JSON text.
    ///
    /// Output carries no root wrapper and enum values appear by variant
    /// name. The input is not retained.
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<String, EncodeError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }

    /// Bind JSON text directly into a concrete shape.
    ///
    /// Fields present in the text but absent from `T` are ignored, so
    /// payloads written by newer schema versions still bind. Malformed text
    /// or a structural mismatch is a [`DecodeError`]; this entry point
    /// never masks it.
    pub fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, DecodeError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Flatten JSON text into a single-level ordered attribute map.
    ///
    /// Nested objects are inlined, the reserved principal key is rebuilt
    /// intact, and scalars are classified per the numeric split. See
    /// [`crate::attributes::AttrValue`] for the value kinds.
    pub fn decode_attributes(&self, text: &str) -> Result<AttributeMap, DecodeError> {
        let root: Value = serde_json::from_str(text)?;
        flatten::flatten_document(&root)
    }

    /// Bind into `T`, falling back to the flattening walk when the payload
    /// predates the current shape.
    ///
    /// The structural failure is logged and swallowed; only a payload that
    /// also fails to flatten surfaces an error.
    pub fn decode_or_legacy<T: DeserializeOwned>(
        &self,
        text: &str,
    ) -> Result<Decoded<T>, DecodeError> {
        match serde_json::from_str::<T>(text) {
            Ok(value) => Ok(Decoded::Typed(value)),
            Err(err) => {
                debug!(%err, "typed decode failed, retrying payload as legacy flat attributes");
                self.decode_attributes(text).map(Decoded::Legacy)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    use crate::attributes::AttrValue;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    enum Channel {
        Web,
        Mobile,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct LoginRecord {
        user: String,
        channel: Channel,
    }

    #[test]
    fn encode_is_compact_with_no_root_wrapper() {
        let record = LoginRecord {
            user: "alice".into(),
            channel: Channel::Web,
        };
        let text = JsonCodec::new().encode(&record).unwrap();
        assert_eq!(text, r#"{"user":"alice","channel":"Web"}"#);
    }

    #[test]
    fn encode_writes_enums_by_name() {
        let text = JsonCodec::new().encode(&Channel::Mobile).unwrap();
        assert_eq!(text, "\"Mobile\"");
    }

    #[test]
    fn pretty_knob_indents_output() {
        let record = LoginRecord {
            user: "alice".into(),
            channel: Channel::Web,
        };
        let text = JsonCodec::new().with_pretty(true).encode(&record).unwrap();
        assert!(text.contains('\n'));
        let reread: LoginRecord = JsonCodec::new().decode(&text).unwrap();
        assert_eq!(reread, record);
    }

    #[test]
    fn decode_reads_enums_by_name() {
        let codec = JsonCodec::new();
        let record: LoginRecord = codec
            .decode(r#"{"user":"alice","channel":"Mobile"}"#)
            .unwrap();
        assert_eq!(record.channel, Channel::Mobile);
    }

    #[test]
    fn decode_tolerates_unknown_fields() {
        let codec = JsonCodec::new();
        let record: LoginRecord = codec
            .decode(r#"{"user":"alice","channel":"Web","introduced_later":true}"#)
            .unwrap();
        assert_eq!(record.user, "alice");
    }

    #[test]
    fn decode_propagates_structural_mismatch() {
        let codec = JsonCodec::new();
        let result: Result<LoginRecord, _> = codec.decode(r#"{"user":42}"#);
        assert!(matches!(result, Err(DecodeError::Json(_))));
    }

    #[test]
    fn decode_propagates_malformed_text() {
        let codec = JsonCodec::new();
        let result: Result<LoginRecord, _> = codec.decode("{not json");
        assert!(matches!(result, Err(DecodeError::Json(_))));
    }

    #[test]
    fn decode_or_legacy_prefers_the_typed_shape() {
        let codec = JsonCodec::new();
        let decoded: Decoded<LoginRecord> = codec
            .decode_or_legacy(r#"{"user":"alice","channel":"Web"}"#)
            .unwrap();
        assert_eq!(
            decoded.typed(),
            Some(LoginRecord {
                user: "alice".into(),
                channel: Channel::Web,
            })
        );
    }

    #[test]
    fn decode_or_legacy_falls_back_to_flattening() {
        let codec = JsonCodec::new();
        let decoded: Decoded<LoginRecord> = codec
            .decode_or_legacy(r#"{"user":"alice","visits":3}"#)
            .unwrap();
        let map = decoded.legacy().expect("legacy path");
        assert_eq!(map.get("user"), Some(&AttrValue::Text("alice".into())));
        assert_eq!(map.get("visits"), Some(&AttrValue::Int(3)));
    }

    #[test]
    fn decode_or_legacy_still_fails_on_malformed_text() {
        let codec = JsonCodec::new();
        let result: Result<Decoded<LoginRecord>, _> = codec.decode_or_legacy("{not json");
        assert!(matches!(result, Err(DecodeError::Json(_))));
    }
}
