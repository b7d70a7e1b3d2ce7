// TOON documents -> nullable trees -> form data
use serde_json::Value as JsonValue;

use crate::core::encode::encode_nullable_with;
use crate::core::error::{FormError, Result};
use crate::core::form::FormData;
use crate::core::sink::FormSink;
use crate::core::types::NullableItem;

/// Decode a TOON document into a nullable tree.
pub fn decode_toon(input: &str) -> Result<NullableItem> {
    let value: JsonValue = toon_format::decode_default(input).map_err(|e| FormError::Decode {
        message: e.to_string(),
    })?;

    Ok(NullableItem::from(value))
}

/// Decode a TOON document and encode it into a fresh [`FormData`].
pub fn encode_toon(input: &str) -> Result<FormData> {
    encode_toon_with(input, FormData::new)
}

/// Decode a TOON document and encode it into a sink built by `make_sink`.
///
/// The document root must be a mapping; a null root encodes to an empty sink.
pub fn encode_toon_with<S, F>(input: &str, make_sink: F) -> Result<S>
where
    S: FormSink,
    F: FnOnce() -> S,
{
    match decode_toon(input)? {
        NullableItem::Null => Ok(encode_nullable_with(None, make_sink)),
        NullableItem::Mapping(fields) => Ok(encode_nullable_with(Some(&fields), make_sink)),
        other => Err(FormError::RootNotMapping { found: other.kind() }),
    }
}
