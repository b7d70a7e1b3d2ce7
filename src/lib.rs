//! Flatten nested trees of scalars, sequences, mappings, optional values and
//! binary payloads into bracket-keyed form fields.
//!
//! ```
//! use formdata_core::{NullableItem, NullableRecord, encode_nullable};
//!
//! let mut data = NullableRecord::new();
//! data.insert("e".into(), NullableItem::sequence([1, 2, 3]));
//! data.insert("r".into(), NullableItem::Null);
//!
//! let form = encode_nullable(Some(&data));
//! assert_eq!(form.get_all("e[]").len(), 3);
//! assert!(!form.has("r"));
//! ```

pub mod core;
pub mod input;

pub use crate::core::encode::{encode_nullable, encode_nullable_with, encode_optional, encode_optional_with};
pub use crate::core::error::{FormError, Result};
pub use crate::core::flatten::{FieldValue, FlatRecord, flatten_record, flatten_sequence, generate_key};
pub use crate::core::form::{FormData, FormEntry};
pub use crate::core::normalize::{normalize, normalize_record, normalize_sequence};
pub use crate::core::sink::{FormSink, append_record};
pub use crate::core::types::{Blob, Item, ItemRecord, NullableItem, NullableRecord, Number, OptionalItem, Scalar};
pub use crate::input::toon::{decode_toon, encode_toon, encode_toon_with};
