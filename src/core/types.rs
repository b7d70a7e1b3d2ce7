// input tree model: scalars, sequences, mappings, optional + nullable wrappers
use std::fmt;

use bytes::Bytes;
use indexmap::IndexMap;
use serde::Serialize;

/// Opaque binary payload (a file part in a multipart body).
///
/// The encoder treats a blob as a leaf: it is never recursed into, never
/// stringified, and reaches the sink exactly as it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blob {
    data: Bytes,
    file_name: Option<String>,
    content_type: Option<String>,
}

impl Blob {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            file_name: None,
            content_type: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A numeric leaf. Always rendered to its canonical decimal string before it
/// reaches a sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{i}"),
            Number::UInt(u) => write!(f, "{u}"),
            Number::Float(x) if x.is_nan() => f.write_str("NaN"),
            Number::Float(x) if x.is_infinite() => {
                f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            //-0 renders as 0
            Number::Float(x) if x == 0.0 => f.write_str("0"),
            //exponent form outside [1e-6, 1e21), same thresholds as form consumers use
            Number::Float(x) if x.abs() >= 1e21 || x.abs() < 1e-6 => {
                let exp = format!("{x:e}");
                match exp.split_once('e') {
                    Some((mantissa, power)) if !power.starts_with('-') => {
                        write!(f, "{mantissa}e+{power}")
                    }
                    _ => f.write_str(&exp),
                }
            }
            //shortest round-trip repr, integral floats carry no fraction
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(v: $t) -> Self {
                    Number::$variant(v as $target)
                }
            }
        )*
    };
}

number_from!(Int as i64: i8, i16, i32, i64, isize);
number_from!(UInt as u64: u8, u16, u32, u64, usize);
number_from!(Float as f64: f64);

//widening first would render the f32 rounding error, so go through its own shortest repr
impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(v.to_string().parse().unwrap_or(f64::from(v)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(Number),
    Bool(bool),
    Binary(Blob),
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<Blob> for Scalar {
    fn from(v: Blob) -> Self {
        Scalar::Binary(v)
    }
}

impl From<Number> for Scalar {
    fn from(v: Number) -> Self {
        Scalar::Number(v)
    }
}

macro_rules! scalar_number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Scalar::Number(Number::from(v))
                }
            }
        )*
    };
}

scalar_number_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Present/absent wrapper around an [`Item`]. `None` is elided by the encoder.
pub type OptionalItem = Option<Item>;

/// Insertion-ordered mapping of field name to optional value.
pub type ItemRecord = IndexMap<String, OptionalItem>;

/// A node of an input tree whose absences are already explicit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Scalar(Scalar),
    Sequence(Vec<OptionalItem>),
    Mapping(ItemRecord),
}

impl Item {
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OptionalItem>,
    {
        Item::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn mapping<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionalItem>,
    {
        Item::Mapping(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<Vec<OptionalItem>> for Item {
    fn from(v: Vec<OptionalItem>) -> Self {
        Item::Sequence(v)
    }
}

impl From<ItemRecord> for Item {
    fn from(v: ItemRecord) -> Self {
        Item::Mapping(v)
    }
}

/// Insertion-ordered mapping whose values may be null.
pub type NullableRecord = IndexMap<String, NullableItem>;

/// Raw input counterpart of [`Item`]: any position may hold `Null` instead of
/// a value. Missing and null inputs both land on `Null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NullableItem {
    #[default]
    Null,
    Scalar(Scalar),
    Sequence(Vec<NullableItem>),
    Mapping(NullableRecord),
}

impl NullableItem {
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NullableItem>,
    {
        NullableItem::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn mapping<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<NullableItem>,
    {
        NullableItem::Mapping(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, NullableItem::Null)
    }

    pub fn as_mapping(&self) -> Option<&NullableRecord> {
        match self {
            NullableItem::Mapping(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            NullableItem::Null => "null",
            NullableItem::Scalar(_) => "scalar",
            NullableItem::Sequence(_) => "sequence",
            NullableItem::Mapping(_) => "mapping",
        }
    }
}

impl<T: Into<NullableItem>> From<Option<T>> for NullableItem {
    fn from(v: Option<T>) -> Self {
        v.map_or(NullableItem::Null, Into::into)
    }
}

impl From<Vec<NullableItem>> for NullableItem {
    fn from(v: Vec<NullableItem>) -> Self {
        NullableItem::Sequence(v)
    }
}

impl From<NullableRecord> for NullableItem {
    fn from(v: NullableRecord) -> Self {
        NullableItem::Mapping(v)
    }
}

//scalar sources shared by both tree flavours
macro_rules! tree_from_scalar {
    ($tree:ident: $($t:ty),*) => {
        $(
            impl From<$t> for $tree {
                fn from(v: $t) -> Self {
                    $tree::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

tree_from_scalar!(Item: &str, String, bool, Blob, Number, Scalar);
tree_from_scalar!(Item: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
tree_from_scalar!(NullableItem: &str, String, bool, Blob, Number, Scalar);
tree_from_scalar!(NullableItem: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_as_canonical_decimal() {
        assert_eq!(Number::from(1).to_string(), "1");
        assert_eq!(Number::from(-42i64).to_string(), "-42");
        assert_eq!(Number::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Number::from(1.0).to_string(), "1");
        assert_eq!(Number::from(1.5).to_string(), "1.5");
        assert_eq!(Number::from(-0.0).to_string(), "0");
        assert_eq!(Number::from(0.1).to_string(), "0.1");
    }

    #[test]
    fn f32_renders_at_its_own_precision() {
        assert_eq!(Number::from(0.1f32).to_string(), "0.1");
        assert_eq!(Number::from(1.5f32).to_string(), "1.5");
        assert_eq!(Number::from(3.0f32).to_string(), "3");
        assert_eq!(Number::from(f32::NAN).to_string(), "NaN");
        assert_eq!(Number::from(f32::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(Number::from(1e21).to_string(), "1e+21");
        assert_eq!(Number::from(1e300).to_string(), "1e+300");
        assert_eq!(Number::from(-2.5e22).to_string(), "-2.5e+22");
        assert_eq!(Number::from(1e-7).to_string(), "1e-7");
        assert_eq!(Number::from(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(Number::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(Number::from(0.000001).to_string(), "0.000001");
    }

    #[test]
    fn non_finite_floats_use_form_spelling() {
        assert_eq!(Number::from(f64::NAN).to_string(), "NaN");
        assert_eq!(Number::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Number::from(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn option_none_converts_to_null() {
        let absent: Option<i32> = None;
        assert!(NullableItem::from(absent).is_null());
        assert_eq!(NullableItem::from(Some("x")), NullableItem::Scalar(Scalar::Text("x".into())));
    }

    #[test]
    fn builders_keep_insertion_order() {
        let item = Item::mapping([("z", Item::from(1)), ("a", Item::from(2)), ("m", Item::from(3))]);
        let Item::Mapping(fields) = item else {
            panic!("expected mapping");
        };
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn blob_metadata_is_optional() {
        let blob = Blob::new(vec![1u8, 2, 3]).with_file_name("a.bin");
        assert_eq!(blob.len(), 3);
        assert_eq!(blob.file_name(), Some("a.bin"));
        assert_eq!(blob.content_type(), None);
    }
}
