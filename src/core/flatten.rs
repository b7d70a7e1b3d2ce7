// optional tree -> bracket-keyed flat record
use indexmap::IndexMap;
use serde::Serialize;

use crate::core::types::{Blob, Item, ItemRecord, OptionalItem, Scalar};

/// A leaf value ready for sink insertion. Numbers have already been rendered
/// to text; bools and blobs are left for the sink to coerce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Binary(Blob),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<&Scalar> for FieldValue {
    fn from(scalar: &Scalar) -> Self {
        match scalar {
            Scalar::Text(s) => FieldValue::Text(s.clone()),
            Scalar::Number(n) => FieldValue::Text(n.to_string()),
            Scalar::Bool(b) => FieldValue::Bool(*b),
            Scalar::Binary(blob) => FieldValue::Binary(blob.clone()),
        }
    }
}

/// Intermediate output of flattening.
///
/// Leaves carry their full key path. Inner nodes only group leaves in the
/// order they were produced; their own keys are never written to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FlatRecord {
    Field { key: String, value: FieldValue },
    Mapping(IndexMap<String, FlatRecord>),
    Sequence(Vec<FlatRecord>),
}

impl FlatRecord {
    /// Leaf pairs in output order.
    pub fn fields(&self) -> Vec<(&str, &FieldValue)> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out
    }

    pub fn field_count(&self) -> usize {
        match self {
            FlatRecord::Field { .. } => 1,
            FlatRecord::Mapping(children) => children.values().map(FlatRecord::field_count).sum(),
            FlatRecord::Sequence(children) => children.iter().map(FlatRecord::field_count).sum(),
        }
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<(&'a str, &'a FieldValue)>) {
        match self {
            FlatRecord::Field { key, value } => out.push((key.as_str(), value)),
            FlatRecord::Mapping(children) => {
                for child in children.values() {
                    child.collect_fields(out);
                }
            }
            FlatRecord::Sequence(children) => {
                for child in children {
                    child.collect_fields(out);
                }
            }
        }
    }
}

/// `key` at the top level, `root[key]` below it. An empty root counts as no root.
pub fn generate_key(key: &str, root: Option<&str>) -> String {
    match root {
        Some(root) if !root.is_empty() => format!("{root}[{key}]"),
        _ => key.to_string(),
    }
}

fn indexed_key(root: &str, index: usize) -> String {
    generate_key(&index.to_string(), Some(root))
}

/// Flatten a mapping. Absent fields are skipped without consuming a path
/// segment; everything else is keyed by `generate_key(field, root)`.
pub fn flatten_record(data: &ItemRecord, root: Option<&str>) -> FlatRecord {
    let mut out = IndexMap::with_capacity(data.len());

    for (key, item) in data {
        let Some(item) = item else {
            tracing::trace!(key = %generate_key(key, root), "eliding absent field");
            continue;
        };

        let path = generate_key(key, root);
        let node = match item {
            Item::Scalar(scalar) => FlatRecord::Field {
                key: path,
                value: FieldValue::from(scalar),
            },
            Item::Sequence(items) => flatten_sequence(items, &path),
            Item::Mapping(fields) => flatten_record(fields, Some(path.as_str())),
        };
        out.insert(key.clone(), node);
    }

    FlatRecord::Mapping(out)
}

/// Flatten a sequence under an already computed `root`.
///
/// Scalar elements repeat `root[]`. Composite elements get `root[i]`, where `i`
/// counts only present elements, so gaps left by absent elements close up.
pub fn flatten_sequence(data: &[OptionalItem], root: &str) -> FlatRecord {
    let present = data.iter().flatten();

    let nodes = present
        .enumerate()
        .map(|(i, item)| match item {
            Item::Scalar(scalar) => FlatRecord::Field {
                key: format!("{root}[]"),
                value: FieldValue::from(scalar),
            },
            Item::Sequence(items) => flatten_sequence(items, &indexed_key(root, i)),
            Item::Mapping(fields) => flatten_record(fields, Some(indexed_key(root, i).as_str())),
        })
        .collect();

    FlatRecord::Sequence(nodes)
}
