// default in-memory multipart form sink
use indexmap::IndexSet;
use serde::Serialize;

use crate::core::flatten::FieldValue;
use crate::core::sink::FormSink;
use crate::core::types::Blob;

/// A stored form value: either a text part or a file part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormEntry {
    Text(String),
    Binary(Blob),
}

impl FormEntry {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormEntry::Text(s) => Some(s.as_str()),
            FormEntry::Binary(_) => None,
        }
    }

    pub fn as_blob(&self) -> Option<&Blob> {
        match self {
            FormEntry::Binary(blob) => Some(blob),
            FormEntry::Text(_) => None,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, FormEntry::Binary(_))
    }
}

//bools are rendered here, the encoder hands them over untouched
impl From<FieldValue> for FormEntry {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(s) => FormEntry::Text(s),
            FieldValue::Bool(b) => FormEntry::Text(b.to_string()),
            FieldValue::Binary(blob) => FormEntry::Binary(blob),
        }
    }
}

impl From<&str> for FormEntry {
    fn from(value: &str) -> Self {
        FormEntry::Text(value.to_string())
    }
}

impl From<String> for FormEntry {
    fn from(value: String) -> Self {
        FormEntry::Text(value)
    }
}

impl From<Blob> for FormEntry {
    fn from(value: Blob) -> Self {
        FormEntry::Binary(value)
    }
}

impl PartialEq<str> for FormEntry {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for FormEntry {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

/// Ordered multi-valued form, shaped after the web `FormData` interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormData {
    entries: Vec<(String, FormEntry)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value under `key`, keeping any values already stored there.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<FormEntry>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Replace every value under `key` with a single one. The new value takes
    /// the position of the first existing entry, or goes last if there is none.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FormEntry>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(first) => {
                self.entries[first].1 = value;
                let mut index = 0;
                self.entries.retain(|(k, _)| {
                    let keep = index <= first || *k != key;
                    index += 1;
                    keep
                });
            }
            None => self.entries.push((key, value)),
        }
    }

    pub fn delete(&mut self, key: &str) {
        self.entries.retain(|(k, _)| k != key);
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&FormEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_all(&self, key: &str) -> Vec<&FormEntry> {
        self.entries
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v)
            .collect()
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Distinct keys, in order of first appearance.
    pub fn keys(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|(k, _)| k.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormEntry)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FormSink for FormData {
    fn append(&mut self, key: &str, value: FieldValue) {
        self.entries.push((key.to_string(), value.into()));
    }
}

impl IntoIterator for FormData {
    type Item = (String, FormEntry);
    type IntoIter = std::vec::IntoIter<(String, FormEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
