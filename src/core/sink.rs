// flat record -> multi-valued sink
use crate::core::flatten::{FieldValue, FlatRecord};

/// A multi-valued key/value store that encoded fields are appended into.
///
/// `append` must never overwrite: scalar arrays rely on the same key
/// receiving one value per element.
pub trait FormSink {
    fn append(&mut self, key: &str, value: FieldValue);
}

impl<S: FormSink + ?Sized> FormSink for &mut S {
    fn append(&mut self, key: &str, value: FieldValue) {
        (**self).append(key, value)
    }
}

//raw ordered pair log, no coercion of bools
impl FormSink for Vec<(String, FieldValue)> {
    fn append(&mut self, key: &str, value: FieldValue) {
        self.push((key.to_string(), value));
    }
}

/// Append every leaf of `record` into `sink`, depth first, in record order.
///
/// The same sink is threaded through the whole walk and handed back so calls
/// can be chained.
pub fn append_record<S: FormSink + ?Sized>(record: FlatRecord, sink: &mut S) -> &mut S {
    match record {
        FlatRecord::Field { key, value } => sink.append(&key, value),
        FlatRecord::Mapping(children) => {
            for child in children.into_values() {
                append_record(child, &mut *sink);
            }
        }
        FlatRecord::Sequence(children) => {
            for child in children {
                append_record(child, &mut *sink);
            }
        }
    }
    sink
}
