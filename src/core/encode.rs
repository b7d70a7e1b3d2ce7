// entry points: normalize -> flatten -> append
use crate::core::flatten::flatten_record;
use crate::core::form::FormData;
use crate::core::normalize::normalize_record;
use crate::core::sink::{FormSink, append_record};
use crate::core::types::{ItemRecord, NullableRecord};

/// Encode a raw tree whose absences are null markers into a fresh [`FormData`].
pub fn encode_nullable(data: Option<&NullableRecord>) -> FormData {
    encode_nullable_with(data, FormData::new)
}

/// Like [`encode_nullable`], but appends into a sink built by `make_sink`.
///
/// An absent root yields the empty sink untouched.
pub fn encode_nullable_with<S, F>(data: Option<&NullableRecord>, make_sink: F) -> S
where
    S: FormSink,
    F: FnOnce() -> S,
{
    let mut sink = make_sink();

    let Some(data) = data else {
        tracing::debug!(absent_root = true, "nullable form root absent");
        return sink;
    };

    write_record(&normalize_record(data), &mut sink);
    sink
}

/// Encode a tree whose absences are already explicit `None`s into a fresh [`FormData`].
pub fn encode_optional(data: Option<&ItemRecord>) -> FormData {
    encode_optional_with(data, FormData::new)
}

/// Like [`encode_optional`], but appends into a sink built by `make_sink`.
pub fn encode_optional_with<S, F>(data: Option<&ItemRecord>, make_sink: F) -> S
where
    S: FormSink,
    F: FnOnce() -> S,
{
    let mut sink = make_sink();

    let Some(data) = data else {
        tracing::debug!(absent_root = true, "optional form root absent");
        return sink;
    };

    write_record(data, &mut sink);
    sink
}

fn write_record<S: FormSink>(data: &ItemRecord, sink: &mut S) {
    let record = flatten_record(data, None);
    let fields = record.field_count();

    append_record(record, sink);
    tracing::debug!(top_level_keys = data.len(), fields, "form record encoded");
}
