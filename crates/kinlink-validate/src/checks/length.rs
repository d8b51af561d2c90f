//! Field length check.

use kinlink_model::RawRecord;

/// True when no field of `record` is longer than `max_len` characters.
pub fn fields_within(record: &RawRecord, max_len: usize) -> bool {
    record
        .fields()
        .iter()
        .all(|field| field.chars().count() <= max_len)
}
