//! JSON encoding of record lists.

use crate::records::RecordSummary;

/// Array of `[name, uri]` pairs in input order, compact form.
pub(crate) fn encode(records: &[RecordSummary]) -> Vec<u8> {
    let rows: Vec<(&str, String)> = records
        .iter()
        .map(|record| (record.name.as_str(), record.resource_uri()))
        .collect();
    serde_json::to_vec(&rows).expect("string pairs always serialize")
}
