//! CSV encoding of record lists.

use crate::records::RecordSummary;

/// Field delimiter between name and URI: a Han character bracketed by
/// vertical bars.
///
/// Names are not escaped; a name containing this sequence produces an
/// ambiguous row. Documented limitation of the format, not a bug.
pub const FIELD_DELIMITER: &str = "|亡|";

/// One `name|亡|uri` line per record, newline-joined, no trailing newline.
pub(crate) fn encode(records: &[RecordSummary]) -> Vec<u8> {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&record.name);
        out.push_str(FIELD_DELIMITER);
        out.push_str(&record.resource_uri());
    }
    out.into_bytes()
}
