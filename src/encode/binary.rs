//! Compact binary index encoding.
//!
//! Three regions concatenated with no separators, every integer rendered
//! as an 8-character lowercase zero-padded hex string:
//!
//! ```text
//! header:  hex8(record_count) hex8(0)
//! table:   hex8(end_of_block_0) hex8(end_of_block_1) ...
//! body:    block_0 block_1 ...
//! block_i: hex8(name_len) hex8(uri_len) name uri
//! ```
//!
//! Table entries are cumulative end positions within the body region,
//! counted in characters: `table[i] - table[i-1]` is the length of block
//! `i`, with `table[-1]` implicitly 0. External readers parse purely by
//! position, so the 8-character field width and the end-position (not
//! per-block length) semantics are load-bearing. There is no decoder in
//! this crate; readers live downstream.

use crate::records::RecordSummary;

fn hex8(value: usize) -> String {
    format!("{value:08x}")
}

pub(crate) fn encode(records: &[RecordSummary]) -> Vec<u8> {
    let mut table = String::with_capacity(records.len() * 8);
    let mut body = String::new();
    let mut end_offset = 0usize;

    for record in records {
        let uri = record.resource_uri();
        let name_len = record.name.chars().count();
        let uri_len = uri.chars().count();

        body.push_str(&hex8(name_len));
        body.push_str(&hex8(uri_len));
        body.push_str(&record.name);
        body.push_str(&uri);

        // 16 characters of length fields plus the two strings
        end_offset += 16 + name_len + uri_len;
        table.push_str(&hex8(end_offset));
    }

    let mut out = String::with_capacity(16 + table.len() + body.len());
    out.push_str(&hex8(records.len()));
    out.push_str(&hex8(0)); // reserved legacy field
    out.push_str(&table);
    out.push_str(&body);
    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, owner: &str, id: &str) -> RecordSummary {
        RecordSummary::new(Some(name.to_string()), owner, id)
    }

    /// Reader driven only by the header count and offset table, the way
    /// external consumers parse the index. Indexes by character, matching
    /// the writer's length accounting.
    fn read_index(payload: &[u8]) -> Vec<(String, String)> {
        let text: Vec<char> = std::str::from_utf8(payload).unwrap().chars().collect();
        let field = |pos: usize| -> usize {
            let hex: String = text[pos..pos + 8].iter().collect();
            usize::from_str_radix(&hex, 16).unwrap()
        };

        let count = field(0);
        assert_eq!(field(8), 0, "reserved header field must be zero");

        let body_start = 16 + count * 8;
        let mut entries = Vec::with_capacity(count);
        let mut block_start = 0;
        for i in 0..count {
            let block_end = field(16 + i * 8);
            let name_len = field(body_start + block_start);
            let uri_len = field(body_start + block_start + 8);
            assert_eq!(
                block_end - block_start,
                16 + name_len + uri_len,
                "offset delta must equal block length"
            );

            let name_at = body_start + block_start + 16;
            let name: String = text[name_at..name_at + name_len].iter().collect();
            let uri: String = text[name_at + name_len..name_at + name_len + uri_len]
                .iter()
                .collect();
            entries.push((name, uri));
            block_start = block_end;
        }
        entries
    }

    #[test]
    fn single_record_layout_is_exact() {
        let out = encode(&[summary("Foo", "U1", "R1")]);
        // header: count=1, reserved=0
        // table:  one block of 16 + 3 + 15 = 34 (0x22) characters
        // body:   name_len=3, uri_len=15 (0xf), then the strings
        let expected = "00000001\
                        00000000\
                        00000022\
                        00000003\
                        0000000f\
                        Foo\
                        resrec:///U1/R1";
        assert_eq!(out, expected.as_bytes());
    }

    #[test]
    fn header_count_matches_input_length() {
        let records: Vec<_> = (0..300)
            .map(|i| summary(&format!("n{i}"), "owner", &format!("id{i}")))
            .collect();
        let out = encode(&records);
        let count = usize::from_str_radix(std::str::from_utf8(&out[..8]).unwrap(), 16).unwrap();
        assert_eq!(count, 300);
        assert_eq!(&out[8..16], b"00000000");
    }

    #[test]
    fn offsets_accumulate_across_blocks() {
        let records = vec![
            summary("a", "U1", "R1"),
            summary("bb", "U22", "R22"),
            summary("ccc", "U333", "R333"),
        ];
        let out = encode(&records);
        let text = std::str::from_utf8(&out).unwrap();

        let offsets: Vec<usize> = (0..3)
            .map(|i| usize::from_str_radix(&text[16 + i * 8..24 + i * 8], 16).unwrap())
            .collect();

        // uris: resrec:///U1/R1 (15), resrec:///U22/R22 (17), resrec:///U333/R333 (19)
        assert_eq!(offsets[0], 16 + 1 + 15);
        assert_eq!(offsets[1], offsets[0] + 16 + 2 + 17);
        assert_eq!(offsets[2], offsets[1] + 16 + 3 + 19);
    }

    #[test]
    fn round_trip_recovers_names_and_uris() {
        let records = vec![
            summary("Foo", "U1", "R1"),
            summary("Bar Baz", "owner-2", "rec-2"),
            summary("", "U3", "R3"), // becomes "unknown"
        ];
        let entries = read_index(&encode(&records));
        assert_eq!(
            entries,
            [
                ("Foo".to_string(), "resrec:///U1/R1".to_string()),
                ("Bar Baz".to_string(), "resrec:///owner-2/rec-2".to_string()),
                ("unknown".to_string(), "resrec:///U3/R3".to_string()),
            ]
        );
    }

    #[test]
    fn round_trip_handles_multibyte_names() {
        // lengths are counted in characters, not bytes
        let records = vec![
            summary("亡者の城", "U1", "R1"),
            summary("plain", "U2", "R2"),
        ];
        let entries = read_index(&encode(&records));
        assert_eq!(entries[0].0, "亡者の城");
        assert_eq!(entries[0].1, "resrec:///U1/R1");
        assert_eq!(entries[1].0, "plain");
    }

    #[test]
    fn empty_input_is_header_only() {
        assert_eq!(encode(&[]), b"0000000000000000");
    }
}
