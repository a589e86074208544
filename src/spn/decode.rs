use super::consts::*;
use crate::{Name, Record};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("file size {len} is not a multiple of the record size ({size} bytes)", size = RECORD_SIZE)]
    InvalidLength { len: usize },
}

/// Decodes a whole SPN file into its records, in file order.
///
/// Fails if the buffer ends with a partial record.
pub fn decode_file(data: &[u8]) -> Result<Vec<Record>, DecodeError> {
    let (records, rest) = data.as_chunks::<RECORD_SIZE>();
    if !rest.is_empty() {
        return Err(DecodeError::InvalidLength { len: data.len() });
    }

    Ok(records.iter().map(decode_record).collect())
}

fn decode_record(data: &[u8; RECORD_SIZE]) -> Record {
    Record {
        mnc: decode_u32(data, MNC_OFFSET),
        mcc: decode_u32(data, MCC_OFFSET),
        short_name: decode_name(data, SHORT_NAME_OFFSET),
        long_name: decode_name(data, LONG_NAME_OFFSET),
    }
}

fn decode_u32(data: &[u8; RECORD_SIZE], offset: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(buf)
}

fn decode_name(data: &[u8; RECORD_SIZE], offset: usize) -> Name {
    let mut buf = [0u8; NAME_FIELD_SIZE];
    buf.copy_from_slice(&data[offset..offset + NAME_FIELD_SIZE]);
    Name::from_bytes(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;
    use proptest::prelude::*;

    fn make_record(mnc: u32, mcc: u32, short_name: &[u8], long_name: &[u8]) -> [u8; RECORD_SIZE] {
        let mut record = [0u8; RECORD_SIZE];
        record[MNC_OFFSET..MNC_OFFSET + 4].copy_from_slice(&mnc.to_le_bytes());
        record[MCC_OFFSET..MCC_OFFSET + 4].copy_from_slice(&mcc.to_le_bytes());
        record[SHORT_NAME_OFFSET..][..short_name.len()].copy_from_slice(short_name);
        record[LONG_NAME_OFFSET..][..long_name.len()].copy_from_slice(long_name);
        record
    }

    #[test]
    fn decoding_works_for_empty_file() {
        assert!(decode_file(b"").unwrap().is_empty());
    }

    #[test]
    fn decoding_fails_for_truncated_record() {
        let record = make_record(310, 260, b"T-Mobile", b"T-Mobile US");
        assert_debug_snapshot!(decode_file(&record[..100]).unwrap_err(), @r###"
        InvalidLength {
            len: 100,
        }
        "###);
    }

    #[test]
    fn decoding_fails_for_trailing_bytes() {
        let mut data = make_record(310, 260, b"T-Mobile", b"T-Mobile US").to_vec();
        data.push(0);
        assert_debug_snapshot!(decode_file(&data).unwrap_err(), @r###"
        InvalidLength {
            len: 265,
        }
        "###);
    }

    #[test]
    fn decoding_error_message_names_record_size() {
        let err = decode_file(&[0; 10]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "file size 10 is not a multiple of the record size (264 bytes)"
        );
    }

    #[test]
    fn decoding_works_for_single_record() {
        let data = make_record(310, 260, b"T-Mobile", b"T-Mobile US");
        let records = decode_file(&data).unwrap();
        assert_debug_snapshot!(records, @r###"
        [
            Record {
                mnc: 310,
                mcc: 260,
                short_name: "T-Mobile",
                long_name: "T-Mobile US",
            },
        ]
        "###);
    }

    #[test]
    fn decoding_uses_little_endian_keys() {
        let mut data = [0u8; RECORD_SIZE];
        data[0..8].copy_from_slice(&[0x01, 0x02, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00]);
        let records = decode_file(&data).unwrap();
        assert_eq!(records[0].mnc, 0x0201);
        assert_eq!(records[0].mcc, 0xff);
    }

    #[test]
    fn decoding_keeps_file_order_and_duplicates() {
        let mut data = Vec::new();
        data.extend_from_slice(&make_record(2, 1, b"B", b"B"));
        data.extend_from_slice(&make_record(1, 1, b"A", b"A"));
        data.extend_from_slice(&make_record(2, 1, b"C", b"C"));
        let records = decode_file(&data).unwrap();
        let names: Vec<String> = records.iter().map(|r| r.short_name.to_string()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn decoding_keeps_bytes_past_the_terminator() {
        let record = make_record(1, 1, b"O2\0afone", b"");
        let records = decode_file(&record).unwrap();
        assert_eq!(records[0].short_name.to_string(), "O2");
        assert_eq!(&records[0].short_name.as_bytes()[..8], b"O2\0afone");
    }

    proptest! {
        #[test]
        fn decoding_rejects_partial_records(len in 0usize..4 * RECORD_SIZE) {
            let data = vec![0u8; len];
            let result = decode_file(&data);
            if len % RECORD_SIZE == 0 {
                prop_assert_eq!(result.unwrap().len(), len / RECORD_SIZE);
            } else {
                prop_assert!(
                    matches!(result, Err(DecodeError::InvalidLength { len: l }) if l == len),
                    "expected InvalidLength"
                );
            }
        }
    }
}
