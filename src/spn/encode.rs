use super::consts::*;
use crate::Record;
use std::io::{Cursor, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Encodes `records` into a complete SPN file, in the given order.
pub fn encode_file(records: &[Record]) -> Result<Vec<u8>, EncodeError> {
    let buf = Vec::with_capacity(records.len() * RECORD_SIZE);
    let mut writer = Writer::new(Cursor::new(buf));
    writer.write(records)?;
    Ok(writer.into_inner().into_inner())
}

pub struct Writer<W: Write> {
    writer: W,
}

impl<W: Write> Writer<W> {
    pub fn new(inner: W) -> Self {
        Self { writer: inner }
    }

    pub fn write(&mut self, records: &[Record]) -> Result<(), EncodeError> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    fn write_record(&mut self, record: &Record) -> Result<(), EncodeError> {
        let mut buf = [0u8; RECORD_SIZE];
        buf[MNC_OFFSET..MNC_OFFSET + 4].copy_from_slice(&record.mnc.to_le_bytes());
        buf[MCC_OFFSET..MCC_OFFSET + 4].copy_from_slice(&record.mcc.to_le_bytes());
        // names are written verbatim, stale tails included
        buf[SHORT_NAME_OFFSET..SHORT_NAME_OFFSET + NAME_FIELD_SIZE]
            .copy_from_slice(record.short_name.as_bytes());
        buf[LONG_NAME_OFFSET..LONG_NAME_OFFSET + NAME_FIELD_SIZE]
            .copy_from_slice(record.long_name.as_bytes());

        self.writer.write_all(&buf)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
