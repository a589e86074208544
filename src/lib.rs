//! Editor for SPN operator name tables.
//!
//! An operator name table maps `(mnc, mcc)` pairs to a short and a long
//! display name. It is stored as a flat file of fixed-size records, see
//! the [spn] module for the exact layout.
//!
//! [RecordStore] binds a table to a file path and offers the
//! `list`/`add`/`edit`/`remove` operations used by the `onstool` binary.

mod error;
mod name;
pub mod spn;
mod store;

pub use error::{Error, Result, parse_code};
pub use name::Name;
pub use store::*;

/// A single operator name table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Mobile network code
    pub mnc: u32,
    /// Mobile country code
    pub mcc: u32,
    pub short_name: Name,
    pub long_name: Name,
}

impl Record {
    /// Creates a record with zero-initialized name fields.
    pub fn new(
        mnc: u32,
        mcc: u32,
        short_name: impl AsRef<[u8]>,
        long_name: impl AsRef<[u8]>,
    ) -> Self {
        Self {
            mnc,
            mcc,
            short_name: Name::new(short_name),
            long_name: Name::new(long_name),
        }
    }

    pub fn has_key(&self, mnc: u32, mcc: u32) -> bool {
        self.mnc == mnc && self.mcc == mcc
    }
}
