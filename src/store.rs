use crate::spn::{decode_file, encode_file};
use crate::{Error, Record, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Returns the index of the first record with the given key.
///
/// Files written by other tools may hold duplicate keys; every operation
/// below acts on the first match only.
pub fn find(records: &[Record], mnc: u32, mcc: u32) -> Option<usize> {
    records.iter().position(|record| record.has_key(mnc, mcc))
}

/// Appends a new record unless one with the same key already exists.
///
/// Without a `long_name` both names are set to `short_name`. Returns
/// whether the record was added; an existing key is left untouched.
pub fn add(
    records: &mut Vec<Record>,
    mnc: u32,
    mcc: u32,
    short_name: &str,
    long_name: Option<&str>,
) -> bool {
    if let Some(index) = find(records, mnc, mcc) {
        debug!(mnc, mcc, index, "record already exists, not adding");
        return false;
    }

    let long_name = long_name.unwrap_or(short_name);
    records.push(Record::new(mnc, mcc, short_name, long_name));
    true
}

/// Overwrites the names of the record with the given key.
///
/// The long name is only touched if `long_name` is given. Returns whether
/// a matching record was found.
pub fn edit(
    records: &mut [Record],
    mnc: u32,
    mcc: u32,
    short_name: &str,
    long_name: Option<&str>,
) -> bool {
    let Some(index) = find(records, mnc, mcc) else {
        debug!(mnc, mcc, "no such record, not editing");
        return false;
    };

    let record = &mut records[index];
    record.short_name.set(short_name);
    if let Some(long_name) = long_name {
        record.long_name.set(long_name);
    }
    true
}

/// Removes the record with the given key, keeping the order of the rest.
pub fn remove(records: &mut Vec<Record>, mnc: u32, mcc: u32) -> bool {
    match find(records, mnc, mcc) {
        Some(index) => {
            records.remove(index);
            true
        }
        None => {
            debug!(mnc, mcc, "no such record, not removing");
            false
        }
    }
}

/// Formats each record as one human-readable line.
pub fn list(records: &[Record]) -> impl Iterator<Item = String> + '_ {
    records.iter().map(|record| {
        format!(
            "mnc: {}, mcc: {}, short_name: {}, long_name: {}",
            record.mnc, record.mcc, record.short_name, record.long_name
        )
    })
}

/// An operator name table bound to a file.
///
/// The records only change on disk when [save](Self::save) is called,
/// which rewrites the whole file.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl RecordStore {
    /// Creates an empty store for `path` without touching the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Creates a store for `path` and loads it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Replaces the in-memory records with the contents of the file.
    ///
    /// On failure the current records are kept.
    pub fn load(&mut self) -> Result<()> {
        let data = fs::read(&self.path).map_err(|source| self.io_error(source))?;
        self.records = decode_file(&data)?;
        debug!(path = %self.path.display(), records = self.records.len(), "loaded table");
        Ok(())
    }

    /// Writes all records to the file, replacing its contents.
    pub fn save(&self) -> Result<()> {
        let data = encode_file(&self.records)?;
        fs::write(&self.path, data).map_err(|source| self.io_error(source))?;
        debug!(path = %self.path.display(), records = self.records.len(), "saved table");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn find(&self, mnc: u32, mcc: u32) -> Option<usize> {
        find(&self.records, mnc, mcc)
    }

    pub fn add(&mut self, mnc: u32, mcc: u32, short_name: &str, long_name: Option<&str>) -> bool {
        add(&mut self.records, mnc, mcc, short_name, long_name)
    }

    pub fn edit(&mut self, mnc: u32, mcc: u32, short_name: &str, long_name: Option<&str>) -> bool {
        edit(&mut self.records, mnc, mcc, short_name, long_name)
    }

    pub fn remove(&mut self, mnc: u32, mcc: u32) -> bool {
        remove(&mut self.records, mnc, mcc)
    }

    pub fn list(&self) -> impl Iterator<Item = String> + '_ {
        list(&self.records)
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }
}
