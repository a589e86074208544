use crate::spn::{DecodeError, EncodeError};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed operator name table")]
    Decode(#[from] DecodeError),
    #[error("unable to encode operator name table")]
    Encode(#[from] EncodeError),
    #[error("invalid network code: {0:?}")]
    InvalidArgument(String),
}

/// Parses a decimal mobile network or country code.
pub fn parse_code(value: &str) -> Result<u32> {
    value
        .parse()
        .map_err(|_| Error::InvalidArgument(value.to_string()))
}
