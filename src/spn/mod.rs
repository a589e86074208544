//! Decoder/Encoder for the SPN operator name table format.
//!
//! A file is a plain sequence of 264 byte records with no header, footer
//! or length prefix:
//!
//! | offset | size | field        |
//! |--------|------|--------------|
//! | 0      | 4    | `mnc` (u32, little-endian) |
//! | 4      | 4    | `mcc` (u32, little-endian) |
//! | 8      | 128  | short name   |
//! | 136    | 128  | long name    |
//!
//! The [decode_file] function turns such a buffer into [Record](crate::Record)s
//! and [encode_file] writes them back byte for byte.

mod consts;
mod decode;
mod encode;

pub use consts::{NAME_FIELD_SIZE, RECORD_SIZE};
pub use decode::*;
pub use encode::*;
