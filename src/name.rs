use crate::spn::NAME_FIELD_SIZE;
use std::borrow::Cow;
use std::fmt;

/// A fixed-width, 128 byte operator name field.
///
/// The buffer is not guaranteed to be NUL-terminated. Its textual content
/// ends at the first NUL byte, or spans the whole buffer if there is none.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name([u8; NAME_FIELD_SIZE]);

impl Name {
    /// Creates a zero-initialized field holding `value`.
    pub fn new(value: impl AsRef<[u8]>) -> Self {
        let mut name = Self::default();
        name.set(value);
        name
    }

    pub const fn from_bytes(bytes: [u8; NAME_FIELD_SIZE]) -> Self {
        Self(bytes)
    }

    /// Overwrites the front of the field with `value`.
    ///
    /// Values longer than the field are cut to its first 128 bytes. Shorter
    /// values get a single NUL terminator; bytes past the terminator keep
    /// whatever they held before.
    pub fn set(&mut self, value: impl AsRef<[u8]>) {
        let value = value.as_ref();
        let len = value.len().min(NAME_FIELD_SIZE);
        self.0[..len].copy_from_slice(&value[..len]);
        if len < NAME_FIELD_SIZE {
            self.0[len] = 0;
        }
    }

    pub fn as_bytes(&self) -> &[u8; NAME_FIELD_SIZE] {
        &self.0
    }

    /// The bytes up to the first NUL, or the whole field.
    pub fn content(&self) -> &[u8] {
        let end = self
            .0
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(NAME_FIELD_SIZE);
        &self.0[..end]
    }

    /// Decodes [content](Self::content) as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.content())
    }
}

impl Default for Name {
    fn default() -> Self {
        Self([0; NAME_FIELD_SIZE])
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
