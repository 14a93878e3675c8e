use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// POSIX permission bits, including the setuid, setgid and sticky bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FileMode(u32);

impl FileMode {
    pub const MAX: u32 = 0o7777;
    pub const OWNER_READ_WRITE: Self = Self(0o600);
    pub const DEFAULT: Self = Self(0o644);

    pub fn new(bits: u32) -> Result<Self, DomainError> {
        if bits <= Self::MAX {
            Ok(Self(bits))
        } else {
            Err(DomainError::InvalidFileMode(bits))
        }
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl Default for FileMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

impl TryFrom<u32> for FileMode {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FileMode> for u32 {
    fn from(value: FileMode) -> Self {
        value.bits()
    }
}
