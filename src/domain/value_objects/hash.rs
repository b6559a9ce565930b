//! Content Hash Value Object
//!
//! A validated, immutable digest of a file's content.
//! Used for change detection in the hash record.

use std::fmt;
use std::io::{self, Read};

use sha2::{Digest, Sha256};

const CHUNK_SIZE: usize = 64 * 1024;

/// Content hash value object
///
/// Wraps a lowercase hex SHA-256 digest. The hash record stores the bare hex
/// string, so no algorithm prefix is carried.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Wrap an existing hex digest, normalizing it to lowercase
    pub fn new(hex: &str) -> Self {
        Self(hex.trim().to_ascii_lowercase())
    }

    /// Create a ContentHash by computing SHA-256 of bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(content)))
    }

    /// Stream a reader through SHA-256 without loading it into memory
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut hasher = Sha256::new();
        let mut buf = vec![0u8; CHUNK_SIZE];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
        Ok(Self(format!("{:x}", hasher.finalize())))
    }

    /// Get the hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this hash matches a raw digest string (case-insensitive)
    pub fn matches_str(&self, s: &str) -> bool {
        self.0.eq_ignore_ascii_case(s.trim())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContentHash {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
