use rand_core::{OsRng, RngCore};

use crate::foundation::error::{PixshuffleError, PixshuffleResult};

const TOKEN_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const TOKEN_LEN: usize = 20;

/// Non-empty seed string; the only entropy source of a generation request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Seed(String);

impl Seed {
    /// Wrap `s`, rejecting the empty string.
    pub fn new(s: impl Into<String>) -> PixshuffleResult<Self> {
        let s = s.into();
        if s.is_empty() {
            return Err(PixshuffleError::invalid_input("seed must be non-empty"));
        }
        Ok(Self(s))
    }

    /// Draw a fresh 20-character `[A-Z0-9]` token from the OS RNG.
    ///
    /// Only boundary tools call this; everything downstream is a pure function of the
    /// returned string.
    pub fn random() -> Self {
        let mut out = String::with_capacity(TOKEN_LEN);
        let mut buf = [0u8; 32];
        while out.len() < TOKEN_LEN {
            OsRng.fill_bytes(&mut buf);
            // 252 = 7 * 36; rejecting the tail keeps the draw unbiased.
            for &b in buf.iter().filter(|&&b| b < 252) {
                if out.len() == TOKEN_LEN {
                    break;
                }
                out.push(char::from(TOKEN_ALPHABET[usize::from(b) % TOKEN_ALPHABET.len()]));
            }
        }
        Self(out)
    }

    /// Borrow the seed text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Seed {
    type Error = PixshuffleError;

    fn try_from(value: String) -> PixshuffleResult<Self> {
        Self::new(value)
    }
}

impl From<Seed> for String {
    fn from(value: Seed) -> Self {
        value.0
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../tests/unit/seed.rs"]
mod tests;
