use std::fmt;

use common::{
    codec::{Charset, MAX_STRING_LENGTH},
    error::CadError,
};

/// Animation name. Latin-1 encodable and at most 127 bytes once encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AnimationName(String);

impl AnimationName {
    pub fn new(name: impl Into<String>) -> Result<Self, CadError> {
        let name = name.into();

        let Some(bytes) = Charset::Latin1.encode(&name) else {
            return Err(CadError::InvalidStringLength {
                length: name.len(),
                reason: "name has characters outside of Latin-1",
            });
        };

        if bytes.len() > MAX_STRING_LENGTH {
            return Err(CadError::InvalidStringLength {
                length: bytes.len(),
                reason: "name is longer than 127 bytes",
            });
        }

        Ok(Self(name))
    }

    /// Keeps the first 127 characters.
    pub fn truncated(name: &str) -> Result<Self, CadError> {
        Self::new(name.chars().take(MAX_STRING_LENGTH).collect::<String>())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Latin-1 bytes, one per character.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.chars().map(|c| c as u32 as u8).collect()
    }
}

impl fmt::Display for AnimationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for AnimationName {
    type Error = CadError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
