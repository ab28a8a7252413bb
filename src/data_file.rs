//! Either container, picked from the file extension or the leading magic.
use std::path::Path;

use bccad::Bccad;
use brcad::{Brcad, HEADER_MAGIC};
use log::debug;

/// Lowercase extension of `path`.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase())
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataFile {
    Brcad(Brcad),
    Bccad(Bccad),
}

impl DataFile {
    pub fn open(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;

        Self::from_bytes(&bytes, extension_of(path).as_deref())
    }

    /// Files without a known extension are `.brcad` when they start with its magic.
    pub fn from_bytes(bytes: &[u8], extension: Option<&str>) -> eyre::Result<Self> {
        let is_brcad = match extension {
            Some("brcad") => true,
            Some("bccad") => false,
            _ => {
                let sniffed = bytes.len() >= 4 && bytes[..4] == HEADER_MAGIC.to_be_bytes();
                debug!("no known extension, sniffed brcad: {sniffed}");

                sniffed
            }
        };

        Ok(if is_brcad {
            Self::Brcad(Brcad::open_from_bytes(bytes)?)
        } else {
            Self::Bccad(Bccad::open_from_bytes(bytes)?)
        })
    }

    pub fn write_to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Brcad(brcad) => brcad.write_to_bytes(),
            Self::Bccad(bccad) => bccad.write_to_bytes(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Brcad(_) => "brcad",
            Self::Bccad(_) => "bccad",
        }
    }

    /// Texture size the regions were authored against.
    pub fn sheet_size(&self) -> (u16, u16) {
        match self {
            Self::Brcad(brcad) => (brcad.header.width, brcad.header.height),
            Self::Bccad(bccad) => (bccad.header.sheet_width, bccad.header.sheet_height),
        }
    }
}
