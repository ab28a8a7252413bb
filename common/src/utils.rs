use std::path::Path;

use byte_writer::ByteWriter;
use log::debug;

use crate::{codec::ByteOrder, error::CadError, Cad, CadCodec};

impl<F: CadCodec> Cad<F> {
    pub fn open_from_bytes(i: &[u8]) -> Result<Self, CadError> {
        let cad = F::parse(i)?;

        debug!(
            "parsed {} with {} sprites and {} animations",
            F::NAME,
            cad.sprites().len(),
            cad.animations().len()
        );

        Ok(cad)
    }

    pub fn open_from_file(path: impl AsRef<Path>) -> Result<Self, CadError> {
        let bytes = std::fs::read(path)?;

        Self::open_from_bytes(&bytes)
    }

    pub fn write_to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new(<F::Order as ByteOrder>::ENDIAN);

        F::write(self, &mut writer);

        debug!("wrote {} bytes of {}", writer.get_offset(), F::NAME);

        writer.data
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), CadError> {
        std::fs::write(path, self.write_to_bytes())?;

        Ok(())
    }
}
