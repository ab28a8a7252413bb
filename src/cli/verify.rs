use std::path::PathBuf;

use bread::data_file::{extension_of, DataFile};
use eyre::eyre;
use log::warn;

/// Offset of the first differing byte.
fn first_mismatch(a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(a, b)| a != b)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}

pub fn verify(paths: &[PathBuf]) -> eyre::Result<()> {
    let mut failed = 0;

    for path in paths {
        let res = std::fs::read(path)
            .map_err(eyre::Report::from)
            .and_then(|bytes| {
                let data = DataFile::from_bytes(&bytes, extension_of(path).as_deref())?;

                Ok(first_mismatch(&bytes, &data.write_to_bytes()))
            });

        match res {
            Ok(None) => println!("OK {}", path.display()),
            Ok(Some(offset)) => {
                failed += 1;
                println!("MISMATCH {} at byte {offset:#x}", path.display());
            }
            Err(err) => {
                failed += 1;
                warn!("cannot verify {}: {err}", path.display());
                println!("FAILED {}: {err}", path.display());
            }
        }
    }

    if failed > 0 {
        return Err(eyre!("{failed} of {} files did not verify", paths.len()));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mismatch_offsets() {
        assert_eq!(first_mismatch(&[1, 2, 3], &[1, 2, 3]), None);
        assert_eq!(first_mismatch(&[1, 2, 3], &[1, 9, 3]), Some(1));
        assert_eq!(first_mismatch(&[1, 2, 3], &[1, 2]), Some(2));
    }
}
