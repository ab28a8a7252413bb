use std::path::{Path, PathBuf};

use eyre::eyre;

/// The only `.png` in the folder of `data_file`.
pub fn discover_texture(data_file: impl AsRef<Path>) -> eyre::Result<PathBuf> {
    let data_file = data_file.as_ref();
    let folder = match data_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut pngs = vec![];

    for entry in std::fs::read_dir(&folder)? {
        let path = entry?.path();

        let is_png = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("png"));

        if is_png && path.is_file() {
            pngs.push(path);
        }
    }

    match pngs.len() {
        1 => Ok(pngs.remove(0)),
        0 => Err(eyre!("Cannot find a .png next to {}", data_file.display())),
        count => Err(eyre!(
            "Found {count} .png files next to {}, pick one with --texture",
            data_file.display()
        )),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_png() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("sprite.bccad");
        std::fs::write(&data, [0]).unwrap();
        std::fs::write(dir.path().join("sheet.PNG"), [0]).unwrap();

        assert_eq!(discover_texture(&data).unwrap(), dir.path().join("sheet.PNG"));
    }

    #[test]
    fn ambiguous_or_missing() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("sprite.brcad");

        assert!(discover_texture(&data).is_err());

        std::fs::write(dir.path().join("a.png"), [0]).unwrap();
        std::fs::write(dir.path().join("b.png"), [0]).unwrap();

        assert!(discover_texture(&data).is_err());
    }
}
