//! Persisted preferences, `prefs/prefs.json` next to the binary.
use std::{
    env,
    fs::{self, OpenOptions},
    io::Read,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub static SETTINGS_FOLDER_NAME: &str = "prefs";
pub static SETTINGS_FILE_NAME: &str = "prefs.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub night_mode: bool,
    /// Where relative data file paths are looked up.
    pub data_file_directory: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            night_mode: false,
            data_file_directory: home_directory(),
        }
    }
}

fn home_directory() -> PathBuf {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn settings_path() -> PathBuf {
    let folder = match env::current_exe() {
        Ok(path) => path
            .parent()
            .map(|parent| parent.join(SETTINGS_FOLDER_NAME))
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FOLDER_NAME)),
        Err(_) => PathBuf::from(SETTINGS_FOLDER_NAME),
    };

    folder.join(SETTINGS_FILE_NAME)
}

impl Settings {
    pub fn load() -> Self {
        Self::load_from(settings_path())
    }

    /// Missing or unreadable files give the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let mut file = match OpenOptions::new().read(true).open(path) {
            Ok(file) => file,
            Err(_) => {
                debug!("no settings at {}, using defaults", path.display());
                return Self::default();
            }
        };

        let mut buffer = String::new();

        if let Err(err) = file.read_to_string(&mut buffer) {
            warn!("cannot read settings at {}: {err}", path.display());
            return Self::default();
        }

        match serde_json::from_str(&buffer) {
            Ok(settings) => settings,
            Err(err) => {
                warn!("malformed settings at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn persist(&self) -> eyre::Result<()> {
        self.persist_to(settings_path())
    }

    pub fn persist_to(&self, path: impl AsRef<Path>) -> eyre::Result<()> {
        let path = path.as_ref();

        if let Some(folder) = path.parent() {
            fs::create_dir_all(folder)?;
        }

        fs::write(path, serde_json::to_string_pretty(self)?)?;

        debug!("saved settings to {}", path.display());

        Ok(())
    }

    /// Relative paths that do not exist from the working directory are taken from the data file
    /// directory.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();

        if path.is_absolute() || path.exists() {
            return path.to_path_buf();
        }

        let candidate = self.data_file_directory.join(path);

        if candidate.exists() {
            candidate
        } else {
            path.to_path_buf()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let settings = Settings::load_from(dir.path().join("nope.json"));

        assert_eq!(settings, Settings::default());
        assert!(!settings.night_mode);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "{ nightMode: tru").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn keys_are_camel_case() {
        let settings = Settings {
            night_mode: true,
            data_file_directory: PathBuf::from("/data"),
        };

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&settings).unwrap()).unwrap();

        assert_eq!(json["nightMode"], true);
        assert_eq!(json["dataFileDirectory"], "/data");
    }

    #[test]
    fn missing_keys_are_defaulted() {
        let settings: Settings = serde_json::from_str(r#"{"nightMode": true}"#).unwrap();

        assert!(settings.night_mode);
        assert_eq!(settings.data_file_directory, home_directory());
    }

    #[test]
    fn persist_creates_folder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FOLDER_NAME).join(SETTINGS_FILE_NAME);

        let settings = Settings {
            night_mode: true,
            data_file_directory: dir.path().to_path_buf(),
        };
        settings.persist_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn resolve_falls_back_to_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bread_resolve_test.bccad"), [0]).unwrap();

        let settings = Settings {
            night_mode: false,
            data_file_directory: dir.path().to_path_buf(),
        };

        assert_eq!(
            settings.resolve("bread_resolve_test.bccad"),
            dir.path().join("bread_resolve_test.bccad")
        );
        assert_eq!(
            settings.resolve("bread_missing.bccad"),
            PathBuf::from("bread_missing.bccad")
        );
    }
}
