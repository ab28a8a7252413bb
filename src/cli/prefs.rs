use std::path::PathBuf;

use bread::settings::{settings_path, Settings};

pub fn prefs(
    settings: &mut Settings,
    night_mode: Option<bool>,
    data_dir: Option<PathBuf>,
) -> eyre::Result<()> {
    let changed = night_mode.is_some() || data_dir.is_some();

    if let Some(night_mode) = night_mode {
        settings.night_mode = night_mode;
    }

    if let Some(data_dir) = data_dir {
        settings.data_file_directory = data_dir;
    }

    if changed {
        settings.persist()?;
    }

    println!("{}", settings_path().display());
    println!("night mode: {}", settings.night_mode);
    println!(
        "data file directory: {}",
        settings.data_file_directory.display()
    );

    Ok(())
}
