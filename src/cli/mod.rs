use std::path::PathBuf;

use bread::settings::Settings;
use clap::{Parser, Subcommand};
use log::debug;

mod extract;
mod info;
mod prefs;
mod transform;
mod verify;

#[derive(Debug, Parser)]
#[command(version, about = "Inspect .brcad and .bccad sprite containers", long_about = None)]
struct BreadCli {
    /// Print debug logs unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Header, sprites and animations of a data file
    Info {
        path: PathBuf,
        /// C header naming the animations of a .brcad
        #[arg(long)]
        header: Option<PathBuf>,
    },
    /// Reads and writes back each file, then compares the bytes
    Verify {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Transforms of every part of a sprite, optionally under an animation step
    Transform {
        path: PathBuf,
        #[arg(short, long, default_value_t = 0)]
        sprite: usize,
        /// Animation whose step is applied, needs --step
        #[arg(short, long, requires = "step")]
        animation: Option<usize>,
        #[arg(long, requires = "animation")]
        step: Option<usize>,
        #[arg(long, num_args = 2, value_names = ["X", "Y"], default_values_t = [256., 256.])]
        center: Vec<f32>,
    },
    /// Writes every part region as a .png, tinted by its colors
    Extract {
        path: PathBuf,
        /// Defaults to the only .png next to the data file
        #[arg(short, long)]
        texture: Option<PathBuf>,
        #[arg(short, long)]
        out: PathBuf,
        /// Only this sprite
        #[arg(short, long)]
        sprite: Option<usize>,
    },
    /// Shows the preferences, or changes them
    Prefs {
        #[arg(long)]
        night_mode: Option<bool>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

pub enum CliRes {
    Ok,
    Err,
}

pub fn cli() -> CliRes {
    let cli = BreadCli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut settings = Settings::load();
    debug!("settings: {settings:?}");

    let res = match cli.command {
        Commands::Info { path, header } => {
            info::info(&settings.resolve(path), header.map(|header| settings.resolve(header)))
        }
        Commands::Verify { paths } => verify::verify(
            &paths
                .into_iter()
                .map(|path| settings.resolve(path))
                .collect::<Vec<_>>(),
        ),
        Commands::Transform {
            path,
            sprite,
            animation,
            step,
            center,
        } => transform::transform(
            &settings.resolve(path),
            sprite,
            animation.zip(step),
            center,
        ),
        Commands::Extract {
            path,
            texture,
            out,
            sprite,
        } => extract::extract(&settings.resolve(path), texture, &out, sprite),
        Commands::Prefs {
            night_mode,
            data_dir,
        } => prefs::prefs(&mut settings, night_mode, data_dir),
    };

    match res {
        Ok(_) => CliRes::Ok,
        Err(err) => {
            println!("{}", err);
            CliRes::Err
        }
    }
}
