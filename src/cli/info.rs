use std::path::{Path, PathBuf};

use bread::{
    data_file::DataFile,
    header::{parse_header_file, HeaderDefines},
};
use common::{Animation, Cad, Format};

fn print_sprites<F: Format>(cad: &Cad<F>) {
    println!("{} sprites", cad.sprites().len());

    for (index, sprite) in cad.sprites().iter().enumerate() {
        println!("  ({index}) {} parts", sprite.parts().len());
    }
}

fn print_animation<F: Format>(index: usize, animation: &Animation<F>, label: &str) {
    println!(
        "  ({index}){label} {} steps, {} frames",
        animation.steps().len(),
        animation.total_delay()
    );
}

pub fn info(path: &Path, header: Option<PathBuf>) -> eyre::Result<()> {
    let data = DataFile::open(path)?;
    let header = header
        .map(parse_header_file)
        .transpose()?
        .unwrap_or_else(HeaderDefines::default);

    for bad_line in header.bad_lines() {
        println!("header line {} ignored: {}", bad_line.line, bad_line.text);
    }

    println!("{} ({})", path.display(), data.kind());

    match &data {
        DataFile::Brcad(brcad) => {
            println!("{:?}", brcad.header);
            print_sprites(brcad);

            println!("{} animations", brcad.animations().len());

            for (index, animation) in brcad.animations().iter().enumerate() {
                let names = header
                    .names_for(index as u32)
                    .iter()
                    .map(|define| define.name.as_str())
                    .collect::<Vec<_>>();

                // animations without a #define stay unlabeled
                let label = if names.is_empty() {
                    String::new()
                } else {
                    format!(" {}:", names.join(", "))
                };

                print_animation(index, animation, &label);
            }

            println!("{} trailing bytes", brcad.trailing.len());
        }
        DataFile::Bccad(bccad) => {
            println!("{:?}", bccad.header);
            print_sprites(bccad);

            println!("{} animations", bccad.animations().len());

            for (index, animation) in bccad.animations().iter().enumerate() {
                let interpolated = if animation.extras.interpolated() {
                    " (interpolated)"
                } else {
                    ""
                };

                let label = format!(" \"{}\"{interpolated}:", animation.extras.name());

                print_animation(index, animation, &label);
            }

            println!("{} trailing bytes", bccad.trailing.len());
        }
    }

    Ok(())
}
