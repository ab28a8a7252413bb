use std::path::{Path, PathBuf};

use bread::{
    data_file::DataFile,
    render::{composite_image, RegionCache},
    texture::discover_texture,
};
use common::{Cad, Format};
use log::{info, warn};

fn extract_cad<F: Format>(
    cad: &Cad<F>,
    cache: &mut RegionCache,
    out: &Path,
    only: Option<usize>,
) -> eyre::Result<usize> {
    let sprites: Vec<usize> = match only {
        Some(index) => {
            cad.sprite(index)?;
            vec![index]
        }
        None => (0..cad.sprites().len()).collect(),
    };

    let mut written = 0;

    for sprite_index in sprites {
        for (part_index, part) in cad.sprites()[sprite_index].parts().iter().enumerate() {
            let region = cache.get(part.region);

            let image = match part.colors() {
                Some(colors) => composite_image(region, colors),
                None => region.clone(),
            };

            let path = out.join(format!("sprite{sprite_index:03}_part{part_index:03}.png"));
            image.save(&path)?;

            written += 1;
        }
    }

    Ok(written)
}

pub fn extract(
    path: &Path,
    texture: Option<PathBuf>,
    out: &Path,
    sprite: Option<usize>,
) -> eyre::Result<()> {
    let data = DataFile::open(path)?;

    let texture = match texture {
        Some(texture) => texture,
        None => discover_texture(path)?,
    };
    info!("using texture {}", texture.display());

    let mut cache = RegionCache::open(&texture)?;

    let (sheet_width, sheet_height) = data.sheet_size();
    if cache.texture().dimensions() != (sheet_width as u32, sheet_height as u32) {
        warn!(
            "texture is {:?} but the data file expects {sheet_width}x{sheet_height}",
            cache.texture().dimensions()
        );
    }

    std::fs::create_dir_all(out)?;

    let written = match &data {
        DataFile::Brcad(brcad) => extract_cad(brcad, &mut cache, out, sprite)?,
        DataFile::Bccad(bccad) => extract_cad(bccad, &mut cache, out, sprite)?,
    };

    println!("wrote {written} parts to {}", out.display());

    Ok(())
}
