use std::path::Path;

use bread::data_file::DataFile;
use common::{
    glam::Vec2,
    transform::{render_sprite, RenderedPart},
    Cad, Format,
};
use eyre::eyre;

fn print_part(index: usize, part: &RenderedPart) {
    let [a, b] = part.transform.matrix2.to_cols_array_2d();
    let t = part.transform.translation;

    println!(
        "  ({index}) origin ({}, {}) size ({}, {}) opacity {:.3}",
        part.origin.x, part.origin.y, part.size.x, part.size.y, part.opacity
    );
    println!(
        "      [{:.4} {:.4} {:.4}; {:.4} {:.4} {:.4}]",
        a[0], b[0], t.x, a[1], b[1], t.y
    );

    if let Some(colors) = part.colors {
        println!(
            "      multiply {:?} screen {:?}",
            <[u8; 3]>::from(colors.mult),
            <[u8; 3]>::from(colors.screen)
        );
    }
}

fn transform_cad<F: Format>(
    cad: &Cad<F>,
    sprite: usize,
    step: Option<(usize, usize)>,
    center: Vec2,
) -> eyre::Result<()> {
    let (sprite, step) = match step {
        Some((animation, step)) => {
            let animation = cad.animation(animation)?;
            let step = animation.steps().get(step).ok_or_else(|| {
                eyre!(
                    "step {step} is out of range ({} available)",
                    animation.steps().len()
                )
            })?;

            (cad.sprite_for_step(step)?, Some(step))
        }
        None => (cad.sprite(sprite)?, None),
    };

    let parts = render_sprite(sprite, step, center);

    println!("{} parts, canvas center ({}, {})", parts.len(), center.x, center.y);

    for (index, part) in parts.iter().enumerate() {
        print_part(index, part);
    }

    Ok(())
}

pub fn transform(
    path: &Path,
    sprite: usize,
    step: Option<(usize, usize)>,
    center: Vec<f32>,
) -> eyre::Result<()> {
    let [x, y] = center.as_slice() else {
        return Err(eyre!("center needs two coordinates"));
    };
    let center = Vec2::new(*x, *y);

    match DataFile::open(path)? {
        DataFile::Brcad(brcad) => transform_cad(&brcad, sprite, step, center),
        DataFile::Bccad(bccad) => transform_cad(&bccad, sprite, step, center),
    }
}
