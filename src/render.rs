//! Texture side of drawing: cut regions out of the sheet and tint them.
use std::{collections::HashMap, path::Path};

use common::{
    color::{composite_color, PartColors, Rgb},
    Region,
};
use image::{imageops, Rgba, RgbaImage};
use log::warn;

/// Sub-images of one texture, keyed by region.
#[derive(Debug, Clone)]
pub struct RegionCache {
    texture: RgbaImage,
    regions: HashMap<Region, RgbaImage>,
}

impl RegionCache {
    pub fn new(texture: RgbaImage) -> Self {
        Self {
            texture,
            regions: HashMap::new(),
        }
    }

    pub fn open(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let texture = image::open(path.as_ref())?.into_rgba8();

        Ok(Self::new(texture))
    }

    pub fn texture(&self) -> &RgbaImage {
        &self.texture
    }

    /// Swaps the texture and drops every cached region.
    pub fn reload(&mut self, texture: RgbaImage) {
        self.texture = texture;
        self.regions.clear();
    }

    pub fn invalidate(&mut self, region: &Region) {
        self.regions.remove(region);
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions reaching outside of the texture come back blank and transparent.
    pub fn get(&mut self, region: Region) -> &RgbaImage {
        self.regions
            .entry(region)
            .or_insert_with(|| crop_region(&self.texture, region))
    }
}

fn crop_region(texture: &RgbaImage, region: Region) -> RgbaImage {
    let Region { x, y, w, h } = region;
    let (x, y, w, h) = (x as u32, y as u32, w as u32, h as u32);

    // images cannot be empty, each side is drawn at least 1 pixel wide
    if w == 0 || h == 0 {
        warn!("region {region:?} has no area, using a blank image");

        return RgbaImage::new(w.max(1), h.max(1));
    }

    if x + w > texture.width() || y + h > texture.height() {
        warn!(
            "region {region:?} is outside of the {}x{} texture",
            texture.width(),
            texture.height()
        );

        return RgbaImage::new(w, h);
    }

    imageops::crop_imm(texture, x, y, w, h).to_image()
}

/// Applies [`composite_color`] to every pixel. Alpha is kept.
pub fn composite_image(image: &RgbaImage, colors: PartColors) -> RgbaImage {
    let mut res = image.clone();

    res.pixels_mut().for_each(|pixel| {
        let Rgba([r, g, b, a]) = *pixel;
        let Rgb { r, g, b } = composite_color(Rgb::new(r, g, b), colors.mult, colors.screen);

        *pixel = Rgba([r, g, b, a]);
    });

    res
}

#[cfg(test)]
mod test {
    use super::*;

    fn checker() -> RgbaImage {
        RgbaImage::from_fn(4, 4, |x, y| Rgba([x as u8 * 10, y as u8 * 10, 77, 200]))
    }

    #[test]
    fn region_is_cropped_and_cached() {
        let mut cache = RegionCache::new(checker());

        let region = cache.get(Region::new(1, 2, 2, 2));
        assert_eq!(region.dimensions(), (2, 2));
        assert_eq!(*region.get_pixel(0, 0), Rgba([10, 20, 77, 200]));
        assert_eq!(*region.get_pixel(1, 1), Rgba([20, 30, 77, 200]));

        cache.get(Region::new(1, 2, 2, 2));
        assert_eq!(cache.len(), 1);

        cache.invalidate(&Region::new(1, 2, 2, 2));
        assert!(cache.is_empty());
    }

    #[test]
    fn outside_region_is_blank() {
        let mut cache = RegionCache::new(checker());

        let region = cache.get(Region::new(3, 0, 2, 1));

        assert_eq!(region.dimensions(), (2, 1));
        assert!(region.pixels().all(|pixel| *pixel == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn zero_area_region_is_blank_and_saveable() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = RegionCache::new(checker());

        let region = cache.get(Region::new(0, 0, 0, 2));

        assert_eq!(region.dimensions(), (1, 2));
        assert!(region.pixels().all(|pixel| *pixel == Rgba([0, 0, 0, 0])));
        region.save(dir.path().join("empty.png")).unwrap();

        assert_eq!(cache.get(Region::new(1, 1, 0, 0)).dimensions(), (1, 1));
    }

    #[test]
    fn reload_drops_regions() {
        let mut cache = RegionCache::new(checker());
        cache.get(Region::new(0, 0, 1, 1));

        cache.reload(RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 4])));

        assert!(cache.is_empty());
        assert_eq!(*cache.get(Region::new(0, 0, 1, 1)).get_pixel(0, 0), Rgba([1, 2, 3, 4]));
    }

    #[test]
    fn default_colors_keep_pixels() {
        let image = checker();

        assert_eq!(composite_image(&image, PartColors::default()), image);
    }

    #[test]
    fn black_multiply_keeps_alpha() {
        let colors = PartColors {
            mult: Rgb::BLACK,
            screen: Rgb::BLACK,
        };

        let res = composite_image(&checker(), colors);

        assert!(res.pixels().all(|pixel| *pixel == Rgba([0, 0, 0, 200])));
    }
}
