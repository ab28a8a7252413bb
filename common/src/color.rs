//! Per-part color compositing used by `.bccad` parts.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        [value.r, value.g, value.b]
    }
}

/// Multiply and screen colors of one part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartColors {
    pub mult: Rgb,
    pub screen: Rgb,
}

impl Default for PartColors {
    fn default() -> Self {
        Self {
            mult: Rgb::WHITE,
            screen: Rgb::BLACK,
        }
    }
}

/// Screen the source, blend it back against itself, then multiply.
///
/// This is not an alpha blend. White multiply with black screen leaves the source untouched.
pub fn composite_color(source: Rgb, mult: Rgb, screen: Rgb) -> Rgb {
    Rgb {
        r: composite_channel(source.r, mult.r, screen.r),
        g: composite_channel(source.g, mult.g, screen.g),
        b: composite_channel(source.b, mult.b, screen.b),
    }
}

fn composite_channel(source: u8, mult: u8, screen: u8) -> u8 {
    let source = normalize(source);
    let mult = normalize(mult);
    let screen = normalize(screen);

    let screened = 1. - (1. - screen) * (1. - source);
    let blended = screened * (1. - source) + source * (source * mult);

    denormalize(blended * mult)
}

fn normalize(channel: u8) -> f64 {
    channel as f64 / 255.
}

fn denormalize(value: f64) -> u8 {
    (value * 255.).round().clamp(0., 255.) as u8
}
