use common::{
    codec::LittleEndian,
    color::{PartColors, Rgb},
    error::CadError,
    glam::Vec2,
    Cad, Format, Point,
};

use crate::AnimationName;

/// Little endian container with per-part colors and depth, and named animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BccadFormat;

pub type Bccad = Cad<BccadFormat>;
pub type Sprite = common::Sprite<BccadFormat>;
pub type SpritePart = common::SpritePart<BccadFormat>;
pub type Animation = common::Animation<BccadFormat>;
pub type AnimationStep = common::AnimationStep<BccadFormat>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BccadHeader {
    pub timestamp: i32,
    pub sheet_width: u16,
    pub sheet_height: u16,
}

impl Default for BccadHeader {
    fn default() -> Self {
        Self {
            timestamp: 0,
            sheet_width: 1,
            sheet_height: 1,
        }
    }
}

/// Depth of each corner of a part.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DepthQuad {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BccadPartExtras {
    pub mult_color: Rgb,
    pub screen_color: Rgb,
    pub designation: u8,
    pub reserved: i16,
    pub depth: DepthQuad,
    /// Follows the opacity.
    pub reserved_data: [u8; 12],
}

impl Default for BccadPartExtras {
    fn default() -> Self {
        Self {
            mult_color: Rgb::WHITE,
            screen_color: Rgb::BLACK,
            designation: 0,
            reserved: 0,
            depth: DepthQuad::default(),
            reserved_data: [0; 12],
        }
    }
}

impl BccadPartExtras {
    pub fn colors(&self) -> PartColors {
        PartColors {
            mult: self.mult_color,
            screen: self.screen_color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BccadStepExtras {
    pub depth: f32,
    pub translate: Point,
    pub color: Rgb,
    /// Degrees.
    pub rotation: f32,
    /// Byte right after the color.
    pub color_padding: u8,
    pub reserved: [u8; 2],
    /// Opacity is stored in 16 bits, this is the upper byte.
    pub opacity_high: u8,
}

impl Default for BccadStepExtras {
    fn default() -> Self {
        Self {
            depth: 0.,
            translate: Point::default(),
            color: Rgb::WHITE,
            rotation: 0.,
            color_padding: 0,
            reserved: [0; 2],
            opacity_high: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BccadAnimationExtras {
    name: AnimationName,
    /// Bit 0 is the interpolation flag, other bits are kept as they are.
    pub interpolation: u32,
}

impl BccadAnimationExtras {
    pub fn new(name: AnimationName, interpolation: u32) -> Self {
        Self {
            name,
            interpolation,
        }
    }

    pub fn name(&self) -> &AnimationName {
        &self.name
    }

    /// Rejects names that do not fit the one byte length prefix.
    pub fn set_name(&mut self, name: &str) -> Result<(), CadError> {
        self.name = AnimationName::new(name)?;

        Ok(())
    }

    /// Like [`Self::set_name`] but cuts the name down to 127 characters first.
    pub fn set_name_truncated(&mut self, name: &str) -> Result<(), CadError> {
        self.name = AnimationName::truncated(name)?;

        Ok(())
    }

    pub fn interpolated(&self) -> bool {
        self.interpolation & 1 != 0
    }

    pub fn set_interpolated(&mut self, interpolated: bool) {
        if interpolated {
            self.interpolation |= 1;
        } else {
            self.interpolation &= !1;
        }
    }
}

impl Format for BccadFormat {
    type Order = LittleEndian;

    type Header = BccadHeader;
    type SpriteExtras = ();
    type PartExtras = BccadPartExtras;
    type AnimationExtras = BccadAnimationExtras;
    type StepExtras = BccadStepExtras;

    const NAME: &'static str = "bccad";

    // every list count is an i32
    const MAX_SPRITES: usize = i32::MAX as usize;
    const MAX_PARTS: usize = i32::MAX as usize;
    const MAX_ANIMATIONS: usize = i32::MAX as usize;
    const MAX_STEPS: usize = i32::MAX as usize;

    fn default_trailing() -> Vec<u8> {
        vec![0]
    }

    fn part_colors(extras: &Self::PartExtras) -> Option<PartColors> {
        Some(extras.colors())
    }

    fn step_rotation(extras: &Self::StepExtras) -> f32 {
        extras.rotation
    }

    fn step_translation(extras: &Self::StepExtras) -> Vec2 {
        extras.translate.as_vec2()
    }
}
