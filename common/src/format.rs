use std::fmt::Debug;

use byte_writer::ByteWriter;
use glam::Vec2;

use crate::{codec::ByteOrder, color::PartColors, error::CadError, Cad};

/// Bounds every per-format extra has to satisfy.
pub trait Extras: Debug + Clone + PartialEq + Default {}

impl<T: Debug + Clone + PartialEq + Default> Extras for T {}

/// Describes one container format: its byte order, the fields it adds on top of the shared
/// ones and how wide its list counters are.
pub trait Format: Debug + Clone + Copy + PartialEq + Default {
    type Order: ByteOrder;

    type Header: Extras;
    type SpriteExtras: Extras;
    type PartExtras: Extras;
    type AnimationExtras: Extras;
    type StepExtras: Extras;

    const NAME: &'static str;

    const MAX_SPRITES: usize;
    const MAX_PARTS: usize;
    const MAX_ANIMATIONS: usize;
    const MAX_STEPS: usize;

    /// Bytes a freshly created container ends with.
    fn default_trailing() -> Vec<u8> {
        Vec::new()
    }

    fn part_colors(_extras: &Self::PartExtras) -> Option<PartColors> {
        None
    }

    /// Degrees.
    fn step_rotation(_extras: &Self::StepExtras) -> f32 {
        0.
    }

    fn step_translation(_extras: &Self::StepExtras) -> Vec2 {
        Vec2::ZERO
    }
}

pub trait CadCodec: Format {
    fn parse(i: &[u8]) -> Result<Cad<Self>, CadError>;

    /// Never fails. The mutation API keeps every count and string inside its field width.
    fn write(cad: &Cad<Self>, writer: &mut ByteWriter);
}
