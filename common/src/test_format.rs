//! Minimal format with tiny list limits, only used by the tests of this crate.
use glam::Vec2;

use crate::{codec::LittleEndian, Format};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TestFormat;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TestStepExtras {
    pub rotation: f32,
    pub translation: Vec2,
}

impl Format for TestFormat {
    type Order = LittleEndian;

    type Header = ();
    type SpriteExtras = ();
    type PartExtras = ();
    type AnimationExtras = ();
    type StepExtras = TestStepExtras;

    const NAME: &'static str = "test";

    const MAX_SPRITES: usize = 3;
    const MAX_PARTS: usize = 2;
    const MAX_ANIMATIONS: usize = 2;
    const MAX_STEPS: usize = 4;

    fn default_trailing() -> Vec<u8> {
        vec![0]
    }

    fn step_rotation(extras: &Self::StepExtras) -> f32 {
        extras.rotation
    }

    fn step_translation(extras: &Self::StepExtras) -> Vec2 {
        extras.translation
    }
}
