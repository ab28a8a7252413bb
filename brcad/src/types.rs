use common::{codec::BigEndian, Cad, Format};

pub const HEADER_MAGIC: u32 = 0x0132B4D8;

/// Big endian container paired with a C header that names its animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrcadFormat;

pub type Brcad = Cad<BrcadFormat>;
pub type Sprite = common::Sprite<BrcadFormat>;
pub type SpritePart = common::SpritePart<BrcadFormat>;
pub type Animation = common::Animation<BrcadFormat>;
pub type AnimationStep = common::AnimationStep<BrcadFormat>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrcadHeader {
    pub spritesheet_number: u16,
    // unknown
    pub spritesheet_control_word: u16,
    pub width: u16,
    pub height: u16,
    // unknown, follows the sprite count
    pub after_sprite_count: i16,
    // unknown, follows the animation count
    pub after_animation_count: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrcadSpriteExtras {
    pub reserved: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrcadPartExtras {
    /// Sits between the region and the position.
    pub reserved: i32,
    pub reserved_last: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrcadAnimationExtras {
    pub reserved: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrcadStepExtras {
    /// Sits between the delay and the stretch.
    pub reserved: i32,
    /// Sits between the stretch and the opacity.
    pub reserved_after_stretch: i32,
    pub reserved_last: [u8; 3],
}

impl Format for BrcadFormat {
    type Order = BigEndian;

    type Header = BrcadHeader;
    type SpriteExtras = BrcadSpriteExtras;
    type PartExtras = BrcadPartExtras;
    type AnimationExtras = BrcadAnimationExtras;
    type StepExtras = BrcadStepExtras;

    const NAME: &'static str = "brcad";

    // every list count is a u16
    const MAX_SPRITES: usize = u16::MAX as usize;
    const MAX_PARTS: usize = u16::MAX as usize;
    const MAX_ANIMATIONS: usize = u16::MAX as usize;
    const MAX_STEPS: usize = u16::MAX as usize;
}
