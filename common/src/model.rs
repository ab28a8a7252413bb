use glam::Vec2;

use crate::{color::PartColors, error::CadError, Format};

/// Source rectangle on the texture sheet.
///
/// It may point outside of the loaded texture. Renderers substitute a blank region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Region {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpritePart<F: Format> {
    pub region: Region,
    /// Offset from the canvas origin.
    pub pos: Point,
    /// Negative components mirror the part on their own, independent of the flip flags.
    pub stretch: Vec2,
    /// Degrees.
    pub rotation: f32,
    pub flip_x: bool,
    pub flip_y: bool,
    pub opacity: u8,
    pub extras: F::PartExtras,
}

impl<F: Format> Default for SpritePart<F> {
    fn default() -> Self {
        Self {
            region: Region::new(0, 0, 1, 1),
            pos: Point::default(),
            stretch: Vec2::ONE,
            rotation: 0.,
            flip_x: false,
            flip_y: false,
            opacity: 255,
            extras: F::PartExtras::default(),
        }
    }
}

impl<F: Format> SpritePart<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(&self) -> Option<PartColors> {
        F::part_colors(&self.extras)
    }
}

/// Parts are drawn in order, later parts on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite<F: Format> {
    parts: Vec<SpritePart<F>>,
    pub extras: F::SpriteExtras,
}

impl<F: Format> Default for Sprite<F> {
    fn default() -> Self {
        Self {
            parts: vec![],
            extras: F::SpriteExtras::default(),
        }
    }
}

impl<F: Format> Sprite<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        parts: Vec<SpritePart<F>>,
        extras: F::SpriteExtras,
    ) -> Result<Self, CadError> {
        check_len(parts.len(), F::MAX_PARTS)?;

        Ok(Self { parts, extras })
    }

    pub fn parts(&self) -> &[SpritePart<F>] {
        &self.parts
    }

    /// Parts can be edited and reordered in place, but not added or removed.
    pub fn parts_mut(&mut self) -> &mut [SpritePart<F>] {
        &mut self.parts
    }

    pub fn add_part(&mut self, part: SpritePart<F>) -> Result<usize, CadError> {
        push_bounded(&mut self.parts, part, F::MAX_PARTS)
    }

    pub fn insert_part(&mut self, index: usize, part: SpritePart<F>) -> Result<(), CadError> {
        insert_bounded(&mut self.parts, index, part, F::MAX_PARTS, "part")
    }

    pub fn remove_part(&mut self, index: usize) -> Result<SpritePart<F>, CadError> {
        check_index(index, self.parts.len(), "part")?;

        Ok(self.parts.remove(index))
    }

    pub fn swap_parts(&mut self, a: usize, b: usize) -> Result<(), CadError> {
        swap_checked(&mut self.parts, a, b, "part")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationStep<F: Format> {
    /// Not checked against the sprite list, see [`Cad::sprite_for_step`].
    pub sprite_index: u16,
    /// Frames.
    pub delay: u16,
    pub stretch: Vec2,
    pub opacity: u8,
    pub extras: F::StepExtras,
}

impl<F: Format> Default for AnimationStep<F> {
    fn default() -> Self {
        Self {
            sprite_index: 0,
            delay: 1,
            stretch: Vec2::ONE,
            opacity: 255,
            extras: F::StepExtras::default(),
        }
    }
}

impl<F: Format> AnimationStep<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Degrees. Always 0 for formats without step rotation.
    pub fn rotation(&self) -> f32 {
        F::step_rotation(&self.extras)
    }

    pub fn translation(&self) -> Vec2 {
        F::step_translation(&self.extras)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animation<F: Format> {
    steps: Vec<AnimationStep<F>>,
    pub extras: F::AnimationExtras,
}

impl<F: Format> Default for Animation<F> {
    fn default() -> Self {
        Self {
            steps: vec![],
            extras: F::AnimationExtras::default(),
        }
    }
}

impl<F: Format> Animation<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_steps(
        steps: Vec<AnimationStep<F>>,
        extras: F::AnimationExtras,
    ) -> Result<Self, CadError> {
        check_len(steps.len(), F::MAX_STEPS)?;

        Ok(Self { steps, extras })
    }

    pub fn steps(&self) -> &[AnimationStep<F>] {
        &self.steps
    }

    pub fn steps_mut(&mut self) -> &mut [AnimationStep<F>] {
        &mut self.steps
    }

    pub fn add_step(&mut self, step: AnimationStep<F>) -> Result<usize, CadError> {
        push_bounded(&mut self.steps, step, F::MAX_STEPS)
    }

    pub fn insert_step(&mut self, index: usize, step: AnimationStep<F>) -> Result<(), CadError> {
        insert_bounded(&mut self.steps, index, step, F::MAX_STEPS, "step")
    }

    pub fn remove_step(&mut self, index: usize) -> Result<AnimationStep<F>, CadError> {
        check_index(index, self.steps.len(), "step")?;

        Ok(self.steps.remove(index))
    }

    pub fn swap_steps(&mut self, a: usize, b: usize) -> Result<(), CadError> {
        swap_checked(&mut self.steps, a, b, "step")
    }

    /// Sum of every step delay, in frames.
    pub fn total_delay(&self) -> u32 {
        self.steps.iter().map(|step| step.delay as u32).sum()
    }
}

/// One parsed `.brcad` or `.bccad` file.
#[derive(Debug, Clone, PartialEq)]
pub struct Cad<F: Format> {
    pub header: F::Header,
    sprites: Vec<Sprite<F>>,
    animations: Vec<Animation<F>>,
    /// Whatever follows the last animation, written back untouched.
    pub trailing: Vec<u8>,
}

impl<F: Format> Default for Cad<F> {
    fn default() -> Self {
        Self {
            header: F::Header::default(),
            sprites: vec![],
            animations: vec![],
            trailing: F::default_trailing(),
        }
    }
}

impl<F: Format> Cad<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        header: F::Header,
        sprites: Vec<Sprite<F>>,
        animations: Vec<Animation<F>>,
        trailing: Vec<u8>,
    ) -> Result<Self, CadError> {
        check_len(sprites.len(), F::MAX_SPRITES)?;
        check_len(animations.len(), F::MAX_ANIMATIONS)?;

        Ok(Self {
            header,
            sprites,
            animations,
            trailing,
        })
    }

    pub fn sprites(&self) -> &[Sprite<F>] {
        &self.sprites
    }

    /// In-place edits. Reordering through this slice leaves step indices untouched, use
    /// [`Self::swap_sprites`] to keep steps on their sprite.
    pub fn sprites_mut(&mut self) -> &mut [Sprite<F>] {
        &mut self.sprites
    }

    pub fn animations(&self) -> &[Animation<F>] {
        &self.animations
    }

    pub fn animations_mut(&mut self) -> &mut [Animation<F>] {
        &mut self.animations
    }

    pub fn sprite(&self, index: usize) -> Result<&Sprite<F>, CadError> {
        check_index(index, self.sprites.len(), "sprite")?;

        Ok(&self.sprites[index])
    }

    pub fn sprite_mut(&mut self, index: usize) -> Result<&mut Sprite<F>, CadError> {
        check_index(index, self.sprites.len(), "sprite")?;

        Ok(&mut self.sprites[index])
    }

    pub fn animation(&self, index: usize) -> Result<&Animation<F>, CadError> {
        check_index(index, self.animations.len(), "animation")?;

        Ok(&self.animations[index])
    }

    pub fn animation_mut(&mut self, index: usize) -> Result<&mut Animation<F>, CadError> {
        check_index(index, self.animations.len(), "animation")?;

        Ok(&mut self.animations[index])
    }

    /// Resolves the sprite a step points at.
    pub fn sprite_for_step(&self, step: &AnimationStep<F>) -> Result<&Sprite<F>, CadError> {
        self.sprite(step.sprite_index as usize)
    }

    pub fn add_sprite(&mut self, sprite: Sprite<F>) -> Result<usize, CadError> {
        push_bounded(&mut self.sprites, sprite, F::MAX_SPRITES)
    }

    /// Inserts a sprite. Steps keep pointing at the sprite they used before.
    pub fn insert_sprite(&mut self, index: usize, sprite: Sprite<F>) -> Result<(), CadError> {
        // a step already on the last addressable sprite would have nowhere to go
        let shifts_past_u16 = index <= u16::MAX as usize
            && self
                .animations
                .iter()
                .flat_map(|animation| animation.steps.iter())
                .any(|step| step.sprite_index == u16::MAX);

        if shifts_past_u16 {
            return Err(CadError::ListFull {
                limit: u16::MAX as usize + 1,
            });
        }

        insert_bounded(&mut self.sprites, index, sprite, F::MAX_SPRITES, "sprite")?;

        for step in self.all_steps_mut() {
            if step.sprite_index as usize >= index {
                step.sprite_index += 1;
            }
        }

        Ok(())
    }

    /// Removes a sprite and keeps the steps pointing at the same sprites.
    ///
    /// Steps that used the removed sprite fall back to sprite 0.
    pub fn remove_sprite(&mut self, index: usize) -> Result<Sprite<F>, CadError> {
        check_index(index, self.sprites.len(), "sprite")?;

        for step in self.all_steps_mut() {
            let current = step.sprite_index as usize;

            if current == index {
                step.sprite_index = 0;
            } else if current > index {
                step.sprite_index -= 1;
            }
        }

        Ok(self.sprites.remove(index))
    }

    /// Swaps two sprites. Steps follow the sprite they pointed at.
    pub fn swap_sprites(&mut self, a: usize, b: usize) -> Result<(), CadError> {
        swap_checked(&mut self.sprites, a, b, "sprite")?;

        for step in self.all_steps_mut() {
            let current = step.sprite_index as usize;

            // a sprite past u16::MAX cannot be referenced, those steps fall back to sprite 0
            if current == a {
                step.sprite_index = u16::try_from(b).unwrap_or(0);
            } else if current == b {
                step.sprite_index = u16::try_from(a).unwrap_or(0);
            }
        }

        Ok(())
    }

    pub fn add_animation(&mut self, animation: Animation<F>) -> Result<usize, CadError> {
        push_bounded(&mut self.animations, animation, F::MAX_ANIMATIONS)
    }

    pub fn insert_animation(
        &mut self,
        index: usize,
        animation: Animation<F>,
    ) -> Result<(), CadError> {
        insert_bounded(
            &mut self.animations,
            index,
            animation,
            F::MAX_ANIMATIONS,
            "animation",
        )
    }

    pub fn remove_animation(&mut self, index: usize) -> Result<Animation<F>, CadError> {
        check_index(index, self.animations.len(), "animation")?;

        Ok(self.animations.remove(index))
    }

    pub fn swap_animations(&mut self, a: usize, b: usize) -> Result<(), CadError> {
        swap_checked(&mut self.animations, a, b, "animation")
    }

    fn all_steps_mut(&mut self) -> impl Iterator<Item = &mut AnimationStep<F>> {
        self.animations
            .iter_mut()
            .flat_map(|animation| animation.steps.iter_mut())
    }
}

fn check_len(len: usize, limit: usize) -> Result<(), CadError> {
    if len > limit {
        return Err(CadError::ListFull { limit });
    }

    Ok(())
}

fn check_index(index: usize, len: usize, what: &'static str) -> Result<(), CadError> {
    if index >= len {
        return Err(CadError::IndexOutOfRange { what, index, len });
    }

    Ok(())
}

fn push_bounded<T>(list: &mut Vec<T>, item: T, limit: usize) -> Result<usize, CadError> {
    check_len(list.len() + 1, limit)?;

    list.push(item);

    Ok(list.len() - 1)
}

fn insert_bounded<T>(
    list: &mut Vec<T>,
    index: usize,
    item: T,
    limit: usize,
    what: &'static str,
) -> Result<(), CadError> {
    // inserting right after the last element is allowed
    check_index(index, list.len() + 1, what)?;
    check_len(list.len() + 1, limit)?;

    list.insert(index, item);

    Ok(())
}

fn swap_checked<T>(list: &mut [T], a: usize, b: usize, what: &'static str) -> Result<(), CadError> {
    check_index(a, list.len(), what)?;
    check_index(b, list.len(), what)?;

    list.swap(a, b);

    Ok(())
}
