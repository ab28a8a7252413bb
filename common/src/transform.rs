//! Turns stored part and step fields into affine transforms.
//!
//! Coordinates are canvas space with y pointing down. A part is drawn with its top-left corner at
//! `pos - canvas_center` and a size of `region * |stretch|`, then the transform built here is applied.
use glam::{Affine2, Vec2};

use crate::{color::PartColors, AnimationStep, Format, Sprite, SpritePart};

/// `1`, `-1`, or `0` for a zero component. A zero stretch collapses the part.
pub fn sign(value: f32) -> f32 {
    if value > 0. {
        1.
    } else if value < 0. {
        -1.
    } else {
        0.
    }
}

fn scale_about(scale: Vec2, pivot: Vec2) -> Affine2 {
    Affine2::from_translation(pivot) * Affine2::from_scale(scale) * Affine2::from_translation(-pivot)
}

fn rotate_about(degrees: f32, pivot: Vec2) -> Affine2 {
    Affine2::from_translation(pivot)
        * Affine2::from_angle(degrees.to_radians())
        * Affine2::from_translation(-pivot)
}

/// Top-left corner the part image is drawn at.
pub fn part_origin<F: Format>(part: &SpritePart<F>, canvas_center: Vec2) -> Vec2 {
    part.pos.as_vec2() - canvas_center
}

pub fn draw_size<F: Format>(part: &SpritePart<F>) -> Vec2 {
    let region = Vec2::new(part.region.w as f32, part.region.h as f32);

    (region * part.stretch).abs()
}

/// Center of the drawn part. Rotation and flips happen around it.
pub fn part_pivot<F: Format>(part: &SpritePart<F>, canvas_center: Vec2) -> Vec2 {
    part_origin(part, canvas_center) + draw_size(part) * 0.5
}

/// Rotation after accounting for mirroring by a negative stretch.
///
/// A single negative component reverses the visual direction of the stored rotation, so the sign
/// product is folded in.
pub fn effective_rotation<F: Format>(part: &SpritePart<F>) -> f32 {
    part.rotation * sign(part.stretch.x) * sign(part.stretch.y)
}

/// Sign scale about the origin, rotation about the pivot, then the flips about the pivot.
pub fn part_transform<F: Format>(part: &SpritePart<F>, canvas_center: Vec2) -> Affine2 {
    let signs = Vec2::new(sign(part.stretch.x), sign(part.stretch.y));
    let pivot = part_pivot(part, canvas_center);

    let mut transform = scale_about(signs, part_origin(part, canvas_center))
        * rotate_about(effective_rotation(part), pivot);

    if part.flip_x {
        transform = transform * scale_about(Vec2::new(-1., 1.), pivot);
    }

    if part.flip_y {
        transform = transform * scale_about(Vec2::new(1., -1.), pivot);
    }

    transform
}

/// Translation, then stretch and rotation around the canvas center.
pub fn step_transform<F: Format>(step: &AnimationStep<F>, canvas_center: Vec2) -> Affine2 {
    Affine2::from_translation(step.translation())
        * scale_about(step.stretch, canvas_center)
        * rotate_about(step.rotation(), canvas_center)
}

/// Step transform goes on top of the part transform.
pub fn composed_transform<F: Format>(
    part: &SpritePart<F>,
    step: Option<&AnimationStep<F>>,
    canvas_center: Vec2,
) -> Affine2 {
    let part_transform = part_transform(part, canvas_center);

    match step {
        Some(step) => step_transform(step, canvas_center) * part_transform,
        None => part_transform,
    }
}

/// In `0..=1`.
pub fn effective_opacity<F: Format>(part: &SpritePart<F>, step: Option<&AnimationStep<F>>) -> f32 {
    let part_opacity = part.opacity as f32 / 255.;

    match step {
        Some(step) => part_opacity * (step.opacity as f32 / 255.),
        None => part_opacity,
    }
}

/// Everything a renderer needs to draw one part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedPart {
    pub transform: Affine2,
    pub origin: Vec2,
    pub size: Vec2,
    pub opacity: f32,
    pub colors: Option<PartColors>,
}

pub fn render_part<F: Format>(
    part: &SpritePart<F>,
    step: Option<&AnimationStep<F>>,
    canvas_center: Vec2,
) -> RenderedPart {
    RenderedPart {
        transform: composed_transform(part, step, canvas_center),
        origin: part_origin(part, canvas_center),
        size: draw_size(part),
        opacity: effective_opacity(part, step),
        colors: part.colors(),
    }
}

/// Parts in draw order.
pub fn render_sprite<F: Format>(
    sprite: &Sprite<F>,
    step: Option<&AnimationStep<F>>,
    canvas_center: Vec2,
) -> Vec<RenderedPart> {
    sprite
        .parts()
        .iter()
        .map(|part| render_part(part, step, canvas_center))
        .collect()
}
