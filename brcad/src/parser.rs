use common::{
    codec::{
        read_bool, read_bytes, read_f32, read_i16, read_i32, read_point, read_region, read_u16,
        read_u32, read_u8, read_vec2, BigEndian, IResult,
    },
    error::CadError,
    Cad, CadCodec,
};
use nom::{combinator::map, multi::count, Parser};

use crate::{
    writer::write_brcad, Animation, AnimationStep, Brcad, BrcadAnimationExtras, BrcadFormat,
    BrcadHeader, BrcadPartExtras, BrcadSpriteExtras, BrcadStepExtras, Sprite, SpritePart,
    HEADER_MAGIC,
};

type O = BigEndian;

fn parse_magic(i: &[u8]) -> IResult<'_, ()> {
    let (i, magic) = read_u32::<O>(i)?;

    if magic != HEADER_MAGIC {
        return Err(nom::Err::Failure(CadError::BadMagic {
            expected: HEADER_MAGIC,
            found: magic,
        }));
    }

    // magic is followed by a zero word
    let (i, zero) = read_u32::<O>(i)?;

    if zero != 0 {
        return Err(nom::Err::Failure(CadError::BadMagic {
            expected: 0,
            found: zero,
        }));
    }

    Ok((i, ()))
}

fn parse_part(i: &[u8]) -> IResult<'_, SpritePart> {
    map(
        (
            read_region::<O>,
            read_i32::<O>,
            read_point::<O>,
            read_vec2::<O>,
            read_f32::<O>,
            read_bool,
            read_bool,
            read_u8,
            read_u8,
        ),
        |(region, reserved, pos, stretch, rotation, flip_x, flip_y, opacity, reserved_last)| {
            SpritePart {
                region,
                pos,
                stretch,
                rotation,
                flip_x,
                flip_y,
                opacity,
                extras: BrcadPartExtras {
                    reserved,
                    reserved_last,
                },
            }
        },
    )
    .parse(i)
}

fn parse_sprite(i: &[u8]) -> IResult<'_, Sprite> {
    let (i, (part_count, reserved)) = (read_u16::<O>, read_i16::<O>).parse(i)?;
    let (i, parts) = count(parse_part, part_count as usize).parse(i)?;

    let sprite =
        Sprite::from_parts(parts, BrcadSpriteExtras { reserved }).map_err(nom::Err::Failure)?;

    Ok((i, sprite))
}

fn parse_step(i: &[u8]) -> IResult<'_, AnimationStep> {
    map(
        (
            read_u16::<O>,
            read_u16::<O>,
            read_i32::<O>,
            read_vec2::<O>,
            read_i32::<O>,
            read_u8,
            read_bytes::<3>,
        ),
        |(sprite_index, delay, reserved, stretch, reserved_after_stretch, opacity, reserved_last)| {
            AnimationStep {
                sprite_index,
                delay,
                stretch,
                opacity,
                extras: BrcadStepExtras {
                    reserved,
                    reserved_after_stretch,
                    reserved_last,
                },
            }
        },
    )
    .parse(i)
}

fn parse_animation(i: &[u8]) -> IResult<'_, Animation> {
    let (i, (step_count, reserved)) = (read_u16::<O>, read_i16::<O>).parse(i)?;
    let (i, steps) = count(parse_step, step_count as usize).parse(i)?;

    let animation = Animation::from_steps(steps, BrcadAnimationExtras { reserved })
        .map_err(nom::Err::Failure)?;

    Ok((i, animation))
}

pub fn parse_brcad(i: &[u8]) -> IResult<'_, Brcad> {
    let (i, _) = parse_magic(i)?;

    let (i, (spritesheet_number, spritesheet_control_word, width, height)) =
        (read_u16::<O>, read_u16::<O>, read_u16::<O>, read_u16::<O>).parse(i)?;

    let (i, (sprite_count, after_sprite_count)) = (read_u16::<O>, read_i16::<O>).parse(i)?;
    let (i, sprites) = count(parse_sprite, sprite_count as usize).parse(i)?;

    let (i, (animation_count, after_animation_count)) =
        (read_u16::<O>, read_i16::<O>).parse(i)?;
    let (i, animations) = count(parse_animation, animation_count as usize).parse(i)?;

    let header = BrcadHeader {
        spritesheet_number,
        spritesheet_control_word,
        width,
        height,
        after_sprite_count,
        after_animation_count,
    };

    let brcad =
        Cad::from_parts(header, sprites, animations, i.to_vec()).map_err(nom::Err::Failure)?;

    Ok((&i[i.len()..], brcad))
}

impl CadCodec for BrcadFormat {
    fn parse(i: &[u8]) -> Result<Brcad, CadError> {
        parse_brcad(i).map(|(_, brcad)| brcad).map_err(CadError::from)
    }

    fn write(cad: &Brcad, writer: &mut byte_writer::ByteWriter) {
        write_brcad(cad, writer);
    }
}
