use common::{
    codec::{
        read_bool, read_bytes, read_count, read_f32, read_i16, read_i32, read_length_prefixed_string,
        read_point, read_region, read_u16, read_u32, read_u8, read_vec2, Charset, IResult,
        LittleEndian,
    },
    color::Rgb,
    error::CadError,
    Cad, CadCodec,
};
use nom::{combinator::map, multi::count, Parser};

use crate::{
    writer::write_bccad, Animation, AnimationName, AnimationStep, Bccad, BccadAnimationExtras,
    BccadFormat, BccadHeader, BccadPartExtras, BccadStepExtras, DepthQuad, Sprite, SpritePart,
};

type O = LittleEndian;

fn read_rgb(i: &[u8]) -> IResult<'_, Rgb> {
    map(read_bytes::<3>, Rgb::from).parse(i)
}

// corners are stored as top left, bottom left, top right, bottom right
fn parse_depth(i: &[u8]) -> IResult<'_, DepthQuad> {
    map(
        (read_f32::<O>, read_f32::<O>, read_f32::<O>, read_f32::<O>),
        |(top_left, bottom_left, top_right, bottom_right)| DepthQuad {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        },
    )
    .parse(i)
}

fn parse_part(i: &[u8]) -> IResult<'_, SpritePart> {
    map(
        (
            read_region::<O>,
            read_point::<O>,
            read_vec2::<O>,
            read_f32::<O>,
            read_bool,
            read_bool,
            read_rgb,
            read_rgb,
            read_u8,
            read_bytes::<12>,
            read_u8,
            read_i16::<O>,
            parse_depth,
        ),
        |(
            region,
            pos,
            stretch,
            rotation,
            flip_x,
            flip_y,
            mult_color,
            screen_color,
            opacity,
            reserved_data,
            designation,
            reserved,
            depth,
        )| SpritePart {
            region,
            pos,
            stretch,
            rotation,
            flip_x,
            flip_y,
            opacity,
            extras: BccadPartExtras {
                mult_color,
                screen_color,
                designation,
                reserved,
                depth,
                reserved_data,
            },
        },
    )
    .parse(i)
}

fn parse_sprite(i: &[u8]) -> IResult<'_, Sprite> {
    let (i, part_count) = read_count::<O>(i)?;
    let (i, parts) = count(parse_part, part_count).parse(i)?;

    let sprite = Sprite::from_parts(parts, ()).map_err(nom::Err::Failure)?;

    Ok((i, sprite))
}

fn parse_step(i: &[u8]) -> IResult<'_, AnimationStep> {
    map(
        (
            read_u16::<O>,
            read_u16::<O>,
            read_point::<O>,
            read_f32::<O>,
            read_vec2::<O>,
            read_f32::<O>,
            read_rgb,
            read_u8,
            read_bytes::<2>,
            read_u16::<O>,
        ),
        |(
            sprite_index,
            delay,
            translate,
            depth,
            stretch,
            rotation,
            color,
            color_padding,
            reserved,
            opacity,
        )| {
            // only the low byte is the opacity
            let [opacity, opacity_high] = opacity.to_le_bytes();

            AnimationStep {
                sprite_index,
                delay,
                stretch,
                opacity,
                extras: BccadStepExtras {
                    depth,
                    translate,
                    color,
                    rotation,
                    color_padding,
                    reserved,
                    opacity_high,
                },
            }
        },
    )
    .parse(i)
}

fn parse_animation(i: &[u8], charset: Charset) -> IResult<'_, Animation> {
    let (i, name) = read_length_prefixed_string(i, charset)?;
    let name = AnimationName::new(name).map_err(nom::Err::Failure)?;

    let (i, interpolation) = read_u32::<O>(i)?;
    let (i, step_count) = read_count::<O>(i)?;
    let (i, steps) = count(parse_step, step_count).parse(i)?;

    let animation = Animation::from_steps(steps, BccadAnimationExtras::new(name, interpolation))
        .map_err(nom::Err::Failure)?;

    Ok((i, animation))
}

pub fn parse_bccad(i: &[u8], charset: Charset) -> IResult<'_, Bccad> {
    let (i, (timestamp, sheet_width, sheet_height)) =
        (read_i32::<O>, read_u16::<O>, read_u16::<O>).parse(i)?;

    let (i, sprite_count) = read_count::<O>(i)?;
    let (i, sprites) = count(parse_sprite, sprite_count).parse(i)?;

    let (mut i, animation_count) = read_count::<O>(i)?;
    let mut animations = vec![];

    for _ in 0..animation_count {
        let (rest, animation) = parse_animation(i, charset)?;

        animations.push(animation);
        i = rest;
    }

    let header = BccadHeader {
        timestamp,
        sheet_width,
        sheet_height,
    };

    let bccad =
        Cad::from_parts(header, sprites, animations, i.to_vec()).map_err(nom::Err::Failure)?;

    Ok((&i[i.len()..], bccad))
}

/// Parses with animation names decoded in `charset`.
pub fn open_with_charset(i: &[u8], charset: Charset) -> Result<Bccad, CadError> {
    parse_bccad(i, charset)
        .map(|(_, bccad)| bccad)
        .map_err(CadError::from)
}

impl CadCodec for BccadFormat {
    fn parse(i: &[u8]) -> Result<Bccad, CadError> {
        open_with_charset(i, Charset::default())
    }

    fn write(cad: &Bccad, writer: &mut byte_writer::ByteWriter) {
        write_bccad(cad, writer);
    }
}
