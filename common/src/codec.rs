//! Primitive readers and writers.
//!
//! Readers are nom parsers over a byte slice; the remaining slice is the cursor. Endianness is a
//! type parameter so a whole format shares one byte order.
use byte_writer::{ByteWriter, Endian};
use glam::Vec2;
use nom::{
    bytes::complete::take,
    combinator::map,
    number::{complete as number, Endianness},
    IResult as _IResult, Parser,
};

use crate::{error::CadError, Point, Region};

pub type IResult<'a, T> = _IResult<&'a [u8], T, CadError>;

/// Longest string a one byte length prefix may announce.
pub const MAX_STRING_LENGTH: usize = 127;

pub trait ByteOrder {
    const ENDIANNESS: Endianness;
    const ENDIAN: Endian;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigEndian;

impl ByteOrder for BigEndian {
    const ENDIANNESS: Endianness = Endianness::Big;
    const ENDIAN: Endian = Endian::Big;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LittleEndian;

impl ByteOrder for LittleEndian {
    const ENDIANNESS: Endianness = Endianness::Little;
    const ENDIAN: Endian = Endian::Little;
}

/// 8-bit charsets names can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    Ascii,
    /// Every byte maps to the code point of the same value.
    #[default]
    Latin1,
}

impl Charset {
    fn limit(self) -> u32 {
        match self {
            Charset::Ascii => 0x80,
            Charset::Latin1 => 0x100,
        }
    }

    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        bytes
            .iter()
            .map(|&byte| ((byte as u32) < self.limit()).then_some(byte as char))
            .collect()
    }

    pub fn encode(self, s: &str) -> Option<Vec<u8>> {
        s.chars()
            .map(|c| ((c as u32) < self.limit()).then_some(c as u32 as u8))
            .collect()
    }
}

pub fn read_u8(i: &[u8]) -> IResult<'_, u8> {
    number::u8(i)
}

pub fn read_bool(i: &[u8]) -> IResult<'_, bool> {
    let (i, byte) = read_u8(i)?;

    Ok((i, byte != 0))
}

pub fn read_u16<O: ByteOrder>(i: &[u8]) -> IResult<'_, u16> {
    number::u16(O::ENDIANNESS)(i)
}

pub fn read_i16<O: ByteOrder>(i: &[u8]) -> IResult<'_, i16> {
    number::i16(O::ENDIANNESS)(i)
}

pub fn read_u32<O: ByteOrder>(i: &[u8]) -> IResult<'_, u32> {
    number::u32(O::ENDIANNESS)(i)
}

pub fn read_i32<O: ByteOrder>(i: &[u8]) -> IResult<'_, i32> {
    number::i32(O::ENDIANNESS)(i)
}

pub fn read_f32<O: ByteOrder>(i: &[u8]) -> IResult<'_, f32> {
    number::f32(O::ENDIANNESS)(i)
}

pub fn read_bytes<const N: usize>(i: &[u8]) -> IResult<'_, [u8; N]> {
    let (i, bytes) = take(N).parse(i)?;

    let mut res = [0u8; N];
    res.copy_from_slice(bytes);

    Ok((i, res))
}

pub fn read_region<O: ByteOrder>(i: &[u8]) -> IResult<'_, Region> {
    map(
        (read_u16::<O>, read_u16::<O>, read_u16::<O>, read_u16::<O>),
        |(x, y, w, h)| Region { x, y, w, h },
    )
    .parse(i)
}

pub fn read_point<O: ByteOrder>(i: &[u8]) -> IResult<'_, Point> {
    map((read_i16::<O>, read_i16::<O>), |(x, y)| Point { x, y }).parse(i)
}

pub fn read_vec2<O: ByteOrder>(i: &[u8]) -> IResult<'_, Vec2> {
    map((read_f32::<O>, read_f32::<O>), |(x, y)| Vec2::new(x, y)).parse(i)
}

pub fn write_region(writer: &mut ByteWriter, region: &Region) {
    let Region { x, y, w, h } = region;

    writer.append_u16(*x);
    writer.append_u16(*y);
    writer.append_u16(*w);
    writer.append_u16(*h);
}

pub fn write_point(writer: &mut ByteWriter, point: &Point) {
    writer.append_i16(point.x);
    writer.append_i16(point.y);
}

pub fn write_vec2(writer: &mut ByteWriter, vec: Vec2) {
    writer.append_f32(vec.x);
    writer.append_f32(vec.y);
}

/// Reads an i32 element count. Negative counts cannot describe a list.
pub fn read_count<O: ByteOrder>(i: &[u8]) -> IResult<'_, usize> {
    let (i, count) = read_i32::<O>(i)?;

    if count < 0 {
        return Err(nom::Err::Failure(CadError::NegativeCount { count }));
    }

    Ok((i, count as usize))
}

/// Padding after a length-prefixed string of `length` bytes.
///
/// Always between 1 and 4 bytes: a prefix and string that already end on a 4 byte boundary still
/// get 4 bytes of padding.
pub fn string_padding(length: usize) -> usize {
    4 - ((length + 1) % 4)
}

/// Reads a one byte length `n`, `n` bytes of text, then [`string_padding`] bytes.
pub fn read_length_prefixed_string(i: &[u8], charset: Charset) -> IResult<'_, String> {
    let (i, length) = read_u8(i)?;
    let length = length as usize;

    if length > MAX_STRING_LENGTH {
        return Err(nom::Err::Failure(CadError::InvalidStringLength {
            length,
            reason: "length prefix is above 127",
        }));
    }

    let (i, bytes) = take(length).parse(i)?;

    let Some(string) = charset.decode(bytes) else {
        return Err(nom::Err::Failure(CadError::InvalidStringLength {
            length,
            reason: "string has bytes outside of the charset",
        }));
    };

    let (i, _) = take(string_padding(length)).parse(i)?;

    Ok((i, string))
}

/// Mirror of [`read_length_prefixed_string`]. `bytes` must already be encoded and no longer than
/// [`MAX_STRING_LENGTH`].
pub fn write_length_prefixed_string(writer: &mut ByteWriter, bytes: &[u8]) {
    writer.append_u8(bytes.len() as u8);
    writer.append_u8_slice(bytes);
    writer.append_zeros(string_padding(bytes.len()));
}
