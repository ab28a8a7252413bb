//! `#define NAME NUMBER // comment` headers that name `.brcad` animations.
use std::{collections::BTreeMap, path::Path};

use encoding_rs::SHIFT_JIS;
use log::{info, warn};
use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{digit1, space0, space1},
    combinator::{all_consuming, map_res, opt, rest},
    sequence::preceded,
    IResult, Parser,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    pub name: String,
    pub number: u32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadLine {
    /// 1-based.
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderDefines {
    defines: BTreeMap<u32, Vec<Define>>,
    bad_lines: Vec<BadLine>,
}

impl HeaderDefines {
    /// Names defined as `number`, in file order.
    pub fn names_for(&self, number: u32) -> &[Define] {
        self.defines.get(&number).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn defines(&self) -> impl Iterator<Item = &Define> {
        self.defines.values().flatten()
    }

    pub fn bad_lines(&self) -> &[BadLine] {
        &self.bad_lines
    }
}

fn is_identifier(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn parse_define(i: &str) -> IResult<&str, Define> {
    let (i, _) = (tag("#define"), space1).parse(i)?;
    let (i, name) = take_while1(is_identifier).parse(i)?;
    let (i, _) = space1.parse(i)?;
    let (i, number) = map_res(digit1, str::parse::<u32>).parse(i)?;
    let (i, comment) = opt(preceded((space1, tag("//")), rest)).parse(i)?;
    let (i, _) = space0.parse(i)?;

    Ok((
        i,
        Define {
            name: name.to_string(),
            number,
            comment: comment.map(|comment: &str| comment.trim().to_string()),
        },
    ))
}

/// Headers are Shift-JIS. Undecodable bytes become U+FFFD.
pub fn parse_header(bytes: &[u8]) -> HeaderDefines {
    let (text, _, had_errors) = SHIFT_JIS.decode(bytes);

    if had_errors {
        warn!("header has bytes that are not Shift-JIS, they are replaced");
    }
    let mut res = HeaderDefines::default();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        match all_consuming(parse_define).parse(line) {
            Ok((_, define)) => res.defines.entry(define.number).or_default().push(define),
            Err(_) => {
                info!("line {} failed to be parsed in header file: {line}", index + 1);

                res.bad_lines.push(BadLine {
                    line: index + 1,
                    text: line.to_string(),
                });
            }
        }
    }

    res
}

pub fn parse_header_file(path: impl AsRef<Path>) -> eyre::Result<HeaderDefines> {
    let bytes = std::fs::read(path)?;

    Ok(parse_header(&bytes))
}
