use nom::error::{ErrorKind, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum CadError {
    #[error("Bad magic: expected {expected:#010x}, found {found:#010x}")]
    BadMagic { expected: u32, found: u32 },
    #[error("Unexpected end of buffer")]
    UnexpectedEof,
    #[error("Invalid string of length {length}: {reason}")]
    InvalidStringLength { length: usize, reason: &'static str },
    #[error("{what} index {index} is out of range ({len} available)")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
    #[error("Negative count: {count}")]
    NegativeCount { count: i32 },
    #[error("List cannot hold more than {limit} entries")]
    ListFull { limit: usize },
    #[error("Malformed data: {kind:?}")]
    Malformed { kind: ErrorKind },
    #[error("IOError: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
}

impl<I> ParseError<I> for CadError {
    fn from_error_kind(_input: I, kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Eof => Self::UnexpectedEof,
            kind => Self::Malformed { kind },
        }
    }

    // innermost error wins
    fn append(_input: I, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<nom::Err<CadError>> for CadError {
    fn from(err: nom::Err<CadError>) -> Self {
        match err {
            nom::Err::Incomplete(_) => Self::UnexpectedEof,
            nom::Err::Error(err) | nom::Err::Failure(err) => err,
        }
    }
}
