//! `.bccad` sprite and animation container.
//!
//! Little endian, no magic. Parts carry multiply and screen colors plus per-corner depth, and
//! animations are named. Files end with a zero byte that is kept in [`common::Cad::trailing`].
mod name;
mod parser;
mod types;
mod writer;

pub use name::AnimationName;
pub use parser::{open_with_charset, parse_bccad};
pub use types::*;
