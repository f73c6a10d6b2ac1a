//! Text transcoding: the tolerant outline parser, the deterministic
//! renderer, and the numeral normalization applied before numeric parsing.

pub mod normalize;
pub mod parse;
pub mod render;

pub use normalize::normalize_numerals;
pub use parse::parse;
pub use render::{format_number, render};
