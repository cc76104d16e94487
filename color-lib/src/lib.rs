pub mod color;

pub use color::{parse_hex, sRGB, to_string, ColorError};
