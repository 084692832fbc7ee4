//! Hex color parsing.
//!
//! Colors arrive as `#RRGGBB` strings and become fully opaque RGBA.

use image::Rgba;
use thiserror::Error;

/// A color string that is not `#` followed by exactly six hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {input:?}: expected #RRGGBB")]
pub struct ColorError {
    pub input: String,
}

/// Parse a `#RRGGBB` string into an opaque RGBA color.
///
/// Alpha is always 255. Both upper- and lowercase hex digits are accepted.
pub fn parse_hex_color(hex: &str) -> Result<Rgba<u8>, ColorError> {
    let invalid = || ColorError {
        input: hex.to_string(),
    };

    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    Ok(Rgba([
        (value >> 16) as u8,
        (value >> 8 & 0xFF) as u8,
        (value & 0xFF) as u8,
        0xFF,
    ]))
}
