//! Readable-text decision for a colored background.
//!
//! Luminance is the ITU-R BT.709 weighted sum over channels normalized to
//! [0, 1], and the ratio is taken against black:
//!
//!   L = 0.2126 * r + 0.7152 * g + 0.0722 * b
//!   contrast = (L + 0.05) / 0.05
//!
//! A background below 4.5 gets white text, everything else black. This is
//! deliberately the plain weighted sum, not the sRGB-linearized WCAG
//! variant.

use thiserror::Error;

/// Contrast threshold below which a background gets white text.
pub const READABLE_RATIO: f64 = 4.5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexColorError {
    #[error("expected 6 hex digits, got {0} characters")]
    BadLength(usize),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

/// An 8-bit RGB triple decoded from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Which text color stays legible on a given background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

/// Decode exactly six hex digits (no leading '#') into an RGB triple.
pub fn parse_hex(hex: &str) -> Result<Rgb, HexColorError> {
    if hex.len() != 6 {
        return Err(HexColorError::BadLength(hex.len()));
    }
    // from_str_radix tolerates a leading '+', which is not a hex digit here.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexColorError::BadDigit(hex.to_string()));
    }
    let value = u32::from_str_radix(hex, 16)
        .map_err(|_| HexColorError::BadDigit(hex.to_string()))?;
    Ok(Rgb {
        r: (value >> 16) as u8,
        g: (value >> 8) as u8,
        b: value as u8,
    })
}

/// Relative luminance in [0.0, 1.0], 0 is black and 1 is white.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * (f64::from(rgb.r) / 255.0)
        + 0.7152 * (f64::from(rgb.g) / 255.0)
        + 0.0722 * (f64::from(rgb.b) / 255.0)
}

/// Contrast ratio of a background against black text, in [1.0, 21.0].
pub fn contrast_ratio(rgb: Rgb) -> f64 {
    (relative_luminance(rgb) + 0.05) / 0.05
}

/// Decide the legible text color for a 6-hex-digit background.
pub fn text_color(hex: &str) -> Result<TextColor, HexColorError> {
    let rgb = parse_hex(hex)?;
    if contrast_ratio(rgb) < READABLE_RATIO {
        Ok(TextColor::White)
    } else {
        Ok(TextColor::Black)
    }
}
