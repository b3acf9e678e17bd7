//! Textual forms of colors and channel values
//!
//! All strings are fixed-capacity and sized for the longest possible output,
//! so formatting into them never fails.

use core::fmt::Write;

use heapless::String;

use super::Rgb;

/// Six uppercase hex digits, `RRGGBB`
pub type HexString = String<6>;

/// CSS functional notation, `rgb(R,G,B)`
pub type RgbString = String<16>;

/// Zero-padded three digit channel value
pub type LabelString = String<3>;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack a color as `red * 65536 + green * 256 + blue`
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Render a color as 6-digit uppercase hex, e.g. `{16, 0, 0}` -> `"100000"`
pub fn hex(color: Rgb) -> HexString {
    let mut out = HexString::new();
    let _ = write!(out, "{:06X}", rgb_to_u32(color));
    out
}

/// Parse `RRGGBB` or `#RRGGBB`, either case
pub fn rgb_from_hex(s: &str) -> Option<Rgb> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(rgb_from_u32)
}

/// Render a color as `rgb(R,G,B)` with no spaces
pub fn rgb_string(color: Rgb) -> RgbString {
    let mut out = RgbString::new();
    let _ = write!(out, "rgb({},{},{})", color.r, color.g, color.b);
    out
}

/// Knob label for a channel value, `7` -> `"007"`
pub fn value_label(value: u8) -> LabelString {
    let mut out = LabelString::new();
    let _ = write!(out, "{:03}", value);
    out
}
