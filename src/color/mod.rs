mod part;
mod text;

use smart_leds::RGB8;

pub use part::Part;
pub use text::{
    HexString, LabelString, RgbString, hex, rgb_from_hex, rgb_from_u32, rgb_string, rgb_to_u32,
    value_label,
};

pub type Rgb = RGB8;

/// Black, the default composite color
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
