use super::{BLACK, Rgb};

/// One of the three primary color channels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Part {
    Red,
    Green,
    Blue,
}

impl Part {
    /// All parts in slider order
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Position of the part in [`Part::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Read this part's component from a color
    pub const fn get(self, color: Rgb) -> u8 {
        match self {
            Self::Red => color.r,
            Self::Green => color.g,
            Self::Blue => color.b,
        }
    }

    /// Copy of `color` with this part's component replaced
    pub const fn with(self, color: Rgb, value: u8) -> Rgb {
        let mut color = color;
        match self {
            Self::Red => color.r = value,
            Self::Green => color.g = value,
            Self::Blue => color.b = value,
        }
        color
    }

    /// Single-channel swatch color: only this part set, the others at 0
    pub const fn tint(self, value: u8) -> Rgb {
        self.with(BLACK, value)
    }
}
