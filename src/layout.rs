/// Padding above and below the usable part of a slider track
pub const TRACK_PADDING: i32 = 10;

/// Distinct positions on a track, one per channel value
pub const TRACK_STEPS: i32 = 256;

/// Full height of a slider track including padding
pub const TRACK_HEIGHT: i32 = TRACK_STEPS + TRACK_PADDING * 2;

/// Knob geometry of one slider
///
/// Supplied by the render sink once, when the slider is initialised.
/// The knob sits at `knob_origin` for value 0 and moves up one unit per
/// channel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderLayout {
    pub knob_origin: i32,
}

impl SliderLayout {
    /// Layout of a track at the top of its container with a zero-height knob
    pub const DEFAULT: Self = Self::from_track(0, 0);

    pub const fn new(knob_origin: i32) -> Self {
        Self { knob_origin }
    }

    /// Derive the knob origin from the track position and knob size
    ///
    /// Value 0 lines the knob's centre up with the bottom of the usable track.
    pub const fn from_track(track_top: i32, knob_height: i32) -> Self {
        Self {
            knob_origin: track_top + TRACK_STEPS + TRACK_PADDING - knob_height / 2,
        }
    }

    /// Top edge of the knob for the given value
    #[allow(clippy::cast_lossless)]
    pub const fn knob_top(self, value: u8) -> i32 {
        self.knob_origin - value as i32
    }
}

impl Default for SliderLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}
