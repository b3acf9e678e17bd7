#![no_std]

pub mod color;
pub mod input;
pub mod layout;
pub mod math;
pub mod mixer;
pub mod queue;
pub mod slider;

pub use color::{HexString, Part, Rgb, RgbString, hex, rgb_string};
pub use input::{
    ChannelUpdate, InputEvent, InputQueue, InputReceiver, InputSender, UpdateQueue,
    UpdateReceiver, UpdateSender,
};
pub use layout::SliderLayout;
pub use math::{clamp, map_drag_position, map_wheel_step};
pub use mixer::{ColorMixer, InitialColor, MixerConfig};
pub use slider::{ChannelSlider, DragAnchor, SliderState};

/// Abstract view trait
///
/// Implement this trait to show the mixer on a specific surface.
/// The mixer only writes derived values to it and never reads them back.
pub trait RenderSink {
    /// Knob geometry for a slider, queried once when the mixer is created
    fn slider_layout(&self, _part: Part) -> SliderLayout {
        SliderLayout::DEFAULT
    }

    /// Move the knob and update the numeric label of one slider
    fn on_channel_rendered(&mut self, part: Part, value: u8, knob_top: i32);

    /// Update the single-channel preview; `tinted` is in `rgb(R,G,B)` form
    fn on_channel_swatch_changed(&mut self, part: Part, tinted: &str);

    /// Update the composite preview and the hex readout
    fn on_composite_changed(&mut self, rgb: &str, hex: &str);
}

/// Sink that discards every notification
impl RenderSink for () {
    fn on_channel_rendered(&mut self, _part: Part, _value: u8, _knob_top: i32) {}

    fn on_channel_swatch_changed(&mut self, _part: Part, _tinted: &str) {}

    fn on_composite_changed(&mut self, _rgb: &str, _hex: &str) {}
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn slider_layout(&self, part: Part) -> SliderLayout {
        (**self).slider_layout(part)
    }

    fn on_channel_rendered(&mut self, part: Part, value: u8, knob_top: i32) {
        (**self).on_channel_rendered(part, value, knob_top);
    }

    fn on_channel_swatch_changed(&mut self, part: Part, tinted: &str) {
        (**self).on_channel_swatch_changed(part, tinted);
    }

    fn on_composite_changed(&mut self, rgb: &str, hex: &str) {
        (**self).on_composite_changed(rgb, hex);
    }
}
