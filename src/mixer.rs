use crate::RenderSink;
use crate::color::{HexString, Part, Rgb, RgbString, hex, rgb_string};
use crate::input::{InputEvent, InputReceiver, UpdateReceiver};
use crate::math::clamp;
use crate::slider::ChannelSlider;

/// Starting color; missing channels default to 0, present ones are clamped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct InitialColor {
    pub red: Option<i32>,
    pub green: Option<i32>,
    pub blue: Option<i32>,
}

impl InitialColor {
    /// Raw configured value for a part, 0 when absent
    pub const fn get(&self, part: Part) -> i32 {
        let value = match part {
            Part::Red => self.red,
            Part::Green => self.green,
            Part::Blue => self.blue,
        };
        match value {
            Some(value) => value,
            None => 0,
        }
    }

    /// The color this configuration resolves to
    pub const fn resolve(&self) -> Rgb {
        Rgb {
            r: clamp(self.get(Part::Red)),
            g: clamp(self.get(Part::Green)),
            b: clamp(self.get(Part::Blue)),
        }
    }
}

impl From<Rgb> for InitialColor {
    fn from(color: Rgb) -> Self {
        Self {
            red: Some(i32::from(color.r)),
            green: Some(i32::from(color.g)),
            blue: Some(i32::from(color.b)),
        }
    }
}

/// Configuration for the color mixer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MixerConfig {
    pub initial_color: InitialColor,
}

impl From<Rgb> for MixerConfig {
    fn from(color: Rgb) -> Self {
        Self {
            initial_color: color.into(),
        }
    }
}

/// Color mixer - owns the three channel sliders
///
/// The composite color is never stored: it is read from the sliders, so it
/// always matches the latest value of every channel. Each value change is
/// pushed to the render sink exactly once.
pub struct ColorMixer<S: RenderSink> {
    sink: S,
    sliders: [ChannelSlider; 3],
}

impl<S: RenderSink> ColorMixer<S> {
    /// Create a mixer and render its initial state
    ///
    /// Each slider takes its layout from the sink. Once all three hold their
    /// initial value, every channel is rendered once in slider order.
    pub fn new(config: &MixerConfig, sink: S) -> Self {
        let sliders = Part::ALL.map(|part| ChannelSlider::new(part, sink.slider_layout(part)));
        let mut mixer = Self { sink, sliders };

        for part in Part::ALL {
            mixer.slider_mut(part).init(config.initial_color.get(part));
        }
        for part in Part::ALL {
            mixer.render_channel(part);
        }

        #[cfg(feature = "log")]
        log::debug!("[ColorMixer.new] initial color #{}", mixer.hex());

        mixer
    }

    /// Current composite color
    pub fn color(&self) -> Rgb {
        Rgb {
            r: self.slider(Part::Red).value(),
            g: self.slider(Part::Green).value(),
            b: self.slider(Part::Blue).value(),
        }
    }

    /// Hex encoding of the composite color
    pub fn hex(&self) -> HexString {
        hex(self.color())
    }

    /// CSS encoding of the composite color
    pub fn rgb_string(&self) -> RgbString {
        rgb_string(self.color())
    }

    pub fn slider(&self, part: Part) -> &ChannelSlider {
        &self.sliders[part.index()]
    }

    fn slider_mut(&mut self, part: Part) -> &mut ChannelSlider {
        &mut self.sliders[part.index()]
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Set a channel programmatically
    ///
    /// Returns `true` if the channel changed.
    pub fn set(&mut self, part: Part, value: i32) -> bool {
        let changed = self.slider_mut(part).set(value);
        self.propagate(part, changed)
    }

    /// Set all three channels; returns `true` if any changed
    pub fn set_color(&mut self, color: Rgb) -> bool {
        Part::ALL
            .into_iter()
            .filter(|&part| self.set(part, i32::from(part.get(color))))
            .count()
            > 0
    }

    /// Accept a value reported for one channel
    ///
    /// Entry point for sliders owned elsewhere whose values arrive through an
    /// update queue. Unchanged values are ignored.
    pub fn on_channel_changed(&mut self, part: Part, value: u8) -> bool {
        self.set(part, i32::from(value))
    }

    pub fn begin_drag(&mut self, part: Part, position: i32) {
        self.slider_mut(part).begin_drag(position);
    }

    pub fn drag_to(&mut self, part: Part, position: i32) -> bool {
        let changed = self.slider_mut(part).drag_to(position);
        self.propagate(part, changed)
    }

    pub fn end_drag(&mut self, part: Part) {
        self.slider_mut(part).end_drag();
    }

    pub fn step(&mut self, part: Part, direction: i32) -> bool {
        let changed = self.slider_mut(part).step(direction);
        self.propagate(part, changed)
    }

    /// Dispatch one input event to its slider
    ///
    /// Returns `true` if a channel value changed.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { part, position } => {
                self.begin_drag(part, position);
                false
            }
            InputEvent::PointerMove { part, position } => self.drag_to(part, position),
            InputEvent::PointerUp { part } => {
                self.end_drag(part);
                false
            }
            InputEvent::Wheel { part, delta } => self.step(part, delta),
        }
    }

    /// Handle all queued input events (non-blocking)
    ///
    /// Returns how many events changed a channel value.
    pub fn process_pending<const SIZE: usize>(&mut self, events: &InputReceiver<'_, SIZE>) -> usize {
        events.drain().filter(|event| self.handle(*event)).count()
    }

    /// Apply all queued channel updates (non-blocking)
    ///
    /// Returns how many updates changed a channel value.
    pub fn apply_pending<const SIZE: usize>(&mut self, updates: &UpdateReceiver<'_, SIZE>) -> usize {
        updates
            .drain()
            .filter(|update| self.on_channel_changed(update.part, update.value))
            .count()
    }

    fn propagate(&mut self, part: Part, changed: Option<u8>) -> bool {
        if changed.is_none() {
            return false;
        }
        self.render_channel(part);
        true
    }

    /// Push one channel's derived values to the sink
    ///
    /// Order: channel swatch, composite color and hex, then the knob.
    fn render_channel(&mut self, part: Part) {
        let slider = &self.sliders[part.index()];
        let value = slider.value();
        let knob_top = slider.knob_top();
        let color = self.color();
        let hex = hex(color);

        #[cfg(feature = "log")]
        log::trace!(
            "[ColorMixer.render_channel] {} = {}, composite #{}",
            part.as_str(),
            value,
            hex
        );

        self.sink
            .on_channel_swatch_changed(part, &rgb_string(part.tint(value)));
        self.sink.on_composite_changed(&rgb_string(color), &hex);
        self.sink.on_channel_rendered(part, value, knob_top);
    }
}
