//! Single channel slider
//!
//! Owns one channel's value and the gesture state used to change it.
//! Every mutation funnels through [`ChannelSlider::set`], which reports the
//! new value only when it actually changed. The owner is expected to forward
//! reported values to the mixer and the render sink.

use crate::color::{LabelString, Part, value_label};
use crate::layout::SliderLayout;
use crate::math::{clamp, map_drag_position, map_wheel_step};

/// Reference captured when a drag starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragAnchor {
    /// Pointer position at drag start
    pub position: i32,
    /// Slider value at drag start
    pub value: u8,
}

/// Gesture state of a slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderState {
    #[default]
    Idle,
    Dragging(DragAnchor),
}

#[derive(Debug, Clone)]
pub struct ChannelSlider {
    part: Part,
    value: u8,
    layout: SliderLayout,
    state: SliderState,
}

impl ChannelSlider {
    /// Create an idle slider at value 0
    pub const fn new(part: Part, layout: SliderLayout) -> Self {
        Self {
            part,
            value: 0,
            layout,
            state: SliderState::Idle,
        }
    }

    /// Set the starting value
    ///
    /// Unlike [`ChannelSlider::set`] this always returns the value, so the
    /// first render happens even when the initial value is 0.
    pub fn init(&mut self, initial: i32) -> u8 {
        self.value = clamp(initial);
        self.state = SliderState::Idle;
        #[cfg(feature = "log")]
        log::debug!(
            "[ChannelSlider.init] {} starts at {}",
            self.part.as_str(),
            self.value
        );
        self.value
    }

    /// Store a new value
    ///
    /// Returns the clamped value if it differs from the current one.
    pub fn set(&mut self, value: i32) -> Option<u8> {
        let value = clamp(value);
        if value == self.value {
            return None;
        }
        #[cfg(feature = "log")]
        log::trace!(
            "[ChannelSlider.set] {} {} -> {}",
            self.part.as_str(),
            self.value,
            value
        );
        self.value = value;
        Some(value)
    }

    /// Start a drag at the given pointer position
    ///
    /// A drag that is already active is discarded and a fresh one starts
    /// from the current value, so a lost pointer-up never leaks into the
    /// next gesture.
    pub fn begin_drag(&mut self, position: i32) {
        #[cfg(feature = "log")]
        if self.is_dragging() {
            log::debug!(
                "[ChannelSlider.begin_drag] {} restarting unfinished drag",
                self.part.as_str()
            );
        }
        self.state = SliderState::Dragging(DragAnchor {
            position,
            value: self.value,
        });
    }

    /// Follow the pointer during a drag
    ///
    /// Does nothing while idle. Returns the new value only when it changed.
    pub fn drag_to(&mut self, position: i32) -> Option<u8> {
        let SliderState::Dragging(anchor) = self.state else {
            return None;
        };
        let value = map_drag_position(anchor.position, position, anchor.value);
        if value == self.value {
            return None;
        }
        self.set(i32::from(value))
    }

    /// Finish the current drag, if any
    pub fn end_drag(&mut self) {
        self.state = SliderState::Idle;
    }

    /// Apply one wheel step; only the sign of `direction` is used
    pub fn step(&mut self, direction: i32) -> Option<u8> {
        let value = map_wheel_step(self.value, direction);
        self.set(i32::from(value))
    }

    pub const fn part(&self) -> Part {
        self.part
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    pub const fn layout(&self) -> SliderLayout {
        self.layout
    }

    pub const fn state(&self) -> SliderState {
        self.state
    }

    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, SliderState::Dragging(_))
    }

    /// Anchor of the active drag
    pub const fn drag_anchor(&self) -> Option<DragAnchor> {
        match self.state {
            SliderState::Dragging(anchor) => Some(anchor),
            SliderState::Idle => None,
        }
    }

    /// Top edge of the knob for the current value
    pub const fn knob_top(&self) -> i32 {
        self.layout.knob_top(self.value)
    }

    /// Numeric label shown next to the knob
    pub fn label(&self) -> LabelString {
        value_label(self.value)
    }
}
