//! Input events and the queues that carry them to the mixer
//!
//! An event-dispatch layer (a GUI toolkit, a test harness) turns its native
//! pointer and wheel events into [`InputEvent`]s. They can be applied to the
//! mixer directly or pushed through an [`InputQueue`] and drained later.

use crate::color::Part;
use crate::queue::{Queue, QueueReceiver, QueueSender};

/// Raw input addressed to one slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    /// Pointer pressed on the knob; starts a drag
    PointerDown { part: Part, position: i32 },
    /// Pointer moved; only has an effect while the slider is dragging
    PointerMove { part: Part, position: i32 },
    /// Pointer released; ends the drag
    PointerUp { part: Part },
    /// Wheel turned; only the sign of `delta` is used
    Wheel { part: Part, delta: i32 },
}

/// Value produced by a slider that is owned outside the mixer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelUpdate {
    pub part: Part,
    pub value: u8,
}

/// Type alias for the input event queue
pub type InputQueue<const SIZE: usize> = Queue<InputEvent, SIZE>;

/// Type alias for input event sender
pub type InputSender<'a, const SIZE: usize> = QueueSender<'a, InputEvent, SIZE>;

/// Type alias for input event receiver
pub type InputReceiver<'a, const SIZE: usize> = QueueReceiver<'a, InputEvent, SIZE>;

/// Type alias for the channel update queue
pub type UpdateQueue<const SIZE: usize> = Queue<ChannelUpdate, SIZE>;

/// Type alias for channel update sender
pub type UpdateSender<'a, const SIZE: usize> = QueueSender<'a, ChannelUpdate, SIZE>;

/// Type alias for channel update receiver
pub type UpdateReceiver<'a, const SIZE: usize> = QueueReceiver<'a, ChannelUpdate, SIZE>;
