/// Largest value a channel can hold
pub const CHANNEL_MAX: u8 = 255;

/// Saturate a raw value into the channel range (0-255)
#[inline]
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub const fn clamp(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > CHANNEL_MAX as i32 {
        CHANNEL_MAX
    } else {
        value as u8
    }
}

/// Map a vertical pointer position to a channel value
///
/// The axis is inverted: moving the pointer up (towards smaller positions)
/// increases the value. One unit of pointer travel is one channel step.
///
/// # Arguments
/// * `anchor` - Pointer position captured when the drag started
/// * `position` - Current pointer position
/// * `anchor_value` - Channel value captured when the drag started
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn map_drag_position(anchor: i32, position: i32, anchor_value: u8) -> u8 {
    let delta = anchor.saturating_sub(position);
    clamp((anchor_value as i32).saturating_add(delta))
}

/// Apply a single wheel step to a channel value
///
/// Only the sign of `direction` matters: negative (wheel up) increments,
/// positive (wheel down) decrements. Steps past either end are ignored.
#[inline]
pub const fn map_wheel_step(value: u8, direction: i32) -> u8 {
    if direction < 0 && value < CHANNEL_MAX {
        value + 1
    } else if direction > 0 && value > 0 {
        value - 1
    } else {
        value
    }
}
