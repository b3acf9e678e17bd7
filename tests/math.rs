mod tests {
    use rgb_color_mixer::math::{CHANNEL_MAX, clamp, map_drag_position, map_wheel_step};

    #[test]
    fn test_clamp() {
        for value in -1000..1000 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let expected = value.clamp(0, 255) as u8;
            assert_eq!(clamp(value), expected);
        }
        assert_eq!(clamp(i32::MIN), 0);
        assert_eq!(clamp(i32::MAX), CHANNEL_MAX);
    }

    #[test]
    fn test_map_drag_position() {
        // Moving up (smaller position) increases the value
        assert_eq!(map_drag_position(100, 90, 50), 60);
        assert_eq!(map_drag_position(100, 110, 50), 40);
        assert_eq!(map_drag_position(100, 100, 50), 50);

        assert_eq!(map_drag_position(100, -500, 50), 255);
        assert_eq!(map_drag_position(100, 500, 50), 0);

        assert_eq!(map_drag_position(i32::MIN, i32::MAX, 128), 0);
        assert_eq!(map_drag_position(i32::MAX, i32::MIN, 128), 255);
    }

    #[test]
    fn test_map_drag_position_is_monotonic() {
        for anchor in [-300, 0, 137, 1000] {
            for anchor_value in (0..=255u8).step_by(5) {
                for distance in [1, 7, 64, 300] {
                    let up = map_drag_position(anchor, anchor - distance, anchor_value);
                    let down = map_drag_position(anchor, anchor + distance, anchor_value);
                    assert!(up >= anchor_value, "{anchor} {anchor_value} {distance}");
                    assert!(anchor_value >= down, "{anchor} {anchor_value} {distance}");
                }
            }
        }
    }

    #[test]
    fn test_map_wheel_step() {
        assert_eq!(map_wheel_step(10, -1), 11);
        assert_eq!(map_wheel_step(10, 1), 9);
        assert_eq!(map_wheel_step(10, 0), 10);

        // Magnitude is ignored
        assert_eq!(map_wheel_step(10, -120), 11);
        assert_eq!(map_wheel_step(10, 53), 9);

        assert_eq!(map_wheel_step(255, -1), 255);
        assert_eq!(map_wheel_step(0, 1), 0);
        assert_eq!(map_wheel_step(254, -1), 255);
        assert_eq!(map_wheel_step(1, 1), 0);
    }
}
