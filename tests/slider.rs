mod tests {
    use rgb_color_mixer::{ChannelSlider, DragAnchor, Part, SliderLayout, SliderState};

    fn slider_at(value: i32) -> ChannelSlider {
        let mut slider = ChannelSlider::new(Part::Red, SliderLayout::DEFAULT);
        slider.init(value);
        slider
    }

    #[test]
    fn test_init_clamps() {
        let mut slider = ChannelSlider::new(Part::Green, SliderLayout::DEFAULT);
        assert_eq!(slider.value(), 0);
        assert_eq!(slider.part(), Part::Green);
        assert_eq!(slider.init(300), 255);
        assert_eq!(slider.init(-5), 0);
        assert_eq!(slider.init(0), 0);
        assert_eq!(slider.state(), SliderState::Idle);
    }

    #[test]
    fn test_set_reports_changes_only() {
        let mut slider = slider_at(0);
        assert_eq!(slider.set(0), None);
        assert_eq!(slider.set(-20), None);
        assert_eq!(slider.set(999), Some(255));
        assert_eq!(slider.set(255), None);
        assert_eq!(slider.set(17), Some(17));
        assert_eq!(slider.value(), 17);
    }

    #[test]
    fn test_drag() {
        let mut slider = slider_at(100);
        slider.begin_drag(500);
        assert!(slider.is_dragging());
        assert_eq!(
            slider.drag_anchor(),
            Some(DragAnchor {
                position: 500,
                value: 100
            })
        );

        assert_eq!(slider.drag_to(490), Some(110));
        assert_eq!(slider.drag_to(490), None);
        assert_eq!(slider.drag_to(600), Some(0));
        assert_eq!(slider.drag_to(700), None);
        assert_eq!(slider.drag_to(200), Some(255));

        slider.end_drag();
        assert!(!slider.is_dragging());
        assert_eq!(slider.drag_anchor(), None);
        assert_eq!(slider.drag_to(0), None);
        assert_eq!(slider.value(), 255);
    }

    #[test]
    fn test_drag_notifies_once_per_distinct_value() {
        let mut slider = slider_at(10);
        slider.begin_drag(0);
        let positions = [0, -1, -1, -1, -2, -2, -1, -1, 0];
        let changes: Vec<u8> = positions
            .iter()
            .filter_map(|position| slider.drag_to(*position))
            .collect();
        assert_eq!(changes, vec![11, 12, 11, 10]);
    }

    #[test]
    fn test_begin_drag_restarts() {
        let mut slider = slider_at(10);
        slider.begin_drag(100);
        assert_eq!(slider.drag_to(90), Some(20));

        // Pointer-up was lost; the next press starts over from the current value
        slider.begin_drag(50);
        assert_eq!(
            slider.drag_anchor(),
            Some(DragAnchor {
                position: 50,
                value: 20
            })
        );
        assert_eq!(slider.drag_to(45), Some(25));
    }

    #[test]
    fn test_end_drag_is_idempotent() {
        let mut slider = slider_at(42);
        slider.end_drag();
        slider.end_drag();
        assert_eq!(slider.state(), SliderState::Idle);
        assert_eq!(slider.value(), 42);
    }

    #[test]
    fn test_step() {
        let mut slider = slider_at(254);
        assert_eq!(slider.step(-1), Some(255));
        assert_eq!(slider.step(-1), None);
        assert_eq!(slider.value(), 255);

        let mut slider = slider_at(1);
        assert_eq!(slider.step(1), Some(0));
        assert_eq!(slider.step(1), None);
        assert_eq!(slider.step(0), None);
        assert_eq!(slider.value(), 0);
    }

    #[test]
    fn test_step_while_dragging() {
        let mut slider = slider_at(10);
        slider.begin_drag(100);
        assert_eq!(slider.step(-1), Some(11));
        assert!(slider.is_dragging());

        // The drag is still relative to the value captured at drag start
        assert_eq!(slider.drag_to(99), None);
        assert_eq!(slider.drag_to(98), Some(12));
    }

    #[test]
    fn test_knob_position() {
        let mut slider = ChannelSlider::new(Part::Blue, SliderLayout::DEFAULT);
        slider.init(0);
        assert_eq!(slider.knob_top(), 266);
        slider.set(255);
        assert_eq!(slider.knob_top(), 11);

        let mut slider = ChannelSlider::new(Part::Blue, SliderLayout::from_track(20, 16));
        slider.init(100);
        assert_eq!(slider.layout().knob_origin, 278);
        assert_eq!(slider.knob_top(), 178);
    }

    #[test]
    fn test_label() {
        let mut slider = slider_at(5);
        assert_eq!(slider.label(), "005");
        slider.set(128);
        assert_eq!(slider.label(), "128");
    }
}
