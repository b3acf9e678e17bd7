//! Desktop preview app for rgb-color-mixer
//!
//! Draws the three channel sliders, their swatches and the mixed color.
//! Pointer and wheel input is queued as `InputEvent`s and drained by the
//! mixer once per frame; everything on screen comes from `RenderSink` calls.

use eframe::egui::{self};
use rgb_color_mixer::{
    ColorMixer, InputEvent, InputQueue, InputSender, MixerConfig, Part, RenderSink,
    SliderLayout,
    color::{Rgb, rgb_from_hex, value_label},
    layout::TRACK_HEIGHT,
};

/// Input queue size
const INPUT_QUEUE_SIZE: usize = 32;

/// Static input queue between the UI and the mixer
static INPUT_QUEUE: InputQueue<INPUT_QUEUE_SIZE> = InputQueue::<INPUT_QUEUE_SIZE>::new();

/// Width of the area reserved for one slider
const SLIDER_WIDTH: f32 = 80.0;

/// Width of the slider track
const TRACK_WIDTH: f32 = 8.0;

/// Knob size in pixels
const KNOB_WIDTH: f32 = 40.0;
const KNOB_HEIGHT: f32 = 12.0;

/// Space above each track for the channel name
const HEADER_HEIGHT: f32 = 24.0;

/// Size of the swatch under each slider and of the mixed color preview
const SWATCH_SIZE: f32 = 48.0;
const COMPOSITE_SIZE: f32 = 160.0;

const LOG_FILTER: &str = "rgb_color_mixer=debug";

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(LOG_FILTER))
        .init();

    let initial_color = match std::env::args().nth(1) {
        Some(arg) => rgb_from_hex(&arg).unwrap_or_else(|| {
            log::warn!("ignoring invalid initial color {arg:?}, expected RRGGBB");
            Rgb::default()
        }),
        None => Rgb::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 420.0])
            .with_title("RGB Color Mixer Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "rgb-color-mixer-preview",
        options,
        Box::new(move |_cc| Ok(Box::new(PreviewApp::new(initial_color)))),
    )
}

/// Parse the `rgb(R,G,B)` form emitted by the mixer
fn parse_rgb_string(s: &str) -> Option<egui::Color32> {
    let inner = s.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::parse::<u8>);
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(egui::Color32::from_rgb(r, g, b))
}

/// Latest values pushed by the mixer, ready to paint
struct PreviewSink {
    knob_tops: [i32; 3],
    labels: [String; 3],
    swatches: [egui::Color32; 3],
    composite: egui::Color32,
    hex: String,
}

impl PreviewSink {
    fn new() -> Self {
        Self {
            knob_tops: [0; 3],
            labels: Default::default(),
            swatches: [egui::Color32::BLACK; 3],
            composite: egui::Color32::BLACK,
            hex: String::new(),
        }
    }
}

impl RenderSink for PreviewSink {
    #[allow(clippy::cast_possible_truncation)]
    fn slider_layout(&self, _part: Part) -> SliderLayout {
        SliderLayout::from_track(HEADER_HEIGHT as i32, KNOB_HEIGHT as i32)
    }

    fn on_channel_rendered(&mut self, part: Part, value: u8, knob_top: i32) {
        self.knob_tops[part.index()] = knob_top;
        self.labels[part.index()] = value_label(value).to_string();
    }

    fn on_channel_swatch_changed(&mut self, part: Part, tinted: &str) {
        match parse_rgb_string(tinted) {
            Some(color) => self.swatches[part.index()] = color,
            None => log::warn!("unexpected swatch color {tinted:?}"),
        }
    }

    fn on_composite_changed(&mut self, rgb: &str, hex: &str) {
        match parse_rgb_string(rgb) {
            Some(color) => self.composite = color,
            None => log::warn!("unexpected composite color {rgb:?}"),
        }
        self.hex = format!("#{hex}");
    }
}

struct PreviewApp {
    /// The mixer instance, owning the sink it renders into
    mixer: ColorMixer<PreviewSink>,
    /// Input sender for UI events
    input_sender: InputSender<'static, INPUT_QUEUE_SIZE>,
    /// Color restored by the reset button
    initial_color: Rgb,
}

impl PreviewApp {
    fn new(initial_color: Rgb) -> Self {
        let mixer = ColorMixer::new(&MixerConfig::from(initial_color), PreviewSink::new());

        Self {
            mixer,
            input_sender: INPUT_QUEUE.sender(),
            initial_color,
        }
    }

    /// Queue an input event for the mixer
    fn send(&self, event: InputEvent) {
        if self.input_sender.try_send(event).is_err() {
            log::warn!("input queue full, dropping {event:?}");
        }
    }

    /// Draw one slider and translate its pointer input into events
    fn slider_ui(&self, ui: &mut egui::Ui, part: Part) {
        #[allow(clippy::cast_precision_loss)]
        let height = HEADER_HEIGHT + TRACK_HEIGHT as f32;
        let (response, painter) = ui.allocate_painter(
            egui::vec2(SLIDER_WIDTH, height),
            egui::Sense::click_and_drag(),
        );
        let rect = response.rect;
        let sink = self.mixer.sink();

        painter.text(
            egui::pos2(rect.center().x, rect.top()),
            egui::Align2::CENTER_TOP,
            part.as_str(),
            egui::FontId::proportional(16.0),
            ui.visuals().text_color(),
        );

        #[allow(clippy::cast_precision_loss)]
        let track = egui::Rect::from_min_size(
            egui::pos2(rect.center().x - TRACK_WIDTH / 2.0, rect.top() + HEADER_HEIGHT),
            egui::vec2(TRACK_WIDTH, TRACK_HEIGHT as f32),
        );
        painter.rect_filled(track, 4.0, ui.visuals().extreme_bg_color);

        #[allow(clippy::cast_precision_loss)]
        let knob = egui::Rect::from_min_size(
            egui::pos2(
                rect.center().x - KNOB_WIDTH / 2.0,
                rect.top() + sink.knob_tops[part.index()] as f32,
            ),
            egui::vec2(KNOB_WIDTH, KNOB_HEIGHT),
        );
        painter.rect_filled(knob, 3.0, sink.swatches[part.index()]);
        painter.rect_stroke(
            knob,
            3.0,
            egui::Stroke::new(1.0, ui.visuals().text_color()),
            egui::StrokeKind::Inside,
        );
        painter.text(
            egui::pos2(knob.right() + 4.0, knob.center().y),
            egui::Align2::LEFT_CENTER,
            &sink.labels[part.index()],
            egui::FontId::monospace(12.0),
            ui.visuals().text_color(),
        );

        if response.drag_started() {
            // Anchor at the press, not where the drag threshold was crossed
            let origin = ui.input(|input| input.pointer.press_origin());
            if let Some(origin) = origin.filter(|origin| knob.contains(*origin)) {
                #[allow(clippy::cast_possible_truncation)]
                let position = origin.y.round() as i32;
                self.send(InputEvent::PointerDown { part, position });
            }
        }
        if response.dragged() {
            if let Some(pointer) = response.interact_pointer_pos() {
                #[allow(clippy::cast_possible_truncation)]
                let position = pointer.y.round() as i32;
                self.send(InputEvent::PointerMove { part, position });
            }
        }
        if response.drag_stopped() {
            self.send(InputEvent::PointerUp { part });
        }

        if response.hovered() {
            // egui reports wheel-up as positive, the mixer expects negative
            let scroll = ui.input(|input| input.raw_scroll_delta.y);
            if scroll > 0.0 {
                self.send(InputEvent::Wheel { part, delta: -1 });
            } else if scroll < 0.0 {
                self.send(InputEvent::Wheel { part, delta: 1 });
            }
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let changed = self.mixer.process_pending(&INPUT_QUEUE.receiver());
        if changed > 0 {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for part in Part::ALL {
                    ui.vertical(|ui| {
                        self.slider_ui(ui, part);
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(SLIDER_WIDTH, SWATCH_SIZE),
                            egui::Sense::hover(),
                        );
                        ui.painter().rect_filled(
                            egui::Rect::from_center_size(
                                rect.center(),
                                egui::vec2(SWATCH_SIZE, SWATCH_SIZE),
                            ),
                            SWATCH_SIZE / 2.0,
                            self.mixer.sink().swatches[part.index()],
                        );
                    });
                }

                ui.add_space(16.0);

                ui.vertical(|ui| {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(COMPOSITE_SIZE, COMPOSITE_SIZE),
                        egui::Sense::hover(),
                    );
                    ui.painter()
                        .rect_filled(rect, 8.0, self.mixer.sink().composite);

                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(&self.mixer.sink().hex)
                            .monospace()
                            .size(24.0),
                    );

                    ui.add_space(8.0);
                    if ui.button("⏮ Reset").clicked() {
                        self.mixer.set_color(self.initial_color);
                    }
                });
            });
        });

        // Input may have been queued this frame; drain it on the next one
        if !INPUT_QUEUE.is_empty() {
            ctx.request_repaint();
        }
    }
}
