//! Record bar component
//!
//! The single record/stop toggle with a live elapsed readout and a
//! pulsing indicator while capturing.

use crate::notes::format_duration;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText, Vec2};

pub struct RecordBar<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> RecordBar<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let is_recording = self.state.is_recording();

        let (icon, tooltip, color) = if is_recording {
            ("⏹", "Stop recording", self.theme.recording)
        } else {
            ("🎤", "Start recording", self.theme.text_secondary)
        };

        ui.horizontal(|ui| {
            let button = egui::Button::new(RichText::new(icon).size(20.0).color(color))
                .min_size(Vec2::splat(44.0))
                .rounding(self.theme.button_rounding);

            let button = if is_recording {
                button.fill(self.theme.recording.gamma_multiply(0.2))
            } else {
                button
            };

            let response = ui.add(button);
            let button_rect = response.rect;

            if response.clicked() {
                self.state.toggle_recording();
            }
            response.on_hover_text(tooltip);

            ui.add_space(self.theme.spacing_sm);

            if is_recording {
                let elapsed = self.state.recording_elapsed().unwrap_or(0.0);
                ui.label(
                    RichText::new(format!("Recording… {}", format_duration(elapsed)))
                        .size(14.0)
                        .color(self.theme.recording),
                );

                // Pulsing ring around the button while capturing
                let t = ui.ctx().input(|i| i.time);
                let pulse = ((t * 3.0).sin() * 0.5 + 0.5) as f32;

                let painter = ui.painter();
                let center = button_rect.center();
                let radius = button_rect.width() / 2.0 + 2.0 + pulse * 3.0;

                painter.circle_stroke(
                    center,
                    radius,
                    egui::Stroke::new(
                        2.0 * pulse,
                        self.theme.recording.gamma_multiply(1.0 - pulse * 0.5),
                    ),
                );

                ui.ctx().request_repaint();
            } else {
                ui.label(
                    RichText::new("Tap to record a voice note")
                        .size(14.0)
                        .color(self.theme.text_muted),
                );
            }
        });
    }
}
