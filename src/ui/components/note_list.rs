//! Note list component
//!
//! Scrollable list of recordings with per-item play/pause/rename/delete
//! controls.

use crate::notes::{format_duration, Note};
use crate::session::PlaybackState;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText};

pub struct NoteList<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> NoteList<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        let notes = self.state.visible_notes();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(self.theme.spacing);

                if notes.is_empty() {
                    self.show_empty_state(ui);
                } else {
                    for note in &notes {
                        self.show_note(ui, note);
                        ui.add_space(self.theme.spacing_sm);
                    }
                }

                ui.add_space(self.theme.spacing);
            });
    }

    fn show_empty_state(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);

            if self.state.search_query.is_empty() {
                ui.label(
                    RichText::new("No voice notes yet")
                        .size(20.0)
                        .color(self.theme.text_primary),
                );
                ui.add_space(self.theme.spacing_sm);
                ui.label(
                    RichText::new("Tap the microphone to record your first note.")
                        .size(14.0)
                        .color(self.theme.text_muted),
                );
            } else {
                ui.label(
                    RichText::new("No recordings match your search")
                        .size(16.0)
                        .color(self.theme.text_muted),
                );
            }
        });
    }

    fn show_note(&mut self, ui: &mut egui::Ui, note: &Note) {
        let playback = self.state.playback_state_of(&note.uri);

        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        let name_color = if playback.is_some() {
                            self.theme.primary
                        } else {
                            self.theme.text_primary
                        };
                        ui.label(
                            RichText::new(&note.name)
                                .size(16.0)
                                .strong()
                                .color(name_color),
                        );
                        ui.label(
                            RichText::new(note.formatted_date())
                                .size(12.0)
                                .color(self.theme.text_muted),
                        );

                        let duration_text = match playback {
                            Some(_) => {
                                let position = self.state.playback_position().unwrap_or(0.0);
                                format!(
                                    "{} / {}",
                                    format_duration(position),
                                    note.formatted_duration()
                                )
                            }
                            None => note.formatted_duration(),
                        };
                        ui.label(
                            RichText::new(duration_text)
                                .size(12.0)
                                .color(self.theme.text_secondary),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.show_actions(ui, note, playback);
                    });
                });
            });
    }

    fn show_actions(
        &mut self,
        ui: &mut egui::Ui,
        note: &Note,
        playback: Option<PlaybackState>,
    ) {
        // Laid out right-to-left: delete ends up rightmost.
        let delete = ui.button(RichText::new("Delete").color(self.theme.danger));
        if delete.clicked() {
            self.state.delete(&note.uri);
        }

        if ui.button("Rename").clicked() {
            self.state.begin_rename(&note.uri);
        }

        let pause = ui.add_enabled(
            playback == Some(PlaybackState::Playing),
            egui::Button::new("⏸"),
        );
        if pause.clicked() {
            self.state.pause();
        }

        let play_tooltip = match playback {
            Some(_) => "Play again from the start",
            None => "Play",
        };
        let play = ui.button("▶");
        if play.clicked() {
            self.state.play(&note.uri);
        }
        play.on_hover_text(play_tooltip);
    }
}
