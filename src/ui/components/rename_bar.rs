//! Rename bar component
//!
//! Appears only while a rename is in progress.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Key, Margin, RichText};

pub struct RenameBar<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> RenameBar<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        if self.state.renaming.is_none() {
            return;
        }

        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Rename:")
                            .size(14.0)
                            .color(self.theme.text_secondary),
                    );

                    let text_edit = egui::TextEdit::singleline(&mut self.state.rename_text)
                        .hint_text("Enter new name")
                        .desired_width(ui.available_width() - 140.0)
                        .font(egui::TextStyle::Body)
                        .margin(Margin::symmetric(12.0, 8.0));
                    let response = ui.add(text_edit);
                    response.request_focus();

                    let enter_pressed =
                        response.has_focus() && ui.input(|i| i.key_pressed(Key::Enter));

                    if ui.button("Save").clicked() || enter_pressed {
                        self.state.commit_rename();
                    }
                    if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(Key::Escape)) {
                        self.state.cancel_rename();
                    }
                });
            });
    }
}
