//! Search bar component

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Margin};

pub struct SearchBar<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("🔍").color(self.theme.text_muted));

            let text_edit = egui::TextEdit::singleline(&mut self.state.search_query)
                .hint_text("Search recordings")
                .desired_width(ui.available_width() - 32.0)
                .font(egui::TextStyle::Body)
                .margin(Margin::symmetric(12.0, 8.0));
            ui.add(text_edit);

            if !self.state.search_query.is_empty() && ui.button("✕").clicked() {
                self.state.search_query.clear();
            }
        });
    }
}
