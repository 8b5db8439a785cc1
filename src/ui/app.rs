//! Main application struct and eframe integration

use crate::controller::Controller;
use crate::ui::components::{NoteList, RecordBar, RenameBar, SearchBar};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, TopBottomPanel};

/// Main Murmur application
pub struct MurmurApp {
    state: AppState,
    theme: Theme,
}

impl MurmurApp {
    pub fn new(cc: &eframe::CreationContext<'_>, controller: Controller) -> Self {
        let theme = Theme::dark();
        theme.apply(&cc.egui_ctx);

        Self {
            state: AppState::new(controller),
            theme,
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Murmur")
                            .size(20.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.label(
                        RichText::new("Voice Notes")
                            .size(14.0)
                            .color(self.theme.text_muted),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        RecordBar::new(&mut self.state, &self.theme).show(ui);
                    });
                });
            });
    }

    fn show_search(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("search")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                SearchBar::new(&mut self.state, &self.theme).show(ui);
            });
    }

    fn show_footer(&mut self, ctx: &egui::Context) {
        let has_notice = self.state.notice.is_some();
        let renaming = self.state.renaming.is_some();
        if !has_notice && !renaming {
            return;
        }

        TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                RenameBar::new(&mut self.state, &self.theme).show(ui);

                if let Some(notice) = self.state.notice.clone() {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(notice)
                                .size(13.0)
                                .color(self.theme.danger),
                        );
                        if ui.button("✕").on_hover_text("Dismiss").clicked() {
                            self.state.clear_notice();
                        }
                    });
                }
            });
    }

    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_primary))
            .show(ctx, |ui| {
                NoteList::new(&mut self.state, &self.theme).show(ui);
            });
    }
}

impl eframe::App for MurmurApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_header(ctx);
        self.show_search(ctx);
        self.show_footer(ctx);
        self.show_content(ctx);

        // Keep elapsed/position readouts ticking.
        if self.state.is_recording() || self.state.playback_position().is_some() {
            ctx.request_repaint();
        }
    }
}
