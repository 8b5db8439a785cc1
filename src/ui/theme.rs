//! Visual theme

use egui::Color32;

/// Colors and metrics shared by all components
#[derive(Clone, Debug)]
pub struct Theme {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub primary: Color32,
    pub recording: Color32,
    pub danger: Color32,

    pub spacing: f32,
    pub spacing_sm: f32,
    pub spacing_lg: f32,
    pub card_rounding: f32,
    pub button_rounding: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg_primary: Color32::from_rgb(0x1a, 0x1a, 0x1f),
            bg_secondary: Color32::from_rgb(0x24, 0x24, 0x2b),
            text_primary: Color32::from_rgb(0xec, 0xec, 0xf0),
            text_secondary: Color32::from_rgb(0xb4, 0xb4, 0xbe),
            text_muted: Color32::from_rgb(0x7c, 0x7c, 0x88),
            primary: Color32::from_rgb(0x4a, 0x7e, 0xdd),
            recording: Color32::from_rgb(0xe5, 0x48, 0x4d),
            danger: Color32::from_rgb(0xe5, 0x48, 0x4d),
            spacing: 12.0,
            spacing_sm: 6.0,
            spacing_lg: 24.0,
            card_rounding: 8.0,
            button_rounding: 6.0,
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_visuals(egui::Visuals::dark());
    }
}
