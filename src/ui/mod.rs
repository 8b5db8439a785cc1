//! egui shell
//!
//! Thin rendering layer over the controller; all note and session
//! mutations go through [`state::AppState`].

pub mod app;
pub mod components;
pub mod state;
pub mod theme;

pub use app::MurmurApp;
pub use state::AppState;
pub use theme::Theme;
