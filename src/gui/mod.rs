pub mod actions;
pub mod app;
pub mod error_modal;
pub mod info_modal;
pub mod lists_window;
pub mod strings;
pub mod theme;
pub mod top_bar;
pub mod word_card;

use eframe::egui;

pub use app::{
    DynSession,
    KelimeApp,
};

use crate::persistence::Settings;

pub fn run(session: DynSession, settings: Settings) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(strings::APP_TITLE)
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([560.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        strings::APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(KelimeApp::new(cc, session, settings)))),
    )
}
