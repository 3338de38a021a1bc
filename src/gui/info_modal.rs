use eframe::egui;

use super::strings;

#[derive(Default, Clone)]
pub struct InfoData {
    pub message: String,
    pub ends_session: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoOutcome {
    Dismissed,
    EndSession,
}

/// Blocking notice for empty categories and for the end of a drill.
pub struct InfoModal {
    open: bool,
    data: InfoData,
}

impl InfoModal {
    pub fn new() -> Self {
        Self { open: false, data: InfoData::default() }
    }

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.data = InfoData { message: message.into(), ends_session: false };
        self.open = true;
    }

    pub fn show_finished(&mut self, message: impl Into<String>) {
        self.data = InfoData { message: message.into(), ends_session: true };
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<InfoOutcome> {
        if !self.open {
            return None;
        }

        let modal = egui::Modal::new(egui::Id::new("info_modal")).show(ctx, |ui| {
            ui.set_width(360.0);

            ui.label(egui::RichText::new(strings::INFO_TITLE).size(18.0).strong());
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let (icon, icon_color) = if self.data.ends_session {
                    ("★", egui::Color32::GOLD)
                } else {
                    ("ℹ", egui::Color32::LIGHT_BLUE)
                };
                ui.label(egui::RichText::new(icon).size(24.0).color(icon_color));
                ui.label(egui::RichText::new(&self.data.message).size(14.0));
            });

            ui.add_space(15.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            let outcome = if self.data.ends_session {
                InfoOutcome::EndSession
            } else {
                InfoOutcome::Dismissed
            };
            self.open = false;
            self.data = InfoData::default();
            return Some(outcome);
        }

        None
    }
}

impl Default for InfoModal {
    fn default() -> Self {
        Self::new()
    }
}
