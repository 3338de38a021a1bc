use eframe::egui::{
    self,
    containers,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    strings,
    theme::PRIMARY_BUTTON,
    word_card::colored_button,
};
use crate::core::FilterMode;

const SPREADSHEET_EXTENSIONS: [&str; 6] = ["xlsx", "xlsm", "xlsb", "xls", "ods", "csv"];

pub struct TopBar;

impl TopBar {
    /// `filter` is `None` when the session does not offer filtering.
    pub fn show(ctx: &egui::Context, filter: Option<FilterMode>, actions: &mut ActionQueue) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button(strings::MENU_FILE, |ui| {
                    if ui.button(strings::MENU_OPEN).clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter(strings::SPREADSHEET_FILTER, &SPREADSHEET_EXTENSIONS)
                            .pick_file()
                        {
                            actions.push(UiAction::OpenFile(path));
                        }
                    }
                    if ui.button(strings::MENU_QUIT).clicked() {
                        actions.push(UiAction::Quit);
                    }
                });

                if let Some(current) = filter {
                    ui.add_space(16.0);
                    Self::show_filter(ui, current, actions);
                }
            });
        });
    }

    fn show_filter(ui: &mut egui::Ui, current: FilterMode, actions: &mut ActionQueue) {
        ui.label(strings::FILTER_LABEL);

        // choosing the active mode again still draws a new word
        egui::ComboBox::from_id_salt("filter_mode")
            .selected_text(strings::filter_label(current))
            .width(120.0)
            .show_ui(ui, |ui| {
                for mode in FilterMode::SELECTABLE {
                    if ui.selectable_label(mode == current, strings::filter_label(mode)).clicked() {
                        actions.push(UiAction::SetFilter(mode));
                    }
                }
            });

        if colored_button(ui, strings::SHOW_LISTS, PRIMARY_BUTTON, true).clicked() {
            actions.push(UiAction::ToggleLists);
        }
    }
}
