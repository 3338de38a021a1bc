use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    strings,
    theme::Theme,
};
use crate::{
    core::Status,
    session::StatusListing,
};

const COLUMN_ORDER: [Status; 3] = [Status::Learned, Status::Repeat, Status::NotLearned];

/// Side window with the English terms of each status in its own column.
#[derive(Default)]
pub struct ListsWindow {
    open: bool,
}

impl ListsWindow {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context, listing: &StatusListing, theme: &Theme) {
        if !self.open {
            return;
        }

        egui::Window::new(strings::LISTS_TITLE)
            .open(&mut self.open)
            .resizable(true)
            .default_size(egui::vec2(600.0, 360.0))
            .show(ctx, |ui| {
                let row_height = egui::TextStyle::Body
                    .resolve(ui.style())
                    .size
                    .max(ui.spacing().interact_size.y);
                let rows = COLUMN_ORDER
                    .iter()
                    .map(|status| listing.column(*status).len())
                    .max()
                    .unwrap_or(0);

                TableBuilder::new(ui)
                    .striped(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .columns(Column::remainder().at_least(150.0), COLUMN_ORDER.len())
                    .header(25.0, |mut header| {
                        for status in COLUMN_ORDER {
                            header.col(|ui| {
                                ui.label(theme.heading(ui.ctx(), strings::list_heading(status)));
                            });
                        }
                    })
                    .body(|body| {
                        body.rows(row_height, rows, |mut row| {
                            let index = row.index();
                            for status in COLUMN_ORDER {
                                row.col(|ui| {
                                    if let Some(word) = listing.column(status).get(index) {
                                        ui.label(word);
                                    }
                                });
                            }
                        });
                    });
            });
    }
}
