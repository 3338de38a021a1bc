use std::path::Path;

use eframe::egui;

use super::strings;
use crate::core::LoadError;

#[derive(Default, Clone)]
pub struct ErrorData {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

impl ErrorData {
    pub fn from_load_error(path: &Path, error: &LoadError) -> Self {
        let details = match error {
            LoadError::MissingColumns(columns) => Some(columns.join("\n")),
            LoadError::Io(_) | LoadError::Spreadsheet(_) | LoadError::Csv(_) => {
                Some(format!("{error:?}"))
            }
            LoadError::UnsupportedFileType(_) | LoadError::EmptySheet => None,
        };

        Self {
            title: strings::LOAD_ERROR_TITLE.to_string(),
            message: format!("{}: {}", path.display(), error),
            details,
        }
    }
}

/// Shown when a spreadsheet picked from the menu cannot be used; the running session stays.
pub struct ErrorModal {
    open: bool,
    data: ErrorData,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self { open: false, data: ErrorData::default() }
    }

    pub fn show_error(&mut self, data: ErrorData) {
        self.data = data;
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        if self.open {
            let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
                ui.set_width(450.0);

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("⚠").size(24.0).color(egui::Color32::RED));
                    ui.label(egui::RichText::new(&self.data.title).size(18.0).strong());
                });

                ui.add_space(10.0);

                ui.label(egui::RichText::new(&self.data.message).size(14.0));

                if let Some(details) = &self.data.details {
                    ui.add_space(10.0);
                    ui.collapsing("Ayrıntılar", |ui| {
                        ui.add(
                            egui::TextEdit::multiline(&mut details.as_str())
                                .desired_width(f32::INFINITY)
                                .desired_rows(4)
                                .code_editor(),
                        );
                    });
                };

                ui.add_space(15.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        ui.close();
                    }
                });
            });

            if modal.should_close() {
                self.open = false;
                self.data = ErrorData::default();
                return true;
            }
        }

        false
    }
}

impl Default for ErrorModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_are_listed_in_details() {
        let error = LoadError::MissingColumns(vec!["Turkish".into(), "English".into()]);
        let data = ErrorData::from_load_error(Path::new("words.xlsx"), &error);

        assert_eq!(data.title, strings::LOAD_ERROR_TITLE);
        assert!(data.message.starts_with("words.xlsx: Missing columns"));
        assert_eq!(data.details.as_deref(), Some("Turkish\nEnglish"));
    }

    #[test]
    fn test_unsupported_type_has_no_details() {
        let error = LoadError::UnsupportedFileType("notes.txt".into());
        let data = ErrorData::from_load_error(Path::new("notes.txt"), &error);
        assert!(data.details.is_none());
    }
}
