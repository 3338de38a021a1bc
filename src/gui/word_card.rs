use eframe::egui::{
    self,
    Color32,
    Response,
    RichText,
    Ui,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    strings,
    theme::{
        status_button_colors,
        ButtonColors,
        Theme,
        PRIMARY_BUTTON,
    },
};
use crate::{
    core::Status,
    session::{
        CardView,
        Progress,
    },
};

const WRAP_WIDTH: f32 = 400.0;
const BUTTON_ORDER: [Status; 3] = [Status::Learned, Status::Repeat, Status::NotLearned];

pub fn word_card(
    ui: &mut Ui,
    card: Option<CardView<'_>>,
    progress: &Progress,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    let ctx = ui.ctx().clone();

    egui::Frame::new()
        .fill(theme.card_fill(&ctx))
        .stroke(egui::Stroke::new(2.0, theme.card_border(&ctx)))
        .corner_radius(8.0)
        .inner_margin(20.0)
        .show(ui, |ui| {
            ui.set_max_width(WRAP_WIDTH + 120.0);
            ui.vertical_centered(|ui| {
                match card {
                    Some(card) => {
                        ui.label(theme.word(&ctx, card.english));
                        ui.add_space(10.0);
                        ui.add(
                            egui::Label::new(RichText::new(card.example_sentence).size(16.0))
                                .wrap(),
                        );
                        ui.add_space(5.0);
                        // keeps the layout still while the translation is hidden
                        let translation = card.translation.unwrap_or(" ");
                        ui.add(egui::Label::new(theme.translation(&ctx, translation)).wrap());
                    }
                    None => {
                        ui.label(
                            RichText::new(strings::NO_WORDS_IN_CATEGORY)
                                .size(16.0)
                                .color(theme.muted(&ctx)),
                        );
                    }
                }

                ui.add_space(10.0);
                ui.label(RichText::new(strings::progress_text(progress)).monospace().strong());
                ui.add(
                    egui::ProgressBar::new((progress.percent_learned / 100.0) as f32)
                        .desired_width(300.0),
                );
                ui.add_space(10.0);

                let has_card = card.is_some();
                ui.horizontal(|ui| {
                    if colored_button(ui, strings::SHOW_TRANSLATION, PRIMARY_BUTTON, has_card)
                        .clicked()
                    {
                        actions.push(UiAction::Reveal);
                    }
                    for status in BUTTON_ORDER {
                        let label = strings::status_button(status);
                        if colored_button(ui, label, status_button_colors(status), has_card)
                            .clicked()
                        {
                            actions.push(UiAction::SetStatus(status));
                        }
                    }
                });
            });
        });
}

/// A solid button that darkens while the pointer is over it.
pub fn colored_button(ui: &mut Ui, text: &str, colors: ButtonColors, enabled: bool) -> Response {
    let id = ui.id().with(("colored_button", text));
    let hovered = ui.ctx().data_mut(|data| data.get_temp::<bool>(id)).unwrap_or(false);

    let button = egui::Button::new(RichText::new(text).strong().color(Color32::WHITE))
        .fill(if hovered { colors.hover } else { colors.fill })
        .min_size(egui::vec2(110.0, 34.0));
    let response = ui.add_enabled(enabled, button);

    let now_hovered = response.hovered();
    if now_hovered != hovered {
        ui.ctx().data_mut(|data| data.insert_temp(id, now_hovered));
        ui.ctx().request_repaint();
    }
    response
}
