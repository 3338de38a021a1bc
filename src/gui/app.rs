use std::path::Path;

use eframe::egui;
use tracing::{
    info,
    warn,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    error_modal::{
        ErrorData,
        ErrorModal,
    },
    info_modal::{
        InfoModal,
        InfoOutcome,
    },
    lists_window::ListsWindow,
    strings,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
    word_card::word_card,
};
use crate::{
    persistence::Settings,
    session::{
        Advance,
        Sampler,
        Session,
        SessionMode,
    },
    vocabulary::VocabularyTable,
};

pub type DynSession = Session<Box<dyn Sampler>>;

pub struct KelimeApp {
    session: DynSession,
    settings: Settings,
    theme: Theme,
    actions: ActionQueue,
    lists: ListsWindow,
    info: InfoModal,
    error: ErrorModal,
}

impl KelimeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, session: DynSession, settings: Settings) -> Self {
        let theme = Theme::default();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        cc.egui_ctx.set_zoom_factor(settings.zoom);

        let mut app = Self {
            session,
            settings,
            theme,
            actions: ActionQueue::new(),
            lists: ListsWindow::default(),
            info: InfoModal::new(),
            error: ErrorModal::new(),
        };
        app.start();
        app
    }

    fn start(&mut self) {
        let outcome = self.session.advance();
        self.handle_advance(outcome);
    }

    fn handle_advance(&mut self, outcome: Advance) {
        match outcome {
            Advance::Drawn(_) => {}
            Advance::NoWordsAvailable => self.info.show_info(strings::NO_WORDS_IN_CATEGORY),
            Advance::AllLearned => self.info.show_finished(strings::ALL_LEARNED),
        }
    }

    fn apply_actions(&mut self, ctx: &egui::Context) {
        let actions: Vec<UiAction> = self.actions.drain().collect();
        for action in actions {
            match action {
                UiAction::Reveal => {
                    if let Err(e) = self.session.reveal() {
                        warn!("Cannot reveal translation: {}", e);
                    }
                }
                UiAction::SetStatus(status) => match self.session.set_status(status) {
                    Ok(outcome) => self.handle_advance(outcome),
                    Err(e) => warn!("Cannot change status: {}", e),
                },
                UiAction::SetFilter(mode) => {
                    let outcome = self.session.set_filter(mode);
                    self.handle_advance(outcome);
                }
                UiAction::ToggleLists => self.lists.toggle(),
                UiAction::OpenFile(path) => self.open_file(&path),
                UiAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            }
        }
    }

    fn open_file(&mut self, path: &Path) {
        match VocabularyTable::load(path) {
            Ok(table) => {
                let outcome = self.session.reload(table);
                self.handle_advance(outcome);
            }
            Err(e) => {
                warn!(path = %path.display(), "Failed to load vocabulary: {}", e);
                self.error.show_error(ErrorData::from_load_error(path, &e));
            }
        }
    }

    /// Remembers theme and zoom changes made through egui's own controls.
    fn sync_settings(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.theme() == egui::Theme::Dark;
        let zoom = ctx.zoom_factor();
        if dark_mode != self.settings.dark_mode || (zoom - self.settings.zoom).abs() > f32::EPSILON
        {
            self.settings.dark_mode = dark_mode;
            self.settings.zoom = zoom;
            self.settings.save();
        }
    }
}

impl eframe::App for KelimeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let filter = match self.session.mode() {
            SessionMode::Browse => Some(self.session.filter()),
            SessionMode::Drill => None,
        };
        TopBar::show(ctx, filter, &mut self.actions);

        let progress = self.session.progress();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(30.0);
            ui.vertical_centered(|ui| {
                word_card(ui, self.session.card(), &progress, &self.theme, &mut self.actions);
            });
        });

        if self.lists.is_open() {
            let listing = self.session.listing();
            self.lists.show(ctx, &listing, &self.theme);
        }

        self.error.show(ctx);

        if let Some(InfoOutcome::EndSession) = self.info.show(ctx) {
            info!("Session finished");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        self.apply_actions(ctx);
        self.sync_settings(ctx);
    }
}
