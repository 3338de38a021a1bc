use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

use crate::core::Status;

/// Fill colors of a solid action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonColors {
    pub fill: Color32,
    pub hover: Color32,
}

impl ButtonColors {
    const fn rgb(fill: [u8; 3], hover: [u8; 3]) -> Self {
        Self {
            fill: Color32::from_rgb(fill[0], fill[1], fill[2]),
            hover: Color32::from_rgb(hover[0], hover[1], hover[2]),
        }
    }
}

pub const PRIMARY_BUTTON: ButtonColors = ButtonColors::rgb([0x00, 0x7b, 0xff], [0x00, 0x69, 0xd9]);
const LEARNED_BUTTON: ButtonColors = ButtonColors::rgb([0x28, 0xa7, 0x45], [0x21, 0x88, 0x38]);
const REPEAT_BUTTON: ButtonColors = ButtonColors::rgb([0xff, 0xc1, 0x07], [0xe0, 0xa8, 0x00]);
const NOT_LEARNED_BUTTON: ButtonColors = ButtonColors::rgb([0xdc, 0x35, 0x45], [0xc8, 0x23, 0x33]);

pub fn status_button_colors(status: Status) -> ButtonColors {
    match status {
        Status::Learned => LEARNED_BUTTON,
        Status::Repeat => REPEAT_BUTTON,
        Status::NotLearned => NOT_LEARNED_BUTTON,
    }
}

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: ThemeDetails::dracula(), light: ThemeDetails::paper() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn word(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).size(28.0).strong().color(self.details(ctx).foreground)
    }

    pub fn translation(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).size(16.0).italics().color(self.details(ctx).translation)
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).strong().color(self.details(ctx).purple)
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).comment
    }

    pub fn card_fill(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background_lighter
    }

    pub fn card_border(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background_darker
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    purple: Color32,
    cyan: Color32,
    translation: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            translation: Color32::from_rgb(139, 233, 253),
            background_darker: Color32::from_rgb(25, 26, 33),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
            background_lighter: Color32::from_rgb(66, 69, 80),
        }
    }

    // Light card on a grey page
    fn paper() -> Self {
        Self {
            background: Color32::from_rgb(0xf8, 0xf9, 0xfa),
            foreground: Color32::from_rgb(0x33, 0x33, 0x33),
            selection: Color32::from_rgb(200, 215, 235),
            comment: Color32::from_rgb(110, 117, 125),
            red: Color32::from_rgb(0xdc, 0x35, 0x45),
            orange: Color32::from_rgb(220, 140, 60),
            purple: Color32::from_rgb(120, 90, 190),
            cyan: Color32::from_rgb(0x00, 0x7b, 0xff),
            translation: Color32::from_rgb(0x00, 0x33, 0x66),
            background_darker: Color32::from_rgb(0xd0, 0xd2, 0xd4),
            background_dark: Color32::from_rgb(0xf8, 0xf9, 0xfa),
            background_light: Color32::from_rgb(0xe9, 0xec, 0xef),
            background_lighter: Color32::from_rgb(255, 255, 255),
        }
    }
}

/// Registers both variants; `ctx.set_theme` picks the active one.
pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let widget = |base: WidgetVisuals, bg_fill: Color32, stroke: Color32| WidgetVisuals {
        bg_fill,
        weak_bg_fill: theme.background_light,
        bg_stroke: Stroke { color: stroke, ..base.bg_stroke },
        fg_stroke: Stroke { color: theme.foreground, ..base.fg_stroke },
        ..base
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    default.widgets.noninteractive,
                    theme.background,
                    theme.background_dark,
                ),
                inactive: widget(
                    default.widgets.inactive,
                    theme.background_light,
                    theme.background_dark,
                ),
                hovered: widget(default.widgets.hovered, theme.selection, theme.cyan),
                active: widget(default.widgets.active, theme.selection, theme.cyan),
                open: widget(default.widgets.open, theme.background_dark, theme.purple),
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.cyan,
            faint_bg_color: match is_dark {
                true => theme.background_darker,
                false => theme.background_light,
            },
            extreme_bg_color: theme.background_darker,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background_dark,
            popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
            ..default
        },
    );
}
