//! Fixed interface text.

use crate::{
    core::{
        FilterMode,
        Status,
    },
    session::Progress,
};

pub const APP_TITLE: &str = "Word Learning App";

pub const FILTER_LABEL: &str = "Çalışma Modu:";
pub const SHOW_LISTS: &str = "Listeleri Göster";
pub const SHOW_TRANSLATION: &str = "Çeviriyi Göster";

pub const INFO_TITLE: &str = "Bilgi";
pub const NO_WORDS_IN_CATEGORY: &str = "Seçilen kategoride kelime yok";
pub const ALL_LEARNED: &str = "Tebrikler! Tüm kelimeleri öğrendiniz.";

pub const LISTS_TITLE: &str = "Kelime Listeleri";

pub const LOAD_ERROR_TITLE: &str = "Dosya yüklenemedi";

pub const MENU_FILE: &str = "Dosya";
pub const MENU_OPEN: &str = "Aç…";
pub const MENU_QUIT: &str = "Çıkış";

pub const SPREADSHEET_FILTER: &str = "Tablo dosyaları";

/// Label of the button that tags the current word.
pub fn status_button(status: Status) -> &'static str {
    match status {
        Status::Learned => "Öğrendim",
        Status::Repeat => "Tekrar et",
        Status::NotLearned => "Öğrenmedim",
    }
}

/// Heading of a column in the word lists window.
pub fn list_heading(status: Status) -> &'static str {
    match status {
        Status::Learned => "Öğrenilenler",
        Status::Repeat => "Tekrar",
        Status::NotLearned => "Öğrenilmedi",
    }
}

/// The selector shows the raw mode keys.
pub fn filter_label(mode: FilterMode) -> &'static str {
    mode.key()
}

pub fn progress_text(progress: &Progress) -> String {
    let counts = progress.counts;
    format!(
        "Öğrenilen: {}  Tekrar: {}  Öğrenilmedi: {}  (%{:.1} öğrenildi)",
        counts.learned, counts.repeat, counts.not_learned, progress.percent_learned
    )
}
