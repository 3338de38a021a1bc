pub mod loader;

use std::path::Path;

pub use loader::RawSheet;
use tracing::info;

use crate::core::{
    EntryId,
    FilterMode,
    LoadError,
    Status,
    StatusCounts,
    WordEntry,
};

pub const ENGLISH_COLUMN: &str = "English";
pub const TURKISH_COLUMN: &str = "Turkish";
pub const SENTENCE_COLUMN: &str = "Example Sentence";

const REQUIRED_COLUMNS: [&str; 3] = [ENGLISH_COLUMN, TURKISH_COLUMN, SENTENCE_COLUMN];

/// The words of one spreadsheet, in source order, each with its learning status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyTable {
    entries: Vec<WordEntry>,
}

impl VocabularyTable {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let table = Self::from_sheet(loader::read_sheet(path)?)?;
        info!(path = %path.display(), words = table.len(), "Loaded vocabulary");
        Ok(table)
    }

    pub fn from_sheet(sheet: RawSheet) -> Result<Self, LoadError> {
        let column_of =
            |name: &str| sheet.headers.iter().position(|header| header.as_str() == name);

        let positions = REQUIRED_COLUMNS.map(column_of);
        let [Some(english), Some(turkish), Some(sentence)] = positions else {
            let missing = REQUIRED_COLUMNS
                .iter()
                .zip(positions)
                .filter(|(_, position)| position.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
            return Err(LoadError::MissingColumns(missing));
        };

        let cell = |row: &[String], index: usize| row.get(index).cloned().unwrap_or_default();

        let entries = sheet
            .rows
            .iter()
            .filter(|row| row.iter().any(|value| !value.trim().is_empty()))
            .map(|row| WordEntry::new(cell(row, english), cell(row, turkish), cell(row, sentence)))
            .collect();

        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&WordEntry> {
        self.entries.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &WordEntry)> {
        self.entries.iter().enumerate().map(|(index, entry)| (EntryId(index), entry))
    }

    /// Ids of the entries eligible under `mode`, in table order.
    pub fn filtered(&self, mode: FilterMode) -> Vec<EntryId> {
        self.iter().filter(|(_, entry)| mode.matches(entry.status)).map(|(id, _)| id).collect()
    }

    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts { total: self.entries.len(), ..StatusCounts::default() };
        for entry in &self.entries {
            match entry.status {
                Status::Learned => counts.learned += 1,
                Status::Repeat => counts.repeat += 1,
                Status::NotLearned => counts.not_learned += 1,
            }
        }
        counts
    }

    pub fn english_with_status(&self, status: Status) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |entry| entry.status == status)
            .map(|entry| entry.english.as_str())
    }

    /// Only the session changes statuses.
    pub(crate) fn set_status(&mut self, id: EntryId, status: Status) -> bool {
        match self.entries.get_mut(id.0) {
            Some(entry) => {
                entry.status = status;
                true
            }
            None => false,
        }
    }
}
