use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Missing columns in spreadsheet: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Failed to load unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("The spreadsheet has no header row")]
    EmptySheet,

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(Box<calamine::Error>),

    #[error("CSV error: {0}")]
    Csv(Box<csv::Error>),
}

impl LoadError {
    /// Names of the required columns the source lacks, if that is why loading failed.
    pub fn missing_columns(&self) -> Option<&[String]> {
        match self {
            LoadError::MissingColumns(columns) => Some(columns),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(error: std::io::Error) -> Self {
        LoadError::Io(Box::new(error))
    }
}

impl From<calamine::Error> for LoadError {
    fn from(error: calamine::Error) -> Self {
        LoadError::Spreadsheet(Box::new(error))
    }
}

impl From<csv::Error> for LoadError {
    fn from(error: csv::Error) -> Self {
        LoadError::Csv(Box::new(error))
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("No word is currently selected")]
    NoCurrentEntry,
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
