use std::path::Path;

use calamine::{
    open_workbook_auto,
    Data,
    Reader,
};

use crate::core::LoadError;

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Header row plus data rows, every cell already rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawSheet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }
}

pub fn read_sheet(path: &Path) -> Result<RawSheet, LoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => read_csv(path),
        ext if SPREADSHEET_EXTENSIONS.contains(&ext) => read_workbook(path),
        _ => Err(LoadError::UnsupportedFileType(path.display().to_string())),
    }
}

/// Reads the first worksheet of an Excel or OpenDocument file.
fn read_workbook(path: &Path) -> Result<RawSheet, LoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or(LoadError::EmptySheet)??;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_text).collect(),
        None => return Err(LoadError::EmptySheet),
    };
    let rows = rows.map(|row| row.iter().map(cell_text).collect()).collect();

    Ok(RawSheet { headers, rows })
}

fn read_csv(path: &Path) -> Result<RawSheet, LoadError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(LoadError::EmptySheet);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawSheet { headers, rows })
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}
