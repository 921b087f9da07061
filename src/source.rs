//! Where the names to look up come from: a single pair from the command
//! line, or the rows of a spreadsheet.

use crate::entry::NamePair;
use crate::error::SleuthError;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const FIRST_NAME_COLUMN: &str = "First Name";
pub const LAST_NAME_COLUMN: &str = "Last Name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Literal(NamePair),
    Tabular(PathBuf),
}

impl InputSource {
    /// Select the input from the command line values. A spreadsheet and a
    /// first name are mutually exclusive, and a first name needs a last name.
    pub fn from_args(
        excel_file: Option<PathBuf>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Self, SleuthError> {
        match (excel_file, first_name, last_name) {
            (Some(_), Some(_), _) => Err(SleuthError::Usage(
                "--excel-file and --fn can not be used together".to_string(),
            )),
            (Some(path), None, _) => Ok(InputSource::Tabular(path)),
            (None, Some(first), Some(last)) => Ok(InputSource::Literal(NamePair::new(first, last))),
            (None, Some(_), None) => Err(SleuthError::Usage(
                "--ln (last name) is required when using --fn".to_string(),
            )),
            (None, None, _) => Err(SleuthError::Usage(
                "one of --excel-file or --fn is required".to_string(),
            )),
        }
    }

    /// Produce the pairs to look up, in input order.
    pub fn pairs(&self) -> Result<Vec<NamePair>, SleuthError> {
        match self {
            InputSource::Literal(pair) => Ok(vec![pair.clone()]),
            InputSource::Tabular(path) => read_table(path),
        }
    }
}

pub fn read_table(path: &Path) -> Result<Vec<NamePair>, SleuthError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let rows = match ext.as_deref() {
        Some("csv") => read_csv_rows(path)?,
        Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => {
            read_workbook_rows(path)?
        }
        _ => {
            return Err(SleuthError::FileRead(format!(
                "{} is not a supported spreadsheet (csv, xlsx, xlsm, xlsb, xls, ods)",
                path.display()
            )))
        }
    };

    let pairs = pairs_from_rows(rows)?;
    debug!(path = %path.display(), rows = pairs.len(), "Read name table");
    Ok(pairs)
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>, SleuthError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| SleuthError::FileRead(e.to_string()))?;

    reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect())
                .map_err(|e| SleuthError::FileRead(e.to_string()))
        })
        .collect()
}

fn read_workbook_rows(path: &Path) -> Result<Vec<Vec<String>>, SleuthError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| SleuthError::FileRead(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            SleuthError::FileRead(format!("{} contains no worksheets", path.display()))
        })?
        .map_err(|e| SleuthError::FileRead(e.to_string()))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect())
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn column_index(header: &[String], name: &str) -> Result<usize, SleuthError> {
    header
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| SleuthError::FileRead(format!("missing required column '{}'", name)))
}

/// The first row names the columns. Rows with only some values missing are
/// kept as they are. Wholly blank rows are dropped, the same way spreadsheet
/// readers skip blank lines.
pub fn pairs_from_rows(rows: Vec<Vec<String>>) -> Result<Vec<NamePair>, SleuthError> {
    let mut rows = rows.into_iter();
    let header = rows
        .next()
        .ok_or_else(|| SleuthError::FileRead("the file has no header row".to_string()))?;

    let first_idx = column_index(&header, FIRST_NAME_COLUMN)?;
    let last_idx = column_index(&header, LAST_NAME_COLUMN)?;

    let cell = |row: &[String], idx: usize| row.get(idx).cloned().unwrap_or_default();

    Ok(rows
        .filter(|row| row.iter().any(|c| !c.is_empty()))
        .map(|row| NamePair::new(cell(&row, first_idx), cell(&row, last_idx)))
        .collect())
}
