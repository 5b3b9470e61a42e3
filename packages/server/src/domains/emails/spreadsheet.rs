//! Contact spreadsheets for bulk sends.
//!
//! `.csv` uploads are read with `csv`; anything else is opened as a workbook
//! (xlsx, xls, ods) with `calamine` and its first sheet is used. Headers are
//! trimmed and lowercased before matching.

use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use super::errors::EmailError;

/// Columns every contact spreadsheet must carry, checked in this order.
pub const REQUIRED_COLUMNS: [&str; 5] = ["firstname", "lastname", "email", "phone", "company"];

const EMAIL_COLUMN: &str = "email";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A header row plus data rows, every cell as text.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let headers = headers
            .into_iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        Self { headers, rows }
    }

    /// Parse an uploaded file, choosing the reader from its extension.
    pub fn from_upload(file_name: Option<&str>, bytes: &[u8]) -> Result<Self, EmailError> {
        let is_csv = file_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            Self::from_csv(bytes)
        } else {
            Self::from_workbook(bytes)
        }
    }

    pub fn from_csv(bytes: &[u8]) -> Result<Self, EmailError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers = reader
            .headers()
            .map_err(|e| EmailError::InvalidSpreadsheet(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let rows = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<Result<Vec<Vec<String>>, _>>()
            .map_err(|e| EmailError::InvalidSpreadsheet(e.to_string()))?;

        Ok(Self::new(headers, rows))
    }

    pub fn from_workbook(bytes: &[u8]) -> Result<Self, EmailError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| EmailError::InvalidSpreadsheet(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| EmailError::InvalidSpreadsheet("workbook has no sheets".into()))?
            .map_err(|e| EmailError::InvalidSpreadsheet(e.to_string()))?;

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());
        let headers = rows.next().unwrap_or_default();

        Ok(Self::new(headers, rows.collect()))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Fails on the first missing column, in the order given.
    pub fn require_columns(&self, required: &[&str]) -> Result<(), EmailError> {
        match required.iter().find(|col| self.column_index(col).is_none()) {
            Some(missing) => Err(EmailError::MissingColumn((*missing).to_string())),
            None => Ok(()),
        }
    }

    /// Email addresses of every row with a non-blank email cell, in row order.
    ///
    /// The whole sheet is rejected if any required column is missing.
    pub fn recipients(&self) -> Result<Vec<String>, EmailError> {
        self.require_columns(&REQUIRED_COLUMNS)?;

        let Some(email_col) = self.column_index(EMAIL_COLUMN) else {
            return Err(EmailError::MissingColumn(EMAIL_COLUMN.to_string()));
        };

        Ok(self
            .rows
            .iter()
            .filter_map(|row| row.get(email_col))
            .map(|cell| cell.trim())
            .filter(|email| !email.is_empty())
            .map(str::to_string)
            .collect())
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.is_nan() => String::new(),
        other => other.to_string(),
    }
}
