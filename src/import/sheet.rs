//! Workbook parsing: calamine cells reduced to the handful of shapes the
//! pipeline cares about.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use chrono::NaiveDate;

/// A spreadsheet cell after shedding calamine specifics.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Bool(bool),
}

impl RawCell {
    /// Trimmed textual view of the cell; `None` for empty cells. Numbers
    /// with no fractional part render without the trailing `.0` so a
    /// numeric process number survives the trip through a spreadsheet.
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawCell::Empty => None,
            RawCell::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else {
                    Some(s.to_string())
                }
            }
            RawCell::Number(n) => {
                if n.fract() == 0.0 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(n.to_string())
                }
            }
            RawCell::Date(d) => Some(d.format("%d/%m/%Y").to_string()),
            RawCell::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().is_none()
    }
}

impl From<&Data> for RawCell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => RawCell::Empty,
            Data::String(s) => RawCell::Text(s.clone()),
            Data::Int(i) => RawCell::Number(*i as f64),
            Data::Float(f) => RawCell::Number(*f),
            Data::Bool(b) => RawCell::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(ndt) => RawCell::Date(ndt.date()),
                None => RawCell::Empty,
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        }
    }
}

#[derive(Debug)]
pub struct SheetError(String);

impl std::fmt::Display for SheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Não foi possível ler a planilha: {}", self.0)
    }
}

impl std::error::Error for SheetError {}

/// Parse the first worksheet of an .xlsx document into a row matrix.
pub fn read_rows(bytes: &[u8]) -> Result<Vec<Vec<RawCell>>, SheetError> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| SheetError(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetError("documento sem planilhas".to_string()))?
        .map_err(|e| SheetError(e.to_string()))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(RawCell::from).collect())
        .collect())
}
