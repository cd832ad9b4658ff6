//! Pure per-row parsing. No I/O here: a row becomes a [`RowOutcome`] and
//! the pipeline decides what to do with it.

use crate::db::processes::NewProcess;
use crate::import::columns::{ColumnMap, Field};
use crate::import::sheet::RawCell;
use crate::normalize;

#[derive(Debug)]
pub enum RowOutcome {
    /// Empty name cell: a blank trailing row, skipped without counting.
    Blank,
    /// The row cannot become a process; counted as skipped with a message.
    Invalid(String),
    Parsed(NewProcess),
}

pub fn parse_row(cells: &[RawCell], cols: &ColumnMap) -> RowOutcome {
    let Some(name) = cols.cell(cells, Field::Name).as_text() else {
        return RowOutcome::Blank;
    };

    let Some(process_number) = cols.cell(cells, Field::ProcessNumber).as_text() else {
        return RowOutcome::Invalid("número de processo ausente.".to_string());
    };

    let text = |field: Field| cols.cell(cells, field).as_text();

    RowOutcome::Parsed(NewProcess {
        name,
        registration: text(Field::Registration),
        process_number,
        opened_on: normalize::date(cols.cell(cells, Field::OpenedOn)),
        returned_on: normalize::date(cols.cell(cells, Field::ReturnedOn)),
        sector: text(Field::Sector)
            .and_then(|s| normalize::sector(&s))
            .map(|s| s.as_str().to_string()),
        scholarship: text(Field::Scholarship)
            .and_then(|s| normalize::scholarship(&s))
            .map(|s| s.as_str().to_string()),
        status: text(Field::Status)
            .and_then(|s| normalize::status(&s))
            .map(|s| s.as_str().to_string()),
        subject: text(Field::Subject).unwrap_or_default(),
        notes: text(Field::Notes).unwrap_or_default(),
    })
}
