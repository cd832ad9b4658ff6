//! Column layout resolution for imported spreadsheets.
//!
//! Headers are matched by name (lower-cased, trimmed); any of the ten
//! fields missing from the header row keeps its positional default, so a
//! headerless sheet in the canonical order still imports.

use crate::import::sheet::RawCell;

/// The ten import fields, in canonical column order (0..9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Registration,
    ProcessNumber,
    OpenedOn,
    ReturnedOn,
    Sector,
    Scholarship,
    Status,
    Subject,
    Notes,
}

const FIELDS: [Field; 10] = [
    Field::Name,
    Field::Registration,
    Field::ProcessNumber,
    Field::OpenedOn,
    Field::ReturnedOn,
    Field::Sector,
    Field::Scholarship,
    Field::Status,
    Field::Subject,
    Field::Notes,
];

fn header_name(field: Field) -> &'static str {
    match field {
        Field::Name => "nome",
        Field::Registration => "matrícula",
        Field::ProcessNumber => "nº processo",
        Field::OpenedOn => "data de abertura",
        Field::ReturnedOn => "data de retorno",
        Field::Sector => "setor",
        Field::Scholarship => "bolsa",
        Field::Status => "status",
        Field::Subject => "assunto",
        Field::Notes => "observações",
    }
}

/// Resolved column index per field.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    indices: [usize; 10],
}

impl ColumnMap {
    /// Match recognized header labels to their position; unrecognized
    /// headers are ignored, unmatched fields keep the positional default.
    pub fn resolve(header_row: &[RawCell]) -> Self {
        let mut indices: [usize; 10] = std::array::from_fn(|i| i);

        for (position, cell) in header_row.iter().enumerate() {
            let Some(label) = cell.as_text() else {
                continue;
            };
            let label = label.to_lowercase();
            for (slot, field) in FIELDS.iter().enumerate() {
                if label == header_name(*field) {
                    indices[slot] = position;
                }
            }
        }

        ColumnMap { indices }
    }

    /// The cell for `field` in `row`, or Empty when the row is short.
    pub fn cell<'a>(&self, row: &'a [RawCell], field: Field) -> &'a RawCell {
        let slot = FIELDS.iter().position(|f| *f == field).unwrap_or(0);
        row.get(self.indices[slot]).unwrap_or(&RawCell::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(labels: &[&str]) -> Vec<RawCell> {
        labels.iter().map(|l| RawCell::Text((*l).to_string())).collect()
    }

    #[test]
    fn canonical_header_maps_positionally() {
        let cols = ColumnMap::resolve(&header(&[
            "Nome",
            "Matrícula",
            "Nº Processo",
            "Data de Abertura",
            "Data de Retorno",
            "Setor",
            "Bolsa",
            "Status",
            "Assunto",
            "Observações",
        ]));
        assert_eq!(cols.indices, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn reordered_header_is_followed() {
        let cols = ColumnMap::resolve(&header(&["Status", "Nome", "Nº Processo"]));
        let row = vec![
            RawCell::Text("Concluído".into()),
            RawCell::Text("Ana".into()),
            RawCell::Text("P-001".into()),
        ];
        assert_eq!(
            cols.cell(&row, Field::Name).as_text().as_deref(),
            Some("Ana")
        );
        assert_eq!(
            cols.cell(&row, Field::ProcessNumber).as_text().as_deref(),
            Some("P-001")
        );
        assert_eq!(
            cols.cell(&row, Field::Status).as_text().as_deref(),
            Some("Concluído")
        );
    }

    #[test]
    fn unknown_headers_keep_positional_defaults() {
        let cols = ColumnMap::resolve(&header(&["Coluna A", "Coluna B"]));
        assert_eq!(cols.indices, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn empty_header_row_keeps_defaults() {
        let cols = ColumnMap::resolve(&[]);
        assert_eq!(cols.indices, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn short_rows_read_as_empty() {
        let cols = ColumnMap::resolve(&[]);
        let row = vec![RawCell::Text("Ana".into())];
        assert!(cols.cell(&row, Field::Notes).is_empty());
    }
}
