//! Export pipeline: a filtered, sorted set of processes rendered as a
//! styled spreadsheet, delimited text, or a paginated PDF listing.
//!
//! Every format shares the same column order, cell values, and title line;
//! the format modules only differ in presentation.

pub mod csv;
pub mod pdf;
pub mod xlsx;

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::fields;
use crate::models::Process;

/// Query parameters accepted by list and export operations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportQuery {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub format: Option<String>,
}

/// Fixed export column order.
pub const COLUMNS: [&str; 10] = [
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
];

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// Cell values for one process, in [`COLUMNS`] order. Enumerated fields
/// render as display labels, null dates as empty strings.
pub fn row_values(process: &Process) -> [String; 10] {
    [
        process.name.clone(),
        process.registration.clone().unwrap_or_default(),
        process.process_number.clone(),
        format_date(process.opened_on),
        format_date(process.returned_on),
        fields::sector_label(process.sector.as_deref()).to_string(),
        fields::scholarship_label(process.scholarship.as_deref()).to_string(),
        fields::status_label(process.status.as_deref()).to_string(),
        process.subject.clone(),
        process.notes.clone(),
    ]
}

/// Sort in place by a recognized field; an unrecognized field leaves the
/// input order unchanged. Null dates sort last in either direction, the
/// same ordering the store applies with `NULLS LAST`.
pub fn sort_processes(processes: &mut [Process], sort: Option<&str>, direction: Option<&str>) {
    let descending = direction.is_some_and(|d| d.eq_ignore_ascii_case("desc"));
    match sort {
        Some("name") => processes.sort_by(|a, b| {
            let order = a.name.to_lowercase().cmp(&b.name.to_lowercase());
            if descending { order.reverse() } else { order }
        }),
        Some("opened_on") => {
            processes.sort_by(|a, b| date_order(a.opened_on, b.opened_on, descending));
        }
        Some("returned_on") => {
            processes.sort_by(|a, b| date_order(a.returned_on, b.returned_on, descending));
        }
        _ => {}
    }
}

fn date_order(a: Option<NaiveDate>, b: Option<NaiveDate>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            if descending {
                b.cmp(&a)
            } else {
                a.cmp(&b)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Human-readable title describing the table, the active filter, and the
/// sort. First content row of every export format.
pub fn title(table_name: &str, query: &ExportQuery) -> String {
    let mut title = format!("Processos - {table_name}");
    if let Some(q) = query.q.as_deref().filter(|q| !q.trim().is_empty()) {
        title.push_str(&format!(" | Filtro: \"{}\"", q.trim()));
    }
    if let Some(label) = query.sort.as_deref().and_then(fields::sort_field_label) {
        let direction = fields::sort_direction_label(query.direction.as_deref().unwrap_or("asc"));
        title.push_str(&format!(" | Ordenado por {label} ({direction})"));
    }
    title
}

/// `processos_{table_name}.{ext}`, with the name reduced to characters
/// safe inside a Content-Disposition header. Accented letters fold to
/// their ASCII base instead of disappearing into `_`.
pub fn attachment_filename(table_name: &str, extension: &str) -> String {
    let safe: String = table_name
        .to_lowercase()
        .chars()
        .map(fold_diacritic)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    let safe = if safe.is_empty() { "tabela".to_string() } else { safe };
    format!("processos_{safe}.{extension}")
}

/// Input is already lower-cased, so only lowercase accents appear here.
fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    use super::*;

    fn process(name: &str, number: &str, opened: Option<(i32, u32, u32)>) -> Process {
        Process {
            id: Uuid::now_v7(),
            table_id: None,
            name: name.to_string(),
            registration: None,
            process_number: number.to_string(),
            opened_on: opened.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            returned_on: None,
            sector: Some("CIC".to_string()),
            scholarship: Some("sim".to_string()),
            status: Some("em_andamento".to_string()),
            subject: "Assunto".to_string(),
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn row_values_use_display_labels_and_date_format() {
        let p = process("Ana", "P-001", Some((2025, 1, 15)));
        let row = row_values(&p);
        assert_eq!(row[0], "Ana");
        assert_eq!(row[2], "P-001");
        assert_eq!(row[3], "15/01/2025");
        assert_eq!(row[4], "");
        assert_eq!(row[5], "CIC");
        assert_eq!(row[6], "Sim");
        assert_eq!(row[7], "Em Andamento");
    }

    #[test]
    fn sort_by_opened_on_descending() {
        let mut processes = vec![
            process("A", "P-1", Some((2025, 1, 1))),
            process("B", "P-2", Some((2025, 3, 1))),
            process("C", "P-3", Some((2025, 2, 1))),
        ];
        sort_processes(&mut processes, Some("opened_on"), Some("desc"));
        let dates: Vec<_> = processes.iter().map(|p| p.opened_on).collect();
        let mut expected = dates.clone();
        expected.sort();
        expected.reverse();
        assert_eq!(dates, expected);
    }

    #[test]
    fn sort_by_name_is_case_insensitive() {
        let mut processes = vec![
            process("bruno", "P-1", None),
            process("Ana", "P-2", None),
        ];
        sort_processes(&mut processes, Some("name"), Some("asc"));
        assert_eq!(processes[0].name, "Ana");
    }

    #[test]
    fn null_dates_sort_last_in_both_directions() {
        let mut processes = vec![
            process("Sem data", "P-1", None),
            process("B", "P-2", Some((2025, 3, 1))),
            process("A", "P-3", Some((2025, 1, 1))),
        ];
        sort_processes(&mut processes, Some("opened_on"), Some("asc"));
        let numbers: Vec<_> = processes.iter().map(|p| p.process_number.as_str()).collect();
        assert_eq!(numbers, vec!["P-3", "P-2", "P-1"]);

        sort_processes(&mut processes, Some("opened_on"), Some("desc"));
        let numbers: Vec<_> = processes.iter().map(|p| p.process_number.as_str()).collect();
        assert_eq!(numbers, vec!["P-2", "P-3", "P-1"]);
    }

    #[test]
    fn unrecognized_sort_field_preserves_order() {
        let mut processes = vec![
            process("B", "P-1", None),
            process("A", "P-2", None),
        ];
        sort_processes(&mut processes, Some("created_at"), Some("asc"));
        assert_eq!(processes[0].process_number, "P-1");
        sort_processes(&mut processes, None, None);
        assert_eq!(processes[0].process_number, "P-1");
    }

    #[test]
    fn title_mentions_filter_and_sort() {
        let query = ExportQuery {
            q: Some("bolsa".to_string()),
            sort: Some("name".to_string()),
            direction: Some("asc".to_string()),
            format: None,
        };
        let t = title("Registros 2025", &query);
        assert!(t.contains("Registros 2025"));
        assert!(t.contains("Filtro: \"bolsa\""));
        assert!(t.contains("Ordenado por Nome (crescente)"));
    }

    #[test]
    fn title_without_filter_or_sort_is_plain() {
        let t = title("Registros", &ExportQuery::default());
        assert_eq!(t, "Processos - Registros");
    }

    #[test]
    fn filename_is_sanitized() {
        assert_eq!(
            attachment_filename("Registros de 2025!", "xlsx"),
            "processos_registros_de_2025.xlsx"
        );
        assert_eq!(attachment_filename("", "csv"), "processos_tabela.csv");
    }

    #[test]
    fn filename_folds_accented_letters() {
        assert_eq!(
            attachment_filename("Binários", "xlsx"),
            "processos_binarios.xlsx"
        );
        assert_eq!(
            attachment_filename("Relatório de Ações", "csv"),
            "processos_relatorio_de_acoes.csv"
        );
    }
}
