//! Normalization of loosely-formatted spreadsheet values.
//!
//! Every function here is total: unrecognized input degrades to unset
//! (`None`) instead of failing, so a bad cell can never abort an import.

use chrono::NaiveDate;

use crate::fields::{ProcessStatus, Scholarship, Sector};
use crate::import::sheet::RawCell;

/// Ordered list of accepted textual date formats. First match wins.
const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%m/%d/%Y"];

pub fn sector(raw: &str) -> Option<Sector> {
    let value = raw.trim().to_uppercase();
    if value == "CIC" || value == Sector::CIC_FULL_NAME.to_uppercase() {
        Some(Sector::Cic)
    } else if value == "DPQ" || value == Sector::DPQ_FULL_NAME.to_uppercase() {
        Some(Sector::Dpq)
    } else {
        None
    }
}

pub fn scholarship(raw: &str) -> Option<Scholarship> {
    match raw.trim().to_uppercase().as_str() {
        "SIM" | "S" | "TRUE" | "1" => Some(Scholarship::Yes),
        "NÃO" | "NAO" | "N" | "FALSE" | "0" => Some(Scholarship::No),
        _ => None,
    }
}

/// Completed patterns are checked first, so a value matching both
/// ("concluído em andamento") resolves to completed.
pub fn status(raw: &str) -> Option<ProcessStatus> {
    let value = raw.trim().to_uppercase();
    if value.contains("CONCLU") || value == "FINALIZADO" {
        Some(ProcessStatus::Completed)
    } else if value.contains("ANDAMENTO") || value.contains("EM PROCESSO") || value.contains("ABERTO")
    {
        Some(ProcessStatus::InProgress)
    } else {
        None
    }
}

/// A native date cell passes through; text is tried against the accepted
/// formats in order. Anything else is unset.
pub fn date(raw: &RawCell) -> Option<NaiveDate> {
    match raw {
        RawCell::Date(d) => Some(*d),
        RawCell::Text(s) => {
            let s = s.trim();
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_accepts_codes_and_full_names() {
        for raw in ["CIC", "cic", " Cic ", "coordenação de iniciação científica"] {
            assert_eq!(sector(raw), Some(Sector::Cic), "raw = {raw:?}");
        }
        for raw in ["DPQ", "dpq", "Departamento de Pesquisa e Qualificação"] {
            assert_eq!(sector(raw), Some(Sector::Dpq), "raw = {raw:?}");
        }
    }

    #[test]
    fn sector_rejects_everything_else() {
        for raw in ["", "RH", "CICC", "setor"] {
            assert_eq!(sector(raw), None, "raw = {raw:?}");
        }
    }

    #[test]
    fn scholarship_yes_variants() {
        for raw in ["sim", "SIM", "S", "s", "true", "TRUE", "1"] {
            assert_eq!(scholarship(raw), Some(Scholarship::Yes), "raw = {raw:?}");
        }
    }

    #[test]
    fn scholarship_no_variants() {
        for raw in ["não", "NÃO", "nao", "N", "n", "false", "FALSE", "0"] {
            assert_eq!(scholarship(raw), Some(Scholarship::No), "raw = {raw:?}");
        }
    }

    #[test]
    fn scholarship_unset() {
        assert_eq!(scholarship(""), None);
        assert_eq!(scholarship("talvez"), None);
    }

    #[test]
    fn status_completed_variants() {
        for raw in ["Concluído", "CONCLUIDO", "concluso", "Finalizado"] {
            assert_eq!(status(raw), Some(ProcessStatus::Completed), "raw = {raw:?}");
        }
    }

    #[test]
    fn status_in_progress_variants() {
        for raw in ["Em andamento", "ANDAMENTO", "em processo", "Aberto"] {
            assert_eq!(status(raw), Some(ProcessStatus::InProgress), "raw = {raw:?}");
        }
    }

    #[test]
    fn status_completed_wins_over_in_progress() {
        assert_eq!(
            status("concluído, estava em andamento"),
            Some(ProcessStatus::Completed)
        );
    }

    #[test]
    fn status_unset() {
        assert_eq!(status(""), None);
        assert_eq!(status("pendente"), None);
    }

    #[test]
    fn date_native_cell_passes_through() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(date(&RawCell::Date(d)), Some(d));
    }

    #[test]
    fn date_text_formats() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(date(&RawCell::Text("15/01/2025".into())), Some(d));
        assert_eq!(date(&RawCell::Text("2025-01-15".into())), Some(d));
        assert_eq!(date(&RawCell::Text("15-01-2025".into())), Some(d));
        assert_eq!(date(&RawCell::Text("01/15/2025".into())), Some(d));
    }

    #[test]
    fn date_unparseable_is_none() {
        assert_eq!(date(&RawCell::Text("amanhã".into())), None);
        assert_eq!(date(&RawCell::Empty), None);
        assert_eq!(date(&RawCell::Number(45000.0)), None);
    }

    #[test]
    fn date_round_trips_display_format() {
        for (y, m, d) in [(1900, 1, 1), (1999, 12, 31), (2025, 2, 28), (2100, 6, 15)] {
            let day = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let text = day.format("%d/%m/%Y").to_string();
            assert_eq!(date(&RawCell::Text(text)), Some(day));
        }
    }
}
