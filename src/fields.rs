//! Canonical enumerated fields of a process and their display labels.
//!
//! Both the import normalizer and the exporters consult this module, so a
//! storage code, its label, and its accepted spellings live in one place.

/// Originating sector of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sector {
    Cic,
    Dpq,
}

impl Sector {
    pub const CIC_FULL_NAME: &'static str = "Coordenação de Iniciação Científica";
    pub const DPQ_FULL_NAME: &'static str = "Departamento de Pesquisa e Qualificação";

    /// Storage code, as written to the `processes.sector` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Sector::Cic => "CIC",
            Sector::Dpq => "DPQ",
        }
    }

    pub fn label(self) -> &'static str {
        self.as_str()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CIC" => Some(Sector::Cic),
            "DPQ" => Some(Sector::Dpq),
            _ => None,
        }
    }
}

/// Tri-state scholarship flag ("bolsa"); `None` at the column level means unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scholarship {
    Yes,
    No,
}

impl Scholarship {
    pub fn as_str(self) -> &'static str {
        match self {
            Scholarship::Yes => "sim",
            Scholarship::No => "nao",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scholarship::Yes => "Sim",
            Scholarship::No => "Não",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "sim" => Some(Scholarship::Yes),
            "nao" => Some(Scholarship::No),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    InProgress,
    Completed,
}

impl ProcessStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessStatus::InProgress => "em_andamento",
            ProcessStatus::Completed => "concluido",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProcessStatus::InProgress => "Em Andamento",
            ProcessStatus::Completed => "Concluído",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "em_andamento" => Some(ProcessStatus::InProgress),
            "concluido" => Some(ProcessStatus::Completed),
            _ => None,
        }
    }
}

/// Display label for a stored sector code; unknown or unset renders empty.
pub fn sector_label(code: Option<&str>) -> &'static str {
    code.and_then(Sector::from_code).map_or("", Sector::label)
}

pub fn scholarship_label(code: Option<&str>) -> &'static str {
    code.and_then(Scholarship::from_code)
        .map_or("", Scholarship::label)
}

pub fn status_label(code: Option<&str>) -> &'static str {
    code.and_then(ProcessStatus::from_code)
        .map_or("", ProcessStatus::label)
}

/// Friendly label for a sortable field name, used in export titles.
pub fn sort_field_label(field: &str) -> Option<&'static str> {
    match field {
        "name" => Some("Nome"),
        "opened_on" => Some("Data de Abertura"),
        "returned_on" => Some("Data de Retorno"),
        _ => None,
    }
}

pub fn sort_direction_label(direction: &str) -> &'static str {
    if direction.eq_ignore_ascii_case("desc") {
        "decrescente"
    } else {
        "crescente"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for s in [Sector::Cic, Sector::Dpq] {
            assert_eq!(Sector::from_code(s.as_str()), Some(s));
        }
        for s in [Scholarship::Yes, Scholarship::No] {
            assert_eq!(Scholarship::from_code(s.as_str()), Some(s));
        }
        for s in [ProcessStatus::InProgress, ProcessStatus::Completed] {
            assert_eq!(ProcessStatus::from_code(s.as_str()), Some(s));
        }
    }

    #[test]
    fn labels_for_unset_are_empty() {
        assert_eq!(sector_label(None), "");
        assert_eq!(scholarship_label(Some("talvez")), "");
        assert_eq!(status_label(None), "");
    }

    #[test]
    fn sort_labels() {
        assert_eq!(sort_field_label("name"), Some("Nome"));
        assert_eq!(sort_field_label("created_at"), None);
        assert_eq!(sort_direction_label("asc"), "crescente");
        assert_eq!(sort_direction_label("DESC"), "decrescente");
    }
}
