use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::shared::list_cache::Keyed;

/// Patient lifecycle status, driven by the status tabs on the filiation
/// files page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PatientStatus {
    Active,
    Inactive,
    Archived,
}

impl PatientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Active => "ACTIVE",
            PatientStatus::Inactive => "INACTIVE",
            PatientStatus::Archived => "ARCHIVED",
        }
    }

    pub fn all() -> [PatientStatus; 3] {
        [
            PatientStatus::Active,
            PatientStatus::Inactive,
            PatientStatus::Archived,
        ]
    }
}

/// Document kinds accepted on patient filiation files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PatientDocumentType {
    Dni,
    Ce,
}

impl PatientDocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientDocumentType::Dni => "DNI",
            PatientDocumentType::Ce => "CE",
        }
    }
}

/// One row of the patients summary list as the upstream profile API
/// returns it. `legalResponsible*` is the upstream naming for what the UI
/// calls the legal guardian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub id: i64,
    pub status: PatientStatus,
    pub name: String,
    pub document_type: PatientDocumentType,
    pub document_number: String,
    #[serde(rename = "legalResponsible")]
    pub legal_guardian_name: String,
    #[serde(rename = "legalResponsiblePhone")]
    pub legal_guardian_phone: String,
    #[serde(rename = "scheduledAt")]
    pub initial_assessment_date: NaiveDateTime,
}

impl Keyed for PatientSummary {
    fn key(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_upstream_wire_shape() {
        let raw = r#"{
            "id": 1,
            "status": "ACTIVE",
            "name": "Juan Carlos Perez Gomez",
            "documentType": "DNI",
            "documentNumber": "12345678",
            "legalResponsible": "Maria Luisa Gomez Torres",
            "legalResponsiblePhone": "988776655",
            "scheduledAt": "2024-11-15T10:30:00"
        }"#;
        let p: PatientSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(p.id, 1);
        assert_eq!(p.status, PatientStatus::Active);
        assert_eq!(p.legal_guardian_name, "Maria Luisa Gomez Torres");
        assert_eq!(p.initial_assessment_date.to_string(), "2024-11-15 10:30:00");
    }
}
