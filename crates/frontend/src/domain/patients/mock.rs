//! Canned patient summaries used when mock mode is active or a dev-build
//! fetch fails. The dataset is fixed so fallback responses are
//! reproducible.

use chrono::NaiveDate;
use contracts::domain::patient::{PatientDocumentType, PatientStatus, PatientSummary};
use contracts::shared::paging::PagedResponse;

pub fn patients_page() -> PagedResponse<PatientSummary> {
    let patients = vec![
        PatientSummary {
            id: 1,
            status: PatientStatus::Active,
            name: "Juan Carlos Perez Gomez".into(),
            document_type: PatientDocumentType::Dni,
            document_number: "12345678".into(),
            legal_guardian_name: "Maria Luisa Gomez Torres".into(),
            legal_guardian_phone: "988776655".into(),
            initial_assessment_date: assessment_at(2024, 11, 15, 10, 30),
        },
        PatientSummary {
            id: 2,
            status: PatientStatus::Inactive,
            name: "Ana Sofia Rodriguez Martinez".into(),
            document_type: PatientDocumentType::Dni,
            document_number: "87654321".into(),
            legal_guardian_name: "Carlos Rodriguez Sanchez".into(),
            legal_guardian_phone: "977554433".into(),
            initial_assessment_date: assessment_at(2024, 11, 16, 14, 15),
        },
        PatientSummary {
            id: 3,
            status: PatientStatus::Archived,
            name: "Luis Fernando Castro Vega".into(),
            document_type: PatientDocumentType::Ce,
            document_number: "CE123456789".into(),
            legal_guardian_name: "Juan Carlos Bodoque".into(),
            legal_guardian_phone: "123654123".into(),
            initial_assessment_date: assessment_at(2024, 11, 16, 14, 15),
        },
    ];

    PagedResponse {
        total_results: patients.len() as u64,
        current_page: 1,
        max_page: 1,
        items: patients,
    }
}

fn assessment_at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap_or_default()
}
