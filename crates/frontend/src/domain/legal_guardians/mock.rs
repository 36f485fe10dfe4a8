//! Canned legal guardian profiles for mock mode and dev fallback.

use contracts::domain::common::DocumentType;
use contracts::domain::legal_guardian::LegalGuardianProfile;
use contracts::shared::paging::PagedResponse;

pub fn legal_guardians_page() -> PagedResponse<LegalGuardianProfile> {
    PagedResponse::single_page(vec![
        LegalGuardianProfile {
            id: 1,
            first_names: "Carmen Rosa".into(),
            paternal_surname: "Pérez".into(),
            maternal_surname: "González".into(),
            document_type: DocumentType::Dni,
            identity_document_number: "18456723".into(),
            phone: "+51987123456".into(),
            email: "carmen.perez@gmail.com".into(),
            relationship: "Madre".into(),
        },
        LegalGuardianProfile {
            id: 2,
            first_names: "Roberto Carlos".into(),
            paternal_surname: "Jiménez".into(),
            maternal_surname: "Morales".into(),
            document_type: DocumentType::Dni,
            identity_document_number: "19567834".into(),
            phone: "+51976234567".into(),
            email: "roberto.jimenez@hotmail.com".into(),
            relationship: "Padre".into(),
        },
    ])
}
