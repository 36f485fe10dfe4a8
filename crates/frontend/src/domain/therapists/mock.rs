//! Canned therapist profiles for mock mode and dev fallback.

use contracts::domain::common::DocumentType;
use contracts::domain::therapist::TherapistProfile;
use contracts::shared::paging::PagedResponse;

pub fn therapists_page() -> PagedResponse<TherapistProfile> {
    PagedResponse::single_page(vec![
        TherapistProfile {
            id: 1,
            first_names: "Ana Sofía".into(),
            paternal_surname: "Rodríguez".into(),
            maternal_surname: "Martínez".into(),
            document_type: DocumentType::Dni,
            identity_document_number: "25468731".into(),
            phone: "+51987654321".into(),
            email: "ana.rodriguez@terapiaclinica.com".into(),
            specialty_name: "Psicología Clínica".into(),
            attention_place_address: "Centro de Salud Mental, Av. Arequipa 1245, Miraflores, Lima"
                .into(),
        },
        TherapistProfile {
            id: 2,
            first_names: "Carlos Eduardo".into(),
            paternal_surname: "García".into(),
            maternal_surname: "López".into(),
            document_type: DocumentType::Dni,
            identity_document_number: "26589473".into(),
            phone: "+51965432187".into(),
            email: "carlos.garcia@infancia.com".into(),
            specialty_name: "Psicología Infantil".into(),
            attention_place_address: "Clínica Pediátrica San Juan, Av. Brasil 567, Magdalena, Lima"
                .into(),
        },
    ])
}
