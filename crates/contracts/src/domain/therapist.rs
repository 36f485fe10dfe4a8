use serde::{Deserialize, Serialize};

use crate::domain::common::{full_name, DocumentType};
use crate::shared::list_cache::Keyed;

/// Therapist profile as returned by the upstream profiles API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapistProfile {
    pub id: i64,
    pub first_names: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    pub document_type: DocumentType,
    pub identity_document_number: String,
    pub phone: String,
    pub email: String,
    pub specialty_name: String,
    pub attention_place_address: String,
}

impl TherapistProfile {
    pub fn display_name(&self) -> String {
        full_name(
            &self.first_names,
            &self.paternal_surname,
            &self.maternal_surname,
        )
    }
}

impl Keyed for TherapistProfile {
    fn key(&self) -> i64 {
        self.id
    }
}
