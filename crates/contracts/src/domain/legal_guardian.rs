use serde::{Deserialize, Serialize};

use crate::domain::common::{full_name, DocumentType};
use crate::shared::list_cache::Keyed;

/// Legal guardian profile ("legal responsible" in the upstream API).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalGuardianProfile {
    pub id: i64,
    pub first_names: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    pub document_type: DocumentType,
    pub identity_document_number: String,
    pub phone: String,
    pub email: String,
    /// Relationship to the patient, free text ("Madre", "Padre", ...).
    pub relationship: String,
}

impl LegalGuardianProfile {
    pub fn display_name(&self) -> String {
        full_name(
            &self.first_names,
            &self.paternal_surname,
            &self.maternal_surname,
        )
    }
}

impl Keyed for LegalGuardianProfile {
    fn key(&self) -> i64 {
        self.id
    }
}
