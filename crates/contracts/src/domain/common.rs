use serde::{Deserialize, Serialize};

/// Identity document kind for adult profiles (therapists, legal guardians).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Dni,
    Ruc,
    Passport,
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Dni => "DNI",
            DocumentType::Ruc => "RUC",
            DocumentType::Passport => "PASSPORT",
            DocumentType::Other => "OTHER",
        }
    }
}

/// Full personal name split the way the upstream profile API stores it.
pub fn full_name(first_names: &str, paternal: &str, maternal: &str) -> String {
    format!("{} {} {}", first_names, paternal, maternal)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_type_serializes_uppercase() {
        let json = serde_json::to_string(&DocumentType::Passport).unwrap();
        assert_eq!(json, "\"PASSPORT\"");
        let back: DocumentType = serde_json::from_str("\"DNI\"").unwrap();
        assert_eq!(back, DocumentType::Dni);
    }

    #[test]
    fn full_name_collapses_blank_parts() {
        assert_eq!(full_name("Ana Sofía", "Rodríguez", ""), "Ana Sofía Rodríguez");
    }
}
