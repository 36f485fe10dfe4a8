//! Legal guardian ("legal responsible") fetches through the proxy.

use contracts::domain::legal_guardian::LegalGuardianProfile;
use contracts::shared::data_mode::{plan_fetch, FetchPlan};
use contracts::shared::error::FetchError;
use contracts::shared::paging::PagedResponse;
use gloo_timers::future::TimeoutFuture;

use crate::domain::legal_guardians::mock;
use crate::shared::api_utils::fetch_list;
use crate::shared::config::data_mode;

const API_ROUTE: &str = "/api/legal-guardians";
const MOCK_LATENCY_MS: u32 = 500;

pub async fn fetch_legal_guardians() -> Result<PagedResponse<LegalGuardianProfile>, FetchError> {
    match plan_fetch(data_mode()) {
        FetchPlan::UseMock => {
            log::info!("using mock data for legal guardians");
            Ok(mock_response().await)
        }
        FetchPlan::Remote { mock_on_failure } => {
            match fetch_list(API_ROUTE, normalize_envelope).await {
                Ok(resp) => Ok(resp),
                Err(e) if mock_on_failure => {
                    log::warn!(
                        "legal guardians fetch failed, falling back to mock data: {}",
                        e
                    );
                    Ok(mock_response().await)
                }
                Err(e) => Err(e),
            }
        }
    }
}

async fn mock_response() -> PagedResponse<LegalGuardianProfile> {
    TimeoutFuture::new(MOCK_LATENCY_MS).await;
    mock::legal_guardians_page()
}

/// The guardian envelope is the least settled of the profile family; the
/// backend has shipped several key names. Accept every observed variant
/// plus a bare array.
pub(crate) fn normalize_envelope(
    raw: serde_json::Value,
) -> Result<PagedResponse<LegalGuardianProfile>, FetchError> {
    const ENVELOPE_KEYS: [&str; 3] = ["legalResponsible", "legalResponsibles", "guardians"];

    let items = ENVELOPE_KEYS
        .iter()
        .find_map(|key| raw.get(*key).filter(|v| v.is_array()).cloned())
        .or_else(|| raw.is_array().then(|| raw.clone()));

    let Some(items) = items else {
        return Err(FetchError::Decode(
            "invalid response format for legal guardians".into(),
        ));
    };
    let guardians: Vec<LegalGuardianProfile> =
        serde_json::from_value(items).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(PagedResponse::single_page(guardians))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn guardian_json(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "firstNames": "Carmen Rosa",
            "paternalSurname": "Pérez",
            "maternalSurname": "González",
            "documentType": "DNI",
            "identityDocumentNumber": "18456723",
            "phone": "+51987123456",
            "email": "carmen.perez@gmail.com",
            "relationship": "Madre"
        })
    }

    #[test]
    fn accepts_every_observed_envelope_variant() {
        for key in ["legalResponsible", "legalResponsibles", "guardians"] {
            let resp = normalize_envelope(json!({ key: [guardian_json(1)] })).unwrap();
            assert_eq!(resp.items.len(), 1, "envelope key {key}");
        }
        let bare = normalize_envelope(json!([guardian_json(7)])).unwrap();
        assert_eq!(bare.items[0].id, 7);
    }

    #[test]
    fn rejects_non_array_envelopes() {
        let err = normalize_envelope(json!({"legalResponsible": {"id": 1}})).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
