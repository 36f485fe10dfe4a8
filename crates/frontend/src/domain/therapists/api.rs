//! Therapist profile fetches through the same-origin proxy.

use contracts::domain::therapist::TherapistProfile;
use contracts::shared::data_mode::{plan_fetch, FetchPlan};
use contracts::shared::error::FetchError;
use contracts::shared::paging::PagedResponse;
use gloo_timers::future::TimeoutFuture;

use crate::domain::therapists::mock;
use crate::shared::api_utils::fetch_list;
use crate::shared::config::data_mode;

const API_ROUTE: &str = "/api/therapists";
const MOCK_LATENCY_MS: u32 = 500;

pub async fn fetch_therapists() -> Result<PagedResponse<TherapistProfile>, FetchError> {
    match plan_fetch(data_mode()) {
        FetchPlan::UseMock => {
            log::info!("using mock data for therapists");
            Ok(mock_response().await)
        }
        FetchPlan::Remote { mock_on_failure } => {
            match fetch_list(API_ROUTE, normalize_envelope).await {
                Ok(resp) => Ok(resp),
                Err(e) if mock_on_failure => {
                    log::warn!("therapists fetch failed, falling back to mock data: {}", e);
                    Ok(mock_response().await)
                }
                Err(e) => Err(e),
            }
        }
    }
}

async fn mock_response() -> PagedResponse<TherapistProfile> {
    TimeoutFuture::new(MOCK_LATENCY_MS).await;
    mock::therapists_page()
}

/// The upstream returns either `{ "therapists": [...] }` or a bare array.
pub(crate) fn normalize_envelope(
    raw: serde_json::Value,
) -> Result<PagedResponse<TherapistProfile>, FetchError> {
    let items = if let Some(wrapped) = raw.get("therapists") {
        wrapped.clone()
    } else if raw.is_array() {
        raw
    } else {
        return Err(FetchError::Decode(
            "invalid response format for therapists".into(),
        ));
    };
    let therapists: Vec<TherapistProfile> =
        serde_json::from_value(items).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(PagedResponse::single_page(therapists))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn therapist_json(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "firstNames": "Ana Sofía",
            "paternalSurname": "Rodríguez",
            "maternalSurname": "Martínez",
            "documentType": "DNI",
            "identityDocumentNumber": "25468731",
            "phone": "+51987654321",
            "email": "ana.rodriguez@terapiaclinica.com",
            "specialtyName": "Psicología Clínica",
            "attentionPlaceAddress": "Av. Arequipa 1245, Miraflores, Lima"
        })
    }

    #[test]
    fn accepts_named_envelope_and_bare_array() {
        let wrapped = normalize_envelope(json!({"therapists": [therapist_json(1)]})).unwrap();
        assert_eq!(wrapped.items.len(), 1);
        let bare = normalize_envelope(json!([therapist_json(2)])).unwrap();
        assert_eq!(bare.items[0].id, 2);
        assert_eq!(bare.current_page, 1);
    }

    #[test]
    fn rejects_other_shapes() {
        let err = normalize_envelope(json!({"profiles": []})).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
