//! Patient summary fetches through the same-origin proxy.

use contracts::domain::patient::PatientSummary;
use contracts::shared::data_mode::{plan_fetch, FetchPlan};
use contracts::shared::error::FetchError;
use contracts::shared::paging::{PagedResponse, PageQuery};
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;

use crate::domain::patients::mock;
use crate::shared::api_utils::fetch_list;
use crate::shared::config::data_mode;

const API_ROUTE: &str = "/api/patients";
const MOCK_LATENCY_MS: u32 = 500;

/// Fetch one page of patient summaries, honoring the session data mode:
/// force-mock skips the network entirely, dev builds fall back to the
/// canned dataset on failure, production propagates the error.
pub async fn fetch_patients_page(
    query: &PageQuery,
) -> Result<PagedResponse<PatientSummary>, FetchError> {
    match plan_fetch(data_mode()) {
        FetchPlan::UseMock => {
            log::info!("using mock data for patient summaries");
            Ok(mock_response().await)
        }
        FetchPlan::Remote { mock_on_failure } => match fetch_from_api(query).await {
            Ok(resp) => Ok(resp),
            Err(e) if mock_on_failure => {
                log::warn!("patients fetch failed, falling back to mock data: {}", e);
                Ok(mock_response().await)
            }
            Err(e) => Err(e),
        },
    }
}

async fn fetch_from_api(query: &PageQuery) -> Result<PagedResponse<PatientSummary>, FetchError> {
    let status = query.status.as_deref().unwrap_or("ACTIVE");
    let url = format!(
        "{}?status={}&page={}&page_size={}",
        API_ROUTE, status, query.page, query.page_size
    );
    fetch_list(&url, normalize_envelope).await
}

async fn mock_response() -> PagedResponse<PatientSummary> {
    TimeoutFuture::new(MOCK_LATENCY_MS).await;
    mock::patients_page()
}

/// Upstream envelope: `{ totalResults, currentPage, maxPage, patients }`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PatientsEnvelope {
    total_results: u64,
    current_page: u32,
    max_page: u32,
    patients: Vec<PatientSummary>,
}

pub(crate) fn normalize_envelope(
    raw: serde_json::Value,
) -> Result<PagedResponse<PatientSummary>, FetchError> {
    let envelope: PatientsEnvelope =
        serde_json::from_value(raw).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(PagedResponse {
        total_results: envelope.total_results,
        current_page: envelope.current_page,
        max_page: envelope.max_page,
        items: envelope.patients,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_the_wrapped_envelope() {
        let raw = json!({
            "totalResults": 1,
            "currentPage": 1,
            "maxPage": 1,
            "patients": [{
                "id": 1,
                "status": "ACTIVE",
                "name": "Juan Carlos Perez Gomez",
                "documentType": "DNI",
                "documentNumber": "12345678",
                "legalResponsible": "Maria Luisa Gomez Torres",
                "legalResponsiblePhone": "988776655",
                "scheduledAt": "2024-11-15T10:30:00"
            }]
        });
        let resp = normalize_envelope(raw).unwrap();
        assert_eq!(resp.total_results, 1);
        assert_eq!(resp.items[0].id, 1);
    }

    #[test]
    fn rejects_unexpected_shapes() {
        let err = normalize_envelope(serde_json::json!({"rows": []})).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
