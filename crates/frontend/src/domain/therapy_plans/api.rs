//! Therapy plan fetches and creation through the proxy.

use contracts::domain::therapy_plan::{TherapyPlan, TherapyPlanDraft};
use contracts::shared::data_mode::{plan_fetch, FetchPlan};
use contracts::shared::error::FetchError;
use contracts::shared::paging::{PagedResponse, PageQuery};
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;

use crate::domain::therapy_plans::mock;
use crate::shared::api_utils::{fetch_list, post_json};
use crate::shared::config::data_mode;

const API_ROUTE: &str = "/api/therapy-plans";
const MOCK_LATENCY_MS: u32 = 500;

pub async fn fetch_therapy_plans(
    query: &PageQuery,
) -> Result<PagedResponse<TherapyPlan>, FetchError> {
    match plan_fetch(data_mode()) {
        FetchPlan::UseMock => {
            log::info!("using mock data for therapy plans");
            Ok(mock_response(query).await)
        }
        FetchPlan::Remote { mock_on_failure } => {
            let url = format!("{}?page={}&size={}", API_ROUTE, query.page, query.page_size);
            match fetch_list(&url, normalize_envelope).await {
                Ok(resp) => Ok(resp),
                Err(e) if mock_on_failure => {
                    log::warn!("therapy plans fetch failed, falling back to mock data: {}", e);
                    Ok(mock_response(query).await)
                }
                Err(e) => Err(e),
            }
        }
    }
}

/// Create a new plan. In mock mode the draft is accepted without any
/// network traffic so the planning form stays usable offline.
pub async fn create_therapy_plan(draft: &TherapyPlanDraft) -> Result<(), FetchError> {
    match plan_fetch(data_mode()) {
        FetchPlan::UseMock => {
            log::info!("mock mode: accepting therapy plan draft without network");
            TimeoutFuture::new(MOCK_LATENCY_MS).await;
            Ok(())
        }
        FetchPlan::Remote { mock_on_failure } => match post_json(API_ROUTE, draft).await {
            Ok(_) => Ok(()),
            Err(e) if mock_on_failure => {
                log::warn!("therapy plan creation failed, accepted locally: {}", e);
                Ok(())
            }
            Err(e) => Err(e),
        },
    }
}

async fn mock_response(query: &PageQuery) -> PagedResponse<TherapyPlan> {
    TimeoutFuture::new(MOCK_LATENCY_MS).await;
    mock::therapy_plans_page(query)
}

/// Upstream envelope:
/// `{ data: { items, page, size, totalItems, totalPages } }`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlansPayload {
    items: Vec<TherapyPlan>,
    page: u32,
    #[allow(dead_code)]
    size: u32,
    total_items: u64,
    total_pages: u32,
}

#[derive(Deserialize)]
struct PlansEnvelope {
    data: PlansPayload,
}

pub(crate) fn normalize_envelope(
    raw: serde_json::Value,
) -> Result<PagedResponse<TherapyPlan>, FetchError> {
    let envelope: PlansEnvelope =
        serde_json::from_value(raw).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(PagedResponse {
        total_results: envelope.data.total_items,
        current_page: envelope.data.page,
        max_page: envelope.data.total_pages,
        items: envelope.data.items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_the_nested_data_envelope() {
        let raw = json!({
            "data": {
                "items": [{
                    "id": 1,
                    "patientId": 51,
                    "assessmentId": 101,
                    "assignedTherapistId": 3,
                    "description": "Plan",
                    "goals": "Goals",
                    "legalResponsibleId": 1,
                    "schedule": []
                }],
                "page": 2,
                "size": 10,
                "totalItems": 100,
                "totalPages": 10
            }
        });
        let resp = normalize_envelope(raw).unwrap();
        assert_eq!(resp.current_page, 2);
        assert_eq!(resp.max_page, 10);
        assert_eq!(resp.items[0].patient_id, 51);
    }
}
