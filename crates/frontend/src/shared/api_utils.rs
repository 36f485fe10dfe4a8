//! Shared fetch helpers for the same-origin API proxy.
//!
//! The proxy wraps upstream failures in an `{ "error": "..." }` body; these
//! helpers surface that message when present and fall back to the HTTP
//! status otherwise. Entity modules pass their own envelope normalizer so
//! no backend shape is hardcoded here.

use contracts::shared::error::FetchError;
use contracts::shared::paging::PagedResponse;
use gloo_net::http::{Request, Response};

/// GET a JSON document, mapping transport and status failures into the
/// shared error taxonomy.
pub async fn get_json(url: &str) -> Result<serde_json::Value, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    read_json_body(response).await
}

/// POST a JSON payload and return the parsed response body.
pub async fn post_json<B: serde::Serialize>(
    url: &str,
    body: &B,
) -> Result<serde_json::Value, FetchError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| FetchError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    read_json_body(response).await
}

/// GET a list resource and normalize its envelope through the supplied
/// adapter. Exactly one request per call, no retries.
pub async fn fetch_list<T, N>(url: &str, normalize: N) -> Result<PagedResponse<T>, FetchError>
where
    N: Fn(serde_json::Value) -> Result<PagedResponse<T>, FetchError>,
{
    let raw = get_json(url).await?;
    normalize(raw)
}

async fn read_json_body(response: Response) -> Result<serde_json::Value, FetchError> {
    let status = response.status();
    if !response.ok() {
        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("error")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status)),
            Err(_) => format!("HTTP {}", status),
        };
        return Err(FetchError::http(status, message));
    }
    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
