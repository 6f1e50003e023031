use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::{HeaderMap, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde::de::DeserializeOwned;

use super::ApiError;
use crate::models::*;
use crate::registry::Registry;

pub const WELCOME: &str = "Welcome to the Transport Management System (TMS) API";

/// LogsheetNo assigned by `POST /logsheet`.
pub const LOGSHEET_NO_HEADER: &str = "x-logsheet-no";
/// OrderNos that `POST /logsheet` could not find, each percent-encoded and
/// joined with commas.
pub const SKIPPED_DOCKETS_HEADER: &str = "x-skipped-dockets";

/// Decode a JSON request body, whatever its declared content type.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Treat a path segment that is not alphanumeric, or not even decodable, as an
/// unmatched route.
fn identifier(segment: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    match segment {
        Ok(Path(raw)) if is_identifier(&raw) => Ok(raw),
        _ => Err(ApiError::NoRoute),
    }
}

/// Percent-encode each OrderNo and join them with commas.
pub fn encode_skipped(skipped: &[String]) -> String {
    skipped
        .iter()
        .map(|order_no| urlencoding::encode(order_no))
        .collect::<Vec<_>>()
        .join(",")
}

// ============================================================
// Service
// ============================================================

pub async fn welcome() -> &'static str {
    WELCOME
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Dockets
// ============================================================

pub async fn create_docket(
    State(registry): State<Registry>,
    body: Bytes,
) -> Result<Json<Docket>, ApiError> {
    let input: CreateDocketInput = decode(&body)?;
    Ok(Json(registry.create_docket(input)))
}

pub async fn get_docket(
    State(registry): State<Registry>,
    order_no: Result<Path<String>, PathRejection>,
) -> Result<Json<Docket>, ApiError> {
    let order_no = identifier(order_no)?;
    registry
        .get_docket(&order_no)
        .map(Json)
        .ok_or(ApiError::DocketNotFound)
}

pub async fn list_dockets(State(registry): State<Registry>) -> Json<Vec<Docket>> {
    Json(registry.list_dockets())
}

// ============================================================
// Logsheets
// ============================================================

/// Create a logsheet. The body is the updated dockets; the assigned LogsheetNo
/// and any unknown OrderNos travel in response headers.
pub async fn create_logsheet(
    State(registry): State<Registry>,
    body: Bytes,
) -> Result<(HeaderMap, Json<Vec<Docket>>), ApiError> {
    let input: CreateLogsheetInput = decode(&body)?;
    let assignment = registry.create_logsheet(input);

    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&assignment.logsheet_no) {
        headers.insert(LOGSHEET_NO_HEADER, value);
    }
    if !assignment.skipped.is_empty() {
        if let Ok(value) = HeaderValue::from_str(&encode_skipped(&assignment.skipped)) {
            headers.insert(SKIPPED_DOCKETS_HEADER, value);
        }
    }

    Ok((headers, Json(assignment.dockets)))
}

pub async fn get_logsheet(
    State(registry): State<Registry>,
    logsheet_no: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Docket>>, ApiError> {
    let logsheet_no = identifier(logsheet_no)?;
    let dockets = registry.get_logsheet(&logsheet_no);
    if dockets.is_empty() {
        Err(ApiError::LogsheetNotFound)
    } else {
        Ok(Json(dockets))
    }
}
