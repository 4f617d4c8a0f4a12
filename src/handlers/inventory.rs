use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info, warn};

use crate::{catalog::StockCatalog, AppState};

// ── Wire shapes ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryRequest {
    pub part_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBody {
    pub part_id: String,
    pub current_stock: i32,
    pub is_low_stock: bool,
}

/// Invocation result: the functional status code plus a JSON-encoded body
/// string, returned verbatim to the invoker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    fn error(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: json!({ "error": message }).to_string(),
        }
    }
}

// ── Handler ───────────────────────────────────────────────────────────────────

/// Core inventory-status handler. Three terminal outcomes:
/// 400 when the request has no usable part_id, 200 with the resolved stock
/// status otherwise, 500 if resolution fails unexpectedly.
pub fn check_status(catalog: &StockCatalog, request: &InventoryRequest) -> InvocationResponse {
    info!(part_id = ?request.part_id, "Received inventory status request");

    let part_id = match request.part_id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => {
            warn!("Rejected request with no usable part_id");
            // Exact wording is part of the external contract
            return InvocationResponse::error(400, "Missing 'part_id' in request body");
        }
    };

    match resolve_status(catalog, part_id) {
        Ok(body) => InvocationResponse {
            status_code: 200,
            body,
        },
        Err(err) => {
            error!(part_id = %part_id, error = %err, "Inventory status resolution failed");
            InvocationResponse::error(500, "Internal server error")
        }
    }
}

fn resolve_status(catalog: &StockCatalog, part_id: &str) -> anyhow::Result<String> {
    let current_stock = catalog.stock_level(part_id);
    let is_low_stock = catalog.is_low_stock(current_stock);

    info!(part_id = %part_id, current_stock, is_low_stock, "Inventory status resolved");

    let body = StatusBody {
        part_id: part_id.to_string(),
        current_stock,
        is_low_stock,
    };
    Ok(serde_json::to_string(&body)?)
}

/// HTTP wrapper: answers 200 at the transport level and carries the
/// functional status inside the invocation envelope, the way a
/// function-invocation service returns a handler's value verbatim.
pub async fn inventory_status(
    State(state): State<AppState>,
    Json(request): Json<InventoryRequest>,
) -> Json<InvocationResponse> {
    Json(check_status(&state.catalog, &request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_STOCK_LEVEL;

    fn request(part_id: Option<&str>) -> InventoryRequest {
        InventoryRequest {
            part_id: part_id.map(str::to_string),
        }
    }

    fn decoded_body(response: &InvocationResponse) -> serde_json::Value {
        serde_json::from_str(&response.body).expect("body must be a JSON-encoded string")
    }

    #[test]
    fn known_low_stock_part() {
        let catalog = StockCatalog::new();
        let response = check_status(&catalog, &request(Some("abc-123")));

        assert_eq!(response.status_code, 200);
        let body = decoded_body(&response);
        assert_eq!(body["partId"], "abc-123");
        assert_eq!(body["currentStock"], 5);
        assert_eq!(body["isLowStock"], true, "Stock of 5 is below the threshold");
    }

    #[test]
    fn known_normal_stock_part() {
        let catalog = StockCatalog::new();
        let response = check_status(&catalog, &request(Some("xyz-789")));

        assert_eq!(response.status_code, 200);
        let body = decoded_body(&response);
        assert_eq!(body["partId"], "xyz-789");
        assert_eq!(body["currentStock"], 50);
        assert_eq!(body["isLowStock"], false);
    }

    #[test]
    fn unknown_part_gets_default_stock() {
        let catalog = StockCatalog::new();
        let response = check_status(&catalog, &request(Some("unknown-part-001")));

        assert_eq!(response.status_code, 200);
        let body = decoded_body(&response);
        assert_eq!(body["currentStock"], DEFAULT_STOCK_LEVEL);
        assert_eq!(body["isLowStock"], false, "Default stock of 25 is not low");
    }

    #[test]
    fn missing_part_id_is_client_error() {
        let catalog = StockCatalog::new();
        let response = check_status(&catalog, &request(None));

        assert_eq!(response.status_code, 400);
        let body = decoded_body(&response);
        let message = body["error"].as_str().expect("error body carries a message");
        assert!(
            message.contains("Missing 'part_id'"),
            "Error message must name the missing field, got: {message}"
        );
    }

    #[test]
    fn empty_part_id_counts_as_missing() {
        let catalog = StockCatalog::new();
        let response = check_status(&catalog, &request(Some("")));

        assert_eq!(response.status_code, 400);
    }

    #[test]
    fn same_request_yields_identical_responses() {
        let catalog = StockCatalog::new();
        let req = request(Some("def-456"));

        let first = check_status(&catalog, &req);
        let second = check_status(&catalog, &req);
        assert_eq!(first, second, "Handler is a pure function of table + input");
    }

    #[test]
    fn success_body_never_carries_error_field() {
        let catalog = StockCatalog::new();
        let response = check_status(&catalog, &request(Some("xyz-789")));
        let body = decoded_body(&response);
        assert!(body.get("error").is_none());
    }

    #[test]
    fn request_with_unrelated_keys_still_missing_part_id() {
        let req: InventoryRequest =
            serde_json::from_str(r#"{"some_other_key": "some_value"}"#).unwrap();
        let catalog = StockCatalog::new();
        assert_eq!(check_status(&catalog, &req).status_code, 400);
    }
}
