use axum::{http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::expedite::{should_expedite, OrderItem};

#[derive(Debug, Deserialize)]
pub struct ExpediteRequest {
    pub items: Vec<OrderItem>,
    pub total_value: f64,
}

pub async fn check_expedite(
    Json(payload): Json<ExpediteRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if payload.total_value < 0.0 {
        return Err(AppError::BadRequest(
            "total_value must be >= 0".to_string(),
        ));
    }

    let expedite = should_expedite(&payload.items, payload.total_value);

    info!(
        item_count = payload.items.len(),
        total_value = payload.total_value,
        expedite,
        "Expedite decision"
    );

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "expedite": expedite,
            "item_count": payload.items.len(),
        })),
    ))
}
