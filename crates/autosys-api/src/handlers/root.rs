//! Welcome handler.

use axum::Json;

use crate::dto::response::MessageResponse;

/// GET /
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to Autosys Jobs API".to_string(),
    })
}
