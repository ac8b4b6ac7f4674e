use axum::Json;
use serde_json::{Value, json};

/// Static sample payload, served without touching the database
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is reachable")
    ),
    tag = "Health"
)]
pub async fn root() -> Json<Value> {
    Json(json!([
        {
            "id": 1,
            "name": "John Doe",
            "phone": "1234567890"
        }
    ]))
}
