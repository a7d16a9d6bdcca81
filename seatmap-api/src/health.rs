use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
}

async fn index() -> Json<Value> {
    Json(json!({
        "ok": true,
        "message": "Use GET /flights/:id/passengers",
    }))
}

async fn healthz() -> Json<Value> {
    Json(json!({ "ok": true }))
}
