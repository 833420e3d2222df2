use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Root status object, kept stable for uptime checks.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "NUPal Backend",
        "status": "ok"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "nupal-api"
    }))
}

/// GET /api/hello
pub async fn hello_handler() -> Json<Value> {
    Json(json!({
        "message": "Hello from the NUPal backend!"
    }))
}

/// GET /test
/// Database connectivity probe. There is no persistence layer, so the probe
/// always reports the database as unavailable; it still echoes whether
/// DATABASE_URL is set so deploy scripts can sanity-check the environment.
pub async fn database_probe_handler(State(state): State<AppState>) -> Json<Value> {
    let database_url = if state.config.database_url.is_some() {
        "✅ Set"
    } else {
        "❌ Not Set"
    };

    Json(json!({
        "backend": "✅ Running",
        "database": "❌ Not Available",
        "database_url": database_url,
        "database_name": null,
        "connection_status": "Not Connected",
        "collections": []
    }))
}
