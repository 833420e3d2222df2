use axum::Json;
use serde_json::{json, Value};

/// GET /api/analytics
/// Home-screen dashboard numbers. Demo data until a registrar feed exists.
pub async fn analytics_handler() -> Json<Value> {
    Json(json!({
        "gpa": 3.62,
        "upcoming": {
            "course": "CS302 - Algorithms",
            "time": "Today 2:00 PM",
            "location": "Room B-214"
        },
        "completed_credits": 78,
        "current_credits": 15,
        "attendance": 92
    }))
}
