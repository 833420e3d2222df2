//! Axum route handlers for course scheduling.

use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

/// GET /api/schedule/blocks
pub async fn handle_schedule_blocks() -> Json<Value> {
    Json(json!({
        "blocks": [
            {
                "id": "A",
                "title": "Block A",
                "courses": [
                    {"code": "CS301", "title": "Databases", "day": "Mon", "time": "10:00-11:30", "room": "B-101"},
                    {"code": "CS302", "title": "Algorithms", "day": "Wed", "time": "12:00-13:30", "room": "B-214"},
                    {"code": "MTH210", "title": "Probability", "day": "Thu", "time": "14:00-15:30", "room": "A-303"}
                ]
            },
            {
                "id": "B",
                "title": "Block B",
                "courses": [
                    {"code": "CS303", "title": "Operating Systems", "day": "Tue", "time": "09:00-10:30", "room": "C-120"},
                    {"code": "CS304", "title": "Networks", "day": "Thu", "time": "10:00-11:30", "room": "B-105"},
                    {"code": "HUM110", "title": "Ethics", "day": "Fri", "time": "13:00-14:30", "room": "D-008"}
                ]
            }
        ]
    }))
}

#[derive(Debug, Deserialize)]
pub struct ElectiveSuggestionRequest {
    pub desired_code: String,
    pub current_schedule: Vec<Value>,
}

/// POST /api/schedule/suggest
/// Fixed alternative blocks and elective picks; no constraint solving.
pub async fn handle_schedule_suggest(
    Json(request): Json<ElectiveSuggestionRequest>,
) -> Json<Value> {
    tracing::debug!(
        desired = %request.desired_code,
        scheduled = request.current_schedule.len(),
        "schedule suggestion requested"
    );

    Json(json!({
        "recommended_blocks": [
            {"id": "A", "diff": "Switch Algorithms to Tue"},
            {"id": "B", "diff": "Move Networks to Wed"}
        ],
        "recommended_electives": [
            {"code": "DS310", "title": "Data Science", "day": "Mon", "time": "16:00-17:30"},
            {"code": "SE220", "title": "Software Eng II", "day": "Tue", "time": "12:00-13:30"},
            {"code": "AI340", "title": "Intro to AI", "day": "Thu", "time": "16:00-17:30"}
        ]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schedule_blocks_shape() {
        let body = handle_schedule_blocks().await.0;
        let blocks = body["blocks"].as_array().unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0]["id"], "A");
        assert_eq!(blocks[1]["courses"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_schedule_suggest_returns_fixed_picks() {
        let body = handle_schedule_suggest(Json(ElectiveSuggestionRequest {
            desired_code: "DS310".to_string(),
            current_schedule: vec![json!({"code": "CS301"})],
        }))
        .await
        .0;

        assert_eq!(body["recommended_blocks"].as_array().unwrap().len(), 2);
        assert_eq!(body["recommended_electives"][0]["code"], "DS310");
    }
}
