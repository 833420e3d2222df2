//! Axum route handlers for campus services.
//!
//! Static demo payloads. The real feeds (dining, facilities, transit) are
//! external systems this backend fronts without any logic of its own.

use axum::{extract::Query, Json};
use serde::Deserialize;
use serde_json::{json, Value};

/// GET /api/campus/food
pub async fn handle_food_menu() -> Json<Value> {
    Json(json!({
        "pickup_only": true,
        "items": [
            {
                "id": 1,
                "name": "Grilled Chicken Wrap",
                "price": 6.5,
                "image": "https://images.unsplash.com/photo-1550317138-10000687a72b?q=80&w=1400&auto=format&fit=crop"
            },
            {
                "id": 2,
                "name": "Veggie Bowl",
                "price": 7.0,
                "image": "https://images.unsplash.com/photo-1540189549336-e6e99c3679fe?q=80&w=1400&auto=format&fit=crop"
            },
            {
                "id": 3,
                "name": "Iced Latte",
                "price": 3.25,
                "image": "https://images.unsplash.com/photo-1517705008128-361805f42e86?q=80&w=1400&auto=format&fit=crop"
            }
        ],
        "hero_image": "https://images.unsplash.com/photo-1559339352-11d035aa65de?q=80&w=1600&auto=format&fit=crop"
    }))
}

/// GET /api/campus/courts
pub async fn handle_courts() -> Json<Value> {
    Json(json!({
        "courts": [
            {"name": "Paddle Court 1", "type": "paddle"},
            {"name": "Paddle Court 2", "type": "paddle"},
            {"name": "Football Field", "type": "football"},
            {"name": "Basketball Court", "type": "basketball"}
        ],
        "slots": [
            "08:00-09:00", "09:00-10:00", "10:00-11:00",
            "16:00-17:00", "17:00-18:00", "18:00-19:00"
        ]
    }))
}

#[derive(Debug, Deserialize)]
pub struct ReservationRequest {
    pub court: String,
    pub date: String,
    pub time: String,
    pub name: String,
}

/// POST /api/campus/courts/reserve
/// Pretends success without persistence.
pub async fn handle_reserve_slot(Json(request): Json<ReservationRequest>) -> Json<Value> {
    tracing::info!(
        court = %request.court,
        name = %request.name,
        "court reservation accepted"
    );

    Json(json!({
        "status": "reserved",
        "court": request.court,
        "date": request.date,
        "time": request.time
    }))
}

fn default_course() -> String {
    "CS301".to_string()
}

#[derive(Debug, Deserialize)]
pub struct StudyGroupsQuery {
    #[serde(default = "default_course")]
    pub course: String,
}

/// GET /api/campus/study-groups
/// Group listings templated on the requested course code.
pub async fn handle_study_groups(Query(params): Query<StudyGroupsQuery>) -> Json<Value> {
    let course = params.course;
    Json(json!({
        "course": course.clone(),
        "groups": [
            {"id": 1, "title": format!("{course} - Evening Group"), "members": 5, "time": "Mon 6pm", "avatar_seed": "A"},
            {"id": 2, "title": format!("{course} - Library Session"), "members": 3, "time": "Wed 4pm", "avatar_seed": "B"},
            {"id": 3, "title": format!("{course} - Weekend Sprint"), "members": 6, "time": "Sat 11am", "avatar_seed": "C"}
        ]
    }))
}

/// GET /api/campus/bus-schedules
pub async fn handle_bus_schedules() -> Json<Value> {
    Json(json!({
        "routes": [
            {"route": "Blue Line", "time": "Every 20m", "days": "Mon-Fri"},
            {"route": "Campus Loop", "time": "Every 10m", "days": "Daily"},
            {"route": "City Express", "time": "07:30, 08:30, 17:30", "days": "Mon-Fri"}
        ]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_study_groups_template_on_course() {
        let body = handle_study_groups(Query(StudyGroupsQuery {
            course: "MTH210".to_string(),
        }))
        .await
        .0;

        assert_eq!(body["course"], "MTH210");
        assert_eq!(body["groups"][0]["title"], "MTH210 - Evening Group");
        assert_eq!(body["groups"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_study_groups_query_defaults_to_cs301() {
        let params: StudyGroupsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(params.course, "CS301");
    }

    #[tokio::test]
    async fn test_reserve_slot_echoes_request() {
        let body = handle_reserve_slot(Json(ReservationRequest {
            court: "Paddle Court 1".to_string(),
            date: "2025-05-01".to_string(),
            time: "09:00-10:00".to_string(),
            name: "Dana".to_string(),
        }))
        .await
        .0;

        assert_eq!(body["status"], "reserved");
        assert_eq!(body["court"], "Paddle Court 1");
        assert_eq!(body["date"], "2025-05-01");
        assert_eq!(body["time"], "09:00-10:00");
    }

    #[tokio::test]
    async fn test_food_menu_is_pickup_only() {
        let body = handle_food_menu().await.0;
        assert_eq!(body["pickup_only"], true);
        assert_eq!(body["items"].as_array().unwrap().len(), 3);
    }
}
