pub mod analytics;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{advising, campus, career, schedule};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/test", get(health::database_probe_handler))
        .route("/api/hello", get(health::hello_handler))
        .route("/api/analytics", get(analytics::analytics_handler))
        // Advising core
        .route("/api/advising/chat", post(advising::handlers::handle_chat))
        .route("/api/study-plan", post(advising::handlers::handle_study_plan))
        // Campus services
        .route("/api/campus/food", get(campus::handlers::handle_food_menu))
        .route("/api/campus/courts", get(campus::handlers::handle_courts))
        .route(
            "/api/campus/courts/reserve",
            post(campus::handlers::handle_reserve_slot),
        )
        .route(
            "/api/campus/study-groups",
            get(campus::handlers::handle_study_groups),
        )
        .route(
            "/api/campus/bus-schedules",
            get(campus::handlers::handle_bus_schedules),
        )
        // Career advising
        .route(
            "/api/career/overview",
            get(career::handlers::handle_career_overview),
        )
        .route("/api/career/jobs", get(career::handlers::handle_career_jobs))
        .route(
            "/api/career/skill-gap",
            post(career::handlers::handle_skill_gap),
        )
        // Course scheduling
        .route(
            "/api/schedule/blocks",
            get(schedule::handlers::handle_schedule_blocks),
        )
        .route(
            "/api/schedule/suggest",
            post(schedule::handlers::handle_schedule_suggest),
        )
        .with_state(state)
}
