//! Axum route handlers for the Advising API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::advising::intent::classify;
use crate::advising::study_plan::{generate_plan, SemesterPlan, CORE_SEQUENCE};
use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub role: &'static str,
    pub message: &'static str,
}

fn default_major() -> String {
    "Computer Science".to_string()
}

fn default_current_semester() -> i32 {
    3
}

fn default_total_semesters() -> i32 {
    8
}

#[derive(Debug, Deserialize)]
pub struct StudyPlanRequest {
    #[serde(default = "default_major")]
    pub major: String,
    #[serde(default = "default_current_semester")]
    pub current_semester: i32,
    #[serde(default = "default_total_semesters")]
    pub total_semesters: i32,
}

#[derive(Debug, Serialize)]
pub struct StudyPlanResponse {
    pub major: String,
    pub plan: Vec<SemesterPlan>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/advising/chat
///
/// Classifies the message against the keyword rule table and returns the
/// matching canned reply.
pub async fn handle_chat(
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let (intent, reply) = classify(&request.message);
    tracing::debug!(?intent, "advising chat classified");

    Ok(Json(ChatResponse {
        role: "assistant",
        message: reply,
    }))
}

/// POST /api/study-plan
///
/// Expands the core-course catalog across the requested semester range.
/// The major is echoed back untouched; it does not affect the catalog.
pub async fn handle_study_plan(
    Json(request): Json<StudyPlanRequest>,
) -> Result<Json<StudyPlanResponse>, AppError> {
    let plan = generate_plan(
        request.current_semester,
        request.total_semesters,
        CORE_SEQUENCE,
    );
    tracing::debug!(semesters = plan.len(), "study plan generated");

    Ok(Json(StudyPlanResponse {
        major: request.major,
        plan,
    }))
}
