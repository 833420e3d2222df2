//! Axum route handlers for the Career API.

use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::career::skill_gap::{compute_skill_gap, SkillGapReport, RESUME_VOCABULARY};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub job_title: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub resume_skills: Option<Vec<String>>,
}

/// POST /api/career/skill-gap
///
/// Scores the candidate's skills against the job's requirements. Missing
/// optional fields degrade to empty input rather than erroring.
pub async fn handle_skill_gap(
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<SkillGapReport>, AppError> {
    let resume_skills = request.resume_skills.unwrap_or_default();
    let report = compute_skill_gap(
        request.job_title,
        &request.required_skills,
        request.resume_text.as_deref().unwrap_or(""),
        &resume_skills,
        RESUME_VOCABULARY,
    );
    tracing::debug!(fit = report.fit_percent, "skill gap scored");

    Ok(Json(report))
}

/// GET /api/career/overview
/// Skill-strength snapshot the dashboard radar chart renders.
pub async fn handle_career_overview() -> Json<Value> {
    Json(json!({
        "major": "Computer Science",
        "skills": {
            "Python": 88,
            "Databases": 72,
            "Algorithms": 80,
            "Cloud": 60,
            "Data Visualization": 55
        }
    }))
}

/// GET /api/career/jobs
/// Curated internship listings; static until a jobs feed is wired up.
pub async fn handle_career_jobs() -> Json<Value> {
    Json(json!({
        "jobs": [
            {
                "id": 101,
                "title": "Backend Intern",
                "company": "Nimbus Tech",
                "skills": ["Python", "APIs", "Databases"],
                "description": "Build APIs and work with PostgreSQL/Mongo."
            },
            {
                "id": 102,
                "title": "Data Analyst Intern",
                "company": "Insight Labs",
                "skills": ["Python", "SQL", "Pandas", "Visualization"],
                "description": "Analyze datasets and build dashboards."
            },
            {
                "id": 103,
                "title": "Mobile Developer Intern",
                "company": "AppForge",
                "skills": ["React Native", "JavaScript", "APIs"],
                "description": "Help build cross-platform mobile features."
            }
        ]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_gap_request_optional_fields_default() {
        let request: SkillGapRequest = serde_json::from_str(
            r#"{"job_title": "Backend Intern", "required_skills": ["Python"]}"#,
        )
        .unwrap();
        assert!(request.resume_text.is_none());
        assert!(request.resume_skills.is_none());
    }

    #[test]
    fn test_skill_gap_request_accepts_explicit_nulls() {
        let request: SkillGapRequest = serde_json::from_str(
            r#"{"job_title": "x", "required_skills": [], "resume_text": null, "resume_skills": null}"#,
        )
        .unwrap();
        assert!(request.resume_text.is_none());
        assert!(request.resume_skills.is_none());
    }

    #[tokio::test]
    async fn test_skill_gap_response_contract() {
        let response = handle_skill_gap(Json(SkillGapRequest {
            job_title: "Backend Intern".to_string(),
            required_skills: vec!["Python".to_string(), "SQL".to_string(), "Docker".to_string()],
            resume_text: Some("I used Python and SQL daily".to_string()),
            resume_skills: None,
        }))
        .await
        .unwrap();

        let body = serde_json::to_value(&response.0).unwrap();
        assert_eq!(body["job_title"], "Backend Intern");
        assert_eq!(body["fit_percent"], 66);
        assert_eq!(body["matched_skills"], json!(["python", "sql"]));
        assert_eq!(body["missing_skills"], json!(["docker"]));
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_career_jobs_lists_three_positions() {
        let body = handle_career_jobs().await.0;
        assert_eq!(body["jobs"].as_array().unwrap().len(), 3);
        assert_eq!(body["jobs"][0]["title"], "Backend Intern");
    }
}
