//! Resume/job skill-gap matching.
//!
//! Derives a candidate's skill set from explicit tokens plus a vocabulary
//! scan of free resume text, intersects it with the job's required skills,
//! and scores fit 0-100. Deterministic and total over its inputs.

use std::collections::BTreeSet;

use serde::Serialize;

/// Fixed vocabulary scanned for in free resume text. Substring containment,
/// not word-boundary matching: "postgresql" in a resume counts as "sql".
pub const RESUME_VOCABULARY: &[&str] = &[
    "python",
    "sql",
    "pandas",
    "react",
    "apis",
    "databases",
    "statistics",
    "cloud",
    "docker",
    "linux",
];

/// Improvement suggestions attached to every report, independent of input.
const SUGGESTIONS: &[&str] = &[
    "Strengthen fundamentals with a short online course",
    "Build a small project to demonstrate missing skills",
    "Add quantified results to your resume bullets",
];

/// Full skill-gap report returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct SkillGapReport {
    pub job_title: String,
    pub fit_percent: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<&'static str>,
}

/// Collects the candidate's skill set: explicitly supplied skills are trimmed
/// and lower-cased, then every vocabulary term found in the lower-cased
/// resume text is added.
fn collect_resume_skills(
    resume_text: &str,
    resume_skills: &[String],
    vocabulary: &[&str],
) -> BTreeSet<String> {
    let mut skills: BTreeSet<String> = resume_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let text = resume_text.to_lowercase();
    for term in vocabulary {
        if text.contains(term) {
            skills.insert((*term).to_string());
        }
    }

    skills
}

/// Compares required skills against the candidate's skill set.
///
/// Required skills are lower-cased but not trimmed; callers already depend on
/// that asymmetry with the resume-skill normalization. `fit_percent` uses
/// integer division (2 of 3 scores 66) and an empty requirement list scores 0.
pub fn compute_skill_gap(
    job_title: String,
    required_skills: &[String],
    resume_text: &str,
    resume_skills: &[String],
    vocabulary: &[&str],
) -> SkillGapReport {
    let resume_set = collect_resume_skills(resume_text, resume_skills, vocabulary);
    let required: BTreeSet<String> = required_skills.iter().map(|s| s.to_lowercase()).collect();

    // BTreeSet iteration is ordered, so both lists come out sorted.
    let matched: Vec<String> = required.intersection(&resume_set).cloned().collect();
    let missing: Vec<String> = required.difference(&resume_set).cloned().collect();

    let fit_percent = (100 * matched.len() / required.len().max(1)) as u32;

    SkillGapReport {
        job_title,
        fit_percent,
        matched_skills: matched,
        missing_skills: missing,
        suggestions: SUGGESTIONS.to_vec(),
    }
}
