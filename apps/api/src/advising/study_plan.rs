//! Multi-semester study-plan generation.
//!
//! Deterministic expansion of the fixed core-course sequence plus elective
//! placeholders across a semester range. Pure function of its inputs.

use serde::{Deserialize, Serialize};

/// One `(code, title)` entry in the core-course catalog.
pub type CourseSeed = (&'static str, &'static str);

/// Core CS sequence in the order courses are scheduled.
pub const CORE_SEQUENCE: &[CourseSeed] = &[
    ("CS201", "Data Structures"),
    ("CS202", "OOP"),
    ("CS301", "Databases"),
    ("CS302", "Algorithms"),
    ("CS303", "Operating Systems"),
    ("CS304", "Computer Networks"),
    ("CS401", "Machine Learning"),
    ("CS402", "Distributed Systems"),
];

const CORE_PER_SEMESTER: usize = 3;
const CREDITS_PER_COURSE: u32 = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseEntry {
    pub code: String,
    pub title: String,
    pub credits: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterPlan {
    pub semester: i32,
    pub total_credits: u32,
    pub courses: Vec<CourseEntry>,
}

/// Expands `core_sequence` plus elective placeholders across
/// `current_semester..=total_semesters` (empty when the range is inverted).
///
/// The cursor into the catalog starts at `max(0, current_semester - 1)` and
/// only ever advances, so a course appears at most once per plan. Each
/// semester takes up to three core courses (no padding once the catalog is
/// exhausted) and always exactly two elective placeholders.
pub fn generate_plan(
    current_semester: i32,
    total_semesters: i32,
    core_sequence: &[CourseSeed],
) -> Vec<SemesterPlan> {
    let mut idx = current_semester.saturating_sub(1).max(0) as usize;
    let mut semesters = Vec::new();

    for s in current_semester..=total_semesters {
        let mut courses = Vec::new();

        for _ in 0..CORE_PER_SEMESTER {
            if let Some((code, title)) = core_sequence.get(idx) {
                courses.push(CourseEntry {
                    code: (*code).to_string(),
                    title: (*title).to_string(),
                    credits: CREDITS_PER_COURSE,
                });
                idx += 1;
            }
        }

        courses.push(CourseEntry {
            code: format!("EL{s}1"),
            title: "Technical Elective".to_string(),
            credits: CREDITS_PER_COURSE,
        });
        courses.push(CourseEntry {
            code: format!("EL{s}2"),
            title: "Open Elective".to_string(),
            credits: CREDITS_PER_COURSE,
        });

        let total_credits = courses.iter().map(|c| c.credits).sum();
        semesters.push(SemesterPlan {
            semester: s,
            total_credits,
            courses,
        });
    }

    semesters
}
