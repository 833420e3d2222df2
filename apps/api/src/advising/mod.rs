// Advising & Recommendation Engine.
// Implements: keyword intent classification, multi-semester study-plan generation.
// Both are pure functions over const tables; handlers only shape the response.

pub mod handlers;
pub mod intent;
pub mod study_plan;
