//! Keyword intent classification for the advising chat.
//!
//! An ordered rule table evaluated first-match-wins. Adding an intent means
//! adding a row, not another branch in control flow.

/// The classified purpose of a free-text advising query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Prerequisite,
    Gpa,
    Elective,
    Generic,
}

/// One classification rule: any keyword hit selects the intent and its reply.
struct IntentRule {
    intent: Intent,
    keywords: &'static [&'static str],
    reply: &'static str,
}

/// Rule table in priority order. "prereq" outranks "gpa", so a message asking
/// about both gets the prerequisite answer.
const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Prerequisite,
        keywords: &["prereq", "prerequisite"],
        reply: "Most 300-level CS courses require CS201 (Data Structures) and CS202 (OOP). \
                Check your study plan to ensure these are completed.",
    },
    IntentRule {
        intent: Intent::Gpa,
        keywords: &["gpa"],
        reply: "Your current GPA is 3.62. Keep it above 3.5 for honors eligibility.",
    },
    IntentRule {
        intent: Intent::Elective,
        keywords: &["elective"],
        reply: "Popular electives this term: AI in Healthcare, Mobile Dev, Cloud Fundamentals. \
                Consider time fit with your chosen block.",
    },
];

const GENERIC_REPLY: &str = "I'm your NUPal Advisor. Ask about prerequisites, course load, or \
                             electives. You can also generate a multi-semester plan below.";

/// Classifies a raw chat message and returns the intent plus its canned reply.
///
/// Case-insensitive substring scan over the rule table. Unmatched input,
/// including the empty string, falls through to the generic advisor reply.
pub fn classify(message: &str) -> (Intent, &'static str) {
    let text = message.to_lowercase();
    for rule in INTENT_RULES {
        if rule.keywords.iter().any(|kw| text.contains(kw)) {
            return (rule.intent, rule.reply);
        }
    }
    (Intent::Generic, GENERIC_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prerequisite_matches_any_case() {
        let (intent, reply) = classify("What are the PREREQUISITES for CS302?");
        assert_eq!(intent, Intent::Prerequisite);
        assert!(reply.contains("CS201"));
    }

    #[test]
    fn test_short_form_prereq_matches() {
        let (intent, _) = classify("any prereqs I should worry about?");
        assert_eq!(intent, Intent::Prerequisite);
    }

    #[test]
    fn test_prereq_outranks_gpa() {
        let (intent, reply) = classify("Do prereqs affect my GPA?");
        assert_eq!(intent, Intent::Prerequisite);
        assert!(!reply.contains("3.62"));
    }

    #[test]
    fn test_gpa_inquiry() {
        let (intent, reply) = classify("how is my gpa looking");
        assert_eq!(intent, Intent::Gpa);
        assert!(reply.contains("3.62"));
    }

    #[test]
    fn test_elective_inquiry() {
        let (intent, reply) = classify("Which Electives are popular?");
        assert_eq!(intent, Intent::Elective);
        assert!(reply.contains("AI in Healthcare"));
    }

    #[test]
    fn test_empty_message_is_generic() {
        let (intent, reply) = classify("");
        assert_eq!(intent, Intent::Generic);
        assert!(reply.contains("NUPal Advisor"));
    }

    #[test]
    fn test_unrelated_message_is_generic() {
        let (intent, _) = classify("when does the cafeteria open?");
        assert_eq!(intent, Intent::Generic);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let first = classify("tell me about electives");
        let second = classify("tell me about electives");
        assert_eq!(first, second);
    }
}
