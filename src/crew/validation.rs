use std::sync::LazyLock;

use regex::Regex;

use super::CrewMember;

pub const NAME_REQUIRED: &str = "All crew members must have a name!";
pub const RANK_REQUIRED: &str = "All crew members must have a rank!";
pub const CREW_ID_PATTERN_MSG: &str = "Crew ID must be alphanumeric!";

static CREW_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9]+$").expect("crew id pattern compiles"));

/// Evaluate every field constraint independently and collect the messages of
/// the ones that failed. An empty result means the record may be persisted.
pub fn violations(crew_member: &CrewMember) -> Vec<String> {
    let mut messages = Vec::new();

    if crew_member.name.as_deref().unwrap_or("").is_empty() {
        messages.push(NAME_REQUIRED.to_string());
    }

    if crew_member.rank.as_deref().unwrap_or("").is_empty() {
        messages.push(RANK_REQUIRED.to_string());
    }

    let crew_id = crew_member.crew_id.as_deref().unwrap_or("");
    if !CREW_ID_PATTERN.is_match(crew_id) {
        messages.push(CREW_ID_PATTERN_MSG.to_string());
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, rank: &str, crew_id: &str) -> CrewMember {
        CrewMember {
            name: Some(name.to_string()),
            rank: Some(rank.to_string()),
            crew_id: Some(crew_id.to_string()),
        }
    }

    #[test]
    fn test_valid_member_has_no_violations() {
        assert!(violations(&member("Alice", "Captain", "A1")).is_empty());
        assert!(violations(&member("Worf", "Lieutenant", "1701")).is_empty());
    }

    #[test]
    fn test_empty_name() {
        let messages = violations(&member("", "Captain", "A1"));
        assert_eq!(messages, vec![NAME_REQUIRED.to_string()]);
    }

    #[test]
    fn test_empty_rank() {
        let messages = violations(&member("Alice", "", "A1"));
        assert_eq!(messages, vec![RANK_REQUIRED.to_string()]);
    }

    #[test]
    fn test_crew_id_must_be_alphanumeric() {
        assert_eq!(
            violations(&member("Alice", "Captain", "A-1")),
            vec![CREW_ID_PATTERN_MSG.to_string()]
        );
        assert_eq!(
            violations(&member("Alice", "Captain", "")),
            vec![CREW_ID_PATTERN_MSG.to_string()]
        );
    }

    #[test]
    fn test_violations_accumulate() {
        let messages = violations(&CrewMember::default());
        assert_eq!(
            messages,
            vec![
                NAME_REQUIRED.to_string(),
                RANK_REQUIRED.to_string(),
                CREW_ID_PATTERN_MSG.to_string(),
            ]
        );
    }
}
