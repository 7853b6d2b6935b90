/// Motivational message for a letter grade.
///
/// Rules are ordered: the exact matches for "A" and "A-" must run before the
/// prefix checks, otherwise "A-" would never reach the top-tier message.
pub fn message_for(grade: &str) -> &'static str {
    if grade == "A" || grade == "A-" {
        return "Outstanding! Keep it up!";
    }
    if grade.starts_with('B') {
        return "Great job! A little push and you'll hit an A!";
    }
    if grade.starts_with('C') {
        return "You passed! Now aim higher!";
    }
    if grade == "F" {
        return "Don't give up. You can improve next time!";
    }
    "Keep going!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_grades_get_the_top_tier_message() {
        assert_eq!(message_for("A"), "Outstanding! Keep it up!");
        assert_eq!(message_for("A-"), "Outstanding! Keep it up!");
    }

    #[test]
    fn b_grades_get_encouragement() {
        let expected = "Great job! A little push and you'll hit an A!";
        assert_eq!(message_for("B+"), expected);
        assert_eq!(message_for("B"), expected);
        assert_eq!(message_for("B-"), expected);
    }

    #[test]
    fn c_grades_get_the_pass_message() {
        assert_eq!(message_for("C+"), "You passed! Now aim higher!");
        assert_eq!(message_for("C-"), "You passed! Now aim higher!");
    }

    #[test]
    fn f_gets_the_recovery_message() {
        assert_eq!(message_for("F"), "Don't give up. You can improve next time!");
    }

    #[test]
    fn unknown_grades_fall_back_to_the_generic_message() {
        assert_eq!(message_for("D"), "Keep going!");
        assert_eq!(message_for(""), "Keep going!");
    }
}
