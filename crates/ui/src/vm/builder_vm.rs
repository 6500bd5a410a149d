//! Builder form helpers.

use quiz_core::model::Question;

/// One-line label for the committed-question list, truncated so long
/// prompts do not blow up the layout.
#[must_use]
pub fn list_item_label(question: &Question) -> String {
    const MAX: usize = 60;
    let prompt = question.prompt();
    let short: String = if prompt.chars().count() > MAX {
        let truncated: String = prompt.chars().take(MAX).collect();
        format!("{truncated}…")
    } else {
        prompt.to_string()
    };
    format!("#{} {short}", question.number())
}

/// Parses the sequence-number field; the form falls back to 1 on garbage,
/// matching the loose numeric input behavior of the original form.
#[must_use]
pub fn parse_sequence_number(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionDraft;

    fn question(prompt: &str) -> Question {
        let mut draft = QuestionDraft::empty(0);
        draft.question = prompt.to_string();
        draft.a = "a".into();
        draft.b = "b".into();
        draft.c = "c".into();
        draft.d = "d".into();
        draft.validate().unwrap()
    }

    #[test]
    fn label_truncates_long_prompts() {
        let q = question(&"x".repeat(80));
        let label = list_item_label(&q);
        assert!(label.starts_with("#1 "));
        assert!(label.ends_with('…'));
        assert!(label.chars().count() < 70);
    }

    #[test]
    fn short_prompts_pass_through() {
        assert_eq!(list_item_label(&question("Hi?")), "#1 Hi?");
    }

    #[test]
    fn sequence_number_falls_back_to_one() {
        assert_eq!(parse_sequence_number("7"), 7);
        assert_eq!(parse_sequence_number(" 12 "), 12);
        assert_eq!(parse_sequence_number("abc"), 1);
        assert_eq!(parse_sequence_number("0"), 1);
    }
}
