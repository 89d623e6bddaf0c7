//! First-person to second-person rewriting

use super::lexicon::Lexicon;

/// Rewrite first-person phrasing into second person
///
/// Applies the lexicon's ordered substitution rules (contractions and verb
/// phrases before bare pronouns). Text containing no first-person markers is
/// returned unchanged, and text already in second person is never altered.
/// If the input started with an uppercase letter and the rewrite left the
/// result lowercase, the first character is re-capitalized.
#[must_use]
pub fn to_second_person(lexicon: &Lexicon, text: &str) -> String {
    let mut result = text.to_string();
    for (pattern, replacement) in lexicon.perspective_rules() {
        if pattern.is_match(&result) {
            result = pattern.replace_all(&result, *replacement).into_owned();
        }
    }

    // Preserve leading capitalization from the original
    let original_upper = text.chars().next().is_some_and(char::is_uppercase);
    let result_lower = result.chars().next().is_some_and(char::is_lowercase);
    if original_upper && result_lower {
        let mut chars = result.chars();
        if let Some(first) = chars.next() {
            result = first.to_uppercase().chain(chars).collect();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(text: &str) -> String {
        to_second_person(&Lexicon::new(), text)
    }

    #[test]
    fn converts_contractions_before_bare_pronouns() {
        assert_eq!(convert("I'm tired of this"), "You're tired of this");
        assert_eq!(convert("I've had enough"), "You've had enough");
        assert_eq!(convert("I can't sleep"), "You can't sleep");
    }

    #[test]
    fn converts_pronouns_and_possessives() {
        assert_eq!(
            convert("I am scared about my exam tomorrow"),
            "You are scared about your exam tomorrow"
        );
        assert_eq!(
            convert("my friend told me about myself"),
            "your friend told you about yourself"
        );
        assert_eq!(convert("that book is mine"), "that book is yours");
    }

    #[test]
    fn leaves_text_without_first_person_unchanged() {
        let text = "The weather has been lovely this week.";
        assert_eq!(convert(text), text);
    }

    #[test]
    fn second_person_text_round_trips_unchanged() {
        let text = "You are doing well with your studies.";
        assert_eq!(convert(text), text);
        // idempotent: converting a converted string is a no-op
        let converted = convert("I am proud of my progress");
        assert_eq!(convert(&converted), converted);
    }

    #[test]
    fn preserves_leading_capitalization() {
        assert_eq!(convert("I went home early"), "You went home early");
        assert_eq!(convert("i went home early"), "you went home early");
    }

    #[test]
    fn does_not_touch_embedded_fragments() {
        // "time" must not trigger the "me" rule, "mystery" not the "my" rule
        assert_eq!(
            convert("the mystery of time"),
            "the mystery of time"
        );
    }
}
