//! Emotional intensity scoring from surface features of raw text

use serde::Serialize;

use super::lexicon::Lexicon;

/// Discrete intensity bucket summarizing emotional strength signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntensityLevel {
    #[serde(rename = "high_intensity")]
    High,
    #[serde(rename = "medium_intensity")]
    Medium,
    #[serde(rename = "low_intensity")]
    Low,
}

impl IntensityLevel {
    /// Stable string form, used in API payloads and the diary store
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high_intensity",
            Self::Medium => "medium_intensity",
            Self::Low => "low_intensity",
        }
    }

    /// Parse the stable string form
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "high_intensity" => Some(Self::High),
            "medium_intensity" => Some(Self::Medium),
            "low_intensity" => Some(Self::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the discrete intensity level of a text
///
/// Weighted signals: exclamation marks (2), question marks (1), all-caps
/// words longer than one character (1), high-tier intensity words (3),
/// medium-tier words (1), and runs of three or more identical consecutive
/// characters (2). Scores above 4 are high, above 1 medium, otherwise low.
/// Deterministic; same text always yields the same level.
#[must_use]
pub fn calculate_intensity(lexicon: &Lexicon, text: &str) -> IntensityLevel {
    let lower = text.to_lowercase();

    let exclamations = text.matches('!').count();
    let questions = text.matches('?').count();
    let caps_words = text.split_whitespace().filter(|w| is_shouted(w)).count();

    let high_hits = lexicon
        .intensity_words(IntensityLevel::High)
        .iter()
        .filter(|w| lower.contains(*w))
        .count();
    let medium_hits = lexicon
        .intensity_words(IntensityLevel::Medium)
        .iter()
        .filter(|w| lower.contains(*w))
        .count();

    let repeated_runs = count_repeated_runs(&lower);

    let score =
        exclamations * 2 + questions + caps_words + high_hits * 3 + medium_hits + repeated_runs * 2;

    if score > 4 {
        IntensityLevel::High
    } else if score > 1 {
        IntensityLevel::Medium
    } else {
        IntensityLevel::Low
    }
}

/// A word counts as shouted when it has more than one character, contains at
/// least one letter, and no lowercase letters
fn is_shouted(word: &str) -> bool {
    word.chars().count() > 1
        && word.chars().any(char::is_alphabetic)
        && !word.chars().any(char::is_lowercase)
}

/// Count maximal runs of three or more identical consecutive characters
fn count_repeated_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut run_len = 0;
    let mut previous: Option<char> = None;

    for c in text.chars() {
        if previous == Some(c) {
            run_len += 1;
            if run_len == 3 {
                runs += 1;
            }
        } else {
            previous = Some(c);
            run_len = 1;
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(text: &str) -> IntensityLevel {
        calculate_intensity(&Lexicon::new(), text)
    }

    #[test]
    fn calm_text_is_low() {
        assert_eq!(level("Today went fine."), IntensityLevel::Low);
        assert_eq!(level(""), IntensityLevel::Low);
    }

    #[test]
    fn moderate_signals_are_medium() {
        // one '?' plus the medium-tier word "quite" scores 2
        assert_eq!(level("It felt quite odd, right?"), IntensityLevel::Medium);
    }

    #[test]
    fn stacked_signals_are_high() {
        // 1 x '!' (2) + "furious" high-tier (3) = 5
        assert_eq!(
            level("My boss gave me an impossible deadline and I'm furious!"),
            IntensityLevel::High
        );
    }

    #[test]
    fn shouted_words_count() {
        // "THIS" and "UNFAIR" score 1 each; "I" is too short
        assert_eq!(level("THIS felt UNFAIR to them."), IntensityLevel::Medium);
    }

    #[test]
    fn repeated_characters_count_once_per_run() {
        // one maximal run of five 'o' characters scores 2
        assert_eq!(level("nooooo, that hurt."), IntensityLevel::Medium);
    }

    #[test]
    fn intensity_is_pure() {
        let lexicon = Lexicon::new();
        let text = "I am REALLY upset about this!!";
        assert_eq!(
            calculate_intensity(&lexicon, text),
            calculate_intensity(&lexicon, text)
        );
    }
}
