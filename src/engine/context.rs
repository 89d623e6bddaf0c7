//! Context identification: what a diary entry is "about"

use serde::Serialize;

use super::lexicon::{Lexicon, SubTopicPattern};

/// Coarse subject-matter category of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextTopic {
    Work,
    Relationship,
    Health,
    School,
    Financial,
    Personal,
    LifeEvents,
    LossGrief,
    General,
}

impl ContextTopic {
    /// Stable string form, used in API payloads and the diary store
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Relationship => "relationship",
            Self::Health => "health",
            Self::School => "school",
            Self::Financial => "financial",
            Self::Personal => "personal",
            Self::LifeEvents => "life_events",
            Self::LossGrief => "loss_grief",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for ContextTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tense signals detected in a text; flags are not mutually exclusive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TemporalFlags {
    pub past: bool,
    pub present: bool,
    pub future: bool,
}

/// Structured context descriptor produced per call, discarded after use
#[derive(Debug, Clone, Serialize)]
pub struct ContextDescriptor {
    /// Topic with the highest aggregated score; `general` when nothing scored
    pub main_topic: ContextTopic,

    /// First detected sub-topic whose parent matches `main_topic`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_topic: Option<&'static str>,

    /// Every keyword that contributed to a topic score, deduplicated
    pub matched_keywords: Vec<&'static str>,

    /// Trigger adjectives present in the text, in lexicon order
    pub emotional_triggers: Vec<&'static str>,

    /// Tense signals
    pub temporal: TemporalFlags,

    /// Aggregated score of the winning topic (0 for `general`)
    pub topic_score: u32,
}

/// Whole-word (or whole-phrase) containment check
///
/// A match counts only when both ends of the occurrence border a
/// non-alphanumeric character or the text boundary.
pub(crate) fn contains_word(text: &str, word: &str) -> bool {
    let mut start = 0;
    while let Some(pos) = text[start..].find(word) {
        let at = start + pos;
        let end = at + word.len();
        let before_ok = text[..at]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = text[end..].chars().next().is_none_or(|c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        start = at + 1;
    }
    false
}

/// Identify the topical context of a diary entry
///
/// Scoring: a whole-word keyword hit is worth 3 points, a bare substring hit
/// 1 point (checked only when the whole-word check misses, so a keyword never
/// scores twice). A sub-topic phrase hit adds 5 points to its parent topic.
/// Ties break toward the lexicon's topic order; no score at all yields
/// `general`.
#[must_use]
pub fn identify_context(lexicon: &Lexicon, text: &str) -> ContextDescriptor {
    let lower = text.to_lowercase();

    let topics = lexicon.topic_keywords();
    let mut scores = vec![0_u32; topics.len()];
    let mut matched_keywords: Vec<&'static str> = Vec::new();

    for (index, (_, keywords)) in topics.iter().enumerate() {
        for keyword in *keywords {
            if contains_word(&lower, keyword) {
                scores[index] += 3;
            } else if lower.contains(keyword) {
                scores[index] += 1;
            } else {
                continue;
            }
            if !matched_keywords.contains(keyword) {
                matched_keywords.push(keyword);
            }
        }
    }

    // Sub-topic phrases reinforce the parent topic
    let mut candidates: Vec<&'static SubTopicPattern> = Vec::new();
    for pattern in lexicon.sub_topic_patterns() {
        for phrase in pattern.phrases {
            if lower.contains(phrase) {
                if let Some(index) = topics.iter().position(|(t, _)| *t == pattern.parent) {
                    scores[index] += 5;
                }
                if !candidates.iter().any(|c| c.name == pattern.name) {
                    candidates.push(pattern);
                }
            }
        }
    }

    // First topic holding the maximal positive score wins
    let mut main_topic = ContextTopic::General;
    let mut topic_score = 0;
    for (index, (topic, _)) in topics.iter().enumerate() {
        if scores[index] > topic_score {
            topic_score = scores[index];
            main_topic = *topic;
        }
    }

    let sub_topic = candidates
        .iter()
        .find(|c| c.parent == main_topic)
        .map(|c| c.name);

    let (past_markers, present_markers, future_markers) = lexicon.temporal_markers();
    let temporal = TemporalFlags {
        past: past_markers.iter().any(|m| contains_word(&lower, m)),
        present: present_markers.iter().any(|m| contains_word(&lower, m)),
        future: future_markers.iter().any(|m| contains_word(&lower, m)),
    };

    let emotional_triggers = lexicon
        .emotional_triggers()
        .iter()
        .filter(|t| contains_word(&lower, t))
        .copied()
        .collect();

    ContextDescriptor {
        main_topic,
        sub_topic,
        matched_keywords,
        emotional_triggers,
        temporal,
        topic_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::new()
    }

    #[test]
    fn whole_word_matching_respects_boundaries() {
        assert!(contains_word("my boss is tough", "boss"));
        assert!(contains_word("my boss.", "boss"));
        assert!(!contains_word("embossed paper", "boss"));
        assert!(contains_word("i used to run", "used to"));
        assert!(!contains_word("washing machine", "was"));
    }

    #[test]
    fn work_text_scores_work_topic() {
        let ctx = identify_context(
            &lexicon(),
            "My boss gave me an impossible deadline and I'm furious!",
        );
        assert_eq!(ctx.main_topic, ContextTopic::Work);
        assert_eq!(ctx.sub_topic, Some("work_stress"));
        assert!(ctx.matched_keywords.contains(&"boss"));
        assert!(ctx.matched_keywords.contains(&"deadline"));
        assert!(ctx.topic_score >= 6);
    }

    #[test]
    fn empty_text_defaults_to_general() {
        let ctx = identify_context(&lexicon(), "");
        assert_eq!(ctx.main_topic, ContextTopic::General);
        assert_eq!(ctx.sub_topic, None);
        assert!(ctx.matched_keywords.is_empty());
        assert_eq!(ctx.topic_score, 0);
    }

    #[test]
    fn sub_topic_requires_matching_parent() {
        // "exam" drives the school topic; the academic_pressure pattern
        // belongs to school, so it is reported as the sub-topic
        let ctx = identify_context(&lexicon(), "I am scared about my exam tomorrow");
        assert_eq!(ctx.main_topic, ContextTopic::School);
        assert_eq!(ctx.sub_topic, Some("academic_pressure"));
    }

    #[test]
    fn temporal_flags_are_not_exclusive() {
        let ctx = identify_context(&lexicon(), "I was upset yesterday but today I am hopeful");
        assert!(ctx.temporal.past);
        assert!(ctx.temporal.present);
        assert!(!ctx.temporal.future);
    }

    #[test]
    fn future_marker_detected() {
        let ctx = identify_context(&lexicon(), "I am scared about my exam tomorrow");
        assert!(ctx.temporal.future);
        assert!(ctx.temporal.present);
    }

    #[test]
    fn triggers_reported_in_lexicon_order() {
        let ctx = identify_context(&lexicon(), "I'm stressed and so angry about all of this");
        assert_eq!(ctx.emotional_triggers, vec!["angry", "stressed"]);
    }

    #[test]
    fn identify_context_is_deterministic() {
        let lexicon = lexicon();
        let text = "I had a fight with my sister about money";
        let first = identify_context(&lexicon, text);
        let second = identify_context(&lexicon, text);
        assert_eq!(first.main_topic, second.main_topic);
        assert_eq!(first.sub_topic, second.sub_topic);
        assert_eq!(first.matched_keywords, second.matched_keywords);
        assert_eq!(first.topic_score, second.topic_score);
    }
}
