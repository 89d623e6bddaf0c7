//! Emotion tag resolution
//!
//! The engine replies in one of nine handled emotion tags. Classifier labels
//! arrive untrusted and possibly fine-grained ("grief", "nervousness") or
//! unknown; this module deterministically maps any label to a handled tag
//! using the lexicon's category map and an ordered keyword rule table.

use serde::Serialize;

use super::context::{ContextDescriptor, ContextTopic, contains_word};
use super::lexicon::Lexicon;

/// Broad emotion category a fine-grained label maps into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionCategory {
    Positive,
    Negative,
    Neutral,
}

/// The nine emotion tags the engine can reply in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionTag {
    Anger,
    Sadness,
    Fear,
    Joy,
    Surprise,
    Disgust,
    Disappointment,
    Embarrassment,
    Neutral,
}

impl EmotionTag {
    /// All handled tags
    pub const ALL: [Self; 9] = [
        Self::Anger,
        Self::Sadness,
        Self::Fear,
        Self::Joy,
        Self::Surprise,
        Self::Disgust,
        Self::Disappointment,
        Self::Embarrassment,
        Self::Neutral,
    ];

    /// Stable string form, used in API payloads and the diary store
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anger => "anger",
            Self::Sadness => "sadness",
            Self::Fear => "fear",
            Self::Joy => "joy",
            Self::Surprise => "surprise",
            Self::Disgust => "disgust",
            Self::Disappointment => "disappointment",
            Self::Embarrassment => "embarrassment",
            Self::Neutral => "neutral",
        }
    }

    /// Parse a handled tag from its string form
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "anger" => Some(Self::Anger),
            "sadness" => Some(Self::Sadness),
            "fear" => Some(Self::Fear),
            "joy" => Some(Self::Joy),
            "surprise" => Some(Self::Surprise),
            "disgust" => Some(Self::Disgust),
            "disappointment" => Some(Self::Disappointment),
            "embarrassment" => Some(Self::Embarrassment),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

impl std::fmt::Display for EmotionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule of the negative-emotion resolution table
struct NegativeRule {
    tag: EmotionTag,
    /// Whole-word keywords checked against the lowered text
    keywords: &'static [&'static str],
    /// Sub-topics that imply this tag directly
    sub_topics: &'static [&'static str],
}

/// Ordered rule table for negative-category labels; first match wins
const NEGATIVE_RULES: &[NegativeRule] = &[
    NegativeRule {
        tag: EmotionTag::Anger,
        keywords: &["frustrated", "angry", "mad", "infuriated"],
        sub_topics: &["work_stress"],
    },
    NegativeRule {
        tag: EmotionTag::Sadness,
        keywords: &["sad", "depressed", "heartbroken", "devastated"],
        sub_topics: &["relationship_loss"],
    },
    NegativeRule {
        tag: EmotionTag::Fear,
        keywords: &["scared", "afraid", "worried", "anxious", "nervous"],
        sub_topics: &[],
    },
    NegativeRule {
        tag: EmotionTag::Disappointment,
        keywords: &["disappointed", "let down", "expected", "hoped"],
        sub_topics: &[],
    },
    NegativeRule {
        tag: EmotionTag::Embarrassment,
        keywords: &["embarrassed", "ashamed", "humiliated", "mortified"],
        sub_topics: &[],
    },
    NegativeRule {
        tag: EmotionTag::Disgust,
        keywords: &["disgusted", "repulsed", "sick", "revolting"],
        sub_topics: &[],
    },
];

/// Resolve an untrusted classifier label to a handled emotion tag
///
/// Already-handled tags pass through. Mapped labels collapse to their
/// category: positive becomes joy, neutral stays neutral, and negative runs
/// the keyword rule table (defaulting to anger for work/school contexts,
/// sadness otherwise). Labels missing from the map entirely also run the
/// rule table so emotional vocabulary in the text is honored, and fall back
/// to neutral when nothing matches. Deterministic for identical inputs.
#[must_use]
pub fn resolve_emotion(
    lexicon: &Lexicon,
    lowered_text: &str,
    context: &ContextDescriptor,
    label: &str,
) -> EmotionTag {
    let label = label.trim().to_lowercase();

    if let Some(tag) = EmotionTag::from_str(&label) {
        return tag;
    }

    match lexicon.category_for(&label) {
        Some(EmotionCategory::Positive) => EmotionTag::Joy,
        Some(EmotionCategory::Neutral) => EmotionTag::Neutral,
        Some(EmotionCategory::Negative) => {
            negative_tag(lowered_text, context).unwrap_or_else(|| negative_default(context))
        }
        None => negative_tag(lowered_text, context).unwrap_or(EmotionTag::Neutral),
    }
}

/// Run the ordered negative rule table; `None` when no rule matches
fn negative_tag(lowered_text: &str, context: &ContextDescriptor) -> Option<EmotionTag> {
    for rule in NEGATIVE_RULES {
        let sub_topic_hit = context
            .sub_topic
            .is_some_and(|s| rule.sub_topics.contains(&s));
        let keyword_hit = rule
            .keywords
            .iter()
            .any(|k| contains_word(lowered_text, k));
        if sub_topic_hit || keyword_hit {
            return Some(rule.tag);
        }
    }
    None
}

/// Context-aware default for unmatched negative labels
const fn negative_default(context: &ContextDescriptor) -> EmotionTag {
    match context.main_topic {
        ContextTopic::Work | ContextTopic::School => EmotionTag::Anger,
        _ => EmotionTag::Sadness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::context::identify_context;

    fn resolve(text: &str, label: &str) -> EmotionTag {
        let lexicon = Lexicon::new();
        let context = identify_context(&lexicon, text);
        resolve_emotion(&lexicon, &text.to_lowercase(), &context, label)
    }

    #[test]
    fn handled_tags_pass_through() {
        assert_eq!(resolve("whatever text", "anger"), EmotionTag::Anger);
        assert_eq!(resolve("whatever text", "JOY"), EmotionTag::Joy);
        assert_eq!(resolve("", "neutral"), EmotionTag::Neutral);
    }

    #[test]
    fn positive_labels_collapse_to_joy() {
        assert_eq!(resolve("we celebrated all night", "gratitude"), EmotionTag::Joy);
        assert_eq!(resolve("such relief", "relief"), EmotionTag::Joy);
    }

    #[test]
    fn neutral_category_stays_neutral() {
        assert_eq!(resolve("not sure what to think", "confusion"), EmotionTag::Neutral);
    }

    #[test]
    fn grief_maps_through_negative_rules() {
        assert_eq!(
            resolve("My childhood dog passed away and I am heartbroken", "grief"),
            EmotionTag::Sadness
        );
    }

    #[test]
    fn negative_rules_fire_in_order() {
        // "frustrated" (anger) outranks "worried" (fear) by table order
        assert_eq!(
            resolve("frustrated and worried at once", "annoyance"),
            EmotionTag::Anger
        );
    }

    #[test]
    fn negative_default_depends_on_topic() {
        // no rule keyword present; work context defaults to anger
        assert_eq!(
            resolve("my boss changed the project scope again", "disapproval"),
            EmotionTag::Anger
        );
        // general context defaults to sadness
        assert_eq!(resolve("everything feels gray lately", "remorse"), EmotionTag::Sadness);
    }

    #[test]
    fn unknown_label_honors_text_keywords() {
        assert_eq!(
            resolve("I am scared about my exam tomorrow", "unknown_label"),
            EmotionTag::Fear
        );
    }

    #[test]
    fn unknown_label_without_signals_is_neutral() {
        assert_eq!(resolve("we went to the market", "mixed_emotions"), EmotionTag::Neutral);
    }
}
