//! Context summarization: a short phrase insertable into response templates

use super::context::ContextDescriptor;
use super::intensity::IntensityLevel;
use super::lexicon::Lexicon;
use super::perspective::to_second_person;

/// Openers after which a summary already reads naturally
const NATURAL_OPENERS: &[&str] = &["the", "this", "what", "how", "that"];

/// Produce a short phrase describing what the text is about
///
/// The result is always grammatically insertable after "about" or as the
/// object of "with". Two paths: a curated phrase keyed by the detected
/// sub-topic (adjusted for tense and trigger words), or the most relevant
/// sentence of the text rewritten into second person. Falls back to a fixed
/// per-topic phrase when neither yields anything.
#[must_use]
pub fn generate_summary(lexicon: &Lexicon, text: &str, context: &ContextDescriptor) -> String {
    if let Some(sub_topic) = context.sub_topic {
        return sub_topic_summary(lexicon, sub_topic, context);
    }
    sentence_summary(lexicon, text, context)
        .unwrap_or_else(|| lexicon.topic_fallback(context.main_topic).to_string())
}

/// Summary built from the curated sub-topic phrase table
fn sub_topic_summary(
    lexicon: &Lexicon,
    sub_topic: &str,
    context: &ContextDescriptor,
) -> String {
    let mut summary = lexicon.sub_topic_phrase(sub_topic).map_or_else(
        || format!("what you're experiencing with {}", context.main_topic),
        str::to_string,
    );

    if context.temporal.past {
        summary = summary.replace("you're", "you were");
        summary = format!("what you went through with {summary}");
    } else if context.temporal.future {
        summary = format!("what you're anticipating with {summary}");
    }

    if let Some(trigger) = context.emotional_triggers.first() {
        summary = format!("how {trigger} you're feeling about {summary}");
    }

    summary
}

/// Summary built from the most relevant sentence of the text
fn sentence_summary(
    lexicon: &Lexicon,
    text: &str,
    context: &ContextDescriptor,
) -> Option<String> {
    let best = best_sentence(lexicon, text, context)?;

    let converted = to_second_person(lexicon, best);
    let converted = strip_leading_you(converted.trim());
    let converted = converted.trim().to_lowercase();
    if converted.is_empty() {
        return None;
    }

    if NATURAL_OPENERS.iter().any(|o| converted.starts_with(o)) {
        Some(converted)
    } else {
        Some(format!("what happened with {converted}"))
    }
}

/// Pick the highest-scoring sentence with more than three words
///
/// Scoring: +2 per matched context keyword, +3 per emotional trigger, +1 per
/// intensity word of any tier. Ties break toward the earlier sentence; a
/// sentence must score at least one point to qualify.
fn best_sentence<'a>(
    lexicon: &Lexicon,
    text: &'a str,
    context: &ContextDescriptor,
) -> Option<&'a str> {
    let mut best: Option<(&str, u32)> = None;

    for sentence in text.split(['.', '!', '?']) {
        let sentence = sentence.trim();
        if sentence.split_whitespace().count() <= 3 {
            continue;
        }

        let lower = sentence.to_lowercase();
        let mut score = 0_u32;

        for keyword in &context.matched_keywords {
            if lower.contains(keyword) {
                score += 2;
            }
        }
        for trigger in &context.emotional_triggers {
            if lower.contains(trigger) {
                score += 3;
            }
        }
        for level in [
            IntensityLevel::High,
            IntensityLevel::Medium,
            IntensityLevel::Low,
        ] {
            for word in lexicon.intensity_words(level) {
                if lower.contains(word) {
                    score += 1;
                }
            }
        }

        if score > 0 && best.is_none_or(|(_, s)| score > s) {
            best = Some((sentence, score));
        }
    }

    best.map(|(sentence, _)| sentence)
}

/// Drop a leading "you " (any case) left over from perspective conversion
fn strip_leading_you(text: &str) -> &str {
    let lower = text.to_lowercase();
    if lower.starts_with("you ") {
        &text[4..]
    } else {
        text
    }
}
