//! Empathetic response engine
//!
//! Turns a diary entry and a classifier's emotion label into a short
//! empathetic reply ending in a follow-up question. The pipeline is pure and
//! deterministic apart from template selection, which goes through the
//! [`Selector`] trait so callers can seed it for reproducible output.

pub mod context;
pub mod intensity;
pub mod lexicon;
pub mod perspective;
pub mod resolve;
pub mod summary;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

pub use context::{ContextDescriptor, ContextTopic, TemporalFlags, identify_context};
pub use intensity::{IntensityLevel, calculate_intensity};
pub use lexicon::Lexicon;
pub use perspective::to_second_person;
pub use resolve::{EmotionCategory, EmotionTag, resolve_emotion};
pub use summary::generate_summary;

/// Source of indices for picking among equally valid phrasings
///
/// `len` is always at least 1; implementations must return a value in
/// `0..len`.
pub trait Selector {
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Default selector backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSelector;

impl Selector for ThreadRngSelector {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic selector for tests and reproducible CLI output
#[derive(Debug)]
pub struct SeededSelector {
    rng: StdRng,
}

impl SeededSelector {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Selector for SeededSelector {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Full result of analyzing one diary entry
#[derive(Debug, Clone, Serialize)]
pub struct EmpathyAnalysis {
    /// Resolved emotion tag the reply speaks to
    pub emotion: EmotionTag,

    /// Discrete intensity level of the text
    pub intensity: IntensityLevel,

    /// Structured context descriptor
    pub context: ContextDescriptor,

    /// Context summary woven into the reply
    pub summary: String,

    /// The empathetic reply, ending in a follow-up question
    pub response: String,
}

/// The engine: an immutable lexicon plus the analysis pipeline
pub struct EmpathyEngine {
    lexicon: Lexicon,
}

impl EmpathyEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::new(),
        }
    }

    /// Run the full pipeline on one diary entry
    ///
    /// The emotion label is an untrusted hint; see [`resolve_emotion`] for
    /// how it maps to a handled tag. Never fails: empty or unrecognized
    /// input still yields a generic but grammatical reply.
    pub fn analyze(
        &self,
        text: &str,
        emotion_label: &str,
        selector: &mut dyn Selector,
    ) -> EmpathyAnalysis {
        let lowered = text.to_lowercase();

        let context = identify_context(&self.lexicon, text);
        let emotion = resolve_emotion(&self.lexicon, &lowered, &context, emotion_label);
        let summary = generate_summary(&self.lexicon, text, &context);
        let intensity = calculate_intensity(&self.lexicon, text);

        let templates = self.lexicon.templates(emotion);
        let template = templates[selector.pick_index(templates.len())];

        let mut follow_ups: Vec<&'static str> =
            self.lexicon.follow_ups(intensity).to_vec();
        if let Some(extra) = self
            .lexicon
            .topic_follow_ups(context.main_topic, emotion, intensity)
        {
            follow_ups.extend_from_slice(extra);
        }
        let follow_up = follow_ups[selector.pick_index(follow_ups.len())];

        let response = format!("{} {}", template.replace("{context}", &summary), follow_up);

        EmpathyAnalysis {
            emotion,
            intensity,
            context,
            summary,
            response,
        }
    }

    /// Convenience wrapper returning only the reply text
    pub fn generate_response(
        &self,
        text: &str,
        emotion_label: &str,
        selector: &mut dyn Selector,
    ) -> String {
        self.analyze(text, emotion_label, selector).response
    }

    /// Identify the topical context of a text
    #[must_use]
    pub fn identify_context(&self, text: &str) -> ContextDescriptor {
        identify_context(&self.lexicon, text)
    }

    /// Compute the intensity level of a text
    #[must_use]
    pub fn calculate_intensity(&self, text: &str) -> IntensityLevel {
        calculate_intensity(&self.lexicon, text)
    }

    /// Rewrite first-person phrasing into second person
    #[must_use]
    pub fn to_second_person(&self, text: &str) -> String {
        to_second_person(&self.lexicon, text)
    }

    /// Summarize the context of a text
    #[must_use]
    pub fn context_summary(&self, text: &str) -> String {
        let context = identify_context(&self.lexicon, text);
        generate_summary(&self.lexicon, text, &context)
    }
}

impl Default for EmpathyEngine {
    fn default() -> Self {
        Self::new()
    }
}
