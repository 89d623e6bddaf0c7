//! Static lexicon tables for the empathy engine
//!
//! All tables are fixed at compile time. The only work done at runtime is
//! compiling the ordered perspective-substitution rules, which happens once
//! in [`Lexicon::new`]. The resulting store is immutable and shared by
//! reference into every component.

use regex::Regex;

use super::context::ContextTopic;
use super::intensity::IntensityLevel;
use super::resolve::{EmotionCategory, EmotionTag};

/// Marker words signalling high emotional intensity (weight 3, substring match)
const INTENSITY_HIGH: &[&str] = &[
    "extremely",
    "absolutely",
    "completely",
    "totally",
    "really",
    "very",
    "so",
    "incredibly",
    "devastated",
    "furious",
    "ecstatic",
    "terrified",
    "overwhelmed",
];

/// Marker words signalling medium emotional intensity (weight 1)
const INTENSITY_MEDIUM: &[&str] = &[
    "quite", "rather", "pretty", "fairly", "somewhat", "moderately",
];

/// Marker phrases signalling low emotional intensity
const INTENSITY_LOW: &[&str] = &["a bit", "slightly", "kind of", "sort of", "a little"];

/// Fine-grained classifier labels mapped to broad categories (many-to-one)
const EMOTION_CATEGORIES: &[(&str, EmotionCategory)] = &[
    ("admiration", EmotionCategory::Positive),
    ("amusement", EmotionCategory::Positive),
    ("approval", EmotionCategory::Positive),
    ("caring", EmotionCategory::Positive),
    ("curiosity", EmotionCategory::Positive),
    ("desire", EmotionCategory::Positive),
    ("excitement", EmotionCategory::Positive),
    ("gratitude", EmotionCategory::Positive),
    ("joy", EmotionCategory::Positive),
    ("love", EmotionCategory::Positive),
    ("optimism", EmotionCategory::Positive),
    ("pride", EmotionCategory::Positive),
    ("realization", EmotionCategory::Positive),
    ("relief", EmotionCategory::Positive),
    ("anger", EmotionCategory::Negative),
    ("annoyance", EmotionCategory::Negative),
    ("disappointment", EmotionCategory::Negative),
    ("disapproval", EmotionCategory::Negative),
    ("disgust", EmotionCategory::Negative),
    ("embarrassment", EmotionCategory::Negative),
    ("fear", EmotionCategory::Negative),
    ("grief", EmotionCategory::Negative),
    ("nervousness", EmotionCategory::Negative),
    ("remorse", EmotionCategory::Negative),
    ("sadness", EmotionCategory::Negative),
    ("confusion", EmotionCategory::Neutral),
    ("surprise", EmotionCategory::Neutral),
    ("neutral", EmotionCategory::Neutral),
];

/// Topic keyword sets, in tie-break order: the first topic reaching the
/// maximal score wins when two topics score equally
const TOPIC_KEYWORDS: &[(ContextTopic, &[&str])] = &[
    (
        ContextTopic::Work,
        &[
            "job",
            "work",
            "boss",
            "colleague",
            "office",
            "meeting",
            "project",
            "deadline",
            "career",
            "workplace",
            "coworker",
            "manager",
            "employee",
            "salary",
            "promotion",
            "interview",
            "resignation",
            "fired",
            "hired",
            "overtime",
            "corporate",
            "company",
            "supervisor",
            "team",
            "performance",
            "evaluation",
            "professional",
            "business",
        ],
    ),
    (
        ContextTopic::Relationship,
        &[
            "partner",
            "friend",
            "family",
            "relationship",
            "love",
            "breakup",
            "dating",
            "boyfriend",
            "girlfriend",
            "husband",
            "wife",
            "marriage",
            "divorce",
            "mother",
            "father",
            "sister",
            "brother",
            "parents",
            "children",
            "kids",
            "ex",
            "crush",
            "romantic",
            "social",
            "friendship",
            "argue",
            "fight",
        ],
    ),
    (
        ContextTopic::Health,
        &[
            "sick",
            "doctor",
            "hospital",
            "pain",
            "health",
            "medicine",
            "treatment",
            "illness",
            "medical",
            "diagnosis",
            "surgery",
            "therapy",
            "symptoms",
            "tired",
            "exhausted",
            "headache",
            "fever",
            "appointment",
            "prescription",
        ],
    ),
    (
        ContextTopic::School,
        &[
            "school",
            "teacher",
            "student",
            "exam",
            "grade",
            "homework",
            "class",
            "university",
            "college",
            "study",
            "education",
            "degree",
            "semester",
            "course",
            "professor",
            "assignment",
            "thesis",
            "graduation",
            "academic",
        ],
    ),
    (
        ContextTopic::Financial,
        &[
            "money",
            "financial",
            "budget",
            "debt",
            "bills",
            "expense",
            "income",
            "savings",
            "loan",
            "credit",
            "payment",
            "broke",
            "expensive",
            "cheap",
            "afford",
            "purchase",
            "investment",
            "mortgage",
            "rent",
            "tax",
        ],
    ),
    (
        ContextTopic::Personal,
        &[
            "myself",
            "personal",
            "identity",
            "self",
            "confidence",
            "growth",
            "anxiety",
            "depression",
            "stress",
            "mental",
            "therapy",
            "counseling",
            "lonely",
            "overwhelmed",
            "tired",
            "emotional",
            "feelings",
            "thoughts",
        ],
    ),
    (
        ContextTopic::LifeEvents,
        &[
            "birthday",
            "wedding",
            "funeral",
            "graduation",
            "moving",
            "travel",
            "vacation",
            "holiday",
            "celebration",
            "anniversary",
            "milestone",
        ],
    ),
    (
        ContextTopic::LossGrief,
        &[
            "death",
            "died",
            "funeral",
            "grief",
            "loss",
            "goodbye",
            "memorial",
            "miss",
            "gone",
            "passed away",
            "mourning",
            "grieving",
        ],
    ),
];

/// A sub-topic pattern with its parent topic carried explicitly
///
/// The parent cannot be derived from the sub-topic name: `academic_pressure`
/// belongs to `school` and `life_transition` to `life_events`.
#[derive(Debug, Clone, Copy)]
pub struct SubTopicPattern {
    pub name: &'static str,
    pub parent: ContextTopic,
    pub phrases: &'static [&'static str],
}

/// Sub-topic phrase patterns; each phrase hit adds 5 points to the parent topic
const SUB_TOPIC_PATTERNS: &[SubTopicPattern] = &[
    SubTopicPattern {
        name: "work_stress",
        parent: ContextTopic::Work,
        phrases: &["deadline", "pressure", "overtime", "workload", "demanding"],
    },
    SubTopicPattern {
        name: "work_conflict",
        parent: ContextTopic::Work,
        phrases: &["boss", "manager", "colleague", "workplace drama", "unfair"],
    },
    SubTopicPattern {
        name: "relationship_conflict",
        parent: ContextTopic::Relationship,
        phrases: &["argue", "fight", "disagree", "tension", "misunderstanding"],
    },
    SubTopicPattern {
        name: "relationship_loss",
        parent: ContextTopic::Relationship,
        phrases: &["breakup", "divorce", "separation", "ended", "over"],
    },
    SubTopicPattern {
        name: "health_concern",
        parent: ContextTopic::Health,
        phrases: &["worried about", "symptoms", "pain", "sick", "medical"],
    },
    SubTopicPattern {
        name: "academic_pressure",
        parent: ContextTopic::School,
        phrases: &["exam", "test", "grade", "failing", "stressed about school"],
    },
    SubTopicPattern {
        name: "financial_stress",
        parent: ContextTopic::Financial,
        phrases: &["can't afford", "broke", "bills", "debt", "money problems"],
    },
    SubTopicPattern {
        name: "personal_growth",
        parent: ContextTopic::Personal,
        phrases: &[
            "learning",
            "improving",
            "changing",
            "developing",
            "working on myself",
        ],
    },
    SubTopicPattern {
        name: "life_transition",
        parent: ContextTopic::LifeEvents,
        phrases: &["moving", "new job", "starting", "ending", "change"],
    },
];

/// Natural-language summary phrases keyed by sub-topic
const SUB_TOPIC_PHRASES: &[(&str, &str)] = &[
    (
        "work_stress",
        "the intense pressure and demands you're facing at work",
    ),
    (
        "work_conflict",
        "the difficult situation you're dealing with at your workplace",
    ),
    (
        "relationship_conflict",
        "the tensions and disagreements in your relationship",
    ),
    ("relationship_loss", "the painful end of your relationship"),
    ("health_concern", "the health issues you're worried about"),
    (
        "academic_pressure",
        "the academic stress and pressure you're under",
    ),
    (
        "financial_stress",
        "the financial difficulties you're going through",
    ),
    (
        "personal_growth",
        "the personal changes and growth you're experiencing",
    ),
    ("life_transition", "the major life changes you're navigating"),
];

/// Fallback summary phrases keyed by main topic
const TOPIC_FALLBACK_PHRASES: &[(ContextTopic, &str)] = &[
    (ContextTopic::Work, "your work situation"),
    (ContextTopic::Relationship, "your relationship situation"),
    (ContextTopic::Health, "your health concerns"),
    (ContextTopic::School, "your academic situation"),
    (ContextTopic::Financial, "your financial concerns"),
    (ContextTopic::Personal, "what you're going through personally"),
    (ContextTopic::LifeEvents, "this important event in your life"),
    (ContextTopic::LossGrief, "the loss you're experiencing"),
];

/// Temporal marker words/phrases (whole-word matched)
const PAST_MARKERS: &[&str] = &[
    "was",
    "were",
    "had",
    "did",
    "yesterday",
    "last",
    "ago",
    "before",
    "used to",
];
const PRESENT_MARKERS: &[&str] = &["am", "is", "are", "now", "today", "currently", "right now"];
const FUTURE_MARKERS: &[&str] = &[
    "will",
    "going to",
    "tomorrow",
    "next",
    "soon",
    "planning",
    "hope",
];

/// Emotional trigger adjectives, in reporting order
const EMOTIONAL_TRIGGERS: &[&str] = &[
    "frustrated",
    "angry",
    "upset",
    "sad",
    "happy",
    "excited",
    "worried",
    "anxious",
    "scared",
    "disappointed",
    "overwhelmed",
    "stressed",
    "confused",
];

/// Response template pools per emotion tag
///
/// Each template contains exactly one `{context}` placeholder.
const ANGER_TEMPLATES: &[&str] = &[
    "I can really sense the frustration in your words about {context}. That level of anger is completely understandable given what you're dealing with.",
    "Your anger comes through clearly when you talk about {context}. It's natural to feel this heated when facing such challenges.",
    "I hear how infuriated you are by {context}. That sounds like an incredibly maddening situation to be in.",
    "The frustration you're feeling about {context} is so valid. Anyone would be upset dealing with something like that.",
    "I can feel how much {context} has gotten under your skin. That kind of anger shows how much this matters to you.",
    "It's clear that {context} has really pushed you to your limit. Your anger is a completely normal response to such treatment.",
];

const SADNESS_TEMPLATES: &[&str] = &[
    "I can feel the deep sadness in your words about {context}. That kind of pain must be so heavy to carry.",
    "The grief you're experiencing with {context} comes through so clearly. I'm sorry you're going through something this difficult.",
    "Your sadness about {context} is palpable. It takes real strength to share something this painful.",
    "I hear the heartbreak in what you're saying about {context}. That level of sorrow would be overwhelming for anyone.",
    "The pain you're feeling from {context} is so evident. You're dealing with something truly heart-wrenching.",
    "I can sense how much {context} is weighing on your heart. That depth of sadness shows how deeply you care.",
];

const FEAR_TEMPLATES: &[&str] = &[
    "I can hear the real fear in your voice about {context}. Those concerns feel very legitimate and understandable.",
    "The anxiety you're experiencing around {context} makes complete sense. That uncertainty would be frightening for anyone.",
    "Your worry about {context} comes through so clearly. It's natural to feel scared when facing something unknown like this.",
    "I can feel how much {context} is causing you to worry. That kind of fear shows you're really thinking about what matters.",
    "The apprehension you have about {context} is completely valid. Anyone would feel nervous in your situation.",
    "I understand why {context} feels so threatening. Your fear is a normal response to such uncertainty.",
];

const JOY_TEMPLATES: &[&str] = &[
    "The happiness radiating from your words about {context} is absolutely infectious! I can feel your joy through every sentence.",
    "Your excitement about {context} is so wonderful to hear. It's beautiful when life brings us these bright moments.",
    "I love the enthusiasm in your voice when you talk about {context}. That kind of joy is truly special.",
    "The delight you're feeling about {context} really shines through. It's amazing how happiness can transform everything.",
    "Your pure joy regarding {context} is so heartwarming. These are the moments that make everything worthwhile.",
    "I can practically feel you glowing when you describe {context}. That level of happiness is absolutely magical.",
];

const SURPRISE_TEMPLATES: &[&str] = &[
    "What a shocking turn of events with {context}! I can only imagine how that must have caught you completely off guard.",
    "The surprise you experienced with {context} really comes through. That must have been such an unexpected moment.",
    "I can hear how absolutely stunned you were by {context}. Life certainly has a way of throwing us curveballs.",
    "That revelation about {context} sounds like it completely changed your perspective. What an unexpected development!",
    "The astonishment in your words about {context} is so clear. Sometimes life surprises us in the most unexpected ways.",
    "I can feel how bewildered you must be by {context}. That kind of surprise can really shake up everything we thought we knew.",
];

const DISGUST_TEMPLATES: &[&str] = &[
    "I can understand why {context} would be so off-putting to you. That kind of revulsion is a completely natural response.",
    "Your strong reaction to {context} makes perfect sense. Some things are just genuinely disturbing and wrong.",
    "The repulsion you feel toward {context} is completely justified. That sounds truly unpleasant to deal with.",
    "I hear how much {context} bothers you on a fundamental level. That kind of disgust shows your strong moral compass.",
    "Your aversion to {context} is completely understandable. Some situations are just inherently repulsive.",
    "I can feel how much {context} goes against your core values. That level of disgust shows you know what's right.",
];

const DISAPPOINTMENT_TEMPLATES: &[&str] = &[
    "The disappointment in your words about {context} is so palpable. That kind of letdown cuts really deep.",
    "I can hear how much {context} fell short of your hopes. That disappointment must sting so much.",
    "Your sense of being let down by {context} comes through clearly. Unmet expectations can be so crushing.",
    "The disillusionment you're feeling about {context} is completely understandable. That's such a hard pill to swallow.",
    "I can feel how deflated you are by {context}. When our hopes are dashed, it leaves such an empty feeling.",
    "Your disappointment about {context} is so valid. It hurts when reality doesn't match what we were hoping for.",
];

const EMBARRASSMENT_TEMPLATES: &[&str] = &[
    "I can sense how mortified you feel about {context}. That kind of embarrassment is so uncomfortable and overwhelming.",
    "The self-consciousness you're experiencing from {context} is completely understandable. We've all been in those cringe-worthy moments.",
    "Your embarrassment about {context} comes through so clearly. Those moments when we feel exposed are truly awful.",
    "I hear how much {context} made you want to disappear. That level of embarrassment is genuinely painful.",
    "The shame you're feeling about {context} is so relatable. Sometimes we just want the ground to swallow us up.",
    "I can feel how much {context} is making you second-guess yourself. Embarrassment has a way of making everything feel magnified.",
];

const NEUTRAL_TEMPLATES: &[&str] = &[
    "Thank you for sharing your thoughts about {context}. I can hear that this is important to you, and I'm here to listen.",
    "I appreciate you opening up about {context}. Your perspective on this situation is really valuable.",
    "What you're sharing about {context} gives me insight into what you're experiencing. I'm glad you felt comfortable expressing this.",
    "I hear what you're saying about {context}. It's clear you've been thinking deeply about this situation.",
    "Your reflection on {context} shows a lot of thoughtfulness. I'm honored that you're sharing this with me.",
    "I can see that {context} has been on your mind. Thank you for trusting me with these thoughts.",
];

/// Follow-up phrase pools per intensity level
const HIGH_INTENSITY_FOLLOW_UPS: &[&str] = &[
    "Would you like to talk more about this?",
    "How are you coping with everything right now?",
    "Is there anything specific that might help you feel better?",
    "Would it help to explore this situation further?",
    "What kind of support would be most helpful for you?",
    "Do you have people around you who understand what you're going through?",
    "How long have you been dealing with feelings this intense?",
    "What usually helps you when things feel this overwhelming?",
];

const MEDIUM_INTENSITY_FOLLOW_UPS: &[&str] = &[
    "How are you feeling about everything overall?",
    "Would you like to share more about your experience?",
    "What's been on your mind lately about this?",
    "How can I best support you through this situation?",
    "What would help you feel better about this?",
    "Have you been able to process these feelings with anyone?",
    "What aspects of this situation feel most challenging?",
    "How has this been affecting your daily life?",
];

const LOW_INTENSITY_FOLLOW_UPS: &[&str] = &[
    "Thanks for sharing this with me.",
    "I'm here if you need to talk more about it.",
    "How has your day been overall?",
    "What else has been on your mind?",
    "How are you doing with everything else in your life?",
    "Is there anything else you'd like to explore?",
    "What other thoughts or feelings have come up for you?",
    "How do you usually handle situations like this?",
];

/// Curated extra follow-ups for work topics at high intensity
const WORK_FOLLOW_UPS: &[&str] = &[
    "How are you managing the stress at work?",
    "What support do you have in your workplace?",
    "Have you been able to talk to anyone about this situation?",
];

/// Curated extra follow-ups for relationship sadness/anger
const RELATIONSHIP_FOLLOW_UPS: &[&str] = &[
    "Do you have support from friends or family right now?",
    "How are you taking care of yourself through this?",
    "What has been helping you process these feelings?",
];

/// Ordered first-to-second person substitutions
///
/// Contractions and verb phrases come before the bare pronouns so that
/// "I'm" is never mangled by the standalone "I" rule.
const PERSPECTIVE_RULES: &[(&str, &str)] = &[
    (r"\bI am\b", "you are"),
    (r"\bI'm\b", "you're"),
    (r"\bI was\b", "you were"),
    (r"\bI have\b", "you have"),
    (r"\bI've\b", "you've"),
    (r"\bI had\b", "you had"),
    (r"\bI'd\b", "you'd"),
    (r"\bI will\b", "you will"),
    (r"\bI'll\b", "you'll"),
    (r"\bI cannot\b", "you cannot"),
    (r"\bI can't\b", "you can't"),
    (r"\bI can\b", "you can"),
    (r"\bI don't\b", "you don't"),
    (r"\bI do\b", "you do"),
    (r"\bI didn't\b", "you didn't"),
    (r"\bI did\b", "you did"),
    (r"\bI feel\b", "you feel"),
    (r"\bI think\b", "you think"),
    (r"\bI know\b", "you know"),
    (r"\bI want\b", "you want"),
    (r"\bI need\b", "you need"),
    (r"\bI like\b", "you like"),
    (r"\bI love\b", "you love"),
    (r"\bI hate\b", "you hate"),
    (r"\bI get\b", "you get"),
    (r"\bI got\b", "you got"),
    (r"\bI went\b", "you went"),
    (r"\bI go\b", "you go"),
    (r"\bI see\b", "you see"),
    (r"\bI saw\b", "you saw"),
    (r"\bI hear\b", "you hear"),
    (r"\bI heard\b", "you heard"),
    (r"\bI\b", "you"),
    (r"\bme\b", "you"),
    (r"\bmy\b", "your"),
    (r"\bmine\b", "yours"),
    (r"\bmyself\b", "yourself"),
];

/// Immutable lexicon store shared by every engine component
pub struct Lexicon {
    perspective_rules: Vec<(Regex, &'static str)>,
}

impl Lexicon {
    /// Build the lexicon, compiling the perspective substitution rules
    #[must_use]
    pub fn new() -> Self {
        let perspective_rules = PERSPECTIVE_RULES
            .iter()
            .map(|(pattern, replacement)| {
                let re = Regex::new(&format!("(?i){pattern}"))
                    .expect("static perspective pattern is valid");
                (re, *replacement)
            })
            .collect();

        Self { perspective_rules }
    }

    /// Intensity marker words for a tier
    #[must_use]
    pub const fn intensity_words(&self, level: IntensityLevel) -> &'static [&'static str] {
        match level {
            IntensityLevel::High => INTENSITY_HIGH,
            IntensityLevel::Medium => INTENSITY_MEDIUM,
            IntensityLevel::Low => INTENSITY_LOW,
        }
    }

    /// Map a fine-grained classifier label to its broad category
    #[must_use]
    pub fn category_for(&self, label: &str) -> Option<EmotionCategory> {
        EMOTION_CATEGORIES
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, category)| *category)
    }

    /// Topic keyword sets in tie-break order
    #[must_use]
    pub const fn topic_keywords(&self) -> &'static [(ContextTopic, &'static [&'static str])] {
        TOPIC_KEYWORDS
    }

    /// Sub-topic phrase patterns
    #[must_use]
    pub const fn sub_topic_patterns(&self) -> &'static [SubTopicPattern] {
        SUB_TOPIC_PATTERNS
    }

    /// Summary phrase for a sub-topic, if one is curated
    #[must_use]
    pub fn sub_topic_phrase(&self, name: &str) -> Option<&'static str> {
        SUB_TOPIC_PHRASES
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, phrase)| *phrase)
    }

    /// Fallback summary phrase for a main topic
    #[must_use]
    pub fn topic_fallback(&self, topic: ContextTopic) -> &'static str {
        TOPIC_FALLBACK_PHRASES
            .iter()
            .find(|(key, _)| *key == topic)
            .map_or("what you're going through", |(_, phrase)| *phrase)
    }

    /// Temporal marker lists: (past, present, future)
    #[must_use]
    pub const fn temporal_markers(
        &self,
    ) -> (
        &'static [&'static str],
        &'static [&'static str],
        &'static [&'static str],
    ) {
        (PAST_MARKERS, PRESENT_MARKERS, FUTURE_MARKERS)
    }

    /// Emotional trigger adjectives in reporting order
    #[must_use]
    pub const fn emotional_triggers(&self) -> &'static [&'static str] {
        EMOTIONAL_TRIGGERS
    }

    /// Response template pool for an emotion tag
    #[must_use]
    pub const fn templates(&self, tag: EmotionTag) -> &'static [&'static str] {
        match tag {
            EmotionTag::Anger => ANGER_TEMPLATES,
            EmotionTag::Sadness => SADNESS_TEMPLATES,
            EmotionTag::Fear => FEAR_TEMPLATES,
            EmotionTag::Joy => JOY_TEMPLATES,
            EmotionTag::Surprise => SURPRISE_TEMPLATES,
            EmotionTag::Disgust => DISGUST_TEMPLATES,
            EmotionTag::Disappointment => DISAPPOINTMENT_TEMPLATES,
            EmotionTag::Embarrassment => EMBARRASSMENT_TEMPLATES,
            EmotionTag::Neutral => NEUTRAL_TEMPLATES,
        }
    }

    /// Follow-up phrase pool for an intensity level
    #[must_use]
    pub const fn follow_ups(&self, level: IntensityLevel) -> &'static [&'static str] {
        match level {
            IntensityLevel::High => HIGH_INTENSITY_FOLLOW_UPS,
            IntensityLevel::Medium => MEDIUM_INTENSITY_FOLLOW_UPS,
            IntensityLevel::Low => LOW_INTENSITY_FOLLOW_UPS,
        }
    }

    /// Curated extra follow-ups for specific topic/emotion combinations
    #[must_use]
    pub fn topic_follow_ups(
        &self,
        topic: ContextTopic,
        tag: EmotionTag,
        level: IntensityLevel,
    ) -> Option<&'static [&'static str]> {
        match topic {
            ContextTopic::Work if level == IntensityLevel::High => Some(WORK_FOLLOW_UPS),
            ContextTopic::Relationship
                if matches!(tag, EmotionTag::Sadness | EmotionTag::Anger) =>
            {
                Some(RELATIONSHIP_FOLLOW_UPS)
            }
            _ => None,
        }
    }

    /// Compiled perspective substitution rules, in application order
    #[must_use]
    pub fn perspective_rules(&self) -> &[(Regex, &'static str)] {
        &self.perspective_rules
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_exactly_one_placeholder() {
        let lexicon = Lexicon::new();
        for tag in EmotionTag::ALL {
            for template in lexicon.templates(tag) {
                assert_eq!(
                    template.matches("{context}").count(),
                    1,
                    "bad template for {tag:?}: {template}"
                );
            }
        }
    }

    #[test]
    fn follow_up_pools_are_never_empty() {
        let lexicon = Lexicon::new();
        for level in [
            IntensityLevel::High,
            IntensityLevel::Medium,
            IntensityLevel::Low,
        ] {
            assert!(!lexicon.follow_ups(level).is_empty());
        }
    }

    #[test]
    fn sub_topic_patterns_have_curated_phrases() {
        let lexicon = Lexicon::new();
        for pattern in lexicon.sub_topic_patterns() {
            assert!(
                lexicon.sub_topic_phrase(pattern.name).is_some(),
                "missing summary phrase for {}",
                pattern.name
            );
        }
    }

    #[test]
    fn label_map_covers_known_classifier_output() {
        let lexicon = Lexicon::new();
        assert_eq!(
            lexicon.category_for("grief"),
            Some(EmotionCategory::Negative)
        );
        assert_eq!(
            lexicon.category_for("gratitude"),
            Some(EmotionCategory::Positive)
        );
        assert_eq!(
            lexicon.category_for("confusion"),
            Some(EmotionCategory::Neutral)
        );
        assert_eq!(lexicon.category_for("mixed_emotions"), None);
    }
}
