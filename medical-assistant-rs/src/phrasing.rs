//! Prompt phrasing policies
//!
//! A policy turns a patient's question and the detected language into
//! the prompt that is sent to the generator, along with the soft ending
//! the answer should close with and the sampling parameters to use.
//! `RandomPhrasing` varies wording and sampling from call to call so
//! repeated questions do not get identical answers; `FixedPhrasing` is
//! deterministic.

use std::sync::Mutex;

use language_detector_rs::Language;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::PhrasingKind;
use crate::generator::SamplingParams;

/// Marker every answer is expected to carry
pub const SOFT_ENDING_MARKER: &str = "💙";

const OPENERS: [&str; 6] = [
    "You are a compassionate and emotionally intelligent virtual healthcare companion. Please:",
    "Imagine you're a kind nurse giving comfort to someone who is unwell. Please:",
    "Act as a warm, human-like doctor speaking directly to a concerned patient. Please:",
    "You're a caring and thoughtful medical assistant. Please:",
    "Pretend you're speaking to a loved one who's scared or confused. Please:",
    "You're like a wise and gentle guide in someone's health journey. Please:",
];

const RESPONSE_STYLES: [&str; 6] = [
    "Gently offer a complete and human-sounding explanation",
    "Speak in a warm, soothing and natural tone",
    "Use emotionally-aware and kind-hearted language to provide clarity",
    "Balance empathy with trustworthy, fact-based medical knowledge",
    "Respond like you're holding their hand and offering support",
    "Let your tone feel safe, reassuring and gentle throughout",
];

const SOFT_ENDINGS: [&str; 6] = [
    "You're not alone. Wishing you strength, peace, and good health. 💙",
    "Take one step at a time. You've got this. Wishing you wellness. 💙",
    "Sending hope and care your way. You matter. 💙",
    "Healing is a journey, and you're already on it. 💙",
    "Stay strong, and remember to be kind to yourself. 💙",
    "You're doing the best you can. I'm rooting for you. 💙",
];

/// (from, to) pairs, each applied to the first occurrence with probability 0.5
const PHRASE_SWAPS: [(&str, &str); 4] = [
    ("health-related questions", "wellness or medical concerns"),
    ("emotional intelligence", "empathy and care"),
    ("medically accurate", "clinically correct and fact-checked"),
    ("gentle and human", "soft-spoken and human-like"),
];

/// Everything needed for one generation call
#[derive(Debug, Clone, PartialEq)]
pub struct PromptPlan {
    pub prompt: String,
    /// Appended to the answer when the generator leaves the marker out
    pub soft_ending: String,
    pub sampling: SamplingParams,
}

/// Strategy for wording the prompt
pub trait PhrasingPolicy: Send + Sync {
    fn compose(&self, query: &str, language: Language) -> PromptPlan;
}

/// Build the policy selected in configuration
pub fn policy_for(kind: PhrasingKind) -> Box<dyn PhrasingPolicy> {
    match kind {
        PhrasingKind::Random => Box::new(RandomPhrasing::new()),
        PhrasingKind::Fixed => Box::new(FixedPhrasing),
    }
}

fn instructions(style: &str, soft_ending: &str, language: Language) -> Vec<String> {
    vec![
        "Only respond to medical and health-related questions such as symptoms, illnesses, treatments, wellness, and mental health.".to_string(),
        "If the question is outside your scope, say kindly: \"I'm here to help only with health-related questions.\"".to_string(),
        format!("Respond in {}.", language),
        format!("{}, using natural-sounding phrases like: \"Oh no, that sounds difficult\", \"I'm here for you\", \"You'll get through this\", \"I hope you feel better soon\".", style),
        "Write in a flowing, warm, thoughtful way, not robotic.".to_string(),
        format!("End your message with an uplifting line, like: \"{}\"", soft_ending),
        "Include this soft disclaimer: \"This is for informational purposes only. Please consult a certified healthcare provider for diagnosis and treatment.\"".to_string(),
        "Be medically accurate and don't guess. Be gentle and human.".to_string(),
        "If someone asks about you, respond: \"I'm your AI medical assistant, here to provide you with reliable health information whenever you need support.\"".to_string(),
    ]
}

fn render(opener: &str, instructions: &[String], query: &str) -> String {
    let numbered = instructions
        .iter()
        .enumerate()
        .map(|(idx, line)| format!("{}. {}", idx + 1, line))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\nRespond as if you're talking directly to a real human who's worried, in pain, or confused. Use emotional intelligence. Here's how:\n\n{}\n\nPatient's question: {}",
        opener, numbered, query
    )
}

/// Deterministic phrasing: first template of every kind, declared order
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPhrasing;

impl PhrasingPolicy for FixedPhrasing {
    fn compose(&self, query: &str, language: Language) -> PromptPlan {
        let soft_ending = SOFT_ENDINGS[0];
        let lines = instructions(RESPONSE_STYLES[0], soft_ending, language);
        PromptPlan {
            prompt: render(OPENERS[0], &lines, query),
            soft_ending: soft_ending.to_string(),
            sampling: SamplingParams::default(),
        }
    }
}

/// Randomized phrasing
///
/// Picks an opener, a response style and a soft ending, shuffles the
/// instruction list, applies phrase swaps and jitters the sampling
/// parameters.
#[derive(Debug)]
pub struct RandomPhrasing {
    rng: Mutex<StdRng>,
}

impl Default for RandomPhrasing {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPhrasing {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence of plans
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PhrasingPolicy for RandomPhrasing {
    fn compose(&self, query: &str, language: Language) -> PromptPlan {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let opener = OPENERS.choose(&mut *rng).copied().unwrap_or(OPENERS[0]);
        let style = RESPONSE_STYLES
            .choose(&mut *rng)
            .copied()
            .unwrap_or(RESPONSE_STYLES[0]);
        let soft_ending = SOFT_ENDINGS
            .choose(&mut *rng)
            .copied()
            .unwrap_or(SOFT_ENDINGS[0]);

        let mut lines = instructions(style, soft_ending, language);
        lines.shuffle(&mut *rng);

        let mut prompt = render(opener, &lines, query);
        for (from, to) in PHRASE_SWAPS {
            if rng.gen_bool(0.5) {
                prompt = prompt.replacen(from, to, 1);
            }
        }

        let sampling = SamplingParams {
            temperature: rng.gen_range(0.85..1.0),
            top_k: rng.gen_range(40..50),
            top_p: rng.gen_range(0.92..1.0),
            max_output_tokens: None,
        };

        PromptPlan {
            prompt,
            soft_ending: soft_ending.to_string(),
            sampling,
        }
    }
}
