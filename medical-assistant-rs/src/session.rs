//! Chat session
//!
//! Drives one conversation: detect the language of each question, have
//! the phrasing policy word the prompt, ask the generator, make sure the
//! answer was not already shown, and record both sides in the
//! transcript. One question is in flight at a time; `send` takes
//! `&mut self`.

use chrono::{DateTime, Utc};
use language_detector_rs::{Language, LanguageDetector};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AssistantConfig;
use crate::dedup::ResponseCache;
use crate::error::{ConfigError, GenerationError};
use crate::gemini::GeminiClient;
use crate::generator::TextGenerator;
use crate::phrasing::{self, PhrasingPolicy, SOFT_ENDING_MARKER};

/// Shown when generation fails for any reason other than a missing key
pub const APOLOGY_MESSAGE: &str = "I'm really sorry, something went wrong while trying to help. Please try again shortly or contact a medical professional directly. 💙";

/// Shown when no API key is configured
pub const MISSING_KEY_MESSAGE: &str =
    "API key not configured. Please add your Gemini API key to the environment variables.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Bot,
}

/// One line of the transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Set on bot replies: the language the question was detected as
    pub language: Option<Language>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>, language: Option<Language>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
            language,
        }
    }
}

/// A single user's conversation with the assistant
pub struct ChatSession {
    detector: LanguageDetector<'static>,
    generator: Box<dyn TextGenerator>,
    phrasing: Box<dyn PhrasingPolicy>,
    cache: ResponseCache,
    max_regenerations: u32,
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(generator: Box<dyn TextGenerator>, phrasing: Box<dyn PhrasingPolicy>) -> Self {
        let defaults = AssistantConfig::default();
        Self {
            detector: LanguageDetector::new(),
            generator,
            phrasing,
            cache: ResponseCache::new(defaults.dedup_capacity, defaults.dedup_ttl),
            max_regenerations: defaults.max_regenerations,
            transcript: Vec::new(),
        }
    }

    /// Session talking to Gemini as configured
    pub fn from_config(config: &AssistantConfig) -> Result<Self, ConfigError> {
        let client = GeminiClient::new(config.gemini.clone())?;
        Ok(Self::new(Box::new(client), phrasing::policy_for(config.phrasing))
            .with_response_cache(ResponseCache::new(config.dedup_capacity, config.dedup_ttl))
            .with_max_regenerations(config.max_regenerations))
    }

    pub fn with_response_cache(mut self, cache: ResponseCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_max_regenerations(mut self, max_regenerations: u32) -> Self {
        self.max_regenerations = max_regenerations;
        self
    }

    /// Whether the generator has the credentials it needs
    pub fn is_configured(&self) -> bool {
        self.generator.is_configured()
    }

    pub fn detector(&self) -> &LanguageDetector<'static> {
        &self.detector
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Forget the transcript and every remembered answer
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.cache.clear();
    }

    /// Ask a question
    ///
    /// Returns `None` for blank input. Otherwise the reply is always a
    /// message: failures are logged and replaced by a fixed text.
    pub async fn send(&mut self, input: &str) -> Option<ChatMessage> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        self.transcript
            .push(ChatMessage::new(Sender::User, text, None));

        let language = self.detector.detect(text);
        log::info!(
            "Question received: {} chars, detected {}",
            text.chars().count(),
            language
        );

        let answer = self.answer(text, language).await;
        let reply = ChatMessage::new(Sender::Bot, answer, Some(language));
        self.transcript.push(reply.clone());
        Some(reply)
    }

    async fn answer(&mut self, query: &str, language: Language) -> String {
        let mut regenerations = 0;
        loop {
            let plan = self.phrasing.compose(query, language);
            let answer = match self.generator.generate(&plan.prompt, &plan.sampling).await {
                Ok(answer) => answer,
                Err(GenerationError::MissingApiKey) => {
                    log::warn!("{} generator has no API key", self.generator.name());
                    return MISSING_KEY_MESSAGE.to_string();
                }
                Err(err) => {
                    log::error!("{} generation failed: {}", self.generator.name(), err);
                    return APOLOGY_MESSAGE.to_string();
                }
            };

            if self.cache.seen(&answer) && regenerations < self.max_regenerations {
                regenerations += 1;
                log::debug!(
                    "Answer already shown, regenerating ({}/{})",
                    regenerations,
                    self.max_regenerations
                );
                continue;
            }

            self.cache.remember(&answer);
            return with_soft_ending(answer, &plan.soft_ending);
        }
    }
}

fn with_soft_ending(answer: String, soft_ending: &str) -> String {
    if answer.contains(SOFT_ENDING_MARKER) {
        answer
    } else {
        format!("{}\n\n{}", answer, soft_ending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_ending_appended_once() {
        let ending = "Take care. 💙";
        assert_eq!(with_soft_ending("Rest.".to_string(), ending), "Rest.\n\nTake care. 💙");
        assert_eq!(with_soft_ending("Rest. 💙".to_string(), ending), "Rest. 💙");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::new(Sender::User, "hi", None);
        let b = ChatMessage::new(Sender::User, "hi", None);
        assert_ne!(a.id, b.id);
        assert_eq!(a.text, b.text);
    }
}
