//! # Medical Assistant
//!
//! Chat core of the medical assistant. A question goes through:
//!
//! - language detection (`language-detector-rs`)
//! - a phrasing policy that words the prompt in that language
//! - a text generator (the Gemini API by default)
//! - a per-session answer cache that keeps replies from repeating
//!
//! ## Architecture
//!
//! - `ChatSession`: one conversation, one question in flight at a time
//! - `TextGenerator`: the remote generation boundary
//! - `PhrasingPolicy`: injected prompt wording strategy
//! - `ResponseCache`: bounded memory of answers already shown
//! - `AssistantConfig`: environment driven configuration

pub mod command;
pub mod config;
pub mod dedup;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod phrasing;
pub mod session;

pub use command::Command;
pub use config::{AssistantConfig, GeminiConfig, PhrasingKind};
pub use dedup::ResponseCache;
pub use error::{ConfigError, GenerationError, GenerationResult};
pub use gemini::GeminiClient;
pub use generator::{SamplingParams, TextGenerator};
pub use phrasing::{FixedPhrasing, PhrasingPolicy, PromptPlan, RandomPhrasing};
pub use session::{ChatMessage, ChatSession, Sender};

pub use language_detector_rs::{detect_language, Language};

#[cfg(test)]
mod tests;
