//! Text generation boundary
//!
//! The session only knows this trait; the Gemini client is one
//! implementation, tests plug in their own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GenerationResult;

/// Sampling knobs sent along with a prompt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    /// `None` leaves the limit to the generator's own configuration
    pub max_output_tokens: Option<u32>,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.85,
            top_k: 40,
            top_p: 0.92,
            max_output_tokens: None,
        }
    }
}

/// Anything that turns a prompt into an answer
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Whether credentials are in place
    fn is_configured(&self) -> bool {
        true
    }

    /// Generate an answer for `prompt`
    async fn generate(&self, prompt: &str, sampling: &SamplingParams) -> GenerationResult<String>;
}
