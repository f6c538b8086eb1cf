//! Generator trait for text-generation implementations

use async_trait::async_trait;

use super::error::LlmError;

/// Main interface that text generators must satisfy
///
/// The generator is stateless: it has no conversation memory of its own, so
/// any history or profile context must be embedded in the prompt on every
/// call. Failures are returned as values and pattern-matched by the caller;
/// they never panic.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a free-form text completion for the given prompt
    ///
    /// # Arguments
    /// * `prompt` - The fully assembled prompt text
    ///
    /// # Returns
    /// The generated text, or an error if the request fails
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
