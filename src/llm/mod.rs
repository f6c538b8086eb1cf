//! LLM abstraction layer
//!
//! This module provides a minimal interface for text generation against
//! Google's Generative Language API. The `Generator` trait is the seam:
//! the chat service depends on it, the Gemini client implements it, and
//! tests substitute stubs for it.

pub mod error;
pub mod gemini;
pub mod provider;

// Re-export commonly used types
pub use error::LlmError;
pub use gemini::{GeminiClient, GeminiModel};
pub use provider::Generator;
