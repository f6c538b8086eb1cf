//! Gemini provider for the Generative Language API

pub mod client;
pub mod types;

pub use client::{GeminiClient, GeminiModel};
