//! LLM integration
//!
//! Prompt assembly and the Gemini API client. The session layer talks to
//! the model through [`LlmBackend`] so tests can drive it with a scripted
//! stub instead of the live API.

mod client;
pub mod prompts;

pub use client::GeminiClient;

use anyhow::Result;

/// Text-completion backend: one prompt in, one completion out.
///
/// The client is the only shared resource in the process; construct it once
/// and reuse it for every request in the session.
pub trait LlmBackend {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>>;
}
