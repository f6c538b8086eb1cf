//! Chat turn orchestration
//!
//! One turn runs strictly in sequence: read the profile and recent history,
//! generate a reply, sanitize it, persist both sides of the exchange, ask
//! the generator for an updated profile, and upsert it. Generation failures
//! are absorbed into fixed fallback values; store failures propagate to the
//! caller. The writes are independent statements, not a transaction, so a
//! failure partway through can leave history and profile out of step.

pub mod prompt;
pub mod sanitize;

use std::sync::Arc;

use log::error;

use crate::llm::Generator;
use crate::models::Sender;
use crate::store::{self, Store};

pub use prompt::{build_profile_prompt, build_reply_prompt, render_history, NO_HISTORY_SENTINEL};
pub use sanitize::sanitize_reply;

/// Number of recent history rows embedded in the reply prompt
pub const HISTORY_LIMIT: i64 = 10;

/// Reply substituted when the reply-generation call fails
pub const GENERATION_FAILURE_REPLY: &str = "Error generating reply.";

/// Profile text used for a student with no stored profile yet
const EMPTY_PROFILE: &str = "{}";

/// Orchestrates chat turns against the store and the generator
///
/// Constructed once at startup and shared across requests; holds the store
/// client and the generator rather than reaching for globals.
pub struct ChatService {
    store: Store,
    generator: Arc<dyn Generator>,
}

impl ChatService {
    /// Create a new chat service
    pub fn new(store: Store, generator: Arc<dyn Generator>) -> Self {
        Self { store, generator }
    }

    /// Run one full chat turn and return the sanitized reply
    ///
    /// # Side effects
    ///
    /// Two inserts into the chat history (user message, then bot reply) and
    /// one profile write (insert on the first turn for a student, update
    /// afterwards). Two outbound generation calls.
    ///
    /// # Errors
    ///
    /// Store errors propagate; already-completed writes are not rolled back.
    /// Generator errors never propagate: a failed reply call yields the
    /// literal fallback reply, a failed profile call leaves the stored
    /// profile text unchanged.
    pub async fn chat_turn(&self, student_id: &str, user_message: &str) -> store::Result<String> {
        // Fetch student profile; whether a row existed decides insert vs
        // update at the end of the turn
        let existing_profile = self.store.fetch_profile(student_id).await?;
        let had_profile = existing_profile.is_some();
        let profile_text = existing_profile.unwrap_or_else(|| EMPTY_PROFILE.to_string());

        // Get last few messages
        let recent = self.store.recent_messages(student_id, HISTORY_LIMIT).await?;
        let context = render_history(&recent);

        // Generate reply
        let reply_prompt = build_reply_prompt(&profile_text, &context, user_message);
        let bot_reply = match self.generator.generate(&reply_prompt).await {
            Ok(text) => text,
            Err(e) => {
                error!("Gemini error: {}", e);
                GENERATION_FAILURE_REPLY.to_string()
            }
        };

        // Clean the reply: remove any JSON objects or "Updated info:" sections
        let bot_reply = sanitize_reply(&bot_reply);

        // Save messages
        self.store
            .save_message(student_id, Sender::User, user_message)
            .await?;
        self.store
            .save_message(student_id, Sender::Bot, &bot_reply)
            .await?;

        // Extract updated interests automatically
        let update_prompt = build_profile_prompt(&profile_text, user_message, &bot_reply);
        let new_profile = match self.generator.generate(&update_prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                error!("Profile update error: {}", e);
                profile_text.clone()
            }
        };

        // Update student data
        if had_profile {
            self.store.update_profile(student_id, &new_profile).await?;
        } else {
            self.store.insert_profile(student_id, &new_profile).await?;
        }

        Ok(bot_reply)
    }
}
