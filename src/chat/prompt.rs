//! Prompt assembly for the chat turn
//!
//! Pure functions: the generator is stateless, so the profile text and the
//! recent conversation are re-embedded into the prompt on every call.

use crate::models::ChatMessage;

/// Context string used when a student has no stored history
pub const NO_HISTORY_SENTINEL: &str = "No previous chat found.";

/// Render recent history rows into a conversation context string
///
/// Expects rows ordered newest first (as returned by the store) and
/// re-reverses them so the rendered context reads chronologically, one
/// `sender: message` line per row.
pub fn render_history(messages_desc: &[ChatMessage]) -> String {
    if messages_desc.is_empty() {
        return NO_HISTORY_SENTINEL.to_string();
    }

    messages_desc
        .iter()
        .rev()
        .map(|msg| format!("{}: {}", msg.sender.as_str(), msg.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the prompt for the user-facing reply
pub fn build_reply_prompt(profile: &str, context: &str, user_message: &str) -> String {
    format!(
        "You are a friendly assistant who remembers everything about the student.\n\
         Student profile:\n\
         {profile}\n\
         \n\
         Recent conversation:\n\
         {context}\n\
         \n\
         Student says: {user_message}\n\
         \n\
         1. Reply naturally like a chatbot.\n\
         2. Learn from the student's interests/dislikes automatically.\n\
         3. If new interests appear, update them in your memory.\n\
         4. Never ask again for data already known.\n\
         5. IMPORTANT: Never show JSON objects or data updates in your reply. \
         Keep your reply conversational and natural.\n"
    )
}

/// Build the prompt for the profile-update call
///
/// Asks the model to return only the updated JSON profile, seeded with the
/// current profile text and this turn's exchange.
pub fn build_profile_prompt(profile: &str, user_message: &str, bot_reply: &str) -> String {
    format!(
        "From this chat, update the student info JSON based on what the user \
         likes or dislikes. Keep old info, add new ones. Return ONLY valid \
         JSON, no additional text.\n\
         Current info:\n\
         {profile}\n\
         Chat:\n\
         User: {user_message}\n\
         Bot: {bot_reply}"
    )
}
