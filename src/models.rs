// Data structures (ChatRequest, ChatMessage, etc.)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Message sender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Get the sender identifier as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }

    /// Parse a sender identifier read back from the database
    pub fn from_db_value(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Sender::User),
            "bot" => Some(Sender::Bot),
            _ => None,
        }
    }
}

// A single persisted chat history row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub student_id: String,
    pub sender: Sender,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

// Request Types
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub student_id: String,
    pub message: String,
}

// Response Types
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}
