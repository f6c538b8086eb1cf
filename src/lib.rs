// HTTP Server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;

// PostgreSQL store for profiles and chat history
pub mod store;

// LLM abstraction layer
pub mod llm;

// Chat turn orchestration
pub mod chat;
