// Handlers module

pub mod chat;
pub mod index;
pub mod rejection;

pub use chat::chat_handler;
pub use index::index_handler;
pub use rejection::{handle_rejection, StoreFailure};
