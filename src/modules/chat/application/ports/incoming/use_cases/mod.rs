pub mod stream_chat;

pub use stream_chat::{ChatCommand, StreamChatError, StreamChatUseCase};
