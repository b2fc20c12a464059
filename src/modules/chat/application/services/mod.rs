pub mod stream_chat_service;

pub use stream_chat_service::StreamChatService;
