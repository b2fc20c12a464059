use std::sync::Arc;

use crate::modules::chat::application::ports::incoming::use_cases::StreamChatUseCase;

#[derive(Clone)]
pub struct ChatUseCases {
    pub stream: Arc<dyn StreamChatUseCase + Send + Sync>,
}
