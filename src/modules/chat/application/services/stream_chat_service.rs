use async_trait::async_trait;
use tracing::{debug, error};

use crate::modules::chat::application::domain::prompt::build_system_prompt;
use crate::modules::chat::application::ports::incoming::use_cases::{
    ChatCommand, StreamChatError, StreamChatUseCase,
};
use crate::modules::chat::application::ports::outgoing::{GenerativeModel, ModelRequest, TextStream};
use crate::modules::disease::application::ports::outgoing::DiseaseQuery;

pub struct StreamChatService<M, Q>
where
    M: GenerativeModel,
    Q: DiseaseQuery,
{
    model: M,
    diseases: Q,
}

impl<M, Q> StreamChatService<M, Q>
where
    M: GenerativeModel,
    Q: DiseaseQuery,
{
    pub fn new(model: M, diseases: Q) -> Self {
        Self { model, diseases }
    }
}

#[async_trait]
impl<M, Q> StreamChatUseCase for StreamChatService<M, Q>
where
    M: GenerativeModel + Send + Sync,
    Q: DiseaseQuery + Send + Sync,
{
    async fn execute(&self, command: ChatCommand) -> Result<TextStream, StreamChatError> {
        let catalog = self.diseases.list_all().await.map_err(|e| {
            error!(error = %e, "Could not load disease catalog for chat prompt");
            StreamChatError::CatalogUnavailable(e.to_string())
        })?;

        let has_image = command.image().is_some();
        let (message, image) = command.into_parts();
        let request = ModelRequest {
            system_prompt: build_system_prompt(&catalog),
            message,
            image,
        };

        debug!(diseases = catalog.len(), has_image, "Starting chat completion");
        Ok(self.model.stream(request).await?)
    }
}
