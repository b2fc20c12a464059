mod gemini_client;
mod gemini_config;
mod sse_decoder;

pub use gemini_client::GeminiClient;
pub use gemini_config::GeminiConfig;
