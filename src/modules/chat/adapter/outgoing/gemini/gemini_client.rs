use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::gemini_config::GeminiConfig;
use super::sse_decoder::SseDecoder;
use crate::modules::chat::application::ports::outgoing::{
    GenerativeModel, ModelError, ModelRequest, TextStream,
};

const API_KEY_HEADER: &str = "x-goog-api-key";
const MAX_ERROR_BODY: usize = 300;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct StreamChunk {
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ApiErrorBody {
    code: Option<u16>,
    message: Option<String>,
    status: Option<String>,
}

impl ApiErrorBody {
    fn describe(&self) -> String {
        [
            self.code.map(|c| c.to_string()),
            self.status.clone(),
            self.message.clone(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

fn build_request(request: ModelRequest) -> GenerateRequest {
    let mut parts = Vec::new();
    if let Some(message) = request.message {
        parts.push(Part::Text { text: message });
    }
    if let Some(image) = request.image {
        parts.push(Part::Inline {
            inline_data: InlineData {
                mime_type: image.mime_type,
                data: STANDARD.encode(&image.data),
            },
        });
    }

    GenerateRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part::Text {
                text: request.system_prompt,
            }],
        },
        contents: vec![Content {
            role: Some("user"),
            parts,
        }],
    }
}

/// Text carried by one upstream event; `None` for events without text.
fn parse_chunk(payload: &str) -> Result<Option<String>, ModelError> {
    if payload == "[DONE]" {
        return Ok(None);
    }

    let chunk: StreamChunk = serde_json::from_str(payload)
        .map_err(|e| ModelError::Other(format!("unreadable stream event: {}", e)))?;

    if let Some(err) = chunk.error {
        return Err(ModelError::from_provider_message(err.describe()));
    }
    if let Some(reason) = chunk.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ModelError::Blocked(format!("prompt blocked: {}", reason)));
    }

    let Some(candidate) = chunk.candidates.into_iter().next() else {
        return Ok(None);
    };
    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    let blocked = matches!(
        candidate.finish_reason.as_deref(),
        Some("SAFETY") | Some("PROHIBITED_CONTENT") | Some("BLOCKLIST")
    );
    if blocked && text.is_empty() {
        return Err(ModelError::Blocked(format!(
            "answer blocked: {}",
            candidate.finish_reason.unwrap_or_default()
        )));
    }

    Ok((!text.is_empty()).then_some(text))
}

fn parse_all(payloads: Vec<String>) -> Vec<Result<String, ModelError>> {
    payloads
        .iter()
        .filter_map(|p| parse_chunk(p).transpose())
        .collect()
}

/// Streaming client for the Gemini `streamGenerateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ModelError> {
        // no overall timeout: answers stream for as long as the model writes
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ModelError::Misconfigured(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn stream(&self, request: ModelRequest) -> Result<TextStream, ModelError> {
        let response = self
            .client
            .post(self.config.stream_url())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&build_request(request))
            .send()
            .await
            .map_err(|e| ModelError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => format!("{} {}", status.as_u16(), envelope.error.describe()),
                Err(_) => format!(
                    "{} {}",
                    status,
                    body.chars().take(MAX_ERROR_BODY).collect::<String>()
                ),
            };
            warn!(status = %status, detail = %detail, "Gemini rejected request");
            return Err(ModelError::from_provider_message(detail));
        }

        let mut decoder = SseDecoder::default();
        let stream = response
            .bytes_stream()
            .map(Some)
            .chain(stream::once(async { None }))
            .flat_map(move |chunk| {
                let items = match chunk {
                    Some(Ok(bytes)) => parse_all(decoder.push(&bytes)),
                    Some(Err(e)) => vec![Err(ModelError::Unavailable(format!(
                        "stream interrupted: {}",
                        e
                    )))],
                    None => parse_all(decoder.finish().into_iter().collect()),
                };
                stream::iter(items)
            })
            .boxed();

        Ok(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{post, web, HttpRequest, HttpResponse};
    use bytes::Bytes;
    use serde_json::{json, Value};

    use crate::modules::chat::application::domain::entities::ChatImage;
    use crate::tests::support::http_stub::spawn_stub;

    fn sse(events: &[Value]) -> String {
        events
            .iter()
            .map(|e| format!("data: {}\r\n\r\n", e))
            .collect()
    }

    fn text_event(text: &str) -> Value {
        json!({ "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }] })
    }

    #[post("/models/ok-model:streamGenerateContent")]
    async fn ok_model(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
        if req.headers().get(API_KEY_HEADER).and_then(|v| v.to_str().ok()) != Some("test-key") {
            return HttpResponse::BadRequest().json(json!({
                "error": { "code": 400, "status": "INVALID_ARGUMENT", "message": "API key not valid. Please pass a valid API key." }
            }));
        }
        let echoed = body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap_or("")
            .to_string();
        let has_system = body["systemInstruction"]["parts"][0]["text"].is_string();
        let has_image = body["contents"][0]["parts"][1]["inlineData"]["data"].is_string();
        HttpResponse::Ok().content_type("text/event-stream").body(sse(&[
            text_event(&format!("echo:{}", echoed)),
            text_event(&format!(" system:{} image:{}", has_system, has_image)),
            json!({ "candidates": [{ "finishReason": "STOP" }] }),
        ]))
    }

    #[post("/models/busy-model:streamGenerateContent")]
    async fn busy_model() -> HttpResponse {
        HttpResponse::TooManyRequests().json(json!({
            "error": { "code": 429, "status": "RESOURCE_EXHAUSTED", "message": "Quota exceeded" }
        }))
    }

    #[post("/models/down-model:streamGenerateContent")]
    async fn down_model() -> HttpResponse {
        HttpResponse::ServiceUnavailable().body("upstream connect error")
    }

    #[post("/models/prude-model:streamGenerateContent")]
    async fn prude_model() -> HttpResponse {
        HttpResponse::Ok()
            .content_type("text/event-stream")
            .body(sse(&[json!({ "promptFeedback": { "blockReason": "SAFETY" } })]))
    }

    #[post("/models/flaky-model:streamGenerateContent")]
    async fn flaky_model() -> HttpResponse {
        HttpResponse::Ok().content_type("text/event-stream").body(sse(&[
            text_event("partial"),
            json!({ "error": { "code": 503, "status": "UNAVAILABLE", "message": "The model is overloaded" } }),
        ]))
    }

    fn routes(cfg: &mut web::ServiceConfig) {
        cfg.service(ok_model)
            .service(busy_model)
            .service(down_model)
            .service(prude_model)
            .service(flaky_model);
    }

    fn client(base: &str, model: &str, key: &str) -> GeminiClient {
        GeminiClient::new(GeminiConfig {
            api_key: key.to_string(),
            model: model.to_string(),
            base_url: base.to_string(),
            connect_timeout_secs: 5,
        })
        .unwrap()
    }

    fn request(message: &str, image: Option<ChatImage>) -> ModelRequest {
        ModelRequest {
            system_prompt: "be helpful".to_string(),
            message: Some(message.to_string()),
            image,
        }
    }

    #[actix_web::test]
    async fn test_streams_text_chunks() {
        let base = spawn_stub(routes);
        let image = ChatImage {
            mime_type: "image/png".to_string(),
            data: Bytes::from_static(b"\x89PNG"),
        };

        let stream = client(&base, "ok-model", "test-key")
            .stream(request("hello", Some(image)))
            .await
            .unwrap();
        let chunks: Vec<_> = stream.collect().await;

        assert_eq!(
            chunks,
            vec![
                Ok("echo:hello".to_string()),
                Ok(" system:true image:true".to_string())
            ]
        );
    }

    #[actix_web::test]
    async fn test_bad_key_is_misconfiguration() {
        let base = spawn_stub(routes);

        let result = client(&base, "ok-model", "wrong").stream(request("hi", None)).await;

        assert!(matches!(result, Err(ModelError::Misconfigured(_))));
    }

    #[actix_web::test]
    async fn test_quota_is_rate_limit() {
        let base = spawn_stub(routes);

        let result = client(&base, "busy-model", "test-key").stream(request("hi", None)).await;

        assert!(matches!(result, Err(ModelError::RateLimited(_))));
    }

    #[actix_web::test]
    async fn test_non_json_error_body_uses_status() {
        let base = spawn_stub(routes);

        let result = client(&base, "down-model", "test-key").stream(request("hi", None)).await;

        assert!(matches!(result, Err(ModelError::Unavailable(_))));
    }

    #[actix_web::test]
    async fn test_blocked_prompt_arrives_as_stream_error() {
        let base = spawn_stub(routes);

        let stream = client(&base, "prude-model", "test-key")
            .stream(request("hi", None))
            .await
            .unwrap();
        let chunks: Vec<_> = stream.collect().await;

        assert_eq!(chunks.len(), 1);
        assert!(matches!(chunks[0], Err(ModelError::Blocked(_))));
    }

    #[actix_web::test]
    async fn test_error_after_text() {
        let base = spawn_stub(routes);

        let stream = client(&base, "flaky-model", "test-key")
            .stream(request("hi", None))
            .await
            .unwrap();
        let chunks: Vec<_> = stream.collect().await;

        assert_eq!(chunks[0], Ok("partial".to_string()));
        assert!(matches!(chunks[1], Err(ModelError::Unavailable(_))));
    }

    #[test]
    fn parse_chunk_skips_empty_events() {
        assert_eq!(parse_chunk("{}"), Ok(None));
        assert_eq!(parse_chunk("[DONE]"), Ok(None));
        assert!(matches!(parse_chunk("not json"), Err(ModelError::Other(_))));
    }

    #[test]
    fn safety_finish_without_text_is_blocked() {
        let payload = json!({ "candidates": [{ "finishReason": "SAFETY" }] }).to_string();
        assert!(matches!(parse_chunk(&payload), Err(ModelError::Blocked(_))));
    }

    #[test]
    fn request_omits_missing_parts() {
        let body = serde_json::to_value(build_request(ModelRequest {
            system_prompt: "sys".to_string(),
            message: None,
            image: Some(ChatImage {
                mime_type: "image/gif".to_string(),
                data: Bytes::from_static(b"GIF89a"),
            }),
        }))
        .unwrap();

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "sys");
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"].as_array().unwrap().len(), 1);
        assert_eq!(
            body["contents"][0]["parts"][0]["inlineData"]["data"],
            STANDARD.encode(b"GIF89a")
        );
    }
}
