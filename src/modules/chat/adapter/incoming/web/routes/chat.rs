use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::http::header::CACHE_CONTROL;
use actix_web::{post, web, HttpResponse};
use bytes::{Bytes, BytesMut};
use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::chat::application::domain::entities::{
    ChatImage, MAX_IMAGE_BYTES, MAX_MESSAGE_LEN,
};
use crate::modules::chat::application::ports::incoming::use_cases::{
    ChatCommand, StreamChatError,
};
use crate::modules::chat::application::ports::outgoing::{ModelError, TextStream};
use crate::shared::api::ApiResponse;
use crate::AppState;

const DONE_EVENT: &[u8] = b"data: [DONE]\n\n";

/// Multipart form accepted by the chat endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatForm {
    #[schema(example = "My child has watery diarrhea since this morning")]
    pub message: Option<String>,
    /// JPEG, PNG, WebP or GIF, at most 5 MiB.
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[derive(Default)]
struct ChatFormData {
    message: Option<String>,
    image: Option<ChatImage>,
}

/// Reads a field, keeping at most `cap` bytes and draining the rest.
async fn read_capped(field: &mut Field, cap: usize) -> Result<Bytes, MultipartError> {
    let mut buf = BytesMut::new();
    while let Some(chunk) = field.try_next().await? {
        let room = cap.saturating_sub(buf.len());
        buf.extend_from_slice(&chunk[..chunk.len().min(room)]);
    }
    Ok(buf.freeze())
}

async fn read_form(mut payload: Multipart) -> Result<ChatFormData, MultipartError> {
    let mut form = ChatFormData::default();

    while let Some(mut field) = payload.try_next().await? {
        match field.name() {
            Some("message") => {
                // four bytes per char is the UTF-8 worst case
                let raw = read_capped(&mut field, MAX_MESSAGE_LEN * 4 + 1).await?;
                form.message = Some(String::from_utf8_lossy(&raw).into_owned());
            }
            Some("image") => {
                let mime_type = field
                    .content_type()
                    .map(|m| m.essence_str().to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let data = read_capped(&mut field, MAX_IMAGE_BYTES + 1).await?;
                form.image = Some(ChatImage { mime_type, data });
            }
            _ => {
                read_capped(&mut field, 0).await?;
            }
        }
    }

    Ok(form)
}

fn model_error_response(e: &ModelError) -> HttpResponse {
    let message = e.user_message();
    match e {
        ModelError::RateLimited(_) => ApiResponse::too_many_requests("RATE_LIMITED", message),
        ModelError::Unavailable(_) => {
            ApiResponse::service_unavailable("MODEL_UNAVAILABLE", message)
        }
        ModelError::Misconfigured(_) => {
            error!(error = %e, "Chat model rejected our configuration");
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "MODEL_MISCONFIGURED",
                message,
            )
        }
        ModelError::Blocked(_) => ApiResponse::bad_request("CONTENT_BLOCKED", message),
        ModelError::Other(_) => {
            error!(error = %e, "Chat model failed");
            ApiResponse::internal_error()
        }
    }
}

fn text_event(text: &str) -> Bytes {
    Bytes::from(format!("data: {}\n\n", json!({ "text": text })))
}

fn error_event(e: &ModelError) -> Bytes {
    Bytes::from(format!(
        "event: error\ndata: {}\n\n",
        json!({ "message": e.user_message() })
    ))
}

/// Turns model chunks into SSE frames. `first` was already pulled from
/// `rest` and is replayed before it.
fn sse_body(
    first: Option<Result<String, ModelError>>,
    rest: TextStream,
) -> impl Stream<Item = Result<Bytes, actix_web::Error>> + 'static {
    let started = first.is_some();
    stream::unfold(
        Some((first, rest.fuse(), started)),
        |state| async move {
            let (pending, mut rest, started) = state?;
            let item = match pending {
                Some(item) => Some(item),
                None if started => rest.next().await,
                None => None,
            };

            match item {
                Some(Ok(text)) => Some((Ok(text_event(&text)), Some((None, rest, true)))),
                Some(Err(e)) => {
                    warn!(error = %e, "Chat stream ended with a model error");
                    Some((Ok(error_event(&e)), None))
                }
                None => Some((Ok(Bytes::from_static(DONE_EVENT)), None)),
            }
        },
    )
}

/// Ask the health assistant
///
/// Streams the answer as server-sent events: `data: {"text": ...}` per
/// chunk, then `data: [DONE]`, or `event: error` if the model fails midway.
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body(content = ChatForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Answer stream", content_type = "text/event-stream", body = String),
        (status = 400, description = "Invalid form or content blocked", body = ErrorResponse),
        (status = 429, description = "Model rate limited", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 503, description = "Model unavailable", body = ErrorResponse),
    )
)]
#[post("/api/chat")]
pub async fn chat_handler(payload: Multipart, data: web::Data<AppState>) -> HttpResponse {
    let form = match read_form(payload).await {
        Ok(form) => form,
        Err(e) => {
            warn!(error = %e, "Unreadable chat form");
            return ApiResponse::bad_request("INVALID_FORM", "Expected a multipart form");
        }
    };

    let command = match ChatCommand::new(form.message, form.image) {
        Ok(cmd) => cmd,
        Err(issues) => return ApiResponse::validation_failed(issues),
    };

    let mut stream = match data.chat.stream.execute(command).await {
        Ok(stream) => stream,
        Err(StreamChatError::Model(e)) => return model_error_response(&e),
        Err(e @ StreamChatError::CatalogUnavailable(_)) => {
            error!(error = %e, "Chat unavailable");
            return ApiResponse::internal_error();
        }
    };

    // an error before any text still gets a proper status code
    let first = stream.next().await;
    if let Some(Err(e)) = &first {
        return model_error_response(e);
    }

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header((CACHE_CONTROL, "no-cache"))
        .insert_header(("X-Accel-Buffering", "no"))
        .streaming(sse_body(first, stream))
}
