use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use super::SMS_READERS;
use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::shared::validation::ValidationIssue;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsListQuery {
    pub kind: Option<String>,
    pub alert_id: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Alerts,
    Responses,
}

impl SmsListQuery {
    fn parse(&self) -> Result<(ListKind, Option<Uuid>), Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let kind = match self.kind.as_deref().map(str::trim) {
            None | Some("") | Some("alerts") => Some(ListKind::Alerts),
            Some("responses") => Some(ListKind::Responses),
            Some(_) => {
                issues.push(ValidationIssue::new(
                    "kind",
                    "kind must be 'alerts' or 'responses'",
                ));
                None
            }
        };

        let alert_id = match self.alert_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    issues.push(ValidationIssue::new("alertId", "alertId must be a UUID"));
                    None
                }
            },
        };

        if alert_id.is_some() && kind == Some(ListKind::Alerts) {
            issues.push(ValidationIssue::new(
                "alertId",
                "alertId only applies to kind=responses",
            ));
        }

        match kind {
            Some(kind) if issues.is_empty() => Ok((kind, alert_id)),
            _ => Err(issues),
        }
    }
}

/// Sent alerts or received replies, newest first
#[utoipa::path(
    get,
    path = "/api/sms",
    tag = "sms",
    security(("BearerAuth" = [])),
    params(
        ("kind" = Option<String>, Query, description = "'alerts' (default) or 'responses'"),
        ("alertId" = Option<Uuid>, Query, description = "Only replies to this alert"),
        ("page" = Option<u32>, Query, description = "1-based page number"),
        ("perPage" = Option<u32>, Query, description = "Page size, at most 200"),
    ),
    responses(
        (status = 200, description = "Page of alerts or responses"),
        (status = 400, description = "Invalid query", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 403, description = "Role not allowed to read SMS data", body = ErrorResponse),
    )
)]
#[get("/api/sms")]
pub async fn list_sms_handler(
    user: AuthenticatedUser,
    query: web::Query<SmsListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = user.require_any_role(SMS_READERS) {
        return resp;
    }

    let (kind, alert_id) = match query.parse() {
        Ok(parsed) => parsed,
        Err(issues) => return ApiResponse::validation_failed(issues),
    };
    let page = PageRequest::new(query.page, query.per_page);

    let result = match kind {
        ListKind::Alerts => data
            .sms
            .list_alerts
            .execute(page)
            .await
            .map(ApiResponse::success),
        ListKind::Responses => data
            .sms
            .list_responses
            .execute(alert_id, page)
            .await
            .map(ApiResponse::success),
    };

    result.unwrap_or_else(|e| {
        error!(error = %e, ?kind, "Failed to list SMS records");
        ApiResponse::internal_error()
    })
}
