use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::incident::application::domain::entities::Incident;
use crate::modules::incident::application::ports::incoming::use_cases::CreateIncidentCommand;
use crate::shared::api::ApiResponse;
use crate::shared::validation::ValidationIssue;
use crate::AppState;

/// Documented shape of the report body. The handler reads the raw JSON so
/// that wrong types come back as field issues instead of a parse error.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateIncidentRequest {
    #[schema(example = "Cholera")]
    pub disease: String,
    #[schema(example = 26.1)]
    pub latitude: f64,
    #[schema(example = 91.7)]
    pub longitude: f64,
    #[schema(example = "Three households with acute diarrhoea")]
    pub details: Option<String>,
}

#[derive(Debug, Default)]
struct LenientIncidentBody {
    disease: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    details: Option<String>,
    type_issues: Vec<ValidationIssue>,
}

impl LenientIncidentBody {
    fn from_value(value: &Value) -> Self {
        let mut body = Self::default();
        let Some(obj) = value.as_object() else {
            body.type_issues
                .push(ValidationIssue::new("body", "body must be a JSON object"));
            return body;
        };

        match obj.get("disease") {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) => body.disease = Some(s.clone()),
            Some(_) => body
                .type_issues
                .push(ValidationIssue::new("disease", "disease must be a string")),
        }

        body.latitude = number_field(obj.get("latitude"), "latitude", &mut body.type_issues);
        body.longitude = number_field(obj.get("longitude"), "longitude", &mut body.type_issues);

        match obj.get("details") {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) => body.details = Some(s.clone()),
            Some(_) => body
                .type_issues
                .push(ValidationIssue::new("details", "details must be a string")),
        }

        body
    }

    fn into_command(self) -> Result<CreateIncidentCommand, Vec<ValidationIssue>> {
        let LenientIncidentBody {
            disease,
            latitude,
            longitude,
            details,
            type_issues,
        } = self;

        match CreateIncidentCommand::new(disease, latitude, longitude, details) {
            Ok(cmd) if type_issues.is_empty() => Ok(cmd),
            Ok(_) => Err(type_issues),
            Err(command_issues) => {
                // a field with a type error would otherwise also be reported as missing
                let mut issues = type_issues;
                for issue in command_issues {
                    if !issues.iter().any(|i| i.field == issue.field) {
                        issues.push(issue);
                    }
                }
                Err(issues)
            }
        }
    }
}

fn number_field(
    value: Option<&Value>,
    field: &'static str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<f64> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(_) => {
            issues.push(ValidationIssue::new(
                field,
                format!("{} must be a number", field),
            ));
            None
        }
    }
}

/// Report a suspected case
#[utoipa::path(
    post,
    path = "/api/incidents",
    tag = "incidents",
    request_body = CreateIncidentRequest,
    responses(
        (status = 201, description = "Incident recorded", body = inline(SuccessResponse<Incident>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/incidents")]
pub async fn create_incident_handler(
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match LenientIncidentBody::from_value(&body).into_command() {
        Ok(cmd) => cmd,
        Err(issues) => return ApiResponse::validation_failed(issues),
    };

    match data.incidents.create.execute(command).await {
        Ok(incident) => ApiResponse::created(incident),
        Err(e) => {
            error!(error = %e, "Failed to record incident");
            ApiResponse::internal_error()
        }
    }
}
