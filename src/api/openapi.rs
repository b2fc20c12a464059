use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::health::{HealthResponse, ReadinessResponse};
use crate::shared::validation::ValidationIssue;

use crate::auth::adapter::incoming::web::routes::{
    GenerateOtpRequest, LogoutResponseBody, RegisterUserRequest, SetUserStatusRequest,
    VerifyOtpRequest,
};
use crate::auth::application::domain::entities::{Role, UserView};
use crate::auth::application::ports::incoming::use_cases::{OtpChallenge, VerifiedSession};
use crate::chat::adapter::incoming::web::routes::ChatForm;
use crate::disease::application::domain::entities::Disease;
use crate::geocoding::application::domain::entities::Place;
use crate::incident::adapter::incoming::web::routes::CreateIncidentRequest;
use crate::incident::application::domain::entities::Incident;
use crate::sms::adapter::incoming::web::routes::{ReceiveReplyRequest, SendAlertRequest};
use crate::sms::application::domain::entities::{
    AlertStatus, ResponseType, Severity, SmsAlert, SmsResponse, UrgencyLevel,
};
use crate::sms::application::ports::incoming::use_cases::{AlertDispatch, RecipientResult};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "River Pulse API",
        version = "1.0.0",
        description = "Water-borne disease surveillance: incident reports, SMS alerts, health assistant and map lookups",
    ),
    paths(
        crate::health::health,
        crate::health::readiness,

        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::generate_otp_handler,
        crate::auth::adapter::incoming::web::routes::verify_otp_handler,
        crate::auth::adapter::incoming::web::routes::current_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::list_users_handler,
        crate::auth::adapter::incoming::web::routes::set_user_status_handler,

        crate::disease::adapter::incoming::web::routes::list_diseases_handler,
        crate::disease::adapter::incoming::web::routes::get_disease_handler,

        crate::incident::adapter::incoming::web::routes::create_incident_handler,
        crate::incident::adapter::incoming::web::routes::list_incidents_handler,

        crate::sms::adapter::incoming::web::routes::send_alert_handler,
        crate::sms::adapter::incoming::web::routes::list_sms_handler,
        crate::sms::adapter::incoming::web::routes::receive_reply_handler,

        crate::chat::adapter::incoming::web::routes::chat_handler,

        crate::geocoding::adapter::incoming::web::routes::reverse_geocode_handler,
        crate::geocoding::adapter::incoming::web::routes::search_places_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            ValidationIssue,
            HealthResponse,
            ReadinessResponse,

            RegisterUserRequest,
            GenerateOtpRequest,
            VerifyOtpRequest,
            SetUserStatusRequest,
            LogoutResponseBody,
            OtpChallenge,
            VerifiedSession,
            UserView,
            Role,

            Disease,
            Incident,
            CreateIncidentRequest,

            SendAlertRequest,
            ReceiveReplyRequest,
            AlertDispatch,
            RecipientResult,
            SmsAlert,
            SmsResponse,
            Severity,
            AlertStatus,
            ResponseType,
            UrgencyLevel,

            ChatForm,
            Place,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "auth", description = "Registration, OTP login and sessions"),
        (name = "admin", description = "User administration"),
        (name = "diseases", description = "Disease reference catalog"),
        (name = "incidents", description = "Suspected case reports"),
        (name = "sms", description = "Outbreak alerts and SMS replies"),
        (name = "chat", description = "Health assistant"),
        (name = "geocoding", description = "Place lookups for the map"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "Session JWT; the river_pulse_session cookie is accepted as well",
                        ))
                        .build(),
                ),
            )
        }
    }
}
