pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, chat, disease, email, geocoding, incident, sms};

use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config as RedisConfig, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::shared::api::custom_json_config;

use crate::auth::adapter::incoming::routes::init_auth_routes;
use crate::auth::adapter::incoming::web::extractors::SessionVerifier;
use crate::auth::adapter::incoming::web::session_cookie::SessionCookie;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::otp_repository_postgres::OtpRepositoryPostgres;
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::token_revocation_redis::RedisTokenRevocationRepository;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, TokenRevocationRepository, UserQuery,
};
use crate::auth::application::services::{
    GenerateOtpService, GetCurrentUserService, ListUsersService, LogoutUserService,
    RegisterUserService, SetUserStatusService, VerifyOtpService,
};

use crate::chat::adapter::incoming::routes::init_chat_routes;
use crate::chat::adapter::outgoing::gemini::{GeminiClient, GeminiConfig};
use crate::chat::application::chat_use_cases::ChatUseCases;
use crate::chat::application::services::StreamChatService;

use crate::disease::adapter::incoming::routes::init_disease_routes;
use crate::disease::adapter::outgoing::disease_query_postgres::DiseaseQueryPostgres;
use crate::disease::application::disease_use_cases::DiseaseUseCases;
use crate::disease::application::services::{GetDiseaseService, ListDiseasesService};

use crate::email::adapter::outgoing::{SmtpConfig, SmtpEmailSender};
use crate::email::application::ports::outgoing::{EmailSender, OtpNotifier};
use crate::email::application::services::OtpEmailService;

use crate::geocoding::adapter::incoming::routes::init_geocoding_routes;
use crate::geocoding::adapter::outgoing::nominatim::{GeocoderConfig, NominatimGeocoder};
use crate::geocoding::application::geocoding_use_cases::GeocodingUseCases;
use crate::geocoding::application::services::{ReverseGeocodeService, SearchPlacesService};

use crate::incident::adapter::incoming::routes::init_incident_routes;
use crate::incident::adapter::outgoing::incident_query_postgres::IncidentQueryPostgres;
use crate::incident::adapter::outgoing::incident_repository_postgres::IncidentRepositoryPostgres;
use crate::incident::application::incident_use_cases::IncidentUseCases;
use crate::incident::application::services::{CreateIncidentService, ListIncidentsService};

use crate::sms::adapter::incoming::routes::init_sms_routes;
use crate::sms::adapter::outgoing::gateway::{ConfiguredSmsGateway, SmsGatewayConfig};
use crate::sms::adapter::outgoing::sms_query_postgres::SmsQueryPostgres;
use crate::sms::adapter::outgoing::sms_repository_postgres::SmsRepositoryPostgres;
use crate::sms::application::services::{
    ListAlertsService, ListResponsesService, ReceiveReplyService, SendAlertService,
};
use crate::sms::application::sms_use_cases::SmsUseCases;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub diseases: DiseaseUseCases,
    pub incidents: IncidentUseCases,
    pub sms: SmsUseCases,
    pub chat: ChatUseCases,
    pub geocoding: GeocodingUseCases,
    pub session_cookie: SessionCookie,
    /// Shared secret expected on inbound SMS webhooks, when configured.
    pub sms_webhook_secret: Option<String>,
}

#[cfg(not(tarpaulin_include))]
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(not(tarpaulin_include))]
fn build_cors(allowed_origin: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600);

    match allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    let env_name = config::load_env_files();
    init_tracing();
    info!(environment = %env_name, "Starting River Pulse");

    let app_config = AppConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;
    let smtp_config = SmtpConfig::from_env()?;
    let gemini_config = GeminiConfig::from_env()?;
    let sms_gateway_config = SmsGatewayConfig::from_env()?;
    let geocoder_config = GeocoderConfig::from_env()?;
    let argon2_hasher = Argon2Hasher::from_env()?;

    // Database
    let mut opt = ConnectOptions::new(app_config.database_url.clone());
    opt.max_connections(app_config.db_max_connections)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if app_config.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&db, None)
            .await
            .context("Failed to run migrations")?;
    }

    let db = Arc::new(db);

    // Redis
    let redis_pool = RedisConfig::from_url(&app_config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("Failed to create Redis pool")?;
    let redis_pool = Arc::new(redis_pool);

    // Auth
    let tokens: Arc<dyn TokenProvider + Send + Sync> = Arc::new(JwtTokenService::new(jwt_config));
    let revocations: Arc<dyn TokenRevocationRepository + Send + Sync> =
        Arc::new(RedisTokenRevocationRepository::new(Arc::clone(&redis_pool)));
    let hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(argon2_hasher);

    let email_sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(
        SmtpEmailSender::from_config(&smtp_config).context("Failed to build SMTP transport")?,
    );
    let otp_notifier: Arc<dyn OtpNotifier + Send + Sync> =
        Arc::new(OtpEmailService::new(email_sender));

    let user_query = UserQueryPostgres::new(Arc::clone(&db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db));
    let otp_repo = OtpRepositoryPostgres::new(Arc::clone(&db));
    let session_users: Arc<dyn UserQuery + Send + Sync> = Arc::new(user_query.clone());

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(user_repo.clone(), Arc::clone(&hasher))),
        generate_otp: Arc::new(GenerateOtpService::new(
            user_query.clone(),
            otp_repo.clone(),
            hasher,
            otp_notifier,
        )),
        verify_otp: Arc::new(VerifyOtpService::new(
            user_query.clone(),
            user_repo.clone(),
            otp_repo,
            Arc::clone(&tokens),
        )),
        current_user: Arc::new(GetCurrentUserService::new(user_query.clone())),
        logout: Arc::new(LogoutUserService::new(Arc::clone(&revocations))),
        list_users: Arc::new(ListUsersService::new(user_query)),
        set_user_status: Arc::new(SetUserStatusService::new(user_repo)),
    };

    // Diseases, incidents
    let disease_query = DiseaseQueryPostgres::new(Arc::clone(&db));
    let diseases = DiseaseUseCases {
        list: Arc::new(ListDiseasesService::new(disease_query.clone())),
        get: Arc::new(GetDiseaseService::new(disease_query.clone())),
    };

    let incidents = IncidentUseCases {
        create: Arc::new(CreateIncidentService::new(IncidentRepositoryPostgres::new(
            Arc::clone(&db),
        ))),
        list: Arc::new(ListIncidentsService::new(IncidentQueryPostgres::new(
            Arc::clone(&db),
        ))),
    };

    // SMS
    let gateway = ConfiguredSmsGateway::from_config(sms_gateway_config)
        .context("Failed to build SMS gateway")?;
    let sms_repo = SmsRepositoryPostgres::new(Arc::clone(&db));
    let sms_query = SmsQueryPostgres::new(Arc::clone(&db));
    let sms = SmsUseCases {
        send_alert: Arc::new(SendAlertService::new(gateway, sms_repo.clone())),
        list_alerts: Arc::new(ListAlertsService::new(sms_query.clone())),
        list_responses: Arc::new(ListResponsesService::new(sms_query)),
        receive_reply: Arc::new(ReceiveReplyService::new(sms_repo)),
    };

    // Chat, geocoding
    let gemini = GeminiClient::new(gemini_config).context("Failed to build Gemini client")?;
    let chat = ChatUseCases {
        stream: Arc::new(StreamChatService::new(gemini, disease_query)),
    };

    let geocoder = NominatimGeocoder::new(geocoder_config).context("Failed to build geocoder")?;
    let geocoding = GeocodingUseCases {
        reverse: Arc::new(ReverseGeocodeService::new(geocoder.clone())),
        search: Arc::new(SearchPlacesService::new(geocoder)),
    };

    let state = AppState {
        auth,
        diseases,
        incidents,
        sms,
        chat,
        geocoding,
        session_cookie: SessionCookie::new(app_config.cookie_secure),
        sms_webhook_secret: app_config.sms_webhook_secret.clone(),
    };

    let session_verifier = web::Data::new(SessionVerifier::new(tokens, revocations, session_users));
    let openapi = ApiDoc::openapi();
    let cors_origin = app_config.cors_allowed_origin.clone();
    let server_url = app_config.server_url();

    info!(address = %server_url, "HTTP server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(cors_origin.as_deref()))
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(session_verifier.clone())
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(web::Data::new(Arc::clone(&redis_pool)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(crate::health::health)
        .service(crate::health::readiness)
        .configure(init_auth_routes)
        .configure(init_disease_routes)
        .configure(init_incident_routes)
        .configure(init_sms_routes)
        .configure(init_chat_routes)
        .configure(init_geocoding_routes);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
