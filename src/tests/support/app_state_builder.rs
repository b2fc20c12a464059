use std::sync::Arc;

use actix_web::web;

use crate::auth::adapter::incoming::web::session_cookie::SessionCookie;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    GenerateOtpUseCase, GetCurrentUserUseCase, ListUsersUseCase, LogoutUserUseCase,
    RegisterUserUseCase, SetUserStatusUseCase, VerifyOtpUseCase,
};
use crate::chat::application::chat_use_cases::ChatUseCases;
use crate::chat::application::ports::incoming::use_cases::StreamChatUseCase;
use crate::disease::application::disease_use_cases::DiseaseUseCases;
use crate::disease::application::ports::incoming::use_cases::{
    GetDiseaseUseCase, ListDiseasesUseCase,
};
use crate::geocoding::application::geocoding_use_cases::GeocodingUseCases;
use crate::geocoding::application::ports::incoming::use_cases::{
    ReverseGeocodeUseCase, SearchPlacesUseCase,
};
use crate::incident::application::incident_use_cases::IncidentUseCases;
use crate::incident::application::ports::incoming::use_cases::{
    CreateIncidentUseCase, ListIncidentsUseCase,
};
use crate::sms::application::ports::incoming::use_cases::{
    ListAlertsUseCase, ListResponsesUseCase, ReceiveReplyUseCase, SendAlertUseCase,
};
use crate::sms::application::sms_use_cases::SmsUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a stub unless replaced.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    diseases: DiseaseUseCases,
    incidents: IncidentUseCases,
    sms: SmsUseCases,
    chat: ChatUseCases,
    geocoding: GeocodingUseCases,
    session_cookie: SessionCookie,
    sms_webhook_secret: Option<String>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubAuthUseCase),
                generate_otp: Arc::new(StubAuthUseCase),
                verify_otp: Arc::new(StubAuthUseCase),
                current_user: Arc::new(StubAuthUseCase),
                logout: Arc::new(StubAuthUseCase),
                list_users: Arc::new(StubAuthUseCase),
                set_user_status: Arc::new(StubAuthUseCase),
            },
            diseases: DiseaseUseCases {
                list: Arc::new(StubDiseaseUseCase),
                get: Arc::new(StubDiseaseUseCase),
            },
            incidents: IncidentUseCases {
                create: Arc::new(StubIncidentUseCase),
                list: Arc::new(StubIncidentUseCase),
            },
            sms: SmsUseCases {
                send_alert: Arc::new(StubSmsUseCase),
                list_alerts: Arc::new(StubSmsUseCase),
                list_responses: Arc::new(StubSmsUseCase),
                receive_reply: Arc::new(StubSmsUseCase),
            },
            chat: ChatUseCases {
                stream: Arc::new(StubChatUseCase),
            },
            geocoding: GeocodingUseCases {
                reverse: Arc::new(StubGeocodingUseCase),
                search: Arc::new(StubGeocodingUseCase),
            },
            session_cookie: SessionCookie::default(),
            sms_webhook_secret: None,
        }
    }
}

impl TestAppStateBuilder {
    // auth
    pub fn with_register_user(mut self, uc: Arc<dyn RegisterUserUseCase + Send + Sync>) -> Self {
        self.auth.register = uc;
        self
    }

    pub fn with_generate_otp(mut self, uc: Arc<dyn GenerateOtpUseCase + Send + Sync>) -> Self {
        self.auth.generate_otp = uc;
        self
    }

    pub fn with_verify_otp(mut self, uc: Arc<dyn VerifyOtpUseCase + Send + Sync>) -> Self {
        self.auth.verify_otp = uc;
        self
    }

    pub fn with_current_user(mut self, uc: Arc<dyn GetCurrentUserUseCase + Send + Sync>) -> Self {
        self.auth.current_user = uc;
        self
    }

    pub fn with_logout(mut self, uc: Arc<dyn LogoutUserUseCase + Send + Sync>) -> Self {
        self.auth.logout = uc;
        self
    }

    pub fn with_list_users(mut self, uc: Arc<dyn ListUsersUseCase + Send + Sync>) -> Self {
        self.auth.list_users = uc;
        self
    }

    pub fn with_set_user_status(
        mut self,
        uc: Arc<dyn SetUserStatusUseCase + Send + Sync>,
    ) -> Self {
        self.auth.set_user_status = uc;
        self
    }

    // diseases
    pub fn with_list_diseases(mut self, uc: Arc<dyn ListDiseasesUseCase + Send + Sync>) -> Self {
        self.diseases.list = uc;
        self
    }

    pub fn with_get_disease(mut self, uc: Arc<dyn GetDiseaseUseCase + Send + Sync>) -> Self {
        self.diseases.get = uc;
        self
    }

    // incidents
    pub fn with_create_incident(
        mut self,
        uc: Arc<dyn CreateIncidentUseCase + Send + Sync>,
    ) -> Self {
        self.incidents.create = uc;
        self
    }

    pub fn with_list_incidents(mut self, uc: Arc<dyn ListIncidentsUseCase + Send + Sync>) -> Self {
        self.incidents.list = uc;
        self
    }

    // sms
    pub fn with_send_alert(mut self, uc: Arc<dyn SendAlertUseCase + Send + Sync>) -> Self {
        self.sms.send_alert = uc;
        self
    }

    pub fn with_list_alerts(mut self, uc: Arc<dyn ListAlertsUseCase + Send + Sync>) -> Self {
        self.sms.list_alerts = uc;
        self
    }

    pub fn with_list_responses(mut self, uc: Arc<dyn ListResponsesUseCase + Send + Sync>) -> Self {
        self.sms.list_responses = uc;
        self
    }

    pub fn with_receive_reply(mut self, uc: Arc<dyn ReceiveReplyUseCase + Send + Sync>) -> Self {
        self.sms.receive_reply = uc;
        self
    }

    pub fn with_sms_webhook_secret(mut self, secret: &str) -> Self {
        self.sms_webhook_secret = Some(secret.to_string());
        self
    }

    // chat, geocoding
    pub fn with_stream_chat(mut self, uc: Arc<dyn StreamChatUseCase + Send + Sync>) -> Self {
        self.chat.stream = uc;
        self
    }

    pub fn with_reverse_geocode(
        mut self,
        uc: Arc<dyn ReverseGeocodeUseCase + Send + Sync>,
    ) -> Self {
        self.geocoding.reverse = uc;
        self
    }

    pub fn with_search_places(mut self, uc: Arc<dyn SearchPlacesUseCase + Send + Sync>) -> Self {
        self.geocoding.search = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            diseases: self.diseases,
            incidents: self.incidents,
            sms: self.sms,
            chat: self.chat,
            geocoding: self.geocoding,
            session_cookie: self.session_cookie,
            sms_webhook_secret: self.sms_webhook_secret,
        })
    }
}
