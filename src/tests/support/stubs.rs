//! Placeholder use cases for state slots a test does not exercise.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserView};
use crate::auth::application::ports::incoming::use_cases::{
    GenerateOtpCommand, GenerateOtpError, GenerateOtpUseCase, GetCurrentUserError,
    GetCurrentUserUseCase, ListUsersError, ListUsersUseCase, LogoutCommand, LogoutError,
    LogoutUserUseCase, OtpChallenge, RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
    SetUserStatusCommand, SetUserStatusError, SetUserStatusUseCase, VerifiedSession,
    VerifyOtpCommand, VerifyOtpError, VerifyOtpUseCase,
};
use crate::chat::application::ports::incoming::use_cases::{
    ChatCommand, StreamChatError, StreamChatUseCase,
};
use crate::chat::application::ports::outgoing::TextStream;
use crate::disease::application::domain::entities::Disease;
use crate::disease::application::ports::incoming::use_cases::{
    GetDiseaseError, GetDiseaseUseCase, ListDiseasesError, ListDiseasesUseCase,
};
use crate::geocoding::application::domain::entities::{Coordinates, Place};
use crate::geocoding::application::ports::incoming::use_cases::{
    ReverseGeocodeError, ReverseGeocodeUseCase, SearchPlacesCommand, SearchPlacesError,
    SearchPlacesUseCase,
};
use crate::incident::application::domain::entities::Incident;
use crate::incident::application::ports::incoming::use_cases::{
    CreateIncidentCommand, CreateIncidentError, CreateIncidentUseCase, ListIncidentsError,
    ListIncidentsUseCase,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::sms::application::domain::entities::{SmsAlert, SmsResponse};
use crate::sms::application::ports::incoming::use_cases::{
    AlertDispatch, ListAlertsUseCase, ListResponsesUseCase, ListSmsError, ReceiveReplyCommand,
    ReceiveReplyError, ReceiveReplyUseCase, SendAlertCommand, SendAlertError, SendAlertUseCase,
};

#[derive(Default, Clone)]
pub struct StubAuthUseCase;

#[async_trait]
impl RegisterUserUseCase for StubAuthUseCase {
    async fn execute(&self, _command: RegisterUserCommand) -> Result<UserView, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GenerateOtpUseCase for StubAuthUseCase {
    async fn execute(&self, _command: GenerateOtpCommand) -> Result<OtpChallenge, GenerateOtpError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl VerifyOtpUseCase for StubAuthUseCase {
    async fn execute(&self, _command: VerifyOtpCommand) -> Result<VerifiedSession, VerifyOtpError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetCurrentUserUseCase for StubAuthUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserView, GetCurrentUserError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl LogoutUserUseCase for StubAuthUseCase {
    async fn execute(&self, _command: LogoutCommand) -> Result<(), LogoutError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListUsersUseCase for StubAuthUseCase {
    async fn execute(&self, _page: PageRequest) -> Result<PageResult<UserView>, ListUsersError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl SetUserStatusUseCase for StubAuthUseCase {
    async fn execute(
        &self,
        _command: SetUserStatusCommand,
    ) -> Result<UserView, SetUserStatusError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDiseaseUseCase;

#[async_trait]
impl ListDiseasesUseCase for StubDiseaseUseCase {
    async fn execute(&self) -> Result<Vec<Disease>, ListDiseasesError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetDiseaseUseCase for StubDiseaseUseCase {
    async fn execute(&self, _slug: &str) -> Result<Disease, GetDiseaseError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubIncidentUseCase;

#[async_trait]
impl CreateIncidentUseCase for StubIncidentUseCase {
    async fn execute(&self, _command: CreateIncidentCommand) -> Result<Incident, CreateIncidentError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListIncidentsUseCase for StubIncidentUseCase {
    async fn execute(&self, _page: PageRequest) -> Result<PageResult<Incident>, ListIncidentsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSmsUseCase;

#[async_trait]
impl SendAlertUseCase for StubSmsUseCase {
    async fn execute(
        &self,
        _command: SendAlertCommand,
        _sent_by: Option<Uuid>,
    ) -> Result<AlertDispatch, SendAlertError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListAlertsUseCase for StubSmsUseCase {
    async fn execute(&self, _page: PageRequest) -> Result<PageResult<SmsAlert>, ListSmsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListResponsesUseCase for StubSmsUseCase {
    async fn execute(
        &self,
        _alert_id: Option<Uuid>,
        _page: PageRequest,
    ) -> Result<PageResult<SmsResponse>, ListSmsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ReceiveReplyUseCase for StubSmsUseCase {
    async fn execute(&self, _command: ReceiveReplyCommand) -> Result<SmsResponse, ReceiveReplyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubChatUseCase;

#[async_trait]
impl StreamChatUseCase for StubChatUseCase {
    async fn execute(&self, _command: ChatCommand) -> Result<TextStream, StreamChatError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGeocodingUseCase;

#[async_trait]
impl ReverseGeocodeUseCase for StubGeocodingUseCase {
    async fn execute(&self, _at: Coordinates) -> Result<Place, ReverseGeocodeError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl SearchPlacesUseCase for StubGeocodingUseCase {
    async fn execute(&self, _command: SearchPlacesCommand) -> Result<Vec<Place>, SearchPlacesError> {
        unimplemented!("Not used in this test")
    }
}
