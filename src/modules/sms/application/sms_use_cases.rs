use std::sync::Arc;

use crate::modules::sms::application::ports::incoming::use_cases::{
    ListAlertsUseCase, ListResponsesUseCase, ReceiveReplyUseCase, SendAlertUseCase,
};

#[derive(Clone)]
pub struct SmsUseCases {
    pub send_alert: Arc<dyn SendAlertUseCase + Send + Sync>,
    pub list_alerts: Arc<dyn ListAlertsUseCase + Send + Sync>,
    pub list_responses: Arc<dyn ListResponsesUseCase + Send + Sync>,
    pub receive_reply: Arc<dyn ReceiveReplyUseCase + Send + Sync>,
}
