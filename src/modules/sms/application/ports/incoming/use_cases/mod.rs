pub mod list_sms;
pub mod receive_reply;
pub mod send_alert;

pub use list_sms::{ListAlertsUseCase, ListResponsesUseCase, ListSmsError};
pub use receive_reply::{ReceiveReplyCommand, ReceiveReplyError, ReceiveReplyUseCase};
pub use send_alert::{
    AlertDispatch, RecipientResult, SendAlertCommand, SendAlertError, SendAlertUseCase,
};
