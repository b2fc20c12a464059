pub mod list_sms_service;
pub mod receive_reply_service;
pub mod send_alert_service;

pub use list_sms_service::{ListAlertsService, ListResponsesService};
pub use receive_reply_service::ReceiveReplyService;
pub use send_alert_service::SendAlertService;
