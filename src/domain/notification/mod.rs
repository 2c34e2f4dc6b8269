//! Notification domain module

mod model;
mod permission;
mod record;
mod reply;

pub use model::{
    ActionId, ListenerEvent, Notification, NotificationAction, NotificationContent, RemoteInput,
};
pub use permission::PermissionStatus;
pub use record::{NotificationRecord, NotificationSummary, WIRE_SCHEMA_VERSION};
pub use reply::{has_reply_action, resolve_reply, ReplyDispatch, ReplyRequest, ResultBundle};
