//! Live notification channel: the `/ws` push socket and its reconnect policy.

pub mod backoff;
pub mod frame;
pub mod machine;
pub mod socket;

pub use frame::Notification;
pub use socket::{use_notification_channel, NotificationChannel};
