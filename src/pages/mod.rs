pub mod home;
pub mod logs;
pub mod settings;
pub mod status;

use crate::api::ApiError;
use crate::components::Notifier;
use crate::i18n::Dict;
use dioxus_logger::tracing::error;

/// Surface the device's reply to a one-shot action, or why it failed.
fn report_action(notifier: Notifier, dict: &Dict, action: &str, result: Result<String, ApiError>) {
    match result {
        Ok(reply) => notifier.show_text(&reply),
        Err(err) => {
            error!("{action} failed: {err}");
            notifier.show_labelled(dict.error_prefix, &err.to_string());
        }
    }
}
