//! HTTP calls to the gateway, wrapping `reqwest`.

use crate::config::DeviceConfig;
use crate::models::{LogEntry, Settings, SettingsUpdate, StatusSnapshot};
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("device answered HTTP {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Transport(err)
        }
    }
}

async fn get_ajax<T: DeserializeOwned>(action: &str) -> Result<T, ApiError> {
    let url = DeviceConfig::from_window().url(&format!("/ajax?action={action}"));
    let response = reqwest::get(&url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    response.json::<T>().await.map_err(ApiError::Decode)
}

/// Device responses to form posts are plain text, also on 4xx.
async fn read_text(response: reqwest::Response) -> Result<String, ApiError> {
    Ok(response.text().await?)
}

pub async fn fetch_settings() -> Result<Settings, ApiError> {
    get_ajax("get_settings").await
}

pub async fn fetch_logs() -> Result<Vec<LogEntry>, ApiError> {
    get_ajax("get_logs").await
}

pub async fn fetch_status() -> Result<StatusSnapshot, ApiError> {
    get_ajax("get_status").await
}

/// Transmit `message` over LoRa, or the device's test message when `None`.
pub async fn send_lora(message: Option<&str>) -> Result<String, ApiError> {
    let url = DeviceConfig::from_window().url("/sendlora");
    let request = reqwest::Client::new().post(&url);
    let request = match message {
        Some(message) => request.form(&[("message", message)]),
        None => request,
    };
    read_text(request.send().await?).await
}

pub async fn update_settings(update: &SettingsUpdate) -> Result<String, ApiError> {
    let url = DeviceConfig::from_window().url("/update_settings");
    let response = reqwest::Client::new()
        .post(&url)
        .form(&update.form_fields())
        .send()
        .await?;
    read_text(response).await
}

pub async fn reboot() -> Result<String, ApiError> {
    let url = DeviceConfig::from_window().url("/reboot");
    read_text(reqwest::Client::new().post(&url).send().await?).await
}
