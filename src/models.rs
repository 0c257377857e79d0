//! Payloads exchanged with the gateway's `/ajax` and form endpoints.

use serde::Deserialize;

/// Device configuration as returned by `get_settings`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub device_number: u32,
    #[serde(rename = "siteID")]
    pub site_id: String,
    pub enable_system_logs: bool,
    pub enable_http_logs: bool,
    #[serde(rename = "enableLoRaLogs")]
    pub enable_lora_logs: bool,
}

/// Source of a log line on the device.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "String")]
pub enum LogType {
    Http,
    System,
    LoRa,
    Other(String),
}

impl From<String> for LogType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "HTTP" => Self::Http,
            "SYSTEM" => Self::System,
            "LoRa" => Self::LoRa,
            _ => Self::Other(value),
        }
    }
}

impl std::fmt::Display for LogType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http => f.write_str("HTTP"),
            Self::System => f.write_str("SYSTEM"),
            Self::LoRa => f.write_str("LoRa"),
            Self::Other(other) => f.write_str(other),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: LogType,
    pub message: String,
    #[serde(default)]
    pub src_ip: Option<String>,
    #[serde(default)]
    pub dest_ip: Option<String>,
}

impl LogEntry {
    /// Source and destination addresses, only for HTTP entries.
    ///
    /// Missing addresses on an HTTP entry are reported as empty strings.
    pub fn addresses(&self) -> Option<(&str, &str)> {
        if self.kind != LogType::Http {
            return None;
        }
        Some((
            self.src_ip.as_deref().unwrap_or_default(),
            self.dest_ip.as_deref().unwrap_or_default(),
        ))
    }
}

/// Point-in-time health readout from `get_status`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    /// Seconds since boot.
    pub uptime: u64,
    /// Bytes.
    pub free_heap: u64,
    pub chip_revision: u32,
    #[serde(rename = "wifiRSSI")]
    pub wifi_rssi: i32,
    pub current_time: String,
    pub time_zone: String,
    #[serde(rename = "wifiIP")]
    pub wifi_ip: String,
    #[serde(rename = "ethIP")]
    pub eth_ip: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("device number must contain digits only")]
    InvalidDeviceNumber,
    #[error("site ID may only contain letters, numbers, dash and underscore")]
    InvalidSiteId,
}

/// Log toggles as edited in the settings form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFlags {
    pub system: bool,
    pub http: bool,
    pub lora: bool,
}

/// A settings edit that passed client-side validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsUpdate {
    device_number: String,
    site_id: String,
    flags: LogFlags,
}

impl SettingsUpdate {
    pub fn parse(
        device_number: &str,
        site_id: &str,
        flags: LogFlags,
    ) -> Result<Self, SettingsError> {
        if !is_valid_device_number(device_number) {
            return Err(SettingsError::InvalidDeviceNumber);
        }
        if !is_valid_site_id(site_id) {
            return Err(SettingsError::InvalidSiteId);
        }
        Ok(Self {
            device_number: device_number.to_string(),
            site_id: site_id.to_string(),
            flags,
        })
    }

    /// Form fields for `/update_settings`.
    ///
    /// Unchecked flags are left out entirely; the device reads absence as off.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("deviceNumber", self.device_number.as_str()),
            ("siteID", self.site_id.as_str()),
        ];
        if self.flags.system {
            fields.push(("enableSystemLogs", "on"));
        }
        if self.flags.http {
            fields.push(("enableHttpLogs", "on"));
        }
        if self.flags.lora {
            fields.push(("enableLoRaLogs", "on"));
        }
        fields
    }
}

pub fn is_valid_device_number(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_site_id(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_accept_digit_only_device_numbers() {
        assert!(is_valid_device_number("123"));
        assert!(is_valid_device_number("0"));
    }

    #[test]
    fn should_reject_malformed_device_numbers() {
        for value in ["12a", "", "-1", "1.5", " 12", "١٢"] {
            assert!(!is_valid_device_number(value), "{value:?} accepted");
        }
    }

    #[test]
    fn should_validate_site_ids() {
        assert!(is_valid_site_id("site-01_A"));
        for value in ["site 01", "site!01", "", "sité"] {
            assert!(!is_valid_site_id(value), "{value:?} accepted");
        }
    }

    #[test]
    fn should_reject_update_before_building_payload() {
        assert_eq!(
            SettingsUpdate::parse("12a", "site", LogFlags::default()),
            Err(SettingsError::InvalidDeviceNumber)
        );
        assert_eq!(
            SettingsUpdate::parse("12", "site 01", LogFlags::default()),
            Err(SettingsError::InvalidSiteId)
        );
    }

    #[test]
    fn should_omit_unchecked_flags_from_form() {
        let flags = LogFlags {
            system: true,
            http: false,
            lora: true,
        };
        let update = SettingsUpdate::parse("7", "north_gate", flags).unwrap();
        assert_eq!(
            update.form_fields(),
            vec![
                ("deviceNumber", "7"),
                ("siteID", "north_gate"),
                ("enableSystemLogs", "on"),
                ("enableLoRaLogs", "on"),
            ]
        );
    }

    #[test]
    fn should_drop_http_flag_after_toggling_it_off() {
        let fetched: Settings = serde_json::from_value(json!({
            "deviceNumber": 3,
            "siteID": "lab",
            "enableSystemLogs": false,
            "enableHttpLogs": true,
            "enableLoRaLogs": false
        }))
        .unwrap();
        let mut flags = LogFlags {
            system: fetched.enable_system_logs,
            http: fetched.enable_http_logs,
            lora: fetched.enable_lora_logs,
        };
        flags.http = false;

        let update =
            SettingsUpdate::parse(&fetched.device_number.to_string(), &fetched.site_id, flags)
                .unwrap();
        assert!(update
            .form_fields()
            .iter()
            .all(|(name, _)| *name != "enableHttpLogs"));
    }

    #[test]
    fn should_deserialize_settings_with_device_key_names() {
        let settings: Settings = serde_json::from_value(json!({
            "deviceNumber": 42,
            "siteID": "roof",
            "enableSystemLogs": true,
            "enableHttpLogs": false,
            "enableLoRaLogs": true
        }))
        .unwrap();
        assert_eq!(settings.device_number, 42);
        assert_eq!(settings.site_id, "roof");
        assert!(settings.enable_lora_logs);
        assert!(!settings.enable_http_logs);
    }

    #[test]
    fn should_expose_addresses_only_for_http_logs() {
        let logs: Vec<LogEntry> = serde_json::from_value(json!([
            {
                "timestamp": "2024-05-01 10:00:00",
                "type": "HTTP",
                "message": "200 OK - /",
                "srcIp": "192.168.1.20",
                "destIp": "192.168.1.10"
            },
            {
                "timestamp": "2024-05-01 10:00:01",
                "type": "LoRa",
                "message": "LoRa message sent: lab:hi"
            }
        ]))
        .unwrap();
        assert_eq!(logs[0].addresses(), Some(("192.168.1.20", "192.168.1.10")));
        assert_eq!(logs[1].kind, LogType::LoRa);
        assert_eq!(logs[1].addresses(), None);
    }

    #[test]
    fn should_keep_unknown_log_types_verbatim() {
        let entry: LogEntry = serde_json::from_value(json!({
            "timestamp": "t",
            "type": "OTA",
            "message": "Start updating sketch"
        }))
        .unwrap();
        assert_eq!(entry.kind, LogType::Other("OTA".to_string()));
        assert_eq!(entry.kind.to_string(), "OTA");
    }

    #[test]
    fn should_deserialize_status_snapshot() {
        let status: StatusSnapshot = serde_json::from_value(json!({
            "uptime": 3600,
            "freeHeap": 201_344,
            "chipRevision": 3,
            "wifiRSSI": -61,
            "currentTime": "2024-05-01 10:00:00",
            "timeZone": "GMT-7 (Mountain Time)",
            "wifiIP": "192.168.1.10",
            "ethIP": "0.0.0.0"
        }))
        .unwrap();
        assert_eq!(status.wifi_rssi, -61);
        assert_eq!(status.eth_ip, "0.0.0.0");
    }
}
