use serde::Deserialize;

/// Push message sent by the gateway over `/ws`.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Notification {
    /// A packet received by the radio.
    #[serde(rename = "loraMessage")]
    LoraMessage { message: String },
    /// Any other tag; newer firmware may push more kinds.
    #[serde(other)]
    Unknown,
}

pub fn parse_frame(text: &str) -> Result<Notification, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_lora_message() {
        let frame = r#"{"type":"loraMessage","message":"lab:Hello from Device 3!"}"#;
        assert_eq!(
            parse_frame(frame).unwrap(),
            Notification::LoraMessage {
                message: "lab:Hello from Device 3!".to_string()
            }
        );
    }

    #[test]
    fn should_keep_markup_in_payload_untouched() {
        let frame = r#"{"type":"loraMessage","message":"<script>"}"#;
        let Notification::LoraMessage { message } = parse_frame(frame).unwrap() else {
            panic!("expected a LoRa message");
        };
        assert_eq!(crate::html::escape(&message), "&lt;script&gt;");
    }

    #[test]
    fn should_tolerate_unknown_types_and_extra_fields() {
        assert_eq!(
            parse_frame(r#"{"type":"heartbeat","seq":4}"#).unwrap(),
            Notification::Unknown
        );
        assert!(matches!(
            parse_frame(r#"{"type":"loraMessage","message":"x","rssi":-90}"#).unwrap(),
            Notification::LoraMessage { .. }
        ));
    }

    #[test]
    fn should_fail_on_malformed_frames() {
        assert!(parse_frame("not json").is_err());
        assert!(parse_frame(r#"{"message":"no tag"}"#).is_err());
        assert!(parse_frame(r#"{"type":"loraMessage"}"#).is_err());
    }
}
