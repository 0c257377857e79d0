//! Where the gateway lives, derived from the page the UI was served from.

/// Used when no `window` is available (tests, `dx serve` without a device).
const FALLBACK_ORIGIN: &str = "http://192.168.4.1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceConfig {
    /// `scheme://host[:port]` of the HTTP API.
    pub origin: String,
    /// Push-notification socket endpoint.
    pub ws_url: String,
}

impl DeviceConfig {
    pub fn from_window() -> Self {
        let location = web_sys::window().map(|w| w.location());
        let protocol = location.as_ref().and_then(|l| l.protocol().ok());
        let host = location.as_ref().and_then(|l| l.host().ok());

        match (protocol, host) {
            (Some(protocol), Some(host)) if !host.is_empty() => Self::new(&protocol, &host),
            _ => Self::fallback(),
        }
    }

    /// `protocol` is the `window.location.protocol` form, e.g. `"https:"`.
    pub fn new(protocol: &str, host: &str) -> Self {
        let ws_scheme = if protocol == "https:" { "wss:" } else { "ws:" };
        Self {
            origin: format!("{protocol}//{host}"),
            ws_url: format!("{ws_scheme}//{host}/ws"),
        }
    }

    fn fallback() -> Self {
        let (protocol, host) = FALLBACK_ORIGIN
            .split_once("//")
            .unwrap_or(("http:", "localhost"));
        Self::new(protocol, host)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_ws_for_plain_http() {
        let config = DeviceConfig::new("http:", "192.168.1.10");
        assert_eq!(config.origin, "http://192.168.1.10");
        assert_eq!(config.ws_url, "ws://192.168.1.10/ws");
    }

    #[test]
    fn should_use_wss_for_https_and_keep_port() {
        let config = DeviceConfig::new("https:", "gateway.local:8443");
        assert_eq!(config.ws_url, "wss://gateway.local:8443/ws");
    }

    #[test]
    fn should_join_paths_onto_origin() {
        let config = DeviceConfig::new("http:", "gw");
        assert_eq!(
            config.url("/ajax?action=get_logs"),
            "http://gw/ajax?action=get_logs"
        );
    }

    #[test]
    fn should_build_fallback_from_constant() {
        let config = DeviceConfig::fallback();
        assert_eq!(config.origin, FALLBACK_ORIGIN);
        assert_eq!(config.ws_url, "ws://192.168.4.1/ws");
    }
}
