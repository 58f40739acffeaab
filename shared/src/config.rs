use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:8900";
pub const CONFIG_PATH: &str = "/config.json";

/// Runtime settings the page needs from its host.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Picks the host-served config first, then a build-time URL, then the default.
    pub fn resolve(served: Option<ClientConfig>, build_time: Option<&str>) -> Self {
        if let Some(config) = served.filter(|config| !config.api_url.trim().is_empty()) {
            return config;
        }
        match build_time.map(str::trim) {
            Some(api_url) if !api_url.is_empty() => Self {
                api_url: api_url.to_string(),
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn served_config_wins() {
        let served = ClientConfig {
            api_url: "https://calc.example.test".into(),
        };
        let config = ClientConfig::resolve(Some(served.clone()), Some("http://build.test"));
        assert_eq!(config, served);
    }

    #[test]
    fn blank_served_config_falls_through_to_build_time() {
        let served = ClientConfig {
            api_url: "   ".into(),
        };
        let config = ClientConfig::resolve(Some(served), Some("http://build.test"));
        assert_eq!(config.api_url, "http://build.test");
    }

    #[test]
    fn default_when_nothing_configured() {
        assert_eq!(ClientConfig::resolve(None, None), ClientConfig::default());
        assert_eq!(ClientConfig::resolve(None, Some("")), ClientConfig::default());
        assert_eq!(ClientConfig::default().api_url, DEFAULT_API_URL);
    }

    #[test]
    fn config_round_trips_as_json() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_url":"http://calc.test"}"#).unwrap();
        assert_eq!(config.api_url, "http://calc.test");
    }
}
