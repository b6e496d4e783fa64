use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub query_path: String,
    pub scrape_path: String,
    pub content_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    /// Идентификатор пользователя, который уходит с каждым вопросом
    pub user_id: i64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            query_path: "/api/query".to_string(),
            scrape_path: "/web/".to_string(),
            content_path: "/web/contentRag".to_string(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { user_id: 1 }
    }
}

impl ApiConfig {
    pub fn query_url(&self) -> String {
        crate::shared::api_utils::join_url(&self.base_url, &self.query_path)
    }

    pub fn scrape_url(&self) -> String {
        crate::shared::api_utils::join_url(&self.base_url, &self.scrape_path)
    }

    pub fn content_url(&self) -> String {
        crate::shared::api_utils::join_url(&self.base_url, &self.content_path)
    }
}

/// Configuration embedded at build time
const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

/// Parse configuration from TOML text. Missing keys keep their defaults.
pub fn parse_config(contents: &str) -> Result<ClientConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load the embedded configuration
///
/// The browser build reads no files or environment; if the embedded
/// config.toml is broken the built-in defaults are used.
pub fn load_config() -> ClientConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            log::debug!("Using embedded configuration: {}", config.api.base_url);
            config
        }
        Err(e) => {
            log::error!("Embedded config.toml is invalid, using defaults: {}", e);
            ClientConfig::default()
        }
    }
}

/// Configuration from context, or freshly loaded when no provider exists
pub fn use_config() -> ClientConfig {
    leptos::prelude::use_context::<ClientConfig>().unwrap_or_else(load_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.chat.user_id, 1);
    }

    #[test]
    fn test_endpoint_urls() {
        let api = ApiConfig::default();
        assert_eq!(api.query_url(), "http://127.0.0.1:8000/api/query");
        assert_eq!(api.scrape_url(), "http://127.0.0.1:8000/web/");
        assert_eq!(api.content_url(), "http://127.0.0.1:8000/web/contentRag");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
[api]
base_url = "http://localhost:9000/"
"#,
        )
        .unwrap();
        assert_eq!(config.api.query_url(), "http://localhost:9000/api/query");
        assert_eq!(config.api.content_path, "/web/contentRag");
        assert_eq!(config.chat.user_id, 1);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[chat]\nuser_id = \"one\"").is_err());
    }
}
