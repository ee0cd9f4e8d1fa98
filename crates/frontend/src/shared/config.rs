use serde::Deserialize;
use thiserror::Error;

/// Значение-заглушка ссылки для связи; пока оно не заменено, редирект запрещён
pub const CONTACT_URL_PLACEHOLDER: &str = "https://t.me/VOTRE_CONTACT";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub order: OrderConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: "products.json".to_string(),
        }
    }
}

/// What the detail panel's order button does
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionPolicy {
    /// Send `{action: "order_product", product}` to the bot, then show a toast
    #[default]
    Notify,
    /// Ask for confirmation, then open the contact link
    Redirect,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OrderConfig {
    pub policy: ActionPolicy,
    pub contact_url: String,
    pub use_main_button: bool,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            policy: ActionPolicy::Notify,
            contact_url: CONTACT_URL_PLACEHOLDER.to_string(),
            use_main_button: false,
        }
    }
}

impl OrderConfig {
    /// Contact link usable for the redirect policy, `None` while it is still
    /// the placeholder (or empty, or not a URL at all)
    pub fn contact_destination(&self) -> Option<&str> {
        let url = self.contact_url.trim();
        if url.is_empty() || url == CONTACT_URL_PLACEHOLDER {
            return None;
        }
        url::Url::parse(url).ok().map(|_| url)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LogConfig {
    pub fn level(&self) -> log::Level {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Конфигурация, вшитая в бинарник при сборке
const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

/// Parse the configuration embedded at build time
pub fn load_config() -> Result<AppConfig, ConfigError> {
    parse_config(EMBEDDED_CONFIG)
}

pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}
