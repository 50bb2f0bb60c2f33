use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_notice_timeout_ms")]
    pub notice_timeout_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            notice_timeout_ms: default_notice_timeout_ms(),
        }
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_notice_timeout_ms() -> u32 {
    3000
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuración inválida: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "/api"

[ui]
currency_symbol = "$"
notice_timeout_ms = 3000
"#;

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

/// Configuration parsed once per page load
pub fn config() -> &'static AppConfig {
    &CONFIG
}

pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Load the embedded configuration.
///
/// In the browser a `<meta name="api-base" content="...">` tag overrides
/// the API base url.
pub fn load_config() -> AppConfig {
    let mut config = match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            fallback_config()
        }
    };

    if let Some(base_url) = meta_api_base() {
        log::info!("API base from meta tag: {}", base_url);
        config.api.base_url = base_url;
    }
    config
}

fn fallback_config() -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url: "/api".to_string(),
        },
        ui: UiConfig::default(),
    }
}

#[cfg(target_arch = "wasm32")]
fn meta_api_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name=\"api-base\"]")
        .ok()
        .flatten()?;
    meta.get_attribute("content")
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn meta_api_base() -> Option<String> {
    None
}
