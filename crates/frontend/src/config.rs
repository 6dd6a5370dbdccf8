//! Application configuration
//!
//! The configuration is an embedded TOML document. The API base URL can be
//! replaced at build time with `BLOG_ADMIN_API_BASE=https://... trunk build`.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Collection path of the article resource
    pub articles_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub notification_ttl_ms: u32,
    pub default_page_size: u32,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://geek.itheima.net/v1_0"
articles_path = "/mp/articles"

[ui]
notification_ttl_ms = 3000
default_page_size = 10
"#;

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    match load_config(option_env!("BLOG_ADMIN_API_BASE")) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid configuration, using defaults: {}", e);
            default_config()
        }
    }
});

/// Global configuration, parsed on first use
pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// Parse the embedded configuration and apply the optional base URL override
pub fn load_config(base_override: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(base) = base_override {
        let base = base.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            anyhow::bail!("API base must be an absolute http(s) URL, got '{}'", base);
        }
        config.api.base_url = base.to_string();
    }
    Ok(config)
}

fn default_config() -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url: "http://geek.itheima.net/v1_0".to_string(),
            articles_path: "/mp/articles".to_string(),
        },
        ui: UiConfig {
            notification_ttl_ms: 3000,
            default_page_size: 10,
        },
    }
}
