#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_duration, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_USERNAME: &str = "github-john-doe";
pub const DEFAULT_USER_AGENT: &str = concat!("portfolio-site/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_ALERT_CLEAR_MS: u64 = 5000;
pub const DEFAULT_SKILLS_REVEAL_MS: u64 = 100;

/// 最終生效的設定；其他來源（命令列、TOML）都會收斂成它
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub api_base_url: String,
    pub username: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub alert_clear_ms: u64,
    pub skills_reveal_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            alert_clear_ms: DEFAULT_ALERT_CLEAR_MS,
            skills_reveal_ms: DEFAULT_SKILLS_REVEAL_MS,
        }
    }
}

impl SiteConfig {
    pub fn from_provider<C: ConfigProvider + ?Sized>(provider: &C) -> Self {
        Self {
            api_base_url: provider.api_base_url().to_string(),
            username: provider.username().to_string(),
            user_agent: provider.user_agent().to_string(),
            timeout_seconds: provider.request_timeout().as_secs(),
            alert_clear_ms: provider.alert_clear_delay().as_millis() as u64,
            skills_reveal_ms: provider.skills_reveal_delay().as_millis() as u64,
        }
    }
}

impl ConfigProvider for SiteConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn alert_clear_delay(&self) -> Duration {
        Duration::from_millis(self.alert_clear_ms)
    }

    fn skills_reveal_delay(&self) -> Duration {
        Duration::from_millis(self.skills_reveal_ms)
    }
}

/// 所有設定來源共用的檢查
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("profile.api_base_url", config.api_base_url())?;
    validate_non_empty_string("profile.username", config.username())?;
    validate_non_empty_string("profile.user_agent", config.user_agent())?;
    validate_positive_duration("profile.timeout_seconds", config.request_timeout())?;
    validate_positive_duration("timers.alert_clear_ms", config.alert_clear_delay())?;
    validate_positive_duration("timers.skills_reveal_ms", config.skills_reveal_delay())?;
    Ok(())
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
