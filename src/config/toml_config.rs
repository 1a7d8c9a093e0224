use crate::config::{
    validate_provider, DEFAULT_ALERT_CLEAR_MS, DEFAULT_API_BASE_URL, DEFAULT_SKILLS_REVEAL_MS,
    DEFAULT_TIMEOUT_SECONDS, DEFAULT_USERNAME, DEFAULT_USER_AGENT,
};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub profile: ProfileSection,
    pub timers: Option<TimersSection>,
    pub export: Option<ExportSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSection {
    pub api_base_url: Option<String>,
    pub username: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimersSection {
    pub alert_clear_ms: Option<u64>,
    pub skills_reveal_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSection {
    pub output_path: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GITHUB_USERNAME})；未設定的變數原樣保留
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_provider(self)?;
        if let Some(export) = &self.export {
            validate_non_empty_string("export.output_path", &export.output_path)?;
        }
        Ok(())
    }

    /// 取得匯出路徑
    pub fn output_path(&self) -> Option<&str> {
        self.export.as_ref().map(|e| e.output_path.as_str())
    }

    fn timers(&self) -> TimersSection {
        self.timers.clone().unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        self.profile
            .api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
    }

    fn username(&self) -> &str {
        self.profile.username.as_deref().unwrap_or(DEFAULT_USERNAME)
    }

    fn user_agent(&self) -> &str {
        self.profile.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.profile.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn alert_clear_delay(&self) -> Duration {
        Duration::from_millis(self.timers().alert_clear_ms.unwrap_or(DEFAULT_ALERT_CLEAR_MS))
    }

    fn skills_reveal_delay(&self) -> Duration {
        Duration::from_millis(
            self.timers()
                .skills_reveal_ms
                .unwrap_or(DEFAULT_SKILLS_REVEAL_MS),
        )
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
