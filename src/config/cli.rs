use crate::config::{SiteConfig, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Terminal front end for the John Doe portfolio site")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub api_base_url: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long)]
    pub alert_clear_ms: Option<u64>,

    #[arg(long)]
    pub skills_reveal_ms: Option<u64>,

    #[arg(long, help = "Do not fetch the profile; the modal stays in its loading state")]
    pub offline: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 先讀 TOML（若有），再套用命令列覆蓋
    pub fn resolve(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                SiteConfig::from_provider(&file)
            }
            None => SiteConfig::default(),
        };

        if let Some(url) = &self.api_base_url {
            config.api_base_url = url.clone();
        }
        if let Some(username) = &self.username {
            config.username = username.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(ms) = self.alert_clear_ms {
            config.alert_clear_ms = ms;
        }
        if let Some(ms) = self.skills_reveal_ms {
            config.skills_reveal_ms = ms;
        }

        config.validate()?;
        Ok(config)
    }
}
