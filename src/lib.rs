pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{GithubProfileClient, InMemoryHead, LocalStorage, RecordingViewport};
pub use config::{SiteConfig, TomlConfig};
pub use crate::core::app::{Action, App, AppEvent, HeadlessApp};
pub use crate::core::export::SiteExporter;
pub use utils::error::{Result, SiteError};
