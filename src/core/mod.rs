pub mod app;
pub mod contact;
pub mod content;
pub mod export;
pub mod modal;
pub mod navigator;
pub mod profile;
pub mod scheduler;
pub mod views;

pub use crate::domain::model::{
    Alert, AlertKind, ContactDraft, ContactField, PageId, ProfileCell, ProfileData,
};
pub use crate::domain::ports::{ConfigProvider, DocumentHead, ProfileSource, Storage, Viewport};
pub use crate::utils::error::Result;
