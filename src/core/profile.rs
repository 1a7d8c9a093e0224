use crate::core::app::AppEvent;
use crate::domain::model::ProfileCell;
use crate::domain::ports::ProfileSource;
use crate::utils::error::SiteError;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// 讀取一次個人檔案。任何失敗都轉為 `Absent` 並只寫入日誌。
pub async fn load_profile(source: &dyn ProfileSource) -> ProfileCell {
    match source.fetch_profile().await {
        Ok(profile) => {
            tracing::info!("👤 Profile loaded for @{}", profile.login);
            ProfileCell::Present(profile)
        }
        Err(e @ SiteError::ProfileStatusError { .. }) => {
            tracing::warn!("Profile unavailable: {}", e);
            tracing::debug!("💡 {}", e.recovery_suggestion());
            ProfileCell::Absent
        }
        Err(e) => {
            tracing::error!("Profile request failed: {} (Category: {:?})", e, e.category());
            tracing::debug!("💡 {}", e.recovery_suggestion());
            ProfileCell::Absent
        }
    }
}

/// 在背景執行讀取，完成後把結果送回應用程式；接收端已關閉時結果直接丟棄
pub fn spawn_profile_fetch(
    source: Arc<dyn ProfileSource>,
    events: UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let cell = load_profile(source.as_ref()).await;
        if events.send(AppEvent::ProfileSettled(cell)).is_err() {
            tracing::debug!("Application gone before profile settled, result discarded");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProfileData;
    use crate::utils::error::Result;
    use async_trait::async_trait;

    struct Fixed(Option<ProfileData>);

    #[async_trait]
    impl ProfileSource for Fixed {
        async fn fetch_profile(&self) -> Result<ProfileData> {
            self.0
                .clone()
                .ok_or(SiteError::ProfileStatusError { status: 404 })
        }
    }

    #[test]
    fn test_failure_becomes_absent() {
        let cell = tokio_test::block_on(load_profile(&Fixed(None)));
        assert_eq!(cell, ProfileCell::Absent);
    }

    #[test]
    fn test_success_becomes_present() {
        let profile = ProfileData {
            login: "github-john-doe".to_string(),
            ..Default::default()
        };
        let cell = tokio_test::block_on(load_profile(&Fixed(Some(profile.clone()))));
        assert_eq!(cell, ProfileCell::Present(profile));
    }

    #[tokio::test]
    async fn test_dropped_receiver_is_harmless() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        drop(rx);
        let handle = spawn_profile_fetch(Arc::new(Fixed(None)), tx);
        assert!(handle.await.is_ok());
    }
}
