use crate::domain::model::ProfileData;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn username(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn alert_clear_delay(&self) -> Duration;
    fn skills_reveal_delay(&self) -> Duration;

    fn profile_endpoint(&self) -> String {
        format!(
            "{}/users/{}",
            self.api_base_url().trim_end_matches('/'),
            self.username()
        )
    }
}

/// 個人檔案的唯一外部讀取點
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self) -> Result<ProfileData>;
}

/// 文件 `<head>` 中的 meta 標籤
pub trait DocumentHead {
    fn has_meta(&self, name: &str) -> bool;
    fn meta_entries(&self) -> Vec<(&str, &str)>;
    fn append_meta(&mut self, name: &str, content: &str);
    /// 移除所有同名標籤，回傳是否有移除
    fn remove_meta(&mut self, name: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

pub trait Viewport {
    fn scroll_to_top(&mut self, behavior: ScrollBehavior);
}
