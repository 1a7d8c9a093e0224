use crate::core::app::{Action, App};
use crate::domain::model::PageId;
use crate::domain::ports::{DocumentHead, Storage, Viewport};
use crate::utils::error::Result;

/// 把每個頁面渲染成靜態 HTML 檔案
pub struct SiteExporter<S: Storage> {
    storage: S,
}

impl<S: Storage> SiteExporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn file_name(page: PageId) -> String {
        format!("{}.html", page.slug())
    }

    /// 依序瀏覽所有頁面並寫出；個人檔案已載入時另外寫出 `profile.json`
    pub async fn run<H: DocumentHead, V: Viewport>(
        &self,
        app: &mut App<H, V>,
    ) -> Result<Vec<String>> {
        let mut written = Vec::new();
        let reveal = app.timings().skills_reveal;

        for page in PageId::ALL {
            app.dispatch(Action::Navigate(page));
            // 讓首頁技能條跑完動畫再輸出
            app.advance(reveal);

            let path = Self::file_name(page);
            let html = app.render();
            tracing::debug!("Writing {} ({} bytes)", path, html.len());
            self.storage.write_file(&path, html.as_bytes()).await?;
            written.push(path);
        }

        if let Some(profile) = app.profile().profile() {
            let json = serde_json::to_vec_pretty(profile)?;
            self.storage.write_file("profile.json", &json).await?;
            written.push("profile.json".to_string());
        }

        app.dispatch(Action::Navigate(PageId::Home));
        tracing::info!("📁 Exported {} files", written.len());
        Ok(written)
    }
}
