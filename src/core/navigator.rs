use crate::domain::model::PageId;
use crate::domain::ports::{DocumentHead, ScrollBehavior, Viewport};

pub const ROBOTS_META: &str = "robots";
pub const ROBOTS_NOINDEX: &str = "noindex, nofollow";

/// 目前頁面與行動版選單狀態
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: PageId,
    menu_open: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// 切換頁面、收起選單並平滑捲回頂端。回傳頁面是否真的改變；
    /// 只有改變時才同步 robots meta。
    pub fn navigate_to<V, H>(&mut self, target: PageId, viewport: &mut V, head: &mut H) -> bool
    where
        V: Viewport + ?Sized,
        H: DocumentHead + ?Sized,
    {
        let changed = self.current != target;
        if changed {
            tracing::debug!("Navigating {} -> {}", self.current, target);
        }

        self.current = target;
        self.menu_open = false;
        viewport.scroll_to_top(ScrollBehavior::Smooth);

        if changed {
            sync_robots_meta(target, head);
        }
        changed
    }
}

/// 法律聲明頁要求爬蟲不索引：確保 meta 恰好存在一次，其他頁面則移除
pub fn sync_robots_meta<H: DocumentHead + ?Sized>(page: PageId, head: &mut H) {
    match page {
        PageId::Legal => {
            if !head.has_meta(ROBOTS_META) {
                head.append_meta(ROBOTS_META, ROBOTS_NOINDEX);
                tracing::debug!("Added robots meta ({})", ROBOTS_NOINDEX);
            }
        }
        PageId::Home | PageId::Services | PageId::Portfolio | PageId::Contact => {
            if head.remove_meta(ROBOTS_META) {
                tracing::debug!("Removed robots meta");
            }
        }
    }
}
