use crate::adapters::document::{InMemoryHead, RecordingViewport};
use crate::core::content::LegalSection;
use crate::core::contact::ContactForm;
use crate::core::modal::{ModalClick, ModalController, ModalState};
use crate::core::navigator::{sync_robots_meta, Navigator};
use crate::core::profile::spawn_profile_fetch;
use crate::core::scheduler::{TimerEvent, VirtualClock};
use crate::core::views::{render_document, PageView, Snapshot};
use crate::domain::model::{ContactField, PageId, ProfileCell};
use crate::domain::ports::{ConfigProvider, DocumentHead, ProfileSource, Viewport};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// 使用者或前端送進來的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(PageId),
    ToggleMenu,
    OpenModal,
    CloseModal,
    ModalClick(ModalClick),
    SetField(ContactField, String),
    SubmitContact,
    ToggleLegalSection(LegalSection),
}

/// 非同步工作送回來的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ProfileSettled(ProfileCell),
}

#[derive(Debug, Clone, Copy)]
pub struct Timings {
    pub alert_clear: Duration,
    pub skills_reveal: Duration,
}

impl Timings {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            alert_clear: config.alert_clear_delay(),
            skills_reveal: config.skills_reveal_delay(),
        }
    }
}

/// 無瀏覽器環境下的應用程式（終端前端、匯出器、測試）
pub type HeadlessApp = App<InMemoryHead, RecordingViewport>;

/// 應用程式根：唯一持有所有可變狀態的地方
pub struct App<H: DocumentHead, V: Viewport> {
    navigator: Navigator,
    view: PageView,
    mount: u64,
    modal: ModalController,
    profile: ProfileCell,
    fetch_started: bool,
    clock: VirtualClock,
    timings: Timings,
    head: H,
    viewport: V,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
}

impl HeadlessApp {
    pub fn headless<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        App::new(config, InMemoryHead::new(), RecordingViewport::new())
    }
}

impl<H: DocumentHead, V: Viewport> App<H, V> {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C, head: H, viewport: V) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let navigator = Navigator::new();
        let view = PageView::mount(navigator.current());

        let mut app = Self {
            navigator,
            view,
            mount: 0,
            modal: ModalController::new(),
            profile: ProfileCell::Pending,
            fetch_started: false,
            clock: VirtualClock::new(),
            timings: Timings::from_config(config),
            head,
            viewport,
            events_tx,
            events_rx,
        };

        // 初始頁面也要同步一次 robots meta
        sync_robots_meta(app.navigator.current(), &mut app.head);
        app.on_mounted();
        app
    }

    /// 啟動唯一一次的個人檔案讀取；重複呼叫回傳 `None`
    pub fn start(&mut self, source: Arc<dyn ProfileSource>) -> Option<JoinHandle<()>> {
        if self.fetch_started {
            tracing::warn!("Profile fetch already started, ignoring");
            return None;
        }
        self.fetch_started = true;
        tracing::debug!("Starting profile fetch");
        Some(spawn_profile_fetch(source, self.events_tx.clone()))
    }

    /// 回傳操作是否有作用（例如不在聯絡頁時送出表單就沒有作用）
    pub fn dispatch(&mut self, action: Action) -> bool {
        tracing::trace!("Dispatch {:?}", action);
        match action {
            Action::Navigate(target) => {
                if self
                    .navigator
                    .navigate_to(target, &mut self.viewport, &mut self.head)
                {
                    self.view = PageView::mount(target);
                    self.on_mounted();
                }
                true
            }
            Action::ToggleMenu => {
                self.navigator.toggle_menu();
                true
            }
            Action::OpenModal => {
                self.modal.open();
                tracing::debug!("Modal opened ({:?})", self.modal_state());
                true
            }
            Action::CloseModal => {
                self.modal.close();
                true
            }
            Action::ModalClick(target) => self.modal.click(target),
            Action::SetField(field, value) => match self.view {
                PageView::Contact(ref mut form) => {
                    form.set_field(field, value);
                    true
                }
                _ => self.ignored("set field"),
            },
            Action::SubmitContact => match self.view {
                PageView::Contact(ref mut form) => {
                    let submission = form.submit();
                    self.clock.schedule(
                        self.timings.alert_clear,
                        TimerEvent::ClearAlert {
                            mount: self.mount,
                            generation: submission.generation,
                        },
                    );
                    true
                }
                _ => self.ignored("submit contact"),
            },
            Action::ToggleLegalSection(section) => match self.view {
                PageView::Legal(ref mut accordion) => {
                    accordion.toggle(section);
                    true
                }
                _ => self.ignored("toggle legal section"),
            },
        }
    }

    fn ignored(&self, what: &str) -> bool {
        tracing::debug!("Ignoring '{}' on page {}", what, self.current_page());
        false
    }

    fn on_mounted(&mut self) {
        self.mount += 1;
        if let PageView::Home(_) = self.view {
            self.clock.schedule(
                self.timings.skills_reveal,
                TimerEvent::RevealSkills { mount: self.mount },
            );
        }
    }

    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ProfileSettled(cell) => {
                if self.profile.is_settled() {
                    tracing::debug!("Profile already settled, ignoring late result");
                    return;
                }
                let before = self.modal_state();
                self.profile = cell;
                let after = self.modal_state();
                if before != after {
                    tracing::debug!("Modal {:?} -> {:?}", before, after);
                }
            }
        }
    }

    /// 套用所有已到達的事件，回傳套用數量
    pub fn pump_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    /// 等待下一個事件。應用程式自己持有發送端，因此不會收到 `None`。
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    /// 最多等待 `limit` 讓個人檔案讀取完成
    pub async fn settle_profile(&mut self, limit: Duration) -> &ProfileCell {
        if !self.profile.is_settled() {
            match tokio::time::timeout(limit, self.events_rx.recv()).await {
                Ok(Some(event)) => self.apply_event(event),
                Ok(None) => {}
                Err(_) => tracing::warn!("Profile still pending after {:?}", limit),
            }
        }
        &self.profile
    }

    /// 推進模擬時鐘並執行到期的計時器；頁面已被替換的計時器不做事
    pub fn advance(&mut self, by: Duration) {
        for event in self.clock.advance(by) {
            let applied = match (event, &mut self.view) {
                (TimerEvent::ClearAlert { mount, generation }, PageView::Contact(form))
                    if mount == self.mount =>
                {
                    form.clear_alert(generation)
                }
                (TimerEvent::RevealSkills { mount }, PageView::Home(home))
                    if mount == self.mount =>
                {
                    home.reveal_skills();
                    true
                }
                _ => false,
            };
            if !applied {
                tracing::trace!("Timer {:?} was a no-op", event);
            }
        }
    }

    pub fn current_page(&self) -> PageId {
        self.navigator.current()
    }

    pub fn menu_open(&self) -> bool {
        self.navigator.menu_open()
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn contact_form(&self) -> Option<&ContactForm> {
        match &self.view {
            PageView::Contact(form) => Some(form),
            _ => None,
        }
    }

    pub fn modal_state(&self) -> ModalState {
        self.modal.state(&self.profile)
    }

    pub fn profile(&self) -> &ProfileCell {
        &self.profile
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn head(&self) -> &H {
        &self.head
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            view: &self.view,
            menu_open: self.navigator.menu_open(),
            modal: self.modal.view(&self.profile),
        }
    }

    pub fn render(&self) -> String {
        render_document(&self.head, &self.snapshot())
    }
}
