use crate::domain::model::{ProfileCell, ProfileData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    OpenLoading,
    OpenLoaded,
}

/// 彈窗內的點擊位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// 內容區外的遮罩
    Backdrop,
    /// 內容區內；不可冒泡到遮罩
    Content,
    CloseButton,
}

/// 彈窗只記錄是否開啟；載入狀態從個人檔案結果推導
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalController {
    visible: bool,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// 回傳這次點擊是否關閉了彈窗
    pub fn click(&mut self, target: ModalClick) -> bool {
        match target {
            ModalClick::Backdrop | ModalClick::CloseButton if self.visible => {
                self.close();
                true
            }
            ModalClick::Backdrop | ModalClick::CloseButton | ModalClick::Content => false,
        }
    }

    pub fn state(&self, profile: &ProfileCell) -> ModalState {
        match (self.visible, profile.profile()) {
            (false, _) => ModalState::Closed,
            (true, None) => ModalState::OpenLoading,
            (true, Some(_)) => ModalState::OpenLoaded,
        }
    }

    pub fn view<'a>(&self, profile: &'a ProfileCell) -> ModalView<'a> {
        if !self.visible {
            return ModalView::Hidden;
        }
        match profile.profile() {
            Some(data) => ModalView::Loaded(ProfileCard::from_profile(data)),
            // 讀取失敗與讀取中在畫面上不做區分
            None => ModalView::Loading,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalView<'a> {
    Hidden,
    Loading,
    Loaded(ProfileCard<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard<'a> {
    pub display_name: &'a str,
    pub login: &'a str,
    pub avatar_url: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub repositories: u64,
    pub followers: u64,
    pub following: u64,
    pub location: Option<&'a str>,
    pub company: Option<&'a str>,
    pub blog: Option<&'a str>,
    pub profile_url: Option<&'a str>,
}

impl<'a> ProfileCard<'a> {
    pub fn from_profile(profile: &'a ProfileData) -> Self {
        Self {
            display_name: profile.display_name(),
            login: &profile.login,
            avatar_url: profile.avatar_url.as_deref(),
            bio: profile.bio(),
            repositories: profile.repositories(),
            followers: profile.followers(),
            following: profile.following(),
            location: profile.location(),
            company: profile.company(),
            blog: profile.blog(),
            profile_url: profile.html_url.as_deref(),
        }
    }

    pub fn counters(&self) -> [(&'static str, u64); 3] {
        [
            ("Repositories", self.repositories),
            ("Followers", self.followers),
            ("Following", self.following),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_machine() {
        let mut modal = ModalController::new();
        let pending = ProfileCell::Pending;
        let loaded = ProfileCell::Present(ProfileData {
            login: "x".to_string(),
            ..Default::default()
        });

        assert_eq!(modal.state(&pending), ModalState::Closed);
        modal.open();
        assert_eq!(modal.state(&pending), ModalState::OpenLoading);
        assert_eq!(modal.state(&loaded), ModalState::OpenLoaded);
        assert_eq!(modal.state(&ProfileCell::Absent), ModalState::OpenLoading);
        modal.close();
        assert_eq!(modal.state(&loaded), ModalState::Closed);
    }

    #[test]
    fn test_content_click_does_not_close() {
        let mut modal = ModalController::new();
        modal.open();

        assert!(!modal.click(ModalClick::Content));
        assert!(modal.is_open());
        assert!(modal.click(ModalClick::Backdrop));
        assert!(!modal.is_open());
        assert!(!modal.click(ModalClick::CloseButton));
    }

    #[test]
    fn test_view_hides_optional_rows() {
        let mut modal = ModalController::new();
        modal.open();
        let cell = ProfileCell::Present(ProfileData {
            login: "x".to_string(),
            public_repos: Some(3),
            followers: Some(1),
            following: Some(2),
            ..Default::default()
        });

        let ModalView::Loaded(card) = modal.view(&cell) else {
            panic!("expected a loaded profile card");
        };
        assert_eq!(card.display_name, "x");
        assert_eq!(card.counters().map(|(_, n)| n), [3, 1, 2]);
        assert_eq!(
            (card.bio, card.location, card.company, card.blog),
            (None, None, None, None)
        );
    }
}
