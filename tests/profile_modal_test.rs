use anyhow::Result;
use async_trait::async_trait;
use httpmock::prelude::*;
use portfolio_site::core::modal::{ModalClick, ModalState, ModalView};
use portfolio_site::core::{ProfileCell, ProfileData, ProfileSource};
use portfolio_site::{Action, GithubProfileClient, HeadlessApp, SiteConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

fn config_for(server: &MockServer) -> SiteConfig {
    SiteConfig {
        api_base_url: server.base_url(),
        timeout_seconds: 5,
        ..Default::default()
    }
}

async fn booted_app(config: &SiteConfig) -> Result<HeadlessApp> {
    let mut app = HeadlessApp::headless(config);
    let client = GithubProfileClient::new(config)?;
    assert!(app.start(Arc::new(client)).is_some());
    app.settle_profile(Duration::from_secs(10)).await;
    Ok(app)
}

/// 永遠不會完成的來源
struct NeverResolves;

#[async_trait]
impl ProfileSource for NeverResolves {
    async fn fetch_profile(&self) -> portfolio_site::Result<ProfileData> {
        std::future::pending().await
    }
}

/// 收到通知後才回傳的來源
struct Gated {
    release: Arc<Notify>,
    profile: ProfileData,
}

#[async_trait]
impl ProfileSource for Gated {
    async fn fetch_profile(&self) -> portfolio_site::Result<ProfileData> {
        self.release.notified().await;
        Ok(self.profile.clone())
    }
}

#[tokio::test]
async fn test_partial_profile_renders_login_and_counters() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users/github-john-doe")
            .header_exists("user-agent");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "login": "x",
                "public_repos": 3,
                "followers": 1,
                "following": 2
            }));
    });

    let mut app = booted_app(&config_for(&server)).await?;
    api_mock.assert();
    assert_eq!(app.modal_state(), ModalState::Closed);

    app.dispatch(Action::OpenModal);
    assert_eq!(app.modal_state(), ModalState::OpenLoaded);

    match app.snapshot().modal {
        ModalView::Loaded(card) => {
            assert_eq!(card.display_name, "x");
            assert_eq!(card.counters().map(|(_, n)| n), [3, 1, 2]);
            assert_eq!(card.bio, None);
            assert_eq!(card.location, None);
            assert_eq!(card.company, None);
            assert_eq!(card.blog, None);
        }
        other => panic!("expected loaded modal, got {:?}", other),
    }

    let html = app.render();
    assert!(html.contains("<h3 data-field=\"display-name\">x</h3>"));
    assert!(html.contains("<p data-field=\"login\">@x</p>"));
    assert!(html.contains("data-counter=\"repositories\"><div class=\"count\">3</div>"));
    assert!(html.contains("data-counter=\"followers\"><div class=\"count\">1</div>"));
    assert!(html.contains("data-counter=\"following\"><div class=\"count\">2</div>"));
    assert!(!html.contains("data-row="));
    assert!(!html.contains("Chargement des informations GitHub"));
    Ok(())
}

#[tokio::test]
async fn test_full_profile_renders_optional_rows() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/github-john-doe");
        then.status(200).json_body(serde_json::json!({
            "login": "github-john-doe",
            "name": "John Doe",
            "avatar_url": "https://avatars.githubusercontent.com/u/1",
            "bio": "Développeur <web>",
            "public_repos": 12,
            "followers": 40,
            "following": 7,
            "location": "Lyon",
            "company": "CEF",
            "blog": "https://johndoe.dev",
            "html_url": "https://github.com/github-john-doe"
        }));
    });

    let mut app = booted_app(&config_for(&server)).await?;
    app.dispatch(Action::OpenModal);

    let html = app.render();
    assert!(html.contains("<h3 data-field=\"display-name\">John Doe</h3>"));
    assert!(html.contains("<p data-row=\"bio\">Développeur &lt;web&gt;</p>"));
    assert!(html.contains("<div data-row=\"location\">Lyon</div>"));
    assert!(html.contains("<div data-row=\"company\">CEF</div>"));
    assert!(html.contains("data-row=\"blog\"><a href=\"https://johndoe.dev\""));
    assert!(html.contains(
        "href=\"https://github.com/github-john-doe\" target=\"_blank\" rel=\"noopener\">Voir le profil GitHub"
    ));
    Ok(())
}

#[tokio::test]
async fn test_failed_fetch_keeps_loading_forever() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/users/github-john-doe");
        then.status(404)
            .json_body(serde_json::json!({ "message": "Not Found" }));
    });

    let mut app = booted_app(&config_for(&server)).await?;
    api_mock.assert_hits(1);
    assert_eq!(app.profile(), &ProfileCell::Absent);

    app.dispatch(Action::OpenModal);
    app.advance(Duration::from_secs(60));
    assert_eq!(app.modal_state(), ModalState::OpenLoading);

    let html = app.render();
    assert!(html.contains("Chargement des informations GitHub..."));
    assert!(!html.contains("data-counter="));
    Ok(())
}

#[tokio::test]
async fn test_undecodable_body_is_absent() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/github-john-doe");
        then.status(200).body("<html>rate limited</html>");
    });

    let app = booted_app(&config_for(&server)).await?;
    assert_eq!(app.profile(), &ProfileCell::Absent);
    Ok(())
}

#[tokio::test]
async fn test_transport_failure_is_absent() -> Result<()> {
    // 沒有服務在監聽的埠
    let config = SiteConfig {
        api_base_url: "http://127.0.0.1:9".to_string(),
        timeout_seconds: 2,
        ..Default::default()
    };

    let app = booted_app(&config).await?;
    assert_eq!(app.profile(), &ProfileCell::Absent);
    Ok(())
}

#[tokio::test]
async fn test_pending_fetch_shows_loading_indefinitely() {
    let mut app = HeadlessApp::headless(&SiteConfig::default());
    app.start(Arc::new(NeverResolves));

    app.dispatch(Action::OpenModal);
    tokio::task::yield_now().await;
    app.advance(Duration::from_secs(3600));
    assert_eq!(app.pump_events(), 0);

    let cell = app.settle_profile(Duration::from_millis(50)).await;
    assert_eq!(cell, &ProfileCell::Pending);
    assert_eq!(app.modal_state(), ModalState::OpenLoading);
    assert_eq!(app.snapshot().modal, ModalView::Loading);
    assert!(!app.render().contains("data-counter="));
}

#[tokio::test]
async fn test_profile_arriving_while_open_loads_modal() {
    let release = Arc::new(Notify::new());
    let mut app = HeadlessApp::headless(&SiteConfig::default());
    app.start(Arc::new(Gated {
        release: release.clone(),
        profile: ProfileData {
            login: "late".to_string(),
            ..Default::default()
        },
    }));

    app.dispatch(Action::OpenModal);
    assert_eq!(app.modal_state(), ModalState::OpenLoading);

    release.notify_one();
    let event = app.next_event().await.expect("profile event");
    app.apply_event(event);
    assert_eq!(app.modal_state(), ModalState::OpenLoaded);
}

#[tokio::test]
async fn test_profile_arriving_while_closed_is_absorbed() {
    let release = Arc::new(Notify::new());
    let mut app = HeadlessApp::headless(&SiteConfig::default());
    app.start(Arc::new(Gated {
        release: release.clone(),
        profile: ProfileData {
            login: "quiet".to_string(),
            ..Default::default()
        },
    }));

    release.notify_one();
    app.settle_profile(Duration::from_secs(5)).await;
    assert_eq!(app.modal_state(), ModalState::Closed);
    assert!(app.render().find("modal-backdrop").is_none());

    app.dispatch(Action::OpenModal);
    assert_eq!(app.modal_state(), ModalState::OpenLoaded);
}

#[tokio::test]
async fn test_profile_fetched_only_once() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/users/github-john-doe");
        then.status(200).json_body(serde_json::json!({ "login": "github-john-doe" }));
    });

    let config = config_for(&server);
    let mut app = booted_app(&config).await?;
    let again = GithubProfileClient::new(&config)?;
    assert!(app.start(Arc::new(again)).is_none());

    app.dispatch(Action::OpenModal);
    app.dispatch(Action::CloseModal);
    app.dispatch(Action::OpenModal);
    api_mock.assert_hits(1);
    Ok(())
}

#[tokio::test]
async fn test_clicks_inside_and_outside_modal() {
    let mut app = HeadlessApp::headless(&SiteConfig::default());
    app.dispatch(Action::OpenModal);

    assert!(!app.dispatch(Action::ModalClick(ModalClick::Content)));
    assert_eq!(app.modal_state(), ModalState::OpenLoading);

    assert!(app.dispatch(Action::ModalClick(ModalClick::Backdrop)));
    assert_eq!(app.modal_state(), ModalState::Closed);

    app.dispatch(Action::OpenModal);
    assert!(app.dispatch(Action::ModalClick(ModalClick::CloseButton)));
    assert_eq!(app.modal_state(), ModalState::Closed);
}
