use portfolio_site::core::navigator::{ROBOTS_META, ROBOTS_NOINDEX};
use portfolio_site::core::views::PageView;
use portfolio_site::core::PageId;
use portfolio_site::domain::ports::ScrollBehavior;
use portfolio_site::{Action, HeadlessApp, SiteConfig};

fn app() -> HeadlessApp {
    HeadlessApp::headless(&SiteConfig::default())
}

#[test]
fn test_each_page_shows_exactly_one_view() {
    let mut app = app();

    for page in PageId::ALL {
        app.dispatch(Action::Navigate(page));
        assert_eq!(app.current_page(), page);
        assert_eq!(app.view().page(), page);

        let html = app.render();
        assert_eq!(html.matches("data-page=").count(), 1, "page {}", page);
        assert!(html.contains(&format!("<section data-page=\"{}\">", page.slug())));
        for other in PageId::ALL.into_iter().filter(|p| *p != page) {
            assert!(!html.contains(&format!("data-page=\"{}\"", other.slug())));
        }
    }
}

#[test]
fn test_legal_page_toggles_robots_meta() {
    let mut app = app();
    assert_eq!(app.head().count(ROBOTS_META), 0);

    app.dispatch(Action::Navigate(PageId::Legal));
    assert_eq!(app.head().count(ROBOTS_META), 1);
    assert_eq!(app.head().content(ROBOTS_META), Some(ROBOTS_NOINDEX));
    assert!(app
        .render()
        .contains("<meta name=\"robots\" content=\"noindex, nofollow\">"));

    // 重複前往法律聲明頁不可重複加入
    app.dispatch(Action::Navigate(PageId::Legal));
    app.dispatch(Action::Navigate(PageId::Legal));
    assert_eq!(app.head().count(ROBOTS_META), 1);

    app.dispatch(Action::Navigate(PageId::Portfolio));
    assert_eq!(app.head().count(ROBOTS_META), 0);
    assert!(!app.render().contains("name=\"robots\""));

    app.dispatch(Action::Navigate(PageId::Legal));
    assert_eq!(app.head().count(ROBOTS_META), 1);
}

#[test]
fn test_navigation_closes_menu_and_scrolls_smoothly() {
    let mut app = app();

    app.dispatch(Action::ToggleMenu);
    assert!(app.menu_open());
    assert!(app.render().contains("menu-mobile"));

    app.dispatch(Action::Navigate(PageId::Contact));
    assert!(!app.menu_open());
    assert!(!app.render().contains("menu-mobile"));
    assert_eq!(app.viewport().scrolls(), &[ScrollBehavior::Smooth]);

    app.dispatch(Action::Navigate(PageId::Contact));
    assert_eq!(app.viewport().scrolls().len(), 2);
}

#[test]
fn test_footer_links_cover_every_page() {
    let app = app();
    let html = app.render();

    for page in PageId::ALL {
        assert!(html.contains(&format!("data-nav=\"{}\">{}", page.slug(), page.label())));
    }
    for project in ["Fresh Food", "Restaurant Akira", "Espace bien-être"] {
        assert!(html.contains(&format!("data-nav=\"portfolio\">{}", project)));
    }
}

#[test]
fn test_legal_accordion_resets_on_remount() {
    use portfolio_site::core::content::LegalSection;

    let mut app = app();
    app.dispatch(Action::Navigate(PageId::Legal));
    assert!(app.dispatch(Action::ToggleLegalSection(LegalSection::Credits)));
    match app.view() {
        PageView::Legal(accordion) => {
            assert_eq!(accordion.open_section(), Some(LegalSection::Credits))
        }
        other => panic!("unexpected view {:?}", other),
    }

    app.dispatch(Action::Navigate(PageId::Home));
    assert!(!app.dispatch(Action::ToggleLegalSection(LegalSection::Host)));
    app.dispatch(Action::Navigate(PageId::Legal));
    match app.view() {
        PageView::Legal(accordion) => {
            assert_eq!(accordion.open_section(), Some(LegalSection::Editor))
        }
        other => panic!("unexpected view {:?}", other),
    }
}
