use crate::core::contact::ContactForm;
use crate::core::content::{self, LegalSection};
use crate::core::modal::{ModalView, ProfileCard};
use crate::domain::model::{AlertKind, ContactField, PageId};
use crate::domain::ports::DocumentHead;
use std::borrow::Cow;

/// 首頁技能條：掛載後短暫延遲才顯示實際寬度
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeView {
    skills_visible: bool,
}

impl HomeView {
    pub fn skills_visible(&self) -> bool {
        self.skills_visible
    }

    pub fn reveal_skills(&mut self) {
        self.skills_visible = true;
    }
}

/// 法律聲明手風琴，最多展開一節
#[derive(Debug, Clone, Copy)]
pub struct LegalAccordion {
    open: Option<LegalSection>,
}

impl Default for LegalAccordion {
    fn default() -> Self {
        Self {
            open: Some(LegalSection::Editor),
        }
    }
}

impl LegalAccordion {
    pub fn open_section(&self) -> Option<LegalSection> {
        self.open
    }

    pub fn toggle(&mut self, section: LegalSection) {
        self.open = if self.open == Some(section) {
            None
        } else {
            Some(section)
        };
    }
}

/// 目前掛載的頁面及其頁面內狀態；離開頁面即捨棄
#[derive(Debug, Clone)]
pub enum PageView {
    Home(HomeView),
    Services,
    Portfolio,
    Contact(ContactForm),
    Legal(LegalAccordion),
}

impl PageView {
    pub fn mount(page: PageId) -> Self {
        match page {
            PageId::Home => PageView::Home(HomeView::default()),
            PageId::Services => PageView::Services,
            PageId::Portfolio => PageView::Portfolio,
            PageId::Contact => PageView::Contact(ContactForm::new()),
            PageId::Legal => PageView::Legal(LegalAccordion::default()),
        }
    }

    pub fn page(&self) -> PageId {
        match self {
            PageView::Home(_) => PageId::Home,
            PageView::Services => PageId::Services,
            PageView::Portfolio => PageId::Portfolio,
            PageView::Contact(_) => PageId::Contact,
            PageView::Legal(_) => PageId::Legal,
        }
    }
}

/// 渲染所需的唯讀快照
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub view: &'a PageView,
    pub menu_open: bool,
    pub modal: ModalView<'a>,
}

pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

pub fn render_document<H: DocumentHead + ?Sized>(head: &H, snapshot: &Snapshot<'_>) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n",
    );
    for (name, value) in head.meta_entries() {
        html.push_str(&format!(
            "<meta name=\"{}\" content=\"{}\">\n",
            escape(name),
            escape(value)
        ));
    }
    html.push_str(&format!("<title>{}</title>\n</head>\n<body>\n", content::OWNER_NAME));
    html.push_str(&render_body(snapshot));
    html.push_str("</body>\n</html>\n");
    html
}

pub fn render_body(snapshot: &Snapshot<'_>) -> String {
    let mut html = render_header(snapshot.view.page(), snapshot.menu_open);
    html.push_str("<main>\n");
    html.push_str(&render_main(snapshot.view));
    html.push_str("</main>\n");
    html.push_str(&render_footer());
    html.push_str(&render_modal(&snapshot.modal));
    html
}

/// 唯一的頁面分派點：恰好渲染一個頁面
pub fn render_main(view: &PageView) -> String {
    match view {
        PageView::Home(home) => render_home(home),
        PageView::Services => render_services(),
        PageView::Portfolio => render_portfolio(),
        PageView::Contact(form) => render_contact(form),
        PageView::Legal(accordion) => render_legal(accordion),
    }
}

fn nav_items(current: PageId, class: &str) -> String {
    let mut html = String::new();
    for page in PageId::ALL.into_iter().filter(|p| p.in_header()) {
        let (emphasis, current_attr) = if page == current {
            (" font-bold underline", " aria-current=\"page\"")
        } else {
            ("", "")
        };
        html.push_str(&format!(
            "<li><button class=\"{}{}\"{} data-nav=\"{}\">{}</button></li>\n",
            class,
            emphasis,
            current_attr,
            page.slug(),
            page.label()
        ));
    }
    html
}

pub fn render_header(current: PageId, menu_open: bool) -> String {
    let mut html = String::from("<header class=\"site-header\">\n<nav>\n");
    html.push_str("<button class=\"logo\" data-nav=\"home\">JOHN DOE</button>\n");
    html.push_str("<ul class=\"menu-desktop\">\n");
    html.push_str(&nav_items(current, "uppercase"));
    html.push_str("</ul>\n");
    html.push_str(
        "<button class=\"burger\" data-action=\"toggle-menu\" aria-label=\"Toggle menu\"></button>\n",
    );
    if menu_open {
        html.push_str("<ul class=\"menu-mobile\">\n");
        html.push_str(&nav_items(current, "block uppercase"));
        html.push_str("</ul>\n");
    }
    html.push_str("</nav>\n</header>\n");
    html
}

fn render_home(home: &HomeView) -> String {
    let mut html = String::from("<section data-page=\"home\">\n");
    html.push_str(&format!(
        "<div class=\"hero\" style=\"background-image: url('{}')\">\n<h1>Bonjour, je suis {}</h1>\n<h2>{}</h2>\n",
        content::HERO_IMAGE,
        content::OWNER_NAME,
        content::OWNER_TITLE
    ));
    html.push_str("<button data-action=\"open-modal\">En savoir plus</button>\n</div>\n");

    html.push_str("<div class=\"about\">\n<h3>À propos</h3>\n");
    for paragraph in content::ABOUT_PARAGRAPHS {
        html.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
    }
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\">\n</div>\n",
        content::PORTRAIT_IMAGE,
        content::OWNER_NAME
    ));

    html.push_str("<div class=\"skills\">\n<h3>Mes compétences</h3>\n");
    for skill in content::SKILLS {
        let width = if home.skills_visible() { skill.level } else { 0 };
        html.push_str(&format!(
            "<div class=\"skill\" data-skill=\"{}\"><span>{}</span><span>{}%</span><div class=\"bar {}\" style=\"width: {}%\"></div></div>\n",
            skill.name, skill.name, skill.level, skill.color, width
        ));
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn render_services() -> String {
    let mut html = String::from(
        "<section data-page=\"services\">\n<h2>MON OFFRE DE SERVICES</h2>\n",
    );
    html.push_str("<p>Voici les prestations sur lesquelles je peux intervenir.</p>\n");
    for service in content::SERVICES {
        html.push_str(&format!(
            "<div class=\"card\"><h5>{}</h5><p>{}</p></div>\n",
            escape(service.title),
            escape(service.description)
        ));
    }
    html.push_str("</section>\n");
    html
}

fn render_portfolio() -> String {
    let mut html = String::from("<section data-page=\"portfolio\">\n<h2>PORTFOLIO</h2>\n");
    html.push_str("<p>Voici quelques-unes de mes réalisations.</p>\n");
    for project in content::PROJECTS {
        html.push_str(&format!(
            "<div class=\"card\"><img src=\"{}\" alt=\"{}\"><h5>{}</h5><p>{}</p><button>Voir</button><small>{}</small></div>\n",
            project.image,
            escape(project.title),
            escape(project.title),
            escape(project.description),
            escape(project.tech)
        ));
    }
    html.push_str("</section>\n");
    html
}

fn render_contact(form: &ContactForm) -> String {
    let mut html = String::from("<section data-page=\"contact\">\n<h2>ME CONTACTER</h2>\n");
    html.push_str(
        "<p>Pour me contacter en vue d'un entretien ou d'une future collaboration, merci de remplir le formulaire de contact.</p>\n",
    );

    html.push_str("<h3>Formulaire de contact</h3>\n<form data-action=\"submit-contact\">\n");
    for field in ContactField::ALL {
        let value = escape(form.draft().get(field));
        match field {
            ContactField::Message => html.push_str(&format!(
                "<textarea name=\"{}\" placeholder=\"{}\" rows=\"5\" required>{}</textarea>\n",
                field.key(),
                escape(field.placeholder()),
                value
            )),
            _ => html.push_str(&format!(
                "<input type=\"{}\" name=\"{}\" placeholder=\"{}\" value=\"{}\" required>\n",
                field.input_type(),
                field.key(),
                escape(field.placeholder()),
                value
            )),
        }
    }
    html.push_str("<button type=\"submit\">Envoyer</button>\n</form>\n");

    if let Some(alert) = form.alert() {
        let class = match alert.kind {
            AlertKind::Success => "alert-success",
            AlertKind::Failure => "alert-danger",
        };
        html.push_str(&format!(
            "<div class=\"alert {}\" role=\"alert\">{}</div>\n",
            class,
            escape(&alert.text)
        ));
    }

    html.push_str("<h3>Mes coordonnées</h3>\n");
    html.push_str(&format!(
        "<p><strong>Adresse :</strong><br>{}, {}</p>\n<p><strong>Téléphone :</strong> {}</p>\n<p><strong>Email :</strong> {}</p>\n",
        content::STREET,
        content::CITY,
        content::PHONE,
        content::EMAIL
    ));
    html.push_str(&format!(
        "<iframe src=\"{}\" width=\"100%\" height=\"300\" loading=\"lazy\" title=\"Google Maps - Localisation {}\"></iframe>\n",
        escape(content::MAP_EMBED_URL),
        content::OWNER_NAME
    ));
    html.push_str("</section>\n");
    html
}

fn render_legal(accordion: &LegalAccordion) -> String {
    let mut html = String::from("<section data-page=\"legal\">\n<h2>MENTIONS LÉGALES</h2>\n");
    for section in LegalSection::ALL {
        let open = accordion.open_section() == Some(section);
        html.push_str(&format!(
            "<div class=\"accordion-item\"><button data-section=\"{}\" aria-expanded=\"{}\">{}</button>",
            section.id(),
            open,
            escape(section.title())
        ));
        if open {
            html.push_str(&format!(
                "<div class=\"accordion-body\">{}</div>",
                section.body_html()
            ));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");
    html
}

pub fn render_footer() -> String {
    let mut html = String::from("<footer class=\"site-footer\">\n");
    html.push_str(&format!(
        "<div><h5>{}</h5><p>{}<br>{}<br>Téléphone : {}</p>\n",
        content::OWNER_NAME,
        content::STREET,
        content::CITY,
        content::PHONE
    ));
    for (label, href) in content::SOCIAL_LINKS {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener nofollow\" aria-label=\"{}\">{}</a>\n",
            href, label, label
        ));
    }
    html.push_str("</div>\n<div><h5>Liens utiles</h5>\n<ul>\n");
    for page in PageId::ALL {
        html.push_str(&format!(
            "<li><button data-nav=\"{}\">{}</button></li>\n",
            page.slug(),
            page.label()
        ));
    }
    html.push_str("</ul>\n</div>\n<div><h5>Mes dernières réalisations</h5>\n<ul>\n");
    for project in content::FOOTER_PROJECTS {
        html.push_str(&format!(
            "<li><button data-nav=\"{}\">{}</button></li>\n",
            PageId::Portfolio.slug(),
            escape(project)
        ));
    }
    html.push_str(&format!(
        "</ul>\n</div>\n<p>© Designed by {}</p>\n</footer>\n",
        content::OWNER_NAME
    ));
    html
}

pub fn render_modal(modal: &ModalView<'_>) -> String {
    let card = match modal {
        ModalView::Hidden => return String::new(),
        ModalView::Loading => {
            return String::from(concat!(
                "<div class=\"modal-backdrop\" data-click=\"backdrop\">\n",
                "<div class=\"modal-content\" data-click=\"content\">\n",
                "<div class=\"spinner\"></div>\n",
                "<p>Chargement des informations GitHub...</p>\n",
                "</div>\n</div>\n"
            ))
        }
        ModalView::Loaded(card) => card,
    };
    render_profile_card(card)
}

fn render_profile_card(card: &ProfileCard<'_>) -> String {
    let mut html = String::from(concat!(
        "<div class=\"modal-backdrop\" data-click=\"backdrop\">\n",
        "<div class=\"modal-content\" data-click=\"content\">\n",
        "<div class=\"modal-header\"><h5>Profil GitHub</h5>",
        "<button data-click=\"close\" aria-label=\"Fermer\">&times;</button></div>\n"
    ));

    if let Some(avatar) = card.avatar_url {
        html.push_str(&format!(
            "<img class=\"avatar\" src=\"{}\" alt=\"{}\">\n",
            escape(avatar),
            escape(card.display_name)
        ));
    }
    html.push_str(&format!(
        "<h3 data-field=\"display-name\">{}</h3>\n<p data-field=\"login\">@{}</p>\n",
        escape(card.display_name),
        escape(card.login)
    ));
    if let Some(bio) = card.bio {
        html.push_str(&format!("<p data-row=\"bio\">{}</p>\n", escape(bio)));
    }

    html.push_str("<div class=\"stats\">\n");
    for (label, value) in card.counters() {
        html.push_str(&format!(
            "<div data-counter=\"{}\"><div class=\"count\">{}</div><div>{}</div></div>\n",
            label.to_lowercase(),
            value,
            label
        ));
    }
    html.push_str("</div>\n");

    if let Some(location) = card.location {
        html.push_str(&format!("<div data-row=\"location\">{}</div>\n", escape(location)));
    }
    if let Some(blog) = card.blog {
        html.push_str(&format!(
            "<div data-row=\"blog\"><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></div>\n",
            escape(blog),
            escape(blog)
        ));
    }
    if let Some(company) = card.company {
        html.push_str(&format!("<div data-row=\"company\">{}</div>\n", escape(company)));
    }

    if let Some(url) = card.profile_url {
        html.push_str(&format!(
            "<a class=\"profile-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">Voir le profil GitHub</a>\n",
            escape(url)
        ));
    }
    html.push_str(
        "<div class=\"modal-footer\"><button data-click=\"close\">Fermer</button></div>\n",
    );
    html.push_str("</div>\n</div>\n");
    html
}
