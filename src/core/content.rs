//! Static copy shown by the views. Pure data, no behaviour.

pub const OWNER_NAME: &str = "John Doe";
pub const OWNER_TITLE: &str = "Développeur web full stack";
pub const STREET: &str = "40 Rue Laure Diebold";
pub const CITY: &str = "69009 Lyon, France";
pub const PHONE: &str = "06 20 30 40 50";
pub const EMAIL: &str = "john.doe@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/github-john-doe";

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=1920";
pub const PORTRAIT_IMAGE: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=600";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2782.626965754607!2d4.796403976617905!3d45.778661471072626!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x47f4eb65edac5b3f%3A0xe01c47049cb2e2b9!2s40%20Rue%20Laure%20Diebold%2C%2069009%20Lyon!5e0!3m2!1sfr!2sfr!4v1645180449739!5m2!1sfr!2sfr";

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Passionné par l'informatique et les nouvelles technologies, j'ai suivi une formation d'intégrateur-développeur web au CEF. Au cours de cette formation, j'ai pu acquérir des bases solides pour travailler dans le domaine du développement web.",
    "Basé à Lyon, je suis en recherche d'une alternance au sein d'une agence digitale pour consolider ma formation de développeur web full stack.",
    "J'accorde une attention particulière à la qualité du code que j'écris et je respecte les bonnes pratiques du web.",
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub color: &'static str,
}

pub const SKILLS: [Skill; 5] = [
    Skill {
        name: "HTML5",
        level: 90,
        color: "bg-red-500",
    },
    Skill {
        name: "CSS3",
        level: 80,
        color: "bg-blue-400",
    },
    Skill {
        name: "JAVASCRIPT",
        level: 70,
        color: "bg-yellow-500",
    },
    Skill {
        name: "PHP",
        level: 60,
        color: "bg-green-500",
    },
    Skill {
        name: "REACT",
        level: 50,
        color: "bg-blue-500",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "UX / UI DESIGN",
        description: "L'UX Design et l'UI Design représentent en réalité un tout qu'il faut savoir maîtriser et équilibrer.",
    },
    Service {
        title: "DÉVELOPPEMENT WEB",
        description: "Le développement de sites web repose sur l'utilisation des langages HTML, CSS, JavaScript et PHP.",
    },
    Service {
        title: "RÉFÉRENCEMENT",
        description: "Le référencement naturel d'un site, aussi appelé SEO, consiste à mettre des techniques en œuvre pour améliorer sa position dans les résultats des moteurs de recherche.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static str,
    pub image: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Fresh Food",
        description: "Réalisation d'un site avec commande en ligne.",
        tech: "Site réalisé avec PHP et MySQL",
        image: "https://images.unsplash.com/photo-1498837167922-ddd27525d352?w=500",
    },
    Project {
        title: "Restaurant Akira",
        description: "Réalisation d'un site vitrine.",
        tech: "Site réalisé avec WordPress",
        image: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=500",
    },
    Project {
        title: "Espace bien-être",
        description: "Réalisation d'un site vitrine pour un praticien de bien-être.",
        tech: "Site réalisé en HTML/CSS",
        image: "https://images.unsplash.com/photo-1540555700478-4be289fbecef?w=500",
    },
    Project {
        title: "SEO",
        description: "Réalisation d'un site vitrine pour une agence SEO.",
        tech: "Site réalisé avec Laravel",
        image: "https://images.unsplash.com/photo-1432888498266-38ffec3eaf0a?w=500",
    },
    Project {
        title: "Coder",
        description: "Création d'une application web pour apprendre à coder.",
        tech: "Application réalisée en React",
        image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=500",
    },
    Project {
        title: "Maquette",
        description: "Réalisation d'une maquette pour un client.",
        tech: "Maquette réalisée avec Photoshop",
        image: "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d?w=500",
    },
];

/// Projects listed in the footer; each links to the portfolio page.
pub const FOOTER_PROJECTS: [&str; 3] = ["Fresh Food", "Restaurant Akira", "Espace bien-être"];

pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", GITHUB_URL),
    ("Twitter", "https://twitter.com"),
    ("LinkedIn", "https://linkedin.com"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegalSection {
    Editor,
    Host,
    Credits,
}

impl LegalSection {
    pub const ALL: [LegalSection; 3] = [
        LegalSection::Editor,
        LegalSection::Host,
        LegalSection::Credits,
    ];

    pub fn id(self) -> &'static str {
        match self {
            LegalSection::Editor => "editor",
            LegalSection::Host => "host",
            LegalSection::Credits => "credits",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LegalSection::Editor => "Éditeur du site",
            LegalSection::Host => "Hébergeur",
            LegalSection::Credits => "Crédits",
        }
    }

    /// Trusted markup, inserted without escaping.
    pub fn body_html(self) -> &'static str {
        match self {
            LegalSection::Editor => concat!(
                "<strong>John Doe</strong><br/>",
                "40 Rue Laure Diebold<br/>",
                "69009 Lyon, France<br/>",
                "Téléphone : 06 20 30 40 50<br/>",
                "Email : john.doe@gmail.com"
            ),
            LegalSection::Host => concat!(
                "<strong>Always Data</strong><br/>",
                "91 rue du Faubourg Saint Honoré<br/>",
                "75008 Paris<br/>",
                "<a href=\"https://www.alwaysdata.com\" target=\"_blank\" rel=\"noopener\">www.alwaysdata.com</a>"
            ),
            LegalSection::Credits => concat!(
                "<strong>Images :</strong><br/>",
                "Les images libres de droit sont issues du site ",
                "<a href=\"https://pixabay.com\" target=\"_blank\" rel=\"noopener\">Pixabay</a>.<br/><br/>",
                "<strong>Favicon :</strong><br/>",
                "<a href=\"https://www.flaticon.com/free-icons/john-doe\" target=\"_blank\" rel=\"noopener\">",
                "John doe icons created by Freepik - Flaticon</a>"
            ),
        }
    }
}

impl std::str::FromStr for LegalSection {
    type Err = crate::utils::error::SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LegalSection::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::utils::error::SiteError::UnknownInput {
                kind: "legal section",
                value: s.to_string(),
            })
    }
}
