use crate::utils::error::SiteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 網站的五個頁面；任何時刻恰有一個為目前頁面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    #[default]
    Home,
    Services,
    Portfolio,
    Contact,
    Legal,
}

impl PageId {
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::Services,
        PageId::Portfolio,
        PageId::Contact,
        PageId::Legal,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Services => "services",
            PageId::Portfolio => "portfolio",
            PageId::Contact => "contact",
            PageId::Legal => "legal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageId::Home => "Accueil",
            PageId::Services => "Services",
            PageId::Portfolio => "Réalisations",
            PageId::Contact => "Me contacter",
            PageId::Legal => "Mentions légales",
        }
    }

    /// 出現在頁首選單的頁面（法律聲明只在頁尾）
    pub fn in_header(self) -> bool {
        !matches!(self, PageId::Legal)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PageId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SiteError::UnknownPage {
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    /// 表單中的欄位順序
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Votre nom",
            ContactField::Email => "Votre adresse email",
            ContactField::Phone => "Votre numéro de téléphone",
            ContactField::Subject => "Sujet",
            ContactField::Message => "Votre message",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Phone => "tel",
            _ => "text",
        }
    }
}

impl FromStr for ContactField {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SiteError::UnknownInput {
                kind: "contact field",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub text: String,
}

impl Alert {
    pub const MISSING_FIELDS: &'static str = "Veuillez remplir tous les champs obligatoires.";
    pub const INVALID_EMAIL: &'static str = "Veuillez entrer une adresse email valide.";
    pub const SENT: &'static str = "Votre message a été envoyé avec succès !";

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Failure,
            text: text.into(),
        }
    }
}

/// GitHub `/users/{login}` 回應中網站用得到的欄位，全部可缺
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileData {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub public_repos: Option<u64>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub html_url: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ProfileData {
    pub fn display_name(&self) -> &str {
        non_empty(&self.name).unwrap_or(self.login.as_str())
    }

    pub fn bio(&self) -> Option<&str> {
        non_empty(&self.bio)
    }

    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    pub fn company(&self) -> Option<&str> {
        non_empty(&self.company)
    }

    pub fn blog(&self) -> Option<&str> {
        non_empty(&self.blog)
    }

    pub fn repositories(&self) -> u64 {
        self.public_repos.unwrap_or(0)
    }

    pub fn followers(&self) -> u64 {
        self.followers.unwrap_or(0)
    }

    pub fn following(&self) -> u64 {
        self.following.unwrap_or(0)
    }
}

/// 個人檔案讀取結果；一旦離開 `Pending` 就不再改變
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProfileCell {
    #[default]
    Pending,
    Present(ProfileData),
    Absent,
}

impl ProfileCell {
    pub fn profile(&self) -> Option<&ProfileData> {
        match self {
            ProfileCell::Present(profile) => Some(profile),
            ProfileCell::Pending | ProfileCell::Absent => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, ProfileCell::Pending)
    }
}
