use bevy::prelude::*;
use constants::api::{CERTIFICATIONS_PATH, PROJECTS_PATH, WORK_HISTORY_PATH};
use serde::{Deserialize, Serialize};

use super::error::FetchError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHistoryItem {
    pub id: String,
    pub company_name: String,
    pub role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: i64,
    pub name: String,
    pub issuer: String,
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// The three remote lists, one per card row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Projects,
    WorkHistory,
    Certifications,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [
        ContentKind::Projects,
        ContentKind::WorkHistory,
        ContentKind::Certifications,
    ];

    pub fn path(self) -> &'static str {
        match self {
            ContentKind::Projects => PROJECTS_PATH,
            ContentKind::WorkHistory => WORK_HISTORY_PATH,
            ContentKind::Certifications => CERTIFICATIONS_PATH,
        }
    }

    /// Lower-case name used in "Fetching ..." and error log lines.
    pub fn log_name(self) -> &'static str {
        match self {
            ContentKind::Projects => "projects",
            ContentKind::WorkHistory => "work history",
            ContentKind::Certifications => "certifications",
        }
    }

    /// Title-case name used in success log lines and row headers.
    pub fn title(self) -> &'static str {
        match self {
            ContentKind::Projects => "Projects",
            ContentKind::WorkHistory => "Work History",
            ContentKind::Certifications => "Certifications",
        }
    }

    /// Singular name used in "Opening <Type> link" log lines.
    pub fn link_type(self) -> &'static str {
        match self {
            ContentKind::Projects => "Project",
            ContentKind::WorkHistory => "Work History",
            ContentKind::Certifications => "Certification",
        }
    }
}

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentList {
    Projects(Vec<Project>),
    WorkHistory(Vec<WorkHistoryItem>),
    Certifications(Vec<Certification>),
}

impl ContentList {
    pub fn decode(kind: ContentKind, body: &str) -> Result<Self, FetchError> {
        Ok(match kind {
            ContentKind::Projects => ContentList::Projects(serde_json::from_str(body)?),
            ContentKind::WorkHistory => ContentList::WorkHistory(serde_json::from_str(body)?),
            ContentKind::Certifications => {
                ContentList::Certifications(serde_json::from_str(body)?)
            }
        })
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            ContentList::Projects(_) => ContentKind::Projects,
            ContentList::WorkHistory(_) => ContentKind::WorkHistory,
            ContentList::Certifications(_) => ContentKind::Certifications,
        }
    }
}

/// Most recent successfully fetched lists. Empty until the first success.
#[derive(Resource, Debug, Default, Clone)]
pub struct PortfolioContent {
    pub projects: Vec<Project>,
    pub work_history: Vec<WorkHistoryItem>,
    pub certifications: Vec<Certification>,
}

impl PortfolioContent {
    /// Replace one list wholesale; the other two are untouched.
    pub fn replace(&mut self, list: ContentList) {
        match list {
            ContentList::Projects(projects) => self.projects = projects,
            ContentList::WorkHistory(items) => self.work_history = items,
            ContentList::Certifications(certifications) => self.certifications = certifications,
        }
    }

    pub fn len(&self, kind: ContentKind) -> usize {
        match kind {
            ContentKind::Projects => self.projects.len(),
            ContentKind::WorkHistory => self.work_history.len(),
            ContentKind::Certifications => self.certifications.len(),
        }
    }
}
