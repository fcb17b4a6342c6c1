use std::collections::HashMap;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reveal::RevealTiming;

pub static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(SiteContent::load);

pub const ALL_PROJECTS: &str = "all";

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file {0} not found")]
    Missing(String),
    #[error("Couldn't parse {name}: {message}")]
    Parse { name: String, message: String },
    #[error("Invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub label: String,
    pub value: String,
    pub link: Option<String>,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
    pub info: Vec<ContactInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub title: String,
    pub summary: String,
    pub badge: String,
    pub cv_path: String,
    pub socials: Vec<SocialLink>,
    pub about: About,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub impact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub duration: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceContent {
    pub position: Position,
    pub education: Education,
    pub summary: Vec<Highlight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub icon: String,
    pub features: Vec<String>,
    pub impact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFilter {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsContent {
    pub filters: Vec<ProjectFilter>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsContent {
    pub categories: Vec<SkillCategory>,
    pub competencies: Vec<Highlight>,
}

fn default_threshold() -> f64 {
    0.1
}

/// Reveal tuning for the whole page.
///
/// A section override replaces the page timing entirely; fields it omits take the
/// built-in defaults rather than the page values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub reveal: RevealTiming,
    #[serde(default)]
    pub sections: HashMap<String, RevealTiming>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            reveal: RevealTiming::default(),
            sections: HashMap::new(),
        }
    }
}

impl SiteConfig {
    pub fn timing_for(&self, section_id: &str) -> RevealTiming {
        self.sections
            .get(section_id)
            .copied()
            .unwrap_or(self.reveal)
    }
}

#[derive(Debug, Clone)]
pub struct SiteContent {
    pub site: SiteConfig,
    pub profile: Profile,
    pub experience: ExperienceContent,
    pub projects: ProjectsContent,
    pub skills: SkillsContent,
}

fn load<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::Parse {
        name: name.to_string(),
        message: e.to_string(),
    })
}

impl SiteContent {
    fn load() -> Result<Self, ContentError> {
        let content = Self {
            site: load("site.json")?,
            profile: load("profile.json")?,
            experience: load("experience.json")?,
            projects: load("projects.json")?,
            skills: load("skills.json")?,
        };
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if !(0.0..=1.0).contains(&self.site.threshold) {
            return Err(ContentError::Invalid(format!(
                "threshold {} is not a fraction",
                self.site.threshold
            )));
        }
        for skill in self.skills.categories.iter().flat_map(|c| &c.skills) {
            if skill.level > 100 {
                return Err(ContentError::Invalid(format!(
                    "skill {} has level {} above 100",
                    skill.name, skill.level
                )));
            }
        }
        for project in &self.projects.projects {
            if !self.projects.filters.iter().any(|f| f.id == project.category) {
                return Err(ContentError::Invalid(format!(
                    "project {} has unknown category {}",
                    project.title, project.category
                )));
            }
        }
        Ok(())
    }
}

pub fn site_content() -> Result<&'static SiteContent, ContentError> {
    SITE_CONTENT.as_ref().map_err(Clone::clone)
}

/// Projects shown under `filter`; [`ALL_PROJECTS`] keeps everything.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| filter == ALL_PROJECTS || p.category == filter)
        .collect()
}
