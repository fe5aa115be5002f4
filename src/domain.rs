use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        SectionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
}

impl ProjectRecord {
    pub fn category_key(&self) -> CategoryKey {
        CategoryKey::from_raw(self.category.as_deref())
    }

    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// Splits the technology list into the leading `max_shown` entries and the
    /// number of entries left out.
    pub fn technology_preview(&self, max_shown: usize) -> (&[String], usize) {
        let shown = self.technologies.len().min(max_shown);
        (
            &self.technologies[..shown],
            self.technologies.len() - shown,
        )
    }

    pub fn github_link(&self) -> Option<&str> {
        present(self.github_url.as_deref())
    }

    pub fn demo_link(&self) -> Option<&str> {
        present(self.demo_url.as_deref())
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Filter bucket a project belongs to. Blank or missing categories share the
/// `Uncategorized` bucket.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum CategoryKey {
    Named(String),
    Uncategorized,
}

impl CategoryKey {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if !value.trim().is_empty() => CategoryKey::Named(value.to_string()),
            _ => CategoryKey::Uncategorized,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryKey::Named(name) => name,
            CategoryKey::Uncategorized => "Otros",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryKey),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "Todos",
            CategoryFilter::Only(key) => key.label(),
        }
    }

    pub fn matches(&self, project: &ProjectRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(key) => project.category_key() == *key,
        }
    }

    /// Resolves user input against the filter options of a collection.
    pub fn resolve(input: &str, options: &[CategoryFilter]) -> Result<CategoryFilter> {
        let wanted = input.trim();
        if wanted.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }

        let mut matching = options
            .iter()
            .filter(|option| option.label().to_lowercase() == wanted.to_lowercase());
        match (matching.next(), matching.next()) {
            (Some(option), None) => Ok(option.clone()),
            (Some(_), Some(_)) => Err(FolioError::AmbiguousCategory(wanted.to_string())),
            (None, _) => Err(FolioError::UnknownCategory(wanted.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_path: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
        SkillCategory::Other,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Herramientas",
            SkillCategory::Other => "Otros",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    pub years_of_experience: u32,
    pub completed_projects: u32,
    #[serde(default = "default_true")]
    pub show_stats: bool,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl About {
    /// Skills grouped in display order; empty groups are left out.
    pub fn grouped_skills(&self) -> Vec<(SkillCategory, Vec<&Skill>)> {
        SkillCategory::ALL
            .iter()
            .map(|&category| {
                let skills = self
                    .skills
                    .iter()
                    .filter(|skill| skill.category == category)
                    .collect::<Vec<_>>();
                (category, skills)
            })
            .filter(|(_, skills)| !skills.is_empty())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Custom,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub key: SectionId,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsSection {
    pub title: String,
    pub description: String,
    #[serde(default = "default_true")]
    pub show_filters: bool,
    #[serde(default = "default_true")]
    pub show_load_more: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub blurb: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_year: Option<i32>,
    #[serde(default = "default_true")]
    pub show_contact_section: bool,
}

impl Footer {
    pub fn copyright_line(&self, owner: &str, year: i32) -> String {
        match &self.copyright {
            Some(text) => text.clone(),
            None => format!(
                "© {} {}. Todos los derechos reservados.",
                self.current_year.unwrap_or(year),
                owner
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub profile: Profile,
    pub nav_items: Vec<NavItem>,
    pub projects_section: ProjectsSection,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    pub about: About,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    pub footer: Footer,
}

impl Portfolio {
    pub fn validate(&self) -> Result<()> {
        ensure_unique_ids(&self.projects)?;
        ensure_category_names_allowed(&self.projects)
    }
}

pub fn ensure_unique_ids(projects: &[ProjectRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for project in projects {
        if !seen.insert(project.id.as_str()) {
            return Err(FolioError::DuplicateProjectId(project.id.clone()));
        }
    }
    Ok(())
}

/// Named categories must not read like the all filter or the uncategorized
/// bucket, or the two could not be told apart in the tabs.
pub fn ensure_category_names_allowed(projects: &[ProjectRecord]) -> Result<()> {
    let reserved = [
        CategoryFilter::All.label().to_lowercase(),
        CategoryKey::Uncategorized.label().to_lowercase(),
        "all".to_string(),
    ];
    for project in projects {
        if let CategoryKey::Named(name) = project.category_key()
            && reserved.contains(&name.trim().to_lowercase())
        {
            return Err(FolioError::ReservedCategory(name));
        }
    }
    Ok(())
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
pub(crate) fn project(id: &str, category: Option<&str>) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: format!("Project {}", id),
        description: format!("Description for {}", id),
        technologies: Vec::new(),
        category: category.map(ToString::to_string),
        github_url: None,
        demo_url: None,
        image_url: None,
        featured: None,
        completed_date: None,
    }
}
