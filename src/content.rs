//! Static page content: loading, shape normalization, and validation.
//!
//! Content is shipped as JSON next to the bundle and checked once at startup.
//! Both historical shapes of `skills` are accepted and folded into
//! [`SkillGroup`]s, and `description` may be a string or a list of paragraphs.

use crate::scroll_spy::SectionId;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.json");
const FLAT_SKILLS_GROUP: &str = "Technical";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content does not match the expected shape: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("required field `{0}` is empty")]
    EmptyField(String),

    #[error("required list `{0}` is empty")]
    EmptyList(&'static str),

    #[error("field `{field}` is not an absolute http(s) link: {value}")]
    InvalidLink { field: String, value: String },

    #[error("field `{0}` is not an email address")]
    InvalidEmail(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Personal {
    pub name: String,
    pub role: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub phone: String,
    pub about: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub achievements: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    pub tags: Vec<String>,
    pub description: Vec<String>,
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Education {
    pub institute: String,
    pub degree: String,
    pub year: String,
    pub gpa: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Award {
    pub title: String,
    pub organization: String,
    pub date: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioData {
    pub personal: Personal,
    pub experience: Vec<Experience>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub awards: Vec<Award>,
    pub certifications: Vec<Certification>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageBlock {
    Hero,
    Section(SectionId),
    Footer,
}

impl PageBlock {
    /// Visible marker for the block; sections use their heading.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Hero => "Hi, my name is",
            Self::Section(id) => id.heading(),
            Self::Footer => "Designed by",
        }
    }
}

#[derive(Deserialize)]
struct RawPortfolio {
    personal: Personal,
    experience: Vec<Experience>,
    skills: RawSkills,
    projects: Vec<RawProject>,
    education: Vec<Education>,
    #[serde(default)]
    awards: Vec<Award>,
    #[serde(default)]
    certifications: Vec<Certification>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSkills {
    Flat(Vec<String>),
    Categorized(RawSkillCategories),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSkillCategories {
    #[serde(default)]
    technical: Vec<Skill>,
    #[serde(default)]
    tools: Vec<Skill>,
    #[serde(default)]
    methodologies: Vec<Skill>,
}

impl RawSkills {
    fn into_groups(self) -> Vec<SkillGroup> {
        let groups: Vec<SkillGroup> = match self {
            Self::Flat(names) => {
                let skills = names
                    .into_iter()
                    .map(|name| Skill { name, icon: None })
                    .collect::<Vec<_>>();
                vec![SkillGroup {
                    title: FLAT_SKILLS_GROUP.to_string(),
                    skills,
                }]
            }
            Self::Categorized(categories) => [
                ("Technical", categories.technical),
                ("Tools", categories.tools),
                ("Methodologies", categories.methodologies),
            ]
            .into_iter()
            .map(|(title, skills)| SkillGroup {
                title: title.to_string(),
                skills,
            })
            .collect(),
        };

        groups
            .into_iter()
            .filter(|group| !group.skills.is_empty())
            .collect()
    }
}

#[derive(Deserialize)]
struct RawProject {
    title: String,
    subtitle: String,
    #[serde(default)]
    tags: Vec<String>,
    description: RawDescription,
    #[serde(default)]
    link: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDescription {
    Single(String),
    Paragraphs(Vec<String>),
}

impl RawDescription {
    fn into_paragraphs(self) -> Vec<String> {
        let paragraphs = match self {
            Self::Single(text) => vec![text],
            Self::Paragraphs(paragraphs) => paragraphs,
        };

        paragraphs
            .into_iter()
            .map(|paragraph| paragraph.trim().to_string())
            .filter(|paragraph| !paragraph.is_empty())
            .collect()
    }
}

impl PortfolioData {
    pub fn load_embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(source: &str) -> Result<Self, ContentError> {
        let raw: RawPortfolio = serde_json::from_str(source)?;

        let data = Self {
            personal: raw.personal,
            experience: raw.experience,
            skills: raw.skills.into_groups(),
            projects: raw
                .projects
                .into_iter()
                .map(|project| Project {
                    title: project.title,
                    subtitle: project.subtitle,
                    tags: project.tags,
                    description: project.description.into_paragraphs(),
                    link: project.link,
                })
                .collect(),
            education: raw.education,
            awards: raw.awards,
            certifications: raw.certifications,
        };

        data.validate()?;
        Ok(data)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let personal = &self.personal;
        require_text("personal.name", &personal.name)?;
        require_text("personal.role", &personal.role)?;
        require_text("personal.about", &personal.about)?;
        require_link("personal.github", &personal.github)?;
        require_link("personal.linkedin", &personal.linkedin)?;
        if !personal.email.trim().contains('@') {
            return Err(ContentError::InvalidEmail("personal.email".to_string()));
        }

        require_list("experience", &self.experience)?;
        require_list("skills", &self.skills)?;
        require_list("projects", &self.projects)?;
        require_list("education", &self.education)?;

        for (index, entry) in self.experience.iter().enumerate() {
            require_text(&format!("experience[{index}].company"), &entry.company)?;
            require_text(&format!("experience[{index}].role"), &entry.role)?;
        }

        for group in &self.skills {
            for (index, skill) in group.skills.iter().enumerate() {
                require_text(&format!("skills.{}[{index}].name", group.title), &skill.name)?;
            }
        }

        for (index, project) in self.projects.iter().enumerate() {
            require_text(&format!("projects[{index}].title"), &project.title)?;
            if let Some(link) = project.link.as_deref() {
                require_link(&format!("projects[{index}].link"), link)?;
            }
        }

        for (index, entry) in self.education.iter().enumerate() {
            require_text(&format!("education[{index}].institute"), &entry.institute)?;
        }

        for (index, award) in self.awards.iter().enumerate() {
            require_text(&format!("awards[{index}].title"), &award.title)?;
        }

        for (index, cert) in self.certifications.iter().enumerate() {
            require_text(&format!("certifications[{index}].title"), &cert.title)?;
            if let Some(link) = cert.link.as_deref() {
                require_link(&format!("certifications[{index}].link"), link)?;
            }
        }

        Ok(())
    }

    /// Sections with content, in page order.
    pub fn sections(&self) -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|id| match id {
                SectionId::Awards => !self.awards.is_empty(),
                SectionId::Certifications => !self.certifications.is_empty(),
                _ => true,
            })
            .collect()
    }

    pub fn page_layout(&self) -> Vec<PageBlock> {
        let mut blocks = vec![PageBlock::Hero];
        blocks.extend(self.sections().into_iter().map(PageBlock::Section));
        blocks.push(PageBlock::Footer);
        blocks
    }

    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|group| group.skills.len()).sum()
    }
}

fn require_text(field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField(field.to_string()));
    }
    Ok(())
}

fn require_list<T>(field: &'static str, values: &[T]) -> Result<(), ContentError> {
    if values.is_empty() {
        return Err(ContentError::EmptyList(field));
    }
    Ok(())
}

fn require_link(field: &str, value: &str) -> Result<(), ContentError> {
    let invalid = || ContentError::InvalidLink {
        field: field.to_string(),
        value: value.to_string(),
    };
    let parsed = Url::parse(value.trim()).map_err(|_| invalid())?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Ok(())
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> serde_json::Value {
        json!({
            "personal": {
                "name": "Ada",
                "role": "Engineer",
                "email": "ada@example.com",
                "github": "https://github.com/ada",
                "linkedin": "https://linkedin.com/in/ada",
                "phone": "+1-555-0100",
                "about": "Builds things."
            },
            "experience": [
                { "company": "Acme", "role": "SDE", "duration": "2024", "achievements": ["Shipped"] }
            ],
            "skills": ["Rust", "Go"],
            "projects": [
                { "title": "Loom", "subtitle": "Weaver", "tags": ["Rust"], "description": "Weaves." }
            ],
            "education": [
                { "institute": "MIT", "degree": "BSc", "year": "2020", "gpa": "4.0" }
            ],
            "awards": [],
            "certifications": []
        })
    }

    fn load(value: serde_json::Value) -> Result<PortfolioData, ContentError> {
        PortfolioData::from_json(&value.to_string())
    }

    #[test]
    fn embedded_content_loads() {
        let data = PortfolioData::load_embedded().expect("embedded content should be valid");

        assert_eq!(data.personal.name, "Hrithik Ranjan");
        assert_eq!(data.experience.len(), 3);
        assert_eq!(data.skill_count(), 20);
        assert_eq!(data.projects.len(), 2);
        assert_eq!(data.sections(), SectionId::ALL.to_vec());
    }

    #[test]
    fn empty_optional_sections_are_not_rendered() {
        let data = load(fixture()).expect("fixture is valid");
        let markers = data
            .page_layout()
            .into_iter()
            .map(PageBlock::marker)
            .collect::<Vec<_>>();

        assert!(!markers.contains(&"Awards & Achievements"));
        assert!(!markers.contains(&"Certifications"));
        for expected in ["Where I've Worked", "Technical Skills", "Featured Projects", "Education"] {
            assert!(markers.contains(&expected), "missing {expected}");
        }
        assert_eq!(data.page_layout().first(), Some(&PageBlock::Hero));
        assert_eq!(data.page_layout().last(), Some(&PageBlock::Footer));
    }

    #[test]
    fn missing_optional_lists_default_to_empty() {
        let mut value = fixture();
        let object = value.as_object_mut().expect("fixture is an object");
        object.remove("awards");
        object.remove("certifications");

        let data = load(value).expect("optional lists may be omitted");
        assert!(data.awards.is_empty());
        assert!(data.certifications.is_empty());
    }

    #[test]
    fn flat_skills_become_one_group() {
        let data = load(fixture()).expect("fixture is valid");

        assert_eq!(data.skills.len(), 1);
        assert_eq!(data.skills[0].title, "Technical");
        assert_eq!(data.skills[0].skills[1], Skill { name: "Go".to_string(), icon: None });
    }

    #[test]
    fn categorized_skills_keep_category_order_and_drop_empty_groups() {
        let mut value = fixture();
        value["skills"] = json!({
            "methodologies": [{ "name": "Agile" }],
            "technical": [{ "name": "Rust", "icon": "devicon-rust-plain" }],
            "tools": []
        });

        let data = load(value).expect("categorized skills are accepted");
        let titles = data.skills.iter().map(|group| group.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Technical", "Methodologies"]);
        assert_eq!(data.skills[0].skills[0].icon.as_deref(), Some("devicon-rust-plain"));
    }

    #[test]
    fn unknown_skill_category_is_rejected() {
        let mut value = fixture();
        value["skills"] = json!({ "languages": [{ "name": "Rust" }] });

        assert!(matches!(load(value), Err(ContentError::Malformed(_))));
    }

    #[test]
    fn empty_skills_are_reported_at_load() {
        let mut value = fixture();
        value["skills"] = json!({ "technical": [] });

        assert!(matches!(load(value), Err(ContentError::EmptyList("skills"))));
    }

    #[test]
    fn description_accepts_string_or_paragraphs() {
        let mut value = fixture();
        value["projects"][0]["description"] = json!(["First.", "  ", "Second."]);

        let data = load(value).expect("paragraph list is accepted");
        assert_eq!(data.projects[0].description, vec!["First.", "Second."]);
    }

    #[test]
    fn non_http_links_are_rejected() {
        let mut value = fixture();
        value["projects"][0]["link"] = json!("javascript:alert(1)");

        match load(value) {
            Err(ContentError::InvalidLink { field, .. }) => assert_eq!(field, "projects[0].link"),
            other => panic!("expected invalid link, got {other:?}"),
        }
    }

    #[test]
    fn blank_required_text_names_the_field() {
        let mut value = fixture();
        value["experience"][0]["company"] = json!("   ");

        match load(value) {
            Err(ContentError::EmptyField(field)) => assert_eq!(field, "experience[0].company"),
            other => panic!("expected empty field, got {other:?}"),
        }
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let mut value = fixture();
        value["personal"]["email"] = json!("ada.example.com");

        assert!(matches!(load(value), Err(ContentError::InvalidEmail(_))));
    }
}
