//! Content records stored in local storage

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::i18n::Language;

// ============================================
// Storage keys and events
// ============================================

pub const PROJECTS_KEY: &str = "portfolio_projects";
pub const SKILLS_KEY: &str = "portfolio_skills";
pub const PROFILE_KEY: &str = "portfolio_profile";
pub const CERTIFICATIONS_KEY: &str = "portfolio_certifications";
pub const RADAR_SKILLS_KEY: &str = "portfolio_skills_radar";
pub const TIMELINE_KEY: &str = "portfolio_timeline";

/// Same-tab notification that the project list changed
pub const PROJECTS_UPDATED_EVENT: &str = "portfolioProjectsUpdated";

pub const PROJECT_CATEGORIES: &[&str] = &["ML", "AI", "Data Science", "Deep Learning"];
pub const SKILL_CATEGORIES: &[&str] = &["Programming", "ML/AI", "Tools", "Data"];

// ============================================
// Entity trait
// ============================================

/// A record kept as a JSON array under a fixed storage key.
pub trait Entity: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    const STORAGE_KEY: &'static str;
    const ID_PREFIX: &'static str;
    /// Window event dispatched after the collection is saved
    const UPDATE_EVENT: Option<&'static str> = None;
    /// Translation key naming the entity in toasts
    const LABEL_KEY: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn validate(&self) -> Result<(), ValidationError>;
    fn defaults() -> Vec<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("level must be between 0 and 100, got {0}")]
    LevelOutOfRange(i64),
    #[error("`{0}` is not a #rrggbb colour")]
    InvalidColor(String),
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

// ============================================
// Lenient field parsing
// ============================================

/// Levels were written by a range input and sometimes end up as strings or null.
fn lenient_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let raw = match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(clamp_level(raw))
}

pub fn clamp_level(raw: f64) -> u8 {
    if raw.is_nan() {
        0
    } else {
        raw.round().clamp(0.0, 100.0) as u8
    }
}

pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

// ============================================
// Project
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Entity for Project {
    const STORAGE_KEY: &'static str = PROJECTS_KEY;
    const ID_PREFIX: &'static str = "proj";
    const UPDATE_EVENT: Option<&'static str> = Some(PROJECTS_UPDATED_EVENT);
    const LABEL_KEY: &'static str = "entity.project";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("description", &self.description)
    }

    fn defaults() -> Vec<Self> {
        crate::defaults::projects()
    }
}

/// Links set to `#` are placeholders and not shown.
pub fn usable_link(url: &Option<String>) -> Option<&str> {
    url.as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty() && *u != "#")
}

// ============================================
// Skill
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Skill {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_level")]
    pub level: u8,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Entity for Skill {
    const STORAGE_KEY: &'static str = SKILLS_KEY;
    const ID_PREFIX: &'static str = "skill";
    const LABEL_KEY: &'static str = "entity.skill";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        if self.level > 100 {
            return Err(ValidationError::LevelOutOfRange(self.level as i64));
        }
        Ok(())
    }

    fn defaults() -> Vec<Self> {
        crate::defaults::skills()
    }
}

// ============================================
// Radar skill
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSkill {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub skill: String,
    #[serde(default, deserialize_with = "lenient_level")]
    pub level: u8,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_radar_color")]
    pub color: String,
}

pub const DEFAULT_RADAR_COLOR: &str = "#00D4FF";

fn default_radar_color() -> String {
    DEFAULT_RADAR_COLOR.to_string()
}

impl Default for RadarSkill {
    fn default() -> Self {
        RadarSkill {
            id: String::new(),
            skill: String::new(),
            level: 80,
            category: String::new(),
            color: default_radar_color(),
        }
    }
}

impl Entity for RadarSkill {
    const STORAGE_KEY: &'static str = RADAR_SKILLS_KEY;
    const ID_PREFIX: &'static str = "radar";
    const LABEL_KEY: &'static str = "entity.radar_skill";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("skill", &self.skill)?;
        require("category", &self.category)?;
        if self.level > 100 {
            return Err(ValidationError::LevelOutOfRange(self.level as i64));
        }
        if !is_hex_color(&self.color) {
            return Err(ValidationError::InvalidColor(self.color.clone()));
        }
        Ok(())
    }

    fn defaults() -> Vec<Self> {
        crate::defaults::radar_skills()
    }
}

// ============================================
// Timeline
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineStatus {
    #[default]
    Completed,
    InProgress,
    Planned,
    #[serde(other)]
    Unknown,
}

impl TimelineStatus {
    pub const SELECTABLE: [TimelineStatus; 3] = [
        TimelineStatus::Completed,
        TimelineStatus::InProgress,
        TimelineStatus::Planned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineStatus::Completed => "completed",
            TimelineStatus::InProgress => "in-progress",
            TimelineStatus::Planned => "planned",
            TimelineStatus::Unknown => "unknown",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "completed" => TimelineStatus::Completed,
            "in-progress" => TimelineStatus::InProgress,
            "planned" => TimelineStatus::Planned,
            _ => TimelineStatus::Unknown,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TimelineStatus::Completed => "✅",
            TimelineStatus::InProgress => "🚧",
            TimelineStatus::Planned => "📋",
            TimelineStatus::Unknown => "❓",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TimelineStatus::Completed => "status-completed",
            TimelineStatus::InProgress => "status-in-progress",
            TimelineStatus::Planned => "status-planned",
            TimelineStatus::Unknown => "status-unknown",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            TimelineStatus::Completed => "timeline.status.completed",
            TimelineStatus::InProgress => "timeline.status.in_progress",
            TimelineStatus::Planned => "timeline.status.planned",
            TimelineStatus::Unknown => "timeline.status.unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimelineProject {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: TimelineStatus,
    #[serde(default)]
    pub impact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

impl Entity for TimelineProject {
    const STORAGE_KEY: &'static str = TIMELINE_KEY;
    const ID_PREFIX: &'static str = "timeline";
    const LABEL_KEY: &'static str = "entity.timeline";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("date", &self.date)?;
        require("category", &self.category)?;
        require("image", &self.image)?;
        require("impact", &self.impact)
    }

    fn defaults() -> Vec<Self> {
        crate::defaults::timeline()
    }
}

// ============================================
// Certification
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Certification {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Entity for Certification {
    const STORAGE_KEY: &'static str = CERTIFICATIONS_KEY;
    const ID_PREFIX: &'static str = "cert";
    const LABEL_KEY: &'static str = "entity.certification";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)
    }

    fn defaults() -> Vec<Self> {
        crate::defaults::certifications()
    }
}

// ============================================
// Profile
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Single-language title from before titles were localized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "title_en", skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    #[serde(default, rename = "title_es", skip_serializing_if = "Option::is_none")]
    pub title_es: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "description_en", skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(default, rename = "description_es", skip_serializing_if = "Option::is_none")]
    pub description_es: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

pub const PROFILE_ID_PREFIX: &str = "profile";

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ProfileInfo {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    /// Localized title, then the legacy single-language title.
    pub fn title_for(&self, lang: Language) -> Option<&str> {
        let localized = match lang {
            Language::En => &self.title_en,
            Language::Es => &self.title_es,
        };
        non_empty(localized).or_else(|| non_empty(&self.title))
    }

    pub fn description_for(&self, lang: Language) -> Option<&str> {
        let localized = match lang {
            Language::En => &self.description_en,
            Language::Es => &self.description_es,
        };
        non_empty(localized).or_else(|| non_empty(&self.description))
    }

    pub fn resume_url(&self) -> Option<&str> {
        non_empty(&self.resume_url)
    }

    pub fn github_url(&self) -> Option<&str> {
        non_empty(&self.github_url)
    }

    pub fn linkedin_url(&self) -> Option<&str> {
        non_empty(&self.linkedin_url)
    }

    pub fn twitter_url(&self) -> Option<&str> {
        non_empty(&self.twitter_url)
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    pub fn phone(&self) -> Option<&str> {
        non_empty(&self.phone)
    }

    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    /// Applies the editable fields of `form` over `self`, keeping the id and legacy fields.
    pub fn merged_with(&self, form: ProfileForm, new_id: impl FnOnce() -> String) -> ProfileInfo {
        let id = if self.id.is_empty() { new_id() } else { self.id.clone() };
        ProfileInfo {
            id,
            name: Some(form.name),
            title: self.title.clone(),
            title_en: Some(form.title_en),
            title_es: Some(form.title_es),
            description: self.description.clone(),
            description_en: Some(form.description_en),
            description_es: Some(form.description_es),
            resume_url: Some(form.resume_url),
            github_url: Some(form.github_url),
            linkedin_url: Some(form.linkedin_url),
            twitter_url: Some(form.twitter_url),
            email: Some(form.email),
            phone: Some(form.phone),
            location: Some(form.location),
        }
    }
}

/// Editable profile fields as entered in the admin form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileForm {
    pub name: String,
    pub title_en: String,
    pub title_es: String,
    pub description_en: String,
    pub description_es: String,
    pub resume_url: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl From<&ProfileInfo> for ProfileForm {
    fn from(p: &ProfileInfo) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        ProfileForm {
            name: text(&p.name),
            title_en: text(&p.title_en),
            title_es: text(&p.title_es),
            description_en: text(&p.description_en),
            description_es: text(&p.description_es),
            resume_url: text(&p.resume_url),
            github_url: text(&p.github_url),
            linkedin_url: text(&p.linkedin_url),
            twitter_url: text(&p.twitter_url),
            email: text(&p.email),
            phone: text(&p.phone),
            location: text(&p.location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_accepts_strings_and_null() {
        let skill: Skill = serde_json::from_str(r#"{"id":"s1","name":"Rust","level":"85","category":"Programming"}"#).unwrap();
        assert_eq!(skill.level, 85);

        let skill: Skill = serde_json::from_str(r#"{"id":"s1","name":"Rust","level":null}"#).unwrap();
        assert_eq!(skill.level, 0);

        let radar: RadarSkill = serde_json::from_str(r#"{"skill":"NLP","level":140,"category":"AI"}"#).unwrap();
        assert_eq!(radar.level, 100);
        assert_eq!(radar.color, DEFAULT_RADAR_COLOR);
    }

    #[test]
    fn test_project_uses_camel_case_fields() {
        let json = r##"{"id":"proj_1","title":"T","description":"D","longDescription":"L",
            "category":"AI","technologies":["Rust"],"imageUrl":"img","demoUrl":"#","featured":true}"##;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.long_description.as_deref(), Some("L"));
        assert_eq!(project.image_url.as_deref(), Some("img"));
        assert!(project.featured);

        let out = serde_json::to_value(&project).unwrap();
        assert_eq!(out["longDescription"], "L");
        assert!(out.get("githubUrl").is_none());
    }

    #[test]
    fn test_usable_link_skips_placeholders() {
        assert_eq!(usable_link(&Some("#".into())), None);
        assert_eq!(usable_link(&Some("  ".into())), None);
        assert_eq!(usable_link(&None), None);
        assert_eq!(usable_link(&Some("https://x.dev".into())), Some("https://x.dev"));
    }

    #[test]
    fn test_timeline_status_round_trip_and_unknown() {
        let entry: TimelineProject = serde_json::from_str(r#"{"title":"A","status":"in-progress"}"#).unwrap();
        assert_eq!(entry.status, TimelineStatus::InProgress);

        let entry: TimelineProject = serde_json::from_str(r#"{"title":"A","status":"paused"}"#).unwrap();
        assert_eq!(entry.status, TimelineStatus::Unknown);
        assert_eq!(entry.status.icon(), "❓");

        assert_eq!(TimelineStatus::from_value("planned"), TimelineStatus::Planned);
    }

    #[test]
    fn test_profile_keys_match_stored_layout() {
        let json = r#"{"id":"profile_1","title":"Legacy","title_es":"Visionario","resumeUrl":"cv.pdf"}"#;
        let profile: ProfileInfo = serde_json::from_str(json).unwrap();
        assert_eq!(profile.title_es.as_deref(), Some("Visionario"));
        assert_eq!(profile.resume_url(), Some("cv.pdf"));
    }

    #[test]
    fn test_profile_title_falls_back_to_legacy() {
        let profile = ProfileInfo {
            title: Some("Legacy title".into()),
            title_es: Some("Título".into()),
            title_en: Some("".into()),
            ..Default::default()
        };
        assert_eq!(profile.title_for(Language::Es), Some("Título"));
        assert_eq!(profile.title_for(Language::En), Some("Legacy title"));
        assert_eq!(ProfileInfo::default().title_for(Language::En), None);
    }

    #[test]
    fn test_profile_merge_keeps_id_and_legacy_fields() {
        let stored = ProfileInfo {
            id: "profile_42".into(),
            title: Some("Legacy".into()),
            email: Some("old@x.dev".into()),
            ..Default::default()
        };
        let form = ProfileForm {
            name: "Ada".into(),
            email: "ada@x.dev".into(),
            ..Default::default()
        };
        let merged = stored.merged_with(form, || "profile_new".into());
        assert_eq!(merged.id, "profile_42");
        assert_eq!(merged.title.as_deref(), Some("Legacy"));
        assert_eq!(merged.email(), Some("ada@x.dev"));
        assert_eq!(merged.name(), Some("Ada"));

        let fresh = ProfileInfo::default().merged_with(ProfileForm::default(), || "profile_7".into());
        assert_eq!(fresh.id, "profile_7");
        assert_eq!(fresh.phone(), None);
    }

    #[test]
    fn test_validation_rules() {
        let project = Project { title: "X".into(), ..Default::default() };
        assert_eq!(project.validate(), Err(ValidationError::Required("description")));

        let radar = RadarSkill { skill: "Go".into(), category: "Lang".into(), color: "blue".into(), ..Default::default() };
        assert_eq!(radar.validate(), Err(ValidationError::InvalidColor("blue".into())));

        let radar = RadarSkill { skill: "Go".into(), category: "Lang".into(), ..Default::default() };
        assert!(radar.validate().is_ok());

        let cert = Certification { title: "  ".into(), ..Default::default() };
        assert!(cert.validate().is_err());
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#00D4FF"));
        assert!(!is_hex_color("#00D4F"));
        assert!(!is_hex_color("00D4FFF"));
        assert!(!is_hex_color("#GGGGGG"));
    }
}
