use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

const DEFAULT_SKILL_LEVEL: &str = "intermediate";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default = "default_skill_level", deserialize_with = "nullable_level")]
    pub level: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub technologies: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

/// Caller-supplied personal and professional data. Nothing here is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub name: String,
    pub title: String,
    pub email: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub phone: String,
    pub about: String,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
}

/// A persisted portfolio. Immutable once created: `id` is assigned here and
/// never reassigned, and both timestamps are set to the creation instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: PortfolioData,
    pub selected_template: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Portfolio {
    pub fn new(data: PortfolioData, selected_template: String) -> Self {
        // Postgres stores microseconds; truncate so a fetched row compares equal.
        let now = Utc::now().trunc_subsecs(6);
        Self {
            id: Uuid::new_v4(),
            data,
            selected_template,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct PortfolioRow {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub about: String,
    pub education: Json<Vec<Education>>,
    pub skills: Json<Vec<Skill>>,
    pub projects: Json<Vec<Project>>,
    pub experience: Json<Vec<Experience>>,
    pub selected_template: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PortfolioRow> for Portfolio {
    fn from(row: PortfolioRow) -> Self {
        Portfolio {
            id: row.id,
            data: PortfolioData {
                name: row.name,
                title: row.title,
                email: row.email,
                phone: row.phone,
                about: row.about,
                education: row.education.0,
                skills: row.skills.0,
                projects: row.projects.0,
                experience: row.experience.0,
            },
            selected_template: row.selected_template,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn default_skill_level() -> String {
    DEFAULT_SKILL_LEVEL.to_string()
}

/// Treats an explicit `null` the same as an omitted optional string.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_level<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_skill_level))
}
