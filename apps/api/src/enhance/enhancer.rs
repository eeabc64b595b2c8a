//! Content enhancer: rewrites the prose fields of a portfolio through the LLM.
//!
//! Flow: build prompt → one LLM call → parse JSON reply.
//! Any JSON reply is passed through untouched, whatever keys it carries.
//! Any failure along that path (transport, status, empty or malformed reply)
//! produces `fallback_enhancement` instead. The caller never sees an error.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::enhance::prompts::{ENHANCE_PROMPT_TEMPLATE, NO_EXPERIENCE, NO_PROJECTS};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::portfolio::{Experience, Project, Skill};

pub const ABOUT_FALLBACK_SUFFIX: &str =
    " Passionate professional with proven expertise in delivering high-quality results.";
pub const PROJECT_FALLBACK_SUFFIX: &str =
    " Delivered with attention to detail and best practices.";
pub const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "Consider adding quantifiable achievements to your projects",
    "Include specific technologies and tools in your experience",
    "Highlight leadership and collaboration skills",
];

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for content enhancement.
#[derive(Debug, Clone, Deserialize)]
pub struct EnhanceRequest {
    pub name: String,
    pub title: String,
    pub about: String,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancedSkill {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancedProject {
    pub title: String,
    pub description: String,
}

/// The JSON shape the model is asked to return, and the shape of the fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancedContent {
    pub about: String,
    pub skills: Vec<EnhancedSkill>,
    pub projects: Vec<EnhancedProject>,
    pub suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Enhancer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct ContentEnhancer {
    llm: LlmClient,
}

impl ContentEnhancer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Returns the model's parsed reply as is, or the deterministic fallback
    /// on any failure. Single attempt: no retry, no backoff.
    pub async fn enhance(&self, request: &EnhanceRequest) -> Value {
        let prompt = build_prompt(request);

        match self.llm.call_json::<Value>(&prompt, JSON_ONLY_SYSTEM).await {
            Ok(enhanced) => {
                info!("Enhanced portfolio content for '{}'", request.name);
                enhanced
            }
            Err(e) => {
                warn!("Content enhancement failed, using fallback: {e}");
                json!(fallback_enhancement(request))
            }
        }
    }
}

/// Builds the enhancement prompt from the request fields.
pub fn build_prompt(request: &EnhanceRequest) -> String {
    let skills = request
        .skills
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    fill_template(
        ENHANCE_PROMPT_TEMPLATE,
        &[
            ("{name}", request.name.as_str()),
            ("{title}", request.title.as_str()),
            ("{about}", request.about.as_str()),
            ("{skills}", skills.as_str()),
            ("{projects}", format_projects(&request.projects).as_str()),
            ("{experience}", format_experience(&request.experience).as_str()),
        ],
    )
}

fn format_projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return NO_PROJECTS.to_string();
    }
    projects
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {}: {}", i + 1, p.title, p.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_experience(experience: &[Experience]) -> String {
    if experience.is_empty() {
        return NO_EXPERIENCE.to_string();
    }
    experience
        .iter()
        .enumerate()
        .map(|(i, e)| {
            format!(
                "{}. {} at {}: {}",
                i + 1,
                e.position,
                e.company,
                e.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Substitutes `{placeholder}` keys in a single left-to-right pass, so text
/// inserted for one key is never rescanned for another.
fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match vars.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Deterministic rewrite used whenever the model cannot be used.
pub fn fallback_enhancement(request: &EnhanceRequest) -> EnhancedContent {
    EnhancedContent {
        about: format!("{}{}", request.about, ABOUT_FALLBACK_SUFFIX),
        skills: request
            .skills
            .iter()
            .map(|s| EnhancedSkill {
                name: s.name.clone(),
                description: format!("Proficient in {}", s.name),
            })
            .collect(),
        projects: request
            .projects
            .iter()
            .map(|p| EnhancedProject {
                title: p.title.clone(),
                description: format!("{}{}", p.description, PROJECT_FALLBACK_SUFFIX),
            })
            .collect(),
        suggestions: FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}
