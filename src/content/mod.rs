//! Résumé content model.
//!
//! - `provider`: where the content comes from (embedded, JSON file)
//! - `view`: content → per-panel blocks, plus accordion state
//! - `editor`: control panel draft, validation and commit

pub mod editor;
pub mod provider;
pub mod view;

use serde::{Deserialize, Serialize};

/// Embedded default résumé.
pub const DEFAULT_CONTENT_JSON: &str = include_str!("../../assets/resume.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentModel {
    pub header: Header,
    pub summary: Summary,
    pub experience: Vec<Job>,
    pub skills: Vec<SkillCategory>,
    pub education: Education,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub links: Links,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Links {
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// One experience entry. `id` is stable across edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub years: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub years: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

impl ContentModel {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn job(&self, id: u32) -> Option<&Job> {
        self.experience.iter().find(|j| j.id == id)
    }

    /// Next free experience id (max + 1, starting at 1).
    pub fn next_job_id(&self) -> u32 {
        self.experience.iter().map(|j| j.id).max().unwrap_or(0) + 1
    }
}
