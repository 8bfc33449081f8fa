//! Control panel editor.
//!
//! `EditorDraft` holds the form as plain strings, the way the user edits it.
//! `commit` turns it back into a `ContentModel`; a validation failure leaves
//! the live model untouched.

use super::{ContentModel, Education, Header, Job, Links, SkillCategory, Summary};
use crate::error::EditorError;

/// Control panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTab {
    #[default]
    Header,
    Summary,
    Experience,
    Skills,
    Education,
}

impl EditorTab {
    pub const ALL: [EditorTab; 5] = [
        EditorTab::Header,
        EditorTab::Summary,
        EditorTab::Experience,
        EditorTab::Skills,
        EditorTab::Education,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EditorTab::Header => "Header",
            EditorTab::Summary => "Summary",
            EditorTab::Experience => "Experience",
            EditorTab::Skills => "Skills",
            EditorTab::Education => "Education",
        }
    }
}

/// One experience entry as edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub years: String,
    /// One responsibility per line.
    pub details: String,
}

impl JobDraft {
    fn from_job(job: &Job) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            years: job.years.clone(),
            details: job.details.join("\n"),
        }
    }

    fn to_job(&self) -> Job {
        Job {
            id: self.id,
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            years: self.years.clone(),
            details: split_lines(&self.details),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorDraft {
    pub tab: EditorTab,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub summary_text: String,
    /// One achievement per line.
    pub achievements: String,
    pub jobs: Vec<JobDraft>,
    /// `Category: a, b | Category2: c`
    pub skills_raw: String,
    pub edu_degree: String,
    pub edu_institution: String,
    pub edu_years: String,
    pub edu_details: String,
}

impl EditorDraft {
    pub fn from_model(model: &ContentModel) -> Self {
        Self::open(model, EditorTab::default())
    }

    /// Load `model` into the form and show `tab`.
    pub fn open(model: &ContentModel, tab: EditorTab) -> Self {
        let h = &model.header;
        Self {
            tab,
            name: h.name.clone(),
            title: h.title.clone(),
            email: h.email.clone(),
            phone: h.phone.clone(),
            linkedin: h.links.linkedin.clone(),
            github: h.links.github.clone(),
            portfolio: h.links.portfolio.clone(),
            summary_text: model.summary.text.clone(),
            achievements: model.summary.achievements.join("\n"),
            jobs: model.experience.iter().map(JobDraft::from_job).collect(),
            skills_raw: format_skills_raw(&model.skills),
            edu_degree: model.education.degree.clone(),
            edu_institution: model.education.institution.clone(),
            edu_years: model.education.years.clone(),
            edu_details: model.education.details.clone(),
        }
    }

    pub fn switch_tab(&mut self, tab: EditorTab) {
        self.tab = tab;
    }

    /// Append a placeholder entry. Returns its id.
    pub fn add_job(&mut self) -> u32 {
        let id = self.jobs.iter().map(|j| j.id).max().unwrap_or(0) + 1;
        self.jobs.push(JobDraft {
            id,
            title: "New Job Entry".into(),
            company: "New Company Name".into(),
            location: "City, State".into(),
            years: "Year - Year".into(),
            details: "Add your key responsibilities here (one per line).".into(),
        });
        id
    }

    /// Drop the entry with `id`. Returns whether one was removed.
    pub fn remove_job(&mut self, id: u32) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|j| j.id != id);
        self.jobs.len() != before
    }

    /// Build the new model. Fields the form does not edit come from `live`.
    pub fn commit(&self, live: &ContentModel) -> Result<ContentModel, EditorError> {
        let skills = parse_skills_raw(&self.skills_raw);
        if !self.skills_raw.trim().is_empty() && skills.is_empty() {
            return Err(EditorError::SkillsFormat);
        }

        Ok(ContentModel {
            header: Header {
                name: self.name.clone(),
                title: self.title.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                image: live.header.image.clone(),
                links: Links {
                    linkedin: self.linkedin.clone(),
                    github: self.github.clone(),
                    portfolio: self.portfolio.clone(),
                },
            },
            summary: Summary {
                text: self.summary_text.clone(),
                achievements: split_lines(&self.achievements),
            },
            experience: self.jobs.iter().map(JobDraft::to_job).collect(),
            skills,
            education: Education {
                degree: self.edu_degree.clone(),
                institution: self.edu_institution.clone(),
                years: self.edu_years.clone(),
                details: self.edu_details.clone(),
            },
            projects: live.projects.clone(),
        })
    }
}

/// Trimmed, non-empty lines.
fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

pub fn format_skills_raw(skills: &[SkillCategory]) -> String {
    skills
        .iter()
        .map(|cat| format!("{}: {}", cat.category, cat.items.join(", ")))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Parse `Category: a, b | Category2: c`.
///
/// Only the first `:` separates name from items. Categories with an empty
/// name or no items are dropped.
pub fn parse_skills_raw(raw: &str) -> Vec<SkillCategory> {
    raw.split(" | ")
        .filter(|s| !s.trim().is_empty())
        .filter_map(|chunk| {
            let (category, items) = chunk.split_once(':')?;
            let category = category.trim();
            let items = items.trim();
            if category.is_empty() || items.is_empty() {
                return None;
            }
            let items: Vec<String> = items
                .split(',')
                .map(str::trim)
                .filter(|i| !i.is_empty())
                .map(String::from)
                .collect();
            Some(SkillCategory {
                category: category.to_string(),
                items,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DEFAULT_CONTENT_JSON;

    fn model() -> ContentModel {
        ContentModel::from_json(DEFAULT_CONTENT_JSON).unwrap()
    }

    #[test]
    fn save_then_reload_reproduces_every_field() {
        let live = model();
        let draft = EditorDraft::from_model(&live);
        let saved = draft.commit(&live).unwrap();
        assert_eq!(saved, live);
        assert_eq!(saved.to_json().unwrap(), live.to_json().unwrap());
        assert_eq!(EditorDraft::from_model(&saved), draft);
    }

    #[test]
    fn opens_on_requested_tab() {
        let draft = EditorDraft::open(&model(), EditorTab::Skills);
        assert_eq!(draft.tab, EditorTab::Skills);
        assert_eq!(EditorDraft::from_model(&model()).tab, EditorTab::Header);
    }

    #[test]
    fn add_job_uses_next_id() {
        let live = model();
        let mut draft = EditorDraft::from_model(&live);
        assert_eq!(draft.add_job(), 4);
        let saved = draft.commit(&live).unwrap();
        assert_eq!(saved.experience.len(), 4);
        let added = saved.job(4).unwrap();
        assert_eq!(added.title, "New Job Entry");
        assert_eq!(added.details.len(), 1);
    }

    #[test]
    fn remove_job_by_id_keeps_others() {
        let live = model();
        let mut draft = EditorDraft::from_model(&live);
        assert!(draft.remove_job(2));
        assert!(!draft.remove_job(2));
        let saved = draft.commit(&live).unwrap();
        let ids: Vec<u32> = saved.experience.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 3]);
        // A new entry after removal still gets a fresh id.
        assert_eq!(draft.add_job(), 4);
    }

    #[test]
    fn multiline_fields_are_trimmed() {
        let live = model();
        let mut draft = EditorDraft::from_model(&live);
        draft.achievements = "  first \n\n second\n   \n".into();
        let saved = draft.commit(&live).unwrap();
        assert_eq!(saved.summary.achievements, vec!["first", "second"]);
    }

    #[test]
    fn malformed_skills_abort_the_save() {
        let live = model();
        let mut draft = EditorDraft::from_model(&live);
        draft.name = "Changed".into();
        draft.skills_raw = "just some words".into();
        assert_eq!(draft.commit(&live), Err(EditorError::SkillsFormat));
    }

    #[test]
    fn empty_skills_text_clears_skills() {
        let live = model();
        let mut draft = EditorDraft::from_model(&live);
        draft.skills_raw = "   ".into();
        assert!(draft.commit(&live).unwrap().skills.is_empty());
    }

    #[test]
    fn skills_parser_edge_cases() {
        let parsed = parse_skills_raw("Lang: Rust, Go | Empty: | : orphan | Time: 10:30, noon");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].category, "Lang");
        assert_eq!(parsed[0].items, vec!["Rust", "Go"]);
        assert_eq!(parsed[1].category, "Time");
        assert_eq!(parsed[1].items, vec!["10:30", "noon"]);
        assert!(parse_skills_raw("").is_empty());
    }

    #[test]
    fn commit_keeps_fields_the_form_does_not_edit() {
        let live = model();
        let draft = EditorDraft::from_model(&live);
        let saved = draft.commit(&live).unwrap();
        assert_eq!(saved.header.image, live.header.image);
        assert_eq!(saved.projects, live.projects);
    }
}
