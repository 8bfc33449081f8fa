//! Content → panel blocks.
//!
//! Turns the content model into a flat list of display blocks per panel
//! anchor. The GUI paints these every frame, so rendering is idempotent by
//! construction: nothing is attached that could be attached twice.

use std::collections::BTreeSet;

use super::ContentModel;

/// One paintable unit inside a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(String),
    Subheading(String),
    Paragraph(String),
    Bullet(String),
    /// Collapsible experience entry.
    Job {
        id: u32,
        title: String,
        company: String,
        meta: String,
        details: Vec<String>,
    },
    /// Category with tag chips.
    Tags { label: String, items: Vec<String> },
    Spacer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub anchor: String,
    pub blocks: Vec<Block>,
}

/// Header strip shown above the carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub name: String,
    pub title: String,
    pub contact: Vec<String>,
    /// (label, url)
    pub links: Vec<(&'static str, String)>,
}

pub fn render_header(model: &ContentModel) -> HeaderView {
    let h = &model.header;
    let contact = [&h.email, &h.phone]
        .into_iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect();
    let links = [
        ("LinkedIn", &h.links.linkedin),
        ("GitHub", &h.links.github),
        ("Portfolio", &h.links.portfolio),
    ]
    .into_iter()
    .filter(|(_, url)| !url.is_empty())
    .map(|(label, url)| (label, url.clone()))
    .collect();
    HeaderView {
        name: h.name.clone(),
        title: h.title.clone(),
        contact,
        links,
    }
}

/// Blocks for the panel at `anchor`. Unknown anchors render empty.
pub fn render_panel(anchor: &str, model: &ContentModel) -> PanelView {
    let blocks = match anchor {
        "summary-panel" => summary_blocks(model),
        "experience-panel" => experience_blocks(model),
        "skills-panel" => skills_blocks(model),
        "education-panel" => education_blocks(model),
        _ => Vec::new(),
    };
    PanelView {
        anchor: anchor.to_string(),
        blocks,
    }
}

fn summary_blocks(model: &ContentModel) -> Vec<Block> {
    let mut blocks = vec![
        Block::Heading("Summary".into()),
        Block::Paragraph(model.summary.text.clone()),
    ];
    if !model.summary.achievements.is_empty() {
        blocks.push(Block::Subheading("Key Achievements".into()));
        blocks.extend(model.summary.achievements.iter().cloned().map(Block::Bullet));
    }
    blocks
}

fn experience_blocks(model: &ContentModel) -> Vec<Block> {
    let mut blocks = vec![Block::Heading("Experience".into())];
    blocks.extend(model.experience.iter().map(|job| Block::Job {
        id: job.id,
        title: job.title.clone(),
        company: job.company.clone(),
        meta: format!("{} | {}", job.location, job.years),
        details: job.details.clone(),
    }));
    if !model.projects.is_empty() {
        blocks.push(Block::Spacer);
        blocks.push(Block::Subheading("Projects".into()));
        for p in &model.projects {
            blocks.push(Block::Tags {
                label: p.name.clone(),
                items: p.tech.clone(),
            });
            blocks.push(Block::Paragraph(p.description.clone()));
        }
    }
    blocks
}

fn skills_blocks(model: &ContentModel) -> Vec<Block> {
    let mut blocks = vec![Block::Heading("Skills".into())];
    blocks.extend(model.skills.iter().map(|cat| Block::Tags {
        label: cat.category.clone(),
        items: cat.items.clone(),
    }));
    blocks
}

fn education_blocks(model: &ContentModel) -> Vec<Block> {
    let edu = &model.education;
    let mut blocks = vec![
        Block::Heading("Education".into()),
        Block::Subheading(edu.degree.clone()),
        Block::Paragraph(format!("{} | {}", edu.institution, edu.years)),
    ];
    if !edu.details.is_empty() {
        blocks.push(Block::Paragraph(edu.details.clone()));
    }
    blocks
}

/// Expanded experience entries. Reset whenever content is re-rendered.
#[derive(Debug, Default, Clone)]
pub struct Accordion {
    expanded: BTreeSet<u32>,
}

impl Accordion {
    pub fn toggle(&mut self, id: u32) -> bool {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
            true
        } else {
            false
        }
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded.contains(&id)
    }

    pub fn reset(&mut self) {
        self.expanded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DEFAULT_CONTENT_JSON;
    use crate::panel::PanelRegistry;

    fn model() -> ContentModel {
        ContentModel::from_json(DEFAULT_CONTENT_JSON).unwrap()
    }

    #[test]
    fn every_registered_anchor_has_content() {
        let m = model();
        for p in PanelRegistry::default().iter() {
            let view = render_panel(p.anchor, &m);
            assert!(
                matches!(view.blocks.first(), Some(Block::Heading(_))),
                "{} has no heading",
                p.anchor
            );
        }
        assert!(render_panel("nowhere", &m).blocks.is_empty());
    }

    #[test]
    fn rendering_is_idempotent() {
        let m = model();
        assert_eq!(
            render_panel("experience-panel", &m),
            render_panel("experience-panel", &m)
        );
    }

    #[test]
    fn experience_blocks_carry_ids() {
        let view = render_panel("experience-panel", &model());
        let ids: Vec<u32> = view
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Job { id, .. } => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn header_skips_empty_links() {
        let mut m = model();
        m.header.links.github.clear();
        let h = render_header(&m);
        assert_eq!(h.links.len(), 2);
        assert!(h.links.iter().all(|(label, _)| *label != "GitHub"));
        assert_eq!(h.contact.len(), 2);
    }

    #[test]
    fn accordion_toggles_and_resets() {
        let mut acc = Accordion::default();
        assert!(acc.toggle(2));
        assert!(acc.is_expanded(2));
        assert!(!acc.toggle(2));
        assert!(!acc.is_expanded(2));
        acc.toggle(1);
        acc.reset();
        assert!(!acc.is_expanded(1));
    }
}
