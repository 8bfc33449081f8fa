//! Panel registry.
//!
//! The fixed, ordered list of résumé panels. Panels sit along the negative
//! X axis: panel `i` lives at world X `-gap * i`, so centring it means
//! translating the whole scene by `+gap * i`. That translation is the
//! panel's `offset`.

/// One named section positioned along the navigation axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelDescriptor {
    pub id: &'static str,
    /// Display anchor the content renderer fills.
    pub anchor: &'static str,
    /// Scene offset that centres this panel.
    pub offset: f32,
}

impl PanelDescriptor {
    /// World-space X of the panel before the scene translation.
    pub fn world_x(&self) -> f32 {
        -self.offset
    }
}

const PANEL_IDS: [(&str, &str); 4] = [
    ("summary", "summary-panel"),
    ("experience", "experience-panel"),
    ("skills", "skills-panel"),
    ("education", "education-panel"),
];

/// Immutable ordered panel list with evenly spaced offsets.
#[derive(Debug, Clone)]
pub struct PanelRegistry {
    panels: Vec<PanelDescriptor>,
    gap: f32,
}

impl PanelRegistry {
    /// The four résumé panels, `gap` apart.
    pub fn new(gap: f32) -> Self {
        let panels = PANEL_IDS
            .iter()
            .enumerate()
            .map(|(i, &(id, anchor))| PanelDescriptor {
                id,
                anchor,
                offset: gap * i as f32,
            })
            .collect();
        Self { panels, gap }
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.panels.len().saturating_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&PanelDescriptor> {
        self.panels.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelDescriptor> {
        self.panels.iter()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.id == id)
    }

    /// Nearest panel index for a scene offset, clamped to the registry.
    pub fn index_for_offset(&self, offset: f32) -> usize {
        let raw = (offset / self.gap).round();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(self.last_index())
        }
    }

    pub fn offset_of(&self, index: usize) -> f32 {
        self.gap * index as f32
    }
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::new(crate::config::PANEL_GAP)
    }
}
