//! Stateless egui helpers that turn content blocks into widgets.
//!
//! Panels are painted at a perspective scale, so every size here is
//! multiplied by the `scale` the caller passes in.

use eframe::egui;
use resume_carousel::content::view::{Accordion, Block, HeaderView, PanelView};

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(56, 132, 255);
pub const PANEL_FILL: egui::Color32 = egui::Color32::from_rgb(24, 28, 38);
pub const PANEL_STROKE: egui::Color32 = egui::Color32::from_rgb(70, 80, 104);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(150, 158, 176);

// ─── Block rendering ──────────────────────────────────────────────────────────

/// Render one panel's blocks. Clicking a job header toggles its details.
pub fn render_blocks(ui: &mut egui::Ui, view: &PanelView, accordion: &mut Accordion, scale: f32) {
    for block in &view.blocks {
        match block {
            Block::Heading(text) => {
                ui.label(egui::RichText::new(text).size(26.0 * scale).strong().color(ACCENT));
                ui.add_space(8.0 * scale);
            }
            Block::Subheading(text) => {
                ui.add_space(4.0 * scale);
                ui.label(egui::RichText::new(text).size(18.0 * scale).strong());
                ui.add_space(2.0 * scale);
            }
            Block::Paragraph(text) => {
                ui.label(egui::RichText::new(text).size(14.0 * scale));
            }
            Block::Bullet(text) => {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new("  \u{2022}").size(14.0 * scale).color(ACCENT));
                    ui.label(egui::RichText::new(text).size(14.0 * scale));
                });
            }
            Block::Job {
                id,
                title,
                company,
                meta,
                details,
            } => render_job(ui, *id, title, company, meta, details, accordion, scale),
            Block::Tags { label, items } => {
                ui.label(egui::RichText::new(label).size(15.0 * scale).strong());
                ui.horizontal_wrapped(|ui| {
                    for item in items {
                        tag_chip(ui, item, scale);
                    }
                });
                ui.add_space(6.0 * scale);
            }
            Block::Spacer => {
                ui.add_space(10.0 * scale);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_job(
    ui: &mut egui::Ui,
    id: u32,
    title: &str,
    company: &str,
    meta: &str,
    details: &[String],
    accordion: &mut Accordion,
    scale: f32,
) {
    let expanded = accordion.is_expanded(id);
    let marker = if expanded { "\u{25BE}" } else { "\u{25B8}" };
    let header = ui
        .add(
            egui::Label::new(
                egui::RichText::new(format!("{} {} \u{00B7} {}", marker, title, company))
                    .size(16.0 * scale)
                    .strong(),
            )
            .sense(egui::Sense::click()),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    ui.label(egui::RichText::new(meta).size(12.0 * scale).color(MUTED));
    if header.clicked() {
        accordion.toggle(id);
    }
    if expanded {
        for line in details {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new("    \u{2013}").size(13.0 * scale).color(MUTED));
                ui.label(egui::RichText::new(line).size(13.0 * scale));
            });
        }
    }
    ui.add_space(6.0 * scale);
}

fn tag_chip(ui: &mut egui::Ui, text: &str, scale: f32) {
    egui::Frame::none()
        .fill(ACCENT.gamma_multiply(0.25))
        .rounding(egui::Rounding::same(8.0 * scale))
        .inner_margin(egui::Margin::symmetric(6.0 * scale, 2.0 * scale))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0 * scale));
        });
}

// ─── Header strip ─────────────────────────────────────────────────────────────

/// Name, title, contact line and profile links. Returns true when the
/// avatar was clicked.
pub fn render_header(
    ui: &mut egui::Ui,
    header: &HeaderView,
    avatar: Option<&egui::TextureHandle>,
    initials: &str,
) -> bool {
    let mut avatar_clicked = false;
    ui.horizontal(|ui| {
        let size = egui::vec2(56.0, 56.0);
        let response = match avatar {
            Some(tex) => ui.add(
                egui::Image::new((tex.id(), size))
                    .rounding(egui::Rounding::same(28.0))
                    .sense(egui::Sense::click()),
            ),
            None => {
                let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
                let painter = ui.painter();
                painter.circle_filled(rect.center(), 28.0, ACCENT.gamma_multiply(0.6));
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    initials,
                    egui::FontId::proportional(22.0),
                    egui::Color32::WHITE,
                );
                response
            }
        };
        avatar_clicked = response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text("Change profile picture")
            .clicked();

        ui.add_space(8.0);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&header.name).size(24.0).strong());
            ui.label(egui::RichText::new(&header.title).size(15.0).color(ACCENT));
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(header.contact.join("  \u{00B7}  ")).color(MUTED));
                for (label, url) in &header.links {
                    ui.hyperlink_to(*label, url);
                }
            });
        });
    });
    avatar_clicked
}

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}

/// Snap a perspective scale to 5% steps so glyph sizes stay cacheable.
pub fn quantize_scale(scale: f32) -> f32 {
    ((scale * 20.0).round() / 20.0).clamp(0.3, 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_by_chars() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("data:image/png;base64,AAAA", 10), "data:im...");
    }

    #[test]
    fn scale_is_quantized() {
        assert_eq!(quantize_scale(1.0), 1.0);
        assert_eq!(quantize_scale(1.52), 1.5);
        assert_eq!(quantize_scale(0.01), 0.3);
        assert_eq!(quantize_scale(9.0), 2.0);
    }
}
