//! Header strip and panel tabs for `ResumeApp`.

use eframe::egui;

use resume_carousel::avatar::placeholder_initials;
use resume_carousel::content::editor::{EditorDraft, EditorTab};
use resume_carousel::content::view::render_header;
use resume_carousel::CameraMode;

use super::{ImageModal, ResumeApp};
use crate::ui;

impl ResumeApp {
    /// Render the header (name, contact, avatar) when content is loaded.
    pub fn draw_header(&mut self, ui: &mut egui::Ui) {
        let Some(model) = &self.content else {
            if let Some(err) = self.content_error.clone() {
                ui.colored_label(egui::Color32::from_rgb(220, 80, 80), err);
                if ui.button("Retry").clicked() {
                    let ctx = ui.ctx().clone();
                    self.load_content(&ctx);
                }
            } else {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading…");
                });
            }
            return;
        };

        let header = render_header(model);
        let initials = placeholder_initials(&model.header.name);
        let texture = self.avatar_texture.as_ref().map(|(_, tex)| tex);
        if ui::render_header(ui, &header, texture, &initials) {
            self.image_modal = Some(ImageModal {
                url_input: self
                    .avatar
                    .key()
                    .filter(|k| !k.starts_with("data:"))
                    .unwrap_or_default()
                    .to_string(),
                ..ImageModal::default()
            });
        }
    }

    /// Tab row: one button per panel, focus toggle, control panel.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            let active = self.carousel.navigator().active_tab();
            let ids: Vec<&'static str> =
                self.carousel.navigator().registry().iter().map(|p| p.id).collect();
            for (i, id) in ids.into_iter().enumerate() {
                if ui
                    .add(egui::SelectableLabel::new(i == active, capitalize(id)))
                    .clicked()
                {
                    self.carousel.select_panel(id);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let edit =
                    ui.add_enabled(self.content.is_some(), egui::Button::new("\u{270E} Edit"));
                if edit.clicked() {
                    if let Some(model) = &self.content {
                        self.editor = Some(EditorDraft::open(model, EditorTab::Header));
                        self.editor_error = None;
                    }
                }

                let focus_label = match self.carousel.navigator().camera_mode() {
                    CameraMode::Carousel => "Focus (F)",
                    CameraMode::Focus => "Carousel (F)",
                };
                if ui.button(focus_label).clicked() {
                    self.carousel.toggle_focus_mode();
                }
            });
        });
    }
}

fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_labels_are_capitalized() {
        assert_eq!(capitalize("experience"), "Experience");
        assert_eq!(capitalize(""), "");
    }
}
