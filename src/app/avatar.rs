//! Profile picture modal and avatar texture upkeep.

use std::path::PathBuf;

use eframe::egui;

use resume_carousel::avatar::{Accepted, AvatarSource, SubmitOutcome};

use super::ResumeApp;
use crate::ui;

impl ResumeApp {
    /// Finish pending verifications and keep the avatar texture current.
    /// Call every frame.
    pub fn check_avatar(&mut self, ctx: &egui::Context) {
        if let Some(result) = self.uploader.poll(&mut self.store) {
            match result {
                Ok(accepted) => {
                    self.accept_avatar(accepted);
                    self.image_modal = None;
                }
                Err(e) => {
                    if let Some(modal) = &mut self.image_modal {
                        modal.error = Some(e.to_string());
                    }
                }
            }
        }

        self.image_loader.poll();
        let Some(key) = self.avatar.key() else {
            self.avatar_texture = None;
            return;
        };
        if self.avatar_texture.as_ref().is_some_and(|(k, _)| k == key) {
            return;
        }
        if let Some(data) = self.image_loader.get(key) {
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [data.width as usize, data.height as usize],
                &data.rgba,
            );
            let texture = ctx.load_texture("avatar", image, egui::TextureOptions::LINEAR);
            self.avatar_texture = Some((key.to_string(), texture));
        } else if self.image_loader.has_failed(key) {
            log::warn!("Stored profile picture could not be loaded; showing initials");
            self.avatar = AvatarSource::Placeholder;
            self.avatar_texture = None;
        }
    }

    fn accept_avatar(&mut self, accepted: Accepted) {
        if let Some(key) = accepted.source.key() {
            self.image_loader.insert(key, accepted.image);
        }
        self.avatar = accepted.source;
        self.avatar_texture = None;
    }

    /// Render the profile picture dialog when open.
    pub fn draw_image_modal(&mut self, ctx: &egui::Context) {
        let Some(modal) = self.image_modal.as_mut() else {
            return;
        };

        // Dropped files fill the path field.
        if let Some(path) = ctx.input(|i| i.raw.dropped_files.iter().find_map(|f| f.path.clone())) {
            modal.file_path_input = path.display().to_string();
        }

        let verifying = self.uploader.is_verifying();
        let current = self.avatar.key().map(|k| ui::truncate_str(k, 48));
        let mut open = true;
        let mut save = false;
        let mut cancel = false;

        egui::Window::new("Profile picture")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                if let Some(current) = &current {
                    ui.label(egui::RichText::new(format!("Current: {}", current)).weak());
                }
                ui.label("Image URL");
                ui.add(
                    egui::TextEdit::singleline(&mut modal.url_input)
                        .hint_text("https://…")
                        .desired_width(360.0),
                );
                ui.add_space(6.0);
                ui.label("…or a local image (max 2 MB). Drop a file here or browse.");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut modal.file_path_input)
                            .hint_text("/path/to/picture.png")
                            .desired_width(280.0),
                    );
                    if ui.button("Browse…").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
                            .pick_file()
                        {
                            modal.file_path_input = path.display().to_string();
                        }
                    }
                });
                ui.small("Leave both empty and save to remove the picture.");

                if let Some(err) = &modal.error {
                    ui.colored_label(egui::Color32::from_rgb(220, 80, 80), err);
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.add_enabled(!verifying, egui::Button::new("Save")).clicked() {
                        save = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    if verifying {
                        ui.spinner();
                        ui.label("Checking image…");
                    }
                });
            });

        if !open || cancel {
            self.uploader.cancel();
            self.image_modal = None;
        } else if save {
            self.submit_avatar(ctx);
        }
    }

    fn submit_avatar(&mut self, ctx: &egui::Context) {
        let Some(modal) = self.image_modal.as_mut() else {
            return;
        };
        modal.error = None;
        let path = modal.file_path_input.trim();
        let file = (!path.is_empty()).then(|| PathBuf::from(path));
        let repaint = ctx.clone();
        let outcome = self.uploader.submit(
            &modal.url_input,
            file.as_deref(),
            &mut self.store,
            move || repaint.request_repaint(),
        );
        match outcome {
            Ok(SubmitOutcome::Cleared) => {
                self.avatar = AvatarSource::Placeholder;
                self.avatar_texture = None;
                self.image_modal = None;
            }
            Ok(SubmitOutcome::Saved(accepted)) => {
                self.accept_avatar(accepted);
                self.image_modal = None;
            }
            Ok(SubmitOutcome::Verifying) => {}
            Err(e) => {
                log::warn!("Profile picture rejected: {}", e);
                modal.error = Some(e.to_string());
            }
        }
    }
}
