//! Content lifecycle and input handling for `ResumeApp`.
//!
//! Covers the asynchronous content fetch (`load_content`, `check_content`),
//! keyboard navigation, and writing the local store through to eframe.

use eframe::egui;

use resume_carousel::content::provider::ContentRequest;
use resume_carousel::input::{collect_commands, NavCommand};
use resume_carousel::storage::{resolve_content, save_content};
use resume_carousel::ContentModel;

use super::ResumeApp;

impl ResumeApp {
    /// Start fetching content on a background thread.
    pub fn load_content(&mut self, ctx: &egui::Context) {
        self.content_error = None;
        let ctx = ctx.clone();
        self.content_request = Some(ContentRequest::spawn(
            self.provider.clone(),
            self.config.content_timeout,
            move || ctx.request_repaint(),
        ));
        log::info!("Loading résumé content");
    }

    /// Poll the pending content fetch. Call every frame.
    pub fn check_content(&mut self) {
        let Some(result) = self.content_request.as_ref().and_then(|r| r.poll()) else {
            return;
        };
        self.content_request = None;
        match result {
            Ok(fetched) => {
                let model =
                    resolve_content(&self.store, fetched, self.config.restore_saved_content);
                log::info!(
                    "Content ready: {} ({} jobs)",
                    model.header.name,
                    model.experience.len()
                );
                self.set_content(model);
            }
            Err(e) => {
                log::error!("Content load failed: {}", e);
                self.content_error = Some(e.to_string());
            }
        }
    }

    /// Replace the live content and re-render every panel.
    pub fn set_content(&mut self, model: ContentModel) {
        self.accordion.reset();
        self.content = Some(model);
    }

    /// Persist `model` under the content key, then make it live.
    pub fn apply_content(&mut self, model: ContentModel) {
        if let Err(e) = save_content(&mut self.store, &model) {
            log::warn!("Could not store content: {}", e);
        }
        self.set_content(model);
    }

    /// Arrow keys step the carousel, `F` toggles focus mode.
    pub fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let events = ctx.input(|i| i.events.clone());
        for command in collect_commands(&events, self.modal_open()) {
            match command {
                NavCommand::Step(direction) => self.carousel.step(direction),
                NavCommand::ToggleFocus => self.carousel.toggle_focus_mode(),
            }
        }
    }

    /// Write the local store into eframe's persistent storage when changed.
    pub fn persist(&mut self, storage: &mut dyn eframe::Storage) {
        if self.store.flush_if_dirty(|key, value| storage.set_string(key, value)) {
            log::debug!("Local store flushed");
        }
    }
}
