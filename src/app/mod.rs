//! `ResumeApp`, the top-level egui application state.
//!
//! This module declares the `ResumeApp` struct and its constructor.
//! All methods are split across the sibling sub-modules:
//!
//! - `navigation`: content loading, key handling, persistence
//! - `toolbar`: header strip, panel tabs, mode buttons
//! - `content`: the carousel stage (egui draw surface)
//! - `editor`: control panel modal
//! - `avatar`: profile picture modal

pub mod avatar;
pub mod content;
pub mod editor;
pub mod navigation;
pub mod toolbar;

use std::sync::Arc;

use eframe::egui;

use resume_carousel::avatar::{AvatarSource, AvatarUploader};
use resume_carousel::content::editor::EditorDraft;
use resume_carousel::content::provider::{provider_for, ContentProvider, ContentRequest};
use resume_carousel::content::view::Accordion;
use resume_carousel::net::image::ImageLoader;
use resume_carousel::storage::MemoryStore;
use resume_carousel::{AppConfig, Carousel, ContentModel};

// ─── Application state ───────────────────────────────────────────────────────

/// Inputs of the profile picture dialog.
#[derive(Default)]
pub struct ImageModal {
    pub url_input: String,
    pub file_path_input: String,
    pub error: Option<String>,
}

pub struct ResumeApp {
    pub config: AppConfig,
    pub carousel: Carousel,
    // Content
    pub provider: Arc<dyn ContentProvider>,
    pub content: Option<ContentModel>,
    pub content_request: Option<ContentRequest>,
    pub content_error: Option<String>,
    pub accordion: Accordion,
    // Control panel
    pub editor: Option<EditorDraft>,
    pub editor_error: Option<String>,
    // Profile picture
    pub image_modal: Option<ImageModal>,
    pub uploader: AvatarUploader,
    pub avatar: AvatarSource,
    pub image_loader: ImageLoader,
    /// Texture for the current avatar source, keyed by that source.
    pub avatar_texture: Option<(String, egui::TextureHandle)>,
    /// localStorage stand-in, flushed to eframe storage on save.
    pub store: MemoryStore,
}

impl ResumeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let store = match cc.storage {
            Some(storage) => MemoryStore::hydrate(|key| storage.get_string(key)),
            None => MemoryStore::new(),
        };
        let avatar = AvatarSource::load(&store);
        let mut image_loader = ImageLoader::new(config.image_timeout);
        if let Some(key) = avatar.key() {
            image_loader.request(key);
        }

        let mut app = Self {
            carousel: Carousel::new(&config),
            provider: provider_for(&config),
            content: None,
            content_request: None,
            content_error: None,
            accordion: Accordion::default(),
            editor: None,
            editor_error: None,
            image_modal: None,
            uploader: AvatarUploader::new(config.max_upload_bytes, config.image_timeout),
            avatar,
            image_loader,
            avatar_texture: None,
            store,
            config,
        };
        app.load_content(&cc.egui_ctx);
        app
    }

    /// Navigation keys are ignored while a dialog has focus.
    pub fn modal_open(&self) -> bool {
        self.editor.is_some() || self.image_modal.is_some()
    }
}
