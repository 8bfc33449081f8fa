//! Application configuration.
//!
//! Plain data with sensible defaults and `with_*` builders. Two environment
//! overrides exist: `RESUME_CONTENT_PATH` swaps the embedded résumé for a
//! JSON file on disk, and `RESUME_RESTORE_EDITS=1` reopens the last
//! control panel save instead of the provider's content.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming a JSON content file.
pub const CONTENT_PATH_ENV: &str = "RESUME_CONTENT_PATH";
/// Environment flag enabling `restore_saved_content`.
pub const RESTORE_EDITS_ENV: &str = "RESUME_RESTORE_EDITS";

/// Distance between neighbouring panels along the navigation axis.
pub const PANEL_GAP: f32 = 1000.0;
/// Camera depth while browsing (chrome visible).
pub const CAMERA_DEPTH_CAROUSEL: f32 = 1200.0;
/// Camera depth while reading a single panel.
pub const CAMERA_DEPTH_FOCUS: f32 = 800.0;
/// Per-frame smoothing factor.
pub const SMOOTHING: f32 = 0.05;
/// Distance below which a channel snaps onto its target.
pub const SNAP_THRESHOLD: f32 = 0.1;
/// Largest local file accepted as a profile picture (2 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub panel_gap: f32,
    pub smoothing: f32,
    pub snap_threshold: f32,
    pub carousel_depth: f32,
    pub focus_depth: f32,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// World-space panel size (width, height).
    pub panel_size: [f32; 2],
    pub max_upload_bytes: u64,
    /// Deadline for the content provider.
    pub content_timeout: Duration,
    /// Latency simulated by the built-in provider.
    pub simulated_latency: Duration,
    /// Deadline for downloading a remote profile picture.
    pub image_timeout: Duration,
    /// Load content from this JSON file instead of the embedded résumé.
    pub content_path: Option<PathBuf>,
    /// Reopen the last saved edits instead of the provider's content.
    pub restore_saved_content: bool,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            panel_gap: PANEL_GAP,
            smoothing: SMOOTHING,
            snap_threshold: SNAP_THRESHOLD,
            carousel_depth: CAMERA_DEPTH_CAROUSEL,
            focus_depth: CAMERA_DEPTH_FOCUS,
            fov_deg: 50.0,
            panel_size: [760.0, 560.0],
            max_upload_bytes: MAX_UPLOAD_BYTES,
            content_timeout: Duration::from_secs(5),
            simulated_latency: Duration::from_millis(10),
            image_timeout: Duration::from_secs(10),
            content_path: None,
            restore_saved_content: false,
            window_size: [1280.0, 800.0],
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults plus the environment overrides, when set.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(path) = std::env::var(CONTENT_PATH_ENV) {
            let path = path.trim();
            if !path.is_empty() {
                log::info!("Using content file from {}: {}", CONTENT_PATH_ENV, path);
                cfg.content_path = Some(PathBuf::from(path));
            }
        }
        if let Ok(flag) = std::env::var(RESTORE_EDITS_ENV) {
            cfg.restore_saved_content = parse_flag(&flag);
        }
        cfg
    }

    pub fn with_panel_gap(mut self, gap: f32) -> Self {
        self.panel_gap = gap;
        self
    }

    pub fn with_camera_depths(mut self, carousel: f32, focus: f32) -> Self {
        self.carousel_depth = carousel;
        self.focus_depth = focus;
        self
    }

    pub fn with_content_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_path = Some(path.into());
        self
    }

    pub fn with_content_timeout(mut self, timeout: Duration) -> Self {
        self.content_timeout = timeout;
        self
    }

    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    pub fn with_max_upload_bytes(mut self, bytes: u64) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    pub fn with_restore_saved_content(mut self, enabled: bool) -> Self {
        self.restore_saved_content = enabled;
        self
    }
}

/// `1`, `true`, `yes` and `on` (any case) enable a flag.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_layout_constants() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.panel_gap, 1000.0);
        assert_eq!(cfg.carousel_depth, 1200.0);
        assert_eq!(cfg.focus_depth, 800.0);
        assert_eq!(cfg.max_upload_bytes, 2 * 1024 * 1024);
        assert!(cfg.content_path.is_none());
    }

    #[test]
    fn builders_override_fields() {
        let cfg = AppConfig::new()
            .with_panel_gap(500.0)
            .with_camera_depths(900.0, 400.0)
            .with_content_path("/tmp/resume.json")
            .with_restore_saved_content(true);
        assert_eq!(cfg.panel_gap, 500.0);
        assert_eq!(cfg.carousel_depth, 900.0);
        assert_eq!(cfg.focus_depth, 400.0);
        assert_eq!(cfg.content_path, Some(PathBuf::from("/tmp/resume.json")));
        assert!(cfg.restore_saved_content);
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("on"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("nope"));
    }
}
