//! Per-frame driver.
//!
//! `Carousel` bundles the navigator and the motion controller. Each call to
//! `frame` is one iteration of the render loop: sync targets, advance motion,
//! feed the transitioning edge back to the navigator, then issue exactly one
//! draw call. The GUI calls it from its update callback; `run_frames` is the
//! same loop on a fixed-rate timer with a cancellation flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::animator::{MotionController, MotionSample};
use super::projection::{CameraPose, PanelTransform, Projection, Viewport};
use crate::config::AppConfig;
use crate::nav::{Direction, MotionEdge, NavigationState, Navigator, Visibility};

/// Everything a surface needs to paint one frame.
#[derive(Debug, Clone)]
pub struct FrameView {
    pub frame: u64,
    pub sample: MotionSample,
    pub camera: CameraPose,
    pub panels: Vec<PanelTransform>,
    pub visibility: Visibility,
    pub active_tab: usize,
    pub edge: MotionEdge,
}

/// Display surface the render loop draws onto.
pub trait DrawSurface {
    fn viewport(&self) -> Viewport;
    fn draw(&mut self, view: &FrameView);
}

pub struct Carousel {
    nav: Navigator,
    motion: MotionController,
    projection: Projection,
    frames: u64,
}

impl Carousel {
    pub fn new(cfg: &AppConfig) -> Self {
        Self {
            nav: Navigator::from_config(cfg),
            motion: MotionController::from_config(cfg),
            projection: Projection::new(cfg.fov_deg, cfg.panel_size),
            frames: 0,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn state(&self) -> NavigationState {
        self.nav.state()
    }

    pub fn sample(&self) -> MotionSample {
        self.motion.sample()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn select_panel(&mut self, id: &str) -> Option<usize> {
        self.nav.select_panel(id)
    }

    pub fn step(&mut self, direction: Direction) {
        self.nav.step(direction);
    }

    pub fn toggle_focus_mode(&mut self) {
        self.nav.toggle_focus_mode();
    }

    /// One render-loop iteration.
    pub fn frame(&mut self, surface: &mut dyn DrawSurface) -> MotionEdge {
        self.motion
            .set_scene_target(self.nav.state().scene_target_offset);
        self.motion.set_camera_target(self.nav.camera_depth_target());
        let sample = self.motion.advance();
        let edge = self.nav.observe_motion(self.motion.is_transitioning());
        if edge == MotionEdge::Settled {
            log::debug!(
                "settled on panel {} at offset {}",
                self.nav.current_index(),
                sample.scene_offset
            );
        }

        let viewport = surface.viewport();
        let panels = self
            .nav
            .registry()
            .iter()
            .enumerate()
            .map(|(i, p)| self.projection.project(i, p, sample, viewport))
            .collect();

        self.frames += 1;
        let view = FrameView {
            frame: self.frames,
            sample,
            camera: CameraPose::at_depth(sample.camera_depth),
            panels,
            visibility: self.nav.visibility(),
            active_tab: self.nav.active_tab(),
            edge,
        };
        surface.draw(&view);
        edge
    }
}

/// Drive `carousel` at a fixed interval until `cancel` is set.
///
/// Returns the number of frames rendered by this call.
pub fn run_frames(
    carousel: &mut Carousel,
    surface: &mut dyn DrawSurface,
    cancel: &AtomicBool,
    interval: Duration,
) -> u64 {
    let mut rendered = 0;
    while !cancel.load(Ordering::Relaxed) {
        carousel.frame(surface);
        rendered += 1;
        if !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records frames; raises the cancel flag after `stop_after` draws.
    struct Recorder<'a> {
        views: Vec<FrameView>,
        stop_after: usize,
        cancel: Option<&'a AtomicBool>,
    }

    impl<'a> Recorder<'a> {
        fn new() -> Self {
            Self {
                views: Vec::new(),
                stop_after: usize::MAX,
                cancel: None,
            }
        }
    }

    impl DrawSurface for Recorder<'_> {
        fn viewport(&self) -> Viewport {
            Viewport {
                width: 1280.0,
                height: 800.0,
            }
        }

        fn draw(&mut self, view: &FrameView) {
            self.views.push(view.clone());
            if self.views.len() >= self.stop_after {
                if let Some(flag) = self.cancel {
                    flag.store(true, Ordering::Relaxed);
                }
            }
        }
    }

    #[test]
    fn one_draw_per_frame() {
        let mut c = Carousel::new(&AppConfig::default());
        let mut rec = Recorder::new();
        for _ in 0..5 {
            c.frame(&mut rec);
        }
        assert_eq!(rec.views.len(), 5);
        assert_eq!(rec.views.last().map(|v| v.frame), Some(5));
        assert_eq!(c.frames(), 5);
    }

    #[test]
    fn edges_reported_once_per_transition() {
        let mut c = Carousel::new(&AppConfig::default());
        let mut rec = Recorder::new();
        c.select_panel("skills");
        let mut started = 0;
        let mut settled = 0;
        for _ in 0..1000 {
            match c.frame(&mut rec) {
                MotionEdge::Started => started += 1,
                MotionEdge::Settled => settled += 1,
                MotionEdge::Unchanged => {}
            }
        }
        assert_eq!((started, settled), (1, 1));
        assert_eq!(c.sample().scene_offset, 2000.0);
        assert!(!c.state().is_transitioning);
        let last = rec.views.last().unwrap();
        assert_eq!(last.active_tab, 2);
        assert!((last.panels[2].center[0] - 640.0).abs() < 1e-3);
    }

    #[test]
    fn camera_pose_follows_focus() {
        let mut c = Carousel::new(&AppConfig::default());
        let mut rec = Recorder::new();
        c.toggle_focus_mode();
        for _ in 0..500 {
            c.frame(&mut rec);
        }
        let last = rec.views.last().unwrap();
        assert_eq!(last.camera.position, [0.0, 0.0, 800.0]);
        assert_eq!(last.camera.look_at, [0.0, 0.0, 0.0]);
        assert!(last.visibility.focus_exit_button);
        assert!(!last.visibility.chrome);
    }

    #[test]
    fn run_frames_stops_on_cancel() {
        let cancel = AtomicBool::new(false);
        let mut c = Carousel::new(&AppConfig::default());
        let mut rec = Recorder::new();
        rec.stop_after = 3;
        rec.cancel = Some(&cancel);
        let n = run_frames(&mut c, &mut rec, &cancel, Duration::ZERO);
        assert_eq!(n, 3);
        assert_eq!(rec.views.len(), 3);
    }

    #[test]
    fn run_frames_with_cancel_already_set_draws_nothing() {
        let cancel = AtomicBool::new(true);
        let mut c = Carousel::new(&AppConfig::default());
        let mut rec = Recorder::new();
        assert_eq!(run_frames(&mut c, &mut rec, &cancel, Duration::ZERO), 0);
        assert!(rec.views.is_empty());
    }
}
