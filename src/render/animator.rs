/// Camera / scene motion controller.
///
/// Two scalar channels chase their targets with single-pole exponential
/// smoothing, one step per rendered frame:
/// - Scene offset: horizontal translation of the whole panel strip
/// - Camera depth: distance of the camera from the panel plane
///
/// A channel within the snap threshold jumps exactly onto its target, so a
/// transition always ends after a bounded number of frames.

use crate::config::{AppConfig, SMOOTHING, SNAP_THRESHOLD};

/// Actual (not target) motion values for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    pub scene_offset: f32,
    pub camera_depth: f32,
}

/// One smoothed scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothed {
    pub actual: f32,
    pub target: f32,
}

impl Smoothed {
    pub fn at(value: f32) -> Self {
        Self {
            actual: value,
            target: value,
        }
    }

    /// Advance one frame. Returns `true` while still moving.
    pub fn step(&mut self, k: f32, snap: f32) -> bool {
        let delta = self.target - self.actual;
        if delta.abs() > snap {
            self.actual += delta * k;
            true
        } else {
            self.actual = self.target;
            false
        }
    }

    pub fn is_settled(&self) -> bool {
        self.actual == self.target
    }
}

#[derive(Debug, Clone)]
pub struct MotionController {
    scene: Smoothed,
    camera: Smoothed,
    k: f32,
    snap: f32,
    transitioning: bool,
}

impl MotionController {
    pub fn new(scene_offset: f32, camera_depth: f32) -> Self {
        Self {
            scene: Smoothed::at(scene_offset),
            camera: Smoothed::at(camera_depth),
            k: SMOOTHING,
            snap: SNAP_THRESHOLD,
            transitioning: false,
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            k: cfg.smoothing,
            snap: cfg.snap_threshold,
            ..Self::new(0.0, cfg.carousel_depth)
        }
    }

    pub fn set_scene_target(&mut self, offset: f32) {
        self.scene.target = offset;
    }

    pub fn set_camera_target(&mut self, depth: f32) {
        self.camera.target = depth;
    }

    pub fn camera(&self) -> Smoothed {
        self.camera
    }

    /// Whether the scene channel had not yet snapped after the last `advance`.
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn sample(&self) -> MotionSample {
        MotionSample {
            scene_offset: self.scene.actual,
            camera_depth: self.camera.actual,
        }
    }

    /// One frame of smoothing for both channels.
    pub fn advance(&mut self) -> MotionSample {
        self.transitioning = self.scene.step(self.k, self.snap);
        self.camera.step(self.k, self.snap);
        self.sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_five_percent_per_frame() {
        let mut m = MotionController::new(0.0, 1200.0);
        m.set_scene_target(1000.0);
        let s = m.advance();
        assert!((s.scene_offset - 50.0).abs() < 1e-3);
        assert!(m.is_transitioning());
        let s = m.advance();
        assert!((s.scene_offset - 97.5).abs() < 1e-3);
    }

    #[test]
    fn snaps_exactly_within_threshold() {
        let mut m = MotionController::new(999.95, 1200.0);
        m.set_scene_target(1000.0);
        let s = m.advance();
        assert_eq!(s.scene_offset, 1000.0);
        assert!(!m.is_transitioning());
    }

    #[test]
    fn converges_in_bounded_frames() {
        let mut m = MotionController::new(0.0, 1200.0);
        m.set_scene_target(3000.0);
        m.set_camera_target(800.0);
        let mut frames = 0;
        loop {
            m.advance();
            frames += 1;
            if !m.is_transitioning() && m.camera().is_settled() {
                break;
            }
            assert!(frames < 1000, "motion never settled");
        }
        assert_eq!(m.sample().scene_offset, 3000.0);
        assert_eq!(m.sample().camera_depth, 800.0);
    }

    #[test]
    fn camera_motion_does_not_mark_transition() {
        let mut m = MotionController::new(0.0, 1200.0);
        m.set_camera_target(800.0);
        m.advance();
        assert!(!m.is_transitioning());
        assert!(m.camera().actual < 1200.0);
    }
}
