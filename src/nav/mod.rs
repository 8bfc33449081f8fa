//! Panel navigation state machine.
//!
//! Maps discrete user intents (step, direct selection, focus toggle) onto
//! motion targets and UI flags. The state is owned by one `Navigator` and
//! mutated only through its methods; the render loop reads the targets every
//! frame and reports motion edges back through `observe_motion`.

pub mod visibility;

use crate::config::AppConfig;
use crate::panel::PanelRegistry;

pub use visibility::{visibility, Visibility};

/// Camera distance preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Far camera, chrome visible, horizontal browsing.
    #[default]
    Carousel,
    /// Near camera, chrome hidden, reading one panel.
    Focus,
}

/// Directional step request.
///
/// The convention is inverted relative to panel indices: panels run along
/// negative X, so moving the view to the visual right means going back to a
/// lower index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// ArrowRight / right arrow button: index - 1.
    Right,
    /// ArrowLeft / left arrow button: index + 1.
    Left,
}

/// Edge observed on the transitioning flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionEdge {
    Started,
    Settled,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationState {
    pub scene_target_offset: f32,
    pub is_transitioning: bool,
    pub camera_mode: CameraMode,
}

pub struct Navigator {
    registry: PanelRegistry,
    state: NavigationState,
    carousel_depth: f32,
    focus_depth: f32,
    /// Panel whose tab indicator is highlighted.
    active_tab: usize,
    visibility: Visibility,
}

impl Navigator {
    pub fn new(registry: PanelRegistry, carousel_depth: f32, focus_depth: f32) -> Self {
        let scene_target_offset = registry.get(0).map(|p| p.offset).unwrap_or(0.0);
        let mut nav = Self {
            registry,
            state: NavigationState {
                scene_target_offset,
                is_transitioning: false,
                camera_mode: CameraMode::Carousel,
            },
            carousel_depth,
            focus_depth,
            active_tab: 0,
            visibility: Visibility::HIDDEN_ARROWS_CAROUSEL,
        };
        nav.refresh_visibility();
        nav
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(
            PanelRegistry::new(cfg.panel_gap),
            cfg.carousel_depth,
            cfg.focus_depth,
        )
    }

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.state.camera_mode
    }

    pub fn camera_depth_target(&self) -> f32 {
        match self.state.camera_mode {
            CameraMode::Carousel => self.carousel_depth,
            CameraMode::Focus => self.focus_depth,
        }
    }

    /// Index derived from the current scene target.
    pub fn current_index(&self) -> usize {
        self.registry.index_for_offset(self.state.scene_target_offset)
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    /// Visibility as of the last recomputation.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Fly to the panel with `id`. `None` when the id is not registered.
    pub fn select_panel(&mut self, id: &str) -> Option<usize> {
        let index = self.registry.index_of(id)?;
        let offset = self.registry.offset_of(index);
        if offset != self.state.scene_target_offset {
            log::debug!("select_panel: {} (index {})", id, index);
        }
        self.state.scene_target_offset = offset;
        self.active_tab = index;
        Some(index)
    }

    /// Move one panel in `direction`. Ignored while a transition is running.
    pub fn step(&mut self, direction: Direction) {
        if self.state.is_transitioning {
            return;
        }
        let current = self.current_index();
        let next = match direction {
            Direction::Right => current.saturating_sub(1),
            Direction::Left => (current + 1).min(self.registry.last_index()),
        };
        if next == current {
            return;
        }
        if let Some(id) = self.registry.get(next).map(|p| p.id) {
            self.select_panel(id);
        }
    }

    /// Flip between carousel and focus. Returns the new mode.
    pub fn toggle_focus_mode(&mut self) -> CameraMode {
        self.state.camera_mode = match self.state.camera_mode {
            CameraMode::Carousel => CameraMode::Focus,
            CameraMode::Focus => CameraMode::Carousel,
        };
        log::debug!("camera mode -> {:?}", self.state.camera_mode);
        self.refresh_visibility();
        self.state.camera_mode
    }

    /// Record the motion controller's transitioning flag after a frame.
    ///
    /// A rising edge hides the arrows at once; a falling edge is the only
    /// point where the idle state becomes visible again.
    pub fn observe_motion(&mut self, transitioning: bool) -> MotionEdge {
        let was = self.state.is_transitioning;
        self.state.is_transitioning = transitioning;
        match (was, transitioning) {
            (false, true) => {
                self.visibility.left_arrow = false;
                self.visibility.right_arrow = false;
                MotionEdge::Started
            }
            (true, false) => {
                self.refresh_visibility();
                MotionEdge::Settled
            }
            _ => MotionEdge::Unchanged,
        }
    }

    fn refresh_visibility(&mut self) {
        self.visibility = visibility(
            self.current_index(),
            self.registry.last_index(),
            self.state.is_transitioning,
            self.state.camera_mode,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::animator::MotionController;

    fn navigator() -> Navigator {
        Navigator::new(PanelRegistry::new(1000.0), 1200.0, 800.0)
    }

    /// Run frames until the scene settles, mirroring the render loop.
    fn settle(nav: &mut Navigator, motion: &mut MotionController) {
        for _ in 0..2000 {
            motion.set_scene_target(nav.state().scene_target_offset);
            motion.set_camera_target(nav.camera_depth_target());
            motion.advance();
            nav.observe_motion(motion.is_transitioning());
            if !motion.is_transitioning() {
                return;
            }
        }
        panic!("transition never settled");
    }

    #[test]
    fn initial_state() {
        let nav = navigator();
        let s = nav.state();
        assert_eq!(s.scene_target_offset, 0.0);
        assert!(!s.is_transitioning);
        assert_eq!(s.camera_mode, CameraMode::Carousel);
        assert_eq!(nav.camera_depth_target(), 1200.0);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn select_panel_converges_for_every_index() {
        let mut nav = navigator();
        let mut motion = MotionController::new(0.0, 1200.0);
        let ids: Vec<&str> = nav.registry().iter().map(|p| p.id).collect();
        for (i, id) in ids.iter().enumerate().rev().chain(ids.iter().enumerate()) {
            assert_eq!(nav.select_panel(id), Some(i));
            assert_eq!(nav.active_tab(), i);
            settle(&mut nav, &mut motion);
            assert_eq!(motion.sample().scene_offset, nav.registry().offset_of(i));
            assert_eq!(nav.current_index(), i);
        }
    }

    #[test]
    fn step_converges_for_every_reachable_index() {
        let mut nav = navigator();
        let mut motion = MotionController::new(0.0, 1200.0);
        for expected in 1..=3 {
            nav.step(Direction::Left);
            settle(&mut nav, &mut motion);
            assert_eq!(nav.current_index(), expected);
            assert_eq!(motion.sample().scene_offset, 1000.0 * expected as f32);
        }
        for expected in (0..3).rev() {
            nav.step(Direction::Right);
            settle(&mut nav, &mut motion);
            assert_eq!(nav.current_index(), expected);
            assert_eq!(motion.sample().scene_offset, 1000.0 * expected as f32);
        }
    }

    #[test]
    fn unknown_panel_is_not_found() {
        let mut nav = navigator();
        assert_eq!(nav.select_panel("hobbies"), None);
        assert_eq!(nav.state().scene_target_offset, 0.0);
    }

    #[test]
    fn reselecting_current_panel_starts_no_transition() {
        let mut nav = navigator();
        let mut motion = MotionController::new(0.0, 1200.0);
        assert_eq!(nav.select_panel("summary"), Some(0));
        motion.set_scene_target(nav.state().scene_target_offset);
        motion.advance();
        assert_eq!(nav.observe_motion(motion.is_transitioning()), MotionEdge::Unchanged);
        assert!(!nav.state().is_transitioning);
    }

    #[test]
    fn step_is_debounced_while_transitioning() {
        let mut nav = navigator();
        let mut motion = MotionController::new(0.0, 1200.0);
        nav.step(Direction::Left);
        motion.set_scene_target(nav.state().scene_target_offset);
        motion.advance();
        assert_eq!(nav.observe_motion(motion.is_transitioning()), MotionEdge::Started);

        let before = nav.state().scene_target_offset;
        nav.step(Direction::Left);
        assert_eq!(nav.state().scene_target_offset, before);
        nav.step(Direction::Right);
        assert_eq!(nav.state().scene_target_offset, before);
    }

    #[test]
    fn steps_clamp_at_both_ends() {
        let mut nav = navigator();
        nav.step(Direction::Right);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.state().scene_target_offset, 0.0);

        nav.select_panel("education");
        nav.step(Direction::Left);
        assert_eq!(nav.current_index(), 3);
        assert_eq!(nav.state().scene_target_offset, 3000.0);
    }

    #[test]
    fn focus_toggle_swaps_depth_and_chrome() {
        let mut nav = navigator();
        assert_eq!(nav.toggle_focus_mode(), CameraMode::Focus);
        assert_eq!(nav.camera_depth_target(), 800.0);
        assert!(!nav.visibility().chrome);
        assert!(nav.visibility().focus_exit_button);

        assert_eq!(nav.toggle_focus_mode(), CameraMode::Carousel);
        assert_eq!(nav.camera_depth_target(), 1200.0);
        assert!(nav.visibility().chrome);
        assert!(!nav.visibility().focus_exit_button);
    }

    #[test]
    fn arrows_hide_on_start_and_return_on_settle() {
        let mut nav = navigator();
        let mut motion = MotionController::new(0.0, 1200.0);
        nav.toggle_focus_mode();
        assert!(nav.visibility().left_arrow);
        assert!(!nav.visibility().right_arrow);

        nav.step(Direction::Left);
        motion.set_scene_target(nav.state().scene_target_offset);
        motion.advance();
        assert_eq!(nav.observe_motion(true), MotionEdge::Started);
        assert!(!nav.visibility().left_arrow);
        assert!(!nav.visibility().right_arrow);

        settle(&mut nav, &mut motion);
        assert!(nav.visibility().left_arrow);
        assert!(nav.visibility().right_arrow);
    }

    #[test]
    fn focus_then_step_right_at_first_panel_is_noop() {
        let mut nav = navigator();
        let mut motion = MotionController::new(0.0, 1200.0);
        nav.toggle_focus_mode();
        assert_eq!(nav.camera_mode(), CameraMode::Focus);
        assert_eq!(nav.camera_depth_target(), 800.0);

        // Right decrements the index; already at 0.
        nav.step(Direction::Right);
        assert_eq!(nav.state().scene_target_offset, 0.0);

        // Left is the direction that advances.
        nav.step(Direction::Left);
        assert_eq!(nav.state().scene_target_offset, 1000.0);
        settle(&mut nav, &mut motion);
        assert_eq!(nav.current_index(), 1);
        assert_eq!(motion.sample().camera_depth, 800.0);
    }
}
