//! Arrow / button visibility policy.
//!
//! A pure function of the navigation state. Nothing is cached: callers
//! recompute whenever the state may have changed.

use super::CameraMode;

/// Which navigation affordances are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// Left arrow, moves to the next panel (index + 1).
    pub left_arrow: bool,
    /// Right arrow, moves to the previous panel (index - 1).
    pub right_arrow: bool,
    pub focus_exit_button: bool,
    /// Header and tab bar.
    pub chrome: bool,
}

impl Visibility {
    pub const HIDDEN_ARROWS_CAROUSEL: Self = Self {
        left_arrow: false,
        right_arrow: false,
        focus_exit_button: false,
        chrome: true,
    };
}

pub fn visibility(
    current_index: usize,
    last_index: usize,
    is_transitioning: bool,
    mode: CameraMode,
) -> Visibility {
    let focus = mode == CameraMode::Focus;
    let arrows = focus && !is_transitioning;
    Visibility {
        left_arrow: arrows && current_index != last_index,
        right_arrow: arrows && current_index != 0,
        focus_exit_button: focus,
        chrome: !focus,
    }
}
