//! Perspective projection of the panel plane.
//!
//! The camera sits on the Z axis at `camera_depth`, always looking at the
//! origin, and the panels lie in the z = 0 plane. Under that setup a panel
//! is a screen-aligned rectangle whose scale is `focal / depth`.

use super::animator::MotionSample;
use crate::panel::PanelDescriptor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Camera position and its fixed look-at point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: [f32; 3],
    pub look_at: [f32; 3],
}

impl CameraPose {
    pub fn at_depth(depth: f32) -> Self {
        Self {
            position: [0.0, 0.0, depth],
            look_at: [0.0, 0.0, 0.0],
        }
    }
}

/// Screen placement of one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelTransform {
    pub index: usize,
    pub center: [f32; 2],
    pub size: [f32; 2],
    pub scale: f32,
    /// Any part of the panel overlaps the viewport.
    pub on_screen: bool,
}

impl PanelTransform {
    pub fn min(&self) -> [f32; 2] {
        [
            self.center[0] - self.size[0] * 0.5,
            self.center[1] - self.size[1] * 0.5,
        ]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub fov_deg: f32,
    /// World-space panel size.
    pub panel_size: [f32; 2],
}

impl Projection {
    pub fn new(fov_deg: f32, panel_size: [f32; 2]) -> Self {
        Self {
            fov_deg,
            panel_size,
        }
    }

    /// Focal length in pixels for the viewport height.
    pub fn focal(&self, viewport: Viewport) -> f32 {
        let half_fov = (self.fov_deg * 0.5).to_radians();
        (viewport.height * 0.5) / half_fov.tan()
    }

    pub fn scale(&self, viewport: Viewport, camera_depth: f32) -> f32 {
        if camera_depth <= f32::EPSILON {
            return 0.0;
        }
        self.focal(viewport) / camera_depth
    }

    pub fn project(
        &self,
        index: usize,
        panel: &PanelDescriptor,
        sample: MotionSample,
        viewport: Viewport,
    ) -> PanelTransform {
        let scale = self.scale(viewport, sample.camera_depth);
        let world_x = panel.world_x() + sample.scene_offset;
        let center = [
            viewport.width * 0.5 + world_x * scale,
            viewport.height * 0.5,
        ];
        let size = [self.panel_size[0] * scale, self.panel_size[1] * scale];
        let on_screen = center[0] + size[0] * 0.5 >= 0.0
            && center[0] - size[0] * 0.5 <= viewport.width
            && scale > 0.0;
        PanelTransform {
            index,
            center,
            size,
            scale,
            on_screen,
        }
    }
}
