//! Mock backend for unit tests (no graphics API required)
//!
//! Records every call as a readable command string plus a typed capture,
//! so tests can assert both ordering and exact values.

use glam::Vec3;

use crate::backend::{ColorMask, StereoBackend};
use crate::error::Result;
use crate::rig::{FrustumBounds, ViewportRect};

/// Backend that records calls instead of drawing
#[derive(Debug, Default)]
pub struct MockBackend {
    /// Every call in order, formatted for readable assertions
    pub commands: Vec<String>,
    /// Viewports received, in order
    pub viewports: Vec<ViewportRect>,
    /// Frusta received, in order
    pub frustums: Vec<FrustumBounds>,
    /// Camera poses received as (eye, target, up), in order
    pub poses: Vec<(Vec3, Vec3, Vec3)>,
    /// Color masks received, in order
    pub color_masks: Vec<ColorMask>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StereoBackend for MockBackend {
    fn set_viewport(&mut self, viewport: ViewportRect) -> Result<()> {
        self.commands.push(format!(
            "set_viewport {} {} {}x{}",
            viewport.x, viewport.y, viewport.width, viewport.height
        ));
        self.viewports.push(viewport);
        Ok(())
    }

    fn set_frustum(&mut self, frustum: FrustumBounds) -> Result<()> {
        self.commands.push(format!(
            "set_frustum x[{}, {}] y[{}, {}] z[{}, {}]",
            frustum.left, frustum.right, frustum.bottom, frustum.top, frustum.near, frustum.far
        ));
        self.frustums.push(frustum);
        Ok(())
    }

    fn set_camera_pose(&mut self, eye: Vec3, target: Vec3, up: Vec3) -> Result<()> {
        self.commands
            .push(format!("set_camera_pose {:?} to {:?} up {:?}", eye, target, up));
        self.poses.push((eye, target, up));
        Ok(())
    }

    fn set_color_mask(&mut self, mask: ColorMask) -> Result<()> {
        self.commands.push(format!("set_color_mask {:?}", mask));
        self.color_masks.push(mask);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_backend_tests.rs"]
mod tests;
