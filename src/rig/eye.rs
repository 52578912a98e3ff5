//! Per-eye render directive types.
//!
//! `StereoRig::compute_eye` returns an `EyeRenderParams` value: plain data
//! describing where one eye draws, how it projects, and where it stands.
//! Hosts either feed it to a `StereoBackend` via `apply()` or consume the
//! matrix helpers directly. The wire structs are `Pod`, so uniform-buffer
//! uploads can cast them without copying field by field.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

use crate::backend::StereoBackend;
use crate::error::Result;

/// Which eye of the stereo pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eye {
    Left,
    Right,
}

impl Eye {
    /// Both eyes in render order.
    pub const BOTH: [Eye; 2] = [Eye::Left, Eye::Right];

    /// Mirror sign for the off-axis formulas: -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Eye::Left => -1.0,
            Eye::Right => 1.0,
        }
    }
}

/// Pixel rectangle of the display surface targeted by one eye.
///
/// Origin at the surface's lower-left corner, matching viewport conventions
/// of the common graphics APIs.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct ViewportRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Near-plane window and depth range of a perspective frustum.
///
/// `left`, `right`, `bottom`, `top` bound the frustum window on the near
/// plane in view space. A window centered on the view axis gives an
/// ordinary symmetric perspective; the per-eye windows are shifted
/// laterally, which is what makes the stereo projection off-axis.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrustumBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl FrustumBounds {
    /// Perspective projection matrix for these bounds.
    ///
    /// Right-handed view space, depth mapped to [0, 1]. For a symmetric
    /// window this is identical to `Mat4::perspective_rh` with the
    /// equivalent FOV and aspect ratio; asymmetric windows add the
    /// off-center skew terms.
    pub fn projection_matrix(&self) -> Mat4 {
        let two_near = 2.0 * self.near;
        let rw = 1.0 / (self.right - self.left);
        let rh = 1.0 / (self.top - self.bottom);
        let rd = 1.0 / (self.near - self.far);

        Mat4::from_cols(
            Vec4::new(two_near * rw, 0.0, 0.0, 0.0),
            Vec4::new(0.0, two_near * rh, 0.0, 0.0),
            Vec4::new(
                (self.right + self.left) * rw,
                (self.top + self.bottom) * rh,
                self.far * rd,
                -1.0,
            ),
            Vec4::new(0.0, 0.0, self.near * self.far * rd, 0.0),
        )
    }

    /// Width of the frustum window on the near plane.
    pub fn window_width(&self) -> f32 {
        self.right - self.left
    }

    /// Lateral center of the frustum window on the near plane. Zero for a
    /// symmetric projection, nonzero for the per-eye windows.
    pub fn window_center_x(&self) -> f32 {
        0.5 * (self.left + self.right)
    }
}

/// Complete render directive for one eye.
///
/// Where to draw (`viewport`), how to project (`frustum`), and where to
/// stand (`eye_position`, `look_target`, `up`). Pure data: applying it to
/// a backend or turning it into matrices is up to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeRenderParams {
    pub eye: Eye,
    pub viewport: ViewportRect,
    pub frustum: FrustumBounds,
    pub eye_position: Vec3,
    pub look_target: Vec3,
    pub up: Vec3,
}

impl EyeRenderParams {
    /// View matrix for this eye (`Mat4::look_at_rh`).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position, self.look_target, self.up)
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.frustum.projection_matrix() * self.view_matrix()
    }

    /// Issue this directive to a backend: viewport, then frustum, then
    /// camera pose. Stops at the first failing call.
    pub fn apply(&self, backend: &mut dyn StereoBackend) -> Result<()> {
        backend.set_viewport(self.viewport)?;
        backend.set_frustum(self.frustum)?;
        backend.set_camera_pose(self.eye_position, self.look_target, self.up)
    }
}

#[cfg(test)]
#[path = "eye_tests.rs"]
mod tests;
