//! Per-frame camera snapshot.
//!
//! `FrameState` freezes the center-eye pose and the surface dimensions for
//! one frame, precomputing the terms both eyes share. It is immutable after
//! construction: `compute_eye` only ever reads it, so a snapshot taken at
//! the top of a frame yields a consistent pair no matter when each eye is
//! computed.

use glam::Vec3;

use super::config::StereoConfig;

/// Frozen center-eye pose plus derived per-frame terms.
///
/// Built exclusively by `StereoRig::update_pose`. The look direction and up
/// vector are stored as given; only the lateral offset derived from them is
/// normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    position: Vec3,
    look_dir: Vec3,
    up: Vec3,
    viewport_width: u32,
    viewport_height: u32,
    aspect_ratio: f32,
    half_height: f32,
    right_offset: Vec3,
}

impl FrameState {
    /// Snapshot a pose and derive the shared per-frame terms.
    ///
    /// A degenerate pose (look direction parallel to up, or either vector
    /// zero) collapses the lateral offset to zero: both eyes render from
    /// the center position and the output degrades to mono instead of
    /// failing the frame.
    pub(crate) fn new(
        config: &StereoConfig,
        viewport_width: u32,
        viewport_height: u32,
        position: Vec3,
        look_dir: Vec3,
        up: Vec3,
    ) -> Self {
        let full_width = viewport_width as f32;
        let eye_width = if config.mode().splits_viewport() {
            full_width / 2.0
        } else {
            full_width
        };
        let aspect_ratio = eye_width / viewport_height.max(1) as f32;

        // Half-height of the frustum window on the near plane
        let half_height = config.near() * (config.fov_y() * 0.5).tan();

        let right = look_dir.cross(up).normalize_or_zero();
        if right == Vec3::ZERO {
            crate::stereo_warn!(
                "stereo::FrameState",
                "Degenerate pose (look_dir {:?}, up {:?}): eye offset collapses to zero, rendering mono",
                look_dir,
                up
            );
        }
        let right_offset = right * (config.eye_separation() * 0.5);

        Self {
            position,
            look_dir,
            up,
            viewport_width,
            viewport_height,
            aspect_ratio,
            half_height,
            right_offset,
        }
    }

    /// Rebuild the snapshot under a new configuration, keeping the pose.
    pub(crate) fn reconfigure(&self, config: &StereoConfig) -> Self {
        Self::new(
            config,
            self.viewport_width,
            self.viewport_height,
            self.position,
            self.look_dir,
            self.up,
        )
    }

    // ===== GETTERS =====

    /// Center-eye position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Look direction, as given to `update_pose`.
    pub fn look_dir(&self) -> Vec3 {
        self.look_dir
    }

    /// Up vector, as given to `update_pose`.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Full surface width in pixels.
    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Full surface height in pixels.
    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Per-eye aspect ratio. Half the surface ratio in side-by-side modes.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Half-height of the frustum window on the near plane:
    /// `near * tan(fov_y / 2)`.
    pub fn half_height(&self) -> f32 {
        self.half_height
    }

    /// Offset from the center to the right eye. The left eye sits at the
    /// mirrored offset; its length is half the eye separation (or zero for
    /// a degenerate pose).
    pub fn right_offset(&self) -> Vec3 {
        self.right_offset
    }
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
