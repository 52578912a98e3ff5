//! StereoRig - per-eye viewing geometry from a single center pose.
//!
//! The rig owns a validated `StereoConfig` and, once a pose has been set,
//! an immutable `FrameState` snapshot. All mutation happens in
//! `update_pose` and `set_config`; `compute_eye` is a pure read, so the
//! two eyes of a frame always agree no matter the order or timing of the
//! calls. The rig never talks to the GPU: it produces directives that
//! the host applies through the `StereoBackend` boundary.

use glam::Vec3;

use crate::backend::{ColorMask, StereoBackend};
use crate::error::{Error, Result};

use super::config::StereoConfig;
use super::eye::{Eye, EyeRenderParams, FrustumBounds, ViewportRect};
use super::frame::FrameState;

/// Computes per-eye viewports, off-axis frusta, and eye poses.
///
/// Per-frame protocol: `update_pose` once, then `compute_eye` (or
/// `render_eye`) for each eye, then `end_stereo` if color masks were
/// touched. Requesting an eye before the first pose fails with
/// `Error::UninitializedFrame`.
///
/// # Example
///
/// ```
/// use stereo_rig::stereo::{Eye, StereoConfig, StereoRig};
/// use stereo_rig::glam::Vec3;
///
/// let config = StereoConfig::default();
/// let mut rig = StereoRig::new(config);
/// rig.update_pose(1920, 1080, Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
///
/// let left = rig.compute_eye(Eye::Left)?;
/// let right = rig.compute_eye(Eye::Right)?;
///
/// // The eyes straddle the center pose symmetrically
/// assert_eq!(left.eye_position.x, -right.eye_position.x);
/// # Ok::<(), stereo_rig::stereo::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct StereoRig {
    config: StereoConfig,
    frame: Option<FrameState>,
}

impl StereoRig {
    /// Create a rig from a validated configuration.
    ///
    /// No pose is set yet: call `update_pose` before computing eyes.
    pub fn new(config: StereoConfig) -> Self {
        Self { config, frame: None }
    }

    /// Current configuration.
    pub fn config(&self) -> &StereoConfig {
        &self.config
    }

    /// Current frame snapshot, if `update_pose` has run.
    pub fn frame(&self) -> Option<&FrameState> {
        self.frame.as_ref()
    }

    /// Replace the configuration.
    ///
    /// An existing frame snapshot is rebuilt under the new configuration,
    /// so a mode or separation change takes effect on the very next
    /// `compute_eye` without waiting for a new pose.
    pub fn set_config(&mut self, config: StereoConfig) {
        self.frame = self.frame.map(|frame| frame.reconfigure(&config));
        crate::stereo_debug!(
            "stereo::StereoRig",
            "Configuration replaced: mode {:?}, separation {:.4}, convergence {:.4}",
            config.mode(),
            config.eye_separation(),
            config.convergence()
        );
        self.config = config;
    }

    /// Snapshot the center-eye pose for this frame.
    ///
    /// `look_dir` and `up` need not be normalized; the lateral eye axis is
    /// normalized internally. A degenerate pose (look direction parallel
    /// to up, or either vector zero) renders mono from the center position
    /// rather than failing.
    pub fn update_pose(
        &mut self,
        viewport_width: u32,
        viewport_height: u32,
        position: Vec3,
        look_dir: Vec3,
        up: Vec3,
    ) {
        crate::stereo_trace!(
            "stereo::StereoRig",
            "update_pose: {}x{}, position {:?}",
            viewport_width,
            viewport_height,
            position
        );
        self.frame = Some(FrameState::new(
            &self.config,
            viewport_width,
            viewport_height,
            position,
            look_dir,
            up,
        ));
    }

    /// Compute the render directive for one eye of the current frame.
    ///
    /// Pure with respect to the rig: calling it any number of times, in
    /// any eye order, returns identical values until the next
    /// `update_pose` or `set_config`.
    pub fn compute_eye(&self, eye: Eye) -> Result<EyeRenderParams> {
        let frame = match self.frame.as_ref() {
            Some(frame) => frame,
            None => {
                crate::stereo_error!(
                    "stereo::StereoRig",
                    "compute_eye({:?}) called before update_pose()",
                    eye
                );
                return Err(Error::UninitializedFrame);
            }
        };

        let s = eye.sign();

        // Viewport: side-by-side halves for Passive, full surface otherwise
        let viewport = if self.config.mode().splits_viewport() {
            let half = frame.viewport_width() / 2;
            ViewportRect {
                x: match eye {
                    Eye::Left => 0,
                    Eye::Right => half as i32,
                },
                y: 0,
                width: half,
                height: frame.viewport_height(),
            }
        } else {
            ViewportRect {
                x: 0,
                y: 0,
                width: frame.viewport_width(),
                height: frame.viewport_height(),
            }
        };

        // Off-axis frustum: the near-plane window shifts opposite the eye,
        // so both view volumes cross at the convergence plane
        let half_height = frame.half_height();
        let half_width = frame.aspect_ratio() * half_height;
        let shift = self.config.frustum_shift();
        let frustum = FrustumBounds {
            left: -half_width - s * shift,
            right: half_width - s * shift,
            bottom: -half_height,
            top: half_height,
            near: self.config.near(),
            far: self.config.far(),
        };

        // Eye pose: slide along the lateral axis, keep the look direction
        let eye_position = frame.position() + frame.right_offset() * s;
        let look_target = eye_position + frame.look_dir();

        Ok(EyeRenderParams {
            eye,
            viewport,
            frustum,
            eye_position,
            look_target,
            up: frame.up(),
        })
    }

    /// Compute one eye and apply it to the backend in one call.
    pub fn render_eye(&self, eye: Eye, backend: &mut dyn StereoBackend) -> Result<()> {
        self.compute_eye(eye)?.apply(backend)
    }

    /// Restore writes to all color channels after a stereo pair.
    ///
    /// Hosts that masked channels for anaglyph output call this once the
    /// second eye has been drawn; for other modes it is a harmless no-op
    /// on well-behaved backends.
    pub fn end_stereo(&self, backend: &mut dyn StereoBackend) -> Result<()> {
        backend.set_color_mask(ColorMask::ALL)
    }
}

#[cfg(test)]
#[path = "rig_tests.rs"]
mod tests;
