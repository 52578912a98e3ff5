//! Stereo configuration - display mode and viewing geometry.
//!
//! A `StereoConfig` is validated at construction and immutable afterwards,
//! so every downstream computation can trust its values. Constructors cover
//! the common ways hosts pick parameters: explicit separation, explicit
//! convergence, or both derived from the depth range.

use crate::error::{Error, Result};
use std::f32::consts::PI;

/// Convergence-to-separation ratio used by the derived constructors.
///
/// An empirical 30:1 default for comfortable viewing: the plane of zero
/// parallax sits thirty eye separations in front of the viewer.
pub const CONVERGENCE_RATIO: f32 = 30.0;

/// How the stereo pair reaches the display.
///
/// Determines viewport partitioning and aspect ratio. For the anaglyph
/// modes the first color names the left-eye filter; the rig itself never
/// selects color channels, it only reports the mode so the host can set
/// its own per-eye masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Alternating full-surface frames for shutter glasses
    Active,

    /// Side-by-side halves of a single surface
    Passive,

    /// Red filter on the left eye, cyan on the right
    AnaglyphRedCyan,

    /// Cyan filter on the left eye, red on the right
    AnaglyphCyanRed,

    /// Red filter on the left eye, blue on the right
    AnaglyphRedBlue,

    /// Blue filter on the left eye, red on the right
    AnaglyphBlueRed,
}

impl DisplayMode {
    /// True for modes that split the surface side-by-side, halving the
    /// per-eye width (and with it the aspect ratio).
    pub fn splits_viewport(self) -> bool {
        matches!(self, DisplayMode::Passive)
    }

    /// True for the color-filter modes. These render both eyes across the
    /// full surface; channel selection happens in the host.
    pub fn is_anaglyph(self) -> bool {
        matches!(
            self,
            DisplayMode::AnaglyphRedCyan
                | DisplayMode::AnaglyphCyanRed
                | DisplayMode::AnaglyphRedBlue
                | DisplayMode::AnaglyphBlueRed
        )
    }
}

/// Validated stereo viewing parameters.
///
/// Distances share one world unit; `fov_y` is the full vertical field of
/// view in radians (callers with degrees convert via `f32::to_radians`).
///
/// # Example
///
/// ```
/// use stereo_rig::stereo::{DisplayMode, StereoConfig};
///
/// let config = StereoConfig::new(
///     0.065,
///     45.0_f32.to_radians(),
///     0.1,
///     100.0,
///     DisplayMode::Active,
/// )?;
/// assert!((config.convergence() - 1.95).abs() < 1e-6);
/// # Ok::<(), stereo_rig::stereo::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoConfig {
    eye_separation: f32,
    fov_y: f32,
    near: f32,
    far: f32,
    convergence: f32,
    mode: DisplayMode,
}

impl StereoConfig {
    /// Create a configuration from an explicit eye separation.
    ///
    /// The convergence plane is derived as `eye_separation * CONVERGENCE_RATIO`.
    pub fn new(
        eye_separation: f32,
        fov_y: f32,
        near: f32,
        far: f32,
        mode: DisplayMode,
    ) -> Result<Self> {
        Self::with_convergence(eye_separation, fov_y, near, far, eye_separation * CONVERGENCE_RATIO, mode)
    }

    /// Create a configuration with both separation and convergence explicit.
    pub fn with_convergence(
        eye_separation: f32,
        fov_y: f32,
        near: f32,
        far: f32,
        convergence: f32,
        mode: DisplayMode,
    ) -> Result<Self> {
        let config = Self {
            eye_separation,
            fov_y,
            near,
            far,
            convergence,
            mode,
        };
        config.validate()?;

        crate::stereo_debug!(
            "stereo::StereoConfig",
            "Resolved config: separation {:.4}, convergence {:.4}, fov_y {:.4} rad, near {}, far {}, mode {:?}",
            config.eye_separation,
            config.convergence,
            config.fov_y,
            config.near,
            config.far,
            config.mode
        );

        Ok(config)
    }

    /// Create a configuration from an explicit convergence plane.
    ///
    /// The eye separation is derived as `convergence / CONVERGENCE_RATIO`.
    pub fn from_convergence(
        fov_y: f32,
        near: f32,
        far: f32,
        convergence: f32,
        mode: DisplayMode,
    ) -> Result<Self> {
        Self::with_convergence(convergence / CONVERGENCE_RATIO, fov_y, near, far, convergence, mode)
    }

    /// Create a configuration with everything derived from the depth range.
    ///
    /// The convergence plane is placed one percent into the depth range,
    /// `near + (far - near) / 100`, and the separation follows from the
    /// 30:1 ratio. A reasonable starting point when nothing about the
    /// scene's stereo budget is known yet.
    pub fn from_depth_range(fov_y: f32, near: f32, far: f32, mode: DisplayMode) -> Result<Self> {
        let convergence = near + (far - near) / 100.0;
        Self::with_convergence(convergence / CONVERGENCE_RATIO, fov_y, near, far, convergence, mode)
    }

    /// Check every geometric invariant. Comparisons are written negated so
    /// NaN inputs fail validation as well.
    fn validate(&self) -> Result<()> {
        if !(self.near > 0.0) {
            return Err(invalid(format!(
                "near plane must be positive (got {})",
                self.near
            )));
        }
        if !(self.near < self.far) {
            return Err(invalid(format!(
                "near plane ({}) must be less than far plane ({})",
                self.near, self.far
            )));
        }
        if !(self.fov_y > 0.0 && self.fov_y < PI) {
            return Err(invalid(format!(
                "vertical FOV must lie in (0, pi) radians (got {})",
                self.fov_y
            )));
        }
        if !(self.eye_separation > 0.0) {
            return Err(invalid(format!(
                "eye separation must be positive (got {})",
                self.eye_separation
            )));
        }
        if !(self.convergence > self.near) {
            return Err(invalid(format!(
                "convergence plane ({}) must lie beyond the near plane ({})",
                self.convergence, self.near
            )));
        }
        Ok(())
    }

    // ===== GETTERS =====

    /// Distance between the two eyes, in world units.
    pub fn eye_separation(&self) -> f32 {
        self.eye_separation
    }

    /// Full vertical field of view, in radians.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Near clipping plane distance.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clipping plane distance.
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Distance to the plane of zero parallax.
    pub fn convergence(&self) -> f32 {
        self.convergence
    }

    /// Display mode the pair is produced for.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Lateral shift of the frustum window on the near plane for one eye:
    /// `0.5 * eye_separation * near / convergence`.
    ///
    /// The left eye's window shifts by `+shift`, the right eye's by `-shift`,
    /// which makes both view volumes cross exactly at the convergence plane.
    pub fn frustum_shift(&self) -> f32 {
        0.5 * self.eye_separation * self.near / self.convergence
    }
}

impl Default for StereoConfig {
    /// Human interocular distance (6.5 cm) at a 45° vertical FOV with a
    /// 0.1..100 depth range, rendered side-by-side.
    fn default() -> Self {
        Self {
            eye_separation: 0.065,
            fov_y: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 100.0,
            convergence: 0.065 * CONVERGENCE_RATIO,
            mode: DisplayMode::Passive,
        }
    }
}

/// Log a rejected configuration before returning the error
fn invalid(msg: String) -> Error {
    crate::stereo_error!("stereo::StereoConfig", "Rejected configuration: {}", msg);
    Error::InvalidConfig(msg)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
