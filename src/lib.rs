/*!
# Stereo Rig

Per-eye viewing geometry for stereoscopic 3D rendering.

This crate computes, from a single center-eye camera pose, everything a host
renderer needs to draw each eye of a stereo pair: the asymmetric (off-axis)
perspective frustum, the laterally offset eye position, and the viewport
rectangle for the configured display mode. The graphics layer stays outside:
hosts implement the [`backend::StereoBackend`] trait (or consume the returned
parameters directly) and keep full control over how frames reach the screen.

## Architecture

- **StereoRig**: validated configuration + per-frame pose snapshot, pure per-eye computation
- **StereoConfig**: display mode and viewing geometry with derived-parameter constructors
- **EyeRenderParams**: complete render directive for one eye (viewport, frustum, pose)
- **StereoBackend**: trait boundary to the host's rendering layer

Off-axis projection keeps the two image planes parallel, so objects at the
convergence distance land on the same screen position for both eyes and
vertical parallax never appears.

## Example

```
use stereo_rig::stereo::{DisplayMode, Eye, StereoConfig, StereoRig};
use stereo_rig::glam::Vec3;

// 6.5 cm eye separation, 45° vertical FOV, side-by-side output
let config = StereoConfig::new(
    0.065,
    std::f32::consts::FRAC_PI_4,
    0.1,
    100.0,
    DisplayMode::Passive,
)?;

let mut rig = StereoRig::new(config);
rig.update_pose(1920, 1080, Vec3::new(0.0, 1.7, 5.0), Vec3::NEG_Z, Vec3::Y);

let left = rig.compute_eye(Eye::Left)?;
let right = rig.compute_eye(Eye::Right)?;
assert_ne!(left.viewport, right.viewport);
# Ok::<(), stereo_rig::stereo::Error>(())
```
*/

// Internal modules
mod error;
pub mod backend;
pub mod log;
pub mod rig;

// Main stereo namespace module
pub mod stereo {
    // Error types
    pub use crate::error::{Error, Result};

    // Rig, configuration, and per-eye parameter types
    pub use crate::rig::{
        DisplayMode, Eye, EyeRenderParams, FrameState, FrustumBounds, StereoConfig, StereoRig,
        ViewportRect, CONVERGENCE_RATIO,
    };

    // Backend boundary
    pub use crate::backend::{ColorMask, StereoBackend};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            log, log_detailed, reset_logger, set_logger, DefaultLogger, LogEntry, LogSeverity,
            Logger,
        };
        // Note: stereo_* macros are NOT re-exported here - they are internal only
    }
}

// Re-export math library at crate root
pub use glam;
