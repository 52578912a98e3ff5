//! Stereo rig module - configuration, frame snapshot, and per-eye geometry.
//!
//! The rig computes viewing parameters; it never draws. The host owns the
//! render loop, passes a center-eye pose in each frame, and consumes the
//! per-eye directives through the backend boundary or directly.

mod config;
mod eye;
mod frame;
mod rig;

pub use config::{DisplayMode, StereoConfig, CONVERGENCE_RATIO};
pub use eye::{Eye, EyeRenderParams, FrustumBounds, ViewportRect};
pub use frame::FrameState;
pub use rig::StereoRig;
