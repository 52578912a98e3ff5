//! Backend boundary - the rendering layer the rig drives.
//!
//! The rig computes; the host draws. Hosts implement `StereoBackend` over
//! whatever graphics API they use and receive one call per primitive:
//! viewport, frustum, camera pose, color mask.

mod backend;

#[cfg(test)]
pub mod mock_backend;

pub use backend::{ColorMask, StereoBackend};
