//! StereoBackend trait - for applying per-eye render state

use bitflags::bitflags;
use glam::Vec3;

use crate::error::Result;
use crate::rig::{FrustumBounds, ViewportRect};

bitflags! {
    /// Color-channel write mask.
    ///
    /// The rig itself only ever issues `ColorMask::ALL`, the end-of-pair
    /// restore. Per-eye channel selection for the anaglyph modes is host
    /// policy, chosen from the configured `DisplayMode`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ColorMask: u8 {
        const R = 1 << 0;
        const G = 1 << 1;
        const B = 1 << 2;
        const A = 1 << 3;
        const ALL = Self::R.bits() | Self::G.bits() | Self::B.bits() | Self::A.bits();
    }
}

/// Receiver for per-eye render state.
///
/// Implemented by the host over its graphics API. Every method returns
/// `Result` so backend failures surface through the shared error type;
/// `EyeRenderParams::apply` stops at the first failing call.
///
/// # Example
///
/// ```no_run
/// use stereo_rig::stereo::{ColorMask, FrustumBounds, StereoBackend, ViewportRect};
/// use stereo_rig::stereo::Result;
/// use stereo_rig::glam::Vec3;
///
/// struct PrintBackend;
///
/// impl StereoBackend for PrintBackend {
///     fn set_viewport(&mut self, viewport: ViewportRect) -> Result<()> {
///         println!("viewport {:?}", viewport);
///         Ok(())
///     }
///     fn set_frustum(&mut self, frustum: FrustumBounds) -> Result<()> {
///         println!("frustum {:?}", frustum);
///         Ok(())
///     }
///     fn set_camera_pose(&mut self, eye: Vec3, target: Vec3, up: Vec3) -> Result<()> {
///         println!("camera {:?} -> {:?} (up {:?})", eye, target, up);
///         Ok(())
///     }
///     fn set_color_mask(&mut self, mask: ColorMask) -> Result<()> {
///         println!("mask {:?}", mask);
///         Ok(())
///     }
/// }
/// ```
pub trait StereoBackend {
    /// Set the pixel rectangle that subsequent draws target.
    fn set_viewport(&mut self, viewport: ViewportRect) -> Result<()>;

    /// Set the projection from near-plane window bounds.
    ///
    /// The per-eye windows are asymmetric; backends that build their own
    /// matrices can use `FrustumBounds::projection_matrix` as reference.
    fn set_frustum(&mut self, frustum: FrustumBounds) -> Result<()>;

    /// Set the view transform from a look-at pose.
    fn set_camera_pose(&mut self, eye: Vec3, target: Vec3, up: Vec3) -> Result<()>;

    /// Enable or disable writes per color channel.
    fn set_color_mask(&mut self, mask: ColorMask) -> Result<()>;
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
