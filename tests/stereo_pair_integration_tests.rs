//! Integration tests for a full stereo frame loop
//!
//! Drives the rig exactly as a host render loop would: configure once,
//! snapshot the pose each frame, apply both eyes through a backend, end
//! the pair. No GPU required.
//!
//! Run with: cargo test --test stereo_pair_integration_tests

use std::f32::consts::FRAC_PI_4;
use stereo_rig::glam::Vec3;
use stereo_rig::stereo::{
    ColorMask, DisplayMode, Eye, FrustumBounds, Result, StereoBackend, StereoConfig, StereoRig,
    ViewportRect,
};

// ============================================================================
// RECORDING BACKEND
// ============================================================================

/// Backend that records applied state for verification
#[derive(Default)]
struct RecordingBackend {
    viewports: Vec<ViewportRect>,
    frustums: Vec<FrustumBounds>,
    poses: Vec<(Vec3, Vec3, Vec3)>,
    color_masks: Vec<ColorMask>,
}

impl StereoBackend for RecordingBackend {
    fn set_viewport(&mut self, viewport: ViewportRect) -> Result<()> {
        self.viewports.push(viewport);
        Ok(())
    }

    fn set_frustum(&mut self, frustum: FrustumBounds) -> Result<()> {
        self.frustums.push(frustum);
        Ok(())
    }

    fn set_camera_pose(&mut self, eye: Vec3, target: Vec3, up: Vec3) -> Result<()> {
        self.poses.push((eye, target, up));
        Ok(())
    }

    fn set_color_mask(&mut self, mask: ColorMask) -> Result<()> {
        self.color_masks.push(mask);
        Ok(())
    }
}

// ============================================================================
// FULL FRAME TESTS
// ============================================================================

#[test]
fn test_integration_full_passive_frame() {
    let config = StereoConfig::new(0.065, FRAC_PI_4, 0.1, 100.0, DisplayMode::Passive).unwrap();
    let mut rig = StereoRig::new(config);
    let mut backend = RecordingBackend::default();

    // One frame: pose, both eyes, restore
    rig.update_pose(1920, 1080, Vec3::new(0.0, 1.7, 5.0), Vec3::NEG_Z, Vec3::Y);
    rig.render_eye(Eye::Left, &mut backend).unwrap();
    rig.render_eye(Eye::Right, &mut backend).unwrap();
    rig.end_stereo(&mut backend).unwrap();

    // Side-by-side halves
    assert_eq!(backend.viewports.len(), 2);
    assert_eq!(backend.viewports[0], ViewportRect { x: 0, y: 0, width: 960, height: 1080 });
    assert_eq!(backend.viewports[1], ViewportRect { x: 960, y: 0, width: 960, height: 1080 });

    // Mirrored asymmetric windows over a shared depth range
    let (left, right) = (backend.frustums[0], backend.frustums[1]);
    assert!((left.left + right.right).abs() < 1e-7);
    assert!((left.right + right.left).abs() < 1e-7);
    assert_eq!(left.near, 0.1);
    assert_eq!(left.far, 100.0);

    // Eyes straddle the center pose
    let (left_eye, _, _) = backend.poses[0];
    let (right_eye, _, _) = backend.poses[1];
    let midpoint = (left_eye + right_eye) * 0.5;
    assert!(midpoint.abs_diff_eq(Vec3::new(0.0, 1.7, 5.0), 1e-5));

    // Restore re-enables every channel
    assert_eq!(backend.color_masks, vec![ColorMask::ALL]);
}

#[test]
fn test_integration_anaglyph_host_masking() {
    let config =
        StereoConfig::new(0.065, FRAC_PI_4, 0.1, 100.0, DisplayMode::AnaglyphRedCyan).unwrap();
    let mut rig = StereoRig::new(config);
    let mut backend = RecordingBackend::default();

    rig.update_pose(1280, 720, Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);

    // The host chooses the channel per eye; the rig only restores at the end
    assert!(rig.config().mode().is_anaglyph());
    backend.set_color_mask(ColorMask::R).unwrap();
    rig.render_eye(Eye::Left, &mut backend).unwrap();
    backend.set_color_mask(ColorMask::G | ColorMask::B).unwrap();
    rig.render_eye(Eye::Right, &mut backend).unwrap();
    rig.end_stereo(&mut backend).unwrap();

    assert_eq!(
        backend.color_masks,
        vec![ColorMask::R, ColorMask::G | ColorMask::B, ColorMask::ALL]
    );

    // Anaglyph renders both eyes across the full surface
    let full = ViewportRect { x: 0, y: 0, width: 1280, height: 720 };
    assert_eq!(backend.viewports, vec![full, full]);
}

#[test]
fn test_integration_pose_tracking_across_frames() {
    let config = StereoConfig::new(0.065, FRAC_PI_4, 0.1, 100.0, DisplayMode::Active).unwrap();
    let mut rig = StereoRig::new(config);
    let mut backend = RecordingBackend::default();

    // Camera slides along +X over three frames
    for step in 0..3 {
        let position = Vec3::new(step as f32, 1.0, 5.0);
        rig.update_pose(800, 600, position, Vec3::NEG_Z, Vec3::Y);
        rig.render_eye(Eye::Left, &mut backend).unwrap();
        rig.render_eye(Eye::Right, &mut backend).unwrap();
        rig.end_stereo(&mut backend).unwrap();
    }

    assert_eq!(backend.poses.len(), 6);

    // Each frame's midpoint follows the center pose
    for step in 0..3 {
        let (left_eye, _, _) = backend.poses[step * 2];
        let (right_eye, _, _) = backend.poses[step * 2 + 1];
        let midpoint = (left_eye + right_eye) * 0.5;
        assert!(midpoint.abs_diff_eq(Vec3::new(step as f32, 1.0, 5.0), 1e-5));
    }
}

#[test]
fn test_integration_resize_updates_viewports() {
    let config = StereoConfig::new(0.065, FRAC_PI_4, 0.1, 100.0, DisplayMode::Passive).unwrap();
    let mut rig = StereoRig::new(config);
    let mut backend = RecordingBackend::default();

    rig.update_pose(1920, 1080, Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
    rig.render_eye(Eye::Left, &mut backend).unwrap();

    // Surface shrinks between frames
    rig.update_pose(1280, 720, Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
    rig.render_eye(Eye::Left, &mut backend).unwrap();

    assert_eq!(backend.viewports[0].width, 960);
    assert_eq!(backend.viewports[1].width, 640);
    assert_eq!(backend.viewports[1].height, 720);
}

#[test]
fn test_integration_mode_switch_mid_session() {
    let passive = StereoConfig::new(0.065, FRAC_PI_4, 0.1, 100.0, DisplayMode::Passive).unwrap();
    let mut rig = StereoRig::new(passive);
    let mut backend = RecordingBackend::default();

    rig.update_pose(1920, 1080, Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
    rig.render_eye(Eye::Left, &mut backend).unwrap();

    // Swap to shutter-glasses output without resending the pose
    let active = StereoConfig::new(0.065, FRAC_PI_4, 0.1, 100.0, DisplayMode::Active).unwrap();
    rig.set_config(active);
    rig.render_eye(Eye::Left, &mut backend).unwrap();

    assert_eq!(backend.viewports[0].width, 960);
    assert_eq!(backend.viewports[1].width, 1920);
}

// ============================================================================
// MATRIX CONSUMPTION TESTS
// ============================================================================

#[test]
fn test_integration_matrices_without_backend() {
    // Hosts that build their own uniforms skip the backend entirely
    let config =
        StereoConfig::with_convergence(0.065, FRAC_PI_4, 0.1, 100.0, 4.0, DisplayMode::Active)
            .unwrap();
    let mut rig = StereoRig::new(config);

    let position = Vec3::new(0.0, 1.0, 0.0);
    rig.update_pose(800, 600, position, Vec3::NEG_Z, Vec3::Y);

    let left = rig.compute_eye(Eye::Left).unwrap();
    let right = rig.compute_eye(Eye::Right).unwrap();

    // A point on the convergence plane lands on the same screen position
    let converged = position + Vec3::NEG_Z * 4.0;
    let ndc_left = left.view_projection_matrix().project_point3(converged);
    let ndc_right = right.view_projection_matrix().project_point3(converged);

    assert!((ndc_left.x - ndc_right.x).abs() < 1e-4);
    assert!((ndc_left.y - ndc_right.y).abs() < 1e-5);
}

#[test]
fn test_integration_derived_config_flows_through() {
    let config = StereoConfig::from_depth_range(FRAC_PI_4, 0.5, 500.0, DisplayMode::Active).unwrap();
    let mut rig = StereoRig::new(config);

    rig.update_pose(1024, 768, Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
    let left = rig.compute_eye(Eye::Left).unwrap();

    assert_eq!(left.frustum.near, 0.5);
    assert_eq!(left.frustum.far, 500.0);
    // Derived convergence sits just inside the depth range
    assert!(rig.config().convergence() > 0.5);
    assert!(rig.config().convergence() < 500.0);
}
