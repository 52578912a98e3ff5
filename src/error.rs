//! Error types for the stereo rig
//!
//! This module defines the error types used throughout the crate,
//! covering configuration validation and per-frame preconditions.

use std::fmt;

/// Result type for stereo rig operations
pub type Result<T> = std::result::Result<T, Error>;

/// Stereo rig errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Rejected configuration (plane ordering, separation, convergence, FOV)
    InvalidConfig(String),

    /// Eye parameters requested before any pose was set for the frame
    UninitializedFrame,

    /// Backend-specific error (OpenGL, Vulkan, etc.)
    ///
    /// Never produced by the rig itself; reserved for `StereoBackend`
    /// implementations whose underlying API calls can fail.
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid stereo configuration: {}", msg),
            Error::UninitializedFrame => {
                write!(f, "Frame not initialized: call update_pose() before compute_eye()")
            }
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
