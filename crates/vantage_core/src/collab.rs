//! Collaborator seams
//!
//! Traits the host application implements so the motion subsystem can
//! stay renderer- and platform-agnostic: asset navigation for the
//! slideshow and the sensor bridge for immersive input.

use thiserror::Error;

use crate::pose::CameraPose;

/// Errors from asset navigation
#[derive(Debug, Error)]
pub enum NavError {
    #[error("no asset in that direction")]
    OutOfRange,
    #[error("asset failed to load: {0}")]
    LoadFailed(String),
}

/// Slideshow's view of the asset list
///
/// `load_next`/`load_prev` swap the displayed asset and return the new
/// index. The slideshow treats failures as transient: it logs them and
/// retries on the next hold expiry.
pub trait AssetNavigator {
    /// Index of the asset currently displayed
    fn current_index(&self) -> usize;

    /// Total number of assets
    fn asset_count(&self) -> usize;

    /// Advance to the next asset (wrapping is the implementor's choice)
    fn load_next(&mut self) -> Result<usize, NavError>;

    /// Go back to the previous asset
    fn load_prev(&mut self) -> Result<usize, NavError>;

    /// Authored home pose of the current asset
    fn home_pose(&self) -> CameraPose;
}

/// Errors from the immersive sensor bridge
#[derive(Debug, Error)]
pub enum ImmersiveError {
    #[error("motion sensor permission denied")]
    PermissionDenied,
    #[error("motion sensors unavailable: {0}")]
    SensorUnavailable(String),
}

/// Platform side of immersive input
///
/// `start_listening` must attach every listener (orientation, screen
/// rotation, touch) or none: on error the bridge is expected to have
/// rolled back whatever it attached, so the controller never observes a
/// half-enabled state.
pub trait SensorBridge {
    fn start_listening(&mut self) -> Result<(), ImmersiveError>;

    fn stop_listening(&mut self);
}

/// One device-orientation reading, in degrees
///
/// Values follow the conventional device axes: `beta` is front-back
/// tilt, `gamma` left-right tilt, `alpha` the compass heading.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

/// Physical orientation of the screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScreenOrientation {
    #[default]
    Portrait,
    PortraitFlipped,
    /// Rotated so the device's left side points up
    LandscapeLeft,
    /// Rotated so the device's right side points up
    LandscapeRight,
}

impl ScreenOrientation {
    /// Map a raw orientation sample to screen-relative tilt
    ///
    /// Returns `(horizontal, vertical)` tilt in degrees, where positive
    /// horizontal means the screen's right edge dipped and positive
    /// vertical means its top edge dipped away.
    pub fn screen_tilt(self, sample: &OrientationSample) -> (f32, f32) {
        match self {
            ScreenOrientation::Portrait => (sample.gamma, sample.beta),
            ScreenOrientation::PortraitFlipped => (-sample.gamma, -sample.beta),
            ScreenOrientation::LandscapeLeft => (sample.beta, -sample.gamma),
            ScreenOrientation::LandscapeRight => (-sample.beta, sample.gamma),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_tilt_lookup() {
        let sample = OrientationSample {
            alpha: 0.0,
            beta: 10.0,
            gamma: 4.0,
        };

        assert_eq!(
            ScreenOrientation::Portrait.screen_tilt(&sample),
            (4.0, 10.0)
        );
        assert_eq!(
            ScreenOrientation::PortraitFlipped.screen_tilt(&sample),
            (-4.0, -10.0)
        );
        assert_eq!(
            ScreenOrientation::LandscapeLeft.screen_tilt(&sample),
            (10.0, -4.0)
        );
        assert_eq!(
            ScreenOrientation::LandscapeRight.screen_tilt(&sample),
            (-10.0, 4.0)
        );
    }
}
