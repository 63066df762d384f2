//! Orbit constraints
//!
//! Angle and distance limits for the orbiting camera. Ambient orbit
//! motions temporarily widen the angle limits and must hand back the
//! exact values they found, so the saved snapshot is kept here rather
//! than in the motion driver.

use std::f32::consts::PI;

use crate::math::POLE_EPS;

/// Azimuth and polar angle limits, in radians
///
/// Azimuth is unbounded by default; the polar angle spans the full
/// (pole-clamped) range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleLimits {
    pub min_azimuth: f32,
    pub max_azimuth: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

impl AngleLimits {
    /// No angular restriction
    pub const FREE: AngleLimits = AngleLimits {
        min_azimuth: f32::NEG_INFINITY,
        max_azimuth: f32::INFINITY,
        min_polar: 0.0,
        max_polar: PI,
    };

    /// Symmetric azimuth range of `range` radians centered on `center`
    pub fn azimuth_range(center: f32, range: f32) -> Self {
        let half = (range * 0.5).max(0.0);
        Self {
            min_azimuth: center - half,
            max_azimuth: center + half,
            ..Self::FREE
        }
    }
}

impl Default for AngleLimits {
    fn default() -> Self {
        Self::FREE
    }
}

/// Orbit constraint state for the camera rig
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitState {
    /// Active angle limits
    pub limits: AngleLimits,
    /// Minimum camera-to-target distance
    pub min_distance: f32,
    /// Maximum camera-to-target distance
    pub max_distance: f32,
    /// Limits as they were before a motion widened them
    saved_limits: Option<AngleLimits>,
}

impl OrbitState {
    pub fn new() -> Self {
        Self {
            limits: AngleLimits::FREE,
            min_distance: 0.05,
            max_distance: 500.0,
            saved_limits: None,
        }
    }

    /// Clamp an azimuth angle to the active limits
    pub fn clamp_azimuth(&self, theta: f32) -> f32 {
        theta.clamp(self.limits.min_azimuth, self.limits.max_azimuth)
    }

    /// Clamp a polar angle to the active limits, always keeping it off
    /// the poles
    pub fn clamp_polar(&self, phi: f32) -> f32 {
        phi.clamp(
            self.limits.min_polar.max(POLE_EPS),
            self.limits.max_polar.min(PI - POLE_EPS),
        )
    }

    /// Clamp a focus distance to the active limits
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance)
    }

    /// Lift the angle limits for an ambient orbit motion
    ///
    /// The current limits are saved once; repeated calls while already
    /// widened keep the original snapshot.
    pub fn widen_for_motion(&mut self) {
        if self.saved_limits.is_none() {
            self.saved_limits = Some(self.limits);
            self.limits = AngleLimits::FREE;
        } else {
            tracing::debug!("orbit limits already widened");
        }
    }

    /// Restore the limits saved by [`widen_for_motion`]
    ///
    /// Restores the exact saved values and is a no-op when nothing is
    /// saved, so completion and cancellation paths can both call it.
    ///
    /// [`widen_for_motion`]: OrbitState::widen_for_motion
    pub fn restore_limits(&mut self) {
        if let Some(limits) = self.saved_limits.take() {
            self.limits = limits;
        }
    }

    /// Whether a motion currently holds widened limits
    pub fn limits_widened(&self) -> bool {
        self.saved_limits.is_some()
    }
}

impl Default for OrbitState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_and_restore_exact() {
        let mut orbit = OrbitState::new();
        orbit.limits = AngleLimits {
            min_azimuth: -0.123_456_78,
            max_azimuth: 0.987_654_3,
            min_polar: 0.456,
            max_polar: 2.345,
        };
        let before = orbit.limits;

        orbit.widen_for_motion();
        assert!(orbit.limits_widened());
        assert_eq!(orbit.limits, AngleLimits::FREE);

        orbit.restore_limits();
        assert!(!orbit.limits_widened());
        // Exact restore, not approximate
        assert_eq!(orbit.limits, before);
    }

    #[test]
    fn test_widen_is_idempotent() {
        let mut orbit = OrbitState::new();
        orbit.limits = AngleLimits::azimuth_range(0.5, 0.2);
        let before = orbit.limits;

        orbit.widen_for_motion();
        orbit.widen_for_motion();
        orbit.restore_limits();

        assert_eq!(orbit.limits, before);

        // Restoring again changes nothing
        orbit.restore_limits();
        assert_eq!(orbit.limits, before);
    }

    #[test]
    fn test_polar_clamp_avoids_poles() {
        let orbit = OrbitState::new();
        assert!(orbit.clamp_polar(0.0) >= POLE_EPS);
        assert!(orbit.clamp_polar(PI) <= PI - POLE_EPS);
        assert!((orbit.clamp_polar(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_azimuth_range() {
        let limits = AngleLimits::azimuth_range(1.0, 0.4);
        assert!((limits.min_azimuth - 0.8).abs() < 1e-6);
        assert!((limits.max_azimuth - 1.2).abs() < 1e-6);
    }
}
