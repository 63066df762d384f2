//! Slide transition geometry
//!
//! Pure resolver mapping a camera pose and a transition mode to the
//! start and end of the slide path. Outgoing slides depart from the
//! current pose; incoming slides arrive exactly at the new slide's
//! home pose, displaced backwards along the same travel direction so
//! the motion reads as one continuous move across the asset swap.

use vantage_core::{CameraPose, Direction, TransitionMode, Vec3};

/// Which half of a slide transition is being resolved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlidePhase {
    /// Departing the current slide
    Out,
    /// Arriving at the next slide
    In,
}

/// Fraction of the focus distance a zoom transition travels on the way
/// out
pub const ZOOM_OUT_TRAVEL: f32 = 2.0 / 3.0;
/// Fraction of the focus distance a zoom transition travels on the way
/// in; slightly shorter so arrivals feel softer than departures
pub const ZOOM_IN_TRAVEL: f32 = 5.0 / 9.0;
/// Fraction of the focus distance pan transitions travel sideways
pub const PAN_TRAVEL: f32 = 0.6;
/// Orbit arc layered onto pan transitions, in degrees
pub const PAN_ARC_DEG: f32 = 4.0;

/// Resolved endpoints of a slide path
///
/// `orbit_angle` is the full signed arc for pan modes; the slide driver
/// sweeps it from zero (outgoing) or back to zero (incoming) on top of
/// the positional lerp. Non-pan modes resolve it to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionGeometry {
    pub start_position: Vec3,
    pub end_position: Vec3,
    pub start_target: Vec3,
    pub end_target: Vec3,
    pub orbit_axis: Vec3,
    pub orbit_angle: f32,
}

impl TransitionGeometry {
    /// Geometry that keeps the camera exactly where it is
    pub fn identity(pose: &CameraPose) -> Self {
        Self {
            start_position: pose.position,
            end_position: pose.position,
            start_target: pose.target,
            end_target: pose.target,
            orbit_axis: Vec3::UP,
            orbit_angle: 0.0,
        }
    }

    /// Whether start and end coincide (nothing to animate spatially)
    pub fn is_motionless(&self) -> bool {
        self.start_position == self.end_position
            && self.start_target == self.end_target
            && self.orbit_angle == 0.0
    }
}

/// Resolve the slide path for `pose`
///
/// For [`SlidePhase::Out`] the pose is the departing camera; for
/// [`SlidePhase::In`] it is the destination home pose, and the resolved
/// end lands on it exactly. Degenerate poses resolve to the identity
/// geometry so callers snap instead of animating.
pub fn resolve_slide_geometry(
    pose: &CameraPose,
    up: Vec3,
    mode: TransitionMode,
    direction: Direction,
    amount: f32,
    phase: SlidePhase,
) -> TransitionGeometry {
    let amount = amount.clamp(0.0, 1.0);
    let Some(view_dir) = pose.view_dir() else {
        return TransitionGeometry::identity(pose);
    };

    let sign = direction.sign();
    let distance = pose.focus_distance();

    match mode {
        TransitionMode::Zoom => {
            let travel = match phase {
                SlidePhase::Out => ZOOM_OUT_TRAVEL,
                SlidePhase::In => ZOOM_IN_TRAVEL,
            };
            let offset = view_dir * (sign * amount * travel * distance);
            match phase {
                SlidePhase::Out => TransitionGeometry {
                    start_position: pose.position,
                    end_position: pose.position + offset,
                    start_target: pose.target,
                    end_target: pose.target,
                    orbit_axis: Vec3::UP,
                    orbit_angle: 0.0,
                },
                SlidePhase::In => TransitionGeometry {
                    start_position: pose.position - offset,
                    end_position: pose.position,
                    start_target: pose.target,
                    end_target: pose.target,
                    orbit_axis: Vec3::UP,
                    orbit_angle: 0.0,
                },
            }
        }
        TransitionMode::Horizontal | TransitionMode::Vertical => {
            let Some(right) = pose.right(up) else {
                return TransitionGeometry::identity(pose);
            };
            let (pan_axis, arc_axis) = match mode {
                TransitionMode::Horizontal => (right, up.normalize()),
                _ => (right.cross(view_dir).normalize(), right),
            };

            let pan = pan_axis * (sign * PAN_TRAVEL * amount * distance);
            let arc = sign * PAN_ARC_DEG.to_radians();
            match phase {
                SlidePhase::Out => TransitionGeometry {
                    start_position: pose.position,
                    end_position: pose.position + pan,
                    start_target: pose.target,
                    end_target: pose.target + pan,
                    orbit_axis: arc_axis,
                    orbit_angle: arc,
                },
                SlidePhase::In => TransitionGeometry {
                    start_position: pose.position - pan,
                    end_position: pose.position,
                    start_target: pose.target - pan,
                    end_target: pose.target,
                    orbit_axis: arc_axis,
                    orbit_angle: arc,
                },
            }
        }
        // Fade holds still; dolly-zoom animates projection, not the
        // path; continuous modes hand off instead of sliding
        TransitionMode::Fade
        | TransitionMode::DollyZoom
        | TransitionMode::ContinuousZoom
        | TransitionMode::ContinuousDollyZoom
        | TransitionMode::ContinuousOrbit
        | TransitionMode::ContinuousOrbitVertical => TransitionGeometry::identity(pose),
    }
}
