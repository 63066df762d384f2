//! Camera pose
//!
//! A look-at style camera description shared by every motion driver:
//! position, orbit target, and the projection fields the splat renderer
//! consumes.

use crate::math::Vec3;

/// Below this camera-to-target distance a pose is considered degenerate
/// and motion drivers snap instead of animating.
pub const MIN_FOCUS_DISTANCE: f32 = 1e-5;

/// Narrowest field of view a motion driver may set, in degrees
pub const FOV_MIN_DEG: f32 = 15.0;
/// Widest field of view a motion driver may set, in degrees
pub const FOV_MAX_DEG: f32 = 120.0;

/// Look-at camera pose plus projection parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// World-space camera position
    pub position: Vec3,
    /// Orbit target the camera looks at
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
    /// Projection zoom factor (1.0 = none)
    pub zoom: f32,
}

impl CameraPose {
    /// Create a pose with default projection parameters
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            fov_deg: 60.0,
            near: 0.1,
            far: 1000.0,
            zoom: 1.0,
        }
    }

    /// Distance from the camera to its orbit target
    pub fn focus_distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Whether position and target (nearly) coincide
    pub fn is_degenerate(&self) -> bool {
        self.focus_distance() < MIN_FOCUS_DISTANCE
    }

    /// Unit vector from the camera toward the target, or `None` when
    /// the pose is degenerate
    pub fn view_dir(&self) -> Option<Vec3> {
        if self.is_degenerate() {
            return None;
        }
        Some((self.target - self.position).normalize())
    }

    /// Camera-space right vector for a given world up, or `None` when
    /// the pose is degenerate or the view is parallel to up
    pub fn right(&self, up: Vec3) -> Option<Vec3> {
        let dir = self.view_dir()?;
        let right = dir.cross(up);
        if right.length_squared() < 1e-10 {
            return None;
        }
        Some(right.normalize())
    }

    /// Field of view after applying the zoom factor, in degrees
    pub fn effective_fov_deg(&self) -> f32 {
        let half = (self.fov_deg * 0.5).to_radians();
        2.0 * (half.tan() / self.zoom.max(1e-6)).atan().to_degrees()
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_distance() {
        let pose = CameraPose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        assert!((pose.focus_distance() - 5.0).abs() < 1e-6);
        assert!(!pose.is_degenerate());
    }

    #[test]
    fn test_degenerate_pose() {
        let pose = CameraPose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0));
        assert!(pose.is_degenerate());
        assert!(pose.view_dir().is_none());
        assert!(pose.right(Vec3::UP).is_none());
    }

    #[test]
    fn test_view_basis() {
        let pose = CameraPose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let dir = pose.view_dir().unwrap();
        assert!(dir.approx_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));

        let right = pose.right(Vec3::UP).unwrap();
        assert!(right.approx_eq(Vec3::new(1.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_right_degenerates_when_looking_along_up() {
        let pose = CameraPose::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO);
        assert!(pose.right(Vec3::UP).is_none());
    }

    #[test]
    fn test_effective_fov() {
        let mut pose = CameraPose::default();
        pose.fov_deg = 60.0;
        pose.zoom = 1.0;
        assert!((pose.effective_fov_deg() - 60.0).abs() < 1e-4);

        // Zooming in narrows the effective field of view
        pose.zoom = 2.0;
        assert!(pose.effective_fov_deg() < 40.0);
    }
}
