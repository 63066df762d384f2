//! Pose glides
//!
//! A glide eases the camera from one pose to another and stops. The
//! engine uses glides for pause-resume returns, reset-to-home moves,
//! focus retargeting, and the entry phase of ambient motions.

use vantage_core::{CameraPose, CameraRig};

use crate::easing::Easing;
use crate::tween::{ProgressMode, Tween, TweenStatus};

/// In-flight glide between two poses
#[derive(Clone, Debug)]
pub struct PoseGlide {
    from: CameraPose,
    to: CameraPose,
    tween: Tween,
}

impl PoseGlide {
    pub fn new(from: CameraPose, to: CameraPose, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            tween: Tween::new(duration_ms as f32 / 1000.0, ProgressMode::Eased(easing)),
        }
    }

    pub fn to_pose(&self) -> &CameraPose {
        &self.to
    }

    /// Advance the glide and write the interpolated pose to the rig.
    /// Returns `true` once the destination pose has been applied.
    pub fn tick(&mut self, rig: &mut CameraRig, dt: f32) -> bool {
        let status = self.tween.tick(dt);
        let finished = status == TweenStatus::Finished;

        // Land exactly on the destination rather than on the last lerp
        let (position, target, fov) = if finished {
            (self.to.position, self.to.target, self.to.fov_deg)
        } else {
            let t = self.tween.progress();
            (
                self.from.position.lerp(self.to.position, t),
                self.from.target.lerp(self.to.target, t),
                self.from.fov_deg + (self.to.fov_deg - self.from.fov_deg) * t,
            )
        };

        let fov_changes = (self.to.fov_deg - self.from.fov_deg).abs() > 1e-4;
        rig.update_pose(|pose| {
            pose.position = position;
            pose.target = target;
        });
        if fov_changes {
            rig.set_fov(fov);
        }

        finished
    }

    pub fn pause(&mut self) {
        self.tween.pause();
    }

    pub fn resume(&mut self) {
        self.tween.resume();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::Vec3;

    #[test]
    fn test_glide_reaches_destination_exactly() {
        let from = CameraPose::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let to = CameraPose::new(Vec3::new(2.0, 1.0, 5.0), Vec3::new(0.5, 0.0, 0.0));
        let mut rig = CameraRig::new(from);
        let mut glide = PoseGlide::new(from, to, 500, Easing::EaseInOut);

        let mut finished = false;
        for _ in 0..40 {
            if glide.tick(&mut rig, 1.0 / 60.0) {
                finished = true;
                break;
            }
        }

        assert!(finished);
        assert!(rig.pose().position.approx_eq(to.position, 1e-5));
        assert!(rig.pose().target.approx_eq(to.target, 1e-5));
    }

    #[test]
    fn test_glide_interpolates_fov() {
        let mut from = CameraPose::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        from.fov_deg = 60.0;
        let mut to = from;
        to.fov_deg = 40.0;

        let mut rig = CameraRig::new(from);
        let mut glide = PoseGlide::new(from, to, 200, Easing::Linear);

        glide.tick(&mut rig, 0.1);
        let mid = rig.pose().fov_deg;
        assert!(mid < 60.0 && mid > 40.0);
        // Renderer sees the staged projection change
        assert!(rig.take_fov_update().is_some());

        glide.tick(&mut rig, 0.1);
        assert!((rig.pose().fov_deg - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_glide_pause() {
        let from = CameraPose::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let to = CameraPose::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        let mut rig = CameraRig::new(from);
        let mut glide = PoseGlide::new(from, to, 1000, Easing::Linear);

        glide.tick(&mut rig, 0.2);
        let held = *rig.pose();
        glide.pause();

        assert!(!glide.tick(&mut rig, 3.0));
        assert_eq!(*rig.pose(), held);

        glide.resume();
        assert!(glide.tick(&mut rig, 1.0));
    }
}
