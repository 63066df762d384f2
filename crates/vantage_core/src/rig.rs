//! Camera rig
//!
//! The single owner of shared camera state: the current pose, the world
//! up vector, orbit constraints, stage fade, and the render request
//! signal. Motion drivers mutate the rig through its methods so every
//! change coalesces into a redraw request.

use crate::math::Vec3;
use crate::orbit::OrbitState;
use crate::pose::CameraPose;
use crate::signal::RenderSignal;
use crate::stage::StageFade;

/// Shared camera state mutated by the motion drivers
#[derive(Debug)]
pub struct CameraRig {
    pose: CameraPose,
    up: Vec3,
    orbit: OrbitState,
    fade: StageFade,
    signal: RenderSignal,
    /// Field-of-view value the renderer has not picked up yet
    fov_sync: Option<f32>,
}

impl CameraRig {
    pub fn new(pose: CameraPose) -> Self {
        Self {
            pose,
            up: Vec3::UP,
            orbit: OrbitState::new(),
            fade: StageFade::new(),
            signal: RenderSignal::new(),
            fov_sync: None,
        }
    }

    /// Override the world up vector
    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up.normalize();
        self
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn orbit(&self) -> &OrbitState {
        &self.orbit
    }

    pub fn orbit_mut(&mut self) -> &mut OrbitState {
        &mut self.orbit
    }

    pub fn fade(&self) -> &StageFade {
        &self.fade
    }

    pub fn fade_mut(&mut self) -> &mut StageFade {
        &mut self.fade
    }

    /// Handle the renderer polls for pending draws
    pub fn render_signal(&self) -> RenderSignal {
        self.signal.clone()
    }

    /// Replace the whole pose and request a redraw
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.pose = pose;
        self.signal.request();
    }

    /// Mutate the pose in place and request a redraw
    pub fn update_pose(&mut self, f: impl FnOnce(&mut CameraPose)) {
        f(&mut self.pose);
        self.signal.request();
    }

    /// Set the field of view and stage it for the renderer's projection
    /// update
    pub fn set_fov(&mut self, fov_deg: f32) {
        self.pose.fov_deg = fov_deg;
        self.fov_sync = Some(fov_deg);
        self.signal.request();
    }

    /// Consume the staged field-of-view update, if any
    pub fn take_fov_update(&mut self) -> Option<f32> {
        self.fov_sync.take()
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraPose::default())
    }
}
