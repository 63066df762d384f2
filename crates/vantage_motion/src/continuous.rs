//! Ambient motion driver
//!
//! Drives the slow camera drift that plays while a slide rests on
//! screen: a dolly along the view axis, a dolly-zoom sweep, or an arc
//! around the target. Progress is linear over the motion's duration and
//! every pose is derived from the home pose captured at start, so the
//! drift is deterministic and frame-rate independent. An optional glide
//! carries the camera from wherever the previous transition left it
//! onto the drift's starting pose.

use vantage_core::{
    rotate_about_axis, CameraPose, CameraRig, ContinuousKind, Direction, SizePreset, Spherical,
    Vec3, ZoomProfile, FOV_MAX_DEG, FOV_MIN_DEG,
};

use crate::easing::Easing;
use crate::glide::PoseGlide;
use crate::tween::{ProgressMode, Tween, TweenStatus};

/// Default length of one ambient motion pass
pub const DEFAULT_CONTINUOUS_MS: u32 = 8_000;
/// Default length of the glide leading into the motion
pub const DEFAULT_GLIDE_IN_MS: u32 = 800;
/// Stage fade-in started alongside the motion
const ENTRY_FADE_SECS: f32 = 0.35;
/// Fraction of the swept arc the orbit target pans along with the
/// camera
const ORBIT_PARALLAX: f32 = 0.25;

/// Glide from a remembered pose onto the motion's starting pose
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlideSpec {
    pub from: CameraPose,
    pub duration_ms: u32,
}

impl GlideSpec {
    pub fn new(from: CameraPose) -> Self {
        Self {
            from,
            duration_ms: DEFAULT_GLIDE_IN_MS,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Parameters for one ambient motion pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousSpec {
    pub kind: ContinuousKind,
    pub size: SizePreset,
    pub zoom_profile: ZoomProfile,
    pub direction: Direction,
    pub duration_ms: u32,
    pub glide: Option<GlideSpec>,
}

impl ContinuousSpec {
    pub fn new(kind: ContinuousKind) -> Self {
        Self {
            kind,
            size: SizePreset::default(),
            zoom_profile: ZoomProfile::default(),
            direction: Direction::Next,
            duration_ms: DEFAULT_CONTINUOUS_MS,
            glide: None,
        }
    }

    pub fn with_size(mut self, size: SizePreset) -> Self {
        self.size = size;
        self
    }

    pub fn with_zoom_profile(mut self, profile: ZoomProfile) -> Self {
        self.zoom_profile = profile;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms.max(1);
        self
    }

    pub fn with_glide(mut self, glide: GlideSpec) -> Self {
        self.glide = Some(glide);
        self
    }

    pub fn duration_secs(&self) -> f32 {
        self.duration_ms as f32 / 1000.0
    }
}

/// Travel of the ambient zoom relative to the home distance, as
/// (inward, outward) fractions before the size multiplier.
fn zoom_ratios(profile: ZoomProfile) -> (f32, f32) {
    match profile {
        ZoomProfile::Near => (0.08, 0.12),
        ZoomProfile::Medium => (0.15, 0.20),
        ZoomProfile::Far => (0.25, 0.35),
    }
}

/// Field-of-view sweep of the ambient dolly-zoom around the home value,
/// as (narrowing, widening) degrees before the size multiplier.
fn dolly_fov_deltas(profile: ZoomProfile) -> (f32, f32) {
    match profile {
        ZoomProfile::Near => (-2.5, 3.5),
        ZoomProfile::Medium => (-4.0, 6.0),
        ZoomProfile::Far => (-6.0, 9.0),
    }
}

/// Full arc swept by an ambient orbit, in degrees
fn orbit_arc_deg(size: SizePreset) -> f32 {
    match size {
        SizePreset::Small => 8.0,
        SizePreset::Medium => 14.0,
        SizePreset::Large => 22.0,
    }
}

fn half_tan(fov_deg: f32) -> f32 {
    (fov_deg * 0.5).to_radians().tan().max(1e-6)
}

/// How the pose is displaced over the motion's progress
#[derive(Clone, Copy, Debug)]
enum MotionTrack {
    Zoom { from_dist: f32, to_dist: f32 },
    DollyZoom { from_fov: f32, to_fov: f32 },
    Orbit { half_arc: f32, vertical: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ContinuousPhase {
    Gliding,
    Running,
}

/// An in-flight ambient motion
#[derive(Clone, Debug)]
pub(crate) struct ContinuousAnimation {
    track: MotionTrack,
    /// Home pose the drift is centered on
    base: CameraPose,
    view_dir: Vec3,
    right0: Vec3,
    cam_up: Vec3,
    world_up: Vec3,
    sign: f32,
    tween: Tween,
    glide: Option<PoseGlide>,
    phase: ContinuousPhase,
    motion_begun: bool,
}

impl ContinuousAnimation {
    /// Start an ambient motion centered on the rig's current pose
    ///
    /// Returns `None` when the pose cannot anchor a drift (degenerate,
    /// or looking straight along up).
    pub(crate) fn start(rig: &mut CameraRig, spec: &ContinuousSpec) -> Option<Self> {
        let base = *rig.pose();
        let view_dir = base.view_dir()?;
        let right0 = base.right(rig.up())?;
        let cam_up = right0.cross(view_dir);

        let amp = spec.size.scale();
        let home_dist = base.focus_distance();
        let sign = spec.direction.sign();

        let track = match spec.kind {
            ContinuousKind::Zoom => {
                let (inward, outward) = zoom_ratios(spec.zoom_profile);
                let near_dist = home_dist * (1.0 - inward * amp);
                let far_dist = home_dist * (1.0 + outward * amp);
                // Advancing drifts inward so the hand-over from a
                // zoomed-out transition reads as one motion.
                if sign > 0.0 {
                    MotionTrack::Zoom {
                        from_dist: far_dist,
                        to_dist: near_dist,
                    }
                } else {
                    MotionTrack::Zoom {
                        from_dist: near_dist,
                        to_dist: far_dist,
                    }
                }
            }
            ContinuousKind::DollyZoom => {
                let (narrowing, widening) = dolly_fov_deltas(spec.zoom_profile);
                let narrow = (base.fov_deg + narrowing * amp).clamp(FOV_MIN_DEG, FOV_MAX_DEG);
                let wide = (base.fov_deg + widening * amp).clamp(FOV_MIN_DEG, FOV_MAX_DEG);
                if sign > 0.0 {
                    MotionTrack::DollyZoom {
                        from_fov: narrow,
                        to_fov: wide,
                    }
                } else {
                    MotionTrack::DollyZoom {
                        from_fov: wide,
                        to_fov: narrow,
                    }
                }
            }
            ContinuousKind::Orbit => MotionTrack::Orbit {
                half_arc: orbit_arc_deg(spec.size).to_radians() * 0.5,
                vertical: false,
            },
            ContinuousKind::OrbitVertical => MotionTrack::Orbit {
                half_arc: orbit_arc_deg(spec.size).to_radians() * 0.5,
                vertical: true,
            },
        };

        let mut anim = Self {
            track,
            base,
            view_dir,
            right0,
            cam_up,
            world_up: rig.up(),
            sign,
            tween: Tween::new(spec.duration_secs(), ProgressMode::Eased(Easing::Linear)),
            glide: None,
            phase: ContinuousPhase::Running,
            motion_begun: false,
        };

        rig.fade_mut().begin_fade_in(ENTRY_FADE_SECS);

        match spec.glide {
            Some(glide) => {
                let onto = anim.pose_at(0.0);
                anim.glide = Some(PoseGlide::new(
                    glide.from,
                    onto,
                    glide.duration_ms,
                    Easing::EaseInOut,
                ));
                anim.phase = ContinuousPhase::Gliding;
                rig.set_pose(glide.from);
            }
            None => {
                anim.motion_begun = true;
                anim.apply(rig, 0.0);
            }
        }

        Some(anim)
    }

    /// Advance by `dt` seconds; returns true when the motion finished
    pub(crate) fn tick(&mut self, rig: &mut CameraRig, dt: f32) -> bool {
        match self.phase {
            ContinuousPhase::Gliding => {
                let landed = match &mut self.glide {
                    Some(glide) => glide.tick(rig, dt),
                    None => true,
                };
                if landed {
                    self.glide = None;
                    self.phase = ContinuousPhase::Running;
                    self.motion_begun = true;
                    self.apply(rig, 0.0);
                }
                false
            }
            ContinuousPhase::Running => match self.tween.tick(dt) {
                TweenStatus::Delayed => false,
                TweenStatus::Running => {
                    self.apply(rig, self.tween.progress());
                    false
                }
                TweenStatus::Finished => {
                    self.apply(rig, 1.0);
                    true
                }
            },
        }
    }

    /// Whether the drift itself started moving since the last call;
    /// stays false while the entry glide is still in flight.
    pub(crate) fn take_motion_begun(&mut self) -> bool {
        std::mem::take(&mut self.motion_begun)
    }

    pub(crate) fn pause(&mut self) {
        self.tween.pause();
        if let Some(glide) = &mut self.glide {
            glide.pause();
        }
    }

    pub(crate) fn resume(&mut self) {
        self.tween.resume();
        if let Some(glide) = &mut self.glide {
            glide.resume();
        }
    }

    fn apply(&self, rig: &mut CameraRig, t: f32) {
        let pose = self.pose_at(t);
        if (pose.fov_deg - rig.pose().fov_deg).abs() > 1e-4 {
            rig.set_fov(pose.fov_deg);
        }
        rig.update_pose(|p| {
            p.position = pose.position;
            p.target = pose.target;
        });
    }

    fn pose_at(&self, t: f32) -> CameraPose {
        let t = t.clamp(0.0, 1.0);
        let mut pose = self.base;
        match self.track {
            MotionTrack::Zoom { from_dist, to_dist } => {
                let dist = from_dist + (to_dist - from_dist) * t;
                pose.position = self.base.target - self.view_dir * dist;
            }
            MotionTrack::DollyZoom { from_fov, to_fov } => {
                let fov = from_fov + (to_fov - from_fov) * t;
                let dist =
                    self.base.focus_distance() * half_tan(self.base.fov_deg) / half_tan(fov);
                pose.fov_deg = fov;
                pose.position = self.base.target - self.view_dir * dist;
            }
            MotionTrack::Orbit { half_arc, vertical } => {
                // The arc runs end to end and passes through home at the
                // midpoint.
                let angle = self.sign * half_arc * (2.0 * t - 1.0);
                let offset0 = self.base.position - self.base.target;
                let radius = offset0.length();

                let axis = if vertical { self.right0 } else { self.world_up };
                let mut offset = rotate_about_axis(offset0, axis, angle);
                if vertical {
                    offset = Spherical::from_offset(offset).clamp_poles().to_offset();
                }

                let pan_axis = if vertical { self.cam_up } else { self.right0 };
                pose.target = self.base.target + pan_axis * (ORBIT_PARALLAX * angle * radius);
                pose.position = self.base.target + offset;
            }
        }
        pose
    }
}
