//! Slide transition driver
//!
//! Runs one half of a slide change: the outgoing departure from the
//! current pose or the incoming arrival at the next slide's home pose.
//! The camera path comes from the geometry resolver; the stage fade is
//! decoupled from the camera tween and fires from the timer queue at
//! the configured fade point.

use tracing::debug;
use vantage_core::{
    rotate_about_axis, CameraPose, CameraRig, TransitionMode, Vec3, FOV_MAX_DEG, FOV_MIN_DEG,
};

use crate::geometry::{resolve_slide_geometry, SlidePhase, TransitionGeometry};
use crate::presets::TransitionSpec;
use crate::timer::{TimerAction, TimerId, TimerQueue};
use crate::tween::{Tween, TweenStatus};

/// Seconds the incoming camera holds still while the stage fades in
pub const SLIDE_IN_CAMERA_DELAY: f32 = 0.12;
/// Fraction of the base field of view a dolly-zoom transition sweeps at
/// full amount
pub const DOLLY_FOV_SWEEP: f32 = 0.5;
/// Shortest stage fade a transition schedules
const MIN_FADE_SECS: f32 = 0.1;

/// Field-of-view sweep with distance compensation (dolly-zoom)
#[derive(Clone, Copy, Debug)]
struct FovSweep {
    from_deg: f32,
    to_deg: f32,
    /// Reference fov/distance pair whose apparent subject size the
    /// sweep preserves
    ref_fov_deg: f32,
    ref_distance: f32,
    view_dir: Vec3,
    target: Vec3,
}

impl FovSweep {
    fn apply(&self, rig: &mut CameraRig, t: f32) {
        let fov = self.from_deg + (self.to_deg - self.from_deg) * t;
        let half = (fov * 0.5).to_radians();
        let ref_half = (self.ref_fov_deg * 0.5).to_radians();
        let distance = self.ref_distance * ref_half.tan() / half.tan().max(1e-6);

        let position = self.target - self.view_dir * distance;
        rig.update_pose(|pose| pose.position = position);
        rig.set_fov(fov);
    }
}

/// An in-flight slide transition
#[derive(Clone, Debug)]
pub(crate) struct SlideAnimation {
    phase: SlidePhase,
    geometry: TransitionGeometry,
    tween: Tween,
    arc_from: f32,
    arc_to: f32,
    fov: Option<FovSweep>,
    fade_timer: Option<TimerId>,
}

impl SlideAnimation {
    /// Start departing from the rig's current pose
    ///
    /// Returns `None` when the pose is degenerate; the caller treats
    /// that as an immediately-complete transition.
    pub(crate) fn outgoing(
        rig: &mut CameraRig,
        spec: &TransitionSpec,
        now: f64,
        timers: &mut TimerQueue,
    ) -> Option<Self> {
        let pose = *rig.pose();
        if pose.is_degenerate() {
            debug!("slide-out skipped: degenerate camera pose");
            return None;
        }

        let geometry = resolve_slide_geometry(
            &pose,
            rig.up(),
            spec.mode,
            spec.direction,
            spec.amount,
            SlidePhase::Out,
        );
        let duration = spec.duration_secs();

        let fade_point = duration * spec.fade_delay;
        let fade_duration = (duration - fade_point).max(MIN_FADE_SECS);
        let fade_timer = timers.schedule(
            now + fade_point as f64,
            TimerAction::BeginFadeOut {
                duration: fade_duration,
            },
        );

        let fov = dolly_sweep_out(&pose, spec);
        Some(Self {
            phase: SlidePhase::Out,
            geometry,
            tween: Tween::new(duration, spec.progress.clone()),
            arc_from: 0.0,
            arc_to: geometry.orbit_angle,
            fov,
            fade_timer: Some(fade_timer),
        })
    }

    /// Start arriving at `home`, the next slide's authored pose
    ///
    /// The camera snaps to the displaced entry pose at once, the stage
    /// begins fading in, and the camera tween runs after a short delay.
    /// Returns `None` when `home` is degenerate; the rig is then
    /// snapped straight to it.
    pub(crate) fn incoming(
        rig: &mut CameraRig,
        home: CameraPose,
        spec: &TransitionSpec,
    ) -> Option<Self> {
        let duration = spec.duration_secs();
        let fade_duration = (duration * spec.fade_delay).max(MIN_FADE_SECS);
        rig.fade_mut().begin_fade_in(fade_duration);

        if home.is_degenerate() {
            debug!("slide-in snapped: degenerate home pose");
            rig.set_pose(home);
            return None;
        }

        let geometry = resolve_slide_geometry(
            &home,
            rig.up(),
            spec.mode,
            spec.direction,
            spec.amount,
            SlidePhase::In,
        );

        let fov = dolly_sweep_in(&home, spec);
        let mut anim = Self {
            phase: SlidePhase::In,
            geometry,
            tween: Tween::new(duration, spec.progress.clone()).with_delay(SLIDE_IN_CAMERA_DELAY),
            arc_from: -geometry.orbit_angle,
            arc_to: 0.0,
            fov,
            fade_timer: None,
        };
        // Adopt the destination's projection, then hold at the entry
        // pose through the camera delay
        rig.set_pose(home);
        anim.apply(rig, 0.0);
        Some(anim)
    }

    pub(crate) fn phase(&self) -> SlidePhase {
        self.phase
    }

    pub(crate) fn fade_timer(&self) -> Option<TimerId> {
        self.fade_timer
    }

    /// Advance by `dt` seconds; returns `true` when the camera path is
    /// done (the stage fade may still be running)
    pub(crate) fn tick(&mut self, rig: &mut CameraRig, dt: f32) -> bool {
        match self.tween.tick(dt) {
            TweenStatus::Delayed => false,
            TweenStatus::Running => {
                self.apply(rig, self.tween.progress());
                false
            }
            TweenStatus::Finished => {
                self.apply(rig, 1.0);
                true
            }
        }
    }

    fn apply(&self, rig: &mut CameraRig, t: f32) {
        if let Some(sweep) = &self.fov {
            sweep.apply(rig, t);
            return;
        }

        let geo = &self.geometry;
        let (mut position, target) = if t >= 1.0 {
            (geo.end_position, geo.end_target)
        } else {
            (
                geo.start_position.lerp(geo.end_position, t),
                geo.start_target.lerp(geo.end_target, t),
            )
        };

        let arc = self.arc_from + (self.arc_to - self.arc_from) * t;
        if arc.abs() > 1e-7 {
            let offset = position - target;
            position = target + rotate_about_axis(offset, geo.orbit_axis, arc);
        }

        rig.update_pose(|pose| {
            pose.position = position;
            pose.target = target;
        });
    }
}

fn dolly_sweep_out(pose: &CameraPose, spec: &TransitionSpec) -> Option<FovSweep> {
    if spec.mode != TransitionMode::DollyZoom {
        return None;
    }
    let view_dir = pose.view_dir()?;
    let from = pose.fov_deg;
    let to = (from * (1.0 - spec.direction.sign() * spec.amount * DOLLY_FOV_SWEEP))
        .clamp(FOV_MIN_DEG, FOV_MAX_DEG);
    Some(FovSweep {
        from_deg: from,
        to_deg: to,
        ref_fov_deg: from,
        ref_distance: pose.focus_distance(),
        view_dir,
        target: pose.target,
    })
}

fn dolly_sweep_in(home: &CameraPose, spec: &TransitionSpec) -> Option<FovSweep> {
    if spec.mode != TransitionMode::DollyZoom {
        return None;
    }
    let view_dir = home.view_dir()?;
    let to = home.fov_deg;
    let from = (to * (1.0 + spec.direction.sign() * spec.amount * DOLLY_FOV_SWEEP))
        .clamp(FOV_MIN_DEG, FOV_MAX_DEG);
    Some(FovSweep {
        from_deg: from,
        to_deg: to,
        ref_fov_deg: to,
        ref_distance: home.focus_distance(),
        view_dir,
        target: home.target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::Direction;

    fn rig() -> CameraRig {
        CameraRig::new(CameraPose::new(Vec3::new(0.0, 1.0, 6.0), Vec3::new(0.0, 1.0, 0.0)))
    }

    fn spec(mode: TransitionMode) -> TransitionSpec {
        TransitionSpec::new(mode)
            .with_direction(Direction::Next)
            .with_duration_ms(1000)
    }

    fn run_to_completion(anim: &mut SlideAnimation, rig: &mut CameraRig) {
        for _ in 0..200 {
            if anim.tick(rig, 1.0 / 60.0) {
                return;
            }
        }
        panic!("slide animation never finished");
    }

    #[test]
    fn test_outgoing_zoom_travels_toward_target() {
        let mut rig = rig();
        let mut timers = TimerQueue::new();
        let start_distance = rig.pose().focus_distance();

        let mut anim =
            SlideAnimation::outgoing(&mut rig, &spec(TransitionMode::Zoom), 0.0, &mut timers)
                .unwrap();
        run_to_completion(&mut anim, &mut rig);

        assert!(rig.pose().focus_distance() < start_distance);
        // Fade was scheduled at the fade point
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn test_incoming_lands_exactly_on_home() {
        let mut rig = rig();
        // Stage comes in faded out, as it would after a slide-out
        rig.fade_mut().begin_fade_out(0.01);
        rig.fade_mut().tick(0.02);

        let home = CameraPose::new(Vec3::new(3.0, 0.5, -2.0), Vec3::new(0.2, 0.4, 0.6));
        let mut anim =
            SlideAnimation::incoming(&mut rig, home, &spec(TransitionMode::Horizontal)).unwrap();

        // Entry pose is displaced away from home
        assert!(rig.pose().position.distance(home.position) > 0.1);
        assert!(rig.fade().is_transitioning());

        run_to_completion(&mut anim, &mut rig);
        assert_eq!(rig.pose().position, home.position);
        assert_eq!(rig.pose().target, home.target);
    }

    #[test]
    fn test_incoming_camera_delay_holds_entry_pose() {
        let mut rig = rig();
        let home = CameraPose::new(Vec3::new(0.0, 1.0, 6.0), Vec3::new(0.0, 1.0, 0.0));
        let mut anim =
            SlideAnimation::incoming(&mut rig, home, &spec(TransitionMode::Zoom)).unwrap();
        let entry = rig.pose().position;

        // Inside the delay window nothing moves
        anim.tick(&mut rig, 0.05);
        assert_eq!(rig.pose().position, entry);

        // After the delay the camera starts traveling
        anim.tick(&mut rig, 0.2);
        assert!(rig.pose().position.distance(entry) > 1e-4);
    }

    #[test]
    fn test_degenerate_home_snaps() {
        let mut rig = rig();
        let home = CameraPose::new(Vec3::ONE, Vec3::ONE);
        let anim = SlideAnimation::incoming(&mut rig, home, &spec(TransitionMode::Zoom));
        assert!(anim.is_none());
        assert_eq!(rig.pose().position, home.position);
    }

    #[test]
    fn test_dolly_zoom_keeps_apparent_size() {
        let mut rig = rig();
        let mut timers = TimerQueue::new();
        let base = *rig.pose();
        let subject_width = base.focus_distance() * (base.fov_deg * 0.5).to_radians().tan();

        let mut anim =
            SlideAnimation::outgoing(&mut rig, &spec(TransitionMode::DollyZoom), 0.0, &mut timers)
                .unwrap();

        let mut ticks = 0;
        loop {
            let done = anim.tick(&mut rig, 1.0 / 60.0);
            let pose = rig.pose();
            let width =
                pose.focus_distance() * (pose.fov_deg * 0.5).to_radians().tan();
            assert!(
                (width - subject_width).abs() / subject_width < 1e-3,
                "apparent size drifted at tick {ticks}"
            );
            ticks += 1;
            if done {
                break;
            }
        }

        // The field of view actually moved
        assert!((rig.pose().fov_deg - base.fov_deg).abs() > 1.0);
    }

    #[test]
    fn test_fade_timer_fires_at_fade_point() {
        let mut rig = rig();
        let mut timers = TimerQueue::new();
        let spec = spec(TransitionMode::Zoom).with_fade_delay(0.7);
        let mut anim = SlideAnimation::outgoing(&mut rig, &spec, 0.0, &mut timers).unwrap();

        // Before the fade point nothing fires
        assert!(timers.fire_due(0.5).is_empty());

        let fired = timers.fire_due(0.71);
        assert_eq!(fired.len(), 1);
        match fired[0] {
            TimerAction::BeginFadeOut { duration } => {
                assert!((duration - 0.3).abs() < 1e-4);
            }
            other => panic!("unexpected action {other:?}"),
        }

        // Camera keeps moving regardless of the fade
        let before = rig.pose().position;
        anim.tick(&mut rig, 0.8);
        assert!(rig.pose().position.distance(before) > 1e-4);
    }
}
