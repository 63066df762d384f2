//! Motion engine
//!
//! Owns the camera rig and every in-flight animation, advanced by one
//! `tick(dt)` call per frame. At most one animation of each kind runs
//! at a time; starting a new one replaces its predecessor synchronously
//! and cancellation is always safe to call. Completion is observed by
//! polling the engine rather than by callback, and a queued hand-off
//! bridges a finishing slide transition into the next slide's ambient
//! motion without a visible cut.

use tracing::debug;
use vantage_core::{CameraPose, CameraRig, ContinuousKind, Vec3};

use crate::continuous::{ContinuousAnimation, ContinuousSpec, GlideSpec};
use crate::easing::Easing;
use crate::glide::PoseGlide;
use crate::presets::TransitionSpec;
use crate::slide::SlideAnimation;
use crate::timer::{TimerAction, TimerQueue};

/// The animation slots the engine owns, one active animation each
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    /// Outgoing or incoming slide transition
    Slide,
    /// Ambient drift between slide changes
    Continuous,
    /// Glide back to a remembered or authored pose
    Reset,
    /// Glide that re-anchors the orbit target
    Anchor,
}

/// Whether a start request actually began animating
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// The request resolved immediately; the camera was snapped or left
    /// in place instead of animated.
    Skipped,
}

impl StartOutcome {
    pub fn started(self) -> bool {
        matches!(self, StartOutcome::Started)
    }
}

/// Deferred slide change that fires once the stage is clear
///
/// Queued while a slide transition is still running; when no slide and
/// no ambient motion is active the engine applies the mutation (usually
/// snapping to the next slide's home pose) and starts the ambient
/// motion, gliding in from wherever the camera stopped.
pub struct HandOff {
    pub apply: Box<dyn FnOnce(&mut CameraRig)>,
    pub motion: ContinuousSpec,
}

/// Single owner of the rig and all camera animations
pub struct MotionEngine {
    rig: CameraRig,
    /// Engine time in seconds, advanced by `tick`
    clock: f64,
    timers: TimerQueue,
    slide: Option<SlideAnimation>,
    continuous: Option<ContinuousAnimation>,
    reset: Option<PoseGlide>,
    anchor: Option<PoseGlide>,
    handoff: Option<HandOff>,
    /// Ambient pause requested while none (or a hand-off's) is running
    continuous_paused: bool,
    continuous_started: bool,
    anchor_settled: Option<f32>,
}

impl MotionEngine {
    pub fn new(rig: CameraRig) -> Self {
        Self {
            rig,
            clock: 0.0,
            timers: TimerQueue::new(),
            slide: None,
            continuous: None,
            reset: None,
            anchor: None,
            handoff: None,
            continuous_paused: false,
            continuous_started: false,
            anchor_settled: None,
        }
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    /// Seconds of engine time advanced so far
    pub fn now(&self) -> f64 {
        self.clock
    }

    /// Advance the clock, fire due timers, and tick every active
    /// animation
    pub fn tick(&mut self, dt: f32) {
        self.clock += dt as f64;

        for action in self.timers.fire_due(self.clock) {
            match action {
                TimerAction::BeginFadeOut { duration } => {
                    self.rig.fade_mut().begin_fade_out(duration)
                }
                TimerAction::BeginFadeIn { duration } => {
                    self.rig.fade_mut().begin_fade_in(duration)
                }
            }
        }
        if self.rig.fade().is_transitioning() {
            self.rig.fade_mut().tick(dt);
            self.rig.render_signal().request();
        }

        let continuous_done = match &mut self.continuous {
            Some(anim) => {
                let done = anim.tick(&mut self.rig, dt);
                if anim.take_motion_begun() {
                    self.continuous_started = true;
                }
                done
            }
            None => false,
        };
        if continuous_done {
            debug!("ambient motion finished");
            self.continuous = None;
            self.rig.orbit_mut().restore_limits();
        }

        let slide_done = match &mut self.slide {
            Some(anim) => anim.tick(&mut self.rig, dt),
            None => false,
        };
        if slide_done {
            debug!("slide transition finished");
            self.slide = None;
        }

        let reset_done = match &mut self.reset {
            Some(glide) => glide.tick(&mut self.rig, dt),
            None => false,
        };
        if reset_done {
            self.reset = None;
        }

        let anchor_done = match &mut self.anchor {
            Some(glide) => glide.tick(&mut self.rig, dt),
            None => false,
        };
        if anchor_done {
            self.anchor = None;
            self.anchor_settled = Some(self.rig.pose().focus_distance());
        }

        // A queued hand-off waits until the stage is clear.
        if self.slide.is_none() && self.continuous.is_none() {
            if let Some(handoff) = self.handoff.take() {
                self.fire_handoff(handoff);
            }
        }
    }

    /// Start the departure half of a slide transition
    ///
    /// Replaces a running slide transition. Skipped requests leave the
    /// camera where it is.
    pub fn slide_out(&mut self, spec: &TransitionSpec) -> StartOutcome {
        self.cancel(AnimationKind::Slide);
        match SlideAnimation::outgoing(&mut self.rig, spec, self.clock, &mut self.timers) {
            Some(anim) => {
                self.slide = Some(anim);
                StartOutcome::Started
            }
            None => StartOutcome::Skipped,
        }
    }

    /// Start the arrival half of a slide transition, landing on `home`
    ///
    /// Skipped requests snap the rig straight to `home`.
    pub fn slide_in(&mut self, home: CameraPose, spec: &TransitionSpec) -> StartOutcome {
        self.cancel(AnimationKind::Slide);
        match SlideAnimation::incoming(&mut self.rig, home, spec) {
            Some(anim) => {
                self.slide = Some(anim);
                StartOutcome::Started
            }
            None => StartOutcome::Skipped,
        }
    }

    /// Start an ambient motion centered on the current pose
    ///
    /// Orbit motions widen the rig's angle limits for their duration;
    /// the limits are restored when the motion ends or is cancelled.
    pub fn start_continuous(&mut self, spec: &ContinuousSpec) -> StartOutcome {
        self.cancel(AnimationKind::Continuous);
        self.continuous_paused = false;

        if matches!(
            spec.kind,
            ContinuousKind::Orbit | ContinuousKind::OrbitVertical
        ) {
            self.rig.orbit_mut().widen_for_motion();
        }
        match ContinuousAnimation::start(&mut self.rig, spec) {
            Some(anim) => {
                if spec.glide.is_none() {
                    self.continuous_started = true;
                }
                self.continuous = Some(anim);
                StartOutcome::Started
            }
            None => {
                debug!("ambient motion skipped: pose cannot anchor a drift");
                self.rig.orbit_mut().restore_limits();
                StartOutcome::Skipped
            }
        }
    }

    /// Glide the camera to `pose`, the reset and view-recall path
    pub fn glide_to(&mut self, pose: CameraPose, duration_ms: u32, easing: Easing) -> StartOutcome {
        self.cancel(AnimationKind::Reset);
        let from = *self.rig.pose();
        self.reset = Some(PoseGlide::new(from, pose, duration_ms, easing));
        StartOutcome::Started
    }

    /// Glide only the orbit target to `target`, keeping the camera
    /// position; completion is reported via [`take_anchor_settled`].
    ///
    /// [`take_anchor_settled`]: MotionEngine::take_anchor_settled
    pub fn glide_target_to(&mut self, target: Vec3, duration_ms: u32) -> StartOutcome {
        self.cancel(AnimationKind::Anchor);
        let from = *self.rig.pose();
        let mut to = from;
        to.target = target;
        if to.is_degenerate() {
            debug!("anchor glide skipped: target coincides with the camera");
            return StartOutcome::Skipped;
        }
        self.anchor = Some(PoseGlide::new(from, to, duration_ms, Easing::EaseInOut));
        StartOutcome::Started
    }

    /// Queue a slide change to fire once no slide transition and no
    /// ambient motion is active. A second call replaces the queued one.
    pub fn queue_handoff(&mut self, handoff: HandOff) {
        if self.handoff.replace(handoff).is_some() {
            debug!("queued hand-off replaced");
        }
    }

    /// Pause the ambient motion; one started later by a hand-off starts
    /// paused as well.
    pub fn pause_continuous(&mut self) {
        self.continuous_paused = true;
        if let Some(anim) = &mut self.continuous {
            anim.pause();
        }
    }

    pub fn resume_continuous(&mut self) {
        self.continuous_paused = false;
        if let Some(anim) = &mut self.continuous {
            anim.resume();
        }
    }

    /// Cancel one animation kind; a no-op when none is running
    pub fn cancel(&mut self, kind: AnimationKind) {
        match kind {
            AnimationKind::Slide => {
                if let Some(anim) = self.slide.take() {
                    if let Some(timer) = anim.fade_timer() {
                        self.timers.cancel(timer);
                    }
                    // Do not leave the stage half faded.
                    if self.rig.fade().is_transitioning() {
                        self.rig.fade_mut().reset();
                    }
                }
            }
            AnimationKind::Continuous => {
                if self.continuous.take().is_some() {
                    self.rig.orbit_mut().restore_limits();
                }
            }
            AnimationKind::Reset => {
                self.reset = None;
            }
            AnimationKind::Anchor => {
                self.anchor = None;
            }
        }
    }

    /// Cancel every animation, the queued hand-off, and all timers
    pub fn cancel_all(&mut self) {
        self.cancel(AnimationKind::Slide);
        self.cancel(AnimationKind::Continuous);
        self.cancel(AnimationKind::Reset);
        self.cancel(AnimationKind::Anchor);
        self.handoff = None;
        self.continuous_paused = false;
        self.timers.clear();
    }

    /// The user grabbed the camera: ambient and glide motion yields,
    /// a slide transition keeps running, a queued hand-off is dropped.
    pub fn notify_user_input(&mut self) {
        self.cancel(AnimationKind::Continuous);
        self.cancel(AnimationKind::Reset);
        self.cancel(AnimationKind::Anchor);
        if self.handoff.take().is_some() {
            debug!("queued hand-off dropped on user input");
        }
    }

    pub fn is_active(&self, kind: AnimationKind) -> bool {
        match kind {
            AnimationKind::Slide => self.slide.is_some(),
            AnimationKind::Continuous => self.continuous.is_some(),
            AnimationKind::Reset => self.reset.is_some(),
            AnimationKind::Anchor => self.anchor.is_some(),
        }
    }

    /// Whether nothing is animating and no hand-off is queued
    pub fn is_idle(&self) -> bool {
        self.slide.is_none()
            && self.continuous.is_none()
            && self.reset.is_none()
            && self.anchor.is_none()
            && self.handoff.is_none()
    }

    /// Whether an ambient drift began moving since the last call; stays
    /// false while an entry glide is still in flight
    pub fn take_continuous_started(&mut self) -> bool {
        std::mem::take(&mut self.continuous_started)
    }

    /// Focus distance after an anchor glide settled, reported once
    pub fn take_anchor_settled(&mut self) -> Option<f32> {
        self.anchor_settled.take()
    }

    fn fire_handoff(&mut self, handoff: HandOff) {
        debug!("firing queued slide hand-off");
        let was_paused = self.continuous_paused;
        let from = *self.rig.pose();
        (handoff.apply)(&mut self.rig);

        let mut spec = handoff.motion;
        if spec.glide.is_none() {
            spec.glide = Some(GlideSpec::new(from));
        }
        self.start_continuous(&spec);
        if was_paused {
            self.pause_continuous();
        }
    }
}
