//! Slideshow controller
//!
//! Drives automatic slide advancement on top of the motion engine: hold
//! the current slide, transition out, swap the asset, transition (or
//! hand off into ambient motion) in, repeat. The controller owns no
//! clock of its own; it reads the engine's and is advanced by one
//! `tick` per frame, after the engine's.
//!
//! Pausing snapshots the camera pose and the unexpired part of the
//! hold, so resuming glides back and picks the schedule up where it
//! stopped. A resume whose snapshot no longer matches the displayed
//! asset (the show was advanced while paused) discards the snapshot and
//! starts a fresh hold instead.

use tracing::{debug, warn};
use vantage_core::{
    AssetNavigator, CameraPose, ContinuousKind, Direction, NavError, TransitionMode,
    TransitionOverrides,
};
use vantage_motion::{
    resolve_slide_out_options, AnimationKind, ContinuousSpec, Easing, HandOff, MotionEngine,
    StartOutcome, TransitionSpec,
};

/// Glide back to the paused pose on resume
const RESUME_GLIDE_MS: u32 = 500;
/// Shortest hold between a drift starting and the next advance
const MIN_MOTION_HOLD_MS: u32 = 500;

/// Lifecycle of the slideshow
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Where the controller stands inside one slide cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Waiting out the hold on the current slide
    Holding,
    /// Outgoing transition running
    SlidingOut,
    /// Hand-off queued; waiting for the next slide's drift to begin
    AwaitingMotion,
    /// Incoming transition running
    SlidingIn,
    /// Glide back to the paused pose running
    Resuming,
}

/// Camera and schedule state captured when the slideshow pauses
#[derive(Clone, Copy, Debug)]
struct PauseSnapshot {
    pose: CameraPose,
    /// Seconds of hold that had not expired when the pause hit
    remaining_hold: f64,
    had_active_continuous: bool,
    /// Paused while the next slide's drift was still pending; resume
    /// re-enters the wait instead of re-advancing
    awaiting_motion: bool,
    asset_index: usize,
}

/// Slideshow configuration
#[derive(Clone, Debug)]
pub struct SlideshowOptions {
    /// How long each slide rests on screen, for the discrete transition
    /// modes
    pub slide_duration_ms: u32,
    /// Transition played between slides
    pub transition: TransitionSpec,
    /// Ambient motion for the continuous transition modes; derived from
    /// the transition mode when not set
    pub continuous: Option<ContinuousSpec>,
    /// How long before the ambient motion would end the next advance
    /// starts
    pub start_offset_ms: u32,
    /// Delay before a failed advance is retried
    pub advance_retry_ms: u32,
}

impl Default for SlideshowOptions {
    fn default() -> Self {
        Self {
            slide_duration_ms: 5_000,
            transition: resolve_slide_out_options(
                TransitionMode::Zoom,
                &TransitionOverrides::default(),
                None,
                Some("slideshow"),
            ),
            continuous: None,
            start_offset_ms: 1_200,
            advance_retry_ms: 2_000,
        }
    }
}

/// Automatic slide advancement state machine
pub struct SlideshowController {
    options: SlideshowOptions,
    state: PlaybackState,
    phase: Phase,
    /// Engine-clock deadline of the next advance; `None` while no hold
    /// is armed
    deadline: Option<f64>,
    snapshot: Option<PauseSnapshot>,
}

impl SlideshowController {
    pub fn new(options: SlideshowOptions) -> Self {
        Self {
            options,
            state: PlaybackState::Stopped,
            phase: Phase::Holding,
            deadline: None,
            snapshot: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::Paused
    }

    pub fn options(&self) -> &SlideshowOptions {
        &self.options
    }

    /// Start playing on the currently displayed asset
    pub fn begin(&mut self, engine: &mut MotionEngine) {
        engine.cancel_all();
        self.state = PlaybackState::Playing;
        self.snapshot = None;
        self.start_hold(engine);
        debug!("slideshow started");
    }

    /// Advance the state machine; call once per frame after
    /// [`MotionEngine::tick`]
    pub fn tick(&mut self, engine: &mut MotionEngine, nav: &mut dyn AssetNavigator) {
        if self.state != PlaybackState::Playing {
            return;
        }
        match self.phase {
            Phase::Holding => {
                if self.deadline.is_some_and(|d| engine.now() >= d) {
                    self.deadline = None;
                    self.advance(engine, nav);
                }
            }
            Phase::SlidingOut => {
                if !engine.is_active(AnimationKind::Slide) {
                    self.begin_slide_in(engine, nav);
                }
            }
            Phase::AwaitingMotion => {
                if engine.take_continuous_started() {
                    self.phase = Phase::Holding;
                    self.deadline = Some(engine.now() + self.motion_hold_secs());
                } else if engine.is_idle() {
                    // The drift never started (the new home pose could
                    // not anchor one); hold flat and keep cycling.
                    self.phase = Phase::Holding;
                    self.deadline = Some(engine.now() + self.hold_secs());
                }
            }
            Phase::SlidingIn => {
                if !engine.is_active(AnimationKind::Slide) {
                    self.phase = Phase::Holding;
                    self.deadline = Some(engine.now() + self.hold_secs());
                }
            }
            Phase::Resuming => {
                if !engine.is_active(AnimationKind::Reset) {
                    self.finish_resume(engine);
                }
            }
        }
    }

    /// Pause playback, freezing the camera where it stands
    pub fn pause(&mut self, engine: &mut MotionEngine, nav: &dyn AssetNavigator) {
        if self.state != PlaybackState::Playing {
            return;
        }
        // A pause during the resume glide keeps the original snapshot;
        // re-snapshotting mid-glide would lose the real remaining hold.
        if self.phase == Phase::Resuming {
            engine.cancel(AnimationKind::Reset);
        } else {
            let remaining = match self.phase {
                Phase::Holding => self
                    .deadline
                    .map(|d| (d - engine.now()).max(0.0))
                    .unwrap_or(0.0),
                // The asset already swapped; it gets its full hold back.
                Phase::SlidingIn => self.hold_secs(),
                _ => 0.0,
            };
            self.snapshot = Some(PauseSnapshot {
                pose: *engine.rig().pose(),
                remaining_hold: remaining,
                had_active_continuous: engine.is_active(AnimationKind::Continuous),
                awaiting_motion: self.phase == Phase::AwaitingMotion,
                asset_index: nav.current_index(),
            });
        }

        engine.pause_continuous();
        if engine.is_active(AnimationKind::Slide) {
            engine.cancel(AnimationKind::Slide);
        }
        self.deadline = None;
        self.state = PlaybackState::Paused;
        debug!("slideshow paused");
    }

    /// Resume playback from the pause snapshot
    ///
    /// The camera glides back to the paused pose, then the remaining
    /// hold runs out before the next advance. If the displayed asset
    /// changed while paused the snapshot is stale and playback restarts
    /// with a fresh hold instead of gliding back.
    pub fn resume(&mut self, engine: &mut MotionEngine, nav: &dyn AssetNavigator) {
        if self.state != PlaybackState::Paused {
            return;
        }
        self.state = PlaybackState::Playing;

        let Some(snapshot) = self.snapshot.take() else {
            self.start_hold(engine);
            return;
        };
        if snapshot.asset_index != nav.current_index() {
            debug!(
                paused_on = snapshot.asset_index,
                showing = nav.current_index(),
                "pause snapshot is stale, starting a fresh hold"
            );
            engine.cancel_all();
            self.start_hold(engine);
            return;
        }

        engine.glide_to(snapshot.pose, RESUME_GLIDE_MS, Easing::EaseInOut);
        self.phase = Phase::Resuming;
        self.snapshot = Some(snapshot);
        debug!("slideshow resuming");
    }

    /// Stop playback and cancel everything in flight
    pub fn stop(&mut self, engine: &mut MotionEngine) {
        if self.state == PlaybackState::Stopped {
            return;
        }
        engine.cancel_all();
        self.state = PlaybackState::Stopped;
        self.phase = Phase::Holding;
        self.deadline = None;
        self.snapshot = None;
        debug!("slideshow stopped");
    }

    fn continuous_mode(&self) -> bool {
        self.options.transition.mode.is_continuous()
    }

    fn hold_secs(&self) -> f64 {
        self.options.slide_duration_ms as f64 / 1000.0
    }

    /// Hold for a continuous mode: the drift's duration minus the
    /// advance lead, so the outgoing transition starts before the drift
    /// runs dry.
    fn motion_hold_secs(&self) -> f64 {
        let motion_ms = self.continuous_spec().duration_ms;
        let hold_ms = motion_ms
            .saturating_sub(self.options.start_offset_ms)
            .max(MIN_MOTION_HOLD_MS);
        hold_ms as f64 / 1000.0
    }

    fn continuous_spec(&self) -> ContinuousSpec {
        let direction = self.options.transition.direction;
        match self.options.continuous {
            Some(spec) => spec.with_direction(direction),
            None => {
                let kind = self
                    .options
                    .transition
                    .mode
                    .continuous_kind()
                    .unwrap_or(ContinuousKind::Zoom);
                ContinuousSpec::new(kind).with_direction(direction)
            }
        }
    }

    fn start_hold(&mut self, engine: &mut MotionEngine) {
        self.phase = Phase::Holding;
        if self.continuous_mode() {
            let spec = self.continuous_spec();
            if engine.start_continuous(&spec) == StartOutcome::Started {
                engine.take_continuous_started();
                self.deadline = Some(engine.now() + self.motion_hold_secs());
                return;
            }
        }
        self.deadline = Some(engine.now() + self.hold_secs());
    }

    fn advance(&mut self, engine: &mut MotionEngine, nav: &mut dyn AssetNavigator) {
        let spec = self.options.transition.clone();
        if self.continuous_mode() {
            // The asset loads while the stage fades out; the hand-off
            // snaps to its home pose once the stage is clear.
            match self.advance_asset(nav) {
                Ok(index) => {
                    debug!(index, "advancing into next drift");
                    engine.cancel(AnimationKind::Continuous);
                    engine.slide_out(&spec);
                    let home = nav.home_pose();
                    engine.queue_handoff(HandOff {
                        apply: Box::new(move |rig| rig.set_pose(home)),
                        motion: self.continuous_spec(),
                    });
                    self.phase = Phase::AwaitingMotion;
                }
                Err(err) => self.schedule_retry(engine, &err),
            }
        } else {
            engine.cancel(AnimationKind::Continuous);
            engine.slide_out(&spec);
            self.phase = Phase::SlidingOut;
        }
    }

    fn begin_slide_in(&mut self, engine: &mut MotionEngine, nav: &mut dyn AssetNavigator) {
        match self.advance_asset(nav) {
            Ok(index) => {
                debug!(index, "slide advanced");
                engine.slide_in(nav.home_pose(), &self.options.transition);
                self.phase = Phase::SlidingIn;
            }
            Err(err) => self.schedule_retry(engine, &err),
        }
    }

    fn advance_asset(&self, nav: &mut dyn AssetNavigator) -> Result<usize, NavError> {
        match self.options.transition.direction {
            Direction::Next => nav.load_next(),
            Direction::Prev => nav.load_prev(),
        }
    }

    fn schedule_retry(&mut self, engine: &MotionEngine, err: &NavError) {
        warn!("slide advance failed: {}; retrying", err);
        self.phase = Phase::Holding;
        self.deadline = Some(engine.now() + self.options.advance_retry_ms as f64 / 1000.0);
    }

    fn finish_resume(&mut self, engine: &mut MotionEngine) {
        let Some(snapshot) = self.snapshot.take() else {
            self.start_hold(engine);
            return;
        };
        // Unfreeze the drift we paused, or one a hand-off started while
        // the show was paused.
        if snapshot.had_active_continuous || engine.is_active(AnimationKind::Continuous) {
            engine.resume_continuous();
        }
        if snapshot.awaiting_motion {
            self.phase = Phase::AwaitingMotion;
            debug!("slideshow resumed into a pending drift");
            return;
        }
        self.phase = Phase::Holding;
        self.deadline = Some(engine.now() + snapshot.remaining_hold);
        debug!("slideshow resumed");
    }
}

impl Default for SlideshowController {
    fn default() -> Self {
        Self::new(SlideshowOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::{CameraRig, Vec3};

    const DT: f32 = 1.0 / 60.0;

    struct TestNav {
        index: usize,
        homes: Vec<CameraPose>,
        fail_next: bool,
    }

    impl TestNav {
        fn new(count: usize) -> Self {
            let homes = (0..count)
                .map(|i| {
                    CameraPose::new(
                        Vec3::new(i as f32, 0.0, 5.0 + i as f32),
                        Vec3::new(i as f32, 0.0, 0.0),
                    )
                })
                .collect();
            Self {
                index: 0,
                homes,
                fail_next: false,
            }
        }
    }

    impl AssetNavigator for TestNav {
        fn current_index(&self) -> usize {
            self.index
        }

        fn asset_count(&self) -> usize {
            self.homes.len()
        }

        fn load_next(&mut self) -> Result<usize, NavError> {
            if self.fail_next {
                return Err(NavError::LoadFailed("simulated".into()));
            }
            self.index = (self.index + 1) % self.homes.len();
            Ok(self.index)
        }

        fn load_prev(&mut self) -> Result<usize, NavError> {
            self.index = (self.index + self.homes.len() - 1) % self.homes.len();
            Ok(self.index)
        }

        fn home_pose(&self) -> CameraPose {
            self.homes[self.index]
        }
    }

    fn engine_for(nav: &TestNav) -> MotionEngine {
        MotionEngine::new(CameraRig::new(nav.home_pose()))
    }

    fn run(
        engine: &mut MotionEngine,
        show: &mut SlideshowController,
        nav: &mut TestNav,
        secs: f32,
    ) {
        let steps = (secs / DT).ceil() as usize;
        for _ in 0..steps {
            engine.tick(DT);
            show.tick(engine, nav);
        }
    }

    fn discrete_options() -> SlideshowOptions {
        SlideshowOptions {
            slide_duration_ms: 1_000,
            transition: TransitionSpec::new(TransitionMode::Zoom).with_duration_ms(400),
            continuous: None,
            start_offset_ms: 1_200,
            advance_retry_ms: 800,
        }
    }

    #[test]
    fn test_discrete_cycle_advances_assets() {
        let mut nav = TestNav::new(4);
        let mut engine = engine_for(&nav);
        let mut show = SlideshowController::new(discrete_options());

        show.begin(&mut engine);
        assert!(show.is_playing());

        run(&mut engine, &mut show, &mut nav, 0.9);
        assert_eq!(nav.current_index(), 0);

        // Advance fires at 1.0s; the asset swaps once the outgoing
        // transition lands.
        run(&mut engine, &mut show, &mut nav, 0.7);
        assert_eq!(nav.current_index(), 1);

        run(&mut engine, &mut show, &mut nav, 1.9);
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn test_continuous_cycle_hands_off_between_drifts() {
        let mut nav = TestNav::new(4);
        let mut engine = engine_for(&nav);
        let mut show = SlideshowController::new(SlideshowOptions {
            slide_duration_ms: 1_000,
            transition: TransitionSpec::new(TransitionMode::ContinuousZoom).with_duration_ms(600),
            continuous: Some(ContinuousSpec::new(ContinuousKind::Zoom).with_duration_ms(3_000)),
            start_offset_ms: 1_200,
            advance_retry_ms: 800,
        });

        // Hold is the drift length minus the lead: 1.8s.
        show.begin(&mut engine);
        assert!(engine.is_active(AnimationKind::Continuous));

        run(&mut engine, &mut show, &mut nav, 1.0);
        assert_eq!(nav.current_index(), 0);

        // The advance at 1.8s loads the asset up front.
        run(&mut engine, &mut show, &mut nav, 1.0);
        assert_eq!(nav.current_index(), 1);

        // Transition, hand-off, and entry glide later the next drift
        // is running.
        run(&mut engine, &mut show, &mut nav, 1.5);
        assert!(engine.is_active(AnimationKind::Continuous));
        assert!(engine
            .rig()
            .pose()
            .target
            .approx_eq(nav.home_pose().target, 1e-3));

        // And the cycle repeats.
        run(&mut engine, &mut show, &mut nav, 1.9);
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn test_pause_keeps_remaining_hold() {
        let mut nav = TestNav::new(3);
        let mut engine = engine_for(&nav);
        let mut show = SlideshowController::new(SlideshowOptions {
            slide_duration_ms: 2_000,
            transition: TransitionSpec::new(TransitionMode::Zoom).with_duration_ms(300),
            ..discrete_options()
        });

        show.begin(&mut engine);
        run(&mut engine, &mut show, &mut nav, 0.5);
        let paused_pose = *engine.rig().pose();
        show.pause(&mut engine, &nav);
        assert!(show.is_paused());

        // Nothing advances while paused, even as the engine keeps
        // ticking.
        run(&mut engine, &mut show, &mut nav, 1.0);
        assert_eq!(nav.current_index(), 0);

        // The user dragged the camera somewhere else meanwhile.
        engine
            .rig_mut()
            .set_pose(CameraPose::new(Vec3::new(9.0, 9.0, 9.0), Vec3::ZERO));

        show.resume(&mut engine, &nav);
        run(&mut engine, &mut show, &mut nav, 0.6);
        // Back on the paused pose, schedule restored.
        assert_eq!(engine.rig().pose().position, paused_pose.position);
        assert_eq!(nav.current_index(), 0);

        // About 1.5s of hold were left at pause time; the advance lands
        // once they run out.
        run(&mut engine, &mut show, &mut nav, 1.3);
        assert_eq!(nav.current_index(), 0);
        run(&mut engine, &mut show, &mut nav, 0.7);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_pause_during_handoff_wait_resumes_the_new_drift() {
        let mut nav = TestNav::new(4);
        let mut engine = engine_for(&nav);
        let mut show = SlideshowController::new(SlideshowOptions {
            slide_duration_ms: 1_000,
            transition: TransitionSpec::new(TransitionMode::ContinuousZoom).with_duration_ms(600),
            continuous: Some(ContinuousSpec::new(ContinuousKind::Zoom).with_duration_ms(3_000)),
            start_offset_ms: 1_200,
            advance_retry_ms: 800,
        });

        // Hold 1.8s; pause inside the outgoing fade of the advance.
        show.begin(&mut engine);
        run(&mut engine, &mut show, &mut nav, 2.0);
        assert_eq!(nav.current_index(), 1);
        show.pause(&mut engine, &nav);

        // The camera holds still while paused, even as the engine
        // ticks on and the queued hand-off fires.
        run(&mut engine, &mut show, &mut nav, 1.0);
        let held = *engine.rig().pose();
        run(&mut engine, &mut show, &mut nav, 0.5);
        assert_eq!(engine.rig().pose().position, held.position);

        // Resume re-enters the wait; the pending drift begins and no
        // second advance fires.
        show.resume(&mut engine, &nav);
        run(&mut engine, &mut show, &mut nav, 2.0);
        assert_eq!(nav.current_index(), 1);
        assert!(engine.is_active(AnimationKind::Continuous));

        // The new slide still gets its motion hold before the swap.
        run(&mut engine, &mut show, &mut nav, 1.5);
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn test_pause_during_resume_keeps_the_snapshot() {
        let mut nav = TestNav::new(3);
        let mut engine = engine_for(&nav);
        let mut show = SlideshowController::new(SlideshowOptions {
            slide_duration_ms: 2_000,
            transition: TransitionSpec::new(TransitionMode::Zoom).with_duration_ms(300),
            ..discrete_options()
        });

        show.begin(&mut engine);
        run(&mut engine, &mut show, &mut nav, 0.5);
        let paused_pose = *engine.rig().pose();
        show.pause(&mut engine, &nav);

        // Drag the camera away, resume, and pause again mid-glide.
        engine
            .rig_mut()
            .set_pose(CameraPose::new(Vec3::new(7.0, 7.0, 7.0), Vec3::ZERO));
        show.resume(&mut engine, &nav);
        run(&mut engine, &mut show, &mut nav, 0.2);
        show.pause(&mut engine, &nav);
        assert!(!engine.is_active(AnimationKind::Reset));

        // The second resume still glides home to the first snapshot.
        show.resume(&mut engine, &nav);
        run(&mut engine, &mut show, &mut nav, 0.6);
        assert_eq!(engine.rig().pose().position, paused_pose.position);

        // And the original remaining hold still gates the advance.
        run(&mut engine, &mut show, &mut nav, 1.2);
        assert_eq!(nav.current_index(), 0);
        run(&mut engine, &mut show, &mut nav, 0.8);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_degenerate_home_keeps_the_show_cycling() {
        let mut nav = TestNav::new(4);
        // Asset 1's authored pose cannot anchor a drift.
        nav.homes[1] = CameraPose::new(Vec3::ZERO, Vec3::ZERO);
        let mut engine = engine_for(&nav);
        let mut show = SlideshowController::new(SlideshowOptions {
            slide_duration_ms: 600,
            transition: TransitionSpec::new(TransitionMode::ContinuousZoom).with_duration_ms(300),
            continuous: Some(ContinuousSpec::new(ContinuousKind::Zoom).with_duration_ms(1_500)),
            start_offset_ms: 1_200,
            advance_retry_ms: 800,
        });

        show.begin(&mut engine);
        run(&mut engine, &mut show, &mut nav, 4.0);
        // The bad asset held flat instead of drifting, then the cycle
        // moved on and recovered.
        assert!(nav.current_index() >= 2);
        assert!(engine.is_active(AnimationKind::Continuous));
    }

    #[test]
    fn test_stale_pause_starts_fresh_hold() {
        let mut nav = TestNav::new(3);
        let mut engine = engine_for(&nav);
        let mut show = SlideshowController::new(discrete_options());

        show.begin(&mut engine);
        run(&mut engine, &mut show, &mut nav, 0.5);
        show.pause(&mut engine, &nav);

        // The host swapped slides while the show was paused.
        nav.load_next().unwrap();
        assert_eq!(nav.current_index(), 1);

        show.resume(&mut engine, &nav);
        // No glide back to the stale pose.
        assert!(!engine.is_active(AnimationKind::Reset));
        assert!(show.is_playing());

        // A fresh, full hold runs on the new slide.
        run(&mut engine, &mut show, &mut nav, 0.9);
        assert_eq!(nav.current_index(), 1);
        run(&mut engine, &mut show, &mut nav, 0.7);
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn test_pause_mid_transition_resumes_and_readvances() {
        let mut nav = TestNav::new(3);
        let mut engine = engine_for(&nav);
        let mut show = SlideshowController::new(SlideshowOptions {
            slide_duration_ms: 700,
            transition: TransitionSpec::new(TransitionMode::Zoom).with_duration_ms(400),
            ..discrete_options()
        });

        show.begin(&mut engine);
        // Land inside the outgoing transition.
        run(&mut engine, &mut show, &mut nav, 0.75);
        assert!(engine.is_active(AnimationKind::Slide));

        show.pause(&mut engine, &nav);
        assert!(!engine.is_active(AnimationKind::Slide));

        show.resume(&mut engine, &nav);
        // Glide back, then the expired hold advances straight away.
        run(&mut engine, &mut show, &mut nav, 1.2);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_failed_advance_retries() {
        let mut nav = TestNav::new(3);
        nav.fail_next = true;
        let mut engine = engine_for(&nav);
        let mut show = SlideshowController::new(SlideshowOptions {
            slide_duration_ms: 500,
            transition: TransitionSpec::new(TransitionMode::ContinuousZoom).with_duration_ms(300),
            continuous: Some(ContinuousSpec::new(ContinuousKind::Zoom).with_duration_ms(2_000)),
            start_offset_ms: 1_200,
            advance_retry_ms: 800,
        });

        // Hold 0.8s; the advance at 0.8s fails and the drift keeps
        // playing.
        show.begin(&mut engine);
        run(&mut engine, &mut show, &mut nav, 1.0);
        assert_eq!(nav.current_index(), 0);
        assert!(engine.is_active(AnimationKind::Continuous));

        // The retry 0.8s later succeeds.
        nav.fail_next = false;
        run(&mut engine, &mut show, &mut nav, 1.0);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_stop_cancels_everything() {
        let mut nav = TestNav::new(3);
        let mut engine = engine_for(&nav);
        let mut show = SlideshowController::new(SlideshowOptions {
            transition: TransitionSpec::new(TransitionMode::ContinuousOrbit).with_duration_ms(600),
            ..discrete_options()
        });

        show.begin(&mut engine);
        run(&mut engine, &mut show, &mut nav, 0.3);
        assert!(engine.is_active(AnimationKind::Continuous));

        show.stop(&mut engine);
        assert_eq!(show.state(), PlaybackState::Stopped);
        assert!(engine.is_idle());

        run(&mut engine, &mut show, &mut nav, 2.0);
        assert_eq!(nav.current_index(), 0);
        assert!(engine.is_idle());
    }

    #[test]
    fn test_pause_and_resume_require_matching_state() {
        let mut nav = TestNav::new(3);
        let mut engine = engine_for(&nav);
        let mut show = SlideshowController::new(discrete_options());

        // Neither does anything while stopped.
        show.pause(&mut engine, &nav);
        assert_eq!(show.state(), PlaybackState::Stopped);
        show.resume(&mut engine, &nav);
        assert_eq!(show.state(), PlaybackState::Stopped);
    }
}
