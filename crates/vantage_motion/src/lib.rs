//! Camera motion engine
//!
//! Tick-driven animation for the splat viewer's camera: slide
//! transitions, the ambient drift that plays between slide changes,
//! pose glides, and the hand-off that chains a finishing transition
//! into the next slide's motion. Everything advances from a single
//! `tick(dt)` per frame and completion is observed by polling, so the
//! crate needs no callbacks or async plumbing and behaves identically
//! at any frame rate.
//!
//! ```
//! use vantage_core::{CameraPose, CameraRig, TransitionMode, Vec3};
//! use vantage_motion::{MotionEngine, TransitionSpec};
//!
//! let rig = CameraRig::new(CameraPose::new(Vec3::new(0.0, 0.0, 8.0), Vec3::ZERO));
//! let mut engine = MotionEngine::new(rig);
//!
//! engine.slide_out(&TransitionSpec::new(TransitionMode::Zoom));
//! for _ in 0..120 {
//!     engine.tick(1.0 / 60.0);
//! }
//! assert!(engine.is_idle());
//! ```

pub mod continuous;
pub mod easing;
pub mod engine;
pub mod geometry;
pub mod glide;
pub mod presets;
pub mod slide;
pub mod timer;
pub mod tween;

pub use continuous::{ContinuousSpec, GlideSpec, DEFAULT_CONTINUOUS_MS, DEFAULT_GLIDE_IN_MS};
pub use easing::{Easing, SpeedCurve, SpeedProfile};
pub use engine::{AnimationKind, HandOff, MotionEngine, StartOutcome};
pub use geometry::{
    resolve_slide_geometry, SlidePhase, TransitionGeometry, PAN_ARC_DEG, PAN_TRAVEL,
    ZOOM_IN_TRAVEL, ZOOM_OUT_TRAVEL,
};
pub use glide::PoseGlide;
pub use presets::{
    resolve_slide_out_options, TransitionSpec, DEFAULT_AMOUNT, DEFAULT_DURATION_MS,
    DEFAULT_FADE_DELAY,
};
pub use slide::{DOLLY_FOV_SWEEP, SLIDE_IN_CAMERA_DELAY};
pub use timer::{TimerAction, TimerId, TimerQueue};
pub use tween::{ProgressMode, Tween, TweenStatus};
