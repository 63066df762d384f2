//! Transition specs and preset resolution
//!
//! A [`TransitionSpec`] is the fully resolved description of one slide
//! transition. Resolution folds four layers, strongest first: explicit
//! caller overrides, per-file overrides, a named preset, and the global
//! defaults.

use tracing::warn;
use vantage_core::{Direction, FileSettings, TransitionMode, TransitionOverrides};

use crate::easing::{SpeedCurve, SpeedProfile};
use crate::tween::ProgressMode;

/// Global default duration when nothing else supplies one
pub const DEFAULT_DURATION_MS: u32 = 1000;
/// Global default travel amount
pub const DEFAULT_AMOUNT: f32 = 0.5;
/// Global default fade point as a fraction of the duration
pub const DEFAULT_FADE_DELAY: f32 = 0.7;

/// Fully resolved slide transition parameters
#[derive(Clone, Debug)]
pub struct TransitionSpec {
    pub mode: TransitionMode,
    pub direction: Direction,
    pub duration_ms: u32,
    /// Travel amount in `0.0..=1.0`, scaling the geometry's distances
    pub amount: f32,
    /// Point in the transition where the stage fade starts, as a
    /// fraction of the duration
    pub fade_delay: f32,
    /// How tween time maps to progress
    pub progress: ProgressMode,
}

impl TransitionSpec {
    pub fn new(mode: TransitionMode) -> Self {
        Self {
            mode,
            direction: Direction::Next,
            duration_ms: DEFAULT_DURATION_MS,
            amount: DEFAULT_AMOUNT,
            fade_delay: DEFAULT_FADE_DELAY,
            progress: ProgressMode::default(),
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_amount(mut self, amount: f32) -> Self {
        self.amount = amount.clamp(0.0, 1.0);
        self
    }

    pub fn with_fade_delay(mut self, fade_delay: f32) -> Self {
        self.fade_delay = fade_delay.clamp(0.0, 1.0);
        self
    }

    pub fn with_progress(mut self, progress: ProgressMode) -> Self {
        self.progress = progress;
        self
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f32 {
        self.duration_ms as f32 / 1000.0
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::new(TransitionMode::default())
    }
}

struct PresetValues {
    duration_ms: u32,
    amount: f32,
    fade_delay: f32,
    curve: Option<SpeedCurve>,
}

fn preset_values(name: &str) -> Option<PresetValues> {
    match name {
        // Manual prev/next navigation
        "transition" => Some(PresetValues {
            duration_ms: 1400,
            amount: 0.5,
            fade_delay: 0.7,
            curve: None,
        }),
        // Slower paced, profiled travel between slideshow slides
        "slideshow" => Some(PresetValues {
            duration_ms: 2600,
            amount: 0.4,
            fade_delay: 0.55,
            curve: Some(SpeedCurve::standard()),
        }),
        _ => None,
    }
}

/// Resolve the slide-out parameters for a transition
///
/// Precedence per field: `explicit` > the file's saved overrides >
/// `preset` > global defaults. The base `mode` applies unless an
/// override names another one. Unknown preset or curve names log a
/// warning and fall through to the next layer.
pub fn resolve_slide_out_options(
    mode: TransitionMode,
    explicit: &TransitionOverrides,
    file: Option<&FileSettings>,
    preset: Option<&str>,
) -> TransitionSpec {
    let preset_vals = preset.and_then(|name| {
        let vals = preset_values(name);
        if vals.is_none() {
            warn!(preset = name, "unknown transition preset, using defaults");
        }
        vals
    });

    let file_overrides = file.map(|f| &f.transition);
    let pick_u32 = |e: Option<u32>, f: Option<u32>, p: Option<u32>, d: u32| {
        e.or(f).or(p).unwrap_or(d)
    };
    let pick_f32 = |e: Option<f32>, f: Option<f32>, p: Option<f32>, d: f32| {
        e.or(f).or(p).unwrap_or(d)
    };

    let mode = explicit
        .mode
        .or(file_overrides.and_then(|f| f.mode))
        .unwrap_or(mode);
    let duration_ms = pick_u32(
        explicit.duration_ms,
        file_overrides.and_then(|f| f.duration_ms),
        preset_vals.as_ref().map(|p| p.duration_ms),
        DEFAULT_DURATION_MS,
    );
    let amount = pick_f32(
        explicit.amount,
        file_overrides.and_then(|f| f.amount),
        preset_vals.as_ref().map(|p| p.amount),
        DEFAULT_AMOUNT,
    )
    .clamp(0.0, 1.0);
    let fade_delay = pick_f32(
        explicit.fade_delay,
        file_overrides.and_then(|f| f.fade_delay),
        preset_vals.as_ref().map(|p| p.fade_delay),
        DEFAULT_FADE_DELAY,
    )
    .clamp(0.0, 1.0);

    // A file's named curve beats the preset's curve
    let file_curve = file.and_then(|f| f.custom_animation.as_deref()).and_then(|name| {
        let curve = SpeedCurve::by_name(name);
        if curve.is_none() {
            warn!(curve = name, "unknown speed curve in file settings");
        }
        curve
    });
    let curve = file_curve.or(preset_vals.as_ref().and_then(|p| p.curve));
    let progress = match curve {
        Some(curve) => ProgressMode::Profiled(SpeedProfile::new(curve, duration_ms as f32 / 1000.0)),
        None => ProgressMode::default(),
    };

    TransitionSpec {
        mode,
        direction: Direction::Next,
        duration_ms,
        amount,
        fade_delay,
        progress,
    }
}
