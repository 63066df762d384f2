//! Easing functions and speed profiles
//!
//! Discrete glides use cubic easing. Slideshow transitions can instead
//! follow a speed profile: a speed-over-progress curve integrated into
//! a cumulative progress table, so the pacing is deterministic and
//! independent of frame rate.

/// Easing function applied to normalized progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic acceleration from rest
    EaseIn,
    /// Cubic deceleration to rest
    EaseOut,
    /// Cubic acceleration and deceleration
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the easing to `t` in `0.0..=1.0`
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// Speed-over-progress shape for profiled transitions
///
/// `speed_at` takes normalized time `u` and returns a relative speed;
/// only the shape matters, the profile normalizes the area under the
/// curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpeedCurve {
    /// Constant speed (plain linear progress)
    Uniform,
    /// Fast at the ends, slow through the middle
    ///
    /// `floor` is the relative speed at the midpoint; lower floors
    /// dwell longer mid-transition.
    FastSlowFast { floor: f32 },
}

impl SpeedCurve {
    /// Mild mid-transition dwell
    pub fn gentle() -> Self {
        SpeedCurve::FastSlowFast { floor: 0.55 }
    }

    /// The slideshow default
    pub fn standard() -> Self {
        SpeedCurve::FastSlowFast { floor: 0.35 }
    }

    /// Pronounced dwell for showpiece slides
    pub fn dramatic() -> Self {
        SpeedCurve::FastSlowFast { floor: 0.18 }
    }

    /// Look up a curve by its settings name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "uniform" => Some(SpeedCurve::Uniform),
            "gentle" => Some(Self::gentle()),
            "standard" => Some(Self::standard()),
            "dramatic" => Some(Self::dramatic()),
            _ => None,
        }
    }

    fn speed_at(self, u: f32) -> f32 {
        match self {
            SpeedCurve::Uniform => 1.0,
            SpeedCurve::FastSlowFast { floor } => {
                let floor = floor.clamp(0.01, 1.0);
                let centered = 2.0 * u - 1.0;
                floor + (1.0 - floor) * centered * centered
            }
        }
    }
}

/// Integrated speed curve over a fixed duration
///
/// Construction integrates the curve with the trapezoid rule and caches
/// the normalized cumulative table; `progress` afterwards is a pure
/// table lookup, so two runs with different frame timings sample the
/// identical pacing.
#[derive(Clone, Debug)]
pub struct SpeedProfile {
    duration: f32,
    /// Cumulative normalized progress at `i / SAMPLES`
    table: Vec<f32>,
}

impl SpeedProfile {
    /// Number of integration steps across the duration
    pub const SAMPLES: usize = 240;

    pub fn new(curve: SpeedCurve, duration: f32) -> Self {
        let duration = duration.max(1e-3);
        let n = Self::SAMPLES;
        let mut table = Vec::with_capacity(n + 1);
        table.push(0.0);

        let step = 1.0 / n as f32;
        let mut acc = 0.0f32;
        let mut prev = curve.speed_at(0.0);
        for i in 1..=n {
            let u = i as f32 * step;
            let speed = curve.speed_at(u);
            acc += 0.5 * (prev + speed) * step;
            table.push(acc);
            prev = speed;
        }

        // Normalize so the table ends exactly at 1
        let total = table[n];
        if total > 0.0 {
            let scale = 1.0 / total;
            for entry in table.iter_mut() {
                *entry *= scale;
            }
        }
        table[n] = 1.0;

        Self { duration, table }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Normalized progress at `t` seconds into the profile
    pub fn progress(&self, t: f32) -> f32 {
        let u = (t / self.duration).clamp(0.0, 1.0);
        let x = u * Self::SAMPLES as f32;
        let i = (x as usize).min(Self::SAMPLES - 1);
        let frac = x - i as f32;
        let a = self.table[i];
        let b = self.table[i + 1];
        a + (b - a) * frac
    }
}
