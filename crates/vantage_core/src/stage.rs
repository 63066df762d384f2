//! Stage fade state
//!
//! Opacity of the rendered stage during slide transitions. Slide
//! drivers start fades at scheduled points; the renderer reads the
//! current opacity each frame.

/// Which way the stage is currently fading
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FadePhase {
    /// No fade in progress
    #[default]
    Idle,
    /// Fading toward fully transparent
    FadingOut,
    /// Fading toward fully opaque
    FadingIn,
}

/// Time-driven stage opacity
#[derive(Clone, Debug)]
pub struct StageFade {
    opacity: f32,
    phase: FadePhase,
    start_opacity: f32,
    elapsed: f32,
    duration: f32,
}

impl StageFade {
    pub fn new() -> Self {
        Self {
            opacity: 1.0,
            phase: FadePhase::Idle,
            start_opacity: 1.0,
            elapsed: 0.0,
            duration: 0.0,
        }
    }

    /// Current stage opacity in `0.0..=1.0`
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    /// Whether a fade is currently running
    pub fn is_transitioning(&self) -> bool {
        self.phase != FadePhase::Idle
    }

    /// Start fading the stage out over `duration` seconds
    pub fn begin_fade_out(&mut self, duration: f32) {
        if self.opacity <= 0.0 {
            self.phase = FadePhase::Idle;
            return;
        }
        self.phase = FadePhase::FadingOut;
        self.start_opacity = self.opacity;
        self.elapsed = 0.0;
        self.duration = duration.max(1e-3);
    }

    /// Start fading the stage back in over `duration` seconds
    pub fn begin_fade_in(&mut self, duration: f32) {
        if self.opacity >= 1.0 {
            self.phase = FadePhase::Idle;
            return;
        }
        self.phase = FadePhase::FadingIn;
        self.start_opacity = self.opacity;
        self.elapsed = 0.0;
        self.duration = duration.max(1e-3);
    }

    /// Advance the fade by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        let goal = match self.phase {
            FadePhase::Idle => return,
            FadePhase::FadingOut => 0.0,
            FadePhase::FadingIn => 1.0,
        };

        self.elapsed += dt;
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.opacity = self.start_opacity + (goal - self.start_opacity) * t;

        if t >= 1.0 {
            self.opacity = goal;
            self.phase = FadePhase::Idle;
        }
    }

    /// Snap back to fully visible, dropping any fade in progress
    pub fn reset(&mut self) {
        self.opacity = 1.0;
        self.phase = FadePhase::Idle;
        self.elapsed = 0.0;
    }
}

impl Default for StageFade {
    fn default() -> Self {
        Self::new()
    }
}
