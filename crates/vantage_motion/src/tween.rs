//! Tween driver
//!
//! A single time-boxed animation advanced by `tick(dt)`. Progress comes
//! from either an easing function or an integrated speed profile; the
//! tween itself only tracks time, delay, and pause state.

use crate::easing::{Easing, SpeedProfile};

/// How a tween maps elapsed time to progress
#[derive(Clone, Debug)]
pub enum ProgressMode {
    Eased(Easing),
    Profiled(SpeedProfile),
}

impl Default for ProgressMode {
    fn default() -> Self {
        ProgressMode::Eased(Easing::EaseInOut)
    }
}

/// Result of advancing a tween
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenStatus {
    /// Still inside the start delay
    Delayed,
    /// Advancing
    Running,
    /// Reached the end this tick (reported once; later ticks keep
    /// returning `Finished`)
    Finished,
}

/// Time-boxed animation state
#[derive(Clone, Debug)]
pub struct Tween {
    duration: f32,
    delay: f32,
    elapsed: f32,
    paused: bool,
    mode: ProgressMode,
}

impl Tween {
    /// Create a tween running for `duration` seconds
    pub fn new(duration: f32, mode: ProgressMode) -> Self {
        Self {
            duration: duration.max(0.0),
            delay: 0.0,
            elapsed: 0.0,
            paused: false,
            mode,
        }
    }

    /// Delay the start by `delay` seconds
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> TweenStatus {
        if !self.paused {
            self.elapsed += dt;
        }
        if self.elapsed < self.delay {
            return TweenStatus::Delayed;
        }
        if self.is_finished() {
            TweenStatus::Finished
        } else {
            TweenStatus::Running
        }
    }

    /// Eased (or profiled) progress in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        let raw = self.raw_progress();
        match &self.mode {
            ProgressMode::Eased(easing) => easing.apply(raw),
            ProgressMode::Profiled(profile) => profile.progress(raw * self.duration),
        }
    }

    /// Linear progress in `0.0..=1.0`, before easing
    pub fn raw_progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed - self.delay >= self.duration
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Seconds left until the tween finishes (delay included)
    pub fn remaining(&self) -> f32 {
        (self.delay + self.duration - self.elapsed).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_tween() {
        let mut tween = Tween::new(1.0, ProgressMode::Eased(Easing::Linear));

        assert_eq!(tween.tick(0.25), TweenStatus::Running);
        assert!((tween.progress() - 0.25).abs() < 1e-6);

        assert_eq!(tween.tick(0.5), TweenStatus::Running);
        assert!((tween.progress() - 0.75).abs() < 1e-6);

        assert_eq!(tween.tick(0.5), TweenStatus::Finished);
        assert!((tween.progress() - 1.0).abs() < 1e-6);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_delay_holds_progress() {
        let mut tween = Tween::new(1.0, ProgressMode::Eased(Easing::Linear)).with_delay(0.12);

        assert_eq!(tween.tick(0.06), TweenStatus::Delayed);
        assert!(tween.progress().abs() < 1e-6);

        assert_eq!(tween.tick(0.06), TweenStatus::Running);
        assert!(tween.progress().abs() < 1e-6);

        tween.tick(0.5);
        assert!((tween.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_pause_freezes_time() {
        let mut tween = Tween::new(1.0, ProgressMode::Eased(Easing::Linear));
        tween.tick(0.3);
        tween.pause();

        tween.tick(5.0);
        assert!((tween.progress() - 0.3).abs() < 1e-6);
        assert!(!tween.is_finished());

        tween.resume();
        tween.tick(0.7);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut tween = Tween::new(0.0, ProgressMode::default());
        assert_eq!(tween.tick(0.0), TweenStatus::Finished);
        assert!((tween.progress() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_remaining() {
        let mut tween = Tween::new(2.0, ProgressMode::Eased(Easing::Linear)).with_delay(0.5);
        assert!((tween.remaining() - 2.5).abs() < 1e-6);

        tween.tick(1.0);
        assert!((tween.remaining() - 1.5).abs() < 1e-6);

        tween.tick(10.0);
        assert!(tween.remaining().abs() < 1e-6);
    }
}
