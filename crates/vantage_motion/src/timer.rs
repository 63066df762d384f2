//! Timer queue
//!
//! Cancellable one-shot actions on the motion clock. Slide transitions
//! schedule their stage fades here so a cancelled transition can revoke
//! the fade that has not fired yet.

use slotmap::SlotMap;
use smallvec::SmallVec;

slotmap::new_key_type! {
    /// Handle for a scheduled timer
    pub struct TimerId;
}

/// Deferred actions the engine applies when a timer fires
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimerAction {
    /// Start fading the stage out over `duration` seconds
    BeginFadeOut { duration: f32 },
    /// Start fading the stage in over `duration` seconds
    BeginFadeIn { duration: f32 },
}

#[derive(Clone, Debug)]
struct TimerEntry {
    deadline: f64,
    action: TimerAction,
}

/// One-shot timers keyed by absolute motion-clock deadlines
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: SlotMap<TimerId, TimerEntry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire once `now` reaches `deadline`
    pub fn schedule(&mut self, deadline: f64, action: TimerAction) -> TimerId {
        self.entries.insert(TimerEntry { deadline, action })
    }

    /// Cancel a pending timer; unknown or already-fired ids are ignored
    pub fn cancel(&mut self, id: TimerId) {
        self.entries.remove(id);
    }

    /// Remove every pending timer
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return all actions whose deadline has passed
    ///
    /// Fired actions come back ordered by deadline so a fade scheduled
    /// earlier applies before one scheduled later in the same tick.
    pub fn fire_due(&mut self, now: f64) -> SmallVec<[TimerAction; 4]> {
        let mut due: SmallVec<[(f64, TimerId); 4]> = SmallVec::new();
        for (id, entry) in self.entries.iter() {
            if entry.deadline <= now {
                due.push((entry.deadline, id));
            }
        }
        due.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut actions = SmallVec::new();
        for (_, id) in due {
            if let Some(entry) = self.entries.remove(id) {
                actions.push(entry.action);
            }
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_when_due() {
        let mut timers = TimerQueue::new();
        timers.schedule(1.0, TimerAction::BeginFadeOut { duration: 0.4 });

        assert!(timers.fire_due(0.5).is_empty());
        assert_eq!(timers.len(), 1);

        let fired = timers.fire_due(1.0);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0], TimerAction::BeginFadeOut { duration: 0.4 });
        assert!(timers.is_empty());

        // One-shot: nothing left to fire
        assert!(timers.fire_due(2.0).is_empty());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(1.0, TimerAction::BeginFadeIn { duration: 0.2 });
        timers.cancel(id);

        assert!(timers.fire_due(5.0).is_empty());

        // Cancelling again is harmless
        timers.cancel(id);
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(2.0, TimerAction::BeginFadeIn { duration: 0.3 });
        timers.schedule(1.0, TimerAction::BeginFadeOut { duration: 0.5 });

        let fired = timers.fire_due(3.0);
        assert_eq!(fired.len(), 2);
        assert_eq!(fired[0], TimerAction::BeginFadeOut { duration: 0.5 });
        assert_eq!(fired[1], TimerAction::BeginFadeIn { duration: 0.3 });
    }

    #[test]
    fn test_clear() {
        let mut timers = TimerQueue::new();
        timers.schedule(1.0, TimerAction::BeginFadeOut { duration: 0.1 });
        timers.schedule(2.0, TimerAction::BeginFadeIn { duration: 0.1 });
        timers.clear();
        assert!(timers.is_empty());
    }
}
