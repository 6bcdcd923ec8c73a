//! Deferred one-shot actions keyed by frame number.
//!
//! A timer may name an owning entity. Releasing that entity cancels its
//! timers, and tearing down the level clears the queue, so a due timer
//! never touches an object that no longer exists.

use std::collections::BTreeMap;

use hecs::Entity;

use cyberstrike_core::constants::TICK_RATE;
use cyberstrike_core::types::VisualId;

/// What happens when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Remove a short-lived effect visual.
    RemoveVisual(VisualId),
    /// Take a notification off the screen.
    ExpireNotification(u64),
    EndDamageFlash,
    /// Leave the game-over screen.
    ReturnToMenu,
    /// Finish reloading the weapon in the given slot.
    CompleteReload { weapon_index: usize },
}

/// Handle for cancelling a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId {
    due_frame: u64,
    seq: u64,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    owner: Option<Entity>,
    action: TimerAction,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: BTreeMap<TimerId, Timer>,
    next_seq: u64,
}

/// Whole frames covering `secs`, never less than one.
pub fn secs_to_frames(secs: f32) -> u64 {
    // Small slack absorbs f32 error (0.1 s must be 6 frames, not 7)
    ((secs * TICK_RATE as f32 - 1e-3).ceil() as u64).max(1)
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire `delay_secs` after frame `now`.
    pub fn schedule(
        &mut self,
        now: u64,
        delay_secs: f32,
        owner: Option<Entity>,
        action: TimerAction,
    ) -> TimerId {
        let id = TimerId {
            due_frame: now + secs_to_frames(delay_secs),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.timers.insert(id, Timer { owner, action });
        id
    }

    #[cfg(test)]
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    /// Cancel every timer owned by `entity`. Returns how many were dropped.
    pub fn cancel_owned_by(&mut self, entity: Entity) -> usize {
        let before = self.timers.len();
        self.timers.retain(|_, t| t.owner != Some(entity));
        before - self.timers.len()
    }

    /// Cancel owned timers whose action matches.
    pub fn cancel_matching(&mut self, entity: Entity, pred: impl Fn(&TimerAction) -> bool) {
        self.timers
            .retain(|_, t| !(t.owner == Some(entity) && pred(&t.action)));
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Remove and return every timer due at or before `now`, in schedule order.
    pub fn drain_due(&mut self, now: u64) -> Vec<(Option<Entity>, TimerAction)> {
        let later = self.timers.split_off(&TimerId {
            due_frame: now + 1,
            seq: 0,
        });
        let due = std::mem::replace(&mut self.timers, later);
        due.into_values().map(|t| (t.owner, t.action)).collect()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Whether an owned timer with a matching action is pending.
    pub fn has_pending(&self, entity: Entity, pred: impl Fn(&TimerAction) -> bool) -> bool {
        self.timers
            .values()
            .any(|t| t.owner == Some(entity) && pred(&t.action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecs::World;

    #[test]
    fn test_secs_to_frames() {
        assert_eq!(secs_to_frames(0.1), 6);
        assert_eq!(secs_to_frames(2.0), 120);
        assert_eq!(secs_to_frames(0.0), 1);
    }

    #[test]
    fn test_drain_due_in_order() {
        let mut q = TimerQueue::new();
        q.schedule(0, 0.5, None, TimerAction::EndDamageFlash);
        q.schedule(0, 0.1, None, TimerAction::ReturnToMenu);
        q.schedule(0, 0.1, None, TimerAction::ExpireNotification(3));

        assert!(q.drain_due(5).is_empty());
        let due = q.drain_due(6);
        assert_eq!(
            due,
            vec![
                (None, TimerAction::ReturnToMenu),
                (None, TimerAction::ExpireNotification(3))
            ]
        );
        assert_eq!(q.len(), 1);
        assert_eq!(q.drain_due(100).len(), 1);
        assert!(q.is_empty());
    }

    #[test]
    fn test_cancel_owned_by() {
        let mut world = World::new();
        let a = world.spawn(());
        let b = world.spawn(());

        let mut q = TimerQueue::new();
        q.schedule(0, 2.0, Some(a), TimerAction::CompleteReload { weapon_index: 0 });
        q.schedule(0, 2.0, Some(b), TimerAction::CompleteReload { weapon_index: 1 });
        q.schedule(0, 2.0, None, TimerAction::EndDamageFlash);

        assert!(q.has_pending(a, |t| matches!(t, TimerAction::CompleteReload { .. })));
        assert_eq!(q.cancel_owned_by(a), 1);
        assert!(!q.has_pending(a, |_| true));

        let due = q.drain_due(1000);
        assert_eq!(due.len(), 2);
        assert!(due.iter().all(|(owner, _)| *owner != Some(a)));
    }

    #[test]
    fn test_cancel_by_id_and_clear() {
        let mut q = TimerQueue::new();
        let id = q.schedule(10, 1.0, None, TimerAction::EndDamageFlash);
        q.schedule(10, 1.0, None, TimerAction::ReturnToMenu);
        assert!(q.cancel(id));
        assert!(!q.cancel(id));
        q.clear();
        assert!(q.drain_due(u64::MAX - 1).is_empty());
    }
}
