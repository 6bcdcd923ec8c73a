//! On-screen notification board.

use tracing::debug;

use cyberstrike_core::constants::NOTIFICATION_SECS;
use cyberstrike_core::enums::NotificationLevel;
use cyberstrike_core::events::Notification;

use crate::timers::{TimerAction, TimerQueue};

/// Notifications currently shown, each with a pending expiry timer.
#[derive(Debug, Default)]
pub struct NotificationBoard {
    active: Vec<Notification>,
    next_id: u64,
}

impl NotificationBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message for a few seconds.
    pub fn push(
        &mut self,
        timers: &mut TimerQueue,
        frame: u64,
        tick: u64,
        level: NotificationLevel,
        message: impl Into<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        debug!(id, ?level, %message, "notification");
        self.active.push(Notification {
            id,
            level,
            message,
            tick,
        });
        timers.schedule(
            frame,
            NOTIFICATION_SECS,
            None,
            TimerAction::ExpireNotification(id),
        );
        id
    }

    pub fn expire(&mut self, id: u64) {
        self.active.retain(|n| n.id != id);
    }

    /// Drop every notification (their timers are cleared by the caller).
    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }
}
