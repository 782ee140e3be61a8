//! # Notifications
//!
//! A single transient status line with a severity class, hidden after a fixed
//! interval. Only one notice is visible at a time; a new one replaces the old
//! text and restarts the interval.
//!
//! Hiding is driven by the caller rather than a background timer. A UI loop
//! either calls [`Notifier::tick`] with the current time, or schedules a
//! deferred [`Notifier::expire`] with the token returned from `notify`. A
//! token from a replaced notice no longer matches, so a late hide for an old
//! message leaves the current one alone.

use crate::commands::MessageLevel;
use std::time::{Duration, Instant};
use tracing::debug;

pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Identifies one `notify` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NoticeToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub level: MessageLevel,
    pub token: NoticeToken,
    pub shown_at: Instant,
}

impl Notice {
    /// Style class for the notice, e.g. `notification success`.
    pub fn class(&self) -> String {
        format!("notification {}", self.level.as_str())
    }
}

#[derive(Debug)]
pub struct Notifier {
    current: Option<Notice>,
    duration: Duration,
    generation: u64,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
            generation: 0,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn notify(&mut self, message: impl Into<String>, level: MessageLevel) -> NoticeToken {
        self.notify_at(message, level, Instant::now())
    }

    pub fn notify_at(
        &mut self,
        message: impl Into<String>,
        level: MessageLevel,
        now: Instant,
    ) -> NoticeToken {
        self.generation += 1;
        let token = NoticeToken(self.generation);
        let notice = Notice {
            message: message.into(),
            level,
            token,
            shown_at: now,
        };
        debug!(class = %notice.class(), message = %notice.message, "notice shown");
        self.current = Some(notice);
        token
    }

    /// The notice currently on display, ignoring the clock.
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// The notice that would be on display at `now`.
    pub fn visible_at(&self, now: Instant) -> Option<&Notice> {
        self.current
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.shown_at) < self.duration)
    }

    /// Hides the current notice if its interval has run out. Returns whether
    /// anything was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.current.is_some() && self.visible_at(now).is_none() {
            self.hide();
            return true;
        }
        false
    }

    /// Deferred hide for one specific notice. Does nothing if that notice
    /// has since been replaced.
    pub fn expire(&mut self, token: NoticeToken) -> bool {
        match &self.current {
            Some(notice) if notice.token == token => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    fn hide(&mut self) {
        if let Some(notice) = self.current.take() {
            debug!(message = %notice.message, "notice hidden");
        }
    }
}
