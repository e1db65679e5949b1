//! Success, error and info notifications for the player.
//!
//! Screens report outcomes through the `Announcer` trait instead of drawing
//! messages themselves. The TUI uses a `ToastQueue`, which keeps each
//! message for a fixed lifetime; tests use a `RecordingAnnouncer`.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::info;

use crate::player::clock::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Surface for user-facing notifications.
pub trait Announcer {
    fn announce(&mut self, kind: ToastKind, message: &str);

    fn success(&mut self, message: &str) {
        self.announce(ToastKind::Success, message);
    }

    fn error(&mut self, message: &str) {
        self.announce(ToastKind::Error, message);
    }

    fn info(&mut self, message: &str) {
        self.announce(ToastKind::Info, message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    expires_at: Duration,
}

/// Timed toasts, newest last.
#[derive(Debug)]
pub struct ToastQueue<C: Clock> {
    clock: C,
    lifetime: Duration,
    capacity: usize,
    toasts: VecDeque<Toast>,
}

impl<C: Clock> ToastQueue<C> {
    pub const DEFAULT_CAPACITY: usize = 3;

    pub fn new(clock: C, lifetime: Duration) -> Self {
        Self {
            clock,
            lifetime,
            capacity: Self::DEFAULT_CAPACITY,
            toasts: VecDeque::new(),
        }
    }

    /// Drop expired toasts. Returns true if any were removed.
    pub fn expire(&mut self) -> bool {
        let now = self.clock.now();
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        before != self.toasts.len()
    }

    /// Toasts still showing, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        let now = self.clock.now();
        self.toasts.iter().filter(move |toast| toast.expires_at > now)
    }

    /// The newest toast still showing.
    pub fn latest(&self) -> Option<&Toast> {
        self.visible().last()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Time until the oldest toast expires.
    pub fn time_until_expiry(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.toasts
            .iter()
            .map(|toast| toast.expires_at.saturating_sub(now))
            .min()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl<C: Clock> Announcer for ToastQueue<C> {
    fn announce(&mut self, kind: ToastKind, message: &str) {
        info!(?kind, message, "toast");
        if self.toasts.len() == self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            kind,
            message: message.to_string(),
            expires_at: self.clock.now() + self.lifetime,
        });
    }
}

/// Collects announcements in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingAnnouncer {
    pub messages: Vec<(ToastKind, String)>,
}

impl RecordingAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<(ToastKind, &str)> {
        self.messages
            .last()
            .map(|(kind, message)| (*kind, message.as_str()))
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&mut self, kind: ToastKind, message: &str) {
        self.messages.push((kind, message.to_string()));
    }
}
