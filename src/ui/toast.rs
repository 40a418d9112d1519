// SPDX-License-Identifier: PMPL-1.0-or-later

//! Transient notification queue.
//!
//! Toasts are resolved to display text when raised, so a language toggle
//! never rewrites a notification already on screen. Each toast lives for
//! [`TOAST_TTL`] and expires on its own; nothing dismisses them manually.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, now: Instant) {
        self.toasts.push_back(Toast {
            message: message.into(),
            expires_at: now + TOAST_TTL,
        });
    }

    /// Drop everything past its expiry.
    pub fn prune(&mut self, now: Instant) {
        while matches!(self.toasts.front(), Some(t) if t.expires_at <= now) {
            self.toasts.pop_front();
        }
    }

    /// Live messages, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.toasts.iter().map(|t| t.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_ttl() {
        let start = Instant::now();
        let mut queue = ToastQueue::new();
        queue.push("Service request submitted successfully!", start);
        assert_eq!(queue.visible().count(), 1);

        queue.prune(start + TOAST_TTL - Duration::from_millis(1));
        assert_eq!(queue.visible().count(), 1);

        queue.prune(start + TOAST_TTL);
        assert!(queue.is_empty());
    }

    #[test]
    fn toasts_keep_arrival_order() {
        let start = Instant::now();
        let mut queue = ToastQueue::new();
        queue.push("first", start);
        queue.push("second", start + Duration::from_millis(10));
        let messages: Vec<&str> = queue.visible().collect();
        assert_eq!(messages, ["first", "second"]);
    }
}
