//! Transient toast notifications that dismiss themselves.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Maximum toasts kept at once; older ones are dropped first.
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Notifications {
    items: VecDeque<Notification>,
    ttl: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        self.items.push_back(Notification {
            kind,
            message: message.into(),
            created_at: now,
        });
        while self.items.len() > MAX_VISIBLE {
            self.items.pop_front();
        }
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.push(NotificationKind::Success, message, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(NotificationKind::Error, message, now);
    }

    /// Drop every toast older than the configured lifetime.
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items
            .retain(|n| now.saturating_duration_since(n.created_at) < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_expire_after_ttl() {
        let start = Instant::now();
        let mut toasts = Notifications::new(Duration::from_secs(3));
        toasts.success("Demo data loaded successfully!", start);
        toasts.error("Analysis failed: boom", start + Duration::from_secs(2));

        toasts.expire(start + Duration::from_millis(2999));
        assert_eq!(toasts.len(), 2);

        toasts.expire(start + Duration::from_secs(3));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.latest().unwrap().kind, NotificationKind::Error);

        toasts.expire(start + Duration::from_secs(5));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let now = Instant::now();
        let mut toasts = Notifications::default();
        for i in 0..6 {
            toasts.success(format!("n{i}"), now);
        }
        assert_eq!(toasts.len(), MAX_VISIBLE);
        assert_eq!(toasts.iter().next().unwrap().message, "n2");
    }
}
