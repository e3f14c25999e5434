use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// How a notification goes away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// Stays until the user closes it
    Manual,
    /// Closes itself after the given delay
    After(Duration),
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    dismissal: Dismissal,
    shown_at: Instant,
}

impl Notification {
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    fn is_expired(&self, now: Instant) -> bool {
        match self.dismissal {
            Dismissal::Manual => false,
            Dismissal::After(delay) => now.saturating_duration_since(self.shown_at) >= delay,
        }
    }
}

/// Holds at most one notification. Showing a new one replaces the old one.
#[derive(Debug, Default)]
pub struct NotificationSurface {
    current: Option<Notification>,
}

impl NotificationSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>, dismissal: Dismissal) {
        let notification = Notification {
            kind,
            message: message.into(),
            dismissal,
            shown_at: Instant::now(),
        };

        if let Some(previous) = self.current.replace(notification) {
            tracing::debug!("Replacing notification: {}", previous.message);
        }
    }

    pub fn success(&mut self, message: impl Into<String>, dismissal: Dismissal) {
        self.show(NotificationKind::Success, message, dismissal);
    }

    pub fn error(&mut self, message: impl Into<String>, dismissal: Dismissal) {
        self.show(NotificationKind::Error, message, dismissal);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop an auto-dismissing notification whose delay has passed.
    /// Returns true if something was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
