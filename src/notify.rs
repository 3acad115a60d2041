use crate::model::notification::Notification;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default auto-dismiss interval for a toast.
pub const DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Single-slot transient notification holder. A new notification replaces a
/// pending one and reschedules a fresh dismissal deadline; nothing queues and
/// nothing is cancelable mid-flight.
pub struct Notifier {
    slot: Mutex<Option<(Notification, Instant)>>,
    ttl: Duration,
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_ttl(DISMISS_AFTER)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slot: Mutex::new(None),
            ttl,
        }
    }

    /// Replaces whatever is pending and restarts the dismiss timer.
    pub fn notify(&self, notification: Notification) {
        debug!(kind = %notification.kind, message = %notification.message, "notification");
        let mut slot = self.slot.lock().expect("notifier lock poisoned");
        *slot = Some((notification, Instant::now() + self.ttl));
    }

    /// The active notification, or `None` once the dismiss deadline passed.
    pub fn current(&self) -> Option<Notification> {
        let mut slot = self.slot.lock().expect("notifier lock poisoned");
        match &*slot {
            Some((_, deadline)) if *deadline <= Instant::now() => {
                *slot = None;
                None
            }
            Some((notification, _)) => Some(notification.clone()),
            None => None,
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
