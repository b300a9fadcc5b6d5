//! Single-slot transient notification.
//!
//! The panel shows at most one notification at a time: a new one retires the
//! previous one immediately, and each auto-dismisses after a fixed display
//! window plus a short exit animation. Rapid calls interrupt, they never
//! stack or queue.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How long a notification stays fully visible.
pub const DISPLAY_MS: u64 = 2000;

/// Duration of the exit animation before the notification is destroyed.
pub const EXIT_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

#[derive(Debug, Default)]
struct Inner {
    slot: Mutex<Option<Notification>>,
    generation: AtomicU64,
}

/// Owner of the single notification slot.
///
/// `notify` spawns the dismiss timer on the current tokio runtime, so it must
/// be called from within one.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    inner: Arc<Inner>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display a notification, replacing any currently live one.
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        // Each notification gets a generation; the dismiss timer only clears
        // the slot if no newer notification has replaced it.
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.inner.slot.lock().unwrap() = Some(Notification { message });

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(DISPLAY_MS + EXIT_MS)).await;
            if inner.generation.load(Ordering::SeqCst) == generation {
                inner.slot.lock().unwrap().take();
            }
        });
    }

    /// The currently displayed message, if any.
    pub fn current(&self) -> Option<String> {
        self.inner
            .slot
            .lock()
            .unwrap()
            .as_ref()
            .map(|n| n.message.clone())
    }
}
