use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;

/// Single-slot tick flag shared between the producer and the game loop.
#[derive(Debug, Default)]
pub struct TickSignal {
    flag: AtomicBool,
    notify: Notify,
}

impl TickSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag and wake the consumer.
    ///
    /// Returns false when the flag was already set; the tick is coalesced.
    pub fn raise(&self) -> bool {
        if self.flag.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.notify.notify_one();
        true
    }

    pub fn is_raised(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Take the flag if set.
    pub fn try_clear(&self) -> bool {
        self.flag.swap(false, Ordering::AcqRel)
    }

    /// Yield until a tick is observed, clearing it.
    pub async fn wait(&self) {
        loop {
            if self.try_clear() {
                return;
            }
            self.notify.notified().await;
        }
    }
}
