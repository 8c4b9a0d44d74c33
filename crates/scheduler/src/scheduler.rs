use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::signal::TickSignal;

/// Periodic tick producer with an adjustable period.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    signal: Arc<TickSignal>,
    period_ms: Arc<AtomicU32>,
    min_period_ms: u32,
}

impl FrameScheduler {
    /// `period_ms` is floored at `min_period_ms` (itself at least 1).
    pub fn new(period_ms: u32, min_period_ms: u32) -> Self {
        let min_period_ms = min_period_ms.max(1);
        Self {
            signal: Arc::new(TickSignal::new()),
            period_ms: Arc::new(AtomicU32::new(period_ms.max(min_period_ms))),
            min_period_ms,
        }
    }

    pub fn signal(&self) -> Arc<TickSignal> {
        Arc::clone(&self.signal)
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms.load(Ordering::Relaxed)
    }

    pub fn min_period_ms(&self) -> u32 {
        self.min_period_ms
    }

    /// Change the period; applies from the next tick. Returns the stored value.
    pub fn set_period_ms(&self, period_ms: u32) -> u32 {
        let period = period_ms.max(self.min_period_ms);
        let old = self.period_ms.swap(period, Ordering::Relaxed);
        if old != period {
            log::debug!("tick period {}ms -> {}ms", old, period);
        }
        period
    }

    /// Run the producer on the current tokio runtime.
    pub fn spawn(&self) -> JoinHandle<()> {
        let signal = Arc::clone(&self.signal);
        let period_ms = Arc::clone(&self.period_ms);
        tokio::spawn(async move {
            let mut deadline = Instant::now();
            loop {
                deadline += Duration::from_millis(u64::from(period_ms.load(Ordering::Relaxed)));
                time::sleep_until(deadline).await;
                if !signal.raise() {
                    log::trace!("tick coalesced");
                }
            }
        })
    }
}
