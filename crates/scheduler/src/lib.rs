//! Tick source for the game loop.
//!
//! A producer task raises a single-slot [`TickSignal`] once per period; the
//! game loop awaits it. Ticks raised while the previous one is still pending
//! are coalesced, so a slow frame never queues a burst of catch-up ticks.
//!
//! ```
//! use std::time::Duration;
//! use dino_runner_scheduler::FrameScheduler;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let scheduler = FrameScheduler::new(20, 10);
//! let signal = scheduler.signal();
//! let producer = scheduler.spawn();
//!
//! tokio::time::timeout(Duration::from_secs(1), signal.wait())
//!     .await
//!     .expect("tick");
//! producer.abort();
//! # }
//! ```

pub mod scheduler;
pub mod signal;

pub use scheduler::FrameScheduler;
pub use signal::TickSignal;
